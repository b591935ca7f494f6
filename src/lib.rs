//! bookshelf - A small in-memory bookshelf HTTP API
//!
//! Create, list, fetch, update and delete book records over `/books`.

pub mod books;
pub mod cli;
pub mod http_server;
pub mod observability;
