//! # Bookshelf HTTP Server Module
//!
//! Axum server exposing the book repository service.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/books` - Create and list books
//! - `/books/:id` - Get, update and delete one book

pub mod book_routes;
pub mod config;
pub mod observability_routes;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use response::{Envelope, ResponseStatus};
pub use server::HttpServer;
