//! # Books Module
//!
//! In-memory book repository service.
//!
//! A book is created from a [`BookPayload`], which must carry a non-empty
//! name and must not have `readPage` above `pageCount`. The store keeps
//! records in insertion order and `finished` is always derived from the
//! page counts.

pub mod errors;
pub mod filter;
pub mod model;
pub mod service;
pub mod store;

pub use errors::{Action, BookError, BookResult};
pub use filter::{BookFilter, ListQuery};
pub use model::{Book, BookPayload, BookSummary};
pub use service::BookService;
pub use store::{BookStore, InMemoryBookStore};
