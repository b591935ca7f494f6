//! # Book Service
//!
//! Validation and stamping rules on top of a [`BookStore`]. Handlers hold
//! a cloned [`BookService`]; all clones share the same store.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use super::errors::{Action, BookError, BookResult};
use super::filter::BookFilter;
use super::model::{Book, BookPayload, BookSummary};
use super::store::{BookStore, InMemoryBookStore};

/// Book repository service
#[derive(Debug, Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    /// Service backed by an empty in-memory store
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryBookStore::new()))
    }

    /// Service backed by the given store
    pub fn with_store(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// In-memory service preloaded with `seed`, in order.
    ///
    /// Fails on the first invalid payload.
    pub fn seeded(seed: Vec<BookPayload>) -> BookResult<Self> {
        let service = Self::in_memory();
        for payload in seed {
            service.create(payload)?;
        }
        Ok(service)
    }

    /// Validate and append a new book, returning its id
    pub fn create(&self, payload: BookPayload) -> BookResult<String> {
        payload.validate(Action::Add)?;

        let id = Uuid::new_v4().to_string();
        let book = Book::from_payload(id.clone(), payload, Utc::now());
        self.store.insert(book)?;

        if !self.store.contains(&id)? {
            return Err(BookError::InsertionFailed);
        }

        info!(book_id = %id, "book added");
        Ok(id)
    }

    /// Summaries of books matching the filter, in insertion order
    pub fn list(&self, filter: &BookFilter) -> BookResult<Vec<BookSummary>> {
        let books = self.store.list(filter)?;
        debug!(count = books.len(), "books listed");
        Ok(books.iter().map(Book::summary).collect())
    }

    /// Full record by id
    pub fn get(&self, id: &str) -> BookResult<Book> {
        self.store
            .get(id)?
            .ok_or(BookError::NotFound(Action::Get))
    }

    /// Overwrite a book's mutable fields
    pub fn update(&self, id: &str, payload: BookPayload) -> BookResult<Book> {
        payload.validate(Action::Update)?;

        let now = Utc::now();
        let mut payload = Some(payload);
        let updated = self.store.modify(id, &mut |book| {
            if let Some(payload) = payload.take() {
                book.apply(payload, now);
            }
        })?;

        match updated {
            Some(book) => {
                info!(book_id = %id, "book updated");
                Ok(book)
            }
            None => Err(BookError::NotFound(Action::Update)),
        }
    }

    /// Remove a book
    pub fn delete(&self, id: &str) -> BookResult<()> {
        match self.store.remove(id)? {
            Some(_) => {
                info!(book_id = %id, "book deleted");
                Ok(())
            }
            None => Err(BookError::NotFound(Action::Delete)),
        }
    }

    /// Number of stored books
    pub fn len(&self) -> BookResult<usize> {
        self.store.len()
    }

    pub fn is_empty(&self) -> BookResult<bool> {
        self.store.is_empty()
    }
}

impl Default for BookService {
    fn default() -> Self {
        Self::in_memory()
    }
}
