//! # Book Store
//!
//! Storage seam for book records. The service only talks to [`BookStore`],
//! so a persistent backend can replace [`InMemoryBookStore`].

use std::sync::{Mutex, MutexGuard};

use super::errors::{BookError, BookResult};
use super::filter::BookFilter;
use super::model::Book;

/// Backend trait for book storage
///
/// Every method is one atomic step over the collection. Iteration order is
/// insertion order.
pub trait BookStore: Send + Sync + std::fmt::Debug {
    /// Append a record. Fails if the id is already taken.
    fn insert(&self, book: Book) -> BookResult<()>;

    /// Check whether a record with this id exists
    fn contains(&self, id: &str) -> BookResult<bool>;

    /// Records matching the filter, in insertion order
    fn list(&self, filter: &BookFilter) -> BookResult<Vec<Book>>;

    /// Fetch a record by id
    fn get(&self, id: &str) -> BookResult<Option<Book>>;

    /// Mutate a record in place, returning the new state
    fn modify(&self, id: &str, apply: &mut dyn FnMut(&mut Book)) -> BookResult<Option<Book>>;

    /// Remove a record, returning it
    fn remove(&self, id: &str) -> BookResult<Option<Book>>;

    /// Number of records
    fn len(&self) -> BookResult<usize>;

    fn is_empty(&self) -> BookResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// In-memory store: a vector behind one lock
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    books: Mutex<Vec<Book>>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn books(&self) -> BookResult<MutexGuard<'_, Vec<Book>>> {
        self.books
            .lock()
            .map_err(|_| BookError::Internal("book store lock poisoned".to_string()))
    }
}

impl BookStore for InMemoryBookStore {
    fn insert(&self, book: Book) -> BookResult<()> {
        let mut books = self.books()?;
        if books.iter().any(|b| b.id == book.id) {
            return Err(BookError::Internal(format!("duplicate book id {}", book.id)));
        }
        books.push(book);
        Ok(())
    }

    fn contains(&self, id: &str) -> BookResult<bool> {
        Ok(self.books()?.iter().any(|b| b.id == id))
    }

    fn list(&self, filter: &BookFilter) -> BookResult<Vec<Book>> {
        Ok(self
            .books()?
            .iter()
            .filter(|b| filter.matches(b))
            .cloned()
            .collect())
    }

    fn get(&self, id: &str) -> BookResult<Option<Book>> {
        Ok(self.books()?.iter().find(|b| b.id == id).cloned())
    }

    fn modify(&self, id: &str, apply: &mut dyn FnMut(&mut Book)) -> BookResult<Option<Book>> {
        let mut books = self.books()?;
        Ok(books.iter_mut().find(|b| b.id == id).map(|book| {
            apply(book);
            book.clone()
        }))
    }

    fn remove(&self, id: &str) -> BookResult<Option<Book>> {
        let mut books = self.books()?;
        // Vec::remove keeps the relative order of the rest
        Ok(books
            .iter()
            .position(|b| b.id == id)
            .map(|index| books.remove(index)))
    }

    fn len(&self) -> BookResult<usize> {
        Ok(self.books()?.len())
    }
}
