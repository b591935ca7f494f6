//! # Book Model
//!
//! The stored record, the client payload it is built from, and the
//! summary projection returned by listing.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{Action, BookError, BookResult};

/// A stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    /// Always `read_page == page_count`
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a new record from a payload that passed [`BookPayload::validate`].
    pub fn from_payload(id: String, payload: BookPayload, now: DateTime<Utc>) -> Self {
        let mut book = Self {
            id,
            name: String::new(),
            year: None,
            author: None,
            summary: None,
            publisher: None,
            page_count: 0,
            read_page: 0,
            finished: false,
            reading: false,
            inserted_at: now,
            updated_at: now,
        };
        book.overwrite(payload);
        book
    }

    /// Overwrite every mutable field and refresh `updated_at`.
    ///
    /// `id` and `inserted_at` are left untouched. The new `updated_at` is
    /// strictly later than the previous one even if the clock has not moved.
    pub fn apply(&mut self, payload: BookPayload, now: DateTime<Utc>) {
        self.overwrite(payload);
        self.updated_at = later_of(now, self.updated_at);
    }

    fn overwrite(&mut self, payload: BookPayload) {
        self.name = payload.name.unwrap_or_default();
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count.unwrap_or(0);
        self.read_page = payload.read_page.unwrap_or(0);
        self.reading = payload.reading.unwrap_or(false);
        self.finished = self.read_page == self.page_count;
    }

    /// Project to the listing view
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

fn later_of(now: DateTime<Utc>, previous: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Book fields as sent by a client on create and update.
///
/// Every field is optional on the wire. Server-owned fields (`id`,
/// `finished`, timestamps) are not part of the payload and are ignored if
/// a client sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub read_page: Option<u32>,
    #[serde(default)]
    pub reading: Option<bool>,
}

impl BookPayload {
    /// Payload with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set page progress
    pub fn with_pages(mut self, page_count: u32, read_page: u32) -> Self {
        self.page_count = Some(page_count);
        self.read_page = Some(read_page);
        self
    }

    /// Set the reading flag
    pub fn with_reading(mut self, reading: bool) -> Self {
        self.reading = Some(reading);
        self
    }

    /// Set the publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    /// Check the payload can become a record.
    ///
    /// The name check runs first, so a payload failing both reports the
    /// missing name.
    pub fn validate(&self, action: Action) -> BookResult<()> {
        let has_name = self.name.as_deref().map(|name| !name.is_empty()).unwrap_or(false);
        if !has_name {
            return Err(BookError::MissingName(action));
        }

        if self.read_page.unwrap_or(0) > self.page_count.unwrap_or(0) {
            return Err(BookError::ReadPageExceedsPageCount(action));
        }

        Ok(())
    }
}

/// Listing projection of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_finished_is_derived() {
        let done = Book::from_payload("a".into(), BookPayload::named("A").with_pages(100, 100), ts(0));
        assert!(done.finished);

        let half = Book::from_payload("b".into(), BookPayload::named("B").with_pages(100, 50), ts(0));
        assert!(!half.finished);
    }

    #[test]
    fn test_missing_name_rejected() {
        assert_eq!(
            BookPayload::default().validate(Action::Add),
            Err(BookError::MissingName(Action::Add))
        );
        assert_eq!(
            BookPayload::named("").validate(Action::Add),
            Err(BookError::MissingName(Action::Add))
        );
        assert_eq!(
            BookPayload::default().validate(Action::Update),
            Err(BookError::MissingName(Action::Update))
        );
    }

    #[test]
    fn test_whitespace_name_is_present() {
        assert!(BookPayload::named("   ").validate(Action::Add).is_ok());
    }

    #[test]
    fn test_read_page_above_page_count_rejected() {
        let payload = BookPayload::named("A").with_pages(10, 11);
        assert_eq!(
            payload.validate(Action::Add),
            Err(BookError::ReadPageExceedsPageCount(Action::Add))
        );
        assert!(BookPayload::named("A").with_pages(10, 10).validate(Action::Add).is_ok());
    }

    #[test]
    fn test_name_checked_before_pages() {
        let payload = BookPayload::default().with_pages(1, 5);
        assert_eq!(
            payload.validate(Action::Add),
            Err(BookError::MissingName(Action::Add))
        );
    }

    #[test]
    fn test_apply_keeps_identity_and_advances_updated_at() {
        let mut book = Book::from_payload("id-1".into(), BookPayload::named("Old"), ts(100));

        // Clock did not move.
        book.apply(BookPayload::named("New").with_pages(20, 20), ts(100));

        assert_eq!(book.id, "id-1");
        assert_eq!(book.inserted_at, ts(100));
        assert!(book.updated_at > ts(100));
        assert_eq!(book.name, "New");
        assert!(book.finished);
    }

    #[test]
    fn test_apply_clears_fields_not_resent() {
        let mut book = Book::from_payload(
            "id-1".into(),
            BookPayload::named("Old").with_publisher("Pub").with_reading(true),
            ts(0),
        );
        book.apply(BookPayload::named("New"), ts(5));

        assert_eq!(book.publisher, None);
        assert!(!book.reading);
        assert_eq!(book.updated_at, ts(5));
    }

    #[test]
    fn test_payload_wire_format() {
        let payload: BookPayload = serde_json::from_value(json!({
            "name": "Dune",
            "year": 1965,
            "pageCount": 412,
            "readPage": 12,
            "reading": true,
            "finished": true,
            "id": "client-chosen"
        }))
        .unwrap();

        assert_eq!(payload.name.as_deref(), Some("Dune"));
        assert_eq!(payload.page_count, Some(412));
        assert_eq!(payload.read_page, Some(12));
        assert_eq!(payload.reading, Some(true));
    }

    #[test]
    fn test_negative_page_count_does_not_deserialize() {
        let result: Result<BookPayload, _> =
            serde_json::from_value(json!({ "name": "A", "pageCount": -1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_book_serializes_camel_case() {
        let book = Book::from_payload("x".into(), BookPayload::named("A").with_pages(3, 1), ts(0));
        let value = serde_json::to_value(&book).unwrap();

        assert_eq!(value["pageCount"], 3);
        assert_eq!(value["readPage"], 1);
        assert_eq!(value["finished"], false);
        assert!(value.get("insertedAt").is_some());
        assert!(value.get("updatedAt").is_some());
    }
}
