//! # Listing Filters
//!
//! Query parameters for `GET /books`:
//! - `name`: case-insensitive substring match
//! - `reading`: `0` or `1`
//! - `finished`: `0` or `1`
//!
//! Absent parameters do not filter, and neither do flag values other than
//! `0` and `1`. All remaining filters must match.

use serde::Deserialize;

use super::model::Book;

/// Raw query string as received
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub reading: Option<String>,
    #[serde(default)]
    pub finished: Option<String>,
}

/// Parsed listing filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Lowercased needle
    name: Option<String>,
    reading: Option<bool>,
    finished: Option<bool>,
}

impl BookFilter {
    /// Filter that matches everything
    pub fn all() -> Self {
        Self::default()
    }

    pub fn name(mut self, needle: impl AsRef<str>) -> Self {
        self.name = Some(needle.as_ref().to_lowercase());
        self
    }

    pub fn reading(mut self, reading: bool) -> Self {
        self.reading = Some(reading);
        self
    }

    pub fn finished(mut self, finished: bool) -> Self {
        self.finished = Some(finished);
        self
    }

    /// Whether the book passes every set filter
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(needle) = &self.name {
            if !book.name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(reading) = self.reading {
            if book.reading != reading {
                return false;
            }
        }
        if let Some(finished) = self.finished {
            if book.finished != finished {
                return false;
            }
        }
        true
    }
}

impl From<ListQuery> for BookFilter {
    fn from(query: ListQuery) -> Self {
        Self {
            name: query.name.map(|n| n.to_lowercase()),
            reading: parse_flag(query.reading.as_deref()),
            finished: parse_flag(query.finished.as_deref()),
        }
    }
}

fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::model::BookPayload;
    use chrono::Utc;

    fn book(name: &str, reading: bool, pages: (u32, u32)) -> Book {
        Book::from_payload(
            name.to_string(),
            BookPayload::named(name)
                .with_reading(reading)
                .with_pages(pages.0, pages.1),
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(BookFilter::all().matches(&book("A", false, (1, 0))));
    }

    #[test]
    fn test_name_is_case_insensitive_substring() {
        let filter = BookFilter::all().name("DICO");
        assert!(filter.matches(&book("Belajar Dicoding", false, (1, 0))));
        assert!(!filter.matches(&book("Rust", false, (1, 0))));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let filter = BookFilter::all().name("rust").reading(true).finished(false);
        assert!(filter.matches(&book("Rust Book", true, (10, 3))));
        assert!(!filter.matches(&book("Rust Book", false, (10, 3))));
        assert!(!filter.matches(&book("Rust Book", true, (10, 10))));
        assert!(!filter.matches(&book("Go Book", true, (10, 3))));
    }

    #[test]
    fn test_parse_query() {
        let query = ListQuery {
            name: Some("Foo".into()),
            reading: Some("1".into()),
            finished: Some("0".into()),
        };
        let filter = BookFilter::from(query);
        assert_eq!(filter, BookFilter::all().name("foo").reading(true).finished(false));
    }

    #[test]
    fn test_unrecognised_flag_values_do_not_filter() {
        for raw in ["yes", "true", "2", ""] {
            let query = ListQuery {
                reading: Some(raw.into()),
                finished: Some(raw.into()),
                ..Default::default()
            };
            assert_eq!(BookFilter::from(query), BookFilter::all(), "value {:?}", raw);
        }
    }
}
