//! # Response Envelope
//!
//! Every route answers with `{status, message?, data?}`.

use serde::Serialize;

use crate::books::{Book, BookSummary};

/// Outcome marker in the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    /// Any error, client or server
    Fail,
}

/// Standard response body
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize = ()> {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Success carrying data
    pub fn success(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Envelope<()> {
    /// Success with a message only
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// `data` of a create response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    pub book_id: String,
}

/// `data` of a list response
#[derive(Debug, Clone, Serialize)]
pub struct BooksData {
    pub books: Vec<BookSummary>,
}

/// `data` of a get response
#[derive(Debug, Clone, Serialize)]
pub struct BookData {
    pub book: Book,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_omits_data() {
        let json = serde_json::to_value(Envelope::fail("nope")).unwrap();
        assert_eq!(json["status"], "fail");
        assert_eq!(json["message"], "nope");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_success_with_data() {
        let body = Envelope::success(BookIdData {
            book_id: "abc".into(),
        })
        .with_message("Book added successfully");
        let json = serde_json::to_value(body).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["bookId"], "abc");
        assert_eq!(json["message"], "Book added successfully");
    }

    #[test]
    fn test_success_without_message() {
        let json = serde_json::to_value(Envelope::success(BooksData { books: vec![] })).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["data"]["books"], serde_json::json!([]));
    }
}
