//! Book HTTP Routes
//!
//! `/books` CRUD endpoints over the shared [`BookService`].

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::books::{BookError, BookFilter, BookPayload, BookService, ListQuery};

use super::response::{BookData, BookIdData, BooksData, Envelope};

type ApiResult<T> = Result<T, BookError>;

/// Create book routes
pub fn book_routes(service: BookService) -> Router {
    Router::new()
        .route("/books", post(add_book_handler).get(list_books_handler))
        .route(
            "/books/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .with_state(service)
}

fn json_body(body: Result<Json<BookPayload>, JsonRejection>) -> ApiResult<BookPayload> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| BookError::InvalidBody(rejection.body_text()))
}

async fn add_book_handler(
    State(service): State<BookService>,
    body: Result<Json<BookPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Envelope<BookIdData>>)> {
    let payload = json_body(body)?;
    let book_id = service.create(payload)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::success(BookIdData { book_id }).with_message("Book added successfully")),
    ))
}

async fn list_books_handler(
    State(service): State<BookService>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Envelope<BooksData>>> {
    // Listing never fails on query content; an unreadable query filters nothing.
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let filter = BookFilter::from(query);
    let books = service.list(&filter)?;

    Ok(Json(Envelope::success(BooksData { books })))
}

async fn get_book_handler(
    State(service): State<BookService>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope<BookData>>> {
    let book = service.get(&id)?;
    Ok(Json(Envelope::success(BookData { book })))
}

async fn update_book_handler(
    State(service): State<BookService>,
    Path(id): Path<String>,
    body: Result<Json<BookPayload>, JsonRejection>,
) -> ApiResult<Json<Envelope>> {
    let payload = json_body(body)?;
    service.update(&id, payload)?;
    Ok(Json(Envelope::done("Book updated successfully")))
}

async fn delete_book_handler(
    State(service): State<BookService>,
    Path(id): Path<String>,
) -> ApiResult<Json<Envelope>> {
    service.delete(&id)?;
    Ok(Json(Envelope::done("Book deleted successfully")))
}
