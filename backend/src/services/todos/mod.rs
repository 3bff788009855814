//! # Todo Service Module
//!
//! All four todo endpoints share the `/api/todos` path and are told apart by the
//! HTTP method. Every handler receives the shared [`Database`] handle through
//! `web::Data`, performs exactly one store operation and answers with JSON.
//!
//! ## Sub-modules:
//! - `list`: ordered listing of every todo.
//! - `create`: validation and insertion of a new todo.
//! - `update`: validation and replacement of a todo's text.
//! - `delete`: removal of a todo by id.
//!
//! [`Database`]: crate::database::Database

mod create;
mod delete;
mod list;
mod update;

use actix_web::error::InternalError;
use actix_web::web::{self, delete, get, post, put, scope};
use actix_web::{HttpResponse, Scope};
use common::requests::ErrorResponse;
use log::warn;

/// The base path for all todo-related API endpoints.
pub const API_PATH: &str = "/api/todos";

/// Configures and returns the Actix `Scope` for the todo routes.
///
/// # Registered Routes:
///
/// *   **`GET ?sortBy=createdAt|deadline`**: `list::process`, every todo in the requested order.
/// *   **`POST`**: `create::process`, body `{ text, deadline? }`, answers with the stored todo.
/// *   **`PUT`**: `update::process`, body `{ id, text }`, answers with the updated todo or `null`.
/// *   **`DELETE`**: `delete::process`, body `{ id }`, answers `{ "message": "Todo deleted" }`.
///
/// Bodies that are not valid JSON, or larger than `max_body_bytes`, are answered
/// with `400 Bad Request` and an `ErrorResponse` body.
pub fn configure_routes(max_body_bytes: usize) -> Scope {
    scope(API_PATH)
        .app_data(json_config(max_body_bytes))
        .app_data(query_config())
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("", put().to(update::process))
        .route("", delete().to(delete::process))
}

fn json_config(max_body_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_body_bytes)
        .error_handler(|err, req| {
            warn!("Rejected {} {} body: {}", req.method(), req.path(), err);
            let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
            InternalError::from_response(err, response).into()
        })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        warn!("Rejected query string of {}: {}", req.path(), err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(err.to_string()));
        InternalError::from_response(err, response).into()
    })
}
