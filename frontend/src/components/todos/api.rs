//! Calls to the `/api/todos` endpoints.
//!
//! Every call checks the HTTP status before the body is used. Non-2xx answers
//! are turned into an [`ApiError`] carrying the server's `ErrorResponse` message
//! when one was sent.

use common::model::todo::{SortKey, Todo};
use common::requests::{
    CreateTodoRequest, DeleteTodoRequest, ErrorResponse, MessageResponse, UpdateTodoRequest,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

const API_PATH: &str = "/api/todos";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("could not encode the request: {0}")]
    Encode(String),
    #[error("{0}")]
    Rejected(String),
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

pub async fn fetch_todos(sort: SortKey) -> Result<Vec<Todo>, ApiError> {
    let response = Request::get(&list_url(sort))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn create_todo(request: &CreateTodoRequest) -> Result<Todo, ApiError> {
    let response = Request::post(API_PATH)
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// `Ok(None)` when the todo does not exist (anymore).
pub async fn update_todo(request: &UpdateTodoRequest) -> Result<Option<Todo>, ApiError> {
    let response = Request::put(API_PATH)
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn delete_todo(id: &str) -> Result<MessageResponse, ApiError> {
    let request = DeleteTodoRequest { id: id.to_string() };
    let response = Request::delete(API_PATH)
        .json(&request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

fn list_url(sort: SortKey) -> String {
    format!("{}?sortBy={}", API_PATH, sort.as_param())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => response.status_text(),
        };
        return Err(error_for_status(response.status(), message));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn error_for_status(status: u16, message: String) -> ApiError {
    if (400..500).contains(&status) {
        ApiError::Rejected(message)
    } else {
        ApiError::Server { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_carries_the_sort_key() {
        assert_eq!(list_url(SortKey::CreatedAt), "/api/todos?sortBy=createdAt");
        assert_eq!(list_url(SortKey::Deadline), "/api/todos?sortBy=deadline");
    }

    #[test]
    fn client_errors_are_rejections_and_the_rest_server_errors() {
        assert_eq!(
            error_for_status(400, "text must not be blank".into()),
            ApiError::Rejected("text must not be blank".into())
        );
        assert_eq!(
            error_for_status(500, "internal server error".into()).to_string(),
            "server error 500: internal server error"
        );
    }
}
