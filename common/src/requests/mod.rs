//! Request and response payloads of the `/api/todos` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/todos`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ListTodosQuery {
    #[serde(rename = "sortBy", default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

/// Body of `POST /api/todos`.
///
/// `text` is optional at the decoding level so that a missing field is reported
/// by validation with a readable message instead of a JSON decoding error.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// Body of `PUT /api/todos`. Only the text of a todo can be changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Body of `DELETE /api/todos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTodoRequest {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Confirmation returned by every delete, whether or not a todo matched.
    pub fn todo_deleted() -> Self {
        Self {
            message: "Todo deleted".to_string(),
        }
    }
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreateTodoRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.text.is_none());
        assert!(req.deadline.is_none());

        let req: CreateTodoRequest =
            serde_json::from_value(json!({ "text": "Pay rent", "deadline": "2024-01-01" })).unwrap();
        assert_eq!(req.text.as_deref(), Some("Pay rent"));
        assert_eq!(req.deadline, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn create_request_omits_absent_deadline() {
        let req = CreateTodoRequest {
            text: Some("Buy milk".into()),
            deadline: None,
        };
        assert_eq!(serde_json::to_value(req).unwrap(), json!({ "text": "Buy milk" }));
    }

    #[test]
    fn list_query_uses_sort_by_name() {
        let query = ListTodosQuery {
            sort_by: Some("deadline".into()),
        };
        assert_eq!(serde_json::to_value(query).unwrap(), json!({ "sortBy": "deadline" }));
    }

    #[test]
    fn delete_confirmation_message() {
        assert_eq!(
            serde_json::to_value(MessageResponse::todo_deleted()).unwrap(),
            json!({ "message": "Todo deleted" })
        );
    }
}
