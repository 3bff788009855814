use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single task as persisted by the server.
///
/// `id`, `created_at` and `updated_at` are assigned by the store. The client only
/// ever holds copies of records it received from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ordering criterion for the list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Newest first.
    #[default]
    CreatedAt,
    /// Earliest deadline first, todos without a deadline last, newest first on ties.
    Deadline,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::CreatedAt, SortKey::Deadline];

    /// Parses the `sortBy` query value. Unknown values fall back to `CreatedAt`.
    pub fn from_param(value: &str) -> Self {
        match value {
            "deadline" => SortKey::Deadline,
            _ => SortKey::CreatedAt,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "createdAt",
            SortKey::Deadline => "deadline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "Creation Date",
            SortKey::Deadline => "Deadline",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample() -> Todo {
        Todo {
            id: "6b0f5a0e-2f55-4a4e-9d61-0c1b1f1d2a3b".to_string(),
            text: "Buy milk".to_string(),
            completed: false,
            deadline: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn serializes_with_camel_case_timestamps_and_no_deadline() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["text"], "Buy milk");
        assert_eq!(value["completed"], false);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("deadline").is_none());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn deadline_is_a_plain_date_on_the_wire() {
        let mut todo = sample();
        todo.deadline = NaiveDate::from_ymd_opt(2024, 1, 1);
        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(value["deadline"], json!("2024-01-01"));

        let back: Todo = serde_json::from_value(value).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn sort_key_parsing_defaults_to_created_at() {
        assert_eq!(SortKey::from_param("deadline"), SortKey::Deadline);
        assert_eq!(SortKey::from_param("createdAt"), SortKey::CreatedAt);
        assert_eq!(SortKey::from_param("priority"), SortKey::CreatedAt);
        assert_eq!(SortKey::from_param(""), SortKey::CreatedAt);
    }

    #[test]
    fn sort_key_param_matches_serde_name() {
        for key in SortKey::ALL {
            let encoded = serde_json::to_value(key).unwrap();
            assert_eq!(encoded, json!(key.as_param()));
            assert_eq!(SortKey::from_param(key.as_param()), key);
        }
    }
}
