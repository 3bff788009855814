//! Todo store: one SQL statement per operation.

use super::Database;
use crate::error::AppError;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use common::model::todo::{SortKey, Todo};
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

const COLUMNS: &str = "id, text, completed, deadline, created_at, updated_at";
const DEADLINE_FORMAT: &str = "%Y-%m-%d";

impl Database {
    /// Returns every todo in the order requested by `sort`.
    ///
    /// `rowid DESC` is the last tie breaker so that records created within the
    /// same microsecond still come back newest first.
    pub fn list_todos(&self, sort: SortKey) -> Result<Vec<Todo>, AppError> {
        let order = match sort {
            SortKey::CreatedAt => "created_at DESC, rowid DESC",
            SortKey::Deadline => "deadline IS NULL, deadline ASC, created_at DESC, rowid DESC",
        };
        let sql = format!("SELECT {} FROM todos ORDER BY {}", COLUMNS, order);

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let todos = stmt
            .query_map([], todo_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    /// Inserts a new, not yet completed todo and returns the stored record.
    pub fn insert_todo(&self, text: &str, deadline: Option<NaiveDate>) -> Result<Todo, AppError> {
        let id = Uuid::new_v4().to_string();
        let now = timestamp(Utc::now());
        let deadline = deadline.map(|d| d.format(DEADLINE_FORMAT).to_string());

        let conn = self.lock()?;
        let todo = conn.query_row(
            &format!(
                "INSERT INTO todos (id, text, completed, deadline, created_at, updated_at)
                 VALUES (?1, ?2, 0, ?3, ?4, ?4)
                 RETURNING {}",
                COLUMNS
            ),
            params![&id, text, &deadline, &now],
            todo_from_row,
        )?;
        Ok(todo)
    }

    /// Replaces the text of the todo `id`. `None` when no such todo exists.
    pub fn update_todo_text(&self, id: &str, text: &str) -> Result<Option<Todo>, AppError> {
        let now = timestamp(Utc::now());

        let conn = self.lock()?;
        let todo = conn
            .query_row(
                &format!(
                    "UPDATE todos SET text = ?1, updated_at = ?2 WHERE id = ?3 RETURNING {}",
                    COLUMNS
                ),
                params![text, &now, id],
                todo_from_row,
            )
            .optional()?;
        Ok(todo)
    }

    /// Removes the todo `id`. Returns whether a record was actually deleted.
    pub fn delete_todo(&self, id: &str) -> Result<bool, AppError> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}

/// Fixed-width RFC 3339 so that string order in SQLite equals time order.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn todo_from_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
    let deadline: Option<String> = row.get(3)?;
    let deadline = deadline
        .map(|raw| {
            NaiveDate::parse_from_str(&raw, DEADLINE_FORMAT)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))
        })
        .transpose()?;

    Ok(Todo {
        id: row.get(0)?,
        text: row.get(1)?,
        completed: row.get(2)?,
        deadline,
        created_at: parse_timestamp(row, 4)?,
        updated_at: parse_timestamp(row, 5)?,
    })
}

fn parse_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
