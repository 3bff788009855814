use crate::database::Database;
use crate::error::AppError;
use actix_web::{web, HttpResponse};
use common::model::todo::SortKey;
use common::requests::ListTodosQuery;
use log::debug;

/// Actix web handler for `GET /api/todos?sortBy=...`.
///
/// A missing or unknown `sortBy` lists by creation time, newest first.
pub async fn process(
    db: web::Data<Database>,
    query: web::Query<ListTodosQuery>,
) -> Result<HttpResponse, AppError> {
    let sort = query
        .sort_by
        .as_deref()
        .map(SortKey::from_param)
        .unwrap_or_default();

    let todos = db.list_todos(sort)?;
    debug!("Listed {} todos by {}", todos.len(), sort.as_param());
    Ok(HttpResponse::Ok().json(todos))
}
