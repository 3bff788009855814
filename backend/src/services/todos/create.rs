use crate::database::Database;
use crate::error::AppError;
use actix_web::{web, HttpResponse};
use common::model::todo::Todo;
use common::requests::CreateTodoRequest;
use common::validation::{validate_deadline, validate_text};
use log::{info, warn};

/// Actix web handler for `POST /api/todos`.
///
/// # Returns
/// - `200 OK` with the stored `Todo`, including its assigned `id`.
/// - `400 Bad Request` when `text` is missing or blank, or the deadline year
///   is outside 0000-9999.
/// - `500 Internal Server Error` when the store fails.
pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<CreateTodoRequest>,
) -> Result<HttpResponse, AppError> {
    let todo = create_todo(&db, &payload)?;
    Ok(HttpResponse::Ok().json(todo))
}

/// Validates the request and inserts the todo.
pub fn create_todo(db: &Database, payload: &CreateTodoRequest) -> Result<Todo, AppError> {
    let text = validate_text(payload.text.as_deref()).map_err(|e| {
        warn!("Rejected new todo: {}", e);
        AppError::from(e)
    })?;

    let deadline = validate_deadline(payload.deadline).map_err(|e| {
        warn!("Rejected new todo: {}", e);
        AppError::from(e)
    })?;

    let todo = db.insert_todo(text, deadline)?;
    info!("Created todo {}", todo.id);
    Ok(todo)
}
