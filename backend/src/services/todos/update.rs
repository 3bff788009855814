use crate::database::Database;
use crate::error::AppError;
use actix_web::{web, HttpResponse};
use common::model::todo::Todo;
use common::requests::UpdateTodoRequest;
use common::validation::validate_text;
use log::{info, warn};

/// Actix web handler for `PUT /api/todos`.
///
/// Only the text is replaced; `deadline` and `completed` are left as they are.
/// An `id` that matches nothing is answered with `200 OK` and a `null` body.
pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<UpdateTodoRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = update_todo(&db, &payload)?;
    Ok(HttpResponse::Ok().json(updated))
}

pub fn update_todo(db: &Database, payload: &UpdateTodoRequest) -> Result<Option<Todo>, AppError> {
    let text = validate_text(payload.text.as_deref()).map_err(|e| {
        warn!("Rejected update of todo {}: {}", payload.id, e);
        AppError::from(e)
    })?;

    let updated = db.update_todo_text(&payload.id, text)?;
    match &updated {
        Some(todo) => info!("Updated todo {}", todo.id),
        None => info!("Update skipped, no todo {}", payload.id),
    }
    Ok(updated)
}
