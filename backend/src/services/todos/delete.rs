use crate::database::Database;
use crate::error::AppError;
use actix_web::{web, HttpResponse};
use common::requests::{DeleteTodoRequest, MessageResponse};
use log::info;

/// Actix web handler for `DELETE /api/todos`.
///
/// Always confirms with `{ "message": "Todo deleted" }`, whether or not the id matched.
pub async fn process(
    db: web::Data<Database>,
    payload: web::Json<DeleteTodoRequest>,
) -> Result<HttpResponse, AppError> {
    if db.delete_todo(&payload.id)? {
        info!("Deleted todo {}", payload.id);
    } else {
        info!("Delete requested for unknown todo {}", payload.id);
    }
    Ok(HttpResponse::Ok().json(MessageResponse::todo_deleted()))
}
