//! Update function for the todo list component.
//!
//! Elm-style: mutate the state for `msg`, possibly start an API call whose
//! outcome comes back as another message, and report whether to re-render.
//! Local state only changes once the server has confirmed an operation; every
//! failure is shown in the error banner, except a failed listing for a sort
//! order the user has already moved away from.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::api;
use super::messages::Msg;
use super::state::TodoListComponent;

pub fn update(component: &mut TodoListComponent, ctx: &Context<TodoListComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load(sort) => {
            component.sort = sort;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_todos(sort).await {
                    Ok(todos) => link.send_message(Msg::Loaded { sort, todos }),
                    Err(e) => link.send_message(Msg::LoadFailed {
                        sort,
                        message: format!("Could not load todos: {}", e),
                    }),
                }
            });
            true
        }
        Msg::Loaded { sort, todos } => component.replace_all(sort, todos),
        Msg::LoadFailed { sort, message } => {
            error!(message.as_str());
            if !component.is_current_sort(sort) {
                return false;
            }
            component.error = Some(message);
            true
        }
        Msg::SetNewText(text) => {
            component.new_text = text;
            true
        }
        Msg::SetNewDeadline(deadline) => {
            component.new_deadline = deadline;
            true
        }
        Msg::Add => {
            let request = match component.start_add() {
                Ok(Some(request)) => request,
                Ok(None) => return false,
                Err(message) => {
                    component.error = Some(message);
                    return true;
                }
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::create_todo(&request).await {
                    Ok(todo) => link.send_message(Msg::Created(todo)),
                    Err(e) => link.send_message(Msg::AddFailed(format!("Could not add todo: {}", e))),
                }
            });
            true
        }
        Msg::Created(todo) => {
            component.prepend(todo);
            component.error = None;
            true
        }
        Msg::AddFailed(message) => {
            error!(message.as_str());
            component.abort_add();
            component.error = Some(message);
            true
        }
        Msg::StartEdit(id) => {
            component.begin_edit(&id);
            true
        }
        Msg::SetEditText(text) => {
            if let Some(draft) = &mut component.editing {
                draft.text = text;
            }
            true
        }
        Msg::SaveEdit => {
            let request = match component.edit_request() {
                Some(Ok(request)) => request,
                Some(Err(message)) => {
                    component.error = Some(message);
                    return true;
                }
                None => return false,
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api::update_todo(&request).await;
                match outcome {
                    Ok(Some(todo)) => link.send_message(Msg::Updated(todo)),
                    Ok(None) => link.send_message(Msg::Vanished(request.id)),
                    Err(e) => link.send_message(Msg::Failed(format!("Could not save todo: {}", e))),
                }
            });
            false
        }
        Msg::CancelEdit => {
            component.cancel_edit();
            true
        }
        Msg::Updated(todo) => {
            component.apply_update(todo);
            component.error = None;
            true
        }
        Msg::Vanished(id) => {
            component.remove(&id);
            component.error = Some("This todo no longer exists; it was removed from the list.".to_string());
            true
        }
        Msg::Delete(id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = api::delete_todo(&id).await;
                match outcome {
                    Ok(_) => link.send_message(Msg::Deleted(id)),
                    Err(e) => link.send_message(Msg::Failed(format!("Could not delete todo: {}", e))),
                }
            });
            false
        }
        Msg::Deleted(id) => {
            component.remove(&id);
            true
        }
        Msg::Failed(message) => {
            error!(message.as_str());
            component.error = Some(message);
            true
        }
        Msg::DismissError => {
            component.error = None;
            true
        }
    }
}
