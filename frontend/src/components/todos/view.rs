//! View rendering for the todo list component: the input form, the sort
//! selector, the error banner and one row per todo (viewing or editing).

use common::model::todo::{SortKey, Todo};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::format_deadline;
use super::messages::Msg;
use super::state::{EditDraft, TodoListComponent};

pub fn view(component: &TodoListComponent, ctx: &Context<TodoListComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="todo-root">
            <h1 class="todo-title">{"📝 Todo List"}</h1>
            { build_error_banner(component, link) }
            { build_form(component, link) }
            { build_tasks_header(component, link) }
            <ul class="todo-list">
                { for component.todos.iter().map(|todo| build_row(todo, component.editing.as_ref(), link)) }
            </ul>
        </div>
    }
}

fn build_error_banner(component: &TodoListComponent, link: &Scope<TodoListComponent>) -> Html {
    match &component.error {
        Some(message) => html! {
            <div class="error-banner" role="alert">
                <span>{ message.clone() }</span>
                <button title="Dismiss" onclick={link.callback(|_| Msg::DismissError)}>{"✕"}</button>
            </div>
        },
        None => html! {},
    }
}

/// Task and deadline inputs with the "Add Todo" button.
fn build_form(component: &TodoListComponent, link: &Scope<TodoListComponent>) -> Html {
    html! {
        <div class="todo-form">
            <div class="field grow">
                <label for="task-input">{"Task"}</label>
                <input
                    id="task-input"
                    type="text"
                    placeholder="Add a new task..."
                    value={component.new_text.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetNewText(input.value())
                    })}
                />
            </div>
            <div class="field deadline">
                <label for="deadline-input">{"Deadline"}</label>
                <input
                    id="deadline-input"
                    type="date"
                    value={component.new_deadline.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetNewDeadline(input.value())
                    })}
                />
            </div>
            <button
                class="btn-add"
                disabled={component.is_adding()}
                onclick={link.callback(|_| Msg::Add)}
            >
                {"Add Todo"}
            </button>
        </div>
    }
}

fn build_tasks_header(component: &TodoListComponent, link: &Scope<TodoListComponent>) -> Html {
    html! {
        <div class="tasks-header">
            <h2>{"My Tasks"}</h2>
            <div>
                <span class="sort-label">{"Sort by:"}</span>
                <select
                    onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::Load(SortKey::from_param(&select.value()))
                    })}
                >
                    { for SortKey::ALL.iter().map(|key| html! {
                        <option value={key.as_param()} selected={*key == component.sort}>
                            { key.label() }
                        </option>
                    }) }
                </select>
            </div>
        </div>
    }
}

fn build_row(todo: &Todo, editing: Option<&EditDraft>, link: &Scope<TodoListComponent>) -> Html {
    let content = match editing {
        Some(draft) if draft.id == todo.id => build_edit_row(draft, link),
        _ => build_view_row(todo, link),
    };

    html! {
        <li key={todo.id.clone()} class="todo-item">
            { content }
        </li>
    }
}

fn build_edit_row(draft: &EditDraft, link: &Scope<TodoListComponent>) -> Html {
    html! {
        <div class="todo-edit">
            <input
                type="text"
                value={draft.text.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetEditText(input.value())
                })}
            />
            <button class="btn-save" onclick={link.callback(|_| Msg::SaveEdit)}>{"Save"}</button>
            <button class="btn-cancel" onclick={link.callback(|_| Msg::CancelEdit)}>{"Cancel"}</button>
        </div>
    }
}

fn build_view_row(todo: &Todo, link: &Scope<TodoListComponent>) -> Html {
    let edit_id = todo.id.clone();
    let delete_id = todo.id.clone();

    html! {
        <>
            <div>
                <span>{ todo.text.clone() }</span>
                {
                    match todo.deadline {
                        Some(deadline) => html! {
                            <span class="deadline-tag">{ format!("(Deadline: {})", format_deadline(deadline)) }</span>
                        },
                        None => html! {},
                    }
                }
            </div>
            <div class="todo-actions">
                <button class="btn-edit" onclick={link.callback(move |_| Msg::StartEdit(edit_id.clone()))}>
                    {"Edit"}
                </button>
                <button class="btn-delete" onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>
                    {"Delete"}
                </button>
            </div>
        </>
    }
}
