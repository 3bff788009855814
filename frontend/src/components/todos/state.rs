//! Component state and the local list transitions.
//!
//! The list held here is a copy of what the server returned; every mutation
//! applies a record or id that came back from a successful API call. Edit mode is
//! tracked per component, so starting an edit on another row replaces the draft.

use common::model::todo::{SortKey, Todo};
use common::requests::{CreateTodoRequest, UpdateTodoRequest};
use common::validation::{validate_deadline, validate_text};

use super::helpers::parse_deadline_input;

/// Row currently being edited inline.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub id: String,
    pub text: String,
}

/// Inputs as they were when a create request was sent.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAdd {
    pub text: String,
    pub deadline: String,
}

pub struct TodoListComponent {
    /// Todos in the order they are displayed.
    pub todos: Vec<Todo>,

    /// Order of the last requested listing.
    pub sort: SortKey,

    /// Pending text of the "Task" input.
    pub new_text: String,

    /// Raw value of the "Deadline" date input, empty when unset.
    pub new_deadline: String,

    /// Set while a create request is in flight.
    pub pending_add: Option<PendingAdd>,

    pub editing: Option<EditDraft>,

    /// Message shown in the error banner until dismissed or replaced.
    pub error: Option<String>,

    /// Guard for the first-render load.
    pub loaded: bool,
}

impl TodoListComponent {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            sort: SortKey::CreatedAt,
            new_text: String::new(),
            new_deadline: String::new(),
            pending_add: None,
            editing: None,
            error: None,
            loaded: false,
        }
    }

    /// Replaces the list with a fresh listing. Listings for a sort key that is
    /// no longer selected are dropped; returns whether the list was replaced.
    pub fn replace_all(&mut self, sort: SortKey, todos: Vec<Todo>) -> bool {
        if sort != self.sort {
            return false;
        }
        self.todos = todos;
        true
    }

    /// Whether a failed listing for `sort` should still be reported.
    pub fn is_current_sort(&self, sort: SortKey) -> bool {
        sort == self.sort
    }

    pub fn is_adding(&self) -> bool {
        self.pending_add.is_some()
    }

    /// Builds the create request from the inputs, or the message to show.
    pub fn new_todo_request(&self) -> Result<CreateTodoRequest, String> {
        let text = validate_text(Some(self.new_text.as_str())).map_err(|e| format!("Task {}", e))?;
        let deadline = parse_deadline_input(&self.new_deadline)?;
        let deadline = validate_deadline(deadline).map_err(|e| format!("Invalid {}", e))?;
        Ok(CreateTodoRequest {
            text: Some(text.to_string()),
            deadline,
        })
    }

    /// Marks a create request as in flight and returns it. `Ok(None)` while an
    /// earlier one has not been answered yet.
    pub fn start_add(&mut self) -> Result<Option<CreateTodoRequest>, String> {
        if self.is_adding() {
            return Ok(None);
        }
        let request = self.new_todo_request()?;
        self.pending_add = Some(PendingAdd {
            text: self.new_text.clone(),
            deadline: self.new_deadline.clone(),
        });
        Ok(Some(request))
    }

    /// Puts a freshly created todo on top. The inputs are cleared unless the
    /// user changed them while the request was in flight.
    pub fn prepend(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
        if let Some(sent) = self.pending_add.take() {
            if sent.text == self.new_text && sent.deadline == self.new_deadline {
                self.new_text.clear();
                self.new_deadline.clear();
            }
        }
    }

    pub fn abort_add(&mut self) {
        self.pending_add = None;
    }

    pub fn begin_edit(&mut self, id: &str) {
        if let Some(todo) = self.todos.iter().find(|t| t.id == id) {
            self.editing = Some(EditDraft {
                id: todo.id.clone(),
                text: todo.text.clone(),
            });
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The update request for the current draft. `None` when nothing is being edited.
    pub fn edit_request(&self) -> Option<Result<UpdateTodoRequest, String>> {
        let draft = self.editing.as_ref()?;
        Some(
            validate_text(Some(draft.text.as_str()))
                .map(|text| UpdateTodoRequest {
                    id: draft.id.clone(),
                    text: Some(text.to_string()),
                })
                .map_err(|e| format!("Task {}", e)),
        )
    }

    /// Applies the record returned by the server and leaves edit mode for it.
    pub fn apply_update(&mut self, updated: Todo) {
        if self.editing.as_ref().is_some_and(|d| d.id == updated.id) {
            self.editing = None;
        }
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.todos.retain(|t| t.id != id);
        if self.editing.as_ref().is_some_and(|d| d.id == id) {
            self.editing = None;
        }
    }
}
