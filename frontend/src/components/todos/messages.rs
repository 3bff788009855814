use common::model::todo::{SortKey, Todo};

pub enum Msg {
    /// Fetch the whole list in the given order.
    Load(SortKey),
    Loaded { sort: SortKey, todos: Vec<Todo> },
    LoadFailed { sort: SortKey, message: String },
    SetNewText(String),
    SetNewDeadline(String),
    Add,
    Created(Todo),
    AddFailed(String),
    StartEdit(String),
    SetEditText(String),
    SaveEdit,
    CancelEdit,
    Updated(Todo),
    /// The server no longer knows the todo with this id.
    Vanished(String),
    Delete(String),
    Deleted(String),
    Failed(String),
    DismissError,
}
