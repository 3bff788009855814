//! Types shared between the todo server and the browser client.
//!
//! Everything that crosses the wire lives here so both sides agree on the JSON
//! shape: the `Todo` record, the sort key used by the list endpoint, request and
//! response payloads, and the text validation applied before anything is stored.

pub mod model;
pub mod requests;
pub mod validation;
