//! Todo list server: configuration, persistence connector and the `/api/todos` endpoints.
//!
//! The binary in `main.rs` wires these together with the embedded client UI.

pub mod config;
pub mod database;
pub mod error;
pub mod services;
