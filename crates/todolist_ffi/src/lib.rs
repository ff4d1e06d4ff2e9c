//! Flutter bridge crate for the todo list core.

pub mod api;
