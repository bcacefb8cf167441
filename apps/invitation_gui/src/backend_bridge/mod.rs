//! Bridge between the egui thread and the tokio runtime that owns the controllers.

pub mod commands;
pub mod runtime;
