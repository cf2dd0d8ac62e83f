//! Command handlers
//!
//! Each handler runs one use case against an [`AppRuntime`](crate::AppRuntime)
//! and returns the text to print.

pub mod error;
pub mod page;
pub mod settings;
pub mod targets;
pub mod widget;

pub use error::{CommandError, CommandResult};
