//! # sr-host
//!
//! Adapter layer: configuration loading, tracing, dependency wiring, command
//! handlers and page attachment rendering.

pub mod bootstrap;
pub mod commands;
pub mod render;

pub use bootstrap::{load_config, AppConfig, AppPaths, AppRuntime};
pub use commands::CommandError;
