//! Command-line interface: argument definitions and their handlers.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
