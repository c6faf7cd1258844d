//! # Memory wall - a flat-file backend for a shared guest memory wall
//!
//! Guests upload photos, videos, audio, or short text messages. Every contribution is
//! kept as one record in a single JSON document, and uploaded files are stored
//! under generated names in an upload directory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create the data file and upload directory
//! memory-wall --data-file ./data/memories.json --upload-dir ./data/uploads init
//!
//! # Serve the HTTP API on port 3000
//! memory-wall serve
//!
//! # Inspect the wall from the terminal
//! memory-wall list
//! memory-wall stats
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and defaults
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (MemoryRecord, AttachedFile, MemoryCollection)
//! - [`server`]: HTTP routes and multipart upload handling
//! - [`storage`]: JSON collection file and upload directory access
//! - [`validation`]: Input validation utilities
//! - [`wall`]: Record operations shared by the HTTP and CLI surfaces

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles the optional `memory-wall.yml` file and its defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `WallError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Data models for the wall.
pub mod model;

/// HTTP server built on axum.
pub mod server;

/// File-based storage layer.
pub mod storage;

/// Input validation utilities.
///
/// Validates names, messages, and upload file extensions.
pub mod validation;

pub mod wall;
