//! boil is a project scaffolding tool.
//! It fetches a single-file `.hsfiles` template from disk or over HTTP, asks for
//! the values of its `{{variables}}` and writes the resulting project tree.

/// Command-line interface module for the boil application
pub mod cli;

/// Error types and handling for the boil application
pub mod error;

/// Filesystem capabilities
pub mod filesystem;

/// End-to-end generation pipeline
pub mod generate;

/// Template fetching from local files and URLs
pub mod loader;

/// Logger setup for the binary
pub mod logger;

/// Writing a parsed template to a new project directory
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Placeholder substitution
pub mod renderer;

/// Variable value resolution
pub mod resolver;

/// The `.hsfiles` template format and its parser
pub mod template;
