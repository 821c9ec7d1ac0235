//! Error handling for boil.
//! Defines the error type shared by every stage of the generation pipeline.

use std::io;
use thiserror::Error;

/// Errors that can occur while fetching, resolving or materializing a template.
///
/// Stage-specific variants carry enough context to be shown to the user as-is.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Failed to fetch template from URL: invalid URL '{url}': {reason}")]
    InvalidUrlError { url: String, reason: String },

    /// The HTTP request could not be performed or its body could not be read
    #[error("Failed to fetch template from URL: {reason}")]
    NetworkError { reason: String },

    /// The server answered with a non-success status code
    #[error("HTTP {status}: {status_text}")]
    HttpStatusError { status: u16, status_text: String },

    #[error("Failed to read template file: {source}")]
    ReadTemplateError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The template parsed fine but contains no `START_FILE` sections
    #[error("No files found in template")]
    EmptyTemplateError,

    /// Answers passed through stdin are not a JSON object
    #[error("Invalid answers: {0}.")]
    AnswersError(#[from] serde_json::Error),

    #[error("Error prompting variable '{variable}', {source}")]
    PromptError {
        variable: String,
        #[source]
        source: io::Error,
    },

    /// The project directory is never merged into or overwritten
    #[error("The directory {output_dir} already exists")]
    OutputDirectoryExistsError { output_dir: String },

    #[error("Error creating {path} {source}")]
    CreateDirError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error writing {path} {source}")]
    WriteFileError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Represents errors that occur while building a substitution pattern
    #[error("Template error: {0}.")]
    RenderError(#[from] regex::Error),
}

/// Convenience type alias for Results with boil's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
