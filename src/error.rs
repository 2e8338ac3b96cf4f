//! # Error Types
//!
//! The conversion itself never fails: unrecognized project lines are skipped and a
//! missing tempo falls back to the default. Errors only show up at the edges, when a
//! file has to be read or written or when user supplied settings cannot be resolved.
//!
//! ## Error Types
//! - `Io` - Reading the project/settings file or writing the CSV failed
//! - `Settings` - The YAML settings file could not be deserialized
//! - `InvalidOption` - A setting holds a value that cannot be used

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaCueError {
    /// I/O failure with the path that caused it.
    ///
    /// # Example
    /// ```
    /// # use reacue::ReaCueError;
    /// let err = ReaCueError::Io {
    ///     path: "show.rpp".into(),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    /// };
    /// assert_eq!(err.to_string(), "Failed to access 'show.rpp': not found");
    /// ```
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid settings file.
    ///
    /// # Example
    /// ```
    /// # use reacue::ReaCueError;
    /// let err = ReaCueError::Settings("event-list: invalid type".to_string());
    /// assert_eq!(err.to_string(), "Invalid settings: event-list: invalid type");
    /// ```
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// A single option value that cannot be resolved.
    ///
    /// # Example
    /// ```
    /// # use reacue::ReaCueError;
    /// let err = ReaCueError::InvalidOption {
    ///     name: "cue-list",
    ///     message: "must be at least 1".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid option 'cue-list': must be at least 1");
    /// ```
    #[error("Invalid option '{name}': {message}")]
    InvalidOption { name: &'static str, message: String },
}
