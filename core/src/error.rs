//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`; the domain variants
/// (`Configuration`, `Network`, `Validation`) are constructed explicitly.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for JSON parse errors.
    #[display("Parse Error: {_0}")]
    Parse(serde_json::Error),

    /// Missing or inconsistent invocation configuration.
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Configuration(String),

    /// Transport-level failure while talking to the remote host.
    #[from(ignore)]
    #[display("Network Error: {_0}")]
    Network(String),

    /// Input that fails a shape or identifier check.
    #[from(ignore)]
    #[display("Validation Error: {_0}")]
    Validation(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
