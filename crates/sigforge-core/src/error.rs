//! Unified error types for sigforge.

use std::path::PathBuf;
use thiserror::Error;

/// A form field failed validation.
///
/// Raised only at the validation boundary ([`crate::form::SignatureForm::validate`]).
/// Render functions never produce it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is empty or whitespace only.
    #[error("name is required")]
    EmptyName,

    /// The email address is not syntactically valid.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// The website is neither empty nor an absolute URL.
    #[error("invalid website URL: {0:?}")]
    InvalidWebsite(String),

    /// A URL pasted into a social field points at the network but not at a profile.
    #[error("{network} link is not a profile URL: {value:?}")]
    NotAProfileUrl { network: &'static str, value: String },
}

/// All errors that can occur during sigforge operations.
#[derive(Error, Debug)]
pub enum SignatureError {
    // --- Validation ---

    /// The form was rejected before rendering.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    // --- Lookup ---

    /// No template is registered under the given id.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    // --- Documents ---

    /// Handlebars rendering of a document shell failed.
    #[error("document rendering failed: {0}")]
    DocumentRender(String),

    // --- Config ---

    /// The form file was not found or could not be read.
    #[error("form file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The form file exists but contains invalid JSON.
    #[error("failed to parse form file at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, SignatureError>`.
pub type Result<T> = std::result::Result<T, SignatureError>;
