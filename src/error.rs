use miette::Diagnostic;
use thiserror::Error;

use crate::processor::{AssetsValidatorError, ErrorGroup};

/// Main error type for tokex operations
#[derive(Error, Diagnostic, Debug)]
pub enum TokexError {
    #[error("IO error: {0}")]
    #[diagnostic(code(tokex::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tokex::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(tokex::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(tokex::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation of {category} failed with {} error(s)", errors.len())]
    #[diagnostic(
        code(tokex::validate),
        help("Fix every listed asset in the design file and run the export again")
    )]
    Validation {
        category: String,
        #[related]
        errors: Vec<AssetsValidatorError>,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(tokex::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl TokexError {
    /// Wrap a failed processing pass for one asset category.
    pub fn validation(category: impl Into<String>, errors: ErrorGroup) -> Self {
        TokexError::Validation {
            category: category.into(),
            errors: errors.into_vec(),
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        TokexError::Parse {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TokexError>;
