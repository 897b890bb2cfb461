//! Request-level error taxonomy.
//!
//! DESIGN
//! ======
//! Lower layers keep their own error enums (`ExtractError`, `FetchError`).
//! A generation request surfaces exactly one `DiagramError`; nothing is
//! retried internally and no partial output is returned.

use crate::fetch::FetchError;

/// Grepable error codes for anything shown to a user.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    /// Advisory only. The caller decides whether to retry.
    fn retryable(&self) -> bool {
        false
    }
}

/// Terminal rejection of a diagram generation request.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    /// The path was empty or whitespace-only.
    #[error("please provide a TypeScript file path")]
    EmptyInput,

    /// The source text could not be retrieved.
    #[error("unable to load TypeScript file: {0}")]
    FetchFailure(#[from] FetchError),

    /// The file parsed but declared no exported symbols.
    #[error("no exported symbols found in {path}; only `export`-marked top-level declarations are diagrammed")]
    NoSymbolsFound { path: String },

    /// The parser could not produce a syntax tree at all.
    #[error("unable to parse {path}: {message}")]
    MalformedSource { path: String, message: String },
}

impl ErrorCode for DiagramError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "E_EMPTY_INPUT",
            Self::FetchFailure(_) => "E_FETCH_FAILURE",
            Self::NoSymbolsFound { .. } => "E_NO_SYMBOLS",
            Self::MalformedSource { .. } => "E_MALFORMED_SOURCE",
        }
    }

    fn retryable(&self) -> bool {
        match self {
            Self::FetchFailure(err) => err.retryable(),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
