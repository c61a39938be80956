//! Loader errors

use ls8_spec::Ls8Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Couldn't find file {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Invalid byte at line {line}: '{text}' is not an 8-digit binary literal")]
    InvalidByte { line: usize, text: String },

    #[error(transparent)]
    Spec(#[from] Ls8Error),
}

pub type Result<T> = std::result::Result<T, LoaderError>;
