//! Unified error types for the quire library.
//!
//! This module provides a single error type covering every failure the
//! conversion pipeline can surface, presenting a consistent API to users.
//! Style resolution and sheet analysis are total functions and never produce
//! an error; only the collaborators behind the pipeline's trait seams
//! (workbook source, document renderer, archive sink) can fail.

use thiserror::Error;

/// Main error type for quire operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error from a collaborator
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input rejected before conversion started
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Upstream workbook parse failure
    #[error("Failed to read workbook: {0}")]
    Parse(String),

    /// Paginated-document renderer failure
    #[error("Document rendering failed: {0}")]
    Render(String),

    /// Archive writer failure
    #[error("Archive writing failed: {0}")]
    Archive(String),

    /// Conversion aborted at the between-sheets checkpoint
    #[error("Conversion cancelled")]
    Cancelled,
}

/// Result type for quire operations.
pub type Result<T> = std::result::Result<T, Error>;
