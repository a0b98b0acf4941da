//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid event kind: {0}")]
    InvalidKind(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Snapshot persistence
    // ---------------------------
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    // ---------------------------
    // Location
    // ---------------------------
    #[error("Location access denied: no home position configured")]
    PositionUnavailable,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
