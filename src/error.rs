// SPDX-License-Identifier: MIT
// Copyright 2026 Wisebites Developers

//! Application error types.

use crate::models::DecodeError;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for fallible operations
pub type Result<T> = std::result::Result<T, AppError>;
