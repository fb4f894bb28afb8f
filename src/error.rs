// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for terminal construction and resizing.

/// Errors returned by [`crate::Term`] construction and resizing.
///
/// Every other recoverable condition described by the crate (malformed
/// escape sequences, unknown CSI/SGR/OSC parameters, invalid base64) is
/// handled internally and logged via `tracing`, never surfaced here.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum TermError {
    /// `col` or `row` was zero.
    #[error("terminal dimensions must be non-zero (got {col}x{row})")]
    InvalidDimensions {
        /// Requested column count.
        col: u16,
        /// Requested row count.
        row: u16,
    },
}
