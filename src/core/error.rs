// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for regcodec.
//!
//! Provides error types for value codec operations:
//! - Value parsing and chunk reassembly
//! - Empty input detection
//! - Unsupported type/width dispatch
//! - Element count validation
//!
//! Every failure is reported through a return value, never by panicking,
//! and no operation returns partial output alongside an error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur during value codec operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A value failed to parse, or a fixed-width chunk failed to reassemble
    InvalidData {
        /// What was being converted
        context: String,
        /// Error message
        message: String,
    },

    /// Input buffer was empty
    EmptyData,

    /// Logical type or type/width combination not implemented
    Unsupported {
        /// The type/width combination that was requested
        requested: String,
    },

    /// Supplied value count did not match the declared element count
    CountMismatch {
        /// Declared element count
        expected: usize,
        /// Number of values actually supplied
        actual: usize,
    },
}

impl CodecError {
    /// Create an invalid data error.
    pub fn invalid_data(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::InvalidData {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported type/width error.
    pub fn unsupported(requested: impl Into<String>) -> Self {
        CodecError::Unsupported {
            requested: requested.into(),
        }
    }

    /// Create an element count mismatch error.
    pub fn count_mismatch(expected: usize, actual: usize) -> Self {
        CodecError::CountMismatch { expected, actual }
    }

    /// Get the wire-level status code for this error.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::from(self)
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidData { context, message } => {
                write!(f, "Invalid data in {context}: {message}")
            }
            CodecError::EmptyData => write!(f, "Empty data buffer"),
            CodecError::Unsupported { requested } => {
                write!(f, "Unsupported type: '{requested}'")
            }
            CodecError::CountMismatch { expected, actual } => write!(
                f,
                "Element count mismatch: declared {expected}, got {actual} values"
            ),
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type for regcodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Wire-level status codes for integer-typed result channels.
///
/// Device drivers report decoded register values and error conditions
/// through the same integer channel. The codes are anchored at
/// `i32::MAX - 1000` so that a status can never be mistaken for a
/// legitimate decoded value, and the members keep their relative order
/// from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Status {
    /// Operation completed
    NoError = i32::MAX - 1000,
    /// Parse or chunk-reassembly failure
    InvalidData,
    /// Empty input buffer
    EmptyData,
    /// Logical type or type/width combination not implemented
    UnsupportedType,
    /// Supplied value count mismatched against the declared count
    CountMismatch,
}

impl Status {
    /// Get the raw integer code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Get a human-readable description of this status.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Status::NoError => "no error",
            Status::InvalidData => "value failed to parse or reassemble",
            Status::EmptyData => "input buffer was empty",
            Status::UnsupportedType => "logical type or bit width not supported",
            Status::CountMismatch => "value count did not match declared count",
        }
    }
}

impl From<&CodecError> for Status {
    fn from(err: &CodecError) -> Self {
        match err {
            CodecError::InvalidData { .. } => Status::InvalidData,
            CodecError::EmptyData => Status::EmptyData,
            CodecError::Unsupported { .. } => Status::UnsupportedType,
            CodecError::CountMismatch { .. } => Status::CountMismatch,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
