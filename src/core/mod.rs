// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout regcodec.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] / [`Result`] - Error handling
//! - [`Status`] - Wire-level status codes for integer channels
//! - [`ValueKind`] - Logical value type tags

pub mod error;
pub mod types;

pub use error::{CodecError, Result, Status};
pub use types::ValueKind;
