// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Logical value types for register data.
//!
//! A [`ValueKind`] tags how a byte chunk is interpreted. Together with a
//! bit width and an endianness flag it fully determines the codec strategy
//! for one element.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical type of a register value.
///
/// Determines the encode/decode strategy. `Text` treats the payload as raw
/// UTF-8 bytes rather than a fixed-width numeric chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Unsigned integer, 8/16/32 bits
    UnsignedInt,
    /// Signed integer, 8/16/32 bits
    SignedInt,
    /// Boolean, one byte on the wire
    Bool,
    /// Raw UTF-8 text, variable length
    Text,
    /// IEEE-754 single precision, decode only
    Float32,
}

impl ValueKind {
    /// Chunk size in bytes for one element of this kind at the given
    /// bit width, or `None` when the combination has no fixed-width form.
    ///
    /// Integer widths 1..=8 alias to 8-bit chunking (packed flags are
    /// addressed within the byte by the bit-field extractor). `Float32`
    /// is always a 4-byte chunk regardless of the requested width.
    #[must_use]
    pub const fn chunk_len(self, bits: u16) -> Option<usize> {
        match self {
            ValueKind::UnsignedInt | ValueKind::SignedInt => match bits {
                1..=8 => Some(1),
                16 => Some(2),
                32 => Some(4),
                _ => None,
            },
            ValueKind::Bool => Some(1),
            ValueKind::Float32 => Some(4),
            ValueKind::Text => None,
        }
    }

    /// Check if this kind decodes to fixed-width numeric chunks.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, ValueKind::Text)
    }

    /// Parse a value kind from its device-profile spelling.
    #[must_use]
    pub fn try_from_str(s: &str) -> Option<Self> {
        match s {
            "uint" => Some(ValueKind::UnsignedInt),
            "int" => Some(ValueKind::SignedInt),
            "bool" => Some(ValueKind::Bool),
            "text" | "char" | "byte" => Some(ValueKind::Text),
            "float32" => Some(ValueKind::Float32),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::UnsignedInt => write!(f, "uint"),
            ValueKind::SignedInt => write!(f, "int"),
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Text => write!(f, "text"),
            ValueKind::Float32 => write!(f, "float32"),
        }
    }
}
