// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Value codec implementations.
//!
//! - [`encode`] - textual values to byte buffers
//! - [`decode`] - byte buffers back to text, whole-buffer or element-wise
//! - [`bitfield`] - sub-register bit-field extraction

pub mod bitfield;
pub mod decode;
pub mod encode;

pub use bitfield::extract_bit_field;
pub use decode::{decode_numbers, decode_text};
pub use encode::encode_values;
