// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Regcodec
//!
//! Register value codec for field-device drivers.
//!
//! This library converts between textual representations of typed register
//! values and raw byte buffers, parameterized by logical type, bit width,
//! signedness, endianness, and element count:
//! - **Encoding** of ordered textual values in [`codec::encode`]
//! - **Decoding** of buffers, whole or element-wise, in [`codec::decode`]
//! - **Bit-field extraction** for packed-flag registers in [`codec::bitfield`]
//! - **Parameter conversion** between scalar/array shapes and delimited
//!   text in [`convert`]
//! - **Response tokenizing** for comma-separated device output in
//!   [`tokenize`]
//!
//! ## Endianness contract
//!
//! The `little_endian` flag describes the wire buffer: `true` means the
//! buffer bytes are little-endian, `false` big-endian. The same
//! interpretation applies on every numeric path, encode and decode.
//!
//! ## Errors
//!
//! All operations return [`CodecError`] through `Result`; nothing panics
//! on malformed input and no partial output accompanies an error.
//! [`Status`] maps errors onto the anchored integer codes that drivers
//! report through value channels.
//!
//! ## Example: round trip
//!
//! ```
//! use regcodec::{decode_numbers, encode_values, ValueKind};
//!
//! let data = encode_values(&["258", "772"], ValueKind::UnsignedInt, 16, false, 2)?;
//! assert_eq!(data, vec![0x01, 0x02, 0x03, 0x04]);
//!
//! let values = decode_numbers(&data, ValueKind::UnsignedInt, 16, false)?;
//! assert_eq!(values, vec!["258", "772"]);
//! # Ok::<(), regcodec::CodecError>(())
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{CodecError, Result, Status, ValueKind};

// Value codec
pub mod codec;

pub use codec::{decode_numbers, decode_text, encode_values, extract_bit_field};

// Parameter conversion
pub mod convert;

pub use convert::{ParamKind, ParamValue};

// Response tokenizing
pub mod tokenize;

// Driver utilities
pub mod util;
