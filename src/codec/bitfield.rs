// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Bit-field extraction for packed-flag registers.
//!
//! Layers on top of the numeric decoder: the whole buffer decodes as one
//! chunk of its own total bit length, then a contiguous sub-range of bits
//! is masked out of the resulting 32-bit register value.

use crate::codec::decode::decode_numbers;
use crate::core::{CodecError, Result, ValueKind};

/// Extract a contiguous bit field from a packed register buffer.
///
/// The buffer decodes as a single numeric chunk of `data.len() * 8` bits,
/// so it must be 1, 2, or 4 bytes long. The field is addressed by bit
/// offset (from bit 0) and width in bits, and rendered as decimal text.
///
/// `field_bits` must be in 1..=31 and `bit_offset + field_bits` must not
/// exceed 32; violations are rejected rather than silently truncated.
///
/// # Example
///
/// ```
/// use regcodec::{extract_bit_field, ValueKind};
///
/// // Register value 0b0000_1100: bits 2..4 hold 3.
/// let field = extract_bit_field(&[0b0000_1100], 2, 2, ValueKind::UnsignedInt, false)?;
/// assert_eq!(field, "3");
/// # Ok::<(), regcodec::CodecError>(())
/// ```
pub fn extract_bit_field(
    data: &[u8],
    bit_offset: u32,
    field_bits: u32,
    kind: ValueKind,
    little_endian: bool,
) -> Result<String> {
    // bit_offset can be arbitrarily large; compare without adding so the
    // guard itself cannot overflow.
    if field_bits == 0 || field_bits > 31 || bit_offset > 32 - field_bits {
        return Err(CodecError::invalid_data(
            "bit field",
            format!(
                "offset {bit_offset} and width {field_bits} do not address a 32-bit register"
            ),
        ));
    }

    let total_bits = data.len().saturating_mul(8);
    let bits = u16::try_from(total_bits)
        .map_err(|_| CodecError::unsupported(format!("{total_bits}-bit register")))?;
    let values = decode_numbers(data, kind, bits, little_endian)?;

    // decode_numbers never returns an empty sequence for non-empty input,
    // but the register must decode as exactly one element.
    let first = values
        .first()
        .ok_or(CodecError::EmptyData)?;
    let register = first
        .parse::<i64>()
        .map_err(|e| CodecError::invalid_data("bit field", format!("{first:?}: {e}")))?
        as u32;

    let mask = ((1u32 << field_bits) - 1) << bit_offset;
    Ok(((register & mask) >> bit_offset).to_string())
}
