// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoder for turning byte buffers back into textual values.
//!
//! Two entry points:
//! - [`decode_text`] - whole-buffer UTF-8 decode, type-agnostic
//! - [`decode_numbers`] - element-wise fixed-width numeric decode
//!
//! Numeric decode slices the buffer into strict non-overlapping chunks of
//! the dispatched width; each chunk decodes independently and elements keep
//! buffer order. A trailing partial chunk is invalid data, uniformly across
//! all widths. Unrecognized type/width combinations are an explicit error,
//! never a silent empty result.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::core::{CodecError, Result, ValueKind};

/// Decode an entire buffer as UTF-8 text.
///
/// This entry point is type-agnostic: it always performs a raw text decode
/// of the whole buffer, whatever logical type the register declares.
/// Invalid UTF-8 sequences are replaced rather than rejected, matching
/// tolerant device-response handling.
pub fn decode_text(data: &[u8]) -> Result<String> {
    if data.is_empty() {
        return Err(CodecError::EmptyData);
    }
    Ok(String::from_utf8_lossy(data).into_owned())
}

/// Decode a buffer into an ordered sequence of numeric-text elements.
///
/// # Arguments
///
/// * `data` - The wire buffer; its length must be an exact multiple of
///   the chunk size for `kind`/`bits`
/// * `kind` - Logical type of every element
/// * `bits` - Bit width (integers: 1..=8 alias to 8-bit chunks, else 16/32)
/// * `little_endian` - Wire byte order for multi-byte chunks
///
/// # Example
///
/// ```
/// use regcodec::{decode_numbers, ValueKind};
///
/// let values = decode_numbers(&[0x01, 0x02], ValueKind::UnsignedInt, 16, false)?;
/// assert_eq!(values, vec!["258"]);
/// # Ok::<(), regcodec::CodecError>(())
/// ```
pub fn decode_numbers(
    data: &[u8],
    kind: ValueKind,
    bits: u16,
    little_endian: bool,
) -> Result<Vec<String>> {
    if data.is_empty() {
        return Err(CodecError::EmptyData);
    }

    let chunk_len = kind
        .chunk_len(bits)
        .ok_or_else(|| CodecError::unsupported(format!("{kind} with width {bits}")))?;

    let mut values = Vec::with_capacity(data.len() / chunk_len);
    let mut chunks = data.chunks_exact(chunk_len);
    for chunk in &mut chunks {
        values.push(decode_chunk(chunk, kind, little_endian));
    }
    if !chunks.remainder().is_empty() {
        return Err(CodecError::invalid_data(
            format!("{kind} decode"),
            format!(
                "trailing {} byte(s) do not form a {chunk_len}-byte chunk",
                chunks.remainder().len()
            ),
        ));
    }

    Ok(values)
}

/// Decode one fixed-width chunk into its textual form.
///
/// Chunk length is already validated by the dispatch in [`decode_numbers`].
fn decode_chunk(chunk: &[u8], kind: ValueKind, little_endian: bool) -> String {
    match (kind, chunk.len()) {
        (ValueKind::UnsignedInt, 2) => {
            read_ordered(chunk, little_endian, LittleEndian::read_u16, BigEndian::read_u16)
                .to_string()
        }
        (ValueKind::UnsignedInt, 4) => {
            read_ordered(chunk, little_endian, LittleEndian::read_u32, BigEndian::read_u32)
                .to_string()
        }
        (ValueKind::UnsignedInt, _) => chunk[0].to_string(),
        (ValueKind::SignedInt, 2) => {
            read_ordered(chunk, little_endian, LittleEndian::read_i16, BigEndian::read_i16)
                .to_string()
        }
        (ValueKind::SignedInt, 4) => {
            read_ordered(chunk, little_endian, LittleEndian::read_i32, BigEndian::read_i32)
                .to_string()
        }
        (ValueKind::SignedInt, _) => (chunk[0] as i8).to_string(),
        (ValueKind::Float32, _) => {
            read_ordered(chunk, little_endian, LittleEndian::read_f32, BigEndian::read_f32)
                .to_string()
        }
        // Bool bytes decode to their raw integer value, no normalization.
        // Text never reaches here; it has no fixed-width chunk.
        (ValueKind::Bool, _) | (ValueKind::Text, _) => chunk[0].to_string(),
    }
}

fn read_ordered<T>(
    chunk: &[u8],
    little_endian: bool,
    read_le: fn(&[u8]) -> T,
    read_be: fn(&[u8]) -> T,
) -> T {
    if little_endian {
        read_le(chunk)
    } else {
        read_be(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text(b"ready").unwrap(), "ready");
    }

    #[test]
    fn test_decode_text_is_type_agnostic_lossy() {
        // Invalid UTF-8 is replaced, not rejected.
        let text = decode_text(&[0x4F, 0x4B, 0xFF]).unwrap();
        assert!(text.starts_with("OK"));
    }

    #[test]
    fn test_decode_text_empty() {
        assert_eq!(decode_text(&[]).unwrap_err(), CodecError::EmptyData);
    }

    #[test]
    fn test_decode_numbers_empty() {
        let err = decode_numbers(&[], ValueKind::UnsignedInt, 16, false).unwrap_err();
        assert_eq!(err, CodecError::EmptyData);
    }

    #[test]
    fn test_uint8_elements() {
        let values = decode_numbers(&[0x00, 0x7F, 0xFF], ValueKind::UnsignedInt, 8, false).unwrap();
        assert_eq!(values, vec!["0", "127", "255"]);
    }

    #[test]
    fn test_sub_byte_widths_alias_to_byte_chunks() {
        for bits in 1..=7 {
            let values = decode_numbers(&[0x0C], ValueKind::UnsignedInt, bits, false).unwrap();
            assert_eq!(values, vec!["12"]);
        }
    }

    #[test]
    fn test_uint16_byte_order() {
        let values = decode_numbers(&[0x01, 0x02], ValueKind::UnsignedInt, 16, false).unwrap();
        assert_eq!(values, vec!["258"]);

        let values = decode_numbers(&[0x02, 0x01], ValueKind::UnsignedInt, 16, true).unwrap();
        assert_eq!(values, vec!["258"]);
    }

    #[test]
    fn test_uint32_multi_element_order() {
        let data = [0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02];
        let values = decode_numbers(&data, ValueKind::UnsignedInt, 32, false).unwrap();
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn test_int_negative_values() {
        let values = decode_numbers(&[0xFF], ValueKind::SignedInt, 8, false).unwrap();
        assert_eq!(values, vec!["-1"]);

        let values = decode_numbers(&[0xFF, 0xFE], ValueKind::SignedInt, 16, false).unwrap();
        assert_eq!(values, vec!["-2"]);

        let values = decode_numbers(&[0xFE, 0xFF], ValueKind::SignedInt, 16, true).unwrap();
        assert_eq!(values, vec!["-2"]);
    }

    #[test]
    fn test_float32_honors_endianness_flag() {
        let be = 1.5f32.to_be_bytes();
        let values = decode_numbers(&be, ValueKind::Float32, 32, false).unwrap();
        assert_eq!(values, vec!["1.5"]);

        let le = 1.5f32.to_le_bytes();
        let values = decode_numbers(&le, ValueKind::Float32, 32, true).unwrap();
        assert_eq!(values, vec!["1.5"]);
    }

    #[test]
    fn test_float32_chunk_size_ignores_requested_width() {
        let le = 2.0f32.to_le_bytes();
        let values = decode_numbers(&le, ValueKind::Float32, 16, true).unwrap();
        assert_eq!(values, vec!["2"]);
    }

    #[test]
    fn test_bool_bytes_decode_raw() {
        let values = decode_numbers(&[0, 1, 7], ValueKind::Bool, 1, false).unwrap();
        assert_eq!(values, vec!["0", "1", "7"]);
    }

    #[test]
    fn test_trailing_partial_chunk_is_invalid_uniformly() {
        // 16-bit path
        let err = decode_numbers(&[0x01, 0x02, 0x03], ValueKind::UnsignedInt, 16, false).unwrap_err();
        assert!(matches!(err, CodecError::InvalidData { .. }));

        // 32-bit path
        let err = decode_numbers(&[0x01, 0x02, 0x03], ValueKind::SignedInt, 32, false).unwrap_err();
        assert!(matches!(err, CodecError::InvalidData { .. }));

        // Float path
        let err = decode_numbers(&[0x01, 0x02], ValueKind::Float32, 32, false).unwrap_err();
        assert!(matches!(err, CodecError::InvalidData { .. }));
    }

    #[test]
    fn test_unrecognized_width_is_explicit_error() {
        // Never a silent empty result.
        let err = decode_numbers(&[0x01, 0x02, 0x03], ValueKind::UnsignedInt, 24, false).unwrap_err();
        assert!(matches!(err, CodecError::Unsupported { .. }));

        let err = decode_numbers(&[0x01], ValueKind::SignedInt, 64, false).unwrap_err();
        assert!(matches!(err, CodecError::Unsupported { .. }));
    }

    #[test]
    fn test_text_kind_has_no_numeric_form() {
        let err = decode_numbers(b"abc", ValueKind::Text, 8, false).unwrap_err();
        assert!(matches!(err, CodecError::Unsupported { .. }));
    }
}
