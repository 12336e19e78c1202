// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encoder for turning textual register values into a byte buffer.
//!
//! Each value encodes to one chunk per its [`ValueKind`] and bit width;
//! chunks are concatenated in value order. The endianness flag describes
//! the wire buffer: `true` means the buffer bytes are little-endian,
//! `false` big-endian, applied identically on every numeric path.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::core::{CodecError, Result, ValueKind};

/// Encode an ordered sequence of textual values into one byte buffer.
///
/// `expected_count` must match `values.len()` exactly; a mismatch rejects
/// the whole call before any value is encoded.
///
/// # Arguments
///
/// * `values` - Textual values, one per element, in wire order
/// * `kind` - Logical type of every element
/// * `bits` - Bit width for numeric elements (8, 16, or 32)
/// * `little_endian` - Wire byte order for multi-byte numeric chunks
/// * `expected_count` - Declared element count
///
/// # Example
///
/// ```
/// use regcodec::{encode_values, ValueKind};
///
/// let data = encode_values(&["258"], ValueKind::UnsignedInt, 16, false, 1)?;
/// assert_eq!(data, vec![0x01, 0x02]);
/// # Ok::<(), regcodec::CodecError>(())
/// ```
pub fn encode_values(
    values: &[&str],
    kind: ValueKind,
    bits: u16,
    little_endian: bool,
    expected_count: usize,
) -> Result<Vec<u8>> {
    if values.len() != expected_count {
        return Err(CodecError::count_mismatch(expected_count, values.len()));
    }

    let mut data = Vec::new();
    for value in values {
        match kind {
            ValueKind::UnsignedInt => encode_uint(&mut data, value, bits, little_endian)?,
            ValueKind::SignedInt => encode_int(&mut data, value, bits, little_endian)?,
            ValueKind::Bool => data.push(parse_bool(value)?),
            ValueKind::Text => data.extend_from_slice(value.as_bytes()),
            ValueKind::Float32 => {
                return Err(CodecError::unsupported(format!("{kind} encode")));
            }
        }
    }

    Ok(data)
}

fn encode_uint(data: &mut Vec<u8>, value: &str, bits: u16, little_endian: bool) -> Result<()> {
    match bits {
        8 => {
            let v: u8 = parse_numeric(value, "uint8")?;
            data.push(v);
        }
        16 => {
            let v: u16 = parse_numeric(value, "uint16")?;
            let mut chunk = [0u8; 2];
            if little_endian {
                LittleEndian::write_u16(&mut chunk, v);
            } else {
                BigEndian::write_u16(&mut chunk, v);
            }
            data.extend_from_slice(&chunk);
        }
        32 => {
            let v: u32 = parse_numeric(value, "uint32")?;
            let mut chunk = [0u8; 4];
            if little_endian {
                LittleEndian::write_u32(&mut chunk, v);
            } else {
                BigEndian::write_u32(&mut chunk, v);
            }
            data.extend_from_slice(&chunk);
        }
        _ => {
            return Err(CodecError::unsupported(format!("uint with width {bits}")));
        }
    }
    Ok(())
}

fn encode_int(data: &mut Vec<u8>, value: &str, bits: u16, little_endian: bool) -> Result<()> {
    match bits {
        8 => {
            let v: i8 = parse_numeric(value, "int8")?;
            data.push(v as u8);
        }
        16 => {
            let v: i16 = parse_numeric(value, "int16")?;
            let mut chunk = [0u8; 2];
            if little_endian {
                LittleEndian::write_i16(&mut chunk, v);
            } else {
                BigEndian::write_i16(&mut chunk, v);
            }
            data.extend_from_slice(&chunk);
        }
        32 => {
            let v: i32 = parse_numeric(value, "int32")?;
            let mut chunk = [0u8; 4];
            if little_endian {
                LittleEndian::write_i32(&mut chunk, v);
            } else {
                BigEndian::write_i32(&mut chunk, v);
            }
            data.extend_from_slice(&chunk);
        }
        _ => {
            return Err(CodecError::unsupported(format!("int with width {bits}")));
        }
    }
    Ok(())
}

fn parse_numeric<T: std::str::FromStr>(value: &str, context: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| CodecError::invalid_data(context, format!("{value:?}: {e}")))
}

/// Parse a boolean value to its single wire byte (0 or 1).
fn parse_bool(value: &str) -> Result<u8> {
    match value.trim() {
        "true" | "1" => Ok(1),
        "false" | "0" => Ok(0),
        other => Err(CodecError::invalid_data(
            "bool",
            format!("{other:?} is not a boolean"),
        )),
    }
}
