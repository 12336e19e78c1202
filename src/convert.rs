// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Generic scalar/array parameter conversion.
//!
//! Driver parameters travel as text in device profiles and command
//! channels. [`ParamValue`] is the closed set of parameter shapes; each
//! variant converts to and from its delimiter-joined textual form by
//! static dispatch. Arrays join and split on [`ARRAY_SEPARATOR`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Separator between array elements in textual form.
pub const ARRAY_SEPARATOR: char = ';';

/// A driver parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit unsigned integer
    UInt(u32),
    /// Single-precision float
    Float(f32),
    /// Double-precision float
    Double(f64),
    /// Text
    Text(String),
    /// Array of 32-bit signed integers
    IntArray(Vec<i32>),
    /// Array of single-precision floats
    FloatArray(Vec<f32>),
}

/// Selector for the parameter shape [`from_text`] should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    /// 32-bit signed integer
    Int,
    /// 32-bit unsigned integer
    UInt,
    /// Single-precision float
    Float,
    /// Double-precision float
    Double,
    /// Text
    Text,
    /// Array of 32-bit signed integers
    IntArray,
    /// Array of single-precision floats
    FloatArray,
}

/// Error returned when text does not parse as the requested parameter shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value {text:?} could not be converted to {target}")]
pub struct ConvertError {
    /// The offending input text
    pub text: String,
    /// The shape that was requested
    pub target: ParamKind,
}

impl ParamValue {
    /// Get the shape of this value.
    #[must_use]
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Int(_) => ParamKind::Int,
            ParamValue::UInt(_) => ParamKind::UInt,
            ParamValue::Float(_) => ParamKind::Float,
            ParamValue::Double(_) => ParamKind::Double,
            ParamValue::Text(_) => ParamKind::Text,
            ParamValue::IntArray(_) => ParamKind::IntArray,
            ParamValue::FloatArray(_) => ParamKind::FloatArray,
        }
    }

    /// Render this value in its textual form.
    ///
    /// Scalars render naturally; arrays join elements with `;`. The closed
    /// variant set makes this infallible.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::UInt(v) => write!(f, "{v}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Double(v) => write!(f, "{v}"),
            ParamValue::Text(v) => write!(f, "{v}"),
            ParamValue::IntArray(vs) => write_joined(f, vs),
            ParamValue::FloatArray(vs) => write_joined(f, vs),
        }
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            write!(f, "{ARRAY_SEPARATOR}")?;
        }
        write!(f, "{v}")?;
    }
    Ok(())
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::Int => write!(f, "int"),
            ParamKind::UInt => write!(f, "uint"),
            ParamKind::Float => write!(f, "float"),
            ParamKind::Double => write!(f, "double"),
            ParamKind::Text => write!(f, "text"),
            ParamKind::IntArray => write!(f, "int array"),
            ParamKind::FloatArray => write!(f, "float array"),
        }
    }
}

/// Parse text as the requested parameter shape.
///
/// Arrays split on `;` and parse each element; any failing element fails
/// the whole conversion. Failures are logged with the offending text and
/// the requested shape.
///
/// # Example
///
/// ```
/// use regcodec::convert::{from_text, ParamKind, ParamValue};
///
/// let value = from_text("1;2;3", ParamKind::IntArray)?;
/// assert_eq!(value, ParamValue::IntArray(vec![1, 2, 3]));
/// # Ok::<(), regcodec::convert::ConvertError>(())
/// ```
pub fn from_text(text: &str, target: ParamKind) -> Result<ParamValue, ConvertError> {
    let parsed = match target {
        ParamKind::Int => text.trim().parse().ok().map(ParamValue::Int),
        ParamKind::UInt => text.trim().parse().ok().map(ParamValue::UInt),
        ParamKind::Float => text.trim().parse().ok().map(ParamValue::Float),
        ParamKind::Double => text.trim().parse().ok().map(ParamValue::Double),
        ParamKind::Text => Some(ParamValue::Text(text.to_string())),
        ParamKind::IntArray => parse_array(text).map(ParamValue::IntArray),
        ParamKind::FloatArray => parse_array(text).map(ParamValue::FloatArray),
    };

    parsed.ok_or_else(|| {
        error!(value = text, target = %target, "parameter conversion failed");
        ConvertError {
            text: text.to_string(),
            target,
        }
    })
}

fn parse_array<T: std::str::FromStr>(text: &str) -> Option<Vec<T>> {
    text.split(ARRAY_SEPARATOR)
        .map(|element| element.trim().parse().ok())
        .collect()
}
