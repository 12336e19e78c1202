// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Parameter conversion and response tokenizing tests.

use regcodec::convert::{from_text, ParamKind, ParamValue};
use regcodec::tokenize::{split_comma_values, split_float_values, strip_assignments};

// ============================================================================
// Parameter Conversion
// ============================================================================

#[test]
fn test_int_array_text_round_trip() {
    let value = from_text("1;2;3", ParamKind::IntArray).expect("parse int array");
    assert_eq!(value, ParamValue::IntArray(vec![1, 2, 3]));
    assert_eq!(value.to_text(), "1;2;3");
}

#[test]
fn test_float_array_text_round_trip() {
    let value = from_text("0.5;1.25;2", ParamKind::FloatArray).expect("parse float array");
    assert_eq!(value, ParamValue::FloatArray(vec![0.5, 1.25, 2.0]));
    assert_eq!(value.to_text(), "0.5;1.25;2");
}

#[test]
fn test_scalar_conversions() {
    assert_eq!(
        from_text("-7", ParamKind::Int).expect("int"),
        ParamValue::Int(-7)
    );
    assert_eq!(
        from_text("3.5", ParamKind::Double).expect("double"),
        ParamValue::Double(3.5)
    );
    assert_eq!(
        from_text("idle", ParamKind::Text).expect("text"),
        ParamValue::Text("idle".to_string())
    );
}

#[test]
fn test_failed_conversion_names_value_and_target() {
    let err = from_text("4.5.6", ParamKind::Float).expect_err("bad float");
    assert_eq!(err.text, "4.5.6");
    assert_eq!(err.target, ParamKind::Float);
}

// ============================================================================
// Response Tokenizing
// ============================================================================

#[test]
fn test_tokenized_response_feeds_the_codec() {
    let tokens = split_comma_values("258, 772");
    let refs: Vec<&str> = tokens.iter().map(String::as_str).collect();

    let data = regcodec::encode_values(
        &refs,
        regcodec::ValueKind::UnsignedInt,
        16,
        false,
        refs.len(),
    )
    .expect("encode tokenized values");
    assert_eq!(data, vec![0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn test_strip_assignments_leaves_names() {
    assert_eq!(strip_assignments("speed = 12.5, torque = 3"), "speed, torque");
}

#[test]
fn test_split_float_values_skips_non_numeric_tokens() {
    assert_eq!(split_float_values("1.5, off, 2.25"), vec![1.5, 2.25]);
}
