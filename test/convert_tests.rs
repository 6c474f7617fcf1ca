//! Integration tests for numeric conversions and formatted construction.

use strkit::{
    float_string, format, hex_string, int_string, parse_float, parse_hex, parse_int, FormatArg,
    StrError,
};

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_int_permissive() {
    assert_eq!(parse_int(b"42abc"), 42);
    assert_eq!(parse_int(b"abc"), 0);
    assert_eq!(parse_int(b"   123"), 123);
    assert_eq!(parse_int(b"-55x"), -55);
    assert_eq!(parse_int(b"+7"), 7);
}

#[test]
fn test_parse_int_no_digits_after_sign() {
    assert_eq!(parse_int(b"-abc"), 0);
    assert_eq!(parse_int(b"+ 5"), 0);
}

#[test]
fn test_parse_float_permissive() {
    assert_eq!(parse_float(b"2.75"), 2.75);
    assert_eq!(parse_float(b"-1.5e2 trailing"), -150.0);
    assert_eq!(parse_float(b"0.125"), 0.125);
    assert_eq!(parse_float(b"nope"), 0.0);
    assert_eq!(parse_float(b""), 0.0);
}

#[test]
fn test_parse_float_incomplete_exponent() {
    assert_eq!(parse_float(b"3e"), 3.0);
    assert_eq!(parse_float(b"3e-"), 3.0);
    assert_eq!(parse_float(b"3e-1"), 0.3);
}

#[test]
fn test_parse_hex_prefixes() {
    assert_eq!(parse_hex(b"0xff"), 255);
    assert_eq!(parse_hex(b"FF"), 255);
    assert_eq!(parse_hex(b"10"), 16);
    assert_eq!(parse_hex(b"garbage"), 0);
}

// ============================================================================
// Printing
// ============================================================================

#[test]
fn test_int_string_values() {
    assert_eq!(int_string(0).unwrap().as_slice(), b"0");
    assert_eq!(int_string(12345).unwrap().as_slice(), b"12345");
    assert_eq!(int_string(-1).unwrap().as_slice(), b"-1");
    assert_eq!(
        int_string(i64::MAX).unwrap().as_slice(),
        b"9223372036854775807"
    );
    assert_eq!(
        int_string(i64::MIN).unwrap().as_slice(),
        b"-9223372036854775808"
    );
}

#[test]
fn test_int_string_exact_length() {
    let out = int_string(-420).unwrap();
    assert_eq!(out.len(), 4);
}

#[test]
fn test_hex_string_values() {
    assert_eq!(hex_string(0).unwrap().as_slice(), b"0");
    assert_eq!(hex_string(0x1234_abcd).unwrap().as_slice(), b"1234abcd");
}

#[test]
fn test_float_string_six_fraction_digits() {
    assert_eq!(float_string(2.5).unwrap().as_slice(), b"2.500000");
    assert_eq!(float_string(-0.5).unwrap().as_slice(), b"-0.500000");
    assert_eq!(float_string(1e3).unwrap().as_slice(), b"1000.000000");
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_parse_then_print() {
    let n = parse_int(b"42abc");
    assert_eq!(int_string(n).unwrap().as_slice(), b"42");

    let zero = parse_int(b"abc");
    assert_eq!(int_string(zero).unwrap().as_slice(), b"0");
}

#[test]
fn test_print_then_parse() {
    for n in [0i64, 7, -7, 1_000_000, i64::MAX, i64::MIN] {
        let printed = int_string(n).unwrap();
        assert_eq!(parse_int(printed.as_slice()), n);
    }
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn test_format_mixed_template() {
    let out = format(
        b"%s scored %d (%f%%) grade %c",
        &[
            FormatArg::Str(b"casey"),
            FormatArg::Int(87),
            FormatArg::Float(87.0),
            FormatArg::Char(b'B'),
        ],
    )
    .unwrap();
    assert_eq!(out.as_slice(), &b"casey scored 87 (87.000000%) grade B"[..]);
}

#[test]
fn test_format_exact_content_length() {
    let out = format(b"%d-%s", &[FormatArg::Int(5), FormatArg::Str(b"x")]).unwrap();
    assert_eq!(out.as_slice(), b"5-x");
    assert_eq!(out.len(), 3);
}

#[test]
fn test_format_hex_and_unsigned() {
    let out = format(
        b"%u -> %x",
        &[FormatArg::Uint(48879), FormatArg::Uint(48879)],
    )
    .unwrap();
    assert_eq!(out.as_slice(), b"48879 -> beef");
}

#[test]
fn test_format_checked_failures() {
    assert!(matches!(
        format(b"%s %s", &[FormatArg::Str(b"one")]),
        Err(StrError::MissingArgument {
            index: 1,
            provided: 1
        })
    ));
    assert!(matches!(
        format(b"%f", &[FormatArg::Int(3)]),
        Err(StrError::MismatchedArgument { spec: 'f', index: 0 })
    ));
    assert!(matches!(
        format(b"100%", &[]),
        Err(StrError::UnterminatedSpecifier)
    ));
    assert_eq!(format(b"100%%", &[]).unwrap().as_slice(), b"100%");
}
