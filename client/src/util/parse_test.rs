use super::*;

// =============================================================
// parse_float_prefix
// =============================================================

#[test]
fn float_parses_plain_numbers() {
    assert_eq!(parse_float_prefix("1200"), Some(1200.0));
    assert_eq!(parse_float_prefix("19.99"), Some(19.99));
    assert_eq!(parse_float_prefix("-2.5"), Some(-2.5));
}

#[test]
fn float_ignores_leading_whitespace_and_trailing_garbage() {
    assert_eq!(parse_float_prefix("  3.5 lbs"), Some(3.5));
    assert_eq!(parse_float_prefix("12kg"), Some(12.0));
    assert_eq!(parse_float_prefix("7."), Some(7.0));
}

#[test]
fn float_accepts_fraction_without_integer_part() {
    assert_eq!(parse_float_prefix(".5"), Some(0.5));
}

#[test]
fn float_accepts_exponent_only_when_complete() {
    assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
    assert_eq!(parse_float_prefix("2e"), Some(2.0));
    assert_eq!(parse_float_prefix("2e+x"), Some(2.0));
}

#[test]
fn float_rejects_non_numeric_input() {
    assert_eq!(parse_float_prefix(""), None);
    assert_eq!(parse_float_prefix("abc"), None);
    assert_eq!(parse_float_prefix("-"), None);
    assert_eq!(parse_float_prefix("."), None);
    assert_eq!(parse_float_prefix("$5"), None);
}

// =============================================================
// parse_int_prefix
// =============================================================

#[test]
fn int_truncates_at_first_non_digit() {
    assert_eq!(parse_int_prefix("3.7"), Some(3));
    assert_eq!(parse_int_prefix("14 units"), Some(14));
    assert_eq!(parse_int_prefix(" -4"), Some(-4));
    assert_eq!(parse_int_prefix("+9"), Some(9));
}

#[test]
fn int_rejects_non_numeric_input() {
    assert_eq!(parse_int_prefix(""), None);
    assert_eq!(parse_int_prefix("five"), None);
    assert_eq!(parse_int_prefix("+"), None);
    assert_eq!(parse_int_prefix(".5"), None);
}
