use super::*;

#[test]
fn file_size_truncates_fractional_bytes() {
    assert_eq!(file_size(52_431.0), 52_431);
    assert_eq!(file_size(10.9), 10);
}

#[test]
fn file_size_clamps_invalid_values_to_zero() {
    assert_eq!(file_size(-1.0), 0);
    assert_eq!(file_size(f64::NAN), 0);
    assert_eq!(file_size(f64::INFINITY), 0);
}
