//! Tests for decoded values

extern crate std;

use crate::exif::value::{DecodedValue, Rational};

#[test]
fn test_rational_value() {
    std::assert_eq!(Rational::new(1, 2).value(), 0.5);
    std::assert_eq!(Rational::new(-9, 3).value(), -3.0);
}

#[test]
fn test_rational_zero_denominator() {
    std::assert_eq!(Rational::new(0, 0).value(), 0.0);
    std::assert_eq!(Rational::new(42, 0).value(), 0.0);
    std::assert_eq!(Rational::new(i32::MIN, 0).value(), 0.0);
}

#[test]
fn test_rational_display() {
    std::assert_eq!(Rational::from((72, 1)).to_string(), "72/1");
}

#[test]
fn test_decoded_value_accessors() {
    let integer = DecodedValue::Integer(6);
    std::assert!(integer.is_present());
    std::assert_eq!(integer.as_integer(), Some(6));
    std::assert_eq!(integer.as_text(), None);

    let text = DecodedValue::Text("ABC".to_string());
    std::assert_eq!(text.as_text(), Some("ABC"));
    std::assert_eq!(text.as_integer(), None);

    let rational = DecodedValue::Rational(Rational::new(1, 2));
    std::assert_eq!(rational.as_rational(), Some(Rational::new(1, 2)));
    std::assert_eq!(rational.as_rationals(), None);

    let list = DecodedValue::RationalList(vec![Rational::new(1, 1), Rational::new(2, 1)]);
    std::assert_eq!(list.as_rationals().map(|r| r.len()), Some(2));
    std::assert_eq!(list.as_rational(), None);

    let absent = DecodedValue::default();
    std::assert!(!absent.is_present());
    std::assert_eq!(absent.kind(), "absent");
}

#[test]
fn test_decoded_value_display() {
    std::assert_eq!(DecodedValue::Integer(200).to_string(), "200");
    std::assert_eq!(DecodedValue::Text("0230".to_string()).to_string(), "0230");
    std::assert_eq!(
        DecodedValue::RationalList(vec![Rational::new(48, 1), Rational::new(1, 1)]).to_string(),
        "[48/1, 1/1]"
    );
    std::assert_eq!(DecodedValue::Absent.to_string(), "<absent>");
}
