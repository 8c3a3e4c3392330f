//! Decoded directory values

use std::fmt;

/// A numerator/denominator pair as stored in RATIONAL and SRATIONAL fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: i32,
    pub denominator: i32,
}

impl Rational {
    pub fn new(numerator: i32, denominator: i32) -> Self {
        Rational { numerator, denominator }
    }

    /// Floating point value of the fraction; 0 when the denominator is 0
    pub fn value(&self) -> f64 {
        if self.denominator == 0 {
            0.0
        } else {
            self.numerator as f64 / self.denominator as f64
        }
    }
}

impl From<(i32, i32)> for Rational {
    fn from((numerator, denominator): (i32, i32)) -> Self {
        Rational::new(numerator, denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// The typed value of one directory entry
///
/// `Absent` is what a recoverable miss looks like to callers: the entry was
/// seen but its (tag, format, count) combination is not decoded.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DecodedValue {
    #[default]
    Absent,
    Integer(u32),
    Text(String),
    Rational(Rational),
    RationalList(Vec<Rational>),
}

impl DecodedValue {
    pub fn is_present(&self) -> bool {
        !matches!(self, DecodedValue::Absent)
    }

    pub fn as_integer(&self) -> Option<u32> {
        match self {
            DecodedValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DecodedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_rational(&self) -> Option<Rational> {
        match self {
            DecodedValue::Rational(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns the rational sequence of a multi-valued RATIONAL entry
    pub fn as_rationals(&self) -> Option<&[Rational]> {
        match self {
            DecodedValue::RationalList(list) => Some(list),
            _ => None,
        }
    }

    /// Short name of the variant, for log output
    pub fn kind(&self) -> &'static str {
        match self {
            DecodedValue::Absent => "absent",
            DecodedValue::Integer(_) => "integer",
            DecodedValue::Text(_) => "text",
            DecodedValue::Rational(_) => "rational",
            DecodedValue::RationalList(_) => "rational list",
        }
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Absent => write!(f, "<absent>"),
            DecodedValue::Integer(v) => write!(f, "{}", v),
            DecodedValue::Text(s) => write!(f, "{}", s),
            DecodedValue::Rational(r) => write!(f, "{}", r),
            DecodedValue::RationalList(list) => {
                let parts: Vec<String> = list.iter().map(|r| r.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}
