//! Array input validation and free-form text parsing.
//!
//! [`validate_array`] is all-or-nothing: it either accepts every element
//! or reports every violated constraint (one entry per kind).

use std::error::Error;
use std::fmt;

use smallvec::SmallVec;
use sortvision_core::{MAX_ARRAY_SIZE, MAX_VALUE, MIN_ARRAY_SIZE, MIN_VALUE};

/// One raw element of an input array before validation.
#[derive(Clone, Debug, PartialEq)]
pub enum InputValue {
    /// An integer of any width.
    Int(i64),
    /// A number that may or may not be integral.
    Float(f64),
    /// Anything that is not a number.
    Text(String),
}

impl InputValue {
    /// The integer this value denotes, if any. Integral finite floats
    /// count as integers.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            Self::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
            _ => None,
        }
    }
}

impl From<i32> for InputValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for InputValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for InputValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for InputValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for InputValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// A violated input constraint.
///
/// `Display` yields the short label (`"too short"`, `"too long"`,
/// `"value out of range"`, `"non-integer value"`);
/// [`detail`](Self::detail) adds the specifics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Fewer than `MIN_ARRAY_SIZE` elements.
    TooShort {
        /// Actual length.
        len: usize,
    },
    /// More than `MAX_ARRAY_SIZE` elements.
    TooLong {
        /// Actual length.
        len: usize,
    },
    /// At least one integer outside `[MIN_VALUE, MAX_VALUE]`.
    OutOfRange {
        /// Number of offending elements.
        count: usize,
        /// First offending value.
        first: i64,
    },
    /// At least one element is not an integer.
    NonInteger {
        /// Number of offending elements.
        count: usize,
    },
}

impl Violation {
    /// Human-readable description including counts and bounds.
    pub fn detail(&self) -> String {
        match self {
            Self::TooShort { len } => {
                format!("array has {len} elements, at least {MIN_ARRAY_SIZE} required")
            }
            Self::TooLong { len } => {
                format!("array has {len} elements, at most {MAX_ARRAY_SIZE} allowed")
            }
            Self::OutOfRange { count, first } => format!(
                "{count} value(s) outside [{MIN_VALUE}, {MAX_VALUE}], first {first}"
            ),
            Self::NonInteger { count } => format!("{count} value(s) are not integers"),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TooShort { .. } => "too short",
            Self::TooLong { .. } => "too long",
            Self::OutOfRange { .. } => "value out of range",
            Self::NonInteger { .. } => "non-integer value",
        })
    }
}

/// Every constraint an input array violated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    violations: SmallVec<[Violation; 4]>,
}

impl ValidationError {
    /// Violations in a fixed order: length, range, integrality.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The short labels, one per violation.
    pub fn labels(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Outcome of [`validate_array`].
#[derive(Clone, Debug, PartialEq)]
pub enum Validation {
    /// The input was empty: nothing to run yet. Not an error.
    NoArray,
    /// Every element is an in-range integer and the length is acceptable.
    Accepted(Vec<i32>),
    /// At least one constraint was violated; nothing is accepted.
    Rejected(ValidationError),
}

impl Validation {
    /// Whether the input was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// `Ok(None)` for no array, `Ok(Some(values))` when accepted.
    pub fn into_result(self) -> Result<Option<Vec<i32>>, ValidationError> {
        match self {
            Self::NoArray => Ok(None),
            Self::Accepted(values) => Ok(Some(values)),
            Self::Rejected(e) => Err(e),
        }
    }
}

/// Validate a candidate array.
///
/// ```
/// use sortvision_engine::{validate_array, InputValue, Validation};
///
/// let input: Vec<InputValue> = vec![1.into(), 2.into(), "x".into()];
/// match validate_array(input) {
///     Validation::Rejected(e) => assert_eq!(e.labels(), ["non-integer value"]),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
pub fn validate_array<I>(values: I) -> Validation
where
    I: IntoIterator,
    I::Item: Into<InputValue>,
{
    let values: Vec<InputValue> = values.into_iter().map(Into::into).collect();
    if values.is_empty() {
        return Validation::NoArray;
    }

    let mut violations = SmallVec::new();
    let len = values.len();
    if len < MIN_ARRAY_SIZE {
        violations.push(Violation::TooShort { len });
    } else if len > MAX_ARRAY_SIZE {
        violations.push(Violation::TooLong { len });
    }

    let mut accepted = Vec::with_capacity(len);
    let mut out_of_range: Option<(usize, i64)> = None;
    let mut non_integer = 0;
    for value in &values {
        match value.as_integer() {
            Some(v) => match i32::try_from(v) {
                Ok(v) if (MIN_VALUE..=MAX_VALUE).contains(&v) => accepted.push(v),
                _ => {
                    let entry = out_of_range.get_or_insert((0, v));
                    entry.0 += 1;
                }
            },
            None => non_integer += 1,
        }
    }
    if let Some((count, first)) = out_of_range {
        violations.push(Violation::OutOfRange { count, first });
    }
    if non_integer > 0 {
        violations.push(Violation::NonInteger { count: non_integer });
    }

    if violations.is_empty() {
        Validation::Accepted(accepted)
    } else {
        Validation::Rejected(ValidationError { violations })
    }
}

/// Split free-form text on commas and whitespace into raw values.
///
/// Tokens matching `-?[0-9]+` become [`InputValue::Int`]; tokens too large
/// for `i64` saturate, so they still fail the range check. Other numeric
/// tokens become [`InputValue::Float`]; everything else is
/// [`InputValue::Text`].
pub fn parse_input(text: &str) -> Vec<InputValue> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> InputValue {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return match token.parse::<i64>() {
            Ok(v) => InputValue::Int(v),
            Err(_) if token.starts_with('-') => InputValue::Int(i64::MIN),
            Err(_) => InputValue::Int(i64::MAX),
        };
    }
    match token.parse::<f64>() {
        Ok(f) if f.is_finite() => InputValue::Float(f),
        _ => InputValue::Text(token.to_string()),
    }
}

/// [`parse_input`] followed by [`validate_array`].
pub fn validate_text(text: &str) -> Validation {
    validate_array(parse_input(text))
}
