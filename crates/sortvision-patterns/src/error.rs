//! Pattern generation errors.

use std::error::Error;
use std::fmt;

/// Errors from building or generating a pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum PatternError {
    /// The requested size is outside the accepted range.
    InvalidSize {
        /// The rejected size.
        size: usize,
        /// Smallest accepted size.
        min: usize,
        /// Largest accepted size.
        max: usize,
    },
    /// A pattern parameter is out of its domain.
    InvalidParameter {
        /// Pattern name (`"nearlySorted"`, ...).
        pattern: &'static str,
        /// Parameter name.
        parameter: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A pattern name did not match any known pattern.
    UnknownPattern {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, min, max } => {
                write!(f, "pattern size {size} outside [{min}, {max}]")
            }
            Self::InvalidParameter {
                pattern,
                parameter,
                reason,
            } => write!(f, "{pattern}: invalid {parameter}: {reason}"),
            Self::UnknownPattern { name } => write!(f, "unknown pattern '{name}'"),
        }
    }
}

impl Error for PatternError {}
