//! Pattern kinds, their parameters, and parameter validation.

use std::fmt;
use std::str::FromStr;

use sortvision_core::{MAX_ARRAY_SIZE, MAX_VALUE, MIN_ARRAY_SIZE, MIN_VALUE};

use crate::error::PatternError;

/// Number of distinct values in `[MIN_VALUE, MAX_VALUE]`.
pub(crate) const VALUE_DOMAIN: usize = (MAX_VALUE - MIN_VALUE + 1) as usize;

/// Shape of a generated array, with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PatternKind {
    /// Uniformly random values.
    Random,
    /// `[1, 2, ..., size]`.
    Sorted,
    /// `[size, ..., 2, 1]`.
    ReverseSorted,
    /// Sorted, then `floor(size * perturbation * size)` random swaps.
    NearlySorted {
        /// Swap density in `[0, 1]`.
        perturbation: f64,
    },
    /// Each slot drawn from `unique_count` random values.
    FewUnique {
        /// Size of the value pool, at least 1.
        unique_count: usize,
    },
    /// Pool of `max(1, floor(size * (1 - duplicate_factor)))` values.
    ManyDuplicates {
        /// Duplication in `[0, 1]`; 1 means a single value.
        duplicate_factor: f64,
    },
    /// Same as [`ManyDuplicates`](Self::ManyDuplicates) with a high
    /// default factor.
    HighDuplicates {
        /// Duplication in `[0, 1]`.
        duplicate_factor: f64,
    },
    /// Normally distributed values via Box–Muller.
    BellCurve {
        /// Distribution mean.
        mean: f64,
        /// Standard deviation, non-negative.
        std_dev: f64,
    },
    /// `step_count` contiguous constant blocks with distinct values.
    Stepped {
        /// Number of blocks, in `[1, size]`.
        step_count: usize,
    },
}

impl PatternKind {
    /// Default perturbation for [`NearlySorted`](Self::NearlySorted).
    pub const DEFAULT_PERTURBATION: f64 = 0.05;
    /// Default pool size for [`FewUnique`](Self::FewUnique).
    pub const DEFAULT_UNIQUE_COUNT: usize = 5;
    /// Default factor for [`ManyDuplicates`](Self::ManyDuplicates).
    pub const DEFAULT_MANY_DUPLICATES: f64 = 0.5;
    /// Default factor for [`HighDuplicates`](Self::HighDuplicates).
    pub const DEFAULT_HIGH_DUPLICATES: f64 = 0.99;
    /// Default mean for [`BellCurve`](Self::BellCurve): midpoint of the value range.
    pub const DEFAULT_MEAN: f64 = (MAX_VALUE + MIN_VALUE) as f64 / 2.0;
    /// Default standard deviation: a sixth of the value range.
    pub const DEFAULT_STD_DEV: f64 = ((MAX_VALUE - MIN_VALUE) / 6) as f64;
    /// Default block count for [`Stepped`](Self::Stepped).
    pub const DEFAULT_STEP_COUNT: usize = 5;

    /// Canonical camel-case name (`"nearlySorted"`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::ReverseSorted => "reverseSorted",
            Self::NearlySorted { .. } => "nearlySorted",
            Self::FewUnique { .. } => "fewUnique",
            Self::ManyDuplicates { .. } => "manyDuplicates",
            Self::HighDuplicates { .. } => "highDuplicates",
            Self::BellCurve { .. } => "bellCurve",
            Self::Stepped { .. } => "stepped",
        }
    }

    /// Check parameters against `size`.
    ///
    /// Size-independent checks run first, so `Stepped` with
    /// `step_count == 0` is rejected whatever the size.
    pub fn validate(&self, size: usize) -> Result<(), PatternError> {
        let pattern = self.name();
        let invalid = |parameter: &'static str, reason: String| PatternError::InvalidParameter {
            pattern,
            parameter,
            reason,
        };
        match *self {
            Self::Random | Self::Sorted | Self::ReverseSorted => Ok(()),
            Self::NearlySorted { perturbation } => {
                check_unit("perturbation", perturbation).map_err(|r| invalid("perturbation", r))
            }
            Self::ManyDuplicates { duplicate_factor } | Self::HighDuplicates { duplicate_factor } => {
                check_unit("duplicate_factor", duplicate_factor)
                    .map_err(|r| invalid("duplicate_factor", r))
            }
            Self::FewUnique { unique_count } => {
                if unique_count == 0 {
                    Err(invalid("unique_count", "must be at least 1".into()))
                } else if unique_count > VALUE_DOMAIN {
                    Err(invalid(
                        "unique_count",
                        format!("{unique_count} exceeds the {VALUE_DOMAIN} representable values"),
                    ))
                } else {
                    Ok(())
                }
            }
            Self::BellCurve { mean, std_dev } => {
                if !mean.is_finite() {
                    Err(invalid("mean", format!("{mean} is not finite")))
                } else if !std_dev.is_finite() || std_dev < 0.0 {
                    Err(invalid(
                        "std_dev",
                        format!("{std_dev} is not a finite non-negative number"),
                    ))
                } else {
                    Ok(())
                }
            }
            Self::Stepped { step_count } => {
                if step_count == 0 {
                    Err(invalid("step_count", "must be at least 1".into()))
                } else if step_count > VALUE_DOMAIN {
                    Err(invalid(
                        "step_count",
                        format!("{step_count} exceeds the {VALUE_DOMAIN} representable values"),
                    ))
                } else if step_count > size {
                    Err(invalid(
                        "step_count",
                        format!("{step_count} exceeds array size {size}"),
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn check_unit(parameter: &str, value: f64) -> Result<(), String> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(format!("{parameter} {value} outside [0, 1]"))
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = PatternError;

    /// Parse a pattern name into its kind with default parameters.
    ///
    /// Case, `-`, `_`, spaces and a leading `generate` are ignored, so
    /// `"nearlySorted"`, `"nearly-sorted"` and `"generateNearlySorted"`
    /// all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let key = key.strip_prefix("generate").unwrap_or(&key);
        let kind = match key {
            "random" => Self::Random,
            "sorted" | "sortedincreasing" => Self::Sorted,
            "reversesorted" | "reverse" | "sorteddecreasing" => Self::ReverseSorted,
            "nearlysorted" => Self::NearlySorted {
                perturbation: Self::DEFAULT_PERTURBATION,
            },
            "fewunique" => Self::FewUnique {
                unique_count: Self::DEFAULT_UNIQUE_COUNT,
            },
            "manyduplicates" => Self::ManyDuplicates {
                duplicate_factor: Self::DEFAULT_MANY_DUPLICATES,
            },
            "highduplicates" => Self::HighDuplicates {
                duplicate_factor: Self::DEFAULT_HIGH_DUPLICATES,
            },
            "bellcurve" => Self::BellCurve {
                mean: Self::DEFAULT_MEAN,
                std_dev: Self::DEFAULT_STD_DEV,
            },
            "stepped" => Self::Stepped {
                step_count: Self::DEFAULT_STEP_COUNT,
            },
            _ => {
                return Err(PatternError::UnknownPattern {
                    name: s.to_string(),
                })
            }
        };
        Ok(kind)
    }
}

/// A request for one generated array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatternSpec {
    /// Shape and parameters.
    pub kind: PatternKind,
    /// Number of elements.
    pub size: usize,
}

impl PatternSpec {
    /// Create a spec. Nothing is checked until [`validate`](Self::validate).
    pub fn new(kind: PatternKind, size: usize) -> Self {
        Self { kind, size }
    }

    /// Check the size against `[MIN_ARRAY_SIZE, MAX_ARRAY_SIZE]`, then the
    /// kind's parameters.
    pub fn validate(&self) -> Result<(), PatternError> {
        if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&self.size) {
            return Err(PatternError::InvalidSize {
                size: self.size,
                min: MIN_ARRAY_SIZE,
                max: MAX_ARRAY_SIZE,
            });
        }
        self.kind.validate(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_in_several_spellings() {
        for name in ["nearlySorted", "nearly-sorted", "NEARLY_SORTED", "generateNearlySorted"] {
            assert_eq!(
                name.parse::<PatternKind>().unwrap(),
                PatternKind::NearlySorted { perturbation: 0.05 }
            );
        }
        assert_eq!(
            "sortedDecreasing".parse::<PatternKind>().unwrap(),
            PatternKind::ReverseSorted
        );
    }

    #[test]
    fn canonical_names_round_trip() {
        for name in [
            "random",
            "sorted",
            "reverseSorted",
            "nearlySorted",
            "fewUnique",
            "manyDuplicates",
            "highDuplicates",
            "bellCurve",
            "stepped",
        ] {
            assert_eq!(name.parse::<PatternKind>().unwrap().name(), name);
        }
    }

    #[test]
    fn unknown_name_is_reported_verbatim() {
        assert_eq!(
            "zigzag".parse::<PatternKind>(),
            Err(PatternError::UnknownPattern {
                name: "zigzag".into()
            })
        );
    }

    #[test]
    fn bell_curve_defaults_cover_the_range() {
        assert_eq!(PatternKind::DEFAULT_MEAN, 0.0);
        assert_eq!(PatternKind::DEFAULT_STD_DEV, 333.0);
    }

    #[test]
    fn size_outside_bounds_rejected() {
        for size in [0, 1, 201] {
            let err = PatternSpec::new(PatternKind::Random, size).validate().unwrap_err();
            assert!(matches!(err, PatternError::InvalidSize { .. }));
        }
        assert!(PatternSpec::new(PatternKind::Random, 2).validate().is_ok());
        assert!(PatternSpec::new(PatternKind::Random, 200).validate().is_ok());
    }

    #[test]
    fn parameters_are_checked() {
        let bad = [
            PatternKind::NearlySorted { perturbation: 1.5 },
            PatternKind::NearlySorted { perturbation: f64::NAN },
            PatternKind::FewUnique { unique_count: 0 },
            PatternKind::ManyDuplicates { duplicate_factor: -0.1 },
            PatternKind::HighDuplicates { duplicate_factor: 2.0 },
            PatternKind::BellCurve { mean: f64::INFINITY, std_dev: 1.0 },
            PatternKind::BellCurve { mean: 0.0, std_dev: -1.0 },
            PatternKind::Stepped { step_count: 0 },
            PatternKind::Stepped { step_count: 11 },
        ];
        for kind in bad {
            let err = kind.validate(10).unwrap_err();
            assert!(
                matches!(err, PatternError::InvalidParameter { .. }),
                "{kind:?} accepted"
            );
        }
        assert!(PatternKind::Stepped { step_count: 10 }.validate(10).is_ok());
    }

    #[test]
    fn error_display_names_pattern_and_parameter() {
        let err = PatternKind::Stepped { step_count: 0 }.validate(6).unwrap_err();
        assert_eq!(err.to_string(), "stepped: invalid step_count: must be at least 1");
    }
}
