// File: crates/plot-core/src/params.rs
// Summary: Parameter parsing and validation for the sampling range.

use thiserror::Error;

/// Everything that can go wrong with operator input. Raised before any
/// sampling happens, so a caller can keep its previous chart untouched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    #[error("{field} is not a valid integer: {value:?}")]
    NotAnInteger { field: &'static str, value: String },
    #[error("minimum {min} exceeds maximum {max}")]
    EmptyRange { min: i64, max: i64 },
    #[error("step must be at least 1, got {0}")]
    StepTooSmall(i64),
    #[error("sample size must be at least 1, got {0}")]
    CountTooSmall(i64),
}

/// Validated sampling parameters.
/// Contract: min <= max, step >= 1, count >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parameters {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub count: usize,
}

impl Parameters {
    pub fn new(min: i64, max: i64, step: i64, count: i64) -> Result<Self, ParameterError> {
        if step < 1 {
            return Err(ParameterError::StepTooSmall(step));
        }
        if count < 1 {
            return Err(ParameterError::CountTooSmall(count));
        }
        if min > max {
            return Err(ParameterError::EmptyRange { min, max });
        }
        Ok(Self { min, max, step, count: count as usize })
    }

    /// Parse the four text fields as integers, then validate.
    pub fn parse(min: &str, max: &str, step: &str, count: &str) -> Result<Self, ParameterError> {
        Self::new(
            parse_field("min", min)?,
            parse_field("max", max)?,
            parse_field("step", step)?,
            parse_field("count", count)?,
        )
    }

    /// Number of points in {min, min+step, ...} <= max.
    /// Computed in i128 so extreme ranges cannot overflow.
    pub fn progression_len(&self) -> usize {
        let span = self.max as i128 - self.min as i128;
        (span / self.step as i128 + 1) as usize
    }

    /// The idx-th point of the progression. Always <= max for valid indices.
    pub fn value_at(&self, idx: usize) -> i64 {
        (self.min as i128 + idx as i128 * self.step as i128) as i64
    }

    /// The progression itself. Worth materializing only for tests and
    /// small ranges; sampling maps indices instead.
    pub fn progression(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.progression_len()).map(move |i| self.value_at(i))
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<i64, ParameterError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ParameterError::NotAnInteger { field, value: value.to_string() })
}
