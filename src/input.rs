//! Validation of user-entered text into bounded problem instances.
//!
//! Solvers assume their inputs are within these bounds; anything outside is
//! rejected here with an [`InputError`] before a solve is triggered.

use thiserror::Error;

use crate::problems::{Fibonacci, FrogJump, HouseRobber};

pub const MIN_FIBONACCI_N: i64 = 1;
pub const MAX_FIBONACCI_N: i64 = 20;
/// Longest house/height list accepted.
pub const MAX_VALUES: usize = 7;
pub const MIN_JUMP: i64 = 1;
pub const MAX_JUMP: i64 = 4;

/// A recoverable problem with user input, shown next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("please enter a value")]
    Missing,
    #[error("'{0}' is not a valid integer")]
    NotAnInteger(String),
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("please enter no more than {max} values, got {count}")]
    TooManyValues { count: usize, max: usize },
    #[error("house values must be non-negative, got {0}")]
    NegativeValue(i64),
    #[error("k ({k}) cannot be greater than array size ({len})")]
    JumpExceedsLength { k: usize, len: usize },
}

fn parse_int(text: &str) -> Result<i64, InputError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotAnInteger(trimmed.to_string()))
}

fn in_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<i64, InputError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Parse a comma-separated list of 1..=[`MAX_VALUES`] integers. Segments
/// that are blank after trimming are skipped, so `"1,2,"` is `[1, 2]`.
pub fn parse_values(text: &str) -> Result<Vec<i64>, InputError> {
    let values = text
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .map(parse_int)
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(InputError::Missing);
    }
    if values.len() > MAX_VALUES {
        return Err(InputError::TooManyValues {
            count: values.len(),
            max: MAX_VALUES,
        });
    }
    Ok(values)
}

/// Fibonacci argument `n` in 1..=20.
pub fn parse_fibonacci(text: &str) -> Result<Fibonacci, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Missing);
    }
    let n = in_range("n", parse_int(text)?, MIN_FIBONACCI_N, MAX_FIBONACCI_N)?;
    Ok(Fibonacci::new(n as usize))
}

/// House values: up to seven non-negative integers.
pub fn parse_house_robber(text: &str) -> Result<HouseRobber, InputError> {
    let values = parse_values(text)?;
    if let Some(&negative) = values.iter().find(|&&v| v < 0) {
        return Err(InputError::NegativeValue(negative));
    }
    Ok(HouseRobber::new(values))
}

/// Step heights (up to seven integers) and a jump distance `k` in 1..=4 that
/// does not exceed the number of steps.
pub fn parse_frog_jump(heights: &str, k: &str) -> Result<FrogJump, InputError> {
    let heights = parse_values(heights)?;
    if k.trim().is_empty() {
        return Err(InputError::Missing);
    }
    let k = in_range("k", parse_int(k)?, MIN_JUMP, MAX_JUMP)? as usize;
    if k > heights.len() {
        return Err(InputError::JumpExceedsLength {
            k,
            len: heights.len(),
        });
    }
    Ok(FrogJump::new(heights, k))
}
