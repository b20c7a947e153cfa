//! Validation utilities

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a raw direction flag against the `0`/`1` convention
#[inline(always)]
pub fn direction_flag(context: &'static str, flag: i64) -> Result<()> {
    if flag != 0 && flag != 1 {
        return Err(Error::invalid_direction(
            context,
            "flag must be 0 (encrypt) or 1 (decrypt)",
        ));
    }
    Ok(())
}
