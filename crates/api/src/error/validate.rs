//! Validation utilities shared by providers and the dispatch layer

use super::{Error, PrimitiveError, PrimitiveResult, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> PrimitiveResult<()> {
    if !condition {
        return Err(PrimitiveError::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> PrimitiveResult<()> {
    if actual != expected {
        return Err(PrimitiveError::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> PrimitiveResult<()> {
    if actual < min {
        return Err(PrimitiveError::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of blocks
#[inline(always)]
pub fn block_multiple(context: &'static str, actual: usize, block_size: usize) -> PrimitiveResult<()> {
    if block_size == 0 || actual % block_size != 0 {
        return Err(PrimitiveError::InvalidLength {
            context,
            expected: (actual / block_size.max(1) + 1) * block_size,
            actual,
        });
    }
    Ok(())
}

/// Validate a caller precondition checked by the dispatch layer
#[inline(always)]
pub fn bad_input(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::BadInputData { context });
    }
    Ok(())
}
