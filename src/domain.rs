// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Encoding constants and domain guards.
//!
//! Every guard runs at the entry of the operation that owns the constraint and
//! reports the raw magnitude presented there.

use crate::{error::FixedPointError, fixed_point::Q64x64};

/// 1.0 in Q64.64
pub const ONE: u128 = 1 << 64;

/// 2.0 in Q64.64
pub const TWO: u128 = 2 << 64;

/// 64.0 in Q64.64, the first exponent whose power of two leaves the encoding
pub const SIXTY_FOUR: u128 = 64 << 64;

/// Largest encodable value, 2^64 - 2^-64
pub const MAX: u128 = u128::MAX;

#[inline]
fn reject(op: &'static str, err: FixedPointError) -> FixedPointError {
    log::debug!(target: "uq64_math", "{op} rejected input: {err}");
    err
}

/// x > 0
#[inline]
pub(crate) fn ensure_positive(op: &'static str, x: Q64x64) -> Result<(), FixedPointError> {
    if x.is_zero() {
        return Err(reject(op, FixedPointError::MustBeGreaterThanZero(x.into_raw())));
    }

    Ok(())
}

/// x >= 1
#[inline]
pub(crate) fn ensure_at_least_one(op: &'static str, x: Q64x64) -> Result<(), FixedPointError> {
    if x.into_raw() < ONE {
        return Err(reject(op, FixedPointError::MustBeGreaterThanOne(x.into_raw())));
    }

    Ok(())
}

/// x < 1
#[inline]
pub(crate) fn ensure_below_one(op: &'static str, x: Q64x64) -> Result<(), FixedPointError> {
    if x.into_raw() >= ONE {
        return Err(reject(op, FixedPointError::MustBeLessThanOne(x.into_raw())));
    }

    Ok(())
}

/// x < 2
#[inline]
pub(crate) fn ensure_below_two(op: &'static str, x: Q64x64) -> Result<(), FixedPointError> {
    if x.into_raw() >= TWO {
        return Err(reject(op, FixedPointError::MustBeLessThanTwo(x.into_raw())));
    }

    Ok(())
}

/// exponent < 64, payload is the exponent as presented
#[inline]
pub(crate) fn ensure_below_sixty_four(op: &'static str, exponent: u128) -> Result<(), FixedPointError> {
    if exponent >= SIXTY_FOUR {
        return Err(reject(op, FixedPointError::MustBeLessThan64(exponent)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_encoding() {
        assert_eq!(ONE, Q64x64::ONE.into_raw());
        assert_eq!(TWO, 36893488147419103232);
        assert_eq!(SIXTY_FOUR, 1180591620717411303424);
        assert_eq!(MAX, Q64x64::MAX.into_raw());
    }

    #[test]
    fn guards_accept_boundaries_inside_domain() {
        assert!(ensure_positive("t", Q64x64::new(1)).is_ok());
        assert!(ensure_at_least_one("t", Q64x64::ONE).is_ok());
        assert!(ensure_below_one("t", Q64x64::new(ONE - 1)).is_ok());
        assert!(ensure_below_two("t", Q64x64::new(TWO - 1)).is_ok());
        assert!(ensure_below_sixty_four("t", SIXTY_FOUR - 1).is_ok());
    }

    #[test]
    fn guards_reject_with_raw_payload() {
        assert_eq!(ensure_positive("t", Q64x64::ZERO), Err(FixedPointError::MustBeGreaterThanZero(0)));
        assert_eq!(
            ensure_at_least_one("t", Q64x64::new(ONE - 1)),
            Err(FixedPointError::MustBeGreaterThanOne(ONE - 1))
        );
        assert_eq!(ensure_below_one("t", Q64x64::ONE), Err(FixedPointError::MustBeLessThanOne(ONE)));
        assert_eq!(ensure_below_two("t", Q64x64::new(TWO)), Err(FixedPointError::MustBeLessThanTwo(TWO)));
        assert_eq!(
            ensure_below_sixty_four("t", SIXTY_FOUR),
            Err(FixedPointError::MustBeLessThan64(SIXTY_FOUR))
        );
    }
}
