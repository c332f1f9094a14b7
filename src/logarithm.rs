// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Binary logarithm and the change-of-base family built on it.

use crate::{
    consts::{INV_LOG2_1_0001_X64, LOG10_2_X128},
    domain::{ensure_at_least_one, ensure_below_one, ensure_below_two, ensure_positive, ONE, TWO},
    error::FixedPointError,
    fixed_point::Q64x64,
    integers::U256,
    normalize::msb,
};

/// Base-2 logarithm split into sign and magnitude, so sub-unity inputs can be
/// represented without a signed fixed-point type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct SignedLog2 {
    pub negative: bool,
    /// |log2(x)| in Q64.64
    pub magnitude: u128,
}

/// Shift a nonzero raw magnitude into [1, 2) at 64 fractional bits.
/// Returns the exponent of its top bit alongside. Values below 1 shift left
/// exactly, values of 2 or more drop the bits shifted out.
#[inline]
fn reduce(x: u128) -> (u32, Q64x64) {
    let n = msb(x);
    let m = if n >= 64 { x >> (n - 64) } else { x << (64 - n) };
    (n, Q64x64::new(m))
}

/// 64 fractional bits of log2(x) for x in [1, 2), by repeated squaring.
///
/// Each round squares x; a square of 2 or more means the next result bit is
/// set and x is halved back into [1, 2). Every product is floor-truncated to
/// 64 fractional bits.
fn log2_fraction_bits(x: Q64x64) -> u64 {
    let two = U256::from(TWO);

    let mut x = x;
    let mut result = 0u64;

    for bit in (0..64u32).rev() {
        let mut sq = x.mul_wide(x);
        if sq >= two {
            sq = sq >> 1u32;
            result |= 1u64 << bit;
        }
        // sq < 2 after the halving
        x = Q64x64::new(sq.low_u128());
    }

    result
}

/// log2 of any positive value as sign and magnitude. Caller guarantees x > 0.
pub(crate) fn log2_signed(x: Q64x64) -> SignedLog2 {
    debug_assert!(!x.is_zero());

    let (n, m) = reduce(x.into_raw());
    let frac = log2_fraction_bits(m) as u128;

    if n >= 64 {
        SignedLog2 {
            negative: false,
            magnitude: (((n - 64) as u128) << 64) | frac,
        }
    } else {
        // log2(x) = -(64 - n) + frac, negate into a magnitude
        SignedLog2 {
            negative: true,
            magnitude: (((64 - n) as u128) << 64) - frac,
        }
    }
}

/// ## log2 of a value in [1, 2)
///
/// ### Errors
///
/// * `MustBeLessThanTwo(x)` - x >= 2
/// * `MustBeGreaterThanOne(x)` - x < 1
pub fn log_base_2_of_fraction(x: Q64x64) -> Result<Q64x64, FixedPointError> {
    const OP: &str = "log_base_2_of_fraction";
    ensure_below_two(OP, x)?;
    ensure_at_least_one(OP, x)?;

    let frac = log2_fraction_bits(x);
    Ok(Q64x64::new(frac as u128))
}

/// ## log2 of a value >= 1
///
/// The integer part comes from the top bit, the fraction from the value
/// shifted into [1, 2).
///
/// ### Errors
///
/// * `MustBeGreaterThanOne(x)` - x < 1
pub fn log_base_2(x: Q64x64) -> Result<Q64x64, FixedPointError> {
    ensure_at_least_one("log_base_2", x)?;

    let (n, m) = reduce(x.into_raw());
    let frac = log2_fraction_bits(m) as u128;
    Ok(Q64x64::new((((n - 64) as u128) << 64) | frac))
}

/// ## log10 of a value >= 1
///
/// log2(x) * log10(2), one truncation over a U256 product.
pub fn log_base_10(x: Q64x64) -> Result<Q64x64, FixedPointError> {
    let l = log_base_2(x)?;

    // l < 2^71 and the constant < 2^127, so the shifted product fits u128
    let p = U256::widening_mul(l.into_raw(), LOG10_2_X128) >> 128u32;
    Ok(Q64x64::new(p.low_u128()))
}

/// ## log base 1.0001 of a value >= 1
///
/// log2(x) / log2(1.0001), as a product with the embedded reciprocal.
pub fn log_base_1_0001(x: Q64x64) -> Result<Q64x64, FixedPointError> {
    let l = log_base_2(x)?;

    // at most 64 * 6931.82 < 2^19 integer bits after the shift
    let p = U256::widening_mul(l.into_raw(), INV_LOG2_1_0001_X64) >> 64u32;
    Ok(Q64x64::new(p.low_u128()))
}

/// ## log base 0.5 of a value in (0, 1]
///
/// Equals -log2(x), taken through the signed path since x < 1.
///
/// ### Errors
///
/// * `MustBeGreaterThanZero(0)` - x = 0
/// * `MustBeLessThanOne(x)` - x > 1
pub fn log_base_0_5(x: Q64x64) -> Result<Q64x64, FixedPointError> {
    const OP: &str = "log_base_0_5";
    ensure_positive(OP, x)?;
    if x.into_raw() == ONE {
        return Ok(Q64x64::ZERO);
    }
    ensure_below_one(OP, x)?;

    Ok(Q64x64::new(log2_signed(x).magnitude))
}

impl Q64x64 {
    /// ## log2 of a value in [1, 2), see [`log_base_2_of_fraction`]
    #[inline]
    pub fn log2_of_fraction(self) -> Result<Self, FixedPointError> {
        log_base_2_of_fraction(self)
    }

    /// ## log2, see [`log_base_2`]
    #[inline]
    pub fn log2(self) -> Result<Self, FixedPointError> {
        log_base_2(self)
    }

    /// ## log10, see [`log_base_10`]
    #[inline]
    pub fn log10(self) -> Result<Self, FixedPointError> {
        log_base_10(self)
    }

    /// ## log base 1.0001, see [`log_base_1_0001`]
    #[inline]
    pub fn log_1_0001(self) -> Result<Self, FixedPointError> {
        log_base_1_0001(self)
    }

    /// ## log base 0.5, see [`log_base_0_5`]
    #[inline]
    pub fn log_0_5(self) -> Result<Self, FixedPointError> {
        log_base_0_5(self)
    }
}
