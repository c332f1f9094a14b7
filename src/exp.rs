// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Powers of two and the general power built on them.

use crate::{
    consts::POW2_FRACTION_TABLE,
    domain::{ensure_below_one, ensure_below_sixty_four, ensure_positive},
    error::FixedPointError,
    fixed_point::{Q1x127, Q64x64},
    integers::U256,
    logarithm::log2_signed,
};

/// 2^(f / 2^64) in Q1.127 for any 64-bit fraction f.
///
/// Starts from 1 and multiplies in 2^(2^-(i+1)) for every set bit i, most
/// significant first. The product of any subset stays below 2.
fn pow2_fraction_q127(f: u64) -> Q1x127 {
    let mut acc = Q1x127::ONE;

    for (i, factor) in POW2_FRACTION_TABLE.iter().enumerate() {
        if f & (1u64 << (63 - i)) != 0 {
            acc = Q1x127::new(acc.mul_wide(Q1x127::new(*factor)).low_u128());
        }
    }

    acc
}

/// 2^x for x < 64, no guard. Shifts the 127-bit accumulator straight to
/// Q64.64 so only one truncation happens at the boundary.
#[inline]
fn pow2_unchecked(x: u128) -> Q64x64 {
    let k = (x >> 64) as u32;
    let f = x as u64;

    if f == 0 {
        return Q64x64::new(1u128 << (64 + k));
    }

    Q64x64::new(pow2_fraction_q127(f).into_raw() >> (63 - k))
}

/// 2^-m for a Q64.64 magnitude m. Underflows to zero instead of failing.
fn pow2_negative(m: u128) -> Q64x64 {
    let k = m >> 64;
    let f = m as u64;

    if f == 0 {
        // 2^-k
        return Q64x64::ONE.checked_shr(k.min(128) as u32).unwrap_or(Q64x64::ZERO);
    }

    // 2^-(k + f) = 2^-(k + 1) * 2^(1 - f), and 1 - f lies in (0, 1)
    let acc = pow2_fraction_q127(f.wrapping_neg());
    let shift = k.saturating_add(64);
    if shift >= 128 {
        return Q64x64::ZERO;
    }

    Q64x64::new(acc.into_raw() >> shift as u32)
}

/// ## 2^x for x in (0, 1)
///
/// ### Errors
///
/// * `MustBeGreaterThanZero(0)` - x = 0
/// * `MustBeLessThanOne(x)` - x >= 1
pub fn pow_base_2_of_fraction(x: Q64x64) -> Result<Q64x64, FixedPointError> {
    const OP: &str = "pow_base_2_of_fraction";
    ensure_positive(OP, x)?;
    ensure_below_one(OP, x)?;

    Ok(Q64x64::from(pow2_fraction_q127(x.frac())))
}

/// ## 2^x for x in [0, 64)
///
/// The integer part becomes a shift, the fraction goes through
/// [`pow_base_2_of_fraction`]'s accumulator.
///
/// ### Errors
///
/// * `MustBeLessThan64(x)` - the integer part of x is 64 or more
pub fn pow_base_2(x: Q64x64) -> Result<Q64x64, FixedPointError> {
    ensure_below_sixty_four("pow_base_2", x.into_raw())?;

    Ok(pow2_unchecked(x.into_raw()))
}

/// ## base^exponent
///
/// Computed as 2^(exponent * log2(base)) with a signed logarithm, so bases
/// below one are supported. A zero exponent yields one, a zero base zero.
///
/// ### Errors
///
/// * `MustBeLessThan64(p)` - p = exponent * log2(base) is 64 or more; the
///   payload saturates at u128::MAX
pub fn pow(base: Q64x64, exponent: Q64x64) -> Result<Q64x64, FixedPointError> {
    if exponent.is_zero() {
        return Ok(Q64x64::ONE);
    }
    if base.is_zero() {
        return Ok(Q64x64::ZERO);
    }

    let log = log2_signed(base);
    let product = U256::widening_mul(log.magnitude, exponent.into_raw()) >> 64u32;

    if !log.negative {
        let p = product.saturating_as_u128();
        ensure_below_sixty_four("pow", p)?;

        return Ok(pow2_unchecked(p));
    }

    match product.checked_as_u128() {
        Some(m) => Ok(pow2_negative(m)),
        None => {
            log::trace!(target: "uq64_math", "pow underflow: base={:#x} exponent={:#x}", base.0, exponent.0);
            Ok(Q64x64::ZERO)
        }
    }
}

impl Q64x64 {
    /// ## 2^x for x in (0, 1), see [`pow_base_2_of_fraction`]
    #[inline]
    pub fn pow2_of_fraction(self) -> Result<Self, FixedPointError> {
        pow_base_2_of_fraction(self)
    }

    /// ## 2^x, see [`pow_base_2`]
    #[inline]
    pub fn pow2(self) -> Result<Self, FixedPointError> {
        pow_base_2(self)
    }

    /// ## self^exponent, see [`pow`]
    #[inline]
    pub fn pow(self, exponent: Self) -> Result<Self, FixedPointError> {
        pow(self, exponent)
    }
}
