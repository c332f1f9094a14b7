// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{fixed_point::Q64x64, integers::U256};

/// ## Square root of a Q64.64 value
///
/// Integer square root of `x << 64`, built one bit at a time from bit 95 down
/// (the root of a 192-bit target is below 2^96). Each candidate is kept only
/// if its square does not exceed the target, so the result is the floor.
///
/// ### Arguments
///
/// * `x` - Any Q64.64 value
///
/// ### Returns
///
/// floor(sqrt(x) * 2^64) as Q64.64
pub fn sqrt(x: Q64x64) -> Q64x64 {
    if x.is_zero() {
        return Q64x64::ZERO;
    }

    let target = U256::from(x.into_raw()) << 64u32;

    let mut result = 0u128;
    let mut bit = 1u128 << 95;

    while bit != 0 {
        let candidate = result | bit;
        if U256::widening_mul(candidate, candidate) <= target {
            result = candidate;
        }
        bit >>= 1;
    }

    Q64x64::new(result)
}

impl Q64x64 {
    /// ## Floor square root, see [`sqrt`]
    #[inline]
    pub fn sqrt(self) -> Self {
        sqrt(self)
    }
}
