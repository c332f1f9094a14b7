// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::fixed_point::Q64x64;

/// ## Normalized exponent of a Q64.64 value
///
/// Floor of log2 of the integer part, found by bisection over the 64 integer
/// bits. Values below 1.0 (including zero) normalize to 0.
///
/// ### Arguments
///
/// * `x` - The Q64.64 value
///
/// ### Returns
///
/// The exponent in [0, 63]
pub fn normalized_exponent(x: Q64x64) -> u32 {
    let mut int = x.int();
    let mut n = 0u32;

    for shift in [32u32, 16, 8, 4, 2, 1] {
        if int >= 1u64 << shift {
            int >>= shift;
            n += shift;
        }
    }

    n
}

/// Index of the highest set bit of a raw 128-bit magnitude, 0 for 0
#[inline]
pub(crate) fn msb(x: u128) -> u32 {
    let mut x = x;
    let mut n = 0u32;

    for shift in [64u32, 32, 16, 8, 4, 2, 1] {
        if x >= 1u128 << shift {
            x >>= shift;
            n += shift;
        }
    }

    n
}

impl Q64x64 {
    /// ## Normalized exponent, see [`normalized_exponent`]
    #[inline]
    pub fn normalized_exponent(self) -> u32 {
        normalized_exponent(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_integers() {
        assert_eq!(normalized_exponent(Q64x64::ZERO), 0);
        assert_eq!(normalized_exponent(Q64x64::from(1u64)), 0);
        assert_eq!(normalized_exponent(Q64x64::from(2u64)), 1);
        assert_eq!(normalized_exponent(Q64x64::from(3u64)), 1);
        assert_eq!(normalized_exponent(Q64x64::from(4u64)), 2);
    }

    #[test]
    fn fractions_normalize_to_zero() {
        // 0.00001
        assert_eq!(normalized_exponent(Q64x64::new(184467440737095)), 0);
        assert_eq!(normalized_exponent(Q64x64::new(1)), 0);
    }

    #[test]
    fn raw_magnitudes() {
        assert_eq!(normalized_exponent(Q64x64::new(0xFFFFFFFFFFFFFFFF0000000000000000)), 63);
        assert_eq!(normalized_exponent(Q64x64::new(0xFFFFFFFF0000000000000000)), 31);
        assert_eq!(normalized_exponent(Q64x64::new(0xFFFF0000000000000000)), 15);
        assert_eq!(normalized_exponent(Q64x64::new(0xFF0000000000000000)), 7);
        assert_eq!(normalized_exponent(Q64x64::new(0xF0000000000000000)), 3);
        assert_eq!(normalized_exponent(Q64x64::new(0x40000000000000000)), 2);
        assert_eq!(normalized_exponent(Q64x64::new(0x20000000000000000)), 1);
        assert_eq!(normalized_exponent(Q64x64::MAX), 63);
    }

    #[test]
    fn every_power_of_two() {
        for k in 0..64u32 {
            assert_eq!(normalized_exponent(Q64x64::new(1u128 << (64 + k))), k);
            if k > 0 {
                assert_eq!(normalized_exponent(Q64x64::new((1u128 << (64 + k)) - 1)), k - 1);
            }
        }
    }

    #[test]
    fn msb_matches_leading_zeros() {
        assert_eq!(msb(0), 0);
        assert_eq!(msb(1), 0);
        for k in 0..128u32 {
            let x = 1u128 << k;
            assert_eq!(msb(x), 127 - x.leading_zeros());
            assert_eq!(msb(x | (x >> 1)), k);
        }
        assert_eq!(msb(u128::MAX), 127);
    }
}
