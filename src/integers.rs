// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use ::uint::construct_uint;

// these have scuffed doc comments because the macro codegens the beginning of them
construct_uint! {
    /// with 256-bits of precision, consisting of four 64-bit words.
    pub struct U256(4);
}

impl U256 {
    /// Full 256-bit product of two u128 values, never overflows
    #[inline]
    pub fn widening_mul(a: u128, b: u128) -> U256 {
        U256::from(a) * U256::from(b)
    }

    /// Narrow to u128 if the upper two words are clear
    #[inline]
    pub fn checked_as_u128(&self) -> Option<u128> {
        let U256(ref arr) = *self;
        if arr[2] != 0 || arr[3] != 0 {
            return None;
        }

        Some(((arr[1] as u128) << 64) | (arr[0] as u128))
    }

    /// Narrow to u128, clamping to u128::MAX
    #[inline]
    pub fn saturating_as_u128(&self) -> u128 {
        self.checked_as_u128().unwrap_or(u128::MAX)
    }
}
