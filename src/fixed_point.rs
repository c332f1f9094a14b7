// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{error::FixedPointError, integers::U256};

/// Usage example:
///
/// fixed_point! {
///     pub struct Q64x64(u128, U256, 64); // unsigned Q64.64
/// }
#[macro_export]
macro_rules! fixed_point {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident ( $storage:tt, $wide:ty, $frac_bits:expr );
    ) => {
        #[repr(transparent)]
        $(#[$attr])*
        #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Debug, Default)]
        $vis struct $name(pub $storage);

        impl $name {
            pub const FRAC_BITS: u32 = $frac_bits;
            pub const MAX: Self = Self(<$storage>::MAX);
            pub const MIN: Self = Self(<$storage>::MIN);
            pub const ZERO: Self = Self(0 as $storage);
            pub const ONE: Self = Self((1 as $storage) << Self::FRAC_BITS);

            // --- compile-time guards ---
            const __ASSERTS: () = {
                const S_BITS: usize = core::mem::size_of::<$storage>() * 8;
                const W_BITS: usize = core::mem::size_of::<$wide>() * 8;

                // fractional bits must fit in storage
                if !($frac_bits < S_BITS) {
                    panic!("FRAC_BITS must be < storage bit-width");
                }

                // wide must hold a full product
                if !(W_BITS >= 2 * S_BITS) {
                    panic!("Wide bit-width must be >= twice the storage bit-width");
                }
            };

            #[inline]
            pub const fn new(value: $storage) -> Self {
                let () = Self::__ASSERTS;
                Self(value)
            }

            #[inline] pub const fn into_raw(self) -> $storage { self.0 }
            #[inline] pub const fn is_zero(&self) -> bool { self.0 == 0 }

            // --- arithmetic helpers, storage domain ---
            #[inline] pub fn saturating_add(self, rhs: Self) -> Self { Self(self.0.saturating_add(rhs.0)) }
            #[inline] pub fn saturating_sub(self, rhs: Self) -> Self { Self(self.0.saturating_sub(rhs.0)) }
            #[inline] pub fn checked_add(self, rhs: Self) -> Option<Self> { self.0.checked_add(rhs.0).map(Self) }
            #[inline] pub fn checked_sub(self, rhs: Self) -> Option<Self> { self.0.checked_sub(rhs.0).map(Self) }

            // --- widening arithmetic, into $wide domain ---

            /// (a * b) >> FRAC_BITS, kept wide (trunc towards zero)
            #[inline]
            pub fn mul_wide(self, rhs: Self) -> $wide {
                let a: $wide = <$wide as core::convert::From<$storage>>::from(self.0);
                let b: $wide = <$wide as core::convert::From<$storage>>::from(rhs.0);
                (a * b) >> Self::FRAC_BITS
            }

            /// (a * b) >> FRAC_BITS, None when the result leaves storage range
            #[inline]
            pub fn checked_mul_trunc(self, rhs: Self) -> Option<Self> {
                <$storage as core::convert::TryFrom<$wide>>::try_from(self.mul_wide(rhs))
                    .ok()
                    .map(Self)
            }

            /// (a * b) >> FRAC_BITS (trunc towards zero)
            #[track_caller]
            #[inline]
            pub fn mul_trunc(self, rhs: Self) -> Self {
                self.checked_mul_trunc(rhs)
                    .unwrap_or_else(|| panic!("multiplication overflow"))
            }

            /// (a << FRAC_BITS) / b, None on division by zero or overflow
            #[inline]
            pub fn checked_div_trunc(self, rhs: Self) -> Option<Self> {
                if rhs.0 == 0 {
                    return None;
                }

                let num: $wide = <$wide as core::convert::From<$storage>>::from(self.0) << Self::FRAC_BITS;
                let den: $wide = <$wide as core::convert::From<$storage>>::from(rhs.0);
                <$storage as core::convert::TryFrom<$wide>>::try_from(num / den)
                    .ok()
                    .map(Self)
            }

            /// (a << FRAC_BITS) / b
            #[track_caller]
            #[inline]
            pub fn div_trunc(self, rhs: Self) -> Self {
                debug_assert!(rhs.0 != 0, "division by zero");

                self.checked_div_trunc(rhs)
                    .unwrap_or_else(|| panic!("division overflow"))
            }

            /// (x * x) >> FRAC_BITS
            #[track_caller]
            #[inline]
            pub fn square(self) -> Self {
                self.checked_mul_trunc(self)
                    .unwrap_or_else(|| panic!("square overflow"))
            }

            #[inline] pub fn leading_zeros(&self) -> u32 { self.0.leading_zeros() }
            #[inline] pub fn trailing_zeros(&self) -> u32 { self.0.trailing_zeros() }
            #[inline] pub fn checked_shl(self, rhs: u32) -> Option<Self> { self.0.checked_shl(rhs).map(Self) }
            #[inline] pub fn checked_shr(self, rhs: u32) -> Option<Self> { self.0.checked_shr(rhs).map(Self) }
        }

        // ---- operator impls (PANIC on overflow for add/sub) ----
        impl core::ops::Add<$name> for $name {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn add(self, rhs: Self) -> Self {
                let sum = self.0
                    .checked_add(rhs.0)
                    .unwrap_or_else(|| panic!("addition overflow"));
                Self(sum)
            }
        }

        impl core::ops::Sub<$name> for $name {
            type Output = Self;

            #[track_caller]
            #[inline]
            fn sub(self, rhs: Self) -> Self {
                let diff = self.0
                    .checked_sub(rhs.0)
                    .unwrap_or_else(|| panic!("subtraction overflow"));
                Self(diff)
            }
        }

        impl core::ops::Mul<$name> for $name {
            type Output = Self;
            #[track_caller]
            #[inline] fn mul(self, rhs: Self) -> Self { self.mul_trunc(rhs) }
        }
        impl core::ops::Div<$name> for $name {
            type Output = Self;
            #[track_caller]
            #[inline] fn div(self, rhs: Self) -> Self { self.div_trunc(rhs) }
        }

        impl core::ops::Shl<u32> for $name {
            type Output = Self;

            #[inline]
            fn shl(self, shift: u32) -> Self {
                Self(self.0 << shift)
            }
        }

        impl core::ops::Shr<u32> for $name {
            type Output = Self;

            #[inline]
            fn shr(self, shift: u32) -> Self {
                Self(self.0 >> shift)
            }
        }

        impl core::ops::ShlAssign<u32> for $name {
            #[inline]
            fn shl_assign(&mut self, shift: u32) { self.0 <<= shift; }
        }

        impl core::ops::ShrAssign<u32> for $name {
            #[inline]
            fn shr_assign(&mut self, shift: u32) { self.0 >>= shift; }
        }

        // Optional: bytemuck
        #[cfg(feature = "bytemuck")]
        unsafe impl bytemuck::Zeroable for $name {}
        #[cfg(feature = "bytemuck")]
        unsafe impl bytemuck::Pod for $name {}

        // Optional: serde
        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where S: serde::Serializer
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where D: serde::Deserializer<'de>
            {
                <$storage as serde::Deserialize<'de>>::deserialize(deserializer).map(Self)
            }
        }
    };
}

fixed_point! {
    /// Unsigned Q64.64 fixed-point numerical type
    ///
    /// ## Fields
    ///
    /// * `0` - The Q64.64 value represented as a u128
    ///
    /// ## Notes
    ///
    /// * Uses a U256 intermediate type for multiplication and division
    /// * 64 integer bits, 64 fractional bits
    /// * Range: integer = [0, 2^64), fractional resolution = 2^-64 ≈ 5.421 * 10^-20
    pub struct Q64x64(u128, U256, 64);
}

fixed_point! {
    /// Unsigned Q1.127 fixed-point numerical type
    ///
    /// Working precision of the fractional exponent loop.
    ///
    /// * 1 integer bit, 127 fractional bits
    /// * Range: integer = [0, 2), fractional resolution = 2^-127 ≈ 5.877 * 10^-39
    pub struct Q1x127(u128, U256, 127);
}

impl Q64x64 {
    /// Fractional bits of the value as a plain u64
    #[inline]
    pub const fn frac(self) -> u64 {
        self.0 as u64
    }

    /// Integer part of the value
    #[inline]
    pub const fn int(self) -> u64 {
        (self.0 >> 64) as u64
    }
}

impl core::convert::From<u64> for Q64x64 {
    #[inline]
    fn from(v: u64) -> Self {
        Self((v as u128) << Self::FRAC_BITS)
    }
}

impl core::convert::From<u32> for Q64x64 {
    #[inline]
    fn from(v: u32) -> Self {
        Self((v as u128) << Self::FRAC_BITS)
    }
}

impl core::convert::TryFrom<u128> for Q64x64 {
    type Error = FixedPointError;

    #[inline]
    fn try_from(v: u128) -> Result<Self, Self::Error> {
        let short: u64 = <_ as core::convert::TryFrom<u128>>::try_from(v)
            .map_err(|_| FixedPointError::IntegerConversionError)?;
        Ok(Self::from(short))
    }
}

impl core::convert::From<Q64x64> for Q1x127 {
    /// Values must lie in [0, 2); higher bits are discarded
    #[inline]
    fn from(value: Q64x64) -> Self {
        Q1x127::new(value.into_raw() << 63)
    }
}

impl core::convert::From<Q1x127> for Q64x64 {
    #[inline]
    fn from(value: Q1x127) -> Self {
        let raw = value.into_raw() >> 63; // trim from 127 to 64 frac bits
        Q64x64::new(raw)
    }
}

#[macro_export]
macro_rules! q64x64 {
    ($num:literal / $den:literal) => {{
        const S: u128 = 1u128 << 64;

        const N: u128 = $num as u128;
        const D: u128 = $den as u128;

        const VAL: u128 = (N * S) / D;

        $crate::fixed_point::Q64x64::new(VAL)
    }};
    ($int:tt) => {{
        const S: u128 = 1u128 << 64;

        const VAL: u128 = ($int as u128) * S;

        $crate::fixed_point::Q64x64::new(VAL)
    }};
}

pub use q64x64;
