// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Decimal string conversions, truncating in both directions.

use crate::{error::FixedPointError, fixed_point::Q64x64, integers::U256};

/// Fractional digits produced when rendering
pub const DECIMAL_PLACES: u32 = 20;

/// Fractional digits consumed exactly when parsing; 10^38 still fits a u128
pub const MAX_PARSE_DIGITS: usize = 38;

impl Q64x64 {
    /// ## Render as a decimal string
    ///
    /// Integer part followed by exactly 20 fractional digits, each truncated
    /// towards zero.
    pub fn to_decimal_string(&self) -> String {
        format!("{}.{:020}", self.int(), self.frac_digits())
    }

    /// floor(frac * 10^20 / 2^64), always below 10^20
    #[inline]
    fn frac_digits(&self) -> u128 {
        let scaled = U256::widening_mul(self.frac() as u128, 10u128.pow(DECIMAL_PLACES)) >> 64u32;
        scaled.low_u128()
    }
}

impl core::str::FromStr for Q64x64 {
    type Err = FixedPointError;

    /// ## Parse a decimal literal
    ///
    /// Accepts `[+]digits[.digits]` and yields floor(value * 2^64). The
    /// integer part must fit a u64. Fractional digits past the 38th are
    /// validated and dropped.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.trim();
        let src = src.strip_prefix('+').unwrap_or(src);

        let (int_str, frac_str) = src.split_once('.').unwrap_or((src, ""));
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(FixedPointError::InvalidDecimal);
        }
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(int_str) || !is_digits(frac_str) {
            return Err(FixedPointError::InvalidDecimal);
        }

        let int: u64 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| FixedPointError::IntegerConversionError)?
        };

        let used = &frac_str[..frac_str.len().min(MAX_PARSE_DIGITS)];
        let frac = if used.is_empty() {
            0
        } else {
            // at most 38 digits, cannot overflow
            let numerator: u128 = used.bytes().fold(0u128, |acc, b| acc * 10 + (b - b'0') as u128);
            let denominator = 10u128.pow(used.len() as u32);

            // numerator < denominator, so the quotient is below 2^64
            ((U256::from(numerator) << 64u32) / U256::from(denominator)).low_u128()
        };

        Ok(Q64x64::new(((int as u128) << 64) | frac))
    }
}

impl core::fmt::Display for Q64x64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let frac_str = format!("{:020}", self.frac_digits());
        let trimmed = frac_str.trim_end_matches('0');

        if trimmed.is_empty() {
            write!(f, "{}", self.int())
        } else {
            write!(f, "{}.{}", self.int(), trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rounds_down() {
        assert_eq!("0".parse::<Q64x64>(), Ok(Q64x64::ZERO));
        assert_eq!("1".parse::<Q64x64>(), Ok(Q64x64::ONE));
        assert_eq!("0.00001".parse::<Q64x64>(), Ok(Q64x64::new(184467440737095)));
        assert_eq!("1.1".parse::<Q64x64>(), Ok(Q64x64::new(20291418481080506777)));
        assert_eq!("3.3".parse::<Q64x64>(), Ok(Q64x64::new(60874255443241520332)));
        assert_eq!("2".parse::<Q64x64>(), Ok(Q64x64::new(36893488147419103232)));
        assert_eq!("0.5".parse::<Q64x64>(), Ok(Q64x64::new(1u128 << 63)));
        assert_eq!(".5".parse::<Q64x64>(), Ok(Q64x64::new(1u128 << 63)));
        assert_eq!("+4.".parse::<Q64x64>(), Ok(Q64x64::from(4u64)));
    }

    #[test]
    fn parse_extremes() {
        let max_int: Q64x64 = "18446744073709551615".parse().unwrap();
        assert_eq!(max_int.int(), u64::MAX);
        assert_eq!(max_int.frac(), 0);

        assert_eq!(
            "18446744073709551616".parse::<Q64x64>(),
            Err(FixedPointError::IntegerConversionError)
        );

        // digits beyond the 38th are dropped
        let long: Q64x64 = "0.99999999999999999999999999999999999999999999".parse().unwrap();
        assert_eq!(long.into_raw(), (1u128 << 64) - 1);
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", ".", "abc", "1.2.3", "-1", "1e5", "0x10", "1 .5"] {
            assert_eq!(s.parse::<Q64x64>(), Err(FixedPointError::InvalidDecimal), "{s}");
        }
    }

    #[test]
    fn render_truncates_to_twenty_places() {
        assert_eq!(Q64x64::ONE.to_decimal_string(), "1.00000000000000000000");
        assert_eq!(Q64x64::new(1u128 << 63).to_decimal_string(), "0.50000000000000000000");
        // 2^-64 = 5.42101086242752217003...e-20
        assert_eq!(Q64x64::new(1).to_decimal_string(), "0.00000000000000000005");
        assert_eq!(
            Q64x64::MAX.to_decimal_string(),
            "18446744073709551615.99999999999999999994"
        );
    }

    #[test]
    fn display_trims_zeros() {
        assert_eq!(Q64x64::from(42u64).to_string(), "42");
        assert_eq!("2.25".parse::<Q64x64>().unwrap().to_string(), "2.25");
        assert_eq!(Q64x64::ZERO.to_string(), "0");
    }

    #[test]
    fn roundtrip_loses_at_most_one_ulp() {
        for raw in [0u128, 1, 12345, 1u128 << 64, (7u128 << 64) | 0xDEAD_BEEF, u128::MAX] {
            let x = Q64x64::new(raw);
            let back: Q64x64 = x.to_decimal_string().parse().unwrap();
            assert!(back <= x);
            assert!(x.into_raw() - back.into_raw() <= 1);
        }
    }
}
