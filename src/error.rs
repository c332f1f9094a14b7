// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Failures surfaced by the fixed-point kernel.
///
/// Domain variants carry the raw Q64.64 magnitude that was presented at the
/// failing boundary, and render as `Variant(payload)`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedPointError {
    #[error("MustBeGreaterThanZero({0})")]
    MustBeGreaterThanZero(u128),

    #[error("MustBeGreaterThanOne({0})")]
    MustBeGreaterThanOne(u128),

    #[error("MustBeLessThanOne({0})")]
    MustBeLessThanOne(u128),

    #[error("MustBeLessThanTwo({0})")]
    MustBeLessThanTwo(u128),

    #[error("MustBeLessThan64({0})")]
    MustBeLessThan64(u128),

    #[error("integer conversion error")]
    IntegerConversionError,

    #[error("invalid decimal literal")]
    InvalidDecimal,
}

impl FixedPointError {
    /// Raw magnitude attached to a domain failure, if any
    pub fn payload(&self) -> Option<u128> {
        match *self {
            Self::MustBeGreaterThanZero(v)
            | Self::MustBeGreaterThanOne(v)
            | Self::MustBeLessThanOne(v)
            | Self::MustBeLessThanTwo(v)
            | Self::MustBeLessThan64(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_variant_with_raw_payload() {
        let err = FixedPointError::MustBeLessThanTwo(36893488147419103232);
        assert_eq!(err.to_string(), "MustBeLessThanTwo(36893488147419103232)");

        let err = FixedPointError::MustBeLessThan64(1180591620717411303424);
        assert_eq!(err.to_string(), "MustBeLessThan64(1180591620717411303424)");
    }

    #[test]
    fn payload_only_on_domain_variants() {
        assert_eq!(FixedPointError::MustBeGreaterThanZero(0).payload(), Some(0));
        assert_eq!(FixedPointError::MustBeLessThanOne(7).payload(), Some(7));
        assert_eq!(FixedPointError::InvalidDecimal.payload(), None);
        assert_eq!(FixedPointError::IntegerConversionError.payload(), None);
    }
}
