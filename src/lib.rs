// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

//! Deterministic math over unsigned Q64.64 fixed-point values.
//!
//! Every result is floor-truncated at each stage, so identical inputs give
//! identical outputs on every platform.

pub mod error;
pub mod fixed_point;
pub mod integers;
pub mod domain;
pub mod decimal;
pub mod consts;

mod normalize;
mod logarithm;
mod exp;
mod sqrt;

pub use error::FixedPointError;
pub use fixed_point::Q64x64;

pub use normalize::normalized_exponent;
pub use logarithm::{log_base_0_5, log_base_1_0001, log_base_10, log_base_2, log_base_2_of_fraction};
pub use exp::{pow, pow_base_2, pow_base_2_of_fraction};
pub use sqrt::sqrt;
