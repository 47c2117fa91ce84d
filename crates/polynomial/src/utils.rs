// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Utility functions for polynomial operations.
//!
//! The scalar and slice kernels here assume a positive modulus and do not
//! validate it; the [`Polynomial`] methods and [`reduce_in_ring`] check
//! preconditions before delegating.

use crate::errors::PolynomialError;
use crate::Polynomial;

/// Reduces a number modulo a positive modulus.
///
/// Floored modulo: the result is in `[0, modulus)` regardless of the sign of
/// `x`, so `reduce(-1, 5)` is `4`. Rust's truncating `%` is adjusted
/// explicitly.
///
/// # Arguments
///
/// * `x` - The number to reduce.
/// * `modulus` - The modulus to reduce by. Must be positive.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn reduce(x: i64, modulus: i64) -> i64 {
    let mut r = x % modulus;
    if r < 0 {
        r += modulus;
    }
    r
}

/// Reduces a number modulo a positive modulus and centers it.
///
/// The result is the representative of `x` in the balanced range
/// `[−⌊q/2⌋, q − ⌊q/2⌋ − 1]`, equivalent to `((x + ⌊q/2⌋) mod q) − ⌊q/2⌋`
/// with floored modulo.
///
/// # Arguments
///
/// * `x` - The number to reduce and center.
/// * `modulus` - The modulus `q` used for reduction. Must be positive.
/// * `half_modulus` - Precomputed `⌊q/2⌋`.
pub fn reduce_and_center(x: i64, modulus: i64, half_modulus: i64) -> i64 {
    let mut r = reduce(x, modulus);

    // Fold the upper part of [0, q) down by q. For odd q the range keeps
    // half_modulus itself; for even q it does not.
    if modulus % 2 == 1 {
        if r > half_modulus {
            r -= modulus;
        }
    } else if r >= half_modulus {
        r -= modulus;
    }

    r
}

/// Reduces each coefficient in the given slice by the modulus.
///
/// # Arguments
///
/// * `coefficients` - A slice of coefficients to be reduced.
/// * `modulus` - The modulus to reduce by. Must be positive.
///
/// # Returns
///
/// A new `Vec<i64>` where each element is in `[0, modulus)`.
pub fn reduce_coefficients(coefficients: &[i64], modulus: i64) -> Vec<i64> {
    coefficients.iter().map(|&x| reduce(x, modulus)).collect()
}

/// Mutably reduces each coefficient in the given slice by the modulus.
///
/// In-place variant of [`reduce_coefficients`].
pub fn reduce_coefficients_mut(coefficients: &mut [i64], modulus: i64) {
    coefficients
        .iter_mut()
        .for_each(|x| *x = reduce(*x, modulus));
}

/// Reduces and centers each coefficient in the given slice.
///
/// # Arguments
///
/// * `coefficients` - A slice of coefficients to be reduced and centered.
/// * `modulus` - The modulus to reduce by. Must be positive.
///
/// # Returns
///
/// A new `Vec<i64>` with coefficients in the balanced range
/// `[−⌊q/2⌋, q − ⌊q/2⌋ − 1]`.
pub fn reduce_and_center_coefficients(coefficients: &[i64], modulus: i64) -> Vec<i64> {
    let half_modulus = modulus / 2;
    coefficients
        .iter()
        .map(|&x| reduce_and_center(x, modulus, half_modulus))
        .collect()
}

/// Mutably reduces and centers each coefficient in the given slice.
///
/// In-place variant of [`reduce_and_center_coefficients`].
pub fn reduce_and_center_coefficients_mut(coefficients: &mut [i64], modulus: i64) {
    let half_modulus = modulus / 2;
    coefficients
        .iter_mut()
        .for_each(|x| *x = reduce_and_center(*x, modulus, half_modulus));
}

/// Reduces a polynomial's coefficients within the ring
/// `Z_q[x]/(x^dimension - 1)`.
///
/// Two reductions are applied to the coefficient vector in place:
/// 1. **Cyclic reduction**: exponents fold modulo `dimension` (`x^N ≡ 1`),
///    leaving exactly `dimension` coefficients.
/// 2. **Modulus reduction**: coefficients are reduced and centered modulo
///    `modulus` into `[−⌊q/2⌋, q − ⌊q/2⌋ − 1]`.
///
/// # Arguments
///
/// * `coefficients` - The coefficient vector to reduce, in ascending order.
/// * `dimension` - The ring dimension `N`.
/// * `modulus` - The coefficient modulus `q`.
///
/// # Errors
///
/// Returns [`PolynomialError::InvalidModulus`] if `dimension` is zero or
/// `modulus` is not positive; `coefficients` is untouched on error.
pub fn reduce_in_ring(
    coefficients: &mut Vec<i64>,
    dimension: usize,
    modulus: i64,
) -> Result<(), PolynomialError> {
    if modulus <= 0 {
        return Err(PolynomialError::InvalidModulus { modulus });
    }

    let reduced = Polynomial::new(coefficients.clone()).reduce_cyclic(dimension)?;
    *coefficients = reduced.coefficients;
    reduce_and_center_coefficients_mut(coefficients, modulus);
    Ok(())
}
