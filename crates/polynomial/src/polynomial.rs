//! Polynomial arithmetic implementation.

use crate::errors::PolynomialError;
use crate::utils::{reduce, reduce_and_center};
use num_traits::Zero;
use rand::{CryptoRng, Rng, RngCore};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polynomial over the integers, represented by its coefficients in
/// ascending order of degree.
///
/// Index `i` holds the coefficient of `x^i`, so the polynomial is
/// `a_0 + a_1 * x + ... + a_n * x^n`. Coefficients are `i64`, wide enough
/// that products of two values reduced modulo practical lattice moduli never
/// overflow.
///
/// Trailing zero coefficients are stored as-is: [`Polynomial::degree`] is
/// defined over the stored length, not the mathematical degree. The
/// accumulation length of [`Polynomial::mul`] depends on this convention, so
/// no operation trims implicitly; callers that want the canonical form use
/// [`Polynomial::trim_trailing_zeros`] explicitly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    /// Coefficients in ascending order (constant term first).
    pub(crate) coefficients: Vec<i64>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (degree, &coeff) in self.coefficients.iter().enumerate().rev() {
            if coeff.is_zero() {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            write!(f, "{coeff}")?;
            if degree == 1 {
                write!(f, "x")?;
            } else if degree > 1 {
                write!(f, "x^{degree}")?;
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients in ascending order of degree.
    pub fn new(coefficients: Vec<i64>) -> Self {
        Self { coefficients }
    }

    /// Creates a zero polynomial of specified degree.
    ///
    /// # Arguments
    ///
    /// * `degree` - The degree of the zero polynomial.
    pub fn zero(degree: usize) -> Self {
        Self {
            coefficients: vec![0; degree + 1],
        }
    }

    /// Creates a constant polynomial.
    ///
    /// # Arguments
    ///
    /// * `constant` - The constant value.
    pub fn constant(constant: i64) -> Self {
        Self {
            coefficients: vec![constant],
        }
    }

    /// Returns the coefficients of the polynomial.
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Returns the coefficient of `x^n`.
    ///
    /// Indices at or beyond the stored length read as zero.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InvalidIndex`] if `n` is negative.
    pub fn coefficient(&self, n: i64) -> Result<i64, PolynomialError> {
        if n < 0 {
            return Err(PolynomialError::InvalidIndex { index: n });
        }
        Ok(self.coefficients.get(n as usize).copied().unwrap_or(0))
    }

    /// Returns the degree of the polynomial.
    ///
    /// This is the stored length minus one: trailing zero coefficients count
    /// toward the degree, and the empty polynomial has degree −1.
    pub fn degree(&self) -> isize {
        self.coefficients.len() as isize - 1
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    /// Removes trailing zero coefficients from the polynomial.
    ///
    /// This changes the stored degree; it is never applied implicitly.
    pub fn trim_trailing_zeros(mut self) -> Self {
        while self.coefficients.len() > 1 && self.coefficients.last() == Some(&0) {
            self.coefficients.pop();
        }
        self
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    pub fn evaluate(&self, x: i64) -> i64 {
        let mut result = 0;
        for &coeff in self.coefficients.iter().rev() {
            result = result * x + coeff;
        }
        result
    }

    /// Adds two polynomials together.
    ///
    /// The result has the length of the longer operand; the shorter operand
    /// reads as zero above its stored length.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    pub fn add(&self, other: &Self) -> Self {
        let max_length = std::cmp::max(self.coefficients.len(), other.coefficients.len());
        let mut result = vec![0i64; max_length];

        for (i, &coeff) in self.coefficients.iter().enumerate() {
            result[i] = coeff;
        }

        for (i, &coeff) in other.coefficients.iter().enumerate() {
            result[i] += coeff;
        }

        Polynomial::new(result)
    }

    /// Subtracts one polynomial from another.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to subtract from `self`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Negates all coefficients of the polynomial.
    pub fn neg(&self) -> Self {
        Polynomial::new(self.coefficients.iter().map(|x| -x).collect())
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    ///
    /// # Arguments
    ///
    /// * `scalar` - The scalar to multiply with each coefficient.
    pub fn scalar_mul(&self, scalar: i64) -> Self {
        Polynomial::new(self.coefficients.iter().map(|x| x * scalar).collect())
    }

    /// Multiplies the polynomial by the single term `coefficient * x^degree`.
    ///
    /// The polynomial is shifted up by `degree` positions and every stored
    /// coefficient is scaled. The output always has length
    /// `degree + self.coefficients.len()`, even when `coefficient` is zero.
    ///
    /// # Arguments
    ///
    /// * `coefficient` - The scalar factor of the term.
    /// * `degree` - The degree of the term.
    pub fn term_mul(&self, coefficient: i64, degree: usize) -> Self {
        let mut result = vec![0i64; degree + self.coefficients.len()];

        for (i, &coeff) in self.coefficients.iter().enumerate() {
            result[degree + i] = coeff * coefficient;
        }

        Polynomial::new(result)
    }

    /// Multiplies two polynomials using the naive convolution algorithm.
    ///
    /// The product accumulates `self.term_mul(other[i], i)` over every
    /// stored index of `other`, starting from the zero polynomial. For
    /// nonempty operands the result length is
    /// `self.coefficients.len() + other.coefficients.len() - 1`; zero
    /// operands are not special-cased and the result is never trimmed.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to multiply with `self`.
    pub fn mul(&self, other: &Self) -> Self {
        let mut product = Polynomial::zero(0);

        for (i, &coeff) in other.coefficients.iter().enumerate() {
            product = product.add(&self.term_mul(coeff, i));
        }

        product
    }

    /// Reduces the polynomial modulo `x^dimension - 1`.
    ///
    /// Exponents fold onto their residue modulo `dimension` (`x^N ≡ 1`), so
    /// `result[i mod N]` accumulates `coefficients[i]`. The result has length
    /// exactly `dimension`.
    ///
    /// # Arguments
    ///
    /// * `dimension` - The ring dimension `N`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InvalidModulus`] if `dimension` is zero.
    pub fn reduce_cyclic(&self, dimension: usize) -> Result<Self, PolynomialError> {
        if dimension == 0 {
            return Err(PolynomialError::InvalidModulus { modulus: 0 });
        }

        let mut result = vec![0i64; dimension];
        for (i, &coeff) in self.coefficients.iter().enumerate() {
            result[i % dimension] += coeff;
        }

        Ok(Polynomial::new(result))
    }

    /// Reduces every coefficient modulo a positive modulus.
    ///
    /// Residues are floored, landing in `[0, modulus)` regardless of the
    /// coefficient's sign: `-1 mod 5` is `4`.
    ///
    /// # Arguments
    ///
    /// * `modulus` - The coefficient modulus `q`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InvalidModulus`] if `modulus` is not positive.
    pub fn reduce_coefficients(&self, modulus: i64) -> Result<Self, PolynomialError> {
        if modulus <= 0 {
            return Err(PolynomialError::InvalidModulus { modulus });
        }

        let reduced_coeffs = self
            .coefficients
            .iter()
            .map(|&x| reduce(x, modulus))
            .collect();
        Ok(Polynomial::new(reduced_coeffs))
    }

    /// Reduces coefficients modulo a positive modulus and centers them.
    ///
    /// Residues land in the balanced range `[−⌊q/2⌋, q − ⌊q/2⌋ − 1]`,
    /// equivalent to `((c + ⌊q/2⌋) mod q) − ⌊q/2⌋` with floored modulo for
    /// arbitrary input coefficients.
    ///
    /// # Arguments
    ///
    /// * `modulus` - The coefficient modulus `q`.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InvalidModulus`] if `modulus` is not positive.
    pub fn reduce_and_center(&self, modulus: i64) -> Result<Self, PolynomialError> {
        if modulus <= 0 {
            return Err(PolynomialError::InvalidModulus { modulus });
        }

        let half_modulus = modulus / 2;
        let reduced_coeffs = self
            .coefficients
            .iter()
            .map(|&x| reduce_and_center(x, modulus, half_modulus))
            .collect();
        Ok(Polynomial::new(reduced_coeffs))
    }

    /// Generates a random ternary polynomial of length `dimension` with
    /// exactly `weight` nonzero coefficients, each `±1` with equal
    /// probability.
    ///
    /// Positions are drawn by rejection sampling: a uniform index is accepted
    /// only if its slot is still zero. Because `weight` never exceeds
    /// `dimension`, an empty slot always remains and the loop terminates.
    ///
    /// # Arguments
    ///
    /// * `dimension` - The ring dimension `N`.
    /// * `weight` - The number of nonzero coefficients `d`.
    /// * `rng` - The random number generator to sample from.
    ///
    /// # Errors
    ///
    /// Returns [`PolynomialError::InvalidWeight`] if `weight` exceeds
    /// `dimension`.
    pub fn random_ternary<R: RngCore + CryptoRng>(
        dimension: usize,
        weight: usize,
        rng: &mut R,
    ) -> Result<Self, PolynomialError> {
        if weight > dimension {
            return Err(PolynomialError::InvalidWeight { weight, dimension });
        }

        let mut coefficients = vec![0i64; dimension];
        for _ in 0..weight {
            loop {
                let index = rng.gen_range(0..dimension);
                if coefficients[index] == 0 {
                    coefficients[index] = if rng.gen_bool(0.5) { 1 } else { -1 };
                    break;
                }
            }
        }

        Ok(Polynomial::new(coefficients))
    }
}
