//! Real-coefficient polynomials in the Laplace variable `s`.
//!
//! Coefficients are stored in **descending powers**: `[a_n, ..., a_1, a_0]`
//! represents `a_n*s^n + ... + a_1*s + a_0`. The zero polynomial is the
//! single coefficient `[0.0]`.

use crate::numeric::Real;
use nalgebra::{Complex, DMatrix};

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<Real>,
}

impl Polynomial {
    /// Build a polynomial from descending-power coefficients, trimming
    /// leading zeros. An empty slice yields the zero polynomial.
    pub fn new(coeffs: &[Real]) -> Self {
        let first_nonzero = coeffs.iter().position(|c| *c != 0.0);
        let coeffs = match first_nonzero {
            Some(i) => coeffs[i..].to_vec(),
            None => vec![0.0],
        };
        Self { coeffs }
    }

    /// Degree-0 polynomial from a single value.
    pub fn constant(value: Real) -> Self {
        Self::new(&[value])
    }

    pub fn one() -> Self {
        Self::constant(1.0)
    }

    /// Coefficients in descending powers (trimmed).
    pub fn coeffs(&self) -> &[Real] {
        &self.coeffs
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// True zero-polynomial test (every coefficient is zero).
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| *c == 0.0)
    }

    pub fn is_finite(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_finite())
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let n = self.coeffs.len().max(other.coeffs.len());
        let mut out = vec![0.0; n];
        for (i, c) in self.coeffs.iter().rev().enumerate() {
            out[n - 1 - i] += c;
        }
        for (i, c) in other.coeffs.iter().rev().enumerate() {
            out[n - 1 - i] += c;
        }
        Polynomial::new(&out)
    }

    /// Polynomial product by convolution of coefficient sequences.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::constant(0.0);
        }
        let mut out = vec![0.0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Polynomial::new(&out)
    }

    pub fn scale(&self, k: Real) -> Polynomial {
        let out: Vec<Real> = self.coeffs.iter().map(|c| c * k).collect();
        Polynomial::new(&out)
    }

    /// Horner evaluation at a complex point.
    pub fn eval(&self, s: Complex<Real>) -> Complex<Real> {
        let mut acc = Complex::new(0.0, 0.0);
        for c in &self.coeffs {
            acc = acc * s + Complex::new(*c, 0.0);
        }
        acc
    }

    /// Roots via the companion matrix of the monic polynomial.
    ///
    /// Degree-0 (and zero) polynomials have no roots. The companion matrix
    /// uses the first-row layout whose characteristic polynomial is the
    /// monic input, so its eigenvalues are exactly the roots.
    pub fn roots(&self) -> Vec<Complex<Real>> {
        if self.is_zero() || self.degree() == 0 {
            return Vec::new();
        }
        let n = self.degree();
        let lead = self.coeffs[0];
        let monic: Vec<Real> = self.coeffs.iter().map(|c| c / lead).collect();

        let mut companion = DMatrix::<Real>::zeros(n, n);
        for j in 0..n {
            companion[(0, j)] = -monic[j + 1];
        }
        for i in 0..n - 1 {
            companion[(i + 1, i)] = 1.0;
        }
        companion.complex_eigenvalues().iter().copied().collect()
    }
}
