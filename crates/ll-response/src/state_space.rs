//! State-space realization of a transfer function.
//!
//! Uses the observable canonical form. For
//! `H(s) = (b_n s^n + ... + b_0) / (s^n + a_{n-1} s^{n-1} + ... + a_0)`
//! (denominator normalized monic) the realization is
//!
//! ```text
//! A = [ -a_{n-1}  -a_{n-2}  ...  -a_0 ]    B = [1 0 ... 0]^T
//!     [    1         0      ...    0  ]
//!     [    ⋮         ⋱              ⋮  ]
//!     [    0        ...      1     0  ]
//! ```
//!
//! with `D = b_n` when degrees match and `C` holding the strictly proper
//! numerator `b - D*a`.

use crate::error::{ResponseError, ResponseResult};
use ll_core::{Real, TransferFunction};
use nalgebra::{DMatrix, DVector, RowDVector};

#[derive(Debug, Clone)]
pub struct StateSpace {
    a: DMatrix<Real>,
    b: DVector<Real>,
    c: RowDVector<Real>,
    d: Real,
}

impl StateSpace {
    /// Realize a proper transfer function in observable canonical form.
    pub fn realize(tf: &TransferFunction) -> ResponseResult<Self> {
        if !tf.is_proper() {
            return Err(ResponseError::Improper {
                num: tf.numerator().degree(),
                den: tf.denominator().degree(),
            });
        }

        let den = tf.denominator().coeffs();
        let lead = den[0];
        let den_norm: Vec<Real> = den.iter().map(|c| c / lead).collect();
        let mut num_norm: Vec<Real> = tf.numerator().coeffs().iter().map(|c| c / lead).collect();
        while num_norm.len() < den_norm.len() {
            num_norm.insert(0, 0.0);
        }

        let n = den_norm.len() - 1;

        // Direct feedthrough when the degrees match after padding.
        let d = num_norm[0];

        // Strictly proper numerator: b - d*a, dropping the leading term.
        let c_coeffs: Vec<Real> = (1..=n)
            .map(|i| num_norm[i] - d * den_norm[i])
            .collect();

        let mut a = DMatrix::<Real>::zeros(n, n);
        for j in 0..n {
            a[(0, j)] = -den_norm[j + 1];
        }
        for i in 0..n.saturating_sub(1) {
            a[(i + 1, i)] = 1.0;
        }

        let mut b = DVector::<Real>::zeros(n);
        if n > 0 {
            b[0] = 1.0;
        }

        let c = RowDVector::from_row_slice(&c_coeffs);

        Ok(StateSpace { a, b, c, d })
    }

    /// Number of states.
    pub fn order(&self) -> usize {
        self.b.len()
    }

    pub fn input_vector(&self) -> &DVector<Real> {
        &self.b
    }

    /// `dx/dt = A*x + B*u`
    pub fn derivative(&self, state: &DVector<Real>, u: Real) -> DVector<Real> {
        &self.a * state + &self.b * u
    }

    /// `y = C*x + D*u`
    pub fn output(&self, state: &DVector<Real>, u: Real) -> Real {
        (&self.c * state)[0] + self.d * u
    }
}
