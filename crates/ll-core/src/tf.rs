//! Rational transfer functions `N(s)/D(s)`.
//!
//! A `TransferFunction` is a pure derived value: models construct a fresh
//! one from their current parameters on every request, and composition
//! (`series`, `feedback`) never mutates its operands.

use crate::ComplexReal;
use crate::error::{CoreError, CoreResult};
use crate::numeric::Real;
use crate::poly::Polynomial;

#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    num: Polynomial,
    den: Polynomial,
}

impl TransferFunction {
    /// Build `N(s)/D(s)` from descending-power coefficient slices.
    ///
    /// Fails if the denominator is identically zero or any coefficient is
    /// non-finite; a silently infinite system is never produced.
    pub fn new(num: &[Real], den: &[Real]) -> CoreResult<Self> {
        let num = Polynomial::new(num);
        let den = Polynomial::new(den);
        if den.is_zero() {
            return Err(CoreError::ZeroDenominator);
        }
        if !num.is_finite() || !den.is_finite() {
            return Err(CoreError::InvalidArg {
                what: "transfer function coefficients must be finite",
            });
        }
        Ok(Self { num, den })
    }

    /// The unity transfer function `1/1` (ideal sensor, unity feedback).
    pub fn unity() -> Self {
        Self {
            num: Polynomial::one(),
            den: Polynomial::one(),
        }
    }

    pub fn numerator(&self) -> &Polynomial {
        &self.num
    }

    pub fn denominator(&self) -> &Polynomial {
        &self.den
    }

    /// Series connection `self(s) * other(s)`.
    pub fn series(&self, other: &TransferFunction) -> TransferFunction {
        TransferFunction {
            num: self.num.mul(&other.num),
            den: self.den.mul(&other.den),
        }
    }

    /// Closed-loop transfer function `L / (1 + L*H)` where `L` is `self`
    /// and `H` is the feedback path.
    ///
    /// With `L = N_l/D_l` and `H = N_h/D_h` this is
    /// `N_l*D_h / (D_l*D_h + N_l*N_h)`. Fails if the combined denominator
    /// cancels to the zero polynomial.
    pub fn feedback(&self, h: &TransferFunction) -> CoreResult<TransferFunction> {
        let num = self.num.mul(&h.den);
        let den = self.den.mul(&h.den).add(&self.num.mul(&h.num));
        if den.is_zero() {
            return Err(CoreError::ZeroDenominator);
        }
        Ok(TransferFunction { num, den })
    }

    /// Evaluate at a complex frequency, typically `s = j*omega`.
    pub fn eval(&self, s: ComplexReal) -> ComplexReal {
        self.num.eval(s) / self.den.eval(s)
    }

    pub fn poles(&self) -> Vec<ComplexReal> {
        self.den.roots()
    }

    pub fn zeros(&self) -> Vec<ComplexReal> {
        self.num.roots()
    }

    /// A proper transfer function has numerator degree <= denominator
    /// degree; only proper systems admit a state-space realization.
    pub fn is_proper(&self) -> bool {
        self.num.degree() <= self.den.degree()
    }
}
