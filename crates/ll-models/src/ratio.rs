//! Free-form polynomial ratio shared by the personalized plant and the
//! sensor.

use crate::error::{ModelError, ModelResult};
use crate::latex;
use crate::params::{CoeffList, LatexOverrides, ParamMap, ParamValue};
use ll_core::TransferFunction;

/// Numerator/denominator coefficient lists, descending powers of `s`.
///
/// Defaults to `1/1`, a pass-through block.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyRatio {
    pub numerator: CoeffList,
    pub denominator: CoeffList,
}

impl Default for PolyRatio {
    fn default() -> Self {
        PolyRatio {
            numerator: CoeffList::from_scalar(1.0),
            denominator: CoeffList::from_scalar(1.0),
        }
    }
}

impl PolyRatio {
    /// Derive the transfer function, validating the denominator first.
    ///
    /// Validity is judged by the coefficient sum being nonzero, which
    /// catches the all-zeros case but also rejects sign-cancelling
    /// denominators like `[1, -1]`.
    pub fn transfer_function(&self) -> ModelResult<TransferFunction> {
        let num = self.numerator.numeric()?;
        let den = self.denominator.numeric()?;
        let den_sum: f64 = den.iter().sum();
        if den_sum == 0.0 {
            return Err(ModelError::Constraint {
                message: "Error: Denominator cannot be all zeros.".to_string(),
            });
        }
        Ok(TransferFunction::new(&num, &den)?)
    }

    /// `$\frac{N(s)}{D(s)}$` with override strings taking precedence.
    pub fn latex_equation(&self, overrides: &LatexOverrides) -> String {
        let num = match overrides.get("Numerator") {
            Some(text) => latex::poly_latex(&CoeffList::parse(text)),
            None => latex::poly_latex(&self.numerator),
        };
        let den = match overrides.get("Denominator") {
            Some(text) => latex::poly_latex(&CoeffList::parse(text)),
            None => latex::poly_latex(&self.denominator),
        };
        latex::frac(&num, &den)
    }

    pub fn parameters(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert(
            "Numerator".to_string(),
            ParamValue::Coeffs(self.numerator.clone()),
        );
        map.insert(
            "Denominator".to_string(),
            ParamValue::Coeffs(self.denominator.clone()),
        );
        map
    }

    pub fn set_parameters(&mut self, updates: &ParamMap) -> ModelResult<()> {
        // Validate all keys before touching state.
        for key in updates.keys() {
            if key != "Numerator" && key != "Denominator" {
                return Err(ModelError::UnknownParameter { name: key.clone() });
            }
        }
        if let Some(v) = updates.get("Numerator") {
            self.numerator = v.as_coeffs();
        }
        if let Some(v) = updates.get("Denominator") {
            self.denominator = v.as_coeffs();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unity() {
        let ratio = PolyRatio::default();
        let tf = ratio.transfer_function().unwrap();
        assert_eq!(tf.numerator().coeffs(), &[1.0]);
        assert_eq!(tf.denominator().coeffs(), &[1.0]);
    }

    #[test]
    fn zero_denominator_rejected_with_message() {
        let mut ratio = PolyRatio::default();
        ratio.denominator = CoeffList::from_values(&[0.0, 0.0]);
        let err = ratio.transfer_function().unwrap_err();
        assert!(err.to_string().contains("Denominator cannot be all zeros"));
    }

    #[test]
    fn sum_check_rejects_sign_cancelling_denominator() {
        // [1, -1] sums to 0 and is rejected even though s - 1 is a
        // perfectly valid denominator. Documents current behavior.
        let mut ratio = PolyRatio::default();
        ratio.denominator = CoeffList::from_values(&[1.0, -1.0]);
        assert!(ratio.transfer_function().is_err());

        // [1, -2] sums to -1 and passes.
        ratio.denominator = CoeffList::from_values(&[1.0, -2.0]);
        assert!(ratio.transfer_function().is_ok());
    }

    #[test]
    fn unknown_key_leaves_state_untouched() {
        let mut ratio = PolyRatio::default();
        let mut updates = ParamMap::new();
        updates.insert("Gain".to_string(), ParamValue::Scalar(2.0));
        assert!(ratio.set_parameters(&updates).is_err());
        assert_eq!(ratio, PolyRatio::default());
    }
}
