//! Feedback-path sensor block.

use crate::error::ModelResult;
use crate::params::{LatexOverrides, ParamMap};
use crate::ratio::PolyRatio;
use crate::traits::BlockModel;
use ll_core::TransferFunction;
use std::collections::BTreeMap;

/// Sensor in the feedback path, a free-form polynomial ratio like the
/// personalized plant. The default `1/1` is an ideal sensor, reducing the
/// loop to unity feedback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sensor {
    ratio: PolyRatio,
}

impl Sensor {
    pub fn ratio(&self) -> &PolyRatio {
        &self.ratio
    }
}

impl BlockModel for Sensor {
    fn name(&self) -> &str {
        "Sensor"
    }

    fn transfer_function(&self) -> ModelResult<TransferFunction> {
        self.ratio.transfer_function()
    }

    fn latex_equation(&self, overrides: &LatexOverrides) -> String {
        self.ratio.latex_equation(overrides)
    }

    fn parameters(&self) -> ParamMap {
        self.ratio.parameters()
    }

    fn set_parameters(&mut self, updates: &ParamMap) -> ModelResult<()> {
        self.ratio.set_parameters(updates)
    }

    fn parameter_descriptions(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(
            "Numerator".to_string(),
            "Numerator: Sensor numerator coefficients (list)".to_string(),
        );
        map.insert(
            "Denominator".to_string(),
            "Denominator: Sensor denominator coefficients (list)".to_string(),
        );
        map
    }

    fn component_description(&self) -> String {
        "Sensor:\n\
        Measures the plant output in the feedback path as a free-form\n\
        transfer function. The default 1/1 is an ideal measurement."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CoeffList, ParamValue};

    #[test]
    fn default_sensor_is_unity() {
        let sensor = Sensor::default();
        let tf = sensor.transfer_function().unwrap();
        assert_eq!(tf, TransferFunction::unity());
    }

    #[test]
    fn all_zero_denominator_rejected() {
        let mut sensor = Sensor::default();
        let mut updates = ParamMap::new();
        updates.insert(
            "Denominator".to_string(),
            ParamValue::Coeffs(CoeffList::from_values(&[0.0, 0.0])),
        );
        sensor.set_parameters(&updates).unwrap();
        let err = sensor.transfer_function().unwrap_err();
        assert!(err.to_string().contains("Denominator cannot be all zeros"));
    }

    #[test]
    fn first_order_sensor_latex() {
        let mut sensor = Sensor::default();
        let mut updates = ParamMap::new();
        updates.insert(
            "Denominator".to_string(),
            ParamValue::Coeffs(CoeffList::from_values(&[0.1, 1.0])),
        );
        sensor.set_parameters(&updates).unwrap();
        let eq = sensor.latex_equation(&LatexOverrides::new());
        assert_eq!(eq, r"$\frac{1}{0.1s + 1}$");
    }
}
