//! PID controller block.

use crate::error::ModelResult;
use crate::latex;
use crate::params::{LatexOverrides, ParamMap, ParamValue};
use crate::traits::BlockModel;
use ll_core::{Real, TransferFunction};
use std::collections::BTreeMap;

const KP_DESCRIPTION: &str = "Proportional Gain (Kp):\n\
    Determines the reaction to the current error.\n\
    Higher Kp values result in a larger control action for a given error,\n\
    which can reduce rise time but may increase overshoot and lead to instability.";

const KI_DESCRIPTION: &str = "Integral Gain (Ki):\n\
    Addresses accumulated past errors.\n\
    Higher Ki values can eliminate steady-state error,\n\
    but may also lead to increased overshoot and oscillations.";

const KD_DESCRIPTION: &str = "Derivative Gain (Kd):\n\
    Influences the system's response to the rate of change of the error.\n\
    Higher Kd values can help reduce overshoot and improve stability,\n\
    but may also lead to increased sensitivity to noise.";

const PID_DESCRIPTION: &str = "PID Controller:\n\
    A control system that combines three corrective actions to minimize error:\n\
    Proportional (P): Kp responds to the current error\n\
    Integral (I): Ki removes accumulated (steady-state) error\n\
    Derivative (D): Kd anticipates future error based on the rate of change\n\n\
    Overall Transfer Function: Kp + Ki/s + Kd\u{b7}s";

/// `C(s) = Kp + Ki/s + Kd·s`. Gains are unconstrained; zero and negative
/// values are legal.
#[derive(Debug, Clone, PartialEq)]
pub struct Pid {
    pub kp: Real,
    pub ki: Real,
    pub kd: Real,
}

impl Default for Pid {
    fn default() -> Self {
        Pid {
            kp: 1.0,
            ki: 1.0,
            kd: 1.0,
        }
    }
}

impl Pid {
    pub fn new(kp: Real, ki: Real, kd: Real) -> Self {
        Pid { kp, ki, kd }
    }
}

impl BlockModel for Pid {
    fn name(&self) -> &str {
        "PID Controller"
    }

    /// `(Kd·s² + Kp·s + Ki) / s`, the single-fraction form of the sum.
    fn transfer_function(&self) -> ModelResult<TransferFunction> {
        Ok(TransferFunction::new(
            &[self.kd, self.kp, self.ki],
            &[1.0, 0.0],
        )?)
    }

    /// `$Kp + \frac{Ki}{s} + Kd\,s$` with values substituted.
    ///
    /// A gain whose value is zero falls back to its symbol name unless an
    /// override supplies a display string. This keeps the rendered
    /// equation legible while a gain is being cleared in the editor.
    fn latex_equation(&self, overrides: &LatexOverrides) -> String {
        let gain = |key: &str, value: Real| match overrides.get(key) {
            Some(text) => text.clone(),
            None if value == 0.0 => key.to_string(),
            None => latex::fmt_value(value),
        };
        let kp = gain("Kp", self.kp);
        let ki = gain("Ki", self.ki);
        let kd = gain("Kd", self.kd);
        format!(r"${kp} + \frac{{{ki}}}{{s}} + {kd}\,s$")
    }

    fn parameters(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert("kp".to_string(), ParamValue::Scalar(self.kp));
        map.insert("ki".to_string(), ParamValue::Scalar(self.ki));
        map.insert("kd".to_string(), ParamValue::Scalar(self.kd));
        map
    }

    fn set_parameters(&mut self, updates: &ParamMap) -> ModelResult<()> {
        for key in updates.keys() {
            if !matches!(key.as_str(), "kp" | "ki" | "kd") {
                return Err(crate::error::ModelError::UnknownParameter { name: key.clone() });
            }
        }
        if let Some(v) = updates.get("kp") {
            self.kp = v.as_scalar("kp")?;
        }
        if let Some(v) = updates.get("ki") {
            self.ki = v.as_scalar("ki")?;
        }
        if let Some(v) = updates.get("kd") {
            self.kd = v.as_scalar("kd")?;
        }
        Ok(())
    }

    fn parameter_descriptions(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("kp".to_string(), KP_DESCRIPTION.to_string());
        map.insert("ki".to_string(), KI_DESCRIPTION.to_string());
        map.insert("kd".to_string(), KD_DESCRIPTION.to_string());
        map
    }

    fn component_description(&self) -> String {
        PID_DESCRIPTION.to_string()
    }
}
