//! Step input signal and its validation.
//!
//! Unlike the plants, input validation is eager: every violation is
//! collected at `set_parameters` time and reported together, and the
//! previous values stay committed on failure. The asymmetry with the lazy
//! plant checks is deliberate and observable; editors rely on it.

use crate::error::{ModelError, ModelResult};
use crate::params::{ParamMap, ParamValue};
use ll_core::Real;
use std::collections::BTreeMap;

/// Fewest samples a simulation is allowed to produce.
pub const MIN_SAMPLES: usize = 10;
/// Hard ceiling on sample count; keeps response arrays bounded.
pub const MAX_SAMPLES: usize = 10_000;
/// Longest simulated horizon in seconds.
pub const MAX_TOTAL_TIME: Real = 1000.0;
/// Magnitude bound on the initial and final signal values.
pub const VALUE_LIMIT: Real = 100.0;

/// Step reference signal: holds `initial_value` until `step_time`, then
/// `final_value` until `total_time`, sampled every `sample_time` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSignal {
    step_time: Real,
    initial_value: Real,
    final_value: Real,
    total_time: Real,
    sample_time: Real,
}

impl Default for InputSignal {
    fn default() -> Self {
        InputSignal {
            step_time: 1.0,
            initial_value: 0.0,
            final_value: 1.0,
            total_time: 10.0,
            sample_time: 0.01,
        }
    }
}

impl InputSignal {
    /// Build a signal, rejecting invalid parameter sets up front.
    pub fn new(
        step_time: Real,
        initial_value: Real,
        final_value: Real,
        total_time: Real,
        sample_time: Real,
    ) -> ModelResult<Self> {
        let mut signal = InputSignal::default();
        signal.set(step_time, initial_value, final_value, total_time, sample_time)?;
        Ok(signal)
    }

    pub fn step_time(&self) -> Real {
        self.step_time
    }

    pub fn initial_value(&self) -> Real {
        self.initial_value
    }

    pub fn final_value(&self) -> Real {
        self.final_value
    }

    pub fn total_time(&self) -> Real {
        self.total_time
    }

    pub fn sample_time(&self) -> Real {
        self.sample_time
    }

    /// Number of sample intervals over the horizon; the generated arrays
    /// hold one more point than this (both endpoints included).
    pub fn num_samples(&self) -> usize {
        (self.total_time / self.sample_time).round() as usize
    }

    /// Validate and commit a full parameter set.
    ///
    /// All violations are collected before reporting; the report joins
    /// them with newlines. On failure the current values are untouched.
    pub fn set(
        &mut self,
        step_time: Real,
        initial_value: Real,
        final_value: Real,
        total_time: Real,
        sample_time: Real,
    ) -> ModelResult<()> {
        let mut violations: Vec<String> = Vec::new();

        if step_time < 0.0 {
            violations.push(format!(
                "Error: Step time must be non-negative or zero (got {step_time})."
            ));
        }
        if total_time <= 0.0 {
            violations.push(format!(
                "Error: Total time must be positive and strictly greater than 0 (got {total_time})."
            ));
        } else if total_time > MAX_TOTAL_TIME {
            violations.push(format!(
                "Error: Total time cannot exceed {MAX_TOTAL_TIME} seconds (got {total_time})."
            ));
        }
        if !sample_time.is_finite() {
            violations.push(format!(
                "Error: Sample time must be a finite number (got {sample_time})."
            ));
        } else if sample_time <= 0.0 {
            violations.push(format!(
                "Error: Sample time must be positive and strictly greater than 0 (got {sample_time})."
            ));
        }
        if step_time >= total_time {
            violations.push(format!(
                "Error: Step time must be strictly less than total time (got step time {step_time}, total time {total_time})."
            ));
        }
        if initial_value.abs() > VALUE_LIMIT {
            violations.push(format!(
                "Error: Initial value must be between -{VALUE_LIMIT} and {VALUE_LIMIT} (got {initial_value})."
            ));
        }
        if final_value.abs() > VALUE_LIMIT {
            violations.push(format!(
                "Error: Final value must be between -{VALUE_LIMIT} and {VALUE_LIMIT} (got {final_value})."
            ));
        }
        if sample_time.is_finite() && sample_time > 0.0 && total_time > 0.0 {
            let samples = (total_time / sample_time).round();
            if samples < MIN_SAMPLES as Real {
                violations.push(format!(
                    "Error: Number of samples must be at least {MIN_SAMPLES} (got {samples})."
                ));
            } else if samples > MAX_SAMPLES as Real {
                violations.push(format!(
                    "Error: Number of samples cannot exceed {MAX_SAMPLES} (got {samples})."
                ));
            }
        }

        if !violations.is_empty() {
            return Err(ModelError::InvalidInput {
                report: violations.join("\n"),
            });
        }

        self.step_time = step_time;
        self.initial_value = initial_value;
        self.final_value = final_value;
        self.total_time = total_time;
        self.sample_time = sample_time;
        Ok(())
    }

    pub fn parameters(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert("step_time".to_string(), ParamValue::Scalar(self.step_time));
        map.insert(
            "initial_value".to_string(),
            ParamValue::Scalar(self.initial_value),
        );
        map.insert(
            "final_value".to_string(),
            ParamValue::Scalar(self.final_value),
        );
        map.insert("total_time".to_string(), ParamValue::Scalar(self.total_time));
        map.insert(
            "sample_time".to_string(),
            ParamValue::Scalar(self.sample_time),
        );
        map
    }

    /// Map-shaped update used by the project loader; missing keys keep
    /// their current value, then the merged set is validated as a whole.
    pub fn set_parameters(&mut self, updates: &ParamMap) -> ModelResult<()> {
        for key in updates.keys() {
            if !matches!(
                key.as_str(),
                "step_time" | "initial_value" | "final_value" | "total_time" | "sample_time"
            ) {
                return Err(ModelError::UnknownParameter { name: key.clone() });
            }
        }
        let pick = |key: &str, current: Real| -> ModelResult<Real> {
            match updates.get(key) {
                Some(v) => v.as_scalar(key),
                None => Ok(current),
            }
        };
        let step_time = pick("step_time", self.step_time)?;
        let initial_value = pick("initial_value", self.initial_value)?;
        let final_value = pick("final_value", self.final_value)?;
        let total_time = pick("total_time", self.total_time)?;
        let sample_time = pick("sample_time", self.sample_time)?;
        self.set(step_time, initial_value, final_value, total_time, sample_time)
    }

    pub fn parameter_descriptions(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(
            "step_time".to_string(),
            "Step Time:\nThe time at which the step changes from the initial value to the final value (seconds).\n".to_string(),
        );
        map.insert(
            "initial_value".to_string(),
            "Initial Value:\nThe value of the step input at the start of the simulation.\n".to_string(),
        );
        map.insert(
            "final_value".to_string(),
            "Final Value:\nThe value of the step input at the end of the simulation.\n".to_string(),
        );
        map.insert(
            "total_time".to_string(),
            "Total Time:\nThe total duration for which the step input is applied (seconds).\n".to_string(),
        );
        map.insert(
            "sample_time".to_string(),
            "Sample Time:\nThe time interval between consecutive samples of the input signal (seconds).\n".to_string(),
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let signal = InputSignal::default();
        assert_eq!(signal.num_samples(), 1000);
        let mut copy = signal.clone();
        let p = signal.parameters();
        copy.set_parameters(&p).unwrap();
        assert_eq!(copy, signal);
    }

    #[test]
    fn total_time_boundary_inclusive() {
        // 1000 is the last legal horizon; sample_time chosen to keep the
        // sample count in range.
        assert!(InputSignal::new(1.0, 0.0, 1.0, 1000.0, 0.5).is_ok());
        assert!(InputSignal::new(1.0, 0.0, 1.0, 1001.0, 0.5).is_err());
    }

    #[test]
    fn sample_count_boundaries_inclusive() {
        // Exactly MIN_SAMPLES and MAX_SAMPLES pass.
        assert!(InputSignal::new(1.0, 0.0, 1.0, 10.0, 1.0).is_ok());
        assert!(InputSignal::new(1.0, 0.0, 1.0, 100.0, 0.01).is_ok());
        // 9 samples is too few, 20000 too many.
        assert!(InputSignal::new(1.0, 0.0, 1.0, 9.0, 1.0).is_err());
        assert!(InputSignal::new(1.0, 0.0, 1.0, 200.0, 0.01).is_err());
    }

    #[test]
    fn step_time_must_precede_total_time() {
        assert!(InputSignal::new(10.0, 0.0, 1.0, 10.0, 0.01).is_err());
        assert!(InputSignal::new(9.99, 0.0, 1.0, 10.0, 0.01).is_ok());
    }

    #[test]
    fn value_limits() {
        assert!(InputSignal::new(1.0, -100.0, 100.0, 10.0, 0.01).is_ok());
        assert!(InputSignal::new(1.0, -100.5, 1.0, 10.0, 0.01).is_err());
        assert!(InputSignal::new(1.0, 0.0, 101.0, 10.0, 0.01).is_err());
    }

    #[test]
    fn all_violations_collected() {
        let mut signal = InputSignal::default();
        let err = signal
            .set(-1.0, -200.0, 200.0, 2000.0, f64::NAN)
            .unwrap_err();
        let report = err.to_string();
        let lines: Vec<&str> = report.lines().collect();
        assert!(lines.len() >= 4, "expected a multi-line report: {report}");
        assert!(report.contains("Step time"));
        assert!(report.contains("Total time"));
        assert!(report.contains("Sample time"));
        assert!(report.contains("Initial value"));
        assert!(report.contains("Final value"));
    }

    #[test]
    fn failed_set_keeps_previous_values() {
        let mut signal = InputSignal::default();
        assert!(signal.set(1.0, 0.0, 1.0, -5.0, 0.01).is_err());
        assert_eq!(signal, InputSignal::default());
    }

    #[test]
    fn nan_sample_time_reported_without_panicking() {
        let mut signal = InputSignal::default();
        let err = signal.set(1.0, 0.0, 1.0, 10.0, f64::NAN).unwrap_err();
        assert!(err.to_string().contains("finite"));
    }
}
