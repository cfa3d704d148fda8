//! The closed-loop response engine.
//!
//! Borrows the four blocks and re-derives every transfer function per
//! request, so parameter edits between calls are always picked up. Plot
//! methods fail soft: a validation or algebra failure logs a warning and
//! yields `None`, and the caller shows "no data" instead of crashing.

use crate::error::ResponseResult;
use crate::freq::{self, BodeData, NyquistData};
use crate::locus::{self, RootLocusData};
use crate::simulate;
use ll_core::{Real, TransferFunction};
use ll_models::{BlockModel, InputSignal, Pid, Plant, Sensor};
use tracing::warn;

/// Sampled time-domain response.
#[derive(Debug, Clone)]
pub struct TimeResponse {
    pub time: Vec<Real>,
    pub response: Vec<Real>,
}

pub struct ResponseEngine<'a> {
    plant: &'a Plant,
    pid: &'a Pid,
    input: &'a InputSignal,
    sensor: &'a Sensor,
}

impl<'a> ResponseEngine<'a> {
    pub fn new(plant: &'a Plant, pid: &'a Pid, input: &'a InputSignal, sensor: &'a Sensor) -> Self {
        ResponseEngine {
            plant,
            pid,
            input,
            sensor,
        }
    }

    /// `L(s) = P(s)*C(s)`.
    pub fn open_loop(&self) -> ResponseResult<TransferFunction> {
        let plant = self.plant.transfer_function()?;
        let pid = self.pid.transfer_function()?;
        Ok(plant.series(&pid))
    }

    /// `T(s) = L(s) / (1 + L(s)*H(s))` with the sensor in the feedback
    /// path; an ideal sensor reduces this to unity feedback.
    pub fn closed_loop(&self) -> ResponseResult<TransferFunction> {
        let open = self.open_loop()?;
        let sensor = self.sensor.transfer_function()?;
        Ok(open.feedback(&sensor)?)
    }

    /// Uniform grid over `[0, total_time]`, both endpoints included.
    fn time_grid(&self) -> (Vec<Real>, Real) {
        let n = self.input.num_samples() + 1;
        let dt = self.input.total_time() / (n - 1) as Real;
        let time = (0..n).map(|i| i as Real * dt).collect();
        (time, dt)
    }

    /// Closed-loop response to the configured step input.
    ///
    /// The output holds `initial_value` until `step_time`; from there a
    /// fresh unit-step simulation over the remaining duration is scaled
    /// by `final_value - initial_value` and offset by `initial_value`, so
    /// the transient timing is relative to the step instant.
    pub fn step_response(&self) -> Option<TimeResponse> {
        let closed = match self.closed_loop() {
            Ok(tf) => tf,
            Err(err) => {
                warn!(error = %err, "step response unavailable");
                return None;
            }
        };

        let (time, dt) = self.time_grid();
        let n = time.len();
        let initial = self.input.initial_value();
        let mut response = vec![initial; n];

        let step_time = self.input.step_time();
        let step_index = match time.iter().position(|t| *t >= step_time) {
            Some(i) => i,
            // step_time < total_time is validated, but guard anyway.
            None => return Some(TimeResponse { time, response }),
        };

        let step_duration = self.input.total_time() - step_time;
        let m = ((step_duration / self.input.sample_time()).round() as usize) + 1;
        let dt_step = if m > 1 {
            step_duration / (m - 1) as Real
        } else {
            dt
        };
        let unit = match simulate::step_response(&closed, dt_step, m) {
            Ok(y) => y,
            Err(err) => {
                warn!(error = %err, "step response unavailable");
                return None;
            }
        };

        let amplitude = self.input.final_value() - initial;
        for (j, y) in unit.iter().take(n - step_index).enumerate() {
            response[step_index + j] = initial + amplitude * y;
        }

        Some(TimeResponse { time, response })
    }

    /// Closed-loop impulse response, shifted so the impulse lands at
    /// `step_time` with zeros before it.
    pub fn impulse_response(&self) -> Option<TimeResponse> {
        let closed = match self.closed_loop() {
            Ok(tf) => tf,
            Err(err) => {
                warn!(error = %err, "impulse response unavailable");
                return None;
            }
        };

        let (time, dt) = self.time_grid();
        let n = time.len();
        let unit = match simulate::impulse_response(&closed, dt, n) {
            Ok(y) => y,
            Err(err) => {
                warn!(error = %err, "impulse response unavailable");
                return None;
            }
        };

        let mut response = vec![0.0; n];
        if let Some(impulse_index) = time.iter().position(|t| *t >= self.input.step_time()) {
            let remaining = n - impulse_index;
            for (j, y) in unit.iter().take(remaining).enumerate() {
                response[impulse_index + j] = *y;
            }
        }

        Some(TimeResponse { time, response })
    }

    /// Closed-loop Bode data over the default frequency grid.
    pub fn bode(&self) -> Option<BodeData> {
        match self.closed_loop() {
            Ok(tf) => Some(freq::bode(&tf)),
            Err(err) => {
                warn!(error = %err, "bode plot unavailable");
                None
            }
        }
    }

    /// Closed-loop Nyquist data; the caller obtains the negative branch
    /// via [`NyquistData::mirrored`].
    pub fn nyquist(&self) -> Option<NyquistData> {
        match self.closed_loop() {
            Ok(tf) => Some(freq::nyquist(&tf)),
            Err(err) => {
                warn!(error = %err, "nyquist plot unavailable");
                None
            }
        }
    }

    /// Open-loop root locus.
    pub fn root_locus(&self) -> Option<RootLocusData> {
        let open = match self.open_loop() {
            Ok(tf) => tf,
            Err(err) => {
                warn!(error = %err, "root locus unavailable");
                return None;
            }
        };
        let data = locus::root_locus(&open);
        if data.is_none() {
            warn!("root locus unavailable: open loop has no poles");
        }
        data
    }
}
