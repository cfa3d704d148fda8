//! Fixed-step time simulation of a state-space system.

use crate::error::{ResponseError, ResponseResult};
use crate::state_space::StateSpace;
use ll_core::{Real, TransferFunction};
use nalgebra::DVector;

/// Classic fourth-order Runge-Kutta step for `dx/dt = A*x + B*u` with the
/// input held constant over the interval.
fn rk4_step(ss: &StateSpace, state: &DVector<Real>, u: Real, dt: Real) -> DVector<Real> {
    let k1 = ss.derivative(state, u);
    let k2 = ss.derivative(&(state + &k1 * (0.5 * dt)), u);
    let k3 = ss.derivative(&(state + &k2 * (0.5 * dt)), u);
    let k4 = ss.derivative(&(state + &k3 * dt), u);
    state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
}

/// Unit step response sampled at `n` points with spacing `dt`, starting
/// from rest at `t = 0`.
pub fn step_response(tf: &TransferFunction, dt: Real, n: usize) -> ResponseResult<Vec<Real>> {
    if n == 0 {
        return Err(ResponseError::InvalidGrid { what: "empty" });
    }
    if !(dt.is_finite() && dt > 0.0) {
        return Err(ResponseError::InvalidGrid {
            what: "non-positive step",
        });
    }
    let ss = StateSpace::realize(tf)?;
    let mut state = DVector::<Real>::zeros(ss.order());
    let mut out = Vec::with_capacity(n);
    out.push(ss.output(&state, 1.0));
    for _ in 1..n {
        state = rk4_step(&ss, &state, 1.0, dt);
        out.push(ss.output(&state, 1.0));
    }
    Ok(out)
}

/// Impulse response sampled at `n` points with spacing `dt`.
///
/// The Dirac input is folded into the initial condition: the impulse
/// transfers the state to `x(0+) = B`, after which the system evolves
/// freely. Any direct feedthrough contributes a delta at `t = 0` that has
/// no finite sample value and is not represented.
pub fn impulse_response(tf: &TransferFunction, dt: Real, n: usize) -> ResponseResult<Vec<Real>> {
    if n == 0 {
        return Err(ResponseError::InvalidGrid { what: "empty" });
    }
    if !(dt.is_finite() && dt > 0.0) {
        return Err(ResponseError::InvalidGrid {
            what: "non-positive step",
        });
    }
    let ss = StateSpace::realize(tf)?;
    let mut state = ss.input_vector().clone();
    let mut out = Vec::with_capacity(n);
    out.push(ss.output(&state, 0.0));
    for _ in 1..n {
        state = rk4_step(&ss, &state, 0.0, dt);
        out.push(ss.output(&state, 0.0));
    }
    Ok(out)
}
