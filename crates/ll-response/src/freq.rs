//! Frequency-domain responses: Bode and Nyquist data generation.

use ll_core::{ComplexReal, Real, TransferFunction};

/// `n` logarithmically spaced points over `[10^lo, 10^hi]`.
pub fn logspace(lo: Real, hi: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![10f64.powf(lo)],
        _ => {
            let step = (hi - lo) / (n - 1) as Real;
            (0..n).map(|i| 10f64.powf(lo + step * i as Real)).collect()
        }
    }
}

/// Bode plot data: magnitude in dB and unwrapped phase in degrees over a
/// log-spaced frequency grid in rad/s.
#[derive(Debug, Clone)]
pub struct BodeData {
    pub frequency: Vec<Real>,
    pub magnitude_db: Vec<Real>,
    pub phase_deg: Vec<Real>,
}

/// Default Bode grid: 1000 points over `[10^-2, 10^3]` rad/s.
pub const BODE_POINTS: usize = 1000;
pub const BODE_DECADES: (Real, Real) = (-2.0, 3.0);

/// Evaluate `H(j*omega)` over the default grid.
///
/// The phase is unwrapped across samples so integrators and high-order
/// roll-off read as a continuous curve instead of jumping at ±180°.
pub fn bode(tf: &TransferFunction) -> BodeData {
    let frequency = logspace(BODE_DECADES.0, BODE_DECADES.1, BODE_POINTS);
    let mut magnitude_db = Vec::with_capacity(frequency.len());
    let mut phase_deg = Vec::with_capacity(frequency.len());

    let mut prev_phase: Option<Real> = None;
    let mut offset = 0.0;
    for w in &frequency {
        let h = tf.eval(ComplexReal::new(0.0, *w));
        magnitude_db.push(20.0 * h.norm().log10());

        let raw = h.arg();
        if let Some(prev) = prev_phase {
            let mut delta = raw + offset - prev;
            while delta > std::f64::consts::PI {
                offset -= 2.0 * std::f64::consts::PI;
                delta -= 2.0 * std::f64::consts::PI;
            }
            while delta < -std::f64::consts::PI {
                offset += 2.0 * std::f64::consts::PI;
                delta += 2.0 * std::f64::consts::PI;
            }
        }
        let unwrapped = raw + offset;
        prev_phase = Some(unwrapped);
        phase_deg.push(unwrapped.to_degrees());
    }

    BodeData {
        frequency,
        magnitude_db,
        phase_deg,
    }
}

/// Nyquist plot data: the positive-frequency branch of `H(j*omega)`.
#[derive(Debug, Clone)]
pub struct NyquistData {
    pub omega: Vec<Real>,
    pub real: Vec<Real>,
    pub imag: Vec<Real>,
}

/// Default Nyquist grid: 500 points over `[10^-2, 10^2]` rad/s.
pub const NYQUIST_POINTS: usize = 500;
pub const NYQUIST_DECADES: (Real, Real) = (-2.0, 2.0);

pub fn nyquist(tf: &TransferFunction) -> NyquistData {
    let omega = logspace(NYQUIST_DECADES.0, NYQUIST_DECADES.1, NYQUIST_POINTS);
    let mut real = Vec::with_capacity(omega.len());
    let mut imag = Vec::with_capacity(omega.len());
    for w in &omega {
        let h = tf.eval(ComplexReal::new(0.0, *w));
        real.push(h.re);
        imag.push(h.im);
    }
    NyquistData { omega, real, imag }
}

impl NyquistData {
    /// The negative-frequency branch by conjugate symmetry: for real
    /// coefficients `H(-jw) = conj(H(jw))`, so only the imaginary part
    /// flips. Saves evaluating the grid twice.
    pub fn mirrored(&self) -> NyquistData {
        NyquistData {
            omega: self.omega.iter().map(|w| -w).collect(),
            real: self.real.clone(),
            imag: self.imag.iter().map(|v| -v).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn logspace_endpoints() {
        let grid = logspace(-2.0, 3.0, 1000);
        assert_eq!(grid.len(), 1000);
        assert!((grid[0] - 1e-2).abs() < 1e-12);
        assert!((grid[999] - 1e3).abs() < 1e-9);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bode_of_first_order_lag() {
        // 1/(s+1): 0 dB at low frequency, -3 dB at the corner, phase
        // from 0 toward -90 degrees.
        let tf = TransferFunction::new(&[1.0], &[1.0, 1.0]).unwrap();
        let data = bode(&tf);
        assert_eq!(data.frequency.len(), BODE_POINTS);
        assert!(data.magnitude_db[0].abs() < 0.01);
        let corner = data
            .frequency
            .iter()
            .position(|w| *w >= 1.0)
            .unwrap();
        assert!((data.magnitude_db[corner] + 3.01).abs() < 0.1);
        assert!(data.phase_deg[0] > -1.0);
        assert!((data.phase_deg[BODE_POINTS - 1] + 90.0).abs() < 1.0);
    }

    #[test]
    fn bode_phase_unwraps_through_high_order_rolloff() {
        // 1/(s+1)^3 ends at -270 degrees; without unwrapping atan2 would
        // fold it back to +90.
        let tf = TransferFunction::new(&[1.0], &[1.0, 3.0, 3.0, 1.0]).unwrap();
        let data = bode(&tf);
        assert!((data.phase_deg[BODE_POINTS - 1] + 270.0).abs() < 2.0);
    }

    #[test]
    fn nyquist_conjugate_symmetry() {
        let tf = TransferFunction::new(&[1.0], &[1.0, 1.0]).unwrap();
        let pos = nyquist(&tf);
        assert_eq!(pos.omega.len(), NYQUIST_POINTS);
        let neg = pos.mirrored();
        for i in 0..NYQUIST_POINTS {
            assert_eq!(pos.real[i], neg.real[i]);
            assert_eq!(pos.imag[i], -neg.imag[i]);
            assert_eq!(pos.omega[i], -neg.omega[i]);
        }
        // Lower half-plane for a lag: imag negative at all frequencies.
        assert!(pos.imag.iter().all(|v| *v <= 0.0));
    }

    proptest! {
        #[test]
        fn logspace_is_sorted_and_bounded(
            lo in -3.0f64..0.0,
            span in 0.1f64..4.0,
            n in 2usize..200
        ) {
            let hi = lo + span;
            let grid = logspace(lo, hi, n);
            prop_assert_eq!(grid.len(), n);
            prop_assert!(grid.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(grid[0] >= 10f64.powf(lo) * (1.0 - 1e-12));
            prop_assert!(grid[n - 1] <= 10f64.powf(hi) * (1.0 + 1e-12));
        }
    }
}
