//! Root locus: closed-loop pole trajectories as the loop gain sweeps
//! from zero upward.
//!
//! For an open-loop `L(s) = N(s)/D(s)` the closed-loop poles at gain `k`
//! are the roots of `D(s) + k*N(s)`. The sweep starts at `k = 0` (the
//! open-loop poles) and continues over a log-spaced gain grid; roots are
//! matched to branches by nearest-neighbor continuation so each branch is
//! a continuous trajectory.

use ll_core::{ComplexReal, Real, TransferFunction};

use crate::freq::logspace;

/// Number of nonzero gain samples in the sweep.
pub const LOCUS_POINTS: usize = 240;
/// Gain sweep decades, `[10^-3, 10^3]`.
pub const LOCUS_DECADES: (Real, Real) = (-3.0, 3.0);

#[derive(Debug, Clone)]
pub struct RootLocusData {
    /// Gain values, starting at exactly zero.
    pub gains: Vec<Real>,
    /// One trajectory per open-loop pole; `branches[b][i]` is branch `b`
    /// at `gains[i]`.
    pub branches: Vec<Vec<ComplexReal>>,
}

/// Compute the locus of `open_loop`. Returns `None` when the open loop
/// has no poles to track.
pub fn root_locus(open_loop: &TransferFunction) -> Option<RootLocusData> {
    let den = open_loop.denominator();
    let num = open_loop.numerator();

    let mut previous = den.roots();
    previous.sort_by(|a, b| {
        (a.re, a.im)
            .partial_cmp(&(b.re, b.im))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if previous.is_empty() {
        return None;
    }
    let order = previous.len();

    let mut gains = Vec::with_capacity(LOCUS_POINTS + 1);
    gains.push(0.0);
    gains.extend(logspace(LOCUS_DECADES.0, LOCUS_DECADES.1, LOCUS_POINTS));

    let mut branches: Vec<Vec<ComplexReal>> = vec![Vec::with_capacity(gains.len()); order];
    for (b, root) in previous.iter().enumerate() {
        branches[b].push(*root);
    }

    for k in gains.iter().skip(1) {
        let char_poly = den.add(&num.scale(*k));
        let roots = char_poly.roots();
        let matched = match_to_previous(&previous, roots);
        for (b, root) in matched.iter().enumerate() {
            branches[b].push(*root);
        }
        previous = matched;
    }

    Some(RootLocusData { gains, branches })
}

/// Greedy nearest-neighbor assignment of the new roots to the previous
/// ones. When the characteristic polynomial drops degree (leading-term
/// cancellation at a specific gain) the missing branches hold their last
/// position for that sample.
fn match_to_previous(previous: &[ComplexReal], mut roots: Vec<ComplexReal>) -> Vec<ComplexReal> {
    let mut matched = Vec::with_capacity(previous.len());
    for prev in previous {
        if roots.is_empty() {
            matched.push(*prev);
            continue;
        }
        let (idx, _) = roots
            .iter()
            .enumerate()
            .map(|(i, r)| (i, (r - prev).norm_sqr()))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap_or((0, 0.0));
        matched.push(roots.swap_remove(idx));
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locus_starts_at_open_loop_poles() {
        // L = 1/((s+1)(s+2)): poles -1, -2
        let tf = TransferFunction::new(&[1.0], &[1.0, 3.0, 2.0]).unwrap();
        let data = root_locus(&tf).unwrap();
        assert_eq!(data.gains[0], 0.0);
        assert_eq!(data.branches.len(), 2);
        let mut starts: Vec<Real> = data.branches.iter().map(|b| b[0].re).collect();
        starts.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((starts[0] + 2.0).abs() < 1e-9);
        assert!((starts[1] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn branches_are_continuous() {
        let tf = TransferFunction::new(&[1.0], &[1.0, 3.0, 2.0]).unwrap();
        let data = root_locus(&tf).unwrap();
        for branch in &data.branches {
            assert_eq!(branch.len(), data.gains.len());
            for pair in branch.windows(2) {
                // Successive samples stay close; the two real poles meet
                // at -1.5 then split vertically, never jumping.
                assert!((pair[1] - pair[0]).norm() < 10.0);
            }
        }
    }

    #[test]
    fn second_order_branches_meet_and_go_complex() {
        // D + k = s^2 + 3s + 2 + k: discriminant 1 - 4k, complex for
        // k > 0.25 with real part fixed at -1.5.
        let tf = TransferFunction::new(&[1.0], &[1.0, 3.0, 2.0]).unwrap();
        let data = root_locus(&tf).unwrap();
        let last = data.branches[0].last().unwrap();
        assert!((last.re + 1.5).abs() < 1e-6);
        assert!(last.im.abs() > 1.0);
    }

    #[test]
    fn static_open_loop_has_no_locus() {
        let tf = TransferFunction::new(&[2.0], &[1.0]).unwrap();
        assert!(root_locus(&tf).is_none());
    }
}
