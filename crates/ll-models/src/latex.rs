//! LaTeX fragments for live equation previews.
//!
//! The editors render these strings to images; the formatting mirrors the
//! established display shapes (`\frac{..}{..}`, `\cdot`, `\left( \right)`).

use crate::params::{Coeff, CoeffList};
use ll_core::Real;

/// Plain display form of a parameter value.
pub fn fmt_value(v: Real) -> String {
    format!("{v}")
}

/// Render a descending-power coefficient list as a polynomial in `s`.
///
/// Symbolic placeholder tokens are rendered verbatim so a partially-typed
/// polynomial still previews.
pub fn poly_latex(coeffs: &CoeffList) -> String {
    let n = coeffs.0.len();
    if n == 0 {
        return "0".to_string();
    }

    let mut out = String::new();
    for (i, coeff) in coeffs.0.iter().enumerate() {
        let power = n - 1 - i;
        let term = match coeff {
            Coeff::Value(v) => {
                if *v == 0.0 {
                    continue;
                }
                match (power, *v) {
                    (0, v) => fmt_value(v),
                    (_, 1.0) => s_power(power),
                    (_, -1.0) => format!("-{}", s_power(power)),
                    (_, v) => format!("{}{}", fmt_value(v), s_power(power)),
                }
            }
            Coeff::Symbol(sym) => {
                if power == 0 {
                    sym.clone()
                } else {
                    format!("{}{}", sym, s_power(power))
                }
            }
        };
        push_term(&mut out, &term);
    }

    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}

/// `$\frac{num}{den}$`
pub fn frac(num: &str, den: &str) -> String {
    format!(r"$\frac{{{num}}}{{{den}}}$")
}

fn s_power(power: usize) -> String {
    match power {
        0 => String::new(),
        1 => "s".to_string(),
        p => format!("s^{{{p}}}"),
    }
}

fn push_term(out: &mut String, term: &str) {
    if out.is_empty() {
        out.push_str(term);
    } else if let Some(rest) = term.strip_prefix('-') {
        out.push_str(" - ");
        out.push_str(rest);
    } else {
        out.push_str(" + ");
        out.push_str(term);
    }
}
