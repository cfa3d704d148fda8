//! Parameter maps exchanged between the editors, the models, and the
//! project file.
//!
//! Every model exposes its state as a `ParamMap` and accepts partial
//! updates through the same shape; `BTreeMap` keeps the dump order of the
//! project file deterministic.

use crate::error::{ModelError, ModelResult};
use ll_core::Real;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name -> value mapping for one model.
pub type ParamMap = BTreeMap<String, ParamValue>;

/// Display-string overrides used for live LaTeX previews while a value is
/// still being typed (possibly not yet parseable as a number).
pub type LatexOverrides = BTreeMap<String, String>;

/// A single model parameter: either a scalar or a coefficient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(Real),
    Coeffs(CoeffList),
}

impl ParamValue {
    pub fn as_scalar(&self, name: &str) -> ModelResult<Real> {
        match self {
            ParamValue::Scalar(v) => Ok(*v),
            ParamValue::Coeffs(_) => Err(ModelError::WrongParameterKind {
                name: name.to_string(),
                expected: "a scalar value",
            }),
        }
    }

    /// Coefficient-list view. A scalar promotes to a degree-0 list, so
    /// editors can supply a bare number for a polynomial field.
    pub fn as_coeffs(&self) -> CoeffList {
        match self {
            ParamValue::Scalar(v) => CoeffList::from_scalar(*v),
            ParamValue::Coeffs(c) => c.clone(),
        }
    }
}

impl From<Real> for ParamValue {
    fn from(v: Real) -> Self {
        ParamValue::Scalar(v)
    }
}

impl From<CoeffList> for ParamValue {
    fn from(c: CoeffList) -> Self {
        ParamValue::Coeffs(c)
    }
}

/// One coefficient token: a numeric value, or a symbolic placeholder that
/// is legal in the display path but rejected by the simulation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coeff {
    Value(Real),
    Symbol(String),
}

impl fmt::Display for Coeff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coeff::Value(v) => write!(f, "{v}"),
            Coeff::Symbol(s) => write!(f, "{s}"),
        }
    }
}

/// Ordered coefficient list in descending powers of `s`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoeffList(pub Vec<Coeff>);

impl CoeffList {
    pub fn from_scalar(v: Real) -> Self {
        CoeffList(vec![Coeff::Value(v)])
    }

    pub fn from_values(values: &[Real]) -> Self {
        CoeffList(values.iter().map(|v| Coeff::Value(*v)).collect())
    }

    /// Parse a comma-separated coefficient string, e.g. `"1, 0, 5"` for
    /// `s^2 + 5`. Tokens that do not parse as numbers become symbolic
    /// placeholders.
    pub fn parse(text: &str) -> Self {
        let coeffs = text
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| match t.parse::<Real>() {
                Ok(v) => Coeff::Value(v),
                Err(_) => Coeff::Symbol(t.to_string()),
            })
            .collect();
        CoeffList(coeffs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric coefficients for the simulation path; any symbolic token is
    /// an error here.
    pub fn numeric(&self) -> ModelResult<Vec<Real>> {
        self.0
            .iter()
            .map(|c| match c {
                Coeff::Value(v) => Ok(*v),
                Coeff::Symbol(s) => Err(ModelError::SymbolicCoefficient { token: s.clone() }),
            })
            .collect()
    }
}
