//! Plain-text project format.
//!
//! A project file is six lines, each a labeled section:
//!
//! ```text
//! Project: Motor Lab
//! Plant type: DC Motor Speed Control
//! PID: {'kd': 1.0, 'ki': 1.0, 'kp': 1.0}
//! Plant: {'J': 0.01, 'K': 0.01, 'L': 0.5, 'R': 1.0, 'b': 0.1}
//! Input: {'final_value': 1.0, 'initial_value': 0.0, 'sample_time': 0.01, 'step_time': 1.0, 'total_time': 10.0}
//! Sensor: {'Denominator': [1.0], 'Numerator': [1.0]}
//! ```
//!
//! The parameter maps are dict literals with single-quoted keys;
//! coefficient lists may also appear in tuple form `(1.0, 5.0)`. The
//! reader normalizes quotes and parens and hands the result to a JSON
//! parser, so both spellings load.

use crate::error::{ProjectError, ProjectResult};
use crate::schema::ProjectFile;
use ll_models::{Coeff, ParamMap, ParamValue};
use std::fmt::Write as _;

/// Render a project to its on-disk text form.
pub fn to_text(project: &ProjectFile) -> String {
    let mut out = String::new();
    // Infallible for String; discard the fmt::Result.
    let _ = writeln!(out, "Project: {}", project.name);
    let _ = writeln!(out, "Plant type: {}", project.plant_type);
    let _ = writeln!(out, "PID: {}", dict_literal(&project.pid));
    let _ = writeln!(out, "Plant: {}", dict_literal(&project.plant));
    let _ = writeln!(out, "Input: {}", dict_literal(&project.input));
    let _ = writeln!(out, "Sensor: {}", dict_literal(&project.sensor));
    out
}

/// Parse the text form back into a project.
pub fn from_text(text: &str) -> ProjectResult<ProjectFile> {
    let name = section_value(text, "Project:")?.to_string();
    let plant_type = section_value(text, "Plant type:")?.to_string();
    let pid = parse_dict(section_value(text, "PID:")?, "PID")?;
    let plant = parse_dict(section_value(text, "Plant:")?, "Plant")?;
    let input = parse_dict(section_value(text, "Input:")?, "Input")?;
    let sensor = parse_dict(section_value(text, "Sensor:")?, "Sensor")?;
    Ok(ProjectFile {
        name,
        plant_type,
        pid,
        plant,
        input,
        sensor,
    })
}

fn section_value<'a>(text: &'a str, label: &'static str) -> ProjectResult<&'a str> {
    text.lines()
        .find_map(|line| line.strip_prefix(label))
        .map(str::trim)
        .ok_or(ProjectError::MissingSection { label })
}

/// Python-style dict literal with sorted keys.
fn dict_literal(map: &ParamMap) -> String {
    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| format!("'{key}': {}", value_literal(value)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn value_literal(value: &ParamValue) -> String {
    match value {
        ParamValue::Scalar(v) => float_literal(*v),
        ParamValue::Coeffs(list) => {
            let items: Vec<String> = list
                .0
                .iter()
                .map(|c| match c {
                    Coeff::Value(v) => float_literal(*v),
                    Coeff::Symbol(s) => format!("'{s}'"),
                })
                .collect();
            format!("[{}]", items.join(", "))
        }
    }
}

/// Floats keep a decimal point so the file reads as numeric data
/// (`1.0`, not `1`).
fn float_literal(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// Normalize a dict literal to JSON and deserialize it.
fn parse_dict(literal: &str, section: &'static str) -> ProjectResult<ParamMap> {
    let normalized: String = literal
        .chars()
        .map(|c| match c {
            '\'' => '"',
            '(' => '[',
            ')' => ']',
            other => other,
        })
        .collect();
    serde_json::from_str(&normalized).map_err(|source| ProjectError::MalformedDict {
        section,
        message: source.to_string(),
    })
}
