//! Core trait for block-diagram component models.

use crate::error::ModelResult;
use crate::params::{LatexOverrides, ParamMap};
use ll_core::TransferFunction;
use std::collections::BTreeMap;

/// Trait for the blocks of the loop: plant, controller, sensor.
///
/// Blocks are plain parameter holders; the transfer function is re-derived
/// on every call so edits are always picked up, and validation runs at
/// derivation time rather than at assignment time.
pub trait BlockModel {
    /// Display name for editors and the project file.
    fn name(&self) -> &str;

    /// Derive the transfer function from the current parameters.
    ///
    /// Runs the physical range constraints first and stops at the first
    /// violation, returning it as the error.
    fn transfer_function(&self) -> ModelResult<TransferFunction>;

    /// LaTeX equation with current values substituted.
    ///
    /// `overrides` carries display strings for parameters still being
    /// typed; this must render even when the parameter set would fail
    /// validation.
    fn latex_equation(&self, overrides: &LatexOverrides) -> String;

    /// Current parameter values keyed by name.
    fn parameters(&self) -> ParamMap;

    /// Merge the supplied values into the current parameters.
    ///
    /// Keys not present in `updates` keep their value. An unknown key is
    /// an error and leaves the model untouched.
    fn set_parameters(&mut self, updates: &ParamMap) -> ModelResult<()>;

    /// Tooltip text per parameter.
    fn parameter_descriptions(&self) -> BTreeMap<String, String>;

    /// Tooltip text for the block as a whole.
    fn component_description(&self) -> String;
}
