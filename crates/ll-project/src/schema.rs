//! On-disk project schema.

use ll_models::ParamMap;
use serde::{Deserialize, Serialize};

/// Everything a project file stores: the project name, the selected
/// plant variant, and the parameter maps of the four blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub name: String,
    pub plant_type: String,
    pub pid: ParamMap,
    pub plant: ParamMap,
    pub input: ParamMap,
    pub sensor: ParamMap,
}
