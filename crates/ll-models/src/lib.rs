//! Block models for the closed-loop simulator: the plant catalog, the PID
//! controller, the feedback sensor, and the step input signal.
//!
//! Models hold plain parameters and re-derive their transfer functions on
//! demand. Plants and the sensor validate lazily (first violation, at
//! derivation time); the input signal validates eagerly (all violations,
//! at mutation time). Both policies are load-bearing for the editors.

pub mod checks;
pub mod controller;
pub mod error;
pub mod input;
pub mod latex;
pub mod params;
pub mod plant;
pub mod ratio;
pub mod sensor;
pub mod traits;

pub use controller::Pid;
pub use error::{ModelError, ModelResult};
pub use input::{InputSignal, MAX_SAMPLES, MAX_TOTAL_TIME, MIN_SAMPLES, VALUE_LIMIT};
pub use params::{Coeff, CoeffList, LatexOverrides, ParamMap, ParamValue};
pub use plant::{Plant, PlantKind, get_plant, plant_names};
pub use ratio::PolyRatio;
pub use sensor::Sensor;
pub use traits::BlockModel;
