//! Closed-loop response computation: loop composition, time simulation,
//! and frequency-domain data generation for the plot surfaces.
//!
//! The engine is synchronous and never caches: each request re-derives
//! the transfer functions from the blocks' current parameters. Sample
//! counts are bounded by the input signal's validation, so every
//! computation is finite and runs on the calling thread.

pub mod engine;
pub mod error;
pub mod freq;
pub mod locus;
pub mod simulate;
pub mod state_space;

pub use engine::{ResponseEngine, TimeResponse};
pub use error::{ResponseError, ResponseResult};
pub use freq::{BodeData, NyquistData};
pub use locus::RootLocusData;
pub use state_space::StateSpace;
