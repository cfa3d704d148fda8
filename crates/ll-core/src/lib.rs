//! ll-core: stable foundation for looplab.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - poly (real-coefficient polynomials in the Laplace variable)
//! - tf (rational transfer functions: series, feedback, evaluation, roots)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod poly;
pub mod tf;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use poly::Polynomial;
pub use tf::TransferFunction;

/// Complex scalar used for frequency-domain evaluation and pole locations.
pub type ComplexReal = nalgebra::Complex<numeric::Real>;
