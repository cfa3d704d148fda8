//! Range-constraint checks shared by the plant catalog.
//!
//! Each check produces the exact user-facing message on violation; plant
//! validation runs these lazily, at the moment a transfer function is
//! requested, and reports only the first failure.

use crate::error::{ModelError, ModelResult};
use ll_core::Real;

pub fn must_be_positive(name: &str, value: Real) -> ModelResult<()> {
    if value <= 0.0 {
        Err(ModelError::Constraint {
            message: format!(
                "Error: {name} must be positive and strictly greater than 0 (got {value})."
            ),
        })
    } else {
        Ok(())
    }
}

pub fn must_be_nonnegative(name: &str, value: Real) -> ModelResult<()> {
    if value < 0.0 {
        Err(ModelError::Constraint {
            message: format!("Error: {name} must be non-negative or zero (got {value})."),
        })
    } else {
        Ok(())
    }
}

pub fn must_be_negative(name: &str, value: Real) -> ModelResult<()> {
    if value >= 0.0 {
        Err(ModelError::Constraint {
            message: format!("Error: {name} must be negative (got {value})."),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_check() {
        assert!(must_be_positive("Mass m", 1.0).is_ok());
        let err = must_be_positive("Mass m", -1.0).unwrap_err();
        assert!(err.to_string().contains("Mass m must be positive"));
        assert!(err.to_string().contains("(got -1)"));
        // Zero is not strictly positive
        assert!(must_be_positive("Mass m", 0.0).is_err());
    }

    #[test]
    fn nonnegative_check() {
        assert!(must_be_nonnegative("Moment of inertia J", 0.0).is_ok());
        let err = must_be_nonnegative("Moment of inertia J", -0.02).unwrap_err();
        assert!(
            err.to_string()
                .contains("Moment of inertia J must be non-negative")
        );
    }

    #[test]
    fn negative_check() {
        assert!(must_be_negative("Gravity g", -9.81).is_ok());
        assert!(must_be_negative("Gravity g", 9.81).is_err());
        assert!(must_be_negative("Gravity g", 0.0).is_err());
    }
}
