//! # Error Types
//!
//! Domain-specific error types for furusato-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  furusato-core errors (this file)                                      │
//! │  ├── CoreError        - Pipeline failures                              │
//! │  │   ├── InvalidInput - precondition violated (wraps ValidationError)  │
//! │  │   └── Computation  - arithmetic fault (see ComputationFault)        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  limit-cli errors (separate crate)                                     │
//! │  └── CliError         - What the caller sees (code + message)          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr / exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pipeline is pure arithmetic, so the taxonomy is narrow: either the
//! input broke a precondition, or a formula hit an undefined point. There
//! are no partial results.

use thiserror::Error;

use crate::types::Rate;

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced by the limit pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The profile broke a precondition (negative income, etc.).
    ///
    /// ## When This Occurs
    /// - A caller skipped boundary validation and built a profile by hand
    /// - Maps to a client error at the boundary
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The limit formula hit an undefined or unrepresentable point.
    ///
    /// ## When This Occurs
    /// Only for inputs the validated pipeline never produces: marginal rates
    /// far above the bracket table, or a resident tax so large the limit
    /// leaves i64. The solver is public, so both are checked.
    /// Maps to a server error at the boundary.
    #[error("Computation fault at marginal rate {marginal_rate}: {fault}")]
    Computation {
        marginal_rate: Rate,
        fault: ComputationFault,
    },
}

/// What went wrong inside the limit solver.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ComputationFault {
    /// `1 - (rate × 1.021 + 0.10)` is not positive (rates of about 88.15%
    /// and up).
    #[error("control rate is not positive")]
    NonPositiveControlRate,

    /// The limit does not fit in whole yen.
    #[error("limit overflows")]
    Overflow,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before any arithmetic runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value must not be negative.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: i64 },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::Computation {
            marginal_rate: Rate::from_bps(9000),
            fault: ComputationFault::NonPositiveControlRate,
        };
        assert_eq!(
            err.to_string(),
            "Computation fault at marginal rate 90.00%: control rate is not positive"
        );

        let err = CoreError::Computation {
            marginal_rate: Rate::from_bps(8814),
            fault: ComputationFault::Overflow,
        };
        assert_eq!(
            err.to_string(),
            "Computation fault at marginal rate 88.14%: limit overflows"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Negative {
            field: "annualIncome".to_string(),
            value: -1,
        };
        assert_eq!(err.to_string(), "annualIncome must not be negative (got -1)");

        let err = ValidationError::OutOfRange {
            field: "dependents".to_string(),
            min: 0,
            max: 99,
        };
        assert_eq!(err.to_string(), "dependents must be between 0 and 99");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "annualIncome".to_string(),
            value: -5,
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidInput(_)));
        assert_eq!(
            core_err.to_string(),
            "Invalid input: annualIncome must not be negative (got -5)"
        );
    }
}
