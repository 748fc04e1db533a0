//! # Validation Module
//!
//! Precondition checks for the limit pipeline.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Boundary (CLI / HTTP handler)                                │
//! │  ├── Type validation (deserialization into LimitRequest)               │
//! │  └── validate_request: LimitRequest → HouseholdProfile                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pipeline entry (limit::assemble / limit::breakdown)          │
//! │  └── validate_profile: fail fast on hand-built profiles                │
//! │                                                                         │
//! │  Nothing is clamped here: a bad input is an error, not a zero.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Yen;
use crate::types::{HouseholdProfile, LimitRequest};
use crate::{MAX_AMOUNT, MAX_DEPENDENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a monetary field: `0 ≤ value ≤ MAX_AMOUNT`.
///
/// ## Example
/// ```rust
/// use furusato_core::validation::validate_amount;
///
/// assert!(validate_amount("annualIncome", 5_000_000).is_ok());
/// assert!(validate_amount("annualIncome", 0).is_ok());
/// assert!(validate_amount("annualIncome", -1).is_err());
/// ```
pub fn validate_amount(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }

    if value > MAX_AMOUNT {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_AMOUNT,
        });
    }

    Ok(())
}

/// Validates a dependent count: `0 ≤ count ≤ MAX_DEPENDENTS`.
pub fn validate_dependents(count: i64) -> ValidationResult<u32> {
    if count < 0 {
        return Err(ValidationError::Negative {
            field: "dependents".to_string(),
            value: count,
        });
    }

    if count > MAX_DEPENDENTS as i64 {
        return Err(ValidationError::OutOfRange {
            field: "dependents".to_string(),
            min: 0,
            max: MAX_DEPENDENTS as i64,
        });
    }

    Ok(count as u32)
}

// =============================================================================
// Whole-Input Validators
// =============================================================================

/// Checks a profile before the pipeline runs.
pub fn validate_profile(profile: &HouseholdProfile) -> ValidationResult<()> {
    validate_amount("annualIncome", profile.annual_income.amount())?;
    validate_dependents(profile.dependents as i64)?;
    if let Some(premium) = profile.social_insurance_premium {
        validate_amount("socialInsurance", premium.amount())?;
    }
    if let Some(credit) = profile.mortgage_deduction_amount {
        validate_amount("mortgageDeduction", credit.amount())?;
    }
    Ok(())
}

/// Converts a wire request into a validated profile.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  POST { annualIncome, married, dependents, socialInsurance? ... }      │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_request ← THIS FUNCTION                                      │
/// │       │                                                                 │
/// │       ├── any amount < 0?      → Error: "... must not be negative"     │
/// │       ├── dependents > 99?     → Error: "... must be between 0 and 99" │
/// │       │                                                                 │
/// │       └── OK → HouseholdProfile → limit::assemble                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust
/// use furusato_core::types::LimitRequest;
/// use furusato_core::validation::validate_request;
///
/// let request = LimitRequest {
///     annual_income: 5_000_000,
///     married: false,
///     dependents: -1,
///     social_insurance: None,
///     mortgage_deduction: None,
/// };
/// assert!(validate_request(&request).is_err());
/// ```
pub fn validate_request(request: &LimitRequest) -> ValidationResult<HouseholdProfile> {
    validate_amount("annualIncome", request.annual_income)?;
    let dependents = validate_dependents(request.dependents)?;

    let mut profile =
        HouseholdProfile::new(Yen::new(request.annual_income), request.married, dependents);

    if let Some(premium) = request.social_insurance {
        validate_amount("socialInsurance", premium)?;
        profile = profile.with_social_insurance(Yen::new(premium));
    }

    if let Some(credit) = request.mortgage_deduction {
        validate_amount("mortgageDeduction", credit)?;
        profile = profile.with_mortgage_deduction(Yen::new(credit));
    }

    Ok(profile)
}

// =============================================================================
// Unit Tests
// =============================================================================
