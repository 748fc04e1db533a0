//! # furusato-core: Pure Deduction-Limit Pipeline
//!
//! This crate computes how much a household can donate under the hometown
//! tax donation scheme while keeping the out-of-pocket cost at the fixed
//! 2,000-yen self burden. It contains all of the tax arithmetic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Furusato Limit Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Boundary (limit-cli, HTTP handler, ...)            │   │
//! │  │    parse JSON ──► validate_request ──► serialize LimitResult    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HouseholdProfile                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ furusato-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌────────────┐  ┌──────────────┐  ┌─────────┐  │   │
//! │  │   │ brackets │  │ deductions │  │ resident_tax │  │  limit  │  │   │
//! │  │   │  tables  │─►│  taxable   │─►│   mortgage   │─►│ solver  │  │   │
//! │  │   │  lookups │  │  income    │  │   credit     │  │ result  │  │   │
//! │  │   └──────────┘  └────────────┘  └──────────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • NO FLOATS • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Profile, request, breakdown and result types
//! - [`money`] - `Yen` and `Sen` types with integer arithmetic
//! - [`brackets`] - Statutory lookup tables
//! - [`deductions`] - Social insurance, statutory deductions, taxable income
//! - [`resident_tax`] - Resident tax and mortgage credit
//! - [`limit`] - Limit solver and result assembly
//! - [`validation`] - Precondition checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, safe to call concurrently
//! 2. **Integer Money**: inputs and results are whole yen (i64), fractional
//!    intermediates are exact sen, rates are basis points
//! 3. **Explicit Floors**: every rounding step floors, and only where documented
//! 4. **Explicit Errors**: bad input and undefined arithmetic are typed errors
//!
//! ## Example Usage
//!
//! ```rust
//! use furusato_core::{assemble, HouseholdProfile, Yen};
//!
//! let profile = HouseholdProfile::new(Yen::new(5_000_000), false, 0);
//! let result = assemble(&profile).unwrap();
//!
//! assert_eq!(result.rounded_limit, Yen::new(54_000));
//! assert_eq!(result.self_burden, Yen::new(2_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod brackets;
pub mod deductions;
pub mod error;
pub mod limit;
pub mod money;
pub mod resident_tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ComputationFault, CoreError, CoreResult, ValidationError};
pub use limit::{assemble, breakdown, solve_limit};
pub use money::{Sen, Yen};
pub use types::*;
pub use validation::validate_request;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tax year the bracket tables describe.
pub const TAX_YEAR: u16 = 2024;

/// Out-of-pocket cost that remains regardless of donation size.
pub const SELF_BURDEN: Yen = Yen::new(2_000);

/// The rounded limit is floored to a multiple of this many yen.
pub const ROUNDING_UNIT: i64 = 1_000;

/// Share of the theoretical limit that is reported (90%).
///
/// ## Business Reason
/// The social-insurance estimate and bracket lookups are approximations;
/// reporting 10% less keeps a user from over-donating on estimation error.
pub const SAFETY_MARGIN: types::Rate = types::Rate::from_bps(9_000);

/// Number of donations the recommended per-item budget assumes.
pub const SUGGESTED_DONATION_COUNT: i64 = 3;

/// Largest dependent count accepted.
pub const MAX_DEPENDENTS: u32 = 99;

/// Largest monetary input accepted (10^15 yen). Keeps every intermediate
/// sum far from i64 overflow.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;
