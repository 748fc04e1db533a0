//! # Domain Types
//!
//! Types flowing through the deduction-limit pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │  LimitRequest   │──►│ HouseholdProfile │──►│ LimitBreakdown  │      │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────  │      │
//! │  │  wire (i64s)    │   │  annual_income   │   │  every stage    │      │
//! │  │  unvalidated    │   │  married         │   │  of the math    │      │
//! │  └─────────────────┘   │  dependents      │   └────────┬────────┘      │
//! │                        │  premium?        │            │               │
//! │                        │  mortgage?       │            ▼               │
//! │                        └──────────────────┘   ┌─────────────────┐      │
//! │                                               │   LimitResult   │      │
//! │  ┌─────────────────┐                          │  ─────────────  │      │
//! │  │      Rate       │                          │  limit          │      │
//! │  │  ─────────────  │                          │  rounded_limit  │      │
//! │  │  bps (u32)      │                          │  self_burden    │      │
//! │  │  1000 = 10.00%  │                          │  deduction      │      │
//! │  └─────────────────┘                          │  recommended    │      │
//! │                                               └─────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are created fresh per call and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::{Sen, Yen};

// =============================================================================
// Rate
// =============================================================================

/// A rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (resident tax on income), 2330 bps = 23.30%
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rate(u32);

impl Rate {
    /// Basis points in 100%.
    pub const SCALE: u32 = 10_000;

    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
    }
}

// =============================================================================
// Household Profile
// =============================================================================

/// The household whose deduction limit is being computed.
///
/// Constructed by the caller per request; the pipeline only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseholdProfile {
    /// Gross annual employment income.
    pub annual_income: Yen,

    /// Whether the earner has a spouse eligible for the spousal deduction.
    pub married: bool,

    /// Number of tax dependents.
    pub dependents: u32,

    /// Actual social-insurance premium. Estimated from income when absent.
    pub social_insurance_premium: Option<Yen>,

    /// Mortgage credit carried over against resident tax.
    pub mortgage_deduction_amount: Option<Yen>,
}

impl HouseholdProfile {
    /// Creates a profile with no premium override and no mortgage credit.
    ///
    /// ## Example
    /// ```rust
    /// use furusato_core::money::Yen;
    /// use furusato_core::types::HouseholdProfile;
    ///
    /// let profile = HouseholdProfile::new(Yen::new(5_000_000), false, 0)
    ///     .with_social_insurance(Yen::new(700_000));
    /// assert_eq!(profile.mortgage_deduction(), Yen::zero());
    /// ```
    pub fn new(annual_income: Yen, married: bool, dependents: u32) -> Self {
        HouseholdProfile {
            annual_income,
            married,
            dependents,
            social_insurance_premium: None,
            mortgage_deduction_amount: None,
        }
    }

    /// Sets the actual social-insurance premium.
    pub fn with_social_insurance(mut self, premium: Yen) -> Self {
        self.social_insurance_premium = Some(premium);
        self
    }

    /// Sets the mortgage credit against resident tax.
    pub fn with_mortgage_deduction(mut self, amount: Yen) -> Self {
        self.mortgage_deduction_amount = Some(amount);
        self
    }

    /// Mortgage credit, defaulting to zero.
    #[inline]
    pub fn mortgage_deduction(&self) -> Yen {
        self.mortgage_deduction_amount.unwrap_or_default()
    }
}

// =============================================================================
// Wire Request
// =============================================================================

/// The request body as it arrives from a client, before validation.
///
/// Numbers are plain signed integers here so that a negative income
/// deserializes and is rejected by [`crate::validation::validate_request`]
/// with a proper message instead of a serde type error.
///
/// ```json
/// { "annualIncome": 5000000, "married": false, "dependents": 0,
///   "socialInsurance": 700000, "mortgageDeduction": 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LimitRequest {
    #[ts(type = "number")]
    pub annual_income: i64,

    pub married: bool,

    #[ts(type = "number")]
    pub dependents: i64,

    #[serde(default)]
    #[ts(type = "number | null")]
    pub social_insurance: Option<i64>,

    #[serde(default)]
    #[ts(type = "number | null")]
    pub mortgage_deduction: Option<i64>,
}

// =============================================================================
// Breakdown
// =============================================================================

/// Every intermediate value of one pipeline run.
///
/// [`crate::limit::assemble`] is computed from this record, so the audit
/// trail shown to a user always agrees with the headline numbers. Stages
/// that can carry fractions of a yen are [`Sen`] and serialize as decimal
/// strings (`"5662.50"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LimitBreakdown {
    pub annual_income: Yen,
    pub employment_deduction: Sen,
    pub social_insurance: Yen,
    /// True when `social_insurance` came from the 15% estimator.
    pub social_insurance_estimated: bool,
    pub basic_deduction: Yen,
    pub spousal_deduction: Yen,
    pub dependent_deduction: Yen,
    pub total_deductions: Yen,
    pub taxable_income: Sen,
    pub marginal_rate: Rate,
    pub resident_tax: Sen,
    pub adjusted_resident_tax: Sen,
    pub limit: Yen,
}

// =============================================================================
// Limit Result
// =============================================================================

/// The user-facing answer.
///
/// ```json
/// { "limit": 54362, "roundedLimit": 54000, "selfBurden": 2000,
///   "deductionAmount": 52000, "recommendedAmount": 18000 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LimitResult {
    /// Raw deductible ceiling after the safety margin.
    pub limit: Yen,

    /// `limit` floored to the nearest 1,000 yen.
    pub rounded_limit: Yen,

    /// Fixed out-of-pocket portion (2,000 yen).
    pub self_burden: Yen,

    /// `rounded_limit - self_burden`, clamped at zero.
    pub deduction_amount: Yen,

    /// Suggested budget per item assuming three donations.
    pub recommended_amount: Yen,
}

// =============================================================================
// Unit Tests
// =============================================================================
