//! # Donation Limit
//!
//! Solves the deductible ceiling and packages it for the user.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     assemble(profile)                                   │
//! │                            │                                            │
//! │                            ▼                                            │
//! │  breakdown(profile) ── validate_profile                                 │
//! │       │                                                                 │
//! │       ├── employment_income_deduction(income)          (brackets)      │
//! │       ├── StatutoryDeductions::for_profile             (deductions)    │
//! │       ├── resolve_taxable_income                       (deductions)    │
//! │       ├── marginal_income_tax_rate(taxable)            (brackets)      │
//! │       ├── adjusted_resident_tax(taxable, mortgage)     (resident_tax)  │
//! │       └── solve_limit(adjusted, rate)                  (this module)   │
//! │                            │                                            │
//! │                            ▼                                            │
//! │  LimitResult::from_limit ── 1,000-yen floor, self burden, 1/3 split    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every step is a pure function; calls can run concurrently without any
//! coordination.

use tracing::{debug, warn};

use crate::brackets::{employment_income_deduction, marginal_income_tax_rate};
use crate::deductions::{resolve_taxable_income, StatutoryDeductions};
use crate::error::{ComputationFault, CoreError, CoreResult};
use crate::money::{Sen, Yen};
use crate::resident_tax::{adjusted_resident_tax, resident_tax_on_income, RESIDENT_TAX_RATE};
use crate::types::{HouseholdProfile, LimitBreakdown, LimitResult, Rate};
use crate::validation::validate_profile;
use crate::{ROUNDING_UNIT, SAFETY_MARGIN, SELF_BURDEN, SUGGESTED_DONATION_COUNT};

/// Share of resident tax the special deduction may absorb (20%).
pub const SPECIAL_DEDUCTION_CAP_RATE: Rate = Rate::from_bps(2000);

/// Income tax multiplier including the reconstruction surtax, per mille
/// (1.021).
pub const INCOME_TAX_SURTAX_PER_MILLE: i64 = 1021;

/// Fixed-point scale for the control rate: basis points × per mille.
const CONTROL_SCALE: i128 = Rate::SCALE as i128 * 1000;

// =============================================================================
// Solver
// =============================================================================

/// Computes the raw deductible ceiling.
///
/// ## Formula
/// ```text
/// control = 1 − (marginal × 1.021 + 0.10)
/// limit   = floor(adjusted × 0.20 / control) + 2,000
/// safe    = max(0, floor(limit × 0.90))
/// ```
/// Evaluated exactly in i128 at a 10^7 scale from the unrounded resident
/// tax, so the two floors above are the only rounding. With no resident tax
/// left there is nothing to deduct against and the limit is zero.
///
/// ## Errors
/// [`CoreError::Computation`] when `control ≤ 0`, or when the limit does
/// not fit in i64 yen.
///
/// ## Example
/// ```rust
/// use furusato_core::limit::solve_limit;
/// use furusato_core::money::{Sen, Yen};
/// use furusato_core::types::Rate;
///
/// // 233,000 × 0.2 / 0.7979 = 58,403 → +2,000 → ×0.9 = 54,362
/// let limit = solve_limit(Yen::new(233_000).to_sen(), Rate::from_bps(1000)).unwrap();
/// assert_eq!(limit, Yen::new(54_362));
///
/// // 0.50 yen of tax: floor(0.1 / 0.84895) = 0 → +2,000 → ×0.9 = 1,800
/// let limit = solve_limit(Sen::new(50), Rate::from_bps(500)).unwrap();
/// assert_eq!(limit, Yen::new(1_800));
///
/// assert!(solve_limit(Yen::new(233_000).to_sen(), Rate::from_bps(9000)).is_err());
/// ```
pub fn solve_limit(adjusted_resident_tax: Sen, marginal_rate: Rate) -> CoreResult<Yen> {
    let fault = |fault| CoreError::Computation {
        marginal_rate,
        fault,
    };

    let control = CONTROL_SCALE
        - (marginal_rate.bps() as i128 * INCOME_TAX_SURTAX_PER_MILLE as i128
            + RESIDENT_TAX_RATE.bps() as i128 * 1000);

    if control <= 0 {
        warn!(%marginal_rate, control = %control, "non-positive control rate");
        return Err(fault(ComputationFault::NonPositiveControlRate));
    }

    if adjusted_resident_tax.is_zero() {
        return Ok(Yen::zero());
    }

    // adjusted × cap_bps / 10^4, divided by control / 10^7, with adjusted in sen
    let numerator =
        adjusted_resident_tax.amount() as i128 * SPECIAL_DEDUCTION_CAP_RATE.bps() as i128 * 1000;
    let base = numerator.div_euclid(control * Sen::PER_YEN as i128);

    let limit = i64::try_from(base)
        .ok()
        .and_then(|base| Yen::new(base).checked_add(SELF_BURDEN))
        .ok_or_else(|| {
            warn!(%marginal_rate, %adjusted_resident_tax, "limit overflows i64");
            fault(ComputationFault::Overflow)
        })?;

    Ok(limit.scale_bps(SAFETY_MARGIN).clamp_non_negative())
}

// =============================================================================
// Breakdown & Assembly
// =============================================================================

/// Runs the whole pipeline and keeps every intermediate value.
///
/// ## Errors
/// - [`CoreError::InvalidInput`] when the profile breaks a precondition
/// - [`CoreError::Computation`] from [`solve_limit`]
pub fn breakdown(profile: &HouseholdProfile) -> CoreResult<LimitBreakdown> {
    validate_profile(profile)?;

    let income = profile.annual_income;
    let employment_deduction = employment_income_deduction(income);
    let deductions = StatutoryDeductions::for_profile(profile);
    let total_deductions = deductions.total();
    let taxable_income = resolve_taxable_income(income, employment_deduction, total_deductions);
    let marginal_rate = marginal_income_tax_rate(taxable_income);
    let resident_tax = resident_tax_on_income(taxable_income);
    let adjusted = adjusted_resident_tax(taxable_income, profile.mortgage_deduction());
    let limit = solve_limit(adjusted, marginal_rate)?;

    debug!(
        %income,
        %taxable_income,
        %marginal_rate,
        %adjusted,
        %limit,
        "deduction limit computed"
    );

    Ok(LimitBreakdown {
        annual_income: income,
        employment_deduction,
        social_insurance: deductions.social_insurance,
        social_insurance_estimated: deductions.social_insurance_estimated,
        basic_deduction: deductions.basic,
        spousal_deduction: deductions.spousal,
        dependent_deduction: deductions.dependent,
        total_deductions,
        taxable_income,
        marginal_rate,
        resident_tax,
        adjusted_resident_tax: adjusted,
        limit,
    })
}

/// Computes the user-facing limit for a household.
///
/// ## Example
/// ```rust
/// use furusato_core::limit::assemble;
/// use furusato_core::money::Yen;
/// use furusato_core::types::HouseholdProfile;
///
/// let profile = HouseholdProfile::new(Yen::new(5_000_000), false, 0);
/// let result = assemble(&profile).unwrap();
///
/// assert_eq!(result.limit, Yen::new(54_362));
/// assert_eq!(result.rounded_limit, Yen::new(54_000));
/// assert_eq!(result.deduction_amount, Yen::new(52_000));
/// assert_eq!(result.recommended_amount, Yen::new(18_000));
/// ```
pub fn assemble(profile: &HouseholdProfile) -> CoreResult<LimitResult> {
    breakdown(profile).map(|b| LimitResult::from_limit(b.limit))
}

impl LimitResult {
    /// Packages a raw limit.
    ///
    /// `deduction_amount` is clamped at zero: below a 2,000-yen rounded
    /// limit no donation is deductible, and a negative figure is never
    /// shown to a user.
    pub fn from_limit(limit: Yen) -> Self {
        let rounded_limit = limit.floor_to(ROUNDING_UNIT);
        LimitResult {
            limit,
            rounded_limit,
            self_burden: SELF_BURDEN,
            deduction_amount: (rounded_limit - SELF_BURDEN).clamp_non_negative(),
            recommended_amount: rounded_limit.split_floor(SUGGESTED_DONATION_COUNT),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
