//! # Deductions
//!
//! Social-insurance estimation, statutory deduction aggregation and the
//! taxable-income resolution that consumes them.
//!
//! ## Flow
//! ```text
//! annual_income ──┬──► employment_income_deduction (brackets) ─────────┐
//!                 │                                                     │
//!                 ├──► basic_deduction ───────┐                         │
//!                 ├──► spousal_deduction ─────┤                         │
//!                 ├──► dependent_deduction ───┼──► total_deductions ──┐ │
//!                 └──► social insurance ──────┘                       │ │
//!                      (override or 15%)                              ▼ ▼
//!                                                   resolve_taxable_income
//! ```

use tracing::trace;

use crate::brackets::basic_deduction;
use crate::money::{Sen, Yen};
use crate::types::{HouseholdProfile, Rate};

/// Share of gross income assumed to go to social insurance when the
/// caller does not supply the actual premium.
pub const SOCIAL_INSURANCE_ESTIMATE_RATE: Rate = Rate::from_bps(1500);

/// Spousal deduction amount.
pub const SPOUSAL_DEDUCTION: Yen = Yen::new(330_000);

/// Earner income above which the spousal deduction no longer applies.
pub const SPOUSAL_INCOME_CEILING: Yen = Yen::new(10_000_000);

/// Deduction per dependent.
pub const DEPENDENT_DEDUCTION: Yen = Yen::new(330_000);

// =============================================================================
// Social Insurance
// =============================================================================

/// Estimates the social-insurance premium as `floor(income × 0.15)`.
pub fn estimate_social_insurance(annual_income: Yen) -> Yen {
    annual_income.scale_bps(SOCIAL_INSURANCE_ESTIMATE_RATE)
}

// =============================================================================
// Statutory Deductions
// =============================================================================

/// 330,000 yen when married and earning at most 10,000,000, else zero.
pub fn spousal_deduction(married: bool, annual_income: Yen) -> Yen {
    if married && annual_income <= SPOUSAL_INCOME_CEILING {
        SPOUSAL_DEDUCTION
    } else {
        Yen::zero()
    }
}

/// `dependents × 330,000`.
#[inline]
pub fn dependent_deduction(dependents: u32) -> Yen {
    DEPENDENT_DEDUCTION * dependents
}

/// The deductions subtracted after the employment income deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatutoryDeductions {
    pub basic: Yen,
    pub spousal: Yen,
    pub dependent: Yen,
    pub social_insurance: Yen,
    /// True when `social_insurance` came from [`estimate_social_insurance`].
    pub social_insurance_estimated: bool,
}

impl StatutoryDeductions {
    /// Collects every statutory deduction for a profile.
    ///
    /// ## Example
    /// ```rust
    /// use furusato_core::deductions::StatutoryDeductions;
    /// use furusato_core::money::Yen;
    /// use furusato_core::types::HouseholdProfile;
    ///
    /// let profile = HouseholdProfile::new(Yen::new(5_000_000), false, 0);
    /// let deductions = StatutoryDeductions::for_profile(&profile);
    ///
    /// // 480,000 basic + 750,000 estimated social insurance
    /// assert_eq!(deductions.total(), Yen::new(1_230_000));
    /// assert!(deductions.social_insurance_estimated);
    /// ```
    pub fn for_profile(profile: &HouseholdProfile) -> Self {
        let income = profile.annual_income;
        let (social_insurance, social_insurance_estimated) = match profile.social_insurance_premium
        {
            Some(premium) => (premium, false),
            None => (estimate_social_insurance(income), true),
        };

        let deductions = StatutoryDeductions {
            basic: basic_deduction(income),
            spousal: spousal_deduction(profile.married, income),
            dependent: dependent_deduction(profile.dependents),
            social_insurance,
            social_insurance_estimated,
        };
        trace!(?deductions, "statutory deductions collected");
        deductions
    }

    /// Sum of all four deductions.
    pub fn total(&self) -> Yen {
        self.basic + self.spousal + self.dependent + self.social_insurance
    }
}

// =============================================================================
// Taxable Income
// =============================================================================

/// `max(0, (gross − employment_deduction) − total_deductions)`, kept in sen.
///
/// ## Example
/// ```rust
/// use furusato_core::deductions::resolve_taxable_income;
/// use furusato_core::money::{Sen, Yen};
///
/// let taxable = resolve_taxable_income(
///     Yen::new(5_000_000),
///     Yen::new(1_440_000).to_sen(),
///     Yen::new(1_230_000),
/// );
/// assert_eq!(taxable, Yen::new(2_330_000).to_sen());
///
/// // Never negative
/// let none = resolve_taxable_income(Yen::zero(), Yen::new(550_000).to_sen(), Yen::new(480_000));
/// assert_eq!(none, Sen::zero());
/// ```
pub fn resolve_taxable_income(
    gross_income: Yen,
    employment_deduction: Sen,
    total_deductions: Yen,
) -> Sen {
    ((gross_income.to_sen() - employment_deduction) - total_deductions.to_sen())
        .clamp_non_negative()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_social_insurance() {
        assert_eq!(estimate_social_insurance(Yen::zero()), Yen::zero());
        assert_eq!(estimate_social_insurance(Yen::new(5_000_000)), Yen::new(750_000));
        // 15% of 1,234,567 = 185,185.05 → floor
        assert_eq!(estimate_social_insurance(Yen::new(1_234_567)), Yen::new(185_185));
    }

    #[test]
    fn test_spousal_deduction_boundary() {
        assert_eq!(spousal_deduction(true, Yen::new(9_000_000)), Yen::new(330_000));
        assert_eq!(spousal_deduction(true, Yen::new(10_000_000)), Yen::new(330_000));
        assert_eq!(spousal_deduction(true, Yen::new(10_000_001)), Yen::zero());
        assert_eq!(spousal_deduction(true, Yen::new(11_000_000)), Yen::zero());
        assert_eq!(spousal_deduction(false, Yen::new(5_000_000)), Yen::zero());
    }

    #[test]
    fn test_dependent_deduction() {
        assert_eq!(dependent_deduction(0), Yen::zero());
        assert_eq!(dependent_deduction(1), Yen::new(330_000));
        assert_eq!(dependent_deduction(3), Yen::new(990_000));
    }

    #[test]
    fn test_override_bypasses_estimator() {
        let profile = HouseholdProfile::new(Yen::new(5_000_000), true, 2)
            .with_social_insurance(Yen::new(600_000));
        let deductions = StatutoryDeductions::for_profile(&profile);

        assert_eq!(deductions.social_insurance, Yen::new(600_000));
        assert!(!deductions.social_insurance_estimated);
        assert_eq!(deductions.basic, Yen::new(480_000));
        assert_eq!(deductions.spousal, Yen::new(330_000));
        assert_eq!(deductions.dependent, Yen::new(660_000));
        assert_eq!(deductions.total(), Yen::new(2_070_000));
    }

    #[test]
    fn test_zero_override_is_respected() {
        // An explicit zero premium is an override, not "absent".
        let profile =
            HouseholdProfile::new(Yen::new(5_000_000), false, 0).with_social_insurance(Yen::zero());
        let deductions = StatutoryDeductions::for_profile(&profile);
        assert_eq!(deductions.social_insurance, Yen::zero());
        assert!(!deductions.social_insurance_estimated);
    }

    fn taxable(gross: i64, employment_sen: i64, total: i64) -> Sen {
        resolve_taxable_income(Yen::new(gross), Sen::new(employment_sen), Yen::new(total))
    }

    #[test]
    fn test_taxable_income_clamped() {
        assert_eq!(taxable(1_000_000, 55_000_000, 630_000), Sen::zero());
        assert_eq!(taxable(1_000_000, 55_000_000, 450_000), Sen::zero());
        assert_eq!(taxable(1_000_000, 55_000_000, 449_999), Yen::new(1).to_sen());
    }

    #[test]
    fn test_taxable_income_keeps_fractional_deduction() {
        // 1,799,999 − 619,999.60 − 749,999 = 430,000.40
        assert_eq!(taxable(1_799_999, 61_999_960, 749_999), Sen::new(43_000_040));
        // Less than one yen left is still taxable income.
        assert_eq!(taxable(1_000_000, 55_000_040, 449_999), Sen::new(60));
    }
}
