//! # Bracket Tables
//!
//! The statutory lookup tables for one tax year, expressed as ordered
//! condition tables rather than nested `if`s so that a tax-year update is a
//! data edit.
//!
//! ## Two Lookup Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CEILING TABLE (ascending, `≤`)        FLOOR TABLE (descending, `>`)    │
//! │                                                                         │
//! │  income ≤ 1,625,000 → row 0            taxable > 40,000,000 → 45%       │
//! │  income ≤ 1,800,000 → row 1            taxable > 18,000,000 → 40%       │
//! │  ...                                   ...                              │
//! │  otherwise          → fallback         otherwise            → 5%        │
//! │                                                                         │
//! │  A value sitting exactly on a          A value sitting exactly on a     │
//! │  breakpoint belongs to the LOWER       breakpoint belongs to the LOWER  │
//! │  row in both shapes.                   row in both shapes.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::{Sen, Yen};
use crate::types::Rate;

// =============================================================================
// Table Shapes
// =============================================================================

/// How a bracket turns income into an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    /// A fixed amount regardless of income.
    Flat(Yen),
    /// `income × rate + offset` (offset may be negative).
    Linear { rate: Rate, offset: Yen },
}

impl Formula {
    /// Evaluates the formula at `income`, exactly, in sen.
    pub fn apply(&self, income: Yen) -> Sen {
        match *self {
            Formula::Flat(amount) => amount.to_sen(),
            Formula::Linear { rate, offset } => income.to_sen().scale_bps(rate) + offset.to_sen(),
        }
    }
}

/// A row that applies while the input is `≤ ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CeilingBracket<T> {
    pub ceiling: Yen,
    pub value: T,
}

/// A row that applies while the input is `> floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorBracket<T> {
    pub floor: Yen,
    pub value: T,
}

/// First row (ascending) whose ceiling is not exceeded, else `fallback`.
fn lookup_ceiling<T: Copy>(table: &[CeilingBracket<T>], input: Yen, fallback: T) -> T {
    table
        .iter()
        .find(|bracket| input <= bracket.ceiling)
        .map(|bracket| bracket.value)
        .unwrap_or(fallback)
}

/// First row (descending) whose floor is exceeded, else `fallback`.
fn lookup_floor<T: Copy>(table: &[FloorBracket<T>], input: Sen, fallback: T) -> T {
    table
        .iter()
        .find(|bracket| input > bracket.floor.to_sen())
        .map(|bracket| bracket.value)
        .unwrap_or(fallback)
}

const fn ceiling<T>(ceiling: i64, value: T) -> CeilingBracket<T> {
    CeilingBracket {
        ceiling: Yen::new(ceiling),
        value,
    }
}

const fn floor<T>(floor: i64, value: T) -> FloorBracket<T> {
    FloorBracket {
        floor: Yen::new(floor),
        value,
    }
}

const fn linear(bps: u32, offset: i64) -> Formula {
    Formula::Linear {
        rate: Rate::from_bps(bps),
        offset: Yen::new(offset),
    }
}

// =============================================================================
// Employment Income Deduction
// =============================================================================

/// Employment income deduction by gross income.
pub const EMPLOYMENT_DEDUCTION_TABLE: [CeilingBracket<Formula>; 5] = [
    ceiling(1_625_000, Formula::Flat(Yen::new(550_000))),
    ceiling(1_800_000, linear(4000, -100_000)),
    ceiling(3_600_000, linear(3000, 80_000)),
    ceiling(6_600_000, linear(2000, 440_000)),
    ceiling(8_500_000, linear(1000, 1_100_000)),
];

/// Applies above the last employment-deduction ceiling.
pub const EMPLOYMENT_DEDUCTION_CAP: Formula = Formula::Flat(Yen::new(1_950_000));

/// Statutory employment income deduction for a gross annual income.
///
/// Not rounded: `1,799,999 × 0.4 − 100,000` is 619,999.60.
///
/// ## Example
/// ```rust
/// use furusato_core::brackets::employment_income_deduction;
/// use furusato_core::money::{Sen, Yen};
///
/// // 5,000,000 × 0.2 + 440,000
/// let deduction = employment_income_deduction(Yen::new(5_000_000));
/// assert_eq!(deduction, Yen::new(1_440_000).to_sen());
///
/// let deduction = employment_income_deduction(Yen::new(1_799_999));
/// assert_eq!(deduction, Sen::new(61_999_960));
/// ```
pub fn employment_income_deduction(annual_income: Yen) -> Sen {
    lookup_ceiling(
        &EMPLOYMENT_DEDUCTION_TABLE,
        annual_income,
        EMPLOYMENT_DEDUCTION_CAP,
    )
    .apply(annual_income)
}

// =============================================================================
// Basic Deduction
// =============================================================================

/// Basic deduction, tapering off for very high incomes.
pub const BASIC_DEDUCTION_TABLE: [CeilingBracket<Yen>; 3] = [
    ceiling(24_000_000, Yen::new(480_000)),
    ceiling(24_500_000, Yen::new(320_000)),
    ceiling(25_000_000, Yen::new(160_000)),
];

/// Basic deduction for a gross annual income. Zero above 25,000,000.
pub fn basic_deduction(annual_income: Yen) -> Yen {
    lookup_ceiling(&BASIC_DEDUCTION_TABLE, annual_income, Yen::zero())
}

// =============================================================================
// Progressive Income Tax Rate
// =============================================================================

/// Marginal income-tax rate by taxable income, highest bracket first.
pub const INCOME_TAX_RATE_TABLE: [FloorBracket<Rate>; 6] = [
    floor(40_000_000, Rate::from_bps(4500)),
    floor(18_000_000, Rate::from_bps(4000)),
    floor(9_000_000, Rate::from_bps(3300)),
    floor(6_950_000, Rate::from_bps(2300)),
    floor(3_300_000, Rate::from_bps(2000)),
    floor(1_950_000, Rate::from_bps(1000)),
];

/// Rate for taxable income at or below the first breakpoint.
pub const LOWEST_INCOME_TAX_RATE: Rate = Rate::from_bps(500);

/// Marginal income-tax rate for a taxable income.
///
/// ## Example
/// ```rust
/// use furusato_core::brackets::marginal_income_tax_rate;
/// use furusato_core::money::{Sen, Yen};
/// use furusato_core::types::Rate;
///
/// let on_breakpoint = Yen::new(1_950_000).to_sen();
/// assert_eq!(marginal_income_tax_rate(on_breakpoint), Rate::from_bps(500));
/// assert_eq!(marginal_income_tax_rate(on_breakpoint + Sen::new(10)), Rate::from_bps(1000));
/// ```
pub fn marginal_income_tax_rate(taxable_income: Sen) -> Rate {
    lookup_floor(
        &INCOME_TAX_RATE_TABLE,
        taxable_income,
        LOWEST_INCOME_TAX_RATE,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Employment deduction in sen.
    fn employment(income: i64) -> i64 {
        employment_income_deduction(Yen::new(income)).amount()
    }

    fn rate(taxable: i64) -> u32 {
        marginal_income_tax_rate(Yen::new(taxable).to_sen()).bps()
    }

    #[test]
    fn test_employment_deduction_flat_floor() {
        assert_eq!(employment(0), 55_000_000);
        assert_eq!(employment(1_000_000), 55_000_000);
    }

    #[test]
    fn test_employment_deduction_boundaries() {
        // (boundary - 1, boundary, boundary + 1), in sen
        let cases: [(i64, [i64; 3]); 5] = [
            // 1,625,000: flat below and on, ×0.4 − 100,000 above
            (1_625_000, [55_000_000, 55_000_000, 55_000_040]),
            // 1,800,000: ×0.4 − 100,000 below and on, ×0.3 + 80,000 above
            (1_800_000, [61_999_960, 62_000_000, 62_000_030]),
            // 3,600,000: ×0.3 + 80,000 below and on, ×0.2 + 440,000 above
            (3_600_000, [115_999_970, 116_000_000, 116_000_020]),
            // 6,600,000: ×0.2 + 440,000 below and on, ×0.1 + 1,100,000 above
            (6_600_000, [175_999_980, 176_000_000, 176_000_010]),
            // 8,500,000: ×0.1 + 1,100,000 below and on, flat above
            (8_500_000, [194_999_990, 195_000_000, 195_000_000]),
        ];

        for (boundary, [below, on, above]) in cases {
            assert_eq!(employment(boundary - 1), below, "at {} - 1", boundary);
            assert_eq!(employment(boundary), on, "at {}", boundary);
            assert_eq!(employment(boundary + 1), above, "at {} + 1", boundary);
        }
    }

    #[test]
    fn test_employment_deduction_selects_row_by_ceiling() {
        // Values chosen so that neighbouring rows disagree.
        assert_eq!(employment(1_700_000), 58_000_000); // ×0.4 − 100,000
        assert_eq!(employment(2_000_000), 68_000_000); // ×0.3 + 80,000
        assert_eq!(employment(5_000_000), 144_000_000); // ×0.2 + 440,000
        assert_eq!(employment(7_000_000), 180_000_000); // ×0.1 + 1,100,000
        assert_eq!(employment(20_000_000), 195_000_000); // cap
    }

    #[test]
    fn test_employment_deduction_is_monotonic() {
        let mut previous = employment(0);
        for income in (0..=10_000_000).step_by(12_345) {
            let current = employment(income);
            assert!(current >= previous, "decreased at {}", income);
            previous = current;
        }
    }

    #[test]
    fn test_basic_deduction_tiers() {
        assert_eq!(basic_deduction(Yen::new(0)), Yen::new(480_000));
        assert_eq!(basic_deduction(Yen::new(24_000_000)), Yen::new(480_000));
        assert_eq!(basic_deduction(Yen::new(24_000_001)), Yen::new(320_000));
        assert_eq!(basic_deduction(Yen::new(24_500_000)), Yen::new(320_000));
        assert_eq!(basic_deduction(Yen::new(24_500_001)), Yen::new(160_000));
        assert_eq!(basic_deduction(Yen::new(25_000_000)), Yen::new(160_000));
        assert_eq!(basic_deduction(Yen::new(25_000_001)), Yen::zero());
    }

    #[test]
    fn test_tax_rate_boundaries() {
        // (boundary, rate at boundary - 1 and at boundary, rate at boundary + 1)
        let cases: [(i64, u32, u32); 6] = [
            (1_950_000, 500, 1000),
            (3_300_000, 1000, 2000),
            (6_950_000, 2000, 2300),
            (9_000_000, 2300, 3300),
            (18_000_000, 3300, 4000),
            (40_000_000, 4000, 4500),
        ];

        for (boundary, lower, upper) in cases {
            assert_eq!(rate(boundary - 1), lower, "at {} - 1", boundary);
            assert_eq!(rate(boundary), lower, "at {}", boundary);
            assert_eq!(rate(boundary + 1), upper, "at {} + 1", boundary);
        }
    }

    #[test]
    fn test_tax_rate_uses_fractional_taxable_income() {
        // 1,950,000.10 is above the breakpoint even though its yen floor is not.
        let just_above = Yen::new(1_950_000).to_sen() + Sen::new(10);
        assert_eq!(marginal_income_tax_rate(just_above), Rate::from_bps(1000));
        assert_eq!(
            marginal_income_tax_rate(Yen::new(3_300_000).to_sen() + Sen::new(1)),
            Rate::from_bps(2000)
        );
    }

    #[test]
    fn test_tax_rate_defaults_to_lowest() {
        assert_eq!(rate(0), 500);
        assert_eq!(rate(1), 500);
        assert_eq!(marginal_income_tax_rate(Sen::new(i64::MAX)).bps(), 4500);
    }

    #[test]
    fn test_tax_rate_table_strictly_increasing() {
        // Descending floors must carry strictly descending rates.
        for pair in INCOME_TAX_RATE_TABLE.windows(2) {
            assert!(pair[0].floor > pair[1].floor);
            assert!(pair[0].value > pair[1].value);
        }
        assert!(INCOME_TAX_RATE_TABLE[5].value > LOWEST_INCOME_TAX_RATE);
    }
}
