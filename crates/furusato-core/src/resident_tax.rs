//! # Resident Tax
//!
//! Income-levy part of resident tax and the mortgage credit against it.

use crate::money::{Sen, Yen};
use crate::types::Rate;

/// Flat resident-tax rate on taxable income.
pub const RESIDENT_TAX_RATE: Rate = Rate::from_bps(1000);

/// Resident tax before any credit: `taxable × 0.10`, not rounded.
#[inline]
pub fn resident_tax_on_income(taxable_income: Sen) -> Sen {
    taxable_income.scale_bps(RESIDENT_TAX_RATE)
}

/// Resident tax after the mortgage credit, never below zero.
///
/// ## Example
/// ```rust
/// use furusato_core::money::{Sen, Yen};
/// use furusato_core::resident_tax::adjusted_resident_tax;
///
/// let taxable = Yen::new(2_330_000).to_sen();
/// assert_eq!(adjusted_resident_tax(taxable, Yen::zero()), Yen::new(233_000).to_sen());
/// assert_eq!(adjusted_resident_tax(taxable, Yen::new(33_000)), Yen::new(200_000).to_sen());
/// assert_eq!(adjusted_resident_tax(taxable, Yen::new(500_000)), Sen::zero());
/// ```
pub fn adjusted_resident_tax(taxable_income: Sen, mortgage_deduction: Yen) -> Sen {
    (resident_tax_on_income(taxable_income) - mortgage_deduction.to_sen()).clamp_non_negative()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxable(yen: i64) -> Sen {
        Yen::new(yen).to_sen()
    }

    #[test]
    fn test_resident_tax_is_exact() {
        assert_eq!(resident_tax_on_income(Sen::zero()), Sen::zero());
        // 10% of 9 yen is 0.90, not zero
        assert_eq!(resident_tax_on_income(taxable(9)), Sen::new(90));
        assert_eq!(resident_tax_on_income(taxable(1_234_567)), Sen::new(12_345_670));
        // Fractional taxable income: 10% of 2,329,948.40
        assert_eq!(resident_tax_on_income(Sen::new(232_994_840)), Sen::new(23_299_484));
    }

    #[test]
    fn test_mortgage_credit_exactly_consumes_tax() {
        assert_eq!(
            adjusted_resident_tax(taxable(1_000_000), Yen::new(100_000)),
            Sen::zero()
        );
        assert_eq!(
            adjusted_resident_tax(taxable(1_000_000), Yen::new(99_999)),
            taxable(1)
        );
        // 5,662.50 of tax against a 5,662-yen credit leaves 0.50
        assert_eq!(
            adjusted_resident_tax(taxable(56_625), Yen::new(5_662)),
            Sen::new(50)
        );
    }
}
