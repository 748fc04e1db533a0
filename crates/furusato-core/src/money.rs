//! # Money Module
//!
//! Provides the `Yen` type for handling monetary values safely, and `Sen`
//! (hundredths of a yen) for the intermediate stages that are not whole yen.
//!
//! ## Why Integer Yen?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    233000 × 0.2 / (1 − (0.1 × 1.021 + 0.1))  = 58403.308...            │
//! │    ...but only if every intermediate step rounds the same way          │
//! │                                                                         │
//! │  A limit that flips by one yen across platforms is a support ticket.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Yen/Sen + Basis Points                           │
//! │    Deduction and resident-tax products are carried exactly in sen.     │
//! │    Whole-yen floors happen only at named steps, always downwards.      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use furusato_core::money::Yen;
//! use furusato_core::types::Rate;
//!
//! let income = Yen::new(5_000_000);
//!
//! // 15% of income, floored to whole yen
//! let premium = income.scale_bps(Rate::from_bps(1500));
//! assert_eq!(premium.amount(), 750_000);
//!
//! // Fractional intermediates stay exact in sen: 1,625,001 × 0.4 = 650,000.40
//! let share = Yen::new(1_625_001).to_sen().scale_bps(Rate::from_bps(4000));
//! assert_eq!(share.amount(), 65_000_040);
//!
//! // NEVER do this:
//! // let bad = Yen::from_float(5e6); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use ts_rs::TS;

use crate::types::Rate;

// =============================================================================
// Yen Type
// =============================================================================

/// A monetary value in whole yen (the smallest currency unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate differences (income minus deductions)
///   may go below zero before they are clamped
/// - **Single field tuple struct**: serializes as a bare JSON number
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Yen(#[ts(type = "number")] i64);

impl Yen {
    /// Creates a value from whole yen.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Yen(amount)
    }

    /// Returns the value in whole yen.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero yen.
    #[inline]
    pub const fn zero() -> Self {
        Yen(0)
    }

    /// Clamps the value at zero: `max(0, self)`.
    ///
    /// ## Example
    /// ```rust
    /// use furusato_core::money::Yen;
    ///
    /// assert_eq!(Yen::new(-2000).clamp_non_negative(), Yen::zero());
    /// assert_eq!(Yen::new(2000).clamp_non_negative(), Yen::new(2000));
    /// ```
    #[inline]
    pub const fn clamp_non_negative(self) -> Self {
        if self.0 < 0 {
            Yen(0)
        } else {
            self
        }
    }

    /// Multiplies by a rate and floors the result to whole yen.
    ///
    /// ## Implementation
    /// `floor(amount × bps / 10000)`, computed in i128 so that large
    /// incomes cannot overflow. `div_euclid` keeps the floor direction
    /// correct for negative amounts too.
    ///
    /// ## Example
    /// ```rust
    /// use furusato_core::money::Yen;
    /// use furusato_core::types::Rate;
    ///
    /// // 1,625,001 × 0.4 = 650,000.4 → 650,000
    /// let scaled = Yen::new(1_625_001).scale_bps(Rate::from_bps(4000));
    /// assert_eq!(scaled.amount(), 650_000);
    /// ```
    pub fn scale_bps(&self, rate: Rate) -> Yen {
        let scaled = (self.0 as i128 * rate.bps() as i128).div_euclid(Rate::SCALE as i128);
        Yen::new(scaled as i64)
    }

    /// Floors the value to a multiple of `unit` (e.g. 1,000 yen).
    ///
    /// ## Example
    /// ```rust
    /// use furusato_core::money::Yen;
    ///
    /// assert_eq!(Yen::new(54_362).floor_to(1_000), Yen::new(54_000));
    /// assert_eq!(Yen::new(999).floor_to(1_000), Yen::zero());
    /// ```
    #[inline]
    pub const fn floor_to(&self, unit: i64) -> Yen {
        Yen(self.0.div_euclid(unit) * unit)
    }

    /// Divides into `parts` equal shares, flooring the remainder away.
    #[inline]
    pub const fn split_floor(&self, parts: i64) -> Yen {
        Yen(self.0.div_euclid(parts))
    }

    /// Overflow-checked addition.
    #[inline]
    pub const fn checked_add(self, other: Yen) -> Option<Yen> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Yen(sum)),
            None => None,
        }
    }

    /// The same amount in sen. Inputs are bounded by [`crate::MAX_AMOUNT`],
    /// far below the point where this could overflow.
    #[inline]
    pub const fn to_sen(self) -> Sen {
        Sen(self.0 * Sen::PER_YEN)
    }
}

// =============================================================================
// Sen Type
// =============================================================================

/// A monetary value in sen (hundredths of a yen).
///
/// Deduction brackets multiply income by whole-percent rates and resident
/// tax takes 10% of the result, so every such intermediate is an exact
/// multiple of 0.01 yen. Carrying them in sen keeps the arithmetic exact
/// until the limit solver floors to whole yen.
///
/// Serializes as a decimal string (`"5662.50"`) so no float ever carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, TS)]
#[serde(into = "String")]
#[ts(export)]
pub struct Sen(#[ts(type = "string")] i64);

impl Sen {
    /// Sen in one yen.
    pub const PER_YEN: i64 = 100;

    /// Creates a value from sen.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Sen(amount)
    }

    /// Returns the value in sen.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Sen(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Clamps the value at zero: `max(0, self)`.
    #[inline]
    pub const fn clamp_non_negative(self) -> Self {
        if self.0 < 0 {
            Sen(0)
        } else {
            self
        }
    }

    /// Multiplies by a rate, flooring to whole sen.
    ///
    /// Exact for every statutory rate in this crate: they are whole
    /// percents applied to amounts that are multiples of ten sen.
    ///
    /// ## Example
    /// ```rust
    /// use furusato_core::money::Sen;
    /// use furusato_core::types::Rate;
    ///
    /// // 10% of 56,625.00 = 5,662.50
    /// let tax = Sen::new(5_662_500).scale_bps(Rate::from_bps(1000));
    /// assert_eq!(tax, Sen::new(566_250));
    /// ```
    pub fn scale_bps(&self, rate: Rate) -> Sen {
        let scaled = (self.0 as i128 * rate.bps() as i128).div_euclid(Rate::SCALE as i128);
        Sen::new(scaled as i64)
    }

    /// Floors to whole yen.
    ///
    /// ## Example
    /// ```rust
    /// use furusato_core::money::{Sen, Yen};
    ///
    /// assert_eq!(Sen::new(566_250).floor_yen(), Yen::new(5_662));
    /// assert_eq!(Sen::new(-50).floor_yen(), Yen::new(-1));
    /// ```
    #[inline]
    pub const fn floor_yen(&self) -> Yen {
        Yen(self.0.div_euclid(Self::PER_YEN))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Displays with thousands separators, e.g. `¥1,440,000`.
impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}¥{}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Displays with thousands separators and two decimals, e.g. `¥5,662.50`.
impl fmt::Display for Sen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let per_yen = Self::PER_YEN as u64;
        write!(
            f,
            "{}¥{}.{:02}",
            sign,
            group_thousands(magnitude / per_yen),
            magnitude % per_yen
        )
    }
}

/// Plain decimal yen, e.g. `"5662.50"`.
impl From<Sen> for String {
    fn from(value: Sen) -> Self {
        let sign = if value.0 < 0 { "-" } else { "" };
        let magnitude = value.0.unsigned_abs();
        let per_yen = Sen::PER_YEN as u64;
        format!("{}{}.{:02}", sign, magnitude / per_yen, magnitude % per_yen)
    }
}

impl Add for Yen {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Yen(self.0 + other.0)
    }
}

impl Sub for Yen {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Yen(self.0 - other.0)
    }
}

/// Multiplication by a head count (dependents).
impl Mul<u32> for Yen {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Yen(self.0 * count as i64)
    }
}

impl Add for Sen {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Sen(self.0 + other.0)
    }
}

impl Sub for Sen {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Sen(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
