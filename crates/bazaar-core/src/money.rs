//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The backend serves decimal prices; naive float math gives:             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 15% coupon on $10.99 computed in floats drifts by fractions of      │
//! │  a cent, and the drift is visible once the same price is computed      │
//! │  in two places (range filter + card display).                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Decimal prices are converted ONCE at the feed boundary.             │
//! │    Everything downstream is i64 cents arithmetic.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let sale = price.apply_percentage_discount(1500); // 15% off
//! assert_eq!(sale.cents(), 934);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: The price-slider lower bound may legitimately go
///   negative (observed minimum minus the padding), and fixed discounts
///   produce intermediate negatives before clamping.
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units (dollars).
    ///
    /// Used for round figures like the `[0, 1000]` fallback price bounds.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps the value to be non-negative.
    ///
    /// Effective prices are clamped after discount math: a fixed coupon
    /// larger than the list price charges zero, never a refund.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// let over_discounted = Money::from_cents(-350);
    /// assert_eq!(over_discounted.clamp_non_negative().cents(), 0);
    /// ```
    #[inline]
    pub const fn clamp_non_negative(&self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            *self
        }
    }

    /// Rounds down to the nearest whole major unit.
    ///
    /// `$10.99 -> $10.00`, `-$0.50 -> -$1.00`. Matches `Math.floor` on the
    /// major-unit value, which is what the price-slider lower bound uses.
    #[inline]
    pub const fn floor_to_major(&self) -> Self {
        Money(self.0.div_euclid(100) * 100)
    }

    /// Rounds up to the nearest whole major unit.
    ///
    /// `$10.01 -> $11.00`. Matches `Math.ceil` on the major-unit value,
    /// which is what the price-slider upper bound uses.
    #[inline]
    pub const fn ceil_to_major(&self) -> Self {
        let floored = self.0.div_euclid(100) * 100;
        if floored == self.0 {
            Money(self.0)
        } else {
            Money(floored + 100)
        }
    }

    /// Multiplies money by a quantity (cart line totals).
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1500 = 15%)
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(amount * bps + 5000) / 10000`
    /// is the discount amount; i128 intermediates prevent overflow.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// let regular = Money::from_cents(10000); // $100.00
    /// let sale = regular.apply_percentage_discount(1000); // 10% off
    /// assert_eq!(sale.cents(), 9000); // $90.00
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and badge labels. The SPA handles localized
/// price formatting for primary display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Money::from_major(1000).cents(), 100_000);
        assert_eq!(Money::from_major(-1).cents(), -100);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(Money::from_cents(-350).clamp_non_negative().cents(), 0);
        assert_eq!(Money::from_cents(0).clamp_non_negative().cents(), 0);
        assert_eq!(Money::from_cents(350).clamp_non_negative().cents(), 350);
    }

    #[test]
    fn test_floor_ceil_to_major() {
        assert_eq!(Money::from_cents(1099).floor_to_major().cents(), 1000);
        assert_eq!(Money::from_cents(1099).ceil_to_major().cents(), 1100);
        assert_eq!(Money::from_cents(1000).floor_to_major().cents(), 1000);
        assert_eq!(Money::from_cents(1000).ceil_to_major().cents(), 1000);
        // Negative values floor away from zero, like Math.floor
        assert_eq!(Money::from_cents(-50).floor_to_major().cents(), -100);
        assert_eq!(Money::from_cents(-50).ceil_to_major().cents(), 0);
    }

    #[test]
    fn test_percentage_discount() {
        let regular = Money::from_cents(10000); // $100.00
        assert_eq!(regular.apply_percentage_discount(1000).cents(), 9000);

        // 15% of $10.99 = $1.65 (164.85 rounds half-up to 165)
        let price = Money::from_cents(1099);
        assert_eq!(price.apply_percentage_discount(1500).cents(), 934);
    }

    #[test]
    fn test_percentage_discount_full_and_zero() {
        let price = Money::from_cents(1234);
        assert_eq!(price.apply_percentage_discount(10000).cents(), 0);
        assert_eq!(price.apply_percentage_discount(0).cents(), 1234);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    }
}
