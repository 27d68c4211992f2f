//! # Money Module
//!
//! Provides the `Money` type for catalog prices and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer amounts                                          │
//! │    base 8100 + strap 2100 + colour 1100 = 11300, exactly               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are whole units of the shop currency. The storefront renders
//! them with a fixed `.00` suffix, see [`format_price`].
//!
//! ## Usage
//! ```rust
//! use sling_core::money::{format_price, Money};
//!
//! let total = Money::new(8100) + Money::new(2100);
//! assert_eq!(total.amount(), 10200);
//! assert_eq!(format_price(total, "₹"), "₹10,200.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A price or total in whole currency units.
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the arithmetic used everywhere else; catalog
///   validation keeps option prices non-negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Newtype serde**: serialized as a bare number for the frontend
///
/// ## Where Money is Used
/// ```text
/// StrapStyleOption.price ──┐
///                          ├──► total_price() ──► "₹11,300.00" in the UI
/// StrapColorOption.price ──┤
///                          │
/// base price (config) ─────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from a whole-unit amount.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(amount) => Some(Money(amount)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the plain grouped amount, without currency symbol.
///
/// ## Note
/// Use [`format_price`] when a currency symbol is needed.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a price the way the storefront shows it: `₹8,100.00`.
///
/// Thousands are grouped with commas and a literal `.00` is appended.
/// No locale handling.
pub fn format_price(price: Money, symbol: &str) -> String {
    let sign = if price.is_negative() { "-" } else { "" };
    format!(
        "{}{}{}.00",
        sign,
        symbol,
        group_thousands(price.amount().unsigned_abs())
    )
}

/// Badge text for an option surcharge, e.g. `+₹2,100.00`.
///
/// Free options get no badge.
pub fn surcharge_label(price: Money, symbol: &str) -> Option<String> {
    if price.is_positive() {
        Some(format!("+{}", format_price(price, symbol)))
    } else {
        None
    }
}

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

// =============================================================================
// Unit Tests
// =============================================================================
