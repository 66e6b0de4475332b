//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Micros?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    250 × 1.4 × 1.2 = 419.99999999999994  ❌ WRONG!                      │
//! │                                                                         │
//! │  A quote breakdown whose lines don't add up to the total is a bug      │
//! │  the customer can see with a pocket calculator.                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Micro-Dollars + Basis-Point Multipliers          │
//! │    250_000_000µ × 14000bps = 350_000_000µ                              │
//! │    350_000_000µ × 12000bps = 420_000_000µ                              │
//! │    Every step rounds to a whole micro, so every sum is exact           │
//! │                                                                         │
//! │  Size pricing is area × rate; at $0.50 / sq in one micro is            │
//! │  0.000002 sq in, so any visible change in area changes the price.      │
//! │  Rounding to cents happens only when an amount is displayed.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checked Arithmetic
//! Every operation that can leave the `i64` range returns `Option`. The
//! engine turns `None` into a validation error naming the component.
//!
//! ## Usage
//! ```rust
//! use fenestra_core::money::Money;
//! use fenestra_core::types::Multiplier;
//!
//! let base = Money::from_dollars(250);
//!
//! // Compound a material multiplier onto the base
//! let wood = base.apply_multiplier(Multiplier::from_bps(14_000)).unwrap();
//! assert_eq!(wood.cents(), 35_000);
//!
//! // Quantity is always an integer multiple
//! assert_eq!(wood.multiply_quantity(2).unwrap().cents(), 70_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::{AreaRate, Multiplier};

/// Micro-dollars in one cent.
pub const MICROS_PER_CENT: i64 = 10_000;

/// Micro-dollars in one dollar.
pub const MICROS_PER_DOLLAR: i64 = 1_000_000;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in millionths of a dollar ("micros").
///
/// ## Design Decisions
/// - **i64 (signed)**: surcharges are differences and may be negative when a
///   multiplier is below 1.0
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as a plain integer** of micros
/// - **Displayed in cents**, rounded half away from zero
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  KindEntry.base_price ──► × category ──► × material ──► × glass        │
/// │                                                           │             │
/// │  SizePricing × area ──────────────────────────────► size_price         │
/// │                                                           │             │
/// │  FeatureEntry.price ─────────────────────────────► feature_charges     │
/// │                                                           ▼             │
/// │                                   single_unit_price × qty = total      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Largest catalog price, in cents, that converts to micros.
    pub const MAX_CENTS: i64 = i64::MAX / MICROS_PER_CENT;

    /// Creates a Money value from micros.
    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Money(micros)
    }

    /// Creates a Money value from whole dollars.
    ///
    /// Saturates at the `i64` range; meant for literal amounts.
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars.saturating_mul(MICROS_PER_DOLLAR))
    }

    /// Creates a Money value from cents, or `None` beyond [`Money::MAX_CENTS`].
    ///
    /// ## Example
    /// ```rust
    /// use fenestra_core::money::Money;
    ///
    /// let price = Money::checked_from_cents(1099).unwrap(); // $10.99
    /// assert_eq!(price.micros(), 10_990_000);
    /// assert!(Money::checked_from_cents(i64::MAX).is_none());
    /// ```
    #[inline]
    pub fn checked_from_cents(cents: i64) -> Option<Self> {
        cents.checked_mul(MICROS_PER_CENT).map(Money::from_micros)
    }

    /// Returns the exact value in micros.
    #[inline]
    pub const fn micros(&self) -> i64 {
        self.0
    }

    /// Returns the value rounded to whole cents, half away from zero.
    pub fn cents(&self) -> i64 {
        // Dividing by 10 000 only shrinks the magnitude, so the cast is exact.
        round_div(self.0 as i128, MICROS_PER_CENT as i128) as i64
    }

    /// Returns the whole-dollar portion of the rounded amount.
    #[inline]
    pub fn dollars(&self) -> i64 {
        self.cents() / 100
    }

    /// Returns the cents portion of the rounded amount (always 0-99).
    #[inline]
    pub fn cents_part(&self) -> i64 {
        (self.cents() % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the amount is negative once rounded to cents.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.cents() < 0
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts an amount, or `None` on overflow.
    #[inline]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Sums amounts, or `None` if any partial sum overflows.
    pub fn checked_sum<I>(amounts: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }

    /// Multiplies by a basis-point multiplier, rounding to the nearest micro.
    ///
    /// ## Rounding
    /// Half a micro rounds away from zero. A multiplier of exactly 1.0
    /// (10 000 bps) is always exact.
    ///
    /// ## Example
    /// ```rust
    /// use fenestra_core::money::Money;
    /// use fenestra_core::types::Multiplier;
    ///
    /// let door = Money::from_dollars(800);
    /// let adjusted = door.apply_multiplier(Multiplier::from_bps(12_000)); // ×1.2
    /// assert_eq!(adjusted, Some(Money::from_dollars(960)));
    /// ```
    pub fn apply_multiplier(&self, multiplier: Multiplier) -> Option<Money> {
        let scaled = self.0 as i128 * multiplier.bps() as i128;
        i64::try_from(round_div(scaled, Multiplier::ONE_BPS as i128))
            .ok()
            .map(Money)
    }

    /// Prices an area at the given rate, rounding to the nearest micro.
    ///
    /// Returns `None` if the area is not finite or the product leaves the
    /// `i64` range.
    ///
    /// ## Example
    /// ```rust
    /// use fenestra_core::money::Money;
    /// use fenestra_core::types::AreaRate;
    ///
    /// // 2160 sq in at $0.50 / sq in
    /// let size = Money::for_area(2160.0, AreaRate::from_micros(500_000));
    /// assert_eq!(size, Some(Money::from_dollars(1080)));
    /// ```
    pub fn for_area(area: f64, rate: AreaRate) -> Option<Money> {
        let micros = (area * rate.micros() as f64).round();
        // i64::MAX as f64 is exactly 2^63, the first value out of range
        if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Money::from_micros(micros as i64))
    }

    /// Multiplies money by a quantity, or `None` on overflow.
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(qty)).map(Money)
    }
}

/// Integer division rounding half away from zero.
fn round_div(numerator: i128, denominator: i128) -> i128 {
    let half = denominator / 2;
    if numerator >= 0 {
        (numerator + half) / denominator
    } else {
        -((-numerator + half) / denominator)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a plain `$1234.50` format.
///
/// ## Note
/// This is for logs and debugging. Quote lines use
/// [`crate::format::format_currency`], which adds digit grouping.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
