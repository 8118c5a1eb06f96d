//! Currency amount → English words
//!
//! `1112.00` → "ONE THOUSAND ONE HUNDRED AND TWELVE DOLLARS"
//!
//! The converter is pure: every call is an independent function of its input,
//! and the word tables are `const` data, so a single converter can be shared
//! freely between threads.

pub mod amount;
pub mod fraction;
pub mod integer;
pub mod lexicon;
pub mod range;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

use crate::error::ConversionError;
pub use amount::Amount;
use fraction::render_fraction;
use integer::render_integer;
use lexicon::{AND, CENT, CENTS, DOLLAR, DOLLARS, ONES};

/// How many 3-digit magnitude groups an amount may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagnitudeCeiling {
    /// Units, thousands and millions: amounts below 1,000,000,000
    Billion,
    /// Adds billions: amounts below 1,000,000,000,000
    #[default]
    Trillion,
}

impl MagnitudeCeiling {
    pub fn group_count(self) -> u32 {
        match self {
            MagnitudeCeiling::Billion => 3,
            MagnitudeCeiling::Trillion => 4,
        }
    }

    /// Exclusive upper bound on whole units
    pub fn value(self) -> u64 {
        1000u64.pow(self.group_count())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MagnitudeCeiling::Billion => "billion",
            MagnitudeCeiling::Trillion => "trillion",
        }
    }
}

impl fmt::Display for MagnitudeCeiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MagnitudeCeiling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "billion" => Ok(MagnitudeCeiling::Billion),
            "trillion" => Ok(MagnitudeCeiling::Trillion),
            other => Err(format!(
                "unknown magnitude ceiling '{}' (expected 'billion' or 'trillion')",
                other
            )),
        }
    }
}

/// Converts amounts to their written-out form
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyTextConverter {
    ceiling: MagnitudeCeiling,
}

impl CurrencyTextConverter {
    pub fn new(ceiling: MagnitudeCeiling) -> Self {
        Self { ceiling }
    }

    pub fn ceiling(&self) -> MagnitudeCeiling {
        self.ceiling
    }

    /// Convert an amount to words
    ///
    /// The amount is rounded to two decimal places before it is spelled out.
    /// Both the amount as given and the rounded amount must lie in
    /// `0 <= amount < ceiling`, otherwise [`ConversionError::OutOfRange`] is
    /// returned and no text is produced.
    pub fn convert(&self, amount: Decimal) -> Result<String, ConversionError> {
        range::validate(amount, self.ceiling)?;

        let rounded = amount.round_dp(2);
        range::validate(rounded, self.ceiling)
            .map_err(|_| range::out_of_range(amount, self.ceiling))?;

        let split =
            Amount::from_decimal(rounded).ok_or_else(|| range::out_of_range(amount, self.ceiling))?;

        Ok(compose(split))
    }

    /// Convert a binary float amount to words
    ///
    /// NaN and infinities are out of range.
    pub fn convert_f64(&self, amount: f64) -> Result<String, ConversionError> {
        let value = Decimal::from_f64(amount).ok_or_else(|| range::out_of_range(amount, self.ceiling))?;
        self.convert(value)
    }
}

/// Convert an amount to words using the default (trillion) ceiling
pub fn convert_currency_to_text(amount: Decimal) -> Result<String, ConversionError> {
    CurrencyTextConverter::default().convert(amount)
}

fn compose(amount: Amount) -> String {
    if amount.is_zero() {
        return format!("{} {}", ONES[0], DOLLARS);
    }

    let whole = amount.whole_units();
    let hundredths = amount.hundredths();

    let dollars = format!(
        "{} {}",
        render_integer(whole),
        if whole == 1 { DOLLAR } else { DOLLARS }
    );

    if hundredths == 0 {
        return dollars;
    }

    let cents = format!(
        "{} {}",
        render_fraction(hundredths),
        if hundredths == 1 { CENT } else { CENTS }
    );

    if whole == 0 {
        return cents;
    }

    format!("{} {} {}", dollars, AND, cents)
}
