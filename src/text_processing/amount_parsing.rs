//! Parsing of user-entered amounts
//!
//! Accepts the forms people actually type into an amount field:
//! - "1112", "1112.00", "0.3", ".5"
//! - "1,112.00" (comma-grouped thousands)
//! - "$10.30", "  42 "
//! - "-5" (parsed so the range check can reject it)
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{AppError, Result};

lazy_static! {
    static ref AMOUNT_REGEX: Regex = Regex::new(
        r"^\s*(?P<sign>-)?\s*\$?\s*(?P<whole>\d{1,3}(?:,\d{3})+|\d+)?(?:\.(?P<fraction>\d+))?\s*$"
    )
    .unwrap();
}

/// Parse a user-entered amount into a decimal
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let caps = AMOUNT_REGEX
        .captures(input)
        .ok_or_else(|| invalid(input))?;

    let whole = caps.name("whole").map(|m| m.as_str().replace(',', ""));
    let fraction = caps.name("fraction").map(|m| m.as_str());

    if whole.is_none() && fraction.is_none() {
        return Err(invalid(input));
    }

    let mut normalized = String::new();
    if caps.name("sign").is_some() {
        normalized.push('-');
    }
    normalized.push_str(whole.as_deref().unwrap_or("0"));
    if let Some(fraction) = fraction {
        normalized.push('.');
        normalized.push_str(fraction);
    }

    Decimal::from_str(&normalized).map_err(|_| invalid(input))
}

fn invalid(input: &str) -> AppError {
    AppError::InvalidAmount(format!("'{}' is not a valid amount", input.trim()))
}
