use rust_decimal::Decimal;

use super::MagnitudeCeiling;
use crate::error::ConversionError;

/// Check that `0 <= amount < ceiling`
pub fn validate(amount: Decimal, ceiling: MagnitudeCeiling) -> Result<(), ConversionError> {
    if amount < Decimal::ZERO || amount >= Decimal::from(ceiling.value()) {
        return Err(out_of_range(amount, ceiling));
    }
    Ok(())
}

pub(crate) fn out_of_range(amount: impl ToString, ceiling: MagnitudeCeiling) -> ConversionError {
    ConversionError::OutOfRange {
        amount: amount.to_string(),
        ceiling: ceiling.value(),
    }
}
