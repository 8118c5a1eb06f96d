use rust_decimal::Decimal;

use crate::converter::CurrencyTextConverter;
use crate::error::{AppError, Result};
use crate::text_processing::amount_parsing::parse_amount;

/// Converts amounts to words within an application-level limit
///
/// The converter accepts anything below its magnitude ceiling; this service
/// narrows that to `0 <= amount <= max_amount` before delegating.
#[derive(Debug, Clone)]
pub struct AmountTextService {
    converter: CurrencyTextConverter,
    max_amount: Decimal,
}

impl AmountTextService {
    pub fn new(converter: CurrencyTextConverter, max_amount: Decimal) -> Self {
        Self {
            converter,
            max_amount,
        }
    }

    pub fn converter(&self) -> CurrencyTextConverter {
        self.converter
    }

    pub fn max_amount(&self) -> Decimal {
        self.max_amount
    }

    /// Spell out an amount, rejecting anything outside the application limit
    pub fn text_for_amount(&self, amount: Decimal) -> Result<String> {
        if amount < Decimal::ZERO || amount > self.max_amount {
            tracing::debug!(
                amount = %amount,
                limit = %self.max_amount,
                "Amount outside application limit"
            );
            return Err(AppError::AmountOutsideLimit {
                amount,
                limit: self.max_amount,
            });
        }

        let text = self.converter.convert(amount)?;
        tracing::debug!(amount = %amount, words = text.split(' ').count(), "Converted amount");

        Ok(text)
    }

    /// Parse user input, then spell it out
    pub fn text_for_input(&self, input: &str) -> Result<(Decimal, String)> {
        let amount = parse_amount(input)?;
        let text = self.text_for_amount(amount)?;
        Ok((amount, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::MagnitudeCeiling;
    use rust_decimal_macros::dec;

    fn service() -> AmountTextService {
        AmountTextService::new(CurrencyTextConverter::default(), dec!(10000))
    }

    #[test]
    fn test_within_limit() {
        assert_eq!(
            service().text_for_amount(dec!(9876.54)).unwrap(),
            "NINE THOUSAND EIGHT HUNDRED AND SEVENTY-SIX DOLLARS AND FIFTY-FOUR CENTS"
        );
    }

    #[test]
    fn test_limit_is_inclusive() {
        assert_eq!(
            service().text_for_amount(dec!(10000)).unwrap(),
            "TEN THOUSAND DOLLARS"
        );
    }

    #[test]
    fn test_above_limit() {
        let err = service().text_for_amount(dec!(10000.01)).unwrap_err();
        assert!(matches!(
            err,
            AppError::AmountOutsideLimit { amount, limit }
                if amount == dec!(10000.01) && limit == dec!(10000)
        ));
    }

    #[test]
    fn test_negative() {
        let err = service().text_for_amount(dec!(-1)).unwrap_err();
        assert!(matches!(err, AppError::AmountOutsideLimit { .. }));
    }

    #[test]
    fn test_converter_ceiling_still_applies() {
        // A limit above the converter's ceiling cannot widen what it accepts
        let service = AmountTextService::new(
            CurrencyTextConverter::new(MagnitudeCeiling::Billion),
            dec!(5000000000),
        );
        let err = service.text_for_amount(dec!(1000000000)).unwrap_err();
        assert!(matches!(err, AppError::Conversion(_)));
    }

    #[test]
    fn test_text_for_input() {
        let (amount, text) = service().text_for_input("$1,012").unwrap();
        assert_eq!(amount, dec!(1012));
        assert_eq!(text, "ONE THOUSAND AND TWELVE DOLLARS");
    }

    #[test]
    fn test_text_for_invalid_input() {
        let err = service().text_for_input("twelve").unwrap_err();
        assert!(matches!(err, AppError::InvalidAmount(_)));
    }
}
