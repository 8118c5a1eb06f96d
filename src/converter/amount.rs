use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// An amount split into whole units and hundredths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    whole_units: u64,
    hundredths: u8,
}

impl Amount {
    pub fn new(whole_units: u64, hundredths: u8) -> Option<Self> {
        if hundredths > 99 {
            return None;
        }
        Some(Self {
            whole_units,
            hundredths,
        })
    }

    /// Split a non-negative value into whole units and hundredths
    ///
    /// The value is rounded to two decimal places first (midpoint to even),
    /// so 0.3 becomes 30 hundredths and 10.305 becomes 10 units, 30 hundredths.
    /// Returns `None` for negative values or whole parts that do not fit a `u64`.
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return None;
        }

        let rounded = value.round_dp(2);
        let whole_units = rounded.trunc().to_u64()?;
        let hundredths = (rounded.fract() * Decimal::ONE_HUNDRED).to_u8()?;

        Self::new(whole_units, hundredths)
    }

    pub fn whole_units(&self) -> u64 {
        self.whole_units
    }

    pub fn hundredths(&self) -> u8 {
        self.hundredths
    }

    pub fn is_zero(&self) -> bool {
        self.whole_units == 0 && self.hundredths == 0
    }
}
