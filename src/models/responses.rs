use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub amount: Decimal,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub magnitude_ceiling: String,
    pub max_amount: Decimal,
}
