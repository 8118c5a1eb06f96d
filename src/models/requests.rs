use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub amount: AmountInput,
}

/// An amount as sent by a client: either the text typed into a field or a
/// JSON number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Text(String),
    Number(f64),
}

#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    pub amount: String,
}
