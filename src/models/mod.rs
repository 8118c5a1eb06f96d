pub mod requests;
pub mod responses;

pub use requests::{AmountInput, ConvertQuery, ConvertRequest};
pub use responses::{ConvertResponse, HealthResponse};
