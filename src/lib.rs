// Library modules, shared by the binary and integration tests
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod logging;
pub mod models;
pub mod server;
pub mod services;
pub mod text_processing;
pub mod utils;

pub use converter::{convert_currency_to_text, CurrencyTextConverter, MagnitudeCeiling};
pub use error::{AppError, ConversionError};
