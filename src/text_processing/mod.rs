pub mod amount_parsing;
