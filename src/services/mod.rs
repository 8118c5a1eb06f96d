pub mod amount_text;
