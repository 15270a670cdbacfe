pub mod chunker;
pub mod converter;
pub mod tables;

pub use chunker::break_to_chunks;
pub use converter::{convert_amount, currency_to_word, sanitize, Conversion, Sanitized};
