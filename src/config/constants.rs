/// Maximum allowed raw amount length for convert requests (in characters)
///
/// This limit helps prevent abuse and ensures reasonable response times.
/// Requests exceeding this limit will be rejected with an error.
pub const MAX_AMOUNT_LENGTH: usize = 256;

/// Maximum digit count the scale table can name
///
/// 23 chunks of 3 digits with a 3-digit leading chunk: anything longer has
/// no defined scale word and is rejected as an unsupported magnitude.
pub const MAX_SUPPORTED_DIGITS: usize = 69;

/// Default delay window for the interactive-mode debouncer, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Default HTTP server port
pub const DEFAULT_PORT: u16 = 3000;
