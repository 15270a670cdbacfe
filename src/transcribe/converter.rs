/// Currency amount to English words
///
/// This module implements the transcription pipeline:
/// sanitize the raw amount, then branch by digit count into the unit,
/// tens, hundreds or scale-word strategies, and finally normalize
/// whitespace. The transcription works on the digit string itself, so
/// amounts are not limited to machine-integer ranges.
use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ConvertError, Result};
use crate::transcribe::chunker::break_to_chunks;
use crate::transcribe::tables::{scale_word, tens_word, unit_word, SCALES};

lazy_static! {
    /// Thousands separators and layout whitespace, removed before any
    /// other processing. Matches the characters, not the grouping.
    static ref SEPARATOR_REGEX: Regex = Regex::new(r"[\s,]").unwrap();
}

/// Outcome of input sanitation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sanitized {
    /// Empty, non-numeric or all-zero input: the whole pipeline
    /// short-circuits to the word "zero".
    Zero,
    /// A canonical digit string (no separators, no leading zeros) plus the
    /// currency symbol stripped from the head, if there was one.
    Amount {
        digits: String,
        symbol: Option<char>,
    },
}

/// A completed conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The spoken-word form, trimmed and single-spaced.
    pub words: String,
    /// The currency symbol found at the head of the input, if any.
    pub symbol: Option<char>,
}

/// Clean a raw amount string.
///
/// Removes whitespace and commas, then strips at most one non-digit
/// character from the head as a currency symbol. Anything that does not
/// leave a positive digit string (empty input, stray non-digits, all
/// zeros) collapses to [`Sanitized::Zero`]. Leading zeros are trimmed so
/// the scale words later line up with the value rather than the padding.
pub fn sanitize(raw: &str) -> Sanitized {
    let cleaned = SEPARATOR_REGEX.replace_all(raw, "");

    let (symbol, digits) = match cleaned.chars().next() {
        Some(first) if !first.is_ascii_digit() => {
            (Some(first), &cleaned[first.len_utf8()..])
        }
        _ => (None, cleaned.as_ref()),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Sanitized::Zero;
    }

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return Sanitized::Zero;
    }

    Sanitized::Amount {
        digits: trimmed.to_string(),
        symbol,
    }
}

/// Direct unit-table lookup for a 1-2 digit string. Present only for
/// values 0-19; callers fall through to the tens logic on `None`.
fn to_dollar(digits: &str) -> Option<&'static str> {
    digits.parse::<usize>().ok().and_then(unit_word)
}

/// Transcribe a value 0-99 given as a 1-2 digit string.
///
/// Values below 20 come straight from the unit table; the rest compose a
/// tens word with an optional unit word ("forty two", "forty").
fn to_tens(digits: &str) -> String {
    if let Some(unit) = to_dollar(digits) {
        return unit.to_string();
    }

    let value = digits.parse::<usize>().unwrap_or(0);
    let tens = tens_word(value / 10).unwrap_or_default();
    match value % 10 {
        0 => tens.to_string(),
        ones => format!(
            "{} {}",
            tens,
            unit_word(ones).unwrap_or_default()
        ),
    }
}

/// Transcribe a 1-3 digit chunk, leading zeros permitted.
///
/// A zero chunk contributes nothing: "000" inside a larger number must
/// vanish rather than emit "zero". Values up to 99 delegate to the tens
/// logic on their canonical form (so "099" reads as "ninety nine").
fn to_hundred(digits: &str) -> String {
    let value = digits.parse::<usize>().unwrap_or(0);

    if value == 0 {
        return String::new();
    }
    if value <= 99 {
        return to_tens(&value.to_string());
    }

    let hundreds = unit_word(value / 100).unwrap_or_default();
    let remainder = value % 100;
    if remainder == 0 {
        format!("{} {}", hundreds, SCALES[0])
    } else {
        format!(
            "{} {} {}",
            hundreds,
            SCALES[0],
            to_tens(&remainder.to_string())
        )
    }
}

/// Assemble the words for a digit string of length >= 4.
///
/// Every chunk, including the leading one, goes through the general 1-3
/// digit transcription; a chunk of zeros suppresses its scale word as
/// well as its phrase, so "1000000" reads "one million". Inputs with more
/// chunks than the scale table has words fail with
/// [`ConvertError::UnsupportedMagnitude`] instead of emitting an
/// undefined token.
fn to_xlion(digits: &str) -> Result<String> {
    let chunks = break_to_chunks(digits);
    if chunks.len() > SCALES.len() {
        return Err(ConvertError::UnsupportedMagnitude(digits.len()));
    }

    let phrases: Vec<String> = chunks.iter().map(|chunk| to_hundred(chunk)).collect();

    let mut parts: Vec<&str> = vec![phrases[0].as_str()];
    for index in 1..chunks.len() {
        // The scale word emitted before a chunk names the magnitude of
        // the previous one, so a zero group drops its scale word along
        // with its phrase
        if !phrases[index - 1].is_empty() {
            parts.push(scale_word(chunks.len() - index).unwrap_or_default());
        }
        if !phrases[index].is_empty() {
            parts.push(phrases[index].as_str());
        }
    }

    Ok(parts.join(" "))
}

/// Convert a raw currency string, keeping the extracted symbol.
pub fn convert_amount(raw: &str) -> Result<Conversion> {
    let (digits, symbol) = match sanitize(raw) {
        Sanitized::Zero => {
            return Ok(Conversion {
                words: "zero".to_string(),
                symbol: None,
            })
        }
        Sanitized::Amount { digits, symbol } => (digits, symbol),
    };

    let words = match digits.len() {
        1 => to_dollar(&digits).unwrap_or_default().to_string(),
        2 => to_tens(&digits),
        3 => to_hundred(&digits),
        _ => to_xlion(&digits)?,
    };

    Ok(Conversion {
        words: normalize_spaces(&words),
        symbol,
    })
}

/// Convert a raw currency string into its English spoken form.
///
/// Examples:
/// - "42" -> "forty two"
/// - "$1,234" -> "one thousand two hundred thirty four"
/// - "" / "0" / "$0" -> "zero"
pub fn currency_to_word(raw: &str) -> Result<String> {
    convert_amount(raw).map(|conversion| conversion.words)
}

/// Collapse internal whitespace runs and trim the ends.
fn normalize_spaces(words: &str) -> String {
    words.split_whitespace().collect::<Vec<_>>().join(" ")
}
