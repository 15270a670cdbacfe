/// Breaks a digit string into 3-digit groups, most significant first.
///
/// The first group takes `length mod 3` digits and is omitted when that is
/// zero, so every group after the first is exactly 3 digits.
/// "1234567" -> ["1", "234", "567"].
///
/// Input must be non-empty and consist only of ASCII digits; the sanitizer
/// guarantees this.
pub fn break_to_chunks(digits: &str) -> Vec<&str> {
    debug_assert!(!digits.is_empty());
    debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));

    if digits.len() <= 3 {
        return vec![digits];
    }

    let head_len = digits.len() % 3;
    let (head, tail) = digits.split_at(head_len);

    let mut chunks = Vec::with_capacity(tail.len() / 3 + 1);
    if !head.is_empty() {
        chunks.push(head);
    }
    for start in (0..tail.len()).step_by(3) {
        chunks.push(&tail[start..start + 3]);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_are_single_chunks() {
        assert_eq!(break_to_chunks("7"), vec!["7"]);
        assert_eq!(break_to_chunks("42"), vec!["42"]);
        assert_eq!(break_to_chunks("999"), vec!["999"]);
    }

    #[test]
    fn test_million_example() {
        assert_eq!(break_to_chunks("1234567"), vec!["1", "234", "567"]);
    }

    #[test]
    fn test_exact_multiple_of_three_has_no_head() {
        assert_eq!(break_to_chunks("123456"), vec!["123", "456"]);
        assert_eq!(break_to_chunks("123456789"), vec!["123", "456", "789"]);
    }

    #[test]
    fn test_two_digit_head() {
        assert_eq!(break_to_chunks("12345"), vec!["12", "345"]);
    }

    #[test]
    fn test_chunking_preserves_digit_count() {
        for digits in ["1000", "12345", "123456", "98765432109876543210"] {
            let total: usize = break_to_chunks(digits).iter().map(|c| c.len()).sum();
            assert_eq!(total, digits.len());
        }
    }

    #[test]
    fn test_all_chunks_after_first_are_three_digits() {
        let chunks = break_to_chunks("98765432109876543210");
        for chunk in &chunks[1..] {
            assert_eq!(chunk.len(), 3);
        }
    }
}
