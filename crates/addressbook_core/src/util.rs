//! String predicates shared by model and parser code.
//!
//! # Responsibility
//! - Keep small, allocation-light string checks in one place.
//!
//! # Invariants
//! - Predicates never panic, whatever the input.

/// Returns whether `value` is a base-10 integer greater than zero.
///
/// Only ASCII digits are accepted: no sign, no surrounding whitespace.
/// Leading zeros are allowed (`"007"` is `7`). Values above
/// `MAX_UNSIGNED_INTEGER` are rejected.
pub fn is_non_zero_unsigned_integer(value: &str) -> bool {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    value
        .parse::<u32>()
        .is_ok_and(|number| number > 0 && number <= MAX_UNSIGNED_INTEGER)
}

/// Largest accepted value, the signed 32-bit range used for list positions.
pub const MAX_UNSIGNED_INTEGER: u32 = i32::MAX as u32;

/// Returns whether `sentence` contains `word` as a whole word, ignoring
/// ASCII case.
///
/// `word` must be a single non-blank word; blank or multi-word input never
/// matches.
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() || word.split_whitespace().nth(1).is_some() {
        return false;
    }

    sentence
        .split_whitespace()
        .any(|candidate| candidate.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::{contains_word_ignore_case, is_non_zero_unsigned_integer};

    #[test]
    fn non_zero_unsigned_integer_accepts_plain_digits() {
        assert!(is_non_zero_unsigned_integer("1"));
        assert!(is_non_zero_unsigned_integer("10"));
        assert!(is_non_zero_unsigned_integer("007"));
    }

    #[test]
    fn non_zero_unsigned_integer_rejects_signs_blanks_and_zero() {
        for value in ["", " ", "0", "000", "-1", "+1", " 2", "2 ", "1 0", "a", "1.5"] {
            assert!(
                !is_non_zero_unsigned_integer(value),
                "`{value}` should be rejected"
            );
        }
    }

    #[test]
    fn non_zero_unsigned_integer_caps_at_signed_32_bit_max() {
        assert!(is_non_zero_unsigned_integer("2147483647"));
        assert!(!is_non_zero_unsigned_integer("2147483648"));
        assert!(!is_non_zero_unsigned_integer("4294967296"));
        let too_big = format!("{}0", usize::MAX);
        assert!(!is_non_zero_unsigned_integer(&too_big));
    }

    #[test]
    fn contains_word_matches_whole_words_only() {
        assert!(contains_word_ignore_case("Benson Meier", "meier"));
        assert!(contains_word_ignore_case("  Benson   Meier ", "MEIER"));
        assert!(!contains_word_ignore_case("Benson Meierson", "Meier"));
    }

    #[test]
    fn contains_word_rejects_blank_and_multi_word_input() {
        assert!(!contains_word_ignore_case("Alice Pauline", "   "));
        assert!(!contains_word_ignore_case("Alice Pauline", "Alice Pauline"));
    }
}
