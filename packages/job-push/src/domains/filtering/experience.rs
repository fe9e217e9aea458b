//! Years-of-experience extraction from free text.
//!
//! Postings phrase requirements many ways ("5+ years", "3-5 yrs",
//! "minimum 4 years", "at least seven years"). Every phrase found is read
//! and the largest number wins, so a posting asking for "3 years (associate)
//! or 7 years (senior)" counts as 7.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Alternatives are tried in order at each match position:
    //   1, 2: "5 years" / "5+ yrs" / "5 plus years"
    //   3, 4: "3-5 years" / "4 – 7 yrs" (upper bound is used)
    //   5:    "minimum 3 years" / "min. 3 yrs" / "at least 5 years"
    //   6, 7: "seven years" / "five+ years"
    static ref EXPERIENCE_REGEX: Regex = Regex::new(
        r"(?ix)
        \b(\d+)\s*(\+|plus)?\s*(?:years?|yrs?)\b
        |
        \b(\d+)\s*[-–]\s*(\d+)\s*(?:years?|yrs?)\b
        |
        \b(?:minimum|min\.?|at\s*least|at\s*min\.?)\s*(\d+)\s*(?:years?|yrs?)\b
        |
        \b(three|four|five|six|seven|eight|nine|ten
           |eleven|twelve|thirteen|fourteen|fifteen
           |sixteen|seventeen|eighteen|nineteen|twenty)
        \s*(\+|plus)?\s*(?:years?|yrs?)\b
        "
    )
    .unwrap();
}

/// Map an English number word ("three".."twenty") to its value.
pub fn word_to_number(word: &str) -> Option<u32> {
    let n = match word.to_lowercase().as_str() {
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        _ => return None,
    };
    Some(n)
}

/// Digit runs too large for `u32` saturate so they still exceed any ceiling.
fn parse_years(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

/// Largest years-of-experience requirement mentioned in `text`.
///
/// Returns `None` when no phrase is recognised, which callers treat as "no
/// requirement".
pub fn extract_min_experience(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }

    EXPERIENCE_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            if let Some(n) = caps.get(1) {
                Some(parse_years(n.as_str()))
            } else if let (Some(_), Some(upper)) = (caps.get(3), caps.get(4)) {
                Some(parse_years(upper.as_str()))
            } else if let Some(n) = caps.get(5) {
                Some(parse_years(n.as_str()))
            } else {
                caps.get(6)
                    .map(|word| word_to_number(word.as_str()).unwrap_or(0))
            }
        })
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_plus() {
        assert_eq!(extract_min_experience("5+ years"), Some(5));
        assert_eq!(extract_min_experience("at least 2 yrs of Rust"), Some(2));
        assert_eq!(extract_min_experience("8 plus years"), Some(8));
        assert_eq!(extract_min_experience("1 year"), Some(1));
    }

    #[test]
    fn test_range_uses_upper_bound() {
        assert_eq!(extract_min_experience("3-5 years"), Some(5));
        assert_eq!(extract_min_experience("4 – 7 yrs"), Some(7));
    }

    #[test]
    fn test_minimum_phrases() {
        assert_eq!(extract_min_experience("Minimum 4 years"), Some(4));
        assert_eq!(extract_min_experience("min. 6 yrs"), Some(6));
    }

    #[test]
    fn test_words() {
        assert_eq!(extract_min_experience("at least seven years"), Some(7));
        assert_eq!(extract_min_experience("Twelve+ Years"), Some(12));
        // "two" is not in the word list
        assert_eq!(extract_min_experience("two years"), None);
    }

    #[test]
    fn test_max_across_matches() {
        assert_eq!(
            extract_min_experience("5 years of Python and 3-8 years overall"),
            Some(8)
        );
        assert_eq!(
            extract_min_experience("3 years for associate, 7 years for senior"),
            Some(7)
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract_min_experience(""), None);
        assert_eq!(extract_min_experience("Great team, yearly bonus"), None);
        assert_eq!(extract_min_experience("5 days a week"), None);
        assert_eq!(extract_min_experience("founded 1999"), None);
    }

    #[test]
    fn test_oversized_number_saturates() {
        assert_eq!(
            extract_min_experience("99999999999 years, 4 years"),
            Some(u32::MAX)
        );
        assert_eq!(
            extract_min_experience("requires 10000000000 years"),
            Some(u32::MAX)
        );
    }

    #[test]
    fn test_word_to_number() {
        assert_eq!(word_to_number("Twenty"), Some(20));
        assert_eq!(word_to_number("hundred"), None);
    }
}
