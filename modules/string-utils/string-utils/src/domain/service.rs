//! Domain service for string utilities
//!
//! Pure text transforms over `&str`. Absent-input handling lives in the
//! local client.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::error::DomainError;

#[allow(clippy::expect_used)] // good regex, it doesn't panic
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("static regex should not panic")
});
#[allow(clippy::expect_used)] // good regex, it doesn't panic
static DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("static regex should not panic"));
#[allow(clippy::expect_used)] // good regex, it doesn't panic
static SPECIAL_CHARS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("static regex should not panic"));
#[allow(clippy::expect_used)] // good regex, it doesn't panic
static WHITESPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex should not panic"));

/// Domain service that performs string operations.
#[derive(Clone, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn reverse(&self, text: &str) -> String {
        debug!(len = text.len(), "reversing text");
        text.chars().rev().collect()
    }

    #[must_use]
    pub fn is_palindrome(&self, text: &str) -> bool {
        debug!(len = text.len(), "checking palindrome");
        let cleaned: Vec<char> = text
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        cleaned.iter().eq(cleaned.iter().rev())
    }

    #[must_use]
    pub fn count_vowels(&self, text: &str) -> usize {
        debug!(len = text.len(), "counting vowels");
        text.chars()
            .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
            .count()
    }

    /// Title-cases every word while keeping the original whitespace.
    #[must_use]
    pub fn to_title_case(&self, text: &str) -> String {
        debug!(len = text.len(), "converting to title case");
        if text.trim().is_empty() {
            return text.to_owned();
        }

        let mut result = String::with_capacity(text.len());
        let mut at_word_start = true;
        for c in text.chars() {
            if c.is_whitespace() {
                result.push(c);
                at_word_start = true;
            } else if at_word_start {
                result.extend(c.to_uppercase());
                at_word_start = false;
            } else {
                result.extend(c.to_lowercase());
            }
        }
        result
    }

    #[must_use]
    pub fn remove_duplicates(&self, text: &str) -> String {
        debug!(len = text.len(), "removing duplicate characters");
        let mut seen = HashSet::new();
        text.chars().filter(|c| seen.insert(*c)).collect()
    }

    /// Longest word by character count; the earliest wins ties.
    #[must_use]
    pub fn find_longest_word(&self, text: &str) -> String {
        debug!(len = text.len(), "finding longest word");
        let mut longest = "";
        let mut longest_len = 0;
        for word in text.split_whitespace() {
            let len = word.chars().count();
            if len > longest_len {
                longest = word;
                longest_len = len;
            }
        }
        longest.to_owned()
    }

    #[must_use]
    pub fn count_words(&self, text: &str) -> usize {
        debug!(len = text.len(), "counting words");
        text.split_whitespace().count()
    }

    #[must_use]
    pub fn is_anagram(&self, first: &str, second: &str) -> bool {
        debug!(
            first_len = first.len(),
            second_len = second.len(),
            "checking anagram"
        );
        sorted_letters(first) == sorted_letters(second)
    }

    #[must_use]
    pub fn capitalize_words(&self, text: &str) -> String {
        debug!(len = text.len(), "capitalizing words");
        text.split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn count_occurrences(&self, text: &str, needle: &str) -> usize {
        debug!(len = text.len(), needle, "counting occurrences");
        if needle.is_empty() {
            return 0;
        }
        text.matches(needle).count()
    }

    #[must_use]
    pub fn is_valid_email(&self, email: &str) -> bool {
        debug!(len = email.len(), "validating email");
        EMAIL_REGEX.is_match(email)
    }

    /// Parses every run of ASCII digits.
    ///
    /// # Errors
    /// Returns `DomainError::NumberOutOfRange` for a run larger than `u64::MAX`.
    pub fn extract_numbers(&self, text: &str) -> Result<Vec<u64>, DomainError> {
        debug!(len = text.len(), "extracting numbers");
        DIGITS_REGEX
            .find_iter(text)
            .map(|m| {
                m.as_str()
                    .parse::<u64>()
                    .map_err(|_| DomainError::NumberOutOfRange {
                        digits: m.as_str().to_owned(),
                    })
            })
            .collect()
    }

    #[must_use]
    pub fn remove_special_chars(&self, text: &str) -> String {
        debug!(len = text.len(), "removing special characters");
        let spaced = SPECIAL_CHARS_REGEX.replace_all(text, " ");
        let collapsed = WHITESPACE_RUN_REGEX.replace_all(&spaced, " ");
        collapsed.trim().to_owned()
    }
}

fn sorted_letters(text: &str) -> Vec<char> {
    let mut letters: Vec<char> = text
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    letters.sort_unstable();
    letters
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
