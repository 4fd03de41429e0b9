//! Local client implementation for the string-utils module.

use std::sync::Arc;

use string_utils_sdk::{StringUtilsClient, StringUtilsError};

use super::service::Service;

/// Local client implementation of [`StringUtilsClient`].
///
/// Resolves absent inputs according to the SDK contract and delegates
/// present ones to the domain [`Service`].
pub struct StringUtilsLocalClient {
    service: Arc<Service>,
}

impl StringUtilsLocalClient {
    /// Creates a new local client over the given service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl StringUtilsClient for StringUtilsLocalClient {
    fn reverse(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.service.reverse(t))
    }

    fn is_palindrome(&self, text: Option<&str>) -> bool {
        text.is_some_and(|t| self.service.is_palindrome(t))
    }

    fn count_vowels(&self, text: Option<&str>) -> usize {
        text.map_or(0, |t| self.service.count_vowels(t))
    }

    fn to_title_case(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.service.to_title_case(t))
    }

    fn remove_duplicates(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.service.remove_duplicates(t))
    }

    fn find_longest_word(&self, text: Option<&str>) -> String {
        text.map_or_else(String::new, |t| self.service.find_longest_word(t))
    }

    fn count_words(&self, text: Option<&str>) -> usize {
        text.map_or(0, |t| self.service.count_words(t))
    }

    fn is_anagram(&self, first: Option<&str>, second: Option<&str>) -> bool {
        match (first, second) {
            (Some(first), Some(second)) => self.service.is_anagram(first, second),
            _ => false,
        }
    }

    fn capitalize_words(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.service.capitalize_words(t))
    }

    fn count_occurrences(&self, text: Option<&str>, needle: Option<&str>) -> usize {
        match (text, needle) {
            (Some(text), Some(needle)) => self.service.count_occurrences(text, needle),
            _ => 0,
        }
    }

    fn is_valid_email(&self, email: Option<&str>) -> bool {
        email.is_some_and(|e| self.service.is_valid_email(e))
    }

    fn extract_numbers(&self, text: Option<&str>) -> Result<Vec<u64>, StringUtilsError> {
        match text {
            Some(text) => Ok(self.service.extract_numbers(text)?),
            None => Ok(Vec::new()),
        }
    }

    fn remove_special_chars(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.service.remove_special_chars(t))
    }
}
