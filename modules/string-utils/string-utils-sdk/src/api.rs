//! `StringUtilsClient` trait definition.

use crate::error::StringUtilsError;

/// Public API trait for the `string-utils` module.
///
/// "Word" means a maximal run of non-whitespace characters. Lengths are
/// counted in Unicode scalar values.
pub trait StringUtilsClient: Send + Sync {
    /// Reverses `text`. `None` yields `None`.
    fn reverse(&self, text: Option<&str>) -> Option<String>;

    /// Returns `true` if the ASCII letters and digits of `text`, lowercased,
    /// read the same in both directions. Other characters are ignored.
    /// `None` yields `false`.
    fn is_palindrome(&self, text: Option<&str>) -> bool;

    /// Counts the vowels a, e, i, o, u in either case. `None` yields 0.
    fn count_vowels(&self, text: Option<&str>) -> usize;

    /// Uppercases the first character of every word and lowercases the rest,
    /// keeping the whitespace between words. Blank input is returned unchanged.
    fn to_title_case(&self, text: Option<&str>) -> Option<String>;

    /// Keeps only the first occurrence of every character, in order.
    fn remove_duplicates(&self, text: Option<&str>) -> Option<String>;

    /// Returns the longest word, the first one on ties. `None` and blank
    /// input yield an empty string.
    fn find_longest_word(&self, text: Option<&str>) -> String;

    /// Counts the words in `text`. `None` yields 0.
    fn count_words(&self, text: Option<&str>) -> usize;

    /// Returns `true` if the ASCII letters of both inputs, ignoring case, form
    /// the same multiset. `None` on either side yields `false`.
    fn is_anagram(&self, first: Option<&str>, second: Option<&str>) -> bool;

    /// Capitalizes every word and joins them with single spaces.
    fn capitalize_words(&self, text: Option<&str>) -> Option<String>;

    /// Counts non-overlapping occurrences of `needle` in `text`.
    /// `None` on either side or an empty needle yields 0.
    fn count_occurrences(&self, text: Option<&str>, needle: Option<&str>) -> usize;

    /// Returns `true` if `email` looks like `local@domain.tld`.
    fn is_valid_email(&self, email: Option<&str>) -> bool;

    /// Parses every run of ASCII digits in `text`. `None` yields an empty list.
    ///
    /// # Errors
    ///
    /// [`StringUtilsError::NumberOutOfRange`] when a run does not fit in `u64`.
    fn extract_numbers(&self, text: Option<&str>) -> Result<Vec<u64>, StringUtilsError>;

    /// Replaces every character other than ASCII letters, digits and
    /// whitespace with a space, collapses whitespace runs and trims.
    fn remove_special_chars(&self, text: Option<&str>) -> Option<String>;
}
