//! Bulls and Cows word representation
//!
//! A Word stores a 4-letter word, case-folded to lowercase once at construction.
//! Every comparison in the crate works on the folded bytes.

use std::fmt;

/// Number of letters in every word
pub const WORD_LEN: usize = 4;

/// A 4-letter Bulls and Cows word
///
/// Stores the lowercase text alongside its bytes for positional comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, folding it to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 4 characters
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Word;
    ///
    /// let word = Word::new("LoSt").unwrap();
    /// assert_eq!(word.text(), "lost");
    ///
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("w0rd").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Build words from string slices, stopping at the first invalid entry
///
/// # Errors
/// Returns the offending text together with its `WordError`.
///
/// # Examples
/// ```
/// use bulls_cows::core::words_from_strs;
///
/// let pool = words_from_strs(&["word", "WARD"]).unwrap();
/// assert_eq!(pool[1].text(), "ward");
/// assert!(words_from_strs(&["word", "wordy"]).is_err());
/// ```
pub fn words_from_strs<S: AsRef<str>>(texts: &[S]) -> Result<Vec<Word>, (String, WordError)> {
    texts
        .iter()
        .map(|text| {
            let text = text.as_ref();
            Word::new(text).map_err(|e| (text.to_string(), e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("lost").unwrap();
        assert_eq!(word.text(), "lost");
        assert_eq!(word.chars(), b"lost");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("LOST").unwrap();
        assert_eq!(word.text(), "lost");

        let word2 = Word::new("LoSt").unwrap();
        assert_eq!(word2.text(), "lost");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("toolong"),
            Err(WordError::InvalidLength(7))
        ));
        assert!(matches!(Word::new("abc"), Err(WordError::InvalidLength(3))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("w0rd"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("wo d"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("wor!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("noon").unwrap();
        assert_eq!(word.char_at(0), b'n');
        assert_eq!(word.char_at(1), b'o');
        assert_eq!(word.char_at(2), b'o');
        assert_eq!(word.char_at(3), b'n');
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "That".parse().unwrap();
        assert_eq!(format!("{word}"), "that");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        let word1 = Word::new("word").unwrap();
        let word2 = Word::new("WORD").unwrap();
        let word3 = Word::new("ward").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn words_from_strs_preserves_order() {
        let words = words_from_strs(&["that", "than", "chat"]).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["that", "than", "chat"]);
    }

    #[test]
    fn words_from_strs_reports_offender() {
        let err = words_from_strs(&["that", "th4t"]).unwrap_err();
        assert_eq!(err, ("th4t".to_string(), WordError::InvalidCharacters));
    }
}
