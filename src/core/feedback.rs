//! Bulls and Cows feedback calculation and representation
//!
//! Feedback is the pair reported for a guess against the secret:
//! - bulls: letters correct in both identity and position
//! - cows: secret letters guessed in the wrong position
//!
//! Every feedback produced by [`Feedback::score`] satisfies
//! `bulls <= 4` and `bulls + cows <= 4`.

use super::word::{WORD_LEN, Word, WordError};
use std::fmt;

/// Feedback for a guess: (bulls, cows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    pub bulls: u8,
    pub cows: u8,
}

impl Feedback {
    /// All bulls (the guess is the secret)
    pub const WIN: Self = Self::new(WORD_LEN as u8, 0);

    /// Create a feedback pair
    ///
    /// No validation is done here; an impossible pair simply never matches
    /// a scored feedback. Use [`Feedback::is_valid`] to check.
    #[inline]
    #[must_use]
    pub const fn new(bulls: u8, cows: u8) -> Self {
        Self { bulls, cows }
    }

    /// Check the feedback invariant: `bulls <= 4` and `bulls + cows <= 4`
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        let len = WORD_LEN as u16;
        (self.bulls as u16) <= len && (self.bulls as u16 + self.cows as u16) <= len
    }

    /// Check if this is a winning feedback (all bulls)
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.bulls == WORD_LEN as u8
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Bulls pass: count positions where guess and secret agree
    /// 2. Cows pass: for each non-bull secret position `i`, take the first guess
    ///    position `j != i` not yet used by an earlier cow whose letter matches
    ///
    /// Guess positions that scored a bull are not excluded from the cows pass,
    /// only the secret side is. The result therefore depends on which word is
    /// the guess when the two differ in duplicate letters.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Feedback, Word};
    ///
    /// let herb = Word::new("herb").unwrap();
    /// let bulb = Word::new("bulb").unwrap();
    ///
    /// assert_eq!(Feedback::score(&herb, &bulb), Feedback::new(1, 1));
    /// assert_eq!(Feedback::score(&bulb, &herb), Feedback::new(1, 0));
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let g = guess.chars();
        let s = secret.chars();

        let mut bulls = 0u8;
        let mut is_bull = [false; WORD_LEN];

        // First pass: exact position matches
        // Allow: Index needed to access g[i], s[i], and set is_bull[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if g[i] == s[i] {
                bulls += 1;
                is_bull[i] = true;
            }
        }

        // Second pass: each remaining secret letter consumes at most one guess letter
        let mut cows = 0u8;
        let mut guess_used = [false; WORD_LEN];

        for i in (0..WORD_LEN).filter(|&i| !is_bull[i]) {
            let matched = (0..WORD_LEN).find(|&j| j != i && !guess_used[j] && g[j] == s[i]);
            if let Some(j) = matched {
                cows += 1;
                guess_used[j] = true;
            }
        }

        Self { bulls, cows }
    }

    /// Parse feedback from text
    ///
    /// Accepts:
    /// - `"1,1"` or `"1 1"` (bulls then cows)
    /// - `"1b1c"` or `"1B 1C"`
    /// - `"win"` for all bulls
    ///
    /// Returns `None` for malformed text or a pair breaking the invariant.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Feedback;
    ///
    /// assert_eq!(Feedback::parse("1,2"), Some(Feedback::new(1, 2)));
    /// assert_eq!(Feedback::parse("1B 2C"), Some(Feedback::new(1, 2)));
    /// assert_eq!(Feedback::parse("win"), Some(Feedback::WIN));
    /// assert_eq!(Feedback::parse("3,2"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let text = s.trim().to_ascii_lowercase();
        if text == "win" {
            return Some(Self::WIN);
        }

        let tokens: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let (bulls, cows) = match tokens.as_slice() {
            &[bulls, cows] => (
                bulls.strip_suffix('b').unwrap_or(bulls),
                cows.strip_suffix('c').unwrap_or(cows),
            ),
            &[compact] => compact.strip_suffix('c')?.split_once('b')?,
            _ => return None,
        };

        let feedback = Self::new(bulls.parse().ok()?, cows.parse().ok()?);
        feedback.is_valid().then_some(feedback)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}C", self.bulls, self.cows)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback: {s}"))
    }
}

/// Score two words given as text, folding case at the boundary
///
/// # Errors
/// Returns `WordError` if either text is not a 4-letter ASCII word.
///
/// # Examples
/// ```
/// use bulls_cows::core::{score, Feedback};
///
/// assert_eq!(score("LOST", "that").unwrap(), Feedback::new(1, 1));
/// assert!(score("lost", "thats").is_err());
/// ```
pub fn score(guess: &str, secret: &str) -> Result<Feedback, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    Ok(Feedback::score(&guess, &secret))
}
