//! Score command
//!
//! Computes the feedback of one guess against one secret.

use crate::core::{Feedback, Word};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not 4 ASCII letters.
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let feedback = Feedback::score(&guess, &secret);

    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_valid_words() {
        let result = score_words("LOST", "that").unwrap();
        assert_eq!(result.guess.text(), "lost");
        assert_eq!(result.feedback, Feedback::new(1, 1));
    }

    #[test]
    fn reports_which_word_is_invalid() {
        let err = score_words("lost", "thats").err().unwrap();
        assert!(err.starts_with("Invalid secret"));

        let err = score_words("l0st", "that").err().unwrap();
        assert!(err.starts_with("Invalid guess"));
    }
}
