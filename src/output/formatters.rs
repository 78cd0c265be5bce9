//! Formatting utilities for terminal output

use crate::core::{Feedback, WORD_LEN};

/// Format feedback as one marker per letter: `●` bull, `○` cow, `·` miss
#[must_use]
pub fn feedback_markers(feedback: Feedback) -> String {
    let bulls = usize::from(feedback.bulls).min(WORD_LEN);
    let cows = usize::from(feedback.cows).min(WORD_LEN - bulls);

    format!(
        "{}{}{}",
        "●".repeat(bulls),
        "○".repeat(cows),
        "·".repeat(WORD_LEN - bulls - cows)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_for_mixed_feedback() {
        assert_eq!(feedback_markers(Feedback::new(1, 2)), "●○○·");
    }

    #[test]
    fn markers_for_win() {
        assert_eq!(feedback_markers(Feedback::WIN), "●●●●");
    }

    #[test]
    fn markers_for_nothing() {
        assert_eq!(feedback_markers(Feedback::new(0, 0)), "····");
    }

    #[test]
    fn markers_clamp_invalid_feedback() {
        assert_eq!(feedback_markers(Feedback::new(3, 3)), "●●●○");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }
}
