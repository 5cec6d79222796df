//! Type/delete text cycling for the hero subtitle.
//!
//! The animator is a plain state machine: each [`TypingAnimator::tick`]
//! yields the text to show and how long to wait before the next tick. The
//! controller owns the timer loop.

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const WORD_PAUSE: Duration = Duration::from_millis(2000);
pub const NEXT_WORD_PAUSE: Duration = Duration::from_millis(500);

/// Phrases cycled by default.
pub const DEFAULT_PHRASES: &[&str] = &[
    "Java Developer",
    "Full Stack Learner",
    "Problem Solver",
    "Hard Worker",
    "Tech Enthusiast",
    "SQL + JDBC Developer",
    "DSA Learner",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay: Duration,
}

#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: Vec<Vec<char>>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Default for TypingAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect())
    }
}

impl TypingAnimator {
    /// Empty phrases are skipped; an empty list animates nothing.
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases: phrases
                .into_iter()
                .filter(|p| !p.is_empty())
                .map(|p| p.chars().collect())
                .collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    /// Phrase currently being typed or deleted.
    #[cfg(test)]
    fn current_phrase(&self) -> Option<String> {
        self.phrases.get(self.phrase_index).map(|p| p.iter().collect())
    }

    /// Advances one step.
    pub fn tick(&mut self) -> TypingFrame {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return TypingFrame {
                text: String::new(),
                next_delay: WORD_PAUSE,
            };
        };
        let len = phrase.len();

        let mut next_delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY
        } else {
            self.char_index = (self.char_index + 1).min(len);
            TYPE_DELAY
        };
        let text: String = phrase[..self.char_index].iter().collect();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            next_delay = WORD_PAUSE;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            next_delay = NEXT_WORD_PAUSE;
        }

        TypingFrame { text, next_delay }
    }
}
