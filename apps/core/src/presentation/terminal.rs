//! Plain-text rendering of the page and chat widget for the terminal front end.

use super::theme::Theme;
use super::view::{ChatView, PageView};
use crate::models::{Sender, Turn};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::trace;

#[derive(Debug, Default)]
pub struct TerminalView {
    suggestions: Mutex<Vec<String>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drops the `**bold**` markers the chatbot uses.
pub fn plain_text(text: &str) -> String {
    text.replace("**", "")
}

/// Theme line with the toggle icon the page would show.
pub fn theme_label(theme: Theme) -> String {
    format!("[theme: {} | toggle: {}]", theme, theme.icon())
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggestion chip shown as number `n` (1-based).
    pub fn suggestion(&self, n: usize) -> Option<String> {
        n.checked_sub(1).and_then(|i| lock(&self.suggestions).get(i).cloned())
    }
}

impl PageView for TerminalView {
    fn set_greeting(&self, text: &str) {
        println!("{}", text);
    }

    fn set_typed_text(&self, text: &str) {
        trace!(text, "Typing frame");
    }

    fn apply_theme(&self, theme: Theme) {
        println!("{}", theme_label(theme));
    }

    fn show_welcome_popup(&self, visible: bool) {
        if visible {
            println!("Welcome! What's your name?");
        }
    }

    fn set_welcome_message(&self, text: &str) {
        println!("{}", text);
    }

    fn flag_name_input(&self, invalid: bool) {
        if invalid {
            println!("(please enter a name)");
        }
    }

    fn set_header_shadow(&self, _on: bool) {}

    fn highlight_links(&self, _hrefs: &[String]) {}

    fn set_menu_open(&self, _open: bool) {}
}

impl ChatView for TerminalView {
    fn set_open(&self, open: bool) {
        println!("{}", if open { "[chat opened]" } else { "[chat closed]" });
    }

    fn show_turn(&self, turn: &Turn) {
        match turn.sender {
            // The user's own line is already on screen.
            Sender::User => {}
            Sender::Bot => println!("🤖 {}\n", plain_text(&turn.text)),
        }
    }

    fn show_suggestions(&self, suggestions: &[String]) {
        for (i, s) in suggestions.iter().enumerate() {
            println!("  [{}] {}", i + 1, s);
        }
        *lock(&self.suggestions) = suggestions.to_vec();
    }

    fn clear_suggestions(&self) {
        lock(&self.suggestions).clear();
    }

    fn set_typing(&self, typing: bool) {
        if typing {
            println!("…");
        }
    }
}
