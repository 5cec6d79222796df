//! Render sinks the controllers draw into.
//!
//! A browser binding would map these onto DOM updates; the terminal front end
//! prints them; tests record them.

use super::theme::Theme;
use crate::models::Turn;

/// Page-level widgets: hero greeting, typing subtitle, theme, welcome popup, navigation.
pub trait PageView: Send + Sync {
    fn set_greeting(&self, text: &str);
    fn set_typed_text(&self, text: &str);
    fn apply_theme(&self, theme: Theme);
    fn show_welcome_popup(&self, visible: bool);
    fn set_welcome_message(&self, text: &str);
    /// Highlights (or clears) the name field after an invalid submission.
    fn flag_name_input(&self, invalid: bool);
    fn set_header_shadow(&self, on: bool);
    fn highlight_links(&self, hrefs: &[String]);
    fn set_menu_open(&self, open: bool);
}

/// The chatbot widget.
pub trait ChatView: Send + Sync {
    fn set_open(&self, open: bool);
    fn show_turn(&self, turn: &Turn);
    fn show_suggestions(&self, suggestions: &[String]);
    fn clear_suggestions(&self);
    fn set_typing(&self, typing: bool);
}
