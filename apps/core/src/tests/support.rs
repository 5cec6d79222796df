use crate::models::{Sender, Turn};
use crate::presentation::{ChatView, PageView, Theme};
use std::sync::Mutex;

/// Everything a view was asked to render, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Greeting(String),
    TypedText(String),
    Theme(Theme),
    Popup(bool),
    WelcomeMessage(String),
    NameFlag(bool),
    HeaderShadow(bool),
    Links(Vec<String>),
    Menu(bool),
    ChatOpen(bool),
    Turn(Sender, String),
    Suggestions(Vec<String>),
    ClearSuggestions,
    Typing(bool),
}

#[derive(Debug, Default)]
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn contains(&self, event: &ViewEvent) -> bool {
        self.events.lock().unwrap().contains(event)
    }

    pub fn count(&self, predicate: impl Fn(&ViewEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| predicate(e)).count()
    }

    /// Rendered chat turns as (sender, text).
    pub fn turns(&self) -> Vec<(Sender, String)> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Turn(sender, text) => Some((*sender, text.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn last_suggestions(&self) -> Option<Vec<String>> {
        self.events.lock().unwrap().iter().rev().find_map(|e| match e {
            ViewEvent::Suggestions(s) => Some(s.clone()),
            _ => None,
        })
    }
}

impl PageView for RecordingView {
    fn set_greeting(&self, text: &str) {
        self.record(ViewEvent::Greeting(text.to_string()));
    }

    fn set_typed_text(&self, text: &str) {
        self.record(ViewEvent::TypedText(text.to_string()));
    }

    fn apply_theme(&self, theme: Theme) {
        self.record(ViewEvent::Theme(theme));
    }

    fn show_welcome_popup(&self, visible: bool) {
        self.record(ViewEvent::Popup(visible));
    }

    fn set_welcome_message(&self, text: &str) {
        self.record(ViewEvent::WelcomeMessage(text.to_string()));
    }

    fn flag_name_input(&self, invalid: bool) {
        self.record(ViewEvent::NameFlag(invalid));
    }

    fn set_header_shadow(&self, on: bool) {
        self.record(ViewEvent::HeaderShadow(on));
    }

    fn highlight_links(&self, hrefs: &[String]) {
        self.record(ViewEvent::Links(hrefs.to_vec()));
    }

    fn set_menu_open(&self, open: bool) {
        self.record(ViewEvent::Menu(open));
    }
}

impl ChatView for RecordingView {
    fn set_open(&self, open: bool) {
        self.record(ViewEvent::ChatOpen(open));
    }

    fn show_turn(&self, turn: &Turn) {
        self.record(ViewEvent::Turn(turn.sender, turn.text.clone()));
    }

    fn show_suggestions(&self, suggestions: &[String]) {
        self.record(ViewEvent::Suggestions(suggestions.to_vec()));
    }

    fn clear_suggestions(&self) {
        self.record(ViewEvent::ClearSuggestions);
    }

    fn set_typing(&self, typing: bool) {
        self.record(ViewEvent::Typing(typing));
    }
}
