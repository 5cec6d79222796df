//! Page controller: greeting, typing animation, theme, welcome popup and navigation.
//!
//! Constructed once with its collaborators injected. Timers run as tokio
//! tasks owned by the controller and are aborted on drop.

use super::clock::Clock;
use super::greeting::greeting_for_hour;
use super::navigation::{active_links, active_section, header_shadow, SectionBounds};
use super::storage::KeyValueStore;
use super::theme::Theme;
use super::typing::TypingAnimator;
use super::view::PageView;
use super::welcome::{self, NameSubmission, WelcomeState, INVALID_CUE_DURATION, POPUP_DELAY};
use crate::error::AppError;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub struct PresentationController {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    view: Arc<dyn PageView>,
    typing_phrases: Vec<String>,
    theme: Theme,
    visitor_name: Option<String>,
    menu_open: bool,
    active_section: Option<String>,
    typing_task: Option<JoinHandle<()>>,
    popup_task: Option<JoinHandle<()>>,
    cue_task: Option<JoinHandle<()>>,
}

impl PresentationController {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>, view: Arc<dyn PageView>) -> Self {
        Self {
            store,
            clock,
            view,
            typing_phrases: Vec::new(),
            theme: Theme::default(),
            visitor_name: None,
            menu_open: false,
            active_section: None,
            typing_task: None,
            popup_task: None,
            cue_task: None,
        }
    }

    /// Replaces the phrases cycled by the typing animation.
    pub fn with_typing_phrases(mut self, phrases: Vec<String>) -> Self {
        self.typing_phrases = phrases;
        self
    }

    /// Runs the page-load sequence. Must run inside a tokio runtime.
    pub fn init(&mut self) {
        self.refresh_greeting();
        self.start_typing();
        self.init_theme();
        self.init_welcome();
        info!(theme = %self.theme, known_visitor = self.visitor_name.is_some(), "Page initialized");
    }

    pub fn refresh_greeting(&self) {
        self.view.set_greeting(greeting_for_hour(self.clock.local_hour()));
    }

    fn start_typing(&mut self) {
        let mut animator = if self.typing_phrases.is_empty() {
            TypingAnimator::default()
        } else {
            TypingAnimator::new(self.typing_phrases.clone())
        };
        let view = Arc::clone(&self.view);

        let handle = tokio::spawn(async move {
            loop {
                let frame = animator.tick();
                view.set_typed_text(&frame.text);
                sleep(frame.next_delay).await;
            }
        });
        if let Some(previous) = self.typing_task.replace(handle) {
            previous.abort();
        }
    }

    fn init_theme(&mut self) {
        self.theme = Theme::load(self.store.as_ref());
        self.view.apply_theme(self.theme);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the theme and persists the new value.
    pub fn toggle_theme(&mut self) -> Result<Theme, AppError> {
        let next = self.theme.toggled();
        next.save(self.store.as_ref())?;
        self.theme = next;
        self.view.apply_theme(next);
        debug!(theme = %next, "Theme toggled");
        Ok(next)
    }

    fn init_welcome(&mut self) {
        match WelcomeState::load(self.store.as_ref()) {
            WelcomeState::Known { name } => {
                self.view.set_welcome_message(&welcome::welcome_message(&name));
                self.visitor_name = Some(name);
            }
            WelcomeState::Prompt => {
                let view = Arc::clone(&self.view);
                let handle = tokio::spawn(async move {
                    sleep(POPUP_DELAY).await;
                    view.show_welcome_popup(true);
                });
                if let Some(previous) = self.popup_task.replace(handle) {
                    previous.abort();
                }
            }
        }
    }

    pub fn visitor_name(&self) -> Option<&str> {
        self.visitor_name.as_deref()
    }

    /// Handles the popup's submit button.
    ///
    /// A blank name flags the input for a moment and keeps the popup open.
    pub fn submit_name(&mut self, raw: &str) -> Result<NameSubmission, AppError> {
        let submission = welcome::submit_name(self.store.as_ref(), raw)?;
        match &submission {
            NameSubmission::Accepted { name } => {
                if let Some(popup) = self.popup_task.take() {
                    popup.abort();
                }
                self.view.set_welcome_message(&welcome::welcome_message(name));
                self.view.show_welcome_popup(false);
                self.visitor_name = Some(name.clone());
                info!("Visitor name stored");
            }
            NameSubmission::Rejected => {
                warn!("Empty visitor name submitted");
                self.view.flag_name_input(true);
                let view = Arc::clone(&self.view);
                let handle = tokio::spawn(async move {
                    sleep(INVALID_CUE_DURATION).await;
                    view.flag_name_input(false);
                });
                if let Some(previous) = self.cue_task.replace(handle) {
                    previous.abort();
                }
            }
        }
        Ok(submission)
    }

    /// Updates header shadow and nav highlighting for a scroll position.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds], links: &[String]) -> Option<&str> {
        self.view.set_header_shadow(header_shadow(scroll_y));

        let current = active_section(scroll_y, sections).map(str::to_string);
        let highlighted: Vec<String> = active_links(links, current.as_deref())
            .into_iter()
            .map(str::to_string)
            .collect();
        self.view.highlight_links(&highlighted);

        if current != self.active_section {
            debug!(section = ?current, "Active section changed");
            self.active_section = current;
        }
        self.active_section.as_deref()
    }

    pub fn open_menu(&mut self) {
        self.set_menu(true);
    }

    pub fn close_menu(&mut self) {
        self.set_menu(false);
    }

    /// Following a link in the mobile menu closes it.
    pub fn nav_link_clicked(&mut self) {
        self.set_menu(false);
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    fn set_menu(&mut self, open: bool) {
        self.menu_open = open;
        self.view.set_menu_open(open);
    }

    /// Stops every running timer.
    pub fn shutdown(&mut self) {
        for task in [self.typing_task.take(), self.popup_task.take(), self.cue_task.take()]
            .into_iter()
            .flatten()
        {
            task.abort();
        }
    }
}

impl Drop for PresentationController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
