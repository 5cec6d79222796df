//! First-visit name capture.

use super::storage::{KeyValueStore, VISITOR_NAME_KEY};
use crate::error::AppError;
use std::time::Duration;

/// Delay before the popup appears for an unknown visitor.
pub const POPUP_DELAY: Duration = Duration::from_millis(500);
/// How long the name field stays flagged after an empty submission.
pub const INVALID_CUE_DURATION: Duration = Duration::from_millis(2000);

/// What the page should do about the welcome popup on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WelcomeState {
    /// A name is stored; greet the visitor directly.
    Known { name: String },
    /// No name stored; show the popup after `POPUP_DELAY`.
    Prompt,
}

impl WelcomeState {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(VISITOR_NAME_KEY) {
            Some(name) if !name.is_empty() => WelcomeState::Known { name },
            _ => WelcomeState::Prompt,
        }
    }
}

/// Result of submitting the popup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSubmission {
    Accepted { name: String },
    /// Blank input; nothing stored.
    Rejected,
}

pub fn welcome_message(name: &str) -> String {
    format!("Welcome, {} 👋", name)
}

/// Trims `raw` and stores it when non-empty.
pub fn submit_name(store: &dyn KeyValueStore, raw: &str) -> Result<NameSubmission, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Ok(NameSubmission::Rejected);
    }
    store.set(VISITOR_NAME_KEY, name)?;
    Ok(NameSubmission::Accepted {
        name: name.to_string(),
    })
}
