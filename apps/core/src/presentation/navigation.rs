//! Scroll-driven navigation state.

use serde::{Deserialize, Serialize};

/// Scroll offset past which the sticky header gets a shadow.
pub const HEADER_SHADOW_THRESHOLD: f64 = 50.0;

/// Vertical placement of one page section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

pub fn header_shadow(scroll_y: f64) -> bool {
    scroll_y > HEADER_SHADOW_THRESHOLD
}

/// Last section (in document order) whose top, less a third of its height, has been scrolled past.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - s.height / 3.0)
        .map(|s| s.id.as_str())
}

/// Nav links whose href mentions `section`.
pub fn active_links<'a>(links: &'a [String], section: Option<&str>) -> Vec<&'a str> {
    match section {
        Some(id) if !id.is_empty() => links
            .iter()
            .filter(|href| href.contains(id))
            .map(String::as_str)
            .collect(),
        _ => Vec::new(),
    }
}
