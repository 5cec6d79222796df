//! Time-of-day greeting shown in the hero section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Morning is 05-11, afternoon 12-16, evening 17-20, night otherwise.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            5..=11 => TimeOfDay::Morning,
            _ => TimeOfDay::Night,
        }
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Good Morning ☀️",
            TimeOfDay::Afternoon => "Good Afternoon 🌤️",
            TimeOfDay::Evening => "Good Evening 🌆",
            TimeOfDay::Night => "Good Night 🌙",
        }
    }
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    TimeOfDay::from_hour(hour).greeting()
}
