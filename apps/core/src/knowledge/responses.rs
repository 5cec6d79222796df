//! Canned phrasings the chatbot rotates through.

use super::random::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Categories that have several interchangeable phrasings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    Greeting,
    Identity,
    Fallback,
}

impl ResponseCategory {
    pub const ALL: [ResponseCategory; 3] = [
        ResponseCategory::Greeting,
        ResponseCategory::Identity,
        ResponseCategory::Fallback,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResponseCategory::Greeting => "greeting",
            ResponseCategory::Identity => "identity",
            ResponseCategory::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Phrase lists per category. Every list is non-empty once validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ResponseBank {
    #[validate(length(min = 1))]
    greeting: Vec<String>,
    #[validate(length(min = 1))]
    identity: Vec<String>,
    #[validate(length(min = 1))]
    fallback: Vec<String>,
}

impl ResponseBank {
    /// Builds a bank, rejecting any empty phrase list.
    pub fn new(
        greeting: Vec<String>,
        identity: Vec<String>,
        fallback: Vec<String>,
    ) -> Result<Self, validator::ValidationErrors> {
        let bank = Self {
            greeting,
            identity,
            fallback,
        };
        bank.validate()?;
        Ok(bank)
    }

    pub fn phrases(&self, category: ResponseCategory) -> &[String] {
        match category {
            ResponseCategory::Greeting => &self.greeting,
            ResponseCategory::Identity => &self.identity,
            ResponseCategory::Fallback => &self.fallback,
        }
    }

    /// Picks one phrasing uniformly at random.
    pub fn pick(&self, category: ResponseCategory, random: &dyn RandomSource) -> &str {
        let phrases = self.phrases(category);
        match phrases.len() {
            0 => "",
            len => &phrases[random.index(len).min(len - 1)],
        }
    }

    pub fn builtin() -> Self {
        Self {
            greeting: vec![
                "Hello! 👋 I'm ready to answer questions about Raunak's Work, Skills, or Contact details.".into(),
                "Hi there! I'm Raunak's AI assistant. Ask me anything about his coding journey! 🚀".into(),
                "Greetings! 🌟 I can help you navigate Raunak's portfolio. What's on your mind?".into(),
            ],
            identity: vec![
                "I am Raunak's personal AI Assistant, trained on his complete professional portfolio to give you accurate insights.".into(),
                "I'm a virtual assistant designed to showcase Raunak's skills and projects. I know his professional bio inside out! 🤖".into(),
            ],
            fallback: vec![
                "I can tell you about Raunak's **Skills**, **Projects**, **Education**, or **Career Vision**. What would you like to know?".into(),
                "That's interesting! While I might not know everything, I can definitely tell you about Raunak's Java projects or Web development skills.".into(),
                "I'm tuned to discuss Raunak's professional profile. Try asking about his **Projects** or **Contact Info**!".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::random::FixedRandom;

    #[test]
    fn test_builtin_bank_has_phrases_for_every_category() {
        let bank = ResponseBank::builtin();
        assert!(bank.validate().is_ok());
        for category in ResponseCategory::ALL {
            assert!(!bank.phrases(category).is_empty(), "{} is empty", category);
        }
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let result = ResponseBank::new(vec!["hi".into()], vec![], vec!["?".into()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_pick_uses_random_index() {
        let bank = ResponseBank::builtin();
        let random = FixedRandom::new(vec![2, 0]);

        assert_eq!(
            bank.pick(ResponseCategory::Fallback, &random),
            bank.phrases(ResponseCategory::Fallback)[2]
        );
        assert_eq!(
            bank.pick(ResponseCategory::Identity, &random),
            bank.phrases(ResponseCategory::Identity)[0]
        );
    }
}
