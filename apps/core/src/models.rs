use crate::engine::rules::Topic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The engine's answer to one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResult {
    /// The rendered answer (may contain `**bold**` markers and newlines).
    pub text: String,
    /// Follow-up phrases offered as clickable chips, in display order.
    pub suggestions: Vec<String>,
    /// The rule that produced the answer.
    pub topic: Topic,
}

impl ChatResult {
    pub fn new(topic: Topic, text: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            text: text.into(),
            suggestions,
            topic,
        }
    }
}

/// Who authored a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => f.write_str("user"),
            Sender::Bot => f.write_str("bot"),
        }
    }
}

/// A single rendered chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Append-only list of turns shown in the chat window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationTranscript {
    turns: Vec<Turn>,
}

impl ConversationTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn and returns a copy of it.
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) -> Turn {
        let turn = Turn {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            created_at: Utc::now(),
        };
        self.turns.push(turn.clone());
        turn
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_preserves_order() {
        let mut transcript = ConversationTranscript::new();
        assert!(transcript.is_empty());

        let first = transcript.push(Sender::User, "hello");
        let second = transcript.push(Sender::Bot, "hi there");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[0], first);
        assert_eq!(transcript.last(), Some(&second));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        assert_eq!(Sender::User.to_string(), "user");
    }
}
