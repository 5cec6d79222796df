//! # Engine Module
//!
//! Rule-based FAQ answering for the portfolio chatbot. No model, no network:
//! ordered whole-word keyword rules decide the topic, templates render it.
//!
//! ## Components
//! - `rules`: the ordered keyword rule table and project sub-rules
//! - `responder`: `ResponseEngine`, which renders a `ChatResult` per utterance

pub mod responder;
pub mod rules;

pub use responder::ResponseEngine;
pub use rules::{ProjectFocus, Rule, RuleMatch, RuleTable, Topic};
