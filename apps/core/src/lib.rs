//! Portfolio companion core.
//!
//! - `engine`: rule-based FAQ chatbot answering questions about the portfolio subject
//! - `knowledge`: the subject's profile and the chatbot's canned phrasings
//! - `presentation`: page controller and chat widget session built around the engine

pub mod config;
pub mod engine;
pub mod error;
pub mod fs_manager;
pub mod knowledge;
pub mod logging;
pub mod models;
pub mod presentation;

pub use engine::ResponseEngine;
pub use error::AppError;
pub use models::ChatResult;

#[cfg(test)]
mod tests;
