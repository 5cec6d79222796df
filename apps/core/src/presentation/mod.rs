//! # Presentation Module
//!
//! Page behaviour around the chatbot: everything here is glue between user
//! events, a key-value store and a render sink.
//!
//! ## Components
//! - `controller`: greeting, typing animation, theme, welcome popup, navigation
//! - `chat`: the chatbot widget session and its reply timer
//! - `storage`: `KeyValueStore` with in-memory and JSON-file backends
//! - `view`: render sink traits (`PageView`, `ChatView`)
//! - `terminal`: a stdout implementation of both views

pub mod chat;
pub mod clock;
pub mod controller;
pub mod greeting;
pub mod navigation;
pub mod storage;
pub mod terminal;
pub mod theme;
pub mod typing;
pub mod view;
pub mod welcome;

pub use chat::ChatSession;
pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::PresentationController;
pub use navigation::SectionBounds;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use terminal::TerminalView;
pub use theme::Theme;
pub use typing::{TypingAnimator, TypingFrame};
pub use view::{ChatView, PageView};
pub use welcome::{NameSubmission, WelcomeState};
