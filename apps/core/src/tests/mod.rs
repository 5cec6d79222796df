//! Test Module
//!
//! Cross-module tests for the portfolio companion.
//!
//! ## Test Categories
//! - `engine_tests`: rule precedence, rendering and knowledge-driven answers
//! - `chat_tests`: chat session timing, blank-input guard, reply superseding
//! - `controller_tests`: page load, theme persistence, welcome popup, navigation
//! - `support`: a recording view shared by the above

pub mod support;
