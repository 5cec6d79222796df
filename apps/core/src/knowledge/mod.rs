//! # Knowledge Module
//!
//! Everything the chatbot knows about the portfolio subject.
//!
//! ## Components
//! - `profile`: the subject's identity, bio, projects and skills
//! - `responses`: rotating phrasings for greeting, identity and fallback answers
//! - `random`: pluggable randomness used to pick phrasings
//!
//! A [`KnowledgeBase`] bundles a profile with its response bank. It can be
//! loaded from a JSON file or taken from the builtin data.

pub mod profile;
pub mod random;
pub mod responses;

pub use profile::{Education, Identity, Profile, Project, ProjectCatalog, Skills};
pub use random::{FixedRandom, RandomSource, ThreadRandom};
pub use responses::{ResponseBank, ResponseCategory};

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use validator::Validate;

/// Profile plus phrasings, as stored in a knowledge file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct KnowledgeBase {
    #[validate(nested)]
    pub profile: Profile,
    #[validate(nested)]
    pub responses: ResponseBank,
}

impl KnowledgeBase {
    pub fn builtin() -> Self {
        Self {
            profile: Profile::builtin(),
            responses: ResponseBank::builtin(),
        }
    }

    /// Parses and validates a knowledge base from JSON text.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let kb: KnowledgeBase = serde_json::from_str(json)?;
        kb.validate()?;
        Ok(kb)
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        let kb = Self::from_json(&json)?;
        info!("Loaded knowledge base for {} from {:?}", kb.profile.identity.name, path);
        Ok(kb)
    }

    /// Loads `path` when given, otherwise the builtin knowledge base.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }
}
