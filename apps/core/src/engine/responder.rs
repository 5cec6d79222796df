//! Response Engine - turns an utterance into a rendered answer.
//!
//! Classification goes through the [`RuleTable`]; rendering interpolates the
//! profile and draws rotating phrasings from the [`ResponseBank`]. The engine
//! keeps no conversation state, so the same input always draws from the same
//! candidate pool.

use super::rules::{ProjectFocus, RuleMatch, RuleTable, Topic};
use crate::error::AppError;
use crate::knowledge::{KnowledgeBase, Profile, Project, RandomSource, ResponseBank, ResponseCategory};
use crate::models::ChatResult;
use std::sync::Arc;
use tracing::debug;

/// Stateless FAQ responder for one portfolio subject.
pub struct ResponseEngine {
    profile: Profile,
    responses: ResponseBank,
    rules: RuleTable,
    random: Arc<dyn RandomSource>,
}

impl ResponseEngine {
    pub fn new(knowledge: KnowledgeBase, random: Arc<dyn RandomSource>) -> Result<Self, AppError> {
        let rules = RuleTable::for_subject(knowledge.profile.first_name())
            .map_err(|e| AppError::Internal(format!("Failed to compile rule table: {}", e)))?;
        Ok(Self {
            profile: knowledge.profile,
            responses: knowledge.responses,
            rules,
            random,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Classifies `utterance` and renders the answer. Never fails.
    pub fn classify(&self, utterance: &str) -> ChatResult {
        let normalized = utterance.to_lowercase();
        let matched = self.rules.classify(&normalized);
        debug!(
            topic = %matched.topic,
            keyword = ?matched.keyword,
            focus = ?matched.project_focus,
            "Utterance classified"
        );
        self.render(&matched)
    }

    /// The bot's opening message when the chat widget loads.
    pub fn welcome(&self) -> ChatResult {
        let first = self.profile.first_name();
        ChatResult::new(
            Topic::Greeting,
            format!(
                "Hello! I'm {}'s AI Assistant. I've been trained on his professional profile. How can I help you today? 🤖",
                first
            ),
            vec![
                format!("Tell me about {}", first),
                "Show his Projects".to_string(),
                "What are his Skills?".to_string(),
                "Contact Info".to_string(),
            ],
        )
    }

    fn render(&self, matched: &RuleMatch) -> ChatResult {
        let profile = &self.profile;
        let first = profile.first_name();

        match matched.topic {
            Topic::Greeting => ChatResult::new(
                Topic::Greeting,
                self.phrase(ResponseCategory::Greeting),
                vec![
                    format!("Who is {}?", first),
                    "What projects has he made?".to_string(),
                    "Skills & Tools".to_string(),
                ],
            ),
            Topic::AssistantIdentity => ChatResult::new(
                Topic::AssistantIdentity,
                self.phrase(ResponseCategory::Identity),
                vec![format!("Tell me about {}", first), "Show me his projects".to_string()],
            ),
            Topic::SubjectBio => ChatResult::new(
                Topic::SubjectBio,
                format!(
                    "{} He is open to internships and collaborative projects in {}.",
                    profile.bio, profile.identity.location
                ),
                chips(&["His Education", "His Career Vision", "Contact Him"]),
            ),
            Topic::Education => ChatResult::new(
                Topic::Education,
                format!(
                    "🎓 **Education**: {}\n\n💡 **Philosophy**: {}",
                    profile.education.academic, profile.education.philosophy
                ),
                chips(&["What are his skills?", "View Projects"]),
            ),
            Topic::Skills => ChatResult::new(
                Topic::Skills,
                format!(
                    "💻 **Tech Stack:**\n\n• **Languages**: {}\n• **Concepts**: {}\n• **Tools**: {}.",
                    profile.skills.languages.join(", "),
                    profile.skills.concepts.join(", "),
                    profile.skills.featured_tools.join(", ")
                ),
                chips(&["See Java Projects", "See Web Projects"]),
            ),
            Topic::Projects => self.render_projects(matched.project_focus.unwrap_or(ProjectFocus::Overview)),
            Topic::Philosophy => ChatResult::new(
                Topic::Philosophy,
                format!("🧠 **{}'s Philosophy:**\n\"{}\"", first, profile.philosophy),
                chips(&["His Career Goals", "Projects"]),
            ),
            Topic::Career => ChatResult::new(
                Topic::Career,
                format!("🚀 **Career Vision:**\n{}", profile.career_vision),
                chips(&["Hire Him", "View Resume"]),
            ),
            Topic::Contact => ChatResult::new(
                Topic::Contact,
                format!(
                    "📬 **Get in Touch:**\n\n📧 Email: {}\n📱 Phone: {}\n\nOr use the form below!",
                    profile.identity.email, profile.identity.phone
                ),
                chips(&["LinkedIn Profile", "GitHub Profile"]),
            ),
            Topic::Resume => ChatResult::new(
                Topic::Resume,
                "📄 You can download his resume from the top right button on the navbar!",
                Vec::new(),
            ),
            Topic::SmallTalk => ChatResult::new(
                Topic::SmallTalk,
                "You're welcome! Glad I could help. 😊 Is there anything else you'd like to know?",
                chips(&["Show Projects", "Contact Info"]),
            ),
            Topic::Fallback => ChatResult::new(
                Topic::Fallback,
                self.phrase(ResponseCategory::Fallback),
                vec![
                    format!("Tell me about {}", first),
                    "Show Projects".to_string(),
                    "Contact Info".to_string(),
                ],
            ),
        }
    }

    fn render_projects(&self, focus: ProjectFocus) -> ChatResult {
        let catalog = &self.profile.projects;
        match focus {
            ProjectFocus::Java => ChatResult::new(
                Topic::Projects,
                project_block("☕ **Java Projects:**", &catalog.java),
                chips(&["What about Web Projects?", "His Coding Philosophy"]),
            ),
            ProjectFocus::Web => ChatResult::new(
                Topic::Projects,
                project_block("🌐 **Web Projects:**", &catalog.web),
                chips(&["What about Java Projects?", "Contact Info"]),
            ),
            ProjectFocus::Overview => ChatResult::new(
                Topic::Projects,
                format!(
                    "{} has diverse projects in **Web Development** ({}) and **Java** ({}). Which area interests you?",
                    self.profile.first_name(),
                    project_names(&catalog.web),
                    project_names(&catalog.java)
                ),
                chips(&["Show Web Projects", "Show Java Projects"]),
            ),
        }
    }

    fn phrase(&self, category: ResponseCategory) -> String {
        self.responses.pick(category, self.random.as_ref()).to_string()
    }
}

fn chips(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project_block(heading: &str, projects: &[Project]) -> String {
    let lines: Vec<String> = projects
        .iter()
        .map(|p| format!("• **{}** ({}): {}", p.name, p.tech, p.details))
        .collect();
    format!("{}\n\n{}", heading, lines.join("\n"))
}

fn project_names(projects: &[Project]) -> String {
    projects.iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::FixedRandom;

    fn engine_with(random: FixedRandom) -> ResponseEngine {
        ResponseEngine::new(KnowledgeBase::builtin(), Arc::new(random)).unwrap()
    }

    #[test]
    fn test_greeting_picks_injected_index() {
        let engine = engine_with(FixedRandom::constant(1));
        let result = engine.classify("hey");
        assert_eq!(result.text, ResponseBank::builtin().phrases(ResponseCategory::Greeting)[1]);
    }

    #[test]
    fn test_bio_interpolates_location() {
        let engine = engine_with(FixedRandom::constant(0));
        let result = engine.classify("tell me about him");
        assert_eq!(result.topic, Topic::SubjectBio);
        assert!(result.text.starts_with(&engine.profile().bio));
        assert!(result.text.ends_with("collaborative projects in India."));
    }

    #[test]
    fn test_resume_has_no_suggestions() {
        let engine = engine_with(FixedRandom::constant(0));
        let result = engine.classify("can I get a CV");
        assert_eq!(result.topic, Topic::Resume);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_welcome_suggestions() {
        let engine = engine_with(FixedRandom::constant(0));
        assert_eq!(
            engine.welcome().suggestions,
            vec!["Tell me about Raunak", "Show his Projects", "What are his Skills?", "Contact Info"]
        );
    }
}
