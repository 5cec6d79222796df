//! Ordered keyword rules for FAQ intent detection.
//!
//! Each rule is a fixed keyword set compiled into one whole-word regex.
//! Rules are scanned in table order and the first match wins; there is no
//! scoring. Input is expected to be lower-cased already.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a user asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// hello, hi, hey...
    Greeting,
    /// Questions about the assistant itself ("who are you")
    AssistantIdentity,
    /// Questions about the portfolio subject ("who is ...", "bio")
    SubjectBio,
    Education,
    Skills,
    Projects,
    Philosophy,
    Career,
    Contact,
    Resume,
    /// Thanks and compliments
    SmallTalk,
    /// Nothing matched
    Fallback,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Greeting => "greeting",
            Topic::AssistantIdentity => "assistant_identity",
            Topic::SubjectBio => "subject_bio",
            Topic::Education => "education",
            Topic::Skills => "skills",
            Topic::Projects => "projects",
            Topic::Philosophy => "philosophy",
            Topic::Career => "career",
            Topic::Contact => "contact",
            Topic::Resume => "resume",
            Topic::SmallTalk => "small_talk",
            Topic::Fallback => "fallback",
        }
    }
}

/// Which project list a projects question is after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectFocus {
    Java,
    Web,
    /// No area named; answer with a summary of both.
    Overview,
}

pub const GREETING_KEYWORDS: &[&str] = &["hi", "hello", "hey", "greetings", "start", "begin"];
pub const ASSISTANT_IDENTITY_KEYWORDS: &[&str] = &["who are you", "your name"];
/// "who is <first name>" is added per subject.
pub const SUBJECT_BIO_KEYWORDS: &[&str] = &["about", "bio", "intro", "profile"];
pub const EDUCATION_KEYWORDS: &[&str] = &["education", "study", "degree", "college", "university", "learning"];
pub const SKILLS_KEYWORDS: &[&str] = &["skills", "stack", "tech", "languages", "tools", "ide", "concepts"];
pub const PROJECTS_KEYWORDS: &[&str] = &["projects", "work", "built", "app", "code", "web", "java"];
pub const PHILOSOPHY_KEYWORDS: &[&str] = &["philosophy", "mindset", "approach", "style", "process"];
pub const CAREER_KEYWORDS: &[&str] = &["goal", "vision", "future", "career", "aim"];
pub const CONTACT_KEYWORDS: &[&str] = &["contact", "email", "phone", "call", "hire", "reach"];
pub const RESUME_KEYWORDS: &[&str] = &["resume", "cv", "download"];
pub const SMALL_TALK_KEYWORDS: &[&str] = &["cool", "awesome", "great", "thanks", "thank you", "good job"];

pub const JAVA_FOCUS_KEYWORDS: &[&str] = &["java", "console"];
pub const WEB_FOCUS_KEYWORDS: &[&str] = &["web", "site", "html"];

/// A keyword set that resolves to `target` when any keyword occurs as a whole word.
#[derive(Debug, Clone)]
pub struct Rule<T> {
    target: T,
    keywords: Vec<String>,
    pattern: Regex,
}

impl<T: Copy> Rule<T> {
    pub fn new<S: AsRef<str>>(target: T, keywords: &[S]) -> Result<Self, regex::Error> {
        let keywords: Vec<String> = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();
        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"\b(?:{})\b", alternation))?;
        Ok(Self {
            target,
            keywords,
            pattern,
        })
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First keyword occurrence in `text`, if any.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern.find(text).map(|m| m.as_str())
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Outcome of scanning the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    pub topic: Topic,
    /// The keyword occurrence that fired the rule (`None` for fallback).
    pub keyword: Option<String>,
    /// Set only for `Topic::Projects`.
    pub project_focus: Option<ProjectFocus>,
}

/// The full priority list, plus the nested project sub-rules.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<Rule<Topic>>,
    project_rules: Vec<Rule<ProjectFocus>>,
}

impl RuleTable {
    /// Builds the table for a subject whose first name is `subject`.
    pub fn for_subject(subject: &str) -> Result<Self, regex::Error> {
        let who_is = format!("who is {}", subject.trim().to_lowercase());
        let mut bio_keywords = vec![who_is.as_str()];
        bio_keywords.extend_from_slice(SUBJECT_BIO_KEYWORDS);

        let rules = vec![
            Rule::new(Topic::Greeting, GREETING_KEYWORDS)?,
            Rule::new(Topic::AssistantIdentity, ASSISTANT_IDENTITY_KEYWORDS)?,
            Rule::new(Topic::SubjectBio, bio_keywords.as_slice())?,
            Rule::new(Topic::Education, EDUCATION_KEYWORDS)?,
            Rule::new(Topic::Skills, SKILLS_KEYWORDS)?,
            Rule::new(Topic::Projects, PROJECTS_KEYWORDS)?,
            Rule::new(Topic::Philosophy, PHILOSOPHY_KEYWORDS)?,
            Rule::new(Topic::Career, CAREER_KEYWORDS)?,
            Rule::new(Topic::Contact, CONTACT_KEYWORDS)?,
            Rule::new(Topic::Resume, RESUME_KEYWORDS)?,
            Rule::new(Topic::SmallTalk, SMALL_TALK_KEYWORDS)?,
        ];

        let project_rules = vec![
            Rule::new(ProjectFocus::Java, JAVA_FOCUS_KEYWORDS)?,
            Rule::new(ProjectFocus::Web, WEB_FOCUS_KEYWORDS)?,
        ];

        Ok(Self {
            rules,
            project_rules,
        })
    }

    /// Top-level rules in priority order.
    pub fn rules(&self) -> &[Rule<Topic>] {
        &self.rules
    }

    /// Project sub-rules in priority order.
    pub fn project_rules(&self) -> &[Rule<ProjectFocus>] {
        &self.project_rules
    }

    /// Scans the table against already lower-cased `text`.
    pub fn classify(&self, text: &str) -> RuleMatch {
        for rule in &self.rules {
            if let Some(keyword) = rule.find(text) {
                let project_focus = (rule.target() == Topic::Projects).then(|| self.project_focus(text));
                return RuleMatch {
                    topic: rule.target(),
                    keyword: Some(keyword.to_string()),
                    project_focus,
                };
            }
        }

        RuleMatch {
            topic: Topic::Fallback,
            keyword: None,
            project_focus: None,
        }
    }

    fn project_focus(&self, text: &str) -> ProjectFocus {
        self.project_rules
            .iter()
            .find(|rule| rule.matches(text))
            .map(|rule| rule.target())
            .unwrap_or(ProjectFocus::Overview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::for_subject("Raunak").unwrap()
    }

    #[test]
    fn test_table_order() {
        let order: Vec<Topic> = table().rules().iter().map(|r| r.target()).collect();
        assert_eq!(
            order,
            vec![
                Topic::Greeting,
                Topic::AssistantIdentity,
                Topic::SubjectBio,
                Topic::Education,
                Topic::Skills,
                Topic::Projects,
                Topic::Philosophy,
                Topic::Career,
                Topic::Contact,
                Topic::Resume,
                Topic::SmallTalk,
            ]
        );
    }

    #[test]
    fn test_subject_keyword_is_lowercased() {
        let table = table();
        assert!(table.rules()[2].keywords().contains(&"who is raunak".to_string()));
        assert_eq!(table.classify("who is raunak?").topic, Topic::SubjectBio);
    }

    #[test]
    fn test_whole_word_matching() {
        let table = table();
        // "this" contains "hi", "javascript" contains "java"
        assert_eq!(table.classify("this").topic, Topic::Fallback);
        assert_eq!(table.classify("javascript").topic, Topic::Fallback);
        assert_eq!(table.classify("java").topic, Topic::Projects);
    }

    #[test]
    fn test_multi_word_keywords() {
        let table = table();
        assert_eq!(table.classify("what is your name").topic, Topic::AssistantIdentity);
        assert_eq!(table.classify("good job").topic, Topic::SmallTalk);
        assert_eq!(table.classify("thank you!").topic, Topic::SmallTalk);
    }

    #[test]
    fn test_first_match_wins() {
        let result = table().classify("education and projects");
        assert_eq!(result.topic, Topic::Education);
        assert_eq!(result.keyword.as_deref(), Some("education"));
        assert_eq!(result.project_focus, None);
    }

    #[test]
    fn test_project_focus() {
        let table = table();
        assert_eq!(
            table.classify("java or web projects?").project_focus,
            Some(ProjectFocus::Java)
        );
        assert_eq!(
            table.classify("any web projects").project_focus,
            Some(ProjectFocus::Web)
        );
        assert_eq!(
            table.classify("what has he built").project_focus,
            Some(ProjectFocus::Overview)
        );
        // whole-word here too: "javascript" is not "java"
        assert_eq!(
            table.classify("javascript projects").project_focus,
            Some(ProjectFocus::Overview)
        );
    }

    #[test]
    fn test_fallback_has_no_keyword() {
        let result = table().classify("xyzzy");
        assert_eq!(result.topic, Topic::Fallback);
        assert!(result.keyword.is_none());
    }

    #[test]
    fn test_keywords_are_escaped() {
        let rule = Rule::new(Topic::Skills, &["node.js"]).unwrap();
        assert_eq!(rule.find("i use node.js daily"), Some("node.js"));
        assert!(!rule.matches("nodexjs"));
    }
}
