//! Static description of the portfolio subject.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Who the subject is and how to reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Identity {
    #[validate(length(min = 1))]
    pub name: String,
    pub role: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde(default)]
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Education {
    #[validate(length(min = 1))]
    pub academic: String,
    /// How the subject approaches learning.
    #[validate(length(min = 1))]
    pub philosophy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Project {
    #[validate(length(min = 1))]
    pub name: String,
    pub tech: String,
    pub details: String,
}

/// Projects grouped by area, each list in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProjectCatalog {
    #[validate(nested)]
    pub web: Vec<Project>,
    #[validate(nested)]
    pub java: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    #[validate(length(min = 1))]
    pub languages: Vec<String>,
    #[validate(length(min = 1))]
    pub concepts: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    /// Short tool list quoted by the chatbot's tech-stack answer.
    #[validate(length(min = 1))]
    pub featured_tools: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(nested)]
    pub identity: Identity,
    #[validate(length(min = 1))]
    pub bio: String,
    #[validate(nested)]
    pub education: Education,
    #[validate(nested)]
    pub projects: ProjectCatalog,
    #[validate(nested)]
    pub skills: Skills,
    #[validate(length(min = 1))]
    pub philosophy: String,
    #[validate(length(min = 1))]
    pub career_vision: String,
}

impl Profile {
    /// First word of the subject's name, used in suggestion chips and rule keywords.
    pub fn first_name(&self) -> &str {
        self.identity
            .name
            .split_whitespace()
            .next()
            .unwrap_or(self.identity.name.as_str())
    }

    /// The profile the site ships with.
    pub fn builtin() -> Self {
        Self {
            identity: Identity {
                name: "Raunak Sharma".into(),
                role: "Aspiring Software Developer | Web Developer | Java Programmer".into(),
                phone: "+91 8863073643".into(),
                email: "raunaksharma88630mt@gmail.com".into(),
                location: "India".into(),
                availability: "Open to internships, learning opportunities, and collaborative projects".into(),
            },
            bio: "Raunak Sharma is a passionate and self-motivated software developer with a strong interest in web development, Java programming, and modern digital solutions. He enjoys building interactive, realistic, and user-friendly applications that focus on both functionality and user experience. He approaches development with curiosity, patience, and a strong desire to understand how things work behind the scenes.".into(),
            education: Education {
                academic: "Pursuing Computer Science and Software Development fundamentals.".into(),
                philosophy: "Raunak actively invests time in self-learning. He studies programming fundamentals deeply, builds real-world projects, destroys and fixes systems to learn, and focuses on debugging and optimization.".into(),
            },
            projects: ProjectCatalog {
                web: vec![
                    Project {
                        name: "Personal Portfolio Website".into(),
                        tech: "HTML, CSS, JavaScript".into(),
                        details: "Fully responsive, dark/light mode toggle, dynamic time-based greetings, smooth animations, and hosted on GitHub Pages.".into(),
                    },
                    Project {
                        name: "Contact & User Interaction System".into(),
                        tech: "HTML, JS, Google Forms".into(),
                        details: "Features email-based message delivery, Google Form integration for feedback, and realistic UI transitions.".into(),
                    },
                ],
                java: vec![
                    Project {
                        name: "Number Game".into(),
                        tech: "Java Console".into(),
                        details: "Uses loops, conditionals, and user input to strengthen logical thinking and flow control.".into(),
                    },
                    Project {
                        name: "Student Grade Calculator".into(),
                        tech: "Java".into(),
                        details: "Calculates grades based on conditions, demonstrating decision-making and input validation.".into(),
                    },
                    Project {
                        name: "ATM Interface".into(),
                        tech: "Java".into(),
                        details: "Simulates real-world ATM operations (balance, deposit, withdrawal) using core Java concepts.".into(),
                    },
                ],
            },
            skills: Skills {
                languages: strings(&["Java", "JavaScript", "HTML", "CSS"]),
                concepts: strings(&[
                    "Object-Oriented Programming (OOP)",
                    "DOM Manipulation",
                    "Responsive Web Design",
                    "UI/UX Fundamentals",
                    "Logic Building",
                    "Debugging & Optimization",
                ]),
                tools: strings(&["Git & GitHub", "GitHub Pages", "Replit", "Google Antigravity IDE", "VS Code"]),
                featured_tools: strings(&["VS Code", "Replit", "Google Antigravity IDE"]),
            },
            philosophy: "Raunak strongly believes that learning is an endless process. He continuously works on improving his skills, revisiting fundamentals, and exploring new tools. Mistakes are seen as learning opportunities, and growth is treated as a daily habit.".into(),
            career_vision: "To become a proficient full-stack software developer, work on meaningful real-world applications, build intelligent AI-assisted systems, and contribute positively to the technology ecosystem.".into(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
