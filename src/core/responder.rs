//! Keyword intent classification for the "Digital Me" playground.
//!
//! Classification is literal, case-insensitive substring matching over an
//! ordered rule table. The first rule that matches wins, so a query such as
//! "who are your education projects" resolves to [`Topic::Identity`].
//! Substrings are not word-bounded: "network" matches `work`.

use crate::domain::profile::Profile;
use std::fmt;
use std::sync::Arc;

pub const ML_FOCUS_CATEGORY: &str = "ML Focus";
pub const FRAMEWORKS_CATEGORY: &str = "Frameworks";

const MAX_FEATURED_PROJECTS: usize = 4;
const MAX_LISTED_JOBS: usize = 4;
const MAX_LISTED_COURSES: usize = 3;

const LLM_HIGHLIGHT_BUDGET: usize = 80;
const PROJECT_SUMMARY_BUDGET: usize = 60;
const WORK_SUMMARY_BUDGET: usize = 50;

const ELLIPSIS: &str = "...";

/// Topic a query resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Clear,
    Identity,
    LlmFocus,
    Projects,
    Education,
    Skills,
    WorkHistory,
    Food,
    Hobby,
    Contact,
    Fallback,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Clear => "clear",
            Topic::Identity => "whoami",
            Topic::LlmFocus => "llm",
            Topic::Projects => "projects",
            Topic::Education => "education",
            Topic::Skills => "skills",
            Topic::WorkHistory => "experience",
            Topic::Food => "food",
            Topic::Hobby => "hobby",
            Topic::Contact => "contact",
            Topic::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// 優先順序即表格順序，不可調整
const RULES: &[(Topic, &[&str])] = &[
    (Topic::Clear, &["clear"]),
    (Topic::Identity, &["who", "whoami", "about"]),
    (Topic::LlmFocus, &["llm", "language model", "agent"]),
    (Topic::Projects, &["project"]),
    (
        Topic::Education,
        &["education", "school", "degree", "university"],
    ),
    (Topic::Skills, &["skill", "tech", "stack"]),
    (
        Topic::WorkHistory,
        &["experience", "work", "job", "company"],
    ),
    (Topic::Food, &["food", "eat", "favorite"]),
    (Topic::Hobby, &["hobby", "fun", "free time"]),
    (Topic::Contact, &["contact", "email", "reach"]),
];

pub fn classify(query: &str) -> Topic {
    let lower_query = query.to_lowercase();

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower_query.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::Fallback)
}

/// What the playground should do with a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Wipe the transcript.
    Reset,
    Text(String),
}

impl Reply {
    pub fn text(&self) -> Option<&str> {
        match self {
            Reply::Reset => None,
            Reply::Text(text) => Some(text),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntentResponder {
    profile: Arc<Profile>,
}

impl IntentResponder {
    pub fn new(profile: Arc<Profile>) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn respond(&self, query: &str) -> Reply {
        let topic = classify(query);
        tracing::debug!("Query classified as '{}'", topic);

        match topic {
            Topic::Clear => Reply::Reset,
            other => Reply::Text(self.render(other)),
        }
    }

    pub fn render(&self, topic: Topic) -> String {
        match topic {
            Topic::Clear => String::new(),
            Topic::Identity => self.identity(),
            Topic::LlmFocus => self.llm_focus(),
            Topic::Projects => self.projects(),
            Topic::Education => self.education(),
            Topic::Skills => self.skills(),
            Topic::WorkHistory => self.work_history(),
            Topic::Food => self
                .profile
                .playground
                .food
                .clone()
                .unwrap_or_else(|| "No favorite food on file yet.".to_string()),
            Topic::Hobby => self
                .profile
                .playground
                .hobby
                .clone()
                .unwrap_or_else(|| "No hobbies on file yet.".to_string()),
            Topic::Contact => self.contact(),
            Topic::Fallback => self.fallback(),
        }
    }

    fn identity(&self) -> String {
        let personal = &self.profile.personal;
        let summary = self
            .profile
            .playground
            .identity_summary
            .as_deref()
            .unwrap_or(&personal.highlight);

        if summary.trim().is_empty() {
            return personal.name.clone();
        }
        format!("{} — {}", personal.name, summary)
    }

    fn llm_focus(&self) -> String {
        let joined = |category: &str| {
            self.profile
                .skill_category(category)
                .map(|c| c.skills.join(", "))
                .unwrap_or_default()
        };

        let highlight = match &self.profile.playground.llm_highlight {
            Some(text) => text.clone(),
            None => self
                .profile
                .work_experience
                .first()
                .and_then(|w| w.highlights.first())
                .map(|h| summarize(h, LLM_HIGHLIGHT_BUDGET))
                .unwrap_or_else(|| "No work highlights on file yet.".to_string()),
        };

        format!(
            "LLM Expertise: {}\nFrameworks: {}\n\n{}",
            joined(ML_FOCUS_CATEGORY),
            joined(FRAMEWORKS_CATEGORY),
            highlight
        )
    }

    fn projects(&self) -> String {
        if self.profile.projects.is_empty() {
            return "Featured Projects:\nNo projects on file yet.".to_string();
        }

        let overrides = &self.profile.playground.project_summaries;
        let project_list = self
            .profile
            .projects
            .iter()
            .take(MAX_FEATURED_PROJECTS)
            .map(|p| {
                let summary = overrides.get(&p.name).cloned().unwrap_or_else(|| {
                    p.description
                        .first()
                        .map(|d| summarize(d, PROJECT_SUMMARY_BUDGET))
                        .unwrap_or_default()
                });
                format!("• {}: {}", p.name, summary)
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("Featured Projects:\n{}", project_list)
    }

    fn education(&self) -> String {
        if self.profile.education.is_empty() {
            return "Education Background:\nNo education on file yet.".to_string();
        }

        let details = self
            .profile
            .education
            .iter()
            .map(|e| {
                let honors = e
                    .honors
                    .as_deref()
                    .map(|h| format!(" | {}", h))
                    .unwrap_or_default();
                let courses = e
                    .courses
                    .iter()
                    .take(MAX_LISTED_COURSES)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "• {} @ {}\n  GPA: {}{}\n  Key Courses: {}",
                    e.degree, e.institution, e.gpa, honors, courses
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("Education Background:\n{}", details)
    }

    fn skills(&self) -> String {
        if self.profile.skills.is_empty() {
            return "Technical Skills:\nNo skills on file yet.".to_string();
        }

        let skill_list = self
            .profile
            .skills
            .iter()
            .map(|s| format!("• {}: {}", s.category, s.skills.join(", ")))
            .collect::<Vec<_>>()
            .join("\n");

        format!("Technical Skills:\n{}", skill_list)
    }

    fn work_history(&self) -> String {
        if self.profile.work_experience.is_empty() {
            return "Work Experience:\nNo work experience on file yet.".to_string();
        }

        let overrides = &self.profile.playground.work_summaries;
        let exp_list = self
            .profile
            .work_experience
            .iter()
            .take(MAX_LISTED_JOBS)
            .map(|w| {
                let summary = overrides.get(&w.company).cloned().unwrap_or_else(|| {
                    w.highlights
                        .first()
                        .map(|h| summarize(h, WORK_SUMMARY_BUDGET))
                        .unwrap_or_default()
                });
                format!(
                    "• {} @ {} ({} - {})\n  {}",
                    w.title, w.company, w.start_date, w.end_date, summary
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("Work Experience:\n{}", exp_list)
    }

    fn contact(&self) -> String {
        let personal = &self.profile.personal;
        let mut lines = vec![format!("📧 Email: {}", personal.email)];
        if let Some(linkedin) = &personal.linkedin {
            lines.push(format!("🔗 LinkedIn: {}", linkedin));
        }
        if let Some(github) = &personal.github {
            lines.push(format!("💻 GitHub: {}", github));
        }
        lines.join("\n")
    }

    fn fallback(&self) -> String {
        format!(
            "I can answer questions about {}'s skills, LLM experience, projects, education, work history, and even favorite food! Try asking something specific.",
            self.profile.first_name()
        )
    }
}

/// Strips markdown bold markers and cuts to `budget` characters.
pub fn summarize(text: &str, budget: usize) -> String {
    truncate_chars(&text.replace("**", ""), budget)
}

pub fn truncate_chars(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => format!("{}{}", text[..idx].trim_end(), ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{
        Education, PersonalInfo, Project, SkillCategory, WorkExperience,
    };

    fn sample_profile() -> Profile {
        Profile {
            personal: PersonalInfo {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                github: Some("https://github.com/ada".to_string()),
                highlight: "Analyst of engines.".to_string(),
                ..Default::default()
            },
            education: vec![Education {
                institution: "University of London".to_string(),
                degree: "Mathematics".to_string(),
                start_date: "1830".to_string(),
                end_date: "1835".to_string(),
                gpa: "4.0".to_string(),
                honors: Some("First".to_string()),
                courses: vec![
                    "Calculus".to_string(),
                    "Logic".to_string(),
                    "Algebra".to_string(),
                    "Poetry".to_string(),
                ],
            }],
            skills: vec![
                SkillCategory {
                    category: ML_FOCUS_CATEGORY.to_string(),
                    skills: vec!["LLM".to_string(), "RAG".to_string()],
                },
                SkillCategory {
                    category: FRAMEWORKS_CATEGORY.to_string(),
                    skills: vec!["Analytical Engine".to_string()],
                },
            ],
            work_experience: vec![WorkExperience {
                company: "Babbage & Co".to_string(),
                location: "London".to_string(),
                title: "Programmer".to_string(),
                team: None,
                start_date: "1842".to_string(),
                end_date: "1843".to_string(),
                highlights: vec![
                    "Wrote the **first** published algorithm intended for a machine, computing Bernoulli numbers on the Analytical Engine.".to_string(),
                ],
            }],
            projects: (1..=5)
                .map(|i| Project {
                    name: format!("Project {}", i),
                    platform: None,
                    link: None,
                    start_date: "1840".to_string(),
                    end_date: "1841".to_string(),
                    description: vec![format!("Short note {}.", i)],
                })
                .collect(),
            ..Default::default()
        }
    }

    fn responder() -> IntentResponder {
        IntentResponder::new(Arc::new(sample_profile()))
    }

    #[test]
    fn test_classify_each_topic() {
        assert_eq!(classify("clear"), Topic::Clear);
        assert_eq!(classify("whoami"), Topic::Identity);
        assert_eq!(classify("Tell me ABOUT yourself"), Topic::Identity);
        assert_eq!(classify("any LLM work?"), Topic::LlmFocus);
        assert_eq!(classify("large language model"), Topic::LlmFocus);
        assert_eq!(classify("list projects"), Topic::Projects);
        assert_eq!(classify("your degree"), Topic::Education);
        assert_eq!(classify("tech stack"), Topic::Skills);
        assert_eq!(classify("previous job"), Topic::WorkHistory);
        assert_eq!(classify("pizza or food"), Topic::Food);
        assert_eq!(classify("hobby"), Topic::Hobby);
        assert_eq!(classify("contact"), Topic::Contact);
        assert_eq!(classify("hello there"), Topic::Fallback);
        assert_eq!(classify(""), Topic::Fallback);
    }

    #[test]
    fn test_clear_wins_over_everything() {
        assert_eq!(classify("who is clear about projects"), Topic::Clear);
        assert_eq!(classify("CLEAR"), Topic::Clear);
        assert_eq!(classify("unclearly"), Topic::Clear);
        assert_eq!(responder().respond("please Clear the screen"), Reply::Reset);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(classify("who are your education projects"), Topic::Identity);
        assert_eq!(classify("agent project"), Topic::LlmFocus);
        assert_eq!(classify("project at university"), Topic::Projects);
        assert_eq!(classify("school skills"), Topic::Education);
        assert_eq!(classify("tech job"), Topic::Skills);
        assert_eq!(classify("work email"), Topic::WorkHistory);
    }

    #[test]
    fn test_substring_semantics_are_literal() {
        // "network" 包含 "work"，"great" 包含 "eat"
        assert_eq!(classify("network"), Topic::WorkHistory);
        assert_eq!(classify("great"), Topic::Food);
        assert_eq!(classify("refunds"), Topic::Hobby);
    }

    #[test]
    fn test_identity_uses_highlight_without_override() {
        let reply = responder().respond("who are you");
        assert_eq!(
            reply,
            Reply::Text("Ada Lovelace — Analyst of engines.".to_string())
        );
    }

    #[test]
    fn test_llm_focus_renders_skills_and_highlight() {
        let text = responder().render(Topic::LlmFocus);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "LLM Expertise: LLM, RAG");
        assert_eq!(lines[1], "Frameworks: Analytical Engine");
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("Wrote the first published algorithm"));
        assert!(lines[3].ends_with("..."));
        assert!(!lines[3].contains("**"));
    }

    #[test]
    fn test_projects_capped_at_four() {
        let text = responder().render(Topic::Projects);
        assert!(text.starts_with("Featured Projects:\n"));
        assert!(text.contains("• Project 1: Short note 1."));
        assert!(text.contains("• Project 4: Short note 4."));
        assert!(!text.contains("Project 5"));
    }

    #[test]
    fn test_project_override_takes_precedence() {
        let mut profile = sample_profile();
        profile
            .playground
            .project_summaries
            .insert("Project 2".to_string(), "Hand-written blurb".to_string());
        let text = IntentResponder::new(Arc::new(profile)).render(Topic::Projects);
        assert!(text.contains("• Project 2: Hand-written blurb"));
    }

    #[test]
    fn test_education_lists_three_courses_and_honors() {
        let text = responder().render(Topic::Education);
        assert_eq!(
            text,
            "Education Background:\n• Mathematics @ University of London\n  GPA: 4.0 | First\n  Key Courses: Calculus, Logic, Algebra"
        );
    }

    #[test]
    fn test_skills_lists_every_category() {
        let text = responder().render(Topic::Skills);
        assert_eq!(
            text,
            "Technical Skills:\n• ML Focus: LLM, RAG\n• Frameworks: Analytical Engine"
        );
    }

    #[test]
    fn test_work_history_truncates_highlight() {
        let text = responder().render(Topic::WorkHistory);
        assert!(text.starts_with("Work Experience:\n• Programmer @ Babbage & Co (1842 - 1843)\n  "));
        let summary = text.lines().last().unwrap().trim();
        assert!(summary.ends_with("..."));
        assert!(summary.chars().count() <= WORK_SUMMARY_BUDGET + ELLIPSIS.len());
    }

    #[test]
    fn test_contact_skips_missing_links() {
        let text = responder().render(Topic::Contact);
        assert_eq!(
            text,
            "📧 Email: ada@example.com\n💻 GitHub: https://github.com/ada"
        );
    }

    #[test]
    fn test_fallback_mentions_first_name() {
        let reply = responder().respond("hello there");
        let text = reply.text().unwrap();
        assert!(text.starts_with("I can answer questions about Ada's skills"));
    }

    #[test]
    fn test_empty_profile_degrades_gracefully() {
        let mut profile = Profile::default();
        profile.personal.name = "Nobody".to_string();
        let responder = IntentResponder::new(Arc::new(profile));

        for query in [
            "who", "llm", "project", "education", "skills", "work", "food", "hobby", "email",
            "???",
        ] {
            let reply = responder.respond(query);
            assert!(reply.text().is_some_and(|t| !t.is_empty()), "query: {}", query);
        }
        assert!(responder
            .render(Topic::Projects)
            .contains("No projects on file yet."));
    }

    #[test]
    fn test_respond_is_idempotent() {
        let responder = responder();
        for query in ["who", "projects", "work", "nothing matches"] {
            assert_eq!(responder.respond(query), responder.respond(query));
        }
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_chars("ab cd", 3), "ab...");
    }
}
