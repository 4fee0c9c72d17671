//! Profile record: the biography, skills, work history and projects that
//! drive every playground answer. Loaded once and shared read-only.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub playground: PlaygroundText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    #[serde(default)]
    pub highlight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub honors: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub title: String,
    pub team: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub platform: Option<String>,
    pub link: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub description: Vec<String>,
}

/// Hand-written playground overrides. Anything left out falls back to text
/// derived from the structured sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundText {
    pub identity_summary: Option<String>,
    pub llm_highlight: Option<String>,
    #[serde(default)]
    pub project_summaries: HashMap<String, String>,
    #[serde(default)]
    pub work_summaries: HashMap<String, String>,
    pub food: Option<String>,
    pub hobby: Option<String>,
}

impl Profile {
    pub fn skill_category(&self, category: &str) -> Option<&SkillCategory> {
        self.skills.iter().find(|s| s.category == category)
    }

    pub fn first_name(&self) -> &str {
        self.personal
            .name
            .split_whitespace()
            .next()
            .unwrap_or("me")
    }
}
