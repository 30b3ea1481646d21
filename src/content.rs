use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(Portfolio::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub avatar_url: String,
    pub resume_url: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub phone_display: String,
    pub linkedin: SocialLink,
    pub github: SocialLink,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    /// Proficiency in percent.
    pub level: u8,
    pub description: String,
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub education: Vec<Education>,
    pub default_skill_category: String,
    pub skill_categories: Vec<SkillCategory>,
    pub projects: Vec<Project>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse portfolio content: {0}")]
    Parse(String),
    #[error("portfolio has no skill categories")]
    NoSkillCategories,
    #[error("default skill category '{0}' doesn't exist")]
    UnknownDefaultCategory(String),
    #[error("skill '{name}' has level {level}, expected 0-100")]
    SkillLevelOutOfRange { name: String, level: u8 },
    #[error("duplicate project id {0}")]
    DuplicateProject(u32),
}

impl Portfolio {
    /// Loads and validates the embedded portfolio document.
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_slice(bytes).map_err(|e| ContentError::Parse(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.skill_categories.is_empty() {
            return Err(ContentError::NoSkillCategories);
        }
        if self.category(&self.default_skill_category).is_none() {
            return Err(ContentError::UnknownDefaultCategory(
                self.default_skill_category.clone(),
            ));
        }
        if let Some(skill) = self
            .skill_categories
            .iter()
            .flat_map(|c| c.skills.iter())
            .find(|s| s.level > 100)
        {
            return Err(ContentError::SkillLevelOutOfRange {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
        }
        Ok(())
    }

    pub fn category(&self, name: &str) -> Option<&SkillCategory> {
        self.skill_categories.iter().find(|c| c.name == name)
    }
}

/// The embedded portfolio, loaded once per process.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}
