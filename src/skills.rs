use thiserror::Error;

use crate::content::{Skill, SkillCategory};
use crate::hover::HoverState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkillPanelError {
    #[error("a skill panel needs at least one category")]
    NoCategories,
    #[error("unknown skill category: {0}")]
    UnknownCategory(String),
}

/// Tab selection plus tooltip hover for the skills section.
///
/// Exactly one category is selected at any time. The tooltip only shows for
/// a hovered skill that is part of the selected category, so switching tabs
/// while hovering hides it.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillPanel {
    categories: Vec<SkillCategory>,
    selected: usize,
    hover: HoverState<String>,
}

impl SkillPanel {
    pub fn new(categories: Vec<SkillCategory>, default: &str) -> Result<Self, SkillPanelError> {
        if categories.is_empty() {
            return Err(SkillPanelError::NoCategories);
        }
        let selected = categories
            .iter()
            .position(|c| c.name == default)
            .ok_or_else(|| SkillPanelError::UnknownCategory(default.to_string()))?;
        Ok(Self {
            categories,
            selected,
            hover: HoverState::new(),
        })
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    pub fn selected(&self) -> &SkillCategory {
        &self.categories[self.selected]
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected().name == name
    }

    /// Switches tabs. Unknown names leave the selection alone.
    pub fn select(&mut self, name: &str) -> bool {
        match self.categories.iter().position(|c| c.name == name) {
            Some(i) => {
                self.selected = i;
                true
            }
            None => false,
        }
    }

    pub fn visible_skills(&self) -> &[Skill] {
        &self.selected().skills
    }

    pub fn pointer_enter(&mut self, skill: &str) {
        self.hover.enter(skill.to_string());
    }

    pub fn pointer_leave(&mut self, skill: &str) {
        self.hover.leave(&skill.to_string());
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hover.hovered().map(String::as_str)
    }

    pub fn tooltip(&self) -> Option<&Skill> {
        let hovered = self.hover.hovered()?;
        self.visible_skills().iter().find(|s| &s.name == hovered)
    }
}

/// Width of a skill's proficiency bar.
pub fn level_width(level: u8) -> String {
    format!("{}%", level.min(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, level: u8) -> Skill {
        Skill {
            name: name.to_string(),
            icon: String::new(),
            level,
            description: format!("{name} things"),
            projects: vec![],
        }
    }

    fn categories() -> Vec<SkillCategory> {
        vec![
            SkillCategory {
                name: "Programming".to_string(),
                icon: String::new(),
                skills: vec![skill("Java", 85), skill("Python", 80)],
            },
            SkillCategory {
                name: "Frontend".to_string(),
                icon: String::new(),
                skills: vec![skill("HTML", 90), skill("CSS", 85)],
            },
            SkillCategory {
                name: "Tools".to_string(),
                icon: String::new(),
                skills: vec![skill("Figma", 75)],
            },
        ]
    }

    #[test]
    fn test_new_panel_selects_default() {
        let panel = SkillPanel::new(categories(), "Frontend").unwrap();
        assert!(panel.is_selected("Frontend"));
        assert_eq!(panel.visible_skills().len(), 2);
        assert_eq!(panel.tooltip(), None);
    }

    #[test]
    fn test_new_panel_errors() {
        assert_eq!(
            SkillPanel::new(vec![], "Programming").unwrap_err(),
            SkillPanelError::NoCategories
        );
        assert_eq!(
            SkillPanel::new(categories(), "Cooking").unwrap_err(),
            SkillPanelError::UnknownCategory("Cooking".to_string())
        );
    }

    #[test]
    fn test_single_category_panel() {
        let mut cats = categories();
        cats.truncate(1);
        let mut panel = SkillPanel::new(cats, "Programming").unwrap();
        assert!(panel.select("Programming"));
        assert!(!panel.select("Frontend"));
        assert!(panel.is_selected("Programming"));
    }

    #[test]
    fn test_select_switches_exactly_one_category() {
        let mut panel = SkillPanel::new(categories(), "Programming").unwrap();
        assert!(panel.select("Tools"));
        assert!(panel.is_selected("Tools"));
        assert!(!panel.is_selected("Programming"));
        assert_eq!(panel.visible_skills()[0].name, "Figma");

        assert!(!panel.select("Cooking"));
        assert!(panel.is_selected("Tools"));
    }

    #[test]
    fn test_tooltip_follows_hover() {
        let mut panel = SkillPanel::new(categories(), "Programming").unwrap();
        panel.pointer_enter("Java");
        assert_eq!(panel.tooltip().map(|s| s.name.as_str()), Some("Java"));
        panel.pointer_leave("Java");
        assert_eq!(panel.tooltip(), None);
    }

    #[test]
    fn test_leave_from_other_skill_keeps_hover() {
        let mut panel = SkillPanel::new(categories(), "Programming").unwrap();
        panel.pointer_enter("Java");
        panel.pointer_enter("Python");
        panel.pointer_leave("Java");
        assert_eq!(panel.hovered(), Some("Python"));
        assert_eq!(panel.tooltip().map(|s| s.name.as_str()), Some("Python"));
    }

    #[test]
    fn test_switching_category_hides_tooltip() {
        let mut panel = SkillPanel::new(categories(), "Programming").unwrap();
        panel.pointer_enter("Java");
        panel.select("Frontend");
        assert_eq!(panel.tooltip(), None);
        // switching back brings it back while the pointer hasn't left
        panel.select("Programming");
        assert_eq!(panel.tooltip().map(|s| s.name.as_str()), Some("Java"));
    }

    #[test]
    fn test_level_width() {
        assert_eq!(level_width(85), "85%");
        assert_eq!(level_width(0), "0%");
        assert_eq!(level_width(250), "100%");
    }
}
