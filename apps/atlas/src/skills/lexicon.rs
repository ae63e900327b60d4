#![allow(dead_code)]

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AtlasError;

/// One named group of canonical skill strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Ordered category → skills catalog. Built once at startup and passed by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLexicon {
    pub categories: Vec<SkillCategory>,
}

const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &["Python", "Java", "C++", "JavaScript", "Ruby", "Go", "Rust", "PHP", "Swift", "Kotlin"],
    ),
    (
        "Web Technologies",
        &["HTML", "CSS", "React", "Angular", "Vue.js", "Node.js", "Django", "Flask", "Spring Boot"],
    ),
    (
        "Databases",
        &["SQL", "MySQL", "PostgreSQL", "MongoDB", "Oracle", "Redis", "Elasticsearch"],
    ),
    (
        "Cloud Platforms",
        &["AWS", "Azure", "Google Cloud", "Heroku", "DigitalOcean"],
    ),
    (
        "DevOps",
        &["Docker", "Kubernetes", "Jenkins", "GitLab CI", "Terraform", "Ansible"],
    ),
    (
        "Machine Learning",
        &["TensorFlow", "PyTorch", "Scikit-learn", "Keras", "NLTK", "OpenCV"],
    ),
    (
        "Data Analysis",
        &["Pandas", "NumPy", "R", "Tableau", "Power BI", "SAS"],
    ),
    (
        "Project Management",
        &["Agile", "Scrum", "Kanban", "JIRA", "Trello", "MS Project"],
    ),
    ("Version Control", &["Git", "SVN", "Mercurial"]),
    ("Testing", &["JUnit", "Selenium", "Pytest", "Jasmine", "Mocha"]),
    (
        "Soft Skills",
        &["Communication", "Teamwork", "Problem Solving", "Time Management", "Leadership"],
    ),
];

impl Default for SkillLexicon {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|(name, skills)| SkillCategory {
                    name: name.to_string(),
                    skills: skills.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl SkillLexicon {
    /// Parses a lexicon from JSON: `{"categories": [{"name": .., "skills": [..]}]}`.
    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        let lexicon: SkillLexicon =
            serde_json::from_str(json).map_err(|e| AtlasError::Lexicon(e.to_string()))?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn from_file(path: &Path) -> Result<Self, AtlasError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AtlasError::Lexicon(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Every skill in category order, then in listed order.
    pub fn iter_skills(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.skills.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty skill strings would match every document.
    fn validate(&self) -> Result<(), AtlasError> {
        if self.is_empty() {
            return Err(AtlasError::Lexicon("lexicon defines no skills".to_string()));
        }
        for category in &self.categories {
            if let Some(blank) = category.skills.iter().find(|s| s.trim().is_empty()) {
                return Err(AtlasError::Lexicon(format!(
                    "category '{}' contains a blank skill ({blank:?})",
                    category.name
                )));
            }
        }
        Ok(())
    }
}
