use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::config;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid content: {0}")]
    Invalid(String),
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    /// Off-site links open in a new tab; `mailto:` and friends do not.
    pub fn is_external(&self) -> bool {
        is_external(&self.href)
    }
}

pub fn is_external(href: &str) -> bool {
    href.starts_with("http")
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct PersonName {
    pub first: String,
    pub middle: String,
    pub last: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Profile {
    pub name: PersonName,
    pub short_name: String,
    pub tagline: String,
    pub summary: String,
    pub email: String,
    #[serde(default)]
    pub footer_links: Vec<Link>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.name.first, self.name.middle, self.name.last)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub color: String,
    pub background: String,
    pub border: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct EducationEntry {
    pub school: String,
    #[serde(default)]
    pub school_emphasis: String,
    pub location: String,
    pub period: String,
    pub degree: String,
    pub gpa: Option<String>,
    #[serde(default)]
    pub coursework: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub tag: String,
    pub year: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub url: String,
    #[serde(default)]
    pub extra_links: Vec<Link>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct ExperienceEntry {
    pub role: String,
    pub org: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct SkillGroup {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

impl Content {
    /// The document compiled into the bundle.
    pub fn embedded() -> Result<Content, ContentError> {
        Content::from_json(config::CONTENT_JSON)
    }

    pub fn from_json(json: &str) -> Result<Content, ContentError> {
        let content: Content = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        require("profile name", &self.profile.name.first)?;
        require("profile email", &self.profile.email)?;

        for link in &self.profile.footer_links {
            require_link(&link.label, &link.href)?;
        }
        for link in &self.social_links {
            require_link(&link.label, &link.href)?;
        }

        let mut slugs = HashSet::new();
        for project in &self.projects {
            require("project slug", &project.slug)?;
            require("project title", &project.title)?;
            require_link(&project.title, &project.url)?;
            if !slugs.insert(project.slug.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "duplicate project slug '{}'",
                    project.slug
                )));
            }
            for link in &project.extra_links {
                require_link(&link.label, &link.href)?;
            }
        }

        for entry in &self.experience {
            require("experience role", &entry.role)?;
        }
        for entry in &self.education {
            require("education school", &entry.school)?;
        }
        for group in &self.skills {
            require("skill group label", &group.label)?;
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        return Err(ContentError::Invalid(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn require_link(label: &str, href: &str) -> Result<(), ContentError> {
    if href.trim().is_empty() {
        return Err(ContentError::Invalid(format!("link '{}' has no href", label)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "profile": {
            "name": { "first": "Ada", "middle": "King", "last": "Lovelace" },
            "short_name": "Ada",
            "tagline": "analyst",
            "summary": "notes on the engine",
            "email": "ada@example.com"
        },
        "projects": [
            { "slug": "engine", "title": "engine", "tag": "Notes", "year": "1843",
              "description": "Note G", "url": "https://example.com/engine" }
        ]
    }"#;

    #[test]
    fn embedded_content_is_valid() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.profile.full_name(), "Shawn Anthony Evans");
        assert_eq!(content.projects.len(), 2);
        assert_eq!(content.experience.len(), 4);
        assert_eq!(content.skills.len(), 3);
        assert_eq!(content.social_links.len(), 3);
        assert_eq!(content.education[0].gpa.as_deref(), Some("3.486"));
    }

    #[test]
    fn embedded_bot_project_carries_invite_link() {
        let content = Content::embedded().unwrap();
        let marnie = content.projects.iter().find(|p| p.slug == "marnie").unwrap();
        assert_eq!(marnie.extra_links[0].label, "Add to Server");
        assert!(marnie.extra_links[0].is_external());

        let socks = content.projects.iter().find(|p| p.slug == "socks").unwrap();
        assert!(socks.extra_links.is_empty());
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let content = Content::from_json(MINIMAL).unwrap();
        assert!(content.experience.is_empty());
        assert!(content.skills.is_empty());
        assert!(content.projects[0].tech.is_empty());
        assert_eq!(content.profile.mailto(), "mailto:ada@example.com");
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let json = MINIMAL.replace(
            r#""url": "https://example.com/engine" }"#,
            r#""url": "https://example.com/engine" },
               { "slug": "engine", "title": "again", "tag": "x", "year": "1", "description": "d",
                 "url": "https://example.com/again" }"#,
        );
        match Content::from_json(&json) {
            Err(ContentError::Invalid(msg)) => assert!(msg.contains("duplicate project slug")),
            other => panic!("expected duplicate slug error, got {:?}", other),
        }
    }

    #[test]
    fn empty_href_is_rejected() {
        let json = MINIMAL.replace("https://example.com/engine", " ");
        assert!(matches!(Content::from_json(&json), Err(ContentError::Invalid(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Content::from_json("{ \"profile\": "),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn external_links_are_http_only() {
        assert!(is_external("https://github.com/ShawnEvans77"));
        assert!(!is_external("mailto:someone@example.com"));
    }
}
