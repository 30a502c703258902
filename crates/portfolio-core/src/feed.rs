//! The `projects.json` feed and the card model rendered from it.

use crate::constants::MAX_FEATURED_CARDS;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("malformed project feed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Category label on a project record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectTag {
    Project,
    Archive,
    Research,
    Technical,
    Other(String),
}

impl From<String> for ProjectTag {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PROJECT" => ProjectTag::Project,
            "ARCHIVE" => ProjectTag::Archive,
            "RESEARCH" => ProjectTag::Research,
            "TECHNICAL" => ProjectTag::Technical,
            _ => ProjectTag::Other(s),
        }
    }
}

impl From<ProjectTag> for String {
    fn from(tag: ProjectTag) -> Self {
        tag.label().to_string()
    }
}

impl ProjectTag {
    pub fn label(&self) -> &str {
        match self {
            ProjectTag::Project => "PROJECT",
            ProjectTag::Archive => "ARCHIVE",
            ProjectTag::Research => "RESEARCH",
            ProjectTag::Technical => "TECHNICAL",
            ProjectTag::Other(s) => s,
        }
    }

    /// CSS modifier class for the tag badge; empty for unknown tags.
    pub fn css_class(&self) -> &'static str {
        match self {
            ProjectTag::Project => "project",
            ProjectTag::Archive => "archive",
            ProjectTag::Research => "research",
            ProjectTag::Technical => "technical",
            ProjectTag::Other(_) => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub tag: ProjectTag,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
}

pub fn parse_feed(json: &str) -> Result<Vec<Project>, FeedError> {
    let projects: Vec<Project> = serde_json::from_str(json)?;
    log::debug!("[feed] parsed {} projects", projects.len());
    Ok(projects)
}

/// Number of records tagged `PROJECT`.
pub fn project_count(projects: &[Project]) -> usize {
    projects
        .iter()
        .filter(|p| p.tag == ProjectTag::Project)
        .count()
}

/// How many records the grid shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardLimit {
    #[default]
    Featured,
    All,
}

impl CardLimit {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("all") => CardLimit::All,
            _ => CardLimit::Featured,
        }
    }

    fn take(self) -> usize {
        match self {
            CardLimit::Featured => MAX_FEATURED_CARDS,
            CardLimit::All => usize::MAX,
        }
    }
}

/// One rendered project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card<'a> {
    pub href: &'a str,
    pub tag_label: &'a str,
    pub tag_class: &'static str,
    pub title: &'a str,
    pub description: &'a str,
}

impl Card<'_> {
    pub fn to_html(&self) -> String {
        let class = if self.tag_class.is_empty() {
            "tag".to_string()
        } else {
            format!("tag {}", self.tag_class)
        };
        format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"card\"><span class=\"{}\">{}</span><h3>{}</h3><p>{}</p></a>",
            escape_html(self.href),
            class,
            escape_html(self.tag_label),
            escape_html(self.title),
            escape_html(self.description),
        )
    }
}

pub fn cards(projects: &[Project], limit: CardLimit) -> Vec<Card<'_>> {
    projects
        .iter()
        .take(limit.take())
        .map(|p| Card {
            href: &p.url,
            tag_label: p.tag.label(),
            tag_class: p.tag.css_class(),
            title: &p.title,
            description: &p.description,
        })
        .collect()
}

/// Grid markup for the given cards, concatenated in feed order.
pub fn grid_html(cards: &[Card<'_>]) -> String {
    cards.iter().map(Card::to_html).collect()
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_round_trips_its_label() {
        let p = parse_feed(r#"[{"tag":"WIP","title":"t","description":"d","url":"u"}]"#)
            .unwrap_or_default();
        assert_eq!(p[0].tag, ProjectTag::Other("WIP".into()));
        assert_eq!(p[0].tag.label(), "WIP");
        assert_eq!(p[0].tag.css_class(), "");
    }

    #[test]
    fn markup_is_escaped() {
        let card = Card {
            href: "https://x.dev/?a=1&b=2",
            tag_label: "PROJECT",
            tag_class: "project",
            title: "<b>Bold</b>",
            description: "it's",
        };
        let html = card.to_html();
        assert!(html.contains("a=1&amp;b=2"));
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(html.contains("it&#39;s"));
        assert!(html.contains("class=\"tag project\""));
    }

    #[test]
    fn malformed_feed_is_an_error() {
        assert!(matches!(parse_feed("{not json"), Err(FeedError::Json(_))));
        assert!(parse_feed(r#"[{"title":"no tag"}]"#).is_err());
    }
}
