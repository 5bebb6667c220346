//! Site configuration types.

use serde::{Deserialize, Serialize};

/// Default link to the source repository.
pub const DEFAULT_SOURCE_URL: &str = "https://github.com/bm-cli/bm";

/// A labelled link to a page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Display label
    pub label: String,
    /// Site-relative target path
    pub link: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

/// A labelled cluster of links in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub label: String,
    pub items: Vec<NavLink>,
}

/// Icon of a social link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    /// Named icon for a personal site
    #[serde(untagged)]
    Custom(String),
}

impl SocialIcon {
    pub fn name(&self) -> &str {
        match self {
            Self::Github => "github",
            Self::Custom(name) => name,
        }
    }
}

/// A link to an external profile or repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: SocialIcon,
    pub link: String,
}

/// Link to the author's personal site, shown next to the source link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonalLink {
    /// Icon name understood by the site theme
    pub icon: String,
    /// Target URL
    pub link: String,
}

/// User-facing options for the site. The two optional features are
/// independent toggles; both are off by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Language tag of the site
    pub language: String,

    /// Site title
    pub title: String,

    /// Site description
    pub description: String,

    /// Source repository link
    pub source_url: String,

    /// Personal-site social link
    pub personal_link: Option<PersonalLink>,

    /// Footer message, may contain HTML markup
    pub footer_message: Option<String>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            title: "bm".to_string(),
            description: "Bookmark directories and jump back to them from the terminal".to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            personal_link: None,
            footer_message: None,
        }
    }
}

/// Complete configuration of the documentation site.
///
/// Built once per invocation by [`crate::SiteConfigBuilder`] and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(rename = "lang")]
    pub language: String,
    pub title: String,
    pub description: String,
    pub base_path: String,
    pub navigation: Vec<NavLink>,
    pub sidebar_groups: Vec<SidebarGroup>,
    pub social_links: Vec<SocialLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_message: Option<String>,
}

impl SiteConfig {
    /// Prefix a site-relative link with the base path.
    ///
    /// Absolute URLs are returned unchanged.
    pub fn href(&self, link: &str) -> String {
        if link.contains("://") {
            return link.to_string();
        }
        let base = self.base_path.trim_end_matches('/');
        let path = link.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Serialize to JSON for a site generator.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
