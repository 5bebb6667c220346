//! Configuration file (docs.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bmdocs_check::{DocsChecker, DEFAULT_COMMANDS, DEFAULT_COMMANDS_PAGE, DEFAULT_PAGES};
use bmdocs_site::{EnvNames, PersonalLink, SiteOptions};
use serde::Deserialize;

/// Icon used for the personal link when none is configured.
const DEFAULT_PERSONAL_ICON: &str = "link";

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub env: EnvNames,
    #[serde(default)]
    pub check: CheckSection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    lang: String,
    title: String,
    description: String,
    source_url: String,
    /// Personal site link; omitted means no personal link
    personal_url: Option<String>,
    personal_icon: Option<String>,
    /// Footer message; omitted means no footer
    footer_message: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        let defaults = SiteOptions::default();
        Self {
            lang: defaults.language,
            title: defaults.title,
            description: defaults.description,
            source_url: defaults.source_url,
            personal_url: None,
            personal_icon: None,
            footer_message: None,
        }
    }
}

impl SiteSection {
    pub fn options(&self) -> SiteOptions {
        let personal_link = self.personal_url.as_ref().map(|link| PersonalLink {
            icon: self
                .personal_icon
                .clone()
                .unwrap_or_else(|| DEFAULT_PERSONAL_ICON.to_string()),
            link: link.clone(),
        });

        SiteOptions {
            language: self.lang.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            source_url: self.source_url.clone(),
            personal_link,
            footer_message: self.footer_message.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CheckSection {
    root: PathBuf,
    pages: Vec<String>,
    commands_page: String,
    commands: Vec<String>,
}

impl Default for CheckSection {
    fn default() -> Self {
        Self {
            root: PathBuf::from("docs"),
            pages: DEFAULT_PAGES.iter().map(|p| p.to_string()).collect(),
            commands_page: DEFAULT_COMMANDS_PAGE.to_string(),
            commands: DEFAULT_COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl CheckSection {
    /// Build a checker, with `root` overriding the configured root.
    pub fn checker(&self, root: Option<PathBuf>) -> DocsChecker {
        DocsChecker::new(root.unwrap_or_else(|| self.root.clone()))
            .with_pages(self.pages.iter().cloned())
            .with_commands_page(self.commands_page.clone())
            .with_commands(self.commands.iter().cloned())
    }
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}
