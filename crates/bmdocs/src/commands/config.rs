//! Print the resolved site configuration.

use std::path::Path;

use anyhow::{Context, Result};
use bmdocs_site::{ProcessEnv, SiteConfigBuilder};

use crate::config::load_config;

/// Run the config command.
pub fn run(config_path: &Path, pretty: bool) -> Result<()> {
    let file_config = load_config(config_path)?;

    let site = SiteConfigBuilder::with_env_names(file_config.site.options(), &file_config.env)
        .build(&ProcessEnv);

    tracing::info!("Resolved base path {}", site.base_path);

    let json = site
        .to_json(pretty)
        .context("Failed to serialize site config")?;
    println!("{}", json);

    Ok(())
}
