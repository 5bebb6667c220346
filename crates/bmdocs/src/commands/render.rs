//! Render HTML partials.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bmdocs_site::{ProcessEnv, SiteConfigBuilder, TemplateEngine};

use crate::config::load_config;

/// Run the render command.
pub fn run(config_path: &Path, output: &Path) -> Result<()> {
    let file_config = load_config(config_path)?;

    let site = SiteConfigBuilder::with_env_names(file_config.site.options(), &file_config.env)
        .build(&ProcessEnv);

    let partials = TemplateEngine::new()?.render_partials(&site)?;

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;

    for (name, html) in partials.files() {
        let path = output.join(name);
        fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Wrote {}", path.display());
    }

    tracing::info!(
        "Rendered partials for base path {} into {}",
        site.base_path,
        output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_all_partials() {
        let temp = tempdir().unwrap();
        let output = temp.path().join("dist/partials");

        run(&temp.path().join("docs.toml"), &output).unwrap();

        for name in ["nav.html", "sidebar.html", "footer.html"] {
            assert!(output.join(name).is_file(), "{} not written", name);
        }
        let nav = fs::read_to_string(output.join("nav.html")).unwrap();
        assert!(nav.contains("Getting Started"));
    }
}
