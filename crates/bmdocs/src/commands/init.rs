//! Scaffold the documentation site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const DEFAULT_CONFIG: &str = include_str!("../../scaffold/docs.toml");

/// Pages written by `init`, named as the checker expects them.
const PAGES: [(&str, &str); 5] = [
    ("index.md", include_str!("../../scaffold/docs/index.md")),
    (
        "getting-started.md",
        include_str!("../../scaffold/docs/getting-started.md"),
    ),
    ("commands.md", include_str!("../../scaffold/docs/commands.md")),
    ("workflows.md", include_str!("../../scaffold/docs/workflows.md")),
    ("store.md", include_str!("../../scaffold/docs/store.md")),
];

/// Run the init command.
pub fn run(yes: bool, config_path: &Path) -> Result<()> {
    tracing::info!("Initializing bm documentation...");

    let base = config_path.parent().unwrap_or(Path::new(""));
    let docs_dir = base.join("docs");

    if scaffold(config_path, &docs_dir, yes)? {
        tracing::info!("Initialization complete!");
        tracing::info!("Run 'bmdocs check' to verify the pages.");
    }

    Ok(())
}

/// Write the config file and pages. Returns `false` when nothing was done
/// because the docs directory exists and `overwrite` is off.
fn scaffold(config_path: &Path, docs_dir: &Path, overwrite: bool) -> Result<bool> {
    if docs_dir.exists() {
        if !overwrite {
            tracing::warn!(
                "{} already exists. Use --yes to overwrite.",
                docs_dir.display()
            );
            return Ok(false);
        }
    } else {
        fs::create_dir_all(docs_dir).context("Failed to create docs directory")?;
    }

    if !config_path.exists() || overwrite {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    for (name, content) in PAGES {
        let path = docs_dir.join(name);
        if !path.exists() || overwrite {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Created {}", path.display());
        }
    }

    Ok(true)
}
