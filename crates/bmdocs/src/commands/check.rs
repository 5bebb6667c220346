//! Documentation completeness check command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::load_config;

/// Run the check command.
pub fn run(config_path: &Path, root: Option<PathBuf>, json: bool) -> Result<()> {
    let file_config = load_config(config_path)?;
    let checker = file_config.check.checker(root);

    tracing::info!("Checking documentation in {}", checker.root().display());

    let report = checker.run();

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        for outcome in &report.outcomes {
            let status = if outcome.passed() { "ok" } else { "FAILED" };
            println!(
                "{}: {} ({} of {} assertions failed)",
                outcome.check,
                status,
                outcome.failures.len(),
                outcome.assertions
            );
            for failure in &outcome.failures {
                println!("  - {}", failure);
            }
        }
    }

    if !report.is_success() {
        anyhow::bail!(
            "Documentation check failed with {} failure(s)",
            report.failures().count()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn fails_when_pages_are_missing() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        fs::create_dir_all(&docs).unwrap();

        let err = run(&temp.path().join("docs.toml"), Some(docs), false).unwrap_err();

        assert!(err.to_string().contains("Documentation check failed"));
    }

    #[test]
    fn fails_when_a_command_is_undocumented() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        for page in bmdocs_check::DEFAULT_PAGES {
            fs::write(docs.join(page), "bm add bm ls bm find bm table bm path bm update").unwrap();
        }

        let err = run(&temp.path().join("docs.toml"), Some(docs), true).unwrap_err();

        assert!(err.to_string().contains("1 failure(s)"));
    }

    #[test]
    fn passes_on_complete_docs() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../docs");
        let temp = tempdir().unwrap();

        run(&temp.path().join("docs.toml"), Some(root), false).unwrap();
    }
}
