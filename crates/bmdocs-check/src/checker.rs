//! Documentation completeness checker.

use std::fs;
use std::path::{Path, PathBuf};

use crate::report::{CheckFailure, CheckKind, CheckOutcome, CheckReport};

/// Pages expected directly under the documentation root.
pub const DEFAULT_PAGES: [&str; 5] = [
    "index.md",
    "getting-started.md",
    "commands.md",
    "workflows.md",
    "store.md",
];

/// Page that documents the commands.
pub const DEFAULT_COMMANDS_PAGE: &str = "commands.md";

/// Commands the commands page must mention.
pub const DEFAULT_COMMANDS: [&str; 7] = [
    "bm add",
    "bm ls",
    "bm find",
    "bm table",
    "bm path",
    "bm update",
    "bm rm",
];

/// Checks that a documentation root has the expected pages and that the
/// commands page mentions every command.
///
/// The command check is a coarse proxy: it only looks for the literal
/// command names, not for correct documentation.
#[derive(Debug, Clone)]
pub struct DocsChecker {
    root: PathBuf,
    pages: Vec<String>,
    commands_page: String,
    commands: Vec<String>,
}

impl DocsChecker {
    /// Create a checker with the default pages and commands.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pages: DEFAULT_PAGES.iter().map(|p| p.to_string()).collect(),
            commands_page: DEFAULT_COMMANDS_PAGE.to_string(),
            commands: DEFAULT_COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Replace the expected pages.
    pub fn with_pages<I, S>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pages = pages.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the expected commands.
    pub fn with_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands = commands.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the page searched for commands.
    pub fn with_commands_page(mut self, page: impl Into<String>) -> Self {
        self.commands_page = page.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run every check. Checks are independent of each other.
    pub fn run(&self) -> CheckReport {
        let report = CheckReport {
            outcomes: vec![self.check_pages(), self.check_commands()],
        };

        for failure in report.failures() {
            tracing::warn!("{}", failure);
        }
        tracing::info!(
            "Checked {}: {} failure(s)",
            self.root.display(),
            report.failures().count()
        );

        report
    }

    /// Assert each expected page is a file directly under the root.
    pub fn check_pages(&self) -> CheckOutcome {
        let failures = self
            .pages
            .iter()
            .filter(|page| {
                let present = self.root.join(page).is_file();
                tracing::debug!("Page {}: {}", page, if present { "found" } else { "missing" });
                !present
            })
            .map(|page| CheckFailure::MissingPage {
                page: page.clone(),
                root: self.root.display().to_string(),
            })
            .collect();

        CheckOutcome {
            check: CheckKind::Pages,
            assertions: self.pages.len(),
            failures,
        }
    }

    /// Assert the commands page contains each command name.
    pub fn check_commands(&self) -> CheckOutcome {
        let path = self.root.join(&self.commands_page);

        let failures = match fs::read_to_string(&path) {
            Ok(text) => missing_commands(&text, &self.commands)
                .map(|command| CheckFailure::MissingCommandDoc {
                    command: command.to_string(),
                    page: self.commands_page.clone(),
                })
                .collect(),
            Err(e) => vec![CheckFailure::UnreadablePage {
                page: self.commands_page.clone(),
                reason: e.to_string(),
            }],
        };

        CheckOutcome {
            check: CheckKind::Commands,
            assertions: self.commands.len(),
            failures,
        }
    }
}

/// Commands whose literal name does not occur in `text`.
fn missing_commands<'a>(text: &'a str, commands: &'a [String]) -> impl Iterator<Item = &'a str> {
    commands
        .iter()
        .map(String::as_str)
        .filter(move |command| !text.contains(command))
}
