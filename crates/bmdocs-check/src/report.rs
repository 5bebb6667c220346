//! Check results.

use serde::Serialize;

/// A single failed assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckFailure {
    #[error("Missing page: {page} not found in {root}")]
    MissingPage { page: String, root: String },

    #[error("Missing command doc: '{command}' not mentioned in {page}")]
    MissingCommandDoc { command: String, page: String },

    #[error("Unreadable page: {page}: {reason}")]
    UnreadablePage { page: String, reason: String },
}

/// Which check produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Every expected page exists
    Pages,
    /// The commands page names every command
    Commands,
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pages => write!(f, "pages"),
            Self::Commands => write!(f, "commands"),
        }
    }
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub check: CheckKind,
    /// Number of assertions evaluated
    pub assertions: usize,
    pub failures: Vec<CheckFailure>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Results of all checks, in the order they ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    /// True when no check reported a failure.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// All failures across checks.
    pub fn failures(&self) -> impl Iterator<Item = &CheckFailure> {
        self.outcomes.iter().flat_map(|o| o.failures.iter())
    }

    /// Outcome of a given check, if it ran.
    pub fn outcome(&self, check: CheckKind) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.check == check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages() {
        let missing = CheckFailure::MissingPage {
            page: "store.md".to_string(),
            root: "docs".to_string(),
        };
        let undocumented = CheckFailure::MissingCommandDoc {
            command: "bm rm".to_string(),
            page: "commands.md".to_string(),
        };

        assert_eq!(missing.to_string(), "Missing page: store.md not found in docs");
        assert_eq!(
            undocumented.to_string(),
            "Missing command doc: 'bm rm' not mentioned in commands.md"
        );
    }

    #[test]
    fn serializes_failure_kind() {
        let failure = CheckFailure::MissingCommandDoc {
            command: "bm ls".to_string(),
            page: "commands.md".to_string(),
        };

        let json = serde_json::to_value(&failure).unwrap();

        assert_eq!(json["kind"], "missing_command_doc");
        assert_eq!(json["command"], "bm ls");
    }

    #[test]
    fn success_requires_every_check_to_pass() {
        let mut report = CheckReport {
            outcomes: vec![
                CheckOutcome {
                    check: CheckKind::Pages,
                    assertions: 5,
                    failures: vec![],
                },
                CheckOutcome {
                    check: CheckKind::Commands,
                    assertions: 7,
                    failures: vec![],
                },
            ],
        };
        assert!(report.is_success());

        report.outcomes[1].failures.push(CheckFailure::UnreadablePage {
            page: "commands.md".to_string(),
            reason: "denied".to_string(),
        });

        assert!(!report.is_success());
        assert_eq!(report.failures().count(), 1);
        assert!(report.outcome(CheckKind::Pages).unwrap().passed());
    }
}
