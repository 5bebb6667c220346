//! Completeness checks for the bm documentation.
//!
//! Verifies that the expected pages exist under the documentation root and
//! that the commands reference mentions every `bm` command.

pub mod checker;
pub mod report;

pub use checker::{DocsChecker, DEFAULT_COMMANDS, DEFAULT_COMMANDS_PAGE, DEFAULT_PAGES};
pub use report::{CheckFailure, CheckKind, CheckOutcome, CheckReport};
