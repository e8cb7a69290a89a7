//! Conventional Commits Provider
//!
//! Prompts for a commit type from a fixed table and joins it with the shared
//! message prompt as `<scope>: <message>`.

use std::fmt;

use inquire::Select;

use crate::{
    config::ConventionType,
    errors::Result,
    prompt::prompt_for_message,
};

use super::Provider;

/// One selectable commit type, optionally narrowed by a sub-type.
#[derive(Debug, Clone, Copy)]
pub struct CommitType {
    pub kind: &'static str,
    pub subtype: Option<&'static str>,
    pub description: &'static str,
}

/// The fixed menu: eleven primary types plus four `chore` sub-types.
pub const COMMIT_TYPES: [CommitType; 15] = [
    CommitType {
        kind: "chore",
        subtype: None,
        description: "Changes that don't change source code or tests",
    },
    CommitType {
        kind: "feat",
        subtype: None,
        description: "Adds or removes a new feature",
    },
    CommitType {
        kind: "fix",
        subtype: None,
        description: "Fixes a bug",
    },
    CommitType {
        kind: "refactor",
        subtype: None,
        description: "A code change that neither fixes a bug nor adds a feature, eg. renaming a variable, remove dead code, etc.",
    },
    CommitType {
        kind: "docs",
        subtype: None,
        description: "Documentation only changes",
    },
    CommitType {
        kind: "style",
        subtype: None,
        description: "Changes the style of the code eg. linting",
    },
    CommitType {
        kind: "perf",
        subtype: None,
        description: "Improves the performance of the code",
    },
    CommitType {
        kind: "test",
        subtype: None,
        description: "Adding missing tests or correcting existing tests",
    },
    CommitType {
        kind: "build",
        subtype: None,
        description: "Changes that affect the build system or external dependencies (example scopes: gulp, broccoli, npm)",
    },
    CommitType {
        kind: "ci",
        subtype: None,
        description: "Changes to CI configuration files and scripts",
    },
    CommitType {
        kind: "revert",
        subtype: None,
        description: "Reverts a previous commit",
    },
    CommitType {
        kind: "chore",
        subtype: Some("release"),
        description: "Release / Version tags",
    },
    CommitType {
        kind: "chore",
        subtype: Some("deps"),
        description: "Add, remove or update dependencies",
    },
    CommitType {
        kind: "chore",
        subtype: Some("dev-deps"),
        description: "Add, remove or update development dependencies",
    },
    CommitType {
        kind: "chore",
        subtype: Some("types"),
        description: "Add or update types.",
    },
];

impl CommitType {
    /// The scope that ends up in the commit message, e.g. `feat` or
    /// `chore(deps)`.
    #[must_use]
    pub fn value(&self) -> String {
        match self.subtype {
            Some(subtype) => format!("{}({subtype})", self.kind),
            None => self.kind.to_string(),
        }
    }
}

impl fmt::Display for CommitType {
    // Rendered as the menu label: `<scope>: <description>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.value(), self.description)
    }
}

/// Provider for the Conventional Commits convention.
pub struct Conventional;

impl Conventional {
    fn ask(&self) -> Result<String> {
        let selected = Select::new("Select the type of commit", COMMIT_TYPES.to_vec())
            .with_page_size(10)
            .prompt()?;

        Ok(selected.value())
    }
}

impl Provider for Conventional {
    fn kind(&self) -> ConventionType {
        ConventionType::ConventionalCommit
    }

    fn construct(&self) -> Result<String> {
        let scope = self.ask()?;
        let message = prompt_for_message()?;

        Ok(format_commit(&scope, &message))
    }
}

/// Joins the selected scope and the message into the final commit message.
pub(crate) fn format_commit(scope: &str, message: &str) -> String {
    format!("{scope}: {message}")
}
