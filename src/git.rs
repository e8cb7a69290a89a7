//! Git Operations
//!
//! Thin wrappers around the `git` executable. cmt never links a git library;
//! both operations it needs (reading the tip commit message, creating a
//! commit) shell out and surface captured output on failure.

use std::process::Command;

use crate::errors::{GitError, Result};

/// Returns the message of the most recent commit.
///
/// Runs `git log -1 --pretty=%B`, i.e. just the subject and body of the tip
/// commit, and trims surrounding whitespace.
///
/// # Errors
///
/// Returns an error if:
/// - Not currently in a git repository
/// - The git command fails to execute (e.g. an empty repository)
///
/// # Examples
///
/// ```no_run
/// use cmt::git::last_commit_message;
///
/// let message = last_commit_message()?;
/// println!("Last commit: {message}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn last_commit_message() -> Result<String> {
    let output = Command::new("git")
        .args(["log", "-1", "--pretty=%B"])
        .output()
        .map_err(GitError::Io)?;

    if output.status.success() {
        let message = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(message)
    } else {
        let error_message = String::from_utf8_lossy(&output.stderr);
        Err(GitError::CommandFailed {
            command: "git log -1 --pretty=%B".to_string(),
            output: error_message.trim().to_string(),
        }
        .into())
    }
}

/// Creates a commit with the given message.
///
/// Runs `git commit -m <message>`, appending `--allow-empty` when requested.
/// On success git's own summary line is echoed to stdout; on failure the
/// combined stdout and stderr of the child process is included in the error
/// so the user sees exactly what git complained about.
///
/// # Arguments
/// * `message` - The fully composed commit message
/// * `allow_empty` - Permit committing with an empty change set
///
/// # Errors
/// * If the git command cannot be spawned
/// * If git exits with a non-zero status
pub fn commit(message: &str, allow_empty: bool) -> Result<()> {
    let mut command = Command::new("git");
    command.args(["commit", "-m", message]);

    if allow_empty {
        command.arg("--allow-empty");
    }

    let output = command.output().map_err(GitError::Io)?;

    if output.status.success() {
        if !output.stdout.is_empty() {
            println!("{}", String::from_utf8_lossy(&output.stdout).trim());
        }

        Ok(())
    } else {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Err(GitError::CommandFailed {
            command: "git commit".to_string(),
            output: combined.trim().to_string(),
        }
        .into())
    }
}
