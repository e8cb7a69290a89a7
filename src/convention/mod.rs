//! Commit Convention Providers
//!
//! A provider knows how to prompt for and assemble a commit message for one
//! convention. This module holds the shared trait plus the resolver that
//! picks a provider at commit time: the stored preference wins, and when no
//! preference file exists the tip commit message is inspected to guess which
//! convention the project already uses.

pub mod conventional;
pub mod gitmoji;

use tracing::debug;

use crate::{
    config::{ConfigStore, ConventionType},
    errors::{CmtError, ConfigError, Result},
    git,
};

use conventional::Conventional;
use gitmoji::{Gitmoji, Notation};

/// A commit message convention: prompting plus assembly.
pub trait Provider {
    /// Which convention this provider implements.
    fn kind(&self) -> ConventionType;

    /// Interactively builds the final commit message.
    ///
    /// # Errors
    /// * If a prompt is cancelled or fails
    /// * If fetching required data (e.g. the gitmoji list) fails
    fn construct(&self) -> Result<String>;
}

/// Picks the provider to use for this invocation.
///
/// The stored preference takes precedence. Only a missing preference file
/// triggers the fallback; a malformed file or an unknown convention value is
/// fatal rather than silently defaulted.
///
/// # Errors
/// * If the preference file exists but cannot be used
/// * If the fallback cannot read the last commit message
pub fn determine() -> Result<Box<dyn Provider>> {
    match ConfigStore::new().read() {
        Ok(config) => Ok(provider_for(config.convention)),
        Err(CmtError::Config(ConfigError::NotConfigured)) => {
            debug!("no preference file found");

            let provider = determine_from_last_commit()?;
            debug!("falling back to last used convention: {}", provider.kind());

            Ok(provider)
        }
        Err(err) => Err(err),
    }
}

fn provider_for(convention: ConventionType) -> Box<dyn Provider> {
    match convention {
        ConventionType::ConventionalCommit => Box::new(Conventional),
        ConventionType::Gitmoji => Box::new(Gitmoji::new(Notation::Code)),
    }
}

/// Guesses the convention from the most recent commit message.
fn determine_from_last_commit() -> Result<Box<dyn Provider>> {
    let message = git::last_commit_message()?;
    debug!("last commit message: {message}");

    match classify_message(message.trim()) {
        Some(notation) => Ok(Box::new(Gitmoji::new(notation))),
        None => Ok(Box::new(Conventional)),
    }
}

/// Classifies a commit message as gitmoji-style or not.
///
/// A leading `:` means shortcode notation (`:sparkles: ...`); a first code
/// point inside the known emoji ranges means raw glyph notation; anything
/// else is treated as a conventional commit.
pub(crate) fn classify_message(message: &str) -> Option<Notation> {
    if message.starts_with(':') {
        return Some(Notation::Code);
    }

    match message.chars().next() {
        Some(first) if is_emoji(first) => Some(Notation::Emoji),
        _ => None,
    }
}

/// Whether a code point falls inside the emoji ranges the classifier knows.
///
/// The ranges are a fixed allow-list (faces, symbols and pictographs,
/// transport, flags, miscellaneous symbols, dingbats).
fn is_emoji(c: char) -> bool {
    matches!(
        c,
        '\u{1F600}'..='\u{1F64F}'
            | '\u{1F300}'..='\u{1F5FF}'
            | '\u{1F680}'..='\u{1F6FF}'
            | '\u{1F1E0}'..='\u{1F1FF}'
            | '\u{2600}'..='\u{26FF}'
            | '\u{2700}'..='\u{27BF}'
    )
}
