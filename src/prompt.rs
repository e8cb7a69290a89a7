//! Shared Commit Message Prompt
//!
//! Free-text prompt used by both convention providers, with the
//! empty-message early-exit and the optional first-letter capitalization
//! driven by the stored preferences.

use inquire::Text;
use tracing::debug;

use crate::{config::ConfigStore, errors::Result};

/// Prompts the user for the commit message body.
///
/// Submitting an empty message terminates the process with exit code 0:
/// an empty message means "nothing to commit", not a failure.
///
/// When the preference file is readable and `uppercase` is set, the first
/// code point of the message is upper-cased; when the preferences cannot be
/// read the message is returned exactly as typed.
///
/// # Errors
/// * If the interactive prompt is cancelled or fails
pub fn prompt_for_message() -> Result<String> {
    let message = Text::new("Enter your commit message").prompt()?;

    if message.is_empty() {
        println!("Message cannot be empty");
        std::process::exit(0);
    }

    match ConfigStore::new().read() {
        Ok(config) if config.uppercase => Ok(capitalize_first(&message)),
        Ok(_) => Ok(message),
        Err(err) => {
            debug!("error reading config: {err}");
            Ok(message)
        }
    }
}

/// Upper-cases exactly the first code point of `message`, leaving the
/// remainder untouched.
#[must_use]
pub fn capitalize_first(message: &str) -> String {
    let mut chars = message.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
