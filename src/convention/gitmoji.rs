//! Gitmoji Provider
//!
//! Prompts for a gitmoji from the published list and joins it with the
//! shared message prompt as `<selected> <message>`. The list is fetched once
//! from <https://gitmoji.dev/api/gitmojis> and cached on disk; every later
//! invocation is served from the cache. There is no expiry and no
//! revalidation - a corrupt cache file is a parse error for that invocation.

use std::{fmt, fs, path::PathBuf};

use inquire::Select;
use serde::{Deserialize, Serialize};

use crate::{
    config::ConventionType,
    errors::{GitmojiError, Result},
    prompt::prompt_for_message,
};

use super::Provider;

const GITMOJI_API_URL: &str = "https://gitmoji.dev/api/gitmojis";

/// How a selected gitmoji appears in the commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// The raw glyph, e.g. `✨`.
    Emoji,
    /// The textual shortcode, e.g. `:sparkles:`.
    Code,
}

/// One entry of the published gitmoji list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emoji {
    pub emoji: String,
    pub code: String,
    pub description: String,
    pub name: String,
}

/// Body of the gitmoji endpoint, also the on-disk cache format.
#[derive(Debug, Serialize, Deserialize)]
pub struct GitmojiList {
    pub gitmojis: Vec<Emoji>,
}

/// Disk-backed cache for the gitmoji list.
pub struct EmojiCache {
    path: PathBuf,
}

impl EmojiCache {
    /// Creates a cache at the default location,
    /// `<home>/.config/cmt/gitmojis.json`.
    ///
    /// # Errors
    /// * If the home directory cannot be determined
    pub fn new() -> std::result::Result<Self, GitmojiError> {
        let home = dirs::home_dir().ok_or(GitmojiError::HomeDirNotFound)?;

        Ok(EmojiCache {
            path: home.join(".config").join("cmt").join("gitmojis.json"),
        })
    }

    /// Creates a cache backed by a custom file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        EmojiCache { path: path.into() }
    }

    /// Returns the cached list, fetching and persisting it first when the
    /// cache file does not exist yet.
    ///
    /// `fetch` is only invoked on a cache miss, so a populated cache serves
    /// every call without touching the network.
    ///
    /// # Errors
    /// * If the cache file exists but cannot be read or parsed
    /// * If the fetch itself fails
    /// * If the fetched list cannot be written to disk
    pub fn load_or_fetch<F>(&self, fetch: F) -> std::result::Result<Vec<Emoji>, GitmojiError>
    where
        F: FnOnce() -> std::result::Result<GitmojiList, GitmojiError>,
    {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let list: GitmojiList = serde_json::from_str(&data)?;

            return Ok(list.gitmojis);
        }

        let list = fetch()?;

        if let Some(directory) = self.path.parent() {
            fs::create_dir_all(directory)?;
        }

        fs::write(&self.path, serde_json::to_string(&list)?)?;

        Ok(list.gitmojis)
    }
}

/// Fetches the gitmoji list from the remote endpoint.
///
/// # Errors
/// * If the request fails or the body is not the expected JSON shape
pub fn fetch_remote() -> std::result::Result<GitmojiList, GitmojiError> {
    let list = reqwest::blocking::get(GITMOJI_API_URL)?
        .error_for_status()?
        .json::<GitmojiList>()?;

    Ok(list)
}

/// Strips zero-width joiners (U+200D) from a glyph.
///
/// Combined emoji don't render reliably in terminals, so the displayed label
/// drops the joiners while the selectable value keeps the original glyph.
fn strip_zero_width_joiners(glyph: &str) -> String {
    glyph.chars().filter(|&c| c != '\u{200D}').collect()
}

/// One row of the selection menu: a rendered label plus the value that ends
/// up in the commit message.
struct EmojiOption {
    label: String,
    value: String,
}

impl EmojiOption {
    fn new(emoji: &Emoji, notation: Notation) -> Self {
        let value = match notation {
            Notation::Emoji => emoji.emoji.clone(),
            Notation::Code => emoji.code.clone(),
        };

        EmojiOption {
            label: format!(
                "{}  - {}",
                strip_zero_width_joiners(&emoji.emoji),
                emoji.description
            ),
            value,
        }
    }
}

impl fmt::Display for EmojiOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Provider for the Gitmoji convention.
pub struct Gitmoji {
    notation: Notation,
}

impl Gitmoji {
    #[must_use]
    pub fn new(notation: Notation) -> Self {
        Gitmoji { notation }
    }

    fn ask(&self) -> Result<String> {
        let cache = EmojiCache::new()?;
        let emojis = cache.load_or_fetch(fetch_remote)?;

        let options: Vec<EmojiOption> = emojis
            .iter()
            .map(|emoji| EmojiOption::new(emoji, self.notation))
            .collect();

        let selected = Select::new("Select the type of commit", options)
            .with_page_size(10)
            .prompt()?;

        Ok(selected.value)
    }
}

impl Provider for Gitmoji {
    fn kind(&self) -> ConventionType {
        ConventionType::Gitmoji
    }

    fn construct(&self) -> Result<String> {
        let gitmoji = self.ask()?;
        let message = prompt_for_message()?;

        Ok(format_commit(&gitmoji, &message))
    }
}

/// Joins the selected gitmoji and the message into the final commit message.
pub(crate) fn format_commit(gitmoji: &str, message: &str) -> String {
    format!("{gitmoji} {message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::TempDir;

    fn sample_list() -> GitmojiList {
        GitmojiList {
            gitmojis: vec![
                Emoji {
                    emoji: "✨".to_string(),
                    code: ":sparkles:".to_string(),
                    description: "Introduce new features.".to_string(),
                    name: "sparkles".to_string(),
                },
                Emoji {
                    emoji: "🐛".to_string(),
                    code: ":bug:".to_string(),
                    description: "Fix a bug.".to_string(),
                    name: "bug".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_first_call_fetches_once_and_populates_cache() {
        let temp_dir = TempDir::new().unwrap();
        let cache_path = temp_dir.path().join("nested").join("gitmojis.json");
        let cache = EmojiCache::with_path(&cache_path);

        let calls = Cell::new(0);
        let emojis = cache
            .load_or_fetch(|| {
                calls.set(calls.get() + 1);
                Ok(sample_list())
            })
            .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(emojis.len(), 2);
        assert!(cache_path.exists());

        // The file reproduces the fetched content
        let on_disk: GitmojiList =
            serde_json::from_str(&fs::read_to_string(&cache_path).unwrap()).unwrap();
        assert_eq!(on_disk.gitmojis[1].code, ":bug:");
    }

    #[test]
    fn test_second_call_is_served_from_cache() {
        let temp_dir = TempDir::new().unwrap();
        let cache_path = temp_dir.path().join("gitmojis.json");
        let cache = EmojiCache::with_path(&cache_path);

        cache.load_or_fetch(|| Ok(sample_list())).unwrap();

        let emojis = cache
            .load_or_fetch(|| panic!("cache hit must not fetch"))
            .unwrap();

        assert_eq!(emojis[0].emoji, "✨");
    }

    #[test]
    fn test_corrupt_cache_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let cache_path = temp_dir.path().join("gitmojis.json");
        fs::write(&cache_path, "not json").unwrap();

        let cache = EmojiCache::with_path(&cache_path);
        let result = cache.load_or_fetch(|| Ok(sample_list()));

        assert!(matches!(result, Err(GitmojiError::Parse(_))));
    }

    #[test]
    fn test_strip_zero_width_joiners() {
        // 👨‍💻 is man + ZWJ + laptop
        let combined = "\u{1F468}\u{200D}\u{1F4BB}";
        let stripped = strip_zero_width_joiners(combined);

        assert!(!stripped.contains('\u{200D}'));
        assert_eq!(stripped, "\u{1F468}\u{1F4BB}");

        // Plain glyphs pass through untouched
        assert_eq!(strip_zero_width_joiners("✨"), "✨");
    }

    #[test]
    fn test_option_label_strips_joiners_but_value_keeps_them() {
        let technologist = Emoji {
            emoji: "\u{1F9D1}\u{200D}\u{1F4BB}".to_string(),
            code: ":technologist:".to_string(),
            description: "Improve developer experience.".to_string(),
            name: "technologist".to_string(),
        };

        let option = EmojiOption::new(&technologist, Notation::Emoji);
        assert!(!option.label.contains('\u{200D}'));
        assert!(option.value.contains('\u{200D}'));
    }

    #[test]
    fn test_option_value_respects_notation() {
        let list = sample_list();

        let glyph = EmojiOption::new(&list.gitmojis[0], Notation::Emoji);
        assert_eq!(glyph.value, "✨");

        let code = EmojiOption::new(&list.gitmojis[0], Notation::Code);
        assert_eq!(code.value, ":sparkles:");

        // The label is the same either way
        assert_eq!(glyph.label, "✨  - Introduce new features.");
        assert_eq!(glyph.label, code.label);
    }

    #[test]
    fn test_format_commit() {
        assert_eq!(format_commit(":bug:", "fix crash"), ":bug: fix crash");
        assert_eq!(format_commit("✨", "add feature"), "✨ add feature");
    }
}
