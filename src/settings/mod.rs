//! Game configuration and override parsing
//!
//! Settings live for the process lifetime and are only replaced through a
//! validated merge: either the startup flags or one line of override text in
//! the form `{key1: value1, key2: value2}`. A failed parse leaves the
//! current settings untouched.

use rustc_hash::FxHashMap;
use std::fmt;

/// Default number of guesses per game
pub const DEFAULT_TRIES: usize = 6;

/// Default secret word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default word-list path
pub const DEFAULT_WORD_SOURCE: &str = "words.txt";

/// Game configuration
///
/// `tries` and `word_length` are always at least 1. Override keys that the
/// game does not recognize are accepted but inert; they land in an explicit
/// extras bucket so the behavior stays visible and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    tries: usize,
    word_length: usize,
    word_source_path: String,
    extras: FxHashMap<String, String>,
}

/// Error type for rejected settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Override text not wrapped in literal `{` and `}`
    MissingBraces,
    /// A pair did not split on `:` into exactly two non-empty parts
    MalformedPair(String),
    /// The same key appeared twice in one override line
    DuplicateKey(String),
    /// `tries` or `word_length` carried a value that is not a digit run
    NonNumeric { key: &'static str, value: String },
    /// `tries` or `word_length` would drop below 1
    OutOfRange(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBraces => {
                write!(f, "settings must be wrapped in {{ and }}")
            }
            Self::MalformedPair(pair) => {
                write!(f, "'{pair}' is not a key: value pair")
            }
            Self::DuplicateKey(key) => write!(f, "duplicate key '{key}'"),
            Self::NonNumeric { key, value } => {
                write!(f, "{key} must be a number, got '{value}'")
            }
            Self::OutOfRange(key) => write!(f, "{key} must be at least 1"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl Settings {
    /// Create settings with explicit values
    ///
    /// # Errors
    /// Returns [`SettingsError::OutOfRange`] when `tries` or `word_length`
    /// is zero.
    pub fn new(
        tries: usize,
        word_length: usize,
        word_source_path: impl Into<String>,
    ) -> Result<Self, SettingsError> {
        if tries == 0 {
            return Err(SettingsError::OutOfRange("tries"));
        }
        if word_length == 0 {
            return Err(SettingsError::OutOfRange("word_length"));
        }

        Ok(Self {
            tries,
            word_length,
            word_source_path: word_source_path.into(),
            extras: FxHashMap::default(),
        })
    }

    /// Number of guesses allowed per game
    #[inline]
    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }

    /// Required secret and guess length
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Path of the word-list file
    #[inline]
    #[must_use]
    pub fn word_source_path(&self) -> &str {
        &self.word_source_path
    }

    /// Accepted-but-inert override keys
    #[inline]
    #[must_use]
    pub const fn extras(&self) -> &FxHashMap<String, String> {
        &self.extras
    }

    /// Parse one line of override text and merge it into these settings
    ///
    /// The grammar is a single brace-wrapped list of comma-separated
    /// `key: value` pairs, no nesting, no escaping. On success the override
    /// wins on every key collision and a new `Settings` is returned; on any
    /// error the current settings are unchanged.
    ///
    /// `tries` and `word_length` values must be digit runs and at least 1.
    /// `word_source_path` is stored as given. Every other key is accepted
    /// into the extras bucket with no effect on gameplay.
    ///
    /// # Errors
    /// See [`SettingsError`] for the rejection cases.
    ///
    /// # Examples
    /// ```
    /// use wordle_hotseat::settings::Settings;
    ///
    /// let settings = Settings::default();
    /// let updated = settings.apply_overrides("{tries: 8, word_length: 6}").unwrap();
    /// assert_eq!(updated.tries(), 8);
    /// assert_eq!(updated.word_length(), 6);
    /// assert_eq!(updated.word_source_path(), "words.txt");
    ///
    /// assert!(settings.apply_overrides("tries: 8").is_err());
    /// ```
    pub fn apply_overrides(&self, raw: &str) -> Result<Self, SettingsError> {
        let inner = raw
            .trim()
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or(SettingsError::MissingBraces)?;

        let mut pairs: Vec<(String, String)> = Vec::new();
        for pair in inner.split(',') {
            let parts: Vec<&str> = pair.split(':').collect();
            let [key, value] = parts.as_slice() else {
                return Err(SettingsError::MalformedPair(pair.trim().to_string()));
            };

            let key = key.trim();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                return Err(SettingsError::MalformedPair(pair.trim().to_string()));
            }
            if pairs.iter().any(|(seen, _)| seen.as_str() == key) {
                return Err(SettingsError::DuplicateKey(key.to_string()));
            }

            pairs.push((key.to_string(), value.to_string()));
        }

        let mut updated = self.clone();
        for (key, value) in pairs {
            match key.as_str() {
                "tries" => updated.tries = parse_count("tries", &value)?,
                "word_length" => {
                    updated.word_length = parse_count("word_length", &value)?;
                }
                "word_source_path" => updated.word_source_path = value,
                _ => {
                    updated.extras.insert(key, value);
                }
            }
        }

        Ok(updated)
    }

    /// All settings as `(key, value)` pairs, sorted by key
    ///
    /// The three named fields and the extras render alike; the view command
    /// prints one `key: value` line per pair.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = vec![
            ("tries".to_string(), self.tries.to_string()),
            ("word_length".to_string(), self.word_length.to_string()),
            (
                "word_source_path".to_string(),
                self.word_source_path.clone(),
            ),
        ];
        entries.extend(
            self.extras
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        entries.sort();
        entries
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tries: DEFAULT_TRIES,
            word_length: DEFAULT_WORD_LENGTH,
            word_source_path: DEFAULT_WORD_SOURCE.to_string(),
            extras: FxHashMap::default(),
        }
    }
}

/// Parse a numeric settings value: a run of ASCII digits, at least 1
fn parse_count(key: &'static str, value: &str) -> Result<usize, SettingsError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(SettingsError::NonNumeric {
            key,
            value: value.to_string(),
        });
    }

    let count: usize = value.parse().map_err(|_| SettingsError::NonNumeric {
        key,
        value: value.to_string(),
    })?;

    if count == 0 {
        return Err(SettingsError::OutOfRange(key));
    }

    Ok(count)
}
