//! Word-list loading and membership checks

use std::fs;
use std::io;
use std::path::Path;

/// The external word list, held as one raw text blob
///
/// Any text file works as long as valid words appear somewhere in it; the
/// stock `words.txt` is newline-separated.
#[derive(Debug, Clone)]
pub struct WordSource {
    blob: String,
}

impl WordSource {
    /// Read the word list at `path` into memory
    ///
    /// The blob is re-read at the start of every session, so an edited file
    /// takes effect on the next game.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_hotseat::wordlist::WordSource;
    ///
    /// let source = WordSource::load("words.txt").unwrap();
    /// assert!(source.contains("crate"));
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let blob = fs::read_to_string(path)?;
        Ok(Self { blob })
    }

    /// Wrap an already-loaded blob
    #[must_use]
    pub fn from_blob(blob: impl Into<String>) -> Self {
        Self { blob: blob.into() }
    }

    /// Whether `candidate` occurs as a literal contiguous substring of the
    /// blob
    ///
    /// This is substring containment, not token membership: a short
    /// candidate can match inside a longer word or across a line boundary.
    /// Whether token membership was the intended semantic is an open
    /// question with stakeholders; until that is settled the lookup stays
    /// as-is.
    #[inline]
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.blob.contains(candidate)
    }
}
