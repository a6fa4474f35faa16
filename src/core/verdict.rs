//! Guess feedback calculation and representation
//!
//! A verdict classifies every letter of a guess against the secret:
//! - `Exact`: right letter in the right position
//! - `Present`: letter occurs somewhere in the secret
//! - `Absent`: letter does not occur in the secret
//!
//! The textual rendering follows the game's notation: an exact letter prints
//! as itself, a present letter as `+`, an absent letter as `-`.

/// Classification of a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterVerdict {
    /// Right letter, right position
    Exact,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter does not occur in the secret
    Absent,
}

/// Per-position feedback for one guess against one secret
///
/// Holds one [`LetterVerdict`] per guess position. Verdicts are derived per
/// turn and discarded; only the rendered text line is kept for the
/// end-of-session replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict(Vec<LetterVerdict>);

impl Verdict {
    /// Evaluate `guess` against `secret`, left to right
    ///
    /// Position `i` is `Exact` when the letters match, else `Present` when
    /// the guess letter occurs anywhere in the whole secret, else `Absent`.
    /// There is no duplicate-letter budgeting: a repeated guess letter that
    /// the secret contains once renders `Present` at every repeated
    /// position. Callers short-circuit the `guess == secret` case before
    /// evaluating; callers also guarantee equal lengths.
    ///
    /// # Examples
    /// ```
    /// use wordle_hotseat::core::{LetterVerdict, Verdict};
    ///
    /// let verdict = Verdict::evaluate("crate", "train");
    /// assert_eq!(
    ///     verdict.letters(),
    ///     &[
    ///         LetterVerdict::Present, // t occurs in "crate"
    ///         LetterVerdict::Exact,   // r
    ///         LetterVerdict::Exact,   // a
    ///         LetterVerdict::Absent,  // i
    ///         LetterVerdict::Absent,  // n
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn evaluate(secret: &str, guess: &str) -> Self {
        debug_assert_eq!(
            secret.chars().count(),
            guess.chars().count(),
            "callers must enforce equal lengths"
        );

        let secret_chars: Vec<char> = secret.chars().collect();

        let marks = guess
            .chars()
            .enumerate()
            .map(|(i, letter)| {
                if secret_chars.get(i) == Some(&letter) {
                    LetterVerdict::Exact
                } else if secret_chars.contains(&letter) {
                    LetterVerdict::Present
                } else {
                    LetterVerdict::Absent
                }
            })
            .collect();

        Self(marks)
    }

    /// Per-position verdicts, in guess order
    #[must_use]
    pub fn letters(&self) -> &[LetterVerdict] {
        &self.0
    }

    /// Render the verdict in game notation against the guess it was computed
    /// from: exact letters as themselves, `+` for present, `-` for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_hotseat::core::Verdict;
    ///
    /// let verdict = Verdict::evaluate("crate", "train");
    /// assert_eq!(verdict.render("train"), "+ra--");
    /// ```
    #[must_use]
    pub fn render(&self, guess: &str) -> String {
        self.0
            .iter()
            .zip(guess.chars())
            .map(|(mark, letter)| match mark {
                LetterVerdict::Exact => letter,
                LetterVerdict::Present => '+',
                LetterVerdict::Absent => '-',
            })
            .collect()
    }
}
