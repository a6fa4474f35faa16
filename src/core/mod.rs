//! Core domain types for the game
//!
//! Fundamental types with zero external dependencies: the per-letter verdict
//! and its evaluation against a secret.

mod verdict;

pub use verdict::{LetterVerdict, Verdict};
