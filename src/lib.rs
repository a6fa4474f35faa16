//! Wordle Hotseat
//!
//! A terminal Wordle for two players at one keyboard: one player enters the
//! secret, the other guesses it, and an in-memory scoreboard ranks everyone
//! by win rate for the lifetime of the run.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hotseat::core::Verdict;
//!
//! let verdict = Verdict::evaluate("crate", "train");
//! assert_eq!(verdict.render("train"), "+ra--");
//! ```

// Core domain types
pub mod core;

// Game configuration
pub mod settings;

// The external word list
pub mod wordlist;

// The session state machine
pub mod game;

// Per-player statistics and the scoreboard
pub mod stats;

// Menu dispatch loop
pub mod menu;

// Terminal output formatting
pub mod output;
