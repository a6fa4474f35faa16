//! One play-through of the game
//!
//! Drives secret intake, the guess loop, and end-of-game reporting. The
//! session reads lines from any [`BufRead`], so tests feed it an in-memory
//! cursor while the binary hands it locked stdin.

use crate::core::Verdict;
use crate::output::formatters::{paint_verdict, paint_win};
use crate::settings::Settings;
use crate::wordlist::WordSource;
use colored::Colorize;
use std::fmt;
use std::io::{self, BufRead};

/// Outcome of a completed session, fed into the stats ledger
///
/// `attempts_used` is the 1-based index of the winning guess on a win, and
/// the full tries budget on a loss. Aborted sessions produce no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    pub tag: String,
    pub attempts_used: usize,
    pub won: bool,
}

/// Why a secret was refused at intake
///
/// Either way the session ends immediately and records no stats; only
/// invalid guesses are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretRejection {
    /// Not found in the word source
    NotAWord,
    /// Found, but not the configured word length
    WrongLength,
}

impl fmt::Display for SecretRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAWord => write!(f, "That's not a word!"),
            Self::WrongLength => write!(f, "That word is the wrong length!"),
        }
    }
}

/// Check a secret against the word source and the configured length
///
/// Containment is checked first, so a too-short secret that happens to
/// appear as a substring is reported as the wrong length rather than as not
/// a word.
///
/// # Errors
/// Returns the [`SecretRejection`] that ends the session.
pub fn validate_secret(
    source: &WordSource,
    secret: &str,
    word_length: usize,
) -> Result<(), SecretRejection> {
    if !source.contains(secret) {
        return Err(SecretRejection::NotAWord);
    }
    if secret.chars().count() != word_length {
        return Err(SecretRejection::WrongLength);
    }
    Ok(())
}

/// Run one session: intake, guess loop, result
///
/// Returns `Ok(None)` when the secret is rejected at intake (nothing is
/// recorded for an aborted session) and `Ok(Some(result))` once the game is
/// won or the tries budget is exhausted.
///
/// A wrong-length guess or a guess the word source does not contain prints
/// an invalid-guess notice and consumes no attempt; only evaluated guesses
/// advance the counter. The plain rendering of every verdict is kept and
/// replayed when the game ends.
///
/// # Errors
///
/// Returns an I/O error if the input stream fails or ends mid-session.
pub fn run_session<R: BufRead>(
    settings: &Settings,
    source: &WordSource,
    input: &mut R,
) -> io::Result<Option<SessionResult>> {
    let tag = prompt_line(input, "Enter player's name:")?;
    let secret = prompt_line(input, "Enter a word:")?;

    if let Err(rejection) = validate_secret(source, &secret, settings.word_length()) {
        println!("{rejection}");
        return Ok(None);
    }

    println!(
        "Welcome to Wordle! You have {} tries to guess the word.\nThe word is {} letters long.",
        settings.tries(),
        settings.word_length()
    );

    let mut attempts = 1;
    let mut history: Vec<String> = Vec::new();

    while attempts <= settings.tries() {
        let guess = prompt_line(input, "Guess a word:")?;

        if guess.chars().count() != settings.word_length() {
            println!("Invalid guess");
        } else if !source.contains(&guess) {
            println!("Invalid guess");
        } else if guess == secret {
            println!("{}", paint_win(&guess));
            println!("{}", "You win!".bright_green().bold());
            println!("Game over!");
            history.push(guess);
            replay(&history);
            return Ok(Some(SessionResult {
                tag,
                attempts_used: attempts,
                won: true,
            }));
        } else {
            let verdict = Verdict::evaluate(&secret, &guess);
            println!("{}", paint_verdict(&verdict, &guess));
            history.push(verdict.render(&guess));
            attempts += 1;
        }
    }

    println!(
        "{} The word was {secret}",
        "You lost!".bright_red().bold()
    );
    println!("Game over!");
    replay(&history);

    Ok(Some(SessionResult {
        tag,
        attempts_used: settings.tries(),
        won: false,
    }))
}

/// Print the retained verdict history
fn replay(history: &[String]) {
    for line in history {
        println!("{line}");
    }
}

/// Print a prompt, then read and trim one line
fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<String> {
    println!("{prompt}");

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended mid-session",
        ));
    }

    Ok(line.trim().to_string())
}
