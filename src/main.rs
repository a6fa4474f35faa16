//! Wordle Hotseat - CLI
//!
//! Terminal Wordle with configurable settings and a per-player scoreboard.
//! Startup flags seed the initial settings; everything else happens through
//! the interactive menu.

use anyhow::Result;
use clap::Parser;
use std::io;
use wordle_hotseat::{
    menu::run_menu,
    settings::{DEFAULT_TRIES, DEFAULT_WORD_LENGTH, DEFAULT_WORD_SOURCE, Settings},
    stats::StatsLedger,
};

#[derive(Parser)]
#[command(
    name = "wordle_hotseat",
    about = "Terminal Wordle for two players at one keyboard, with settings and a scoreboard",
    version,
    author
)]
struct Cli {
    /// Number of guesses allowed per game
    #[arg(short, long)]
    tries: Option<usize>,

    /// Secret word length
    #[arg(short = 'l', long)]
    word_length: Option<usize>,

    /// Path to the word-list file
    #[arg(short = 'w', long)]
    wordlist: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::new(
        cli.tries.unwrap_or(DEFAULT_TRIES),
        cli.word_length.unwrap_or(DEFAULT_WORD_LENGTH),
        cli.wordlist
            .unwrap_or_else(|| DEFAULT_WORD_SOURCE.to_string()),
    )?;
    let mut ledger = StatsLedger::new();

    let stdin = io::stdin();
    run_menu(&mut settings, &mut ledger, &mut stdin.lock())?;

    Ok(())
}
