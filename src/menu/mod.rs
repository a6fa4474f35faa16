//! Menu command parsing and the interactive dispatch loop
//!
//! The driver owns the settings and the ledger and threads them into every
//! operation; the loop itself holds no state beyond the input stream.

use crate::game::run_session;
use crate::output;
use crate::settings::Settings;
use crate::stats::StatsLedger;
use crate::wordlist::WordSource;
use std::io::{self, BufRead};

/// The five menu commands, mapped to the integers 0-4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Exit,
    UpdateSettings,
    Play,
    ViewSettings,
    Scoreboard,
}

impl MenuCommand {
    /// Parse a menu choice
    ///
    /// Exactly the integers 0 through 4 are commands. Anything else,
    /// including signed numbers and out-of-range values, is rejected with
    /// no state change.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        match trimmed.parse::<u32>().ok()? {
            0 => Some(Self::Exit),
            1 => Some(Self::UpdateSettings),
            2 => Some(Self::Play),
            3 => Some(Self::ViewSettings),
            4 => Some(Self::Scoreboard),
            _ => None,
        }
    }
}

/// Run the menu loop until Exit or end of input
///
/// Every non-exit command re-prints the menu afterwards. End of input at the
/// menu prompt terminates normally, same as Exit.
///
/// # Errors
///
/// Returns an I/O error if the input stream fails, or ends in the middle of
/// a prompt sequence that expects more lines.
pub fn run_menu<R: BufRead>(
    settings: &mut Settings,
    ledger: &mut StatsLedger,
    input: &mut R,
) -> io::Result<()> {
    output::print_menu();

    loop {
        let Some(choice) = read_line(input)? else {
            return Ok(());
        };

        match MenuCommand::parse(&choice) {
            Some(MenuCommand::Exit) => return Ok(()),
            Some(MenuCommand::UpdateSettings) => update_settings(settings, input)?,
            Some(MenuCommand::Play) => play(settings, ledger, input)?,
            Some(MenuCommand::ViewSettings) => output::print_settings(settings),
            Some(MenuCommand::Scoreboard) => output::print_scoreboard(ledger),
            None => println!("Invalid option"),
        }

        output::print_menu();
    }
}

/// Prompt for one override line and merge it
///
/// A rejected line prints the reason and leaves the settings untouched.
fn update_settings<R: BufRead>(settings: &mut Settings, input: &mut R) -> io::Result<()> {
    println!("Enter settings:");
    let raw = expect_line(input)?;

    match settings.apply_overrides(&raw) {
        Ok(updated) => {
            *settings = updated;
            println!("Settings were updated");
        }
        Err(error) => println!("Invalid settings: {error}"),
    }

    Ok(())
}

/// Load the word source fresh and run one session
///
/// A word list that cannot be read aborts the session attempt with a notice;
/// the menu resumes either way.
fn play<R: BufRead>(
    settings: &Settings,
    ledger: &mut StatsLedger,
    input: &mut R,
) -> io::Result<()> {
    let source = match WordSource::load(settings.word_source_path()) {
        Ok(source) => source,
        Err(error) => {
            println!(
                "Could not read word list '{}': {error}",
                settings.word_source_path()
            );
            return Ok(());
        }
    };

    if let Some(result) = run_session(settings, &source, input)? {
        ledger.record(&result.tag, result.attempts_used, result.won);
    }

    Ok(())
}

/// Read one trimmed line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Read one trimmed line where end of input is not acceptable
fn expect_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    read_line(input)?.ok_or_else(|| {
        io::Error::new(io::ErrorKind::UnexpectedEof, "input ended mid-prompt")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn parse_accepts_exactly_the_five_commands() {
        assert_eq!(MenuCommand::parse("0"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse("1"), Some(MenuCommand::UpdateSettings));
        assert_eq!(MenuCommand::parse("2"), Some(MenuCommand::Play));
        assert_eq!(MenuCommand::parse("3"), Some(MenuCommand::ViewSettings));
        assert_eq!(MenuCommand::parse("4"), Some(MenuCommand::Scoreboard));
    }

    #[test]
    fn parse_rejects_everything_else() {
        assert_eq!(MenuCommand::parse("5"), None);
        assert_eq!(MenuCommand::parse("42"), None);
        assert_eq!(MenuCommand::parse("-1"), None);
        assert_eq!(MenuCommand::parse("abc"), None);
        assert_eq!(MenuCommand::parse("1.0"), None);
        assert_eq!(MenuCommand::parse(""), None);
        // Larger than any integer type still just means "invalid option"
        assert_eq!(MenuCommand::parse("99999999999999999999"), None);
    }

    fn temp_words_file(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("wordle_hotseat_menu_{name}.txt"));
        fs::write(&path, "crate\ntrain\nslate\n").unwrap();
        path
    }

    #[test]
    fn full_run_records_a_win_in_the_ledger() {
        let words = temp_words_file("win");
        let mut settings = Settings::new(6, 5, words.to_string_lossy()).unwrap();
        let mut ledger = StatsLedger::new();

        // Play a two-guess win, look at the scoreboard, then exit
        let mut input = Cursor::new("2\nalice\ncrate\ntrain\ncrate\n4\n0\n");
        run_menu(&mut settings, &mut ledger, &mut input).unwrap();

        let stats = ledger.get("alice").unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.total_tries_on_wins, 2);
    }

    #[test]
    fn update_settings_command_applies_overrides() {
        let mut settings = Settings::default();
        let mut ledger = StatsLedger::new();

        let mut input = Cursor::new("1\n{tries: 9}\n0\n");
        run_menu(&mut settings, &mut ledger, &mut input).unwrap();

        assert_eq!(settings.tries(), 9);
    }

    #[test]
    fn rejected_overrides_leave_settings_alone() {
        let mut settings = Settings::default();
        let mut ledger = StatsLedger::new();

        let mut input = Cursor::new("1\n{tries: abc}\n0\n");
        run_menu(&mut settings, &mut ledger, &mut input).unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn unreadable_word_list_keeps_the_menu_alive() {
        let mut settings = Settings::new(6, 5, "definitely/missing.txt").unwrap();
        let mut ledger = StatsLedger::new();

        // Play fails to load, then view settings, then exit
        let mut input = Cursor::new("2\n3\n0\n");
        run_menu(&mut settings, &mut ledger, &mut input).unwrap();

        assert!(ledger.is_empty());
    }

    #[test]
    fn invalid_option_changes_nothing() {
        let mut settings = Settings::default();
        let mut ledger = StatsLedger::new();

        let mut input = Cursor::new("7\nbanana\n0\n");
        run_menu(&mut settings, &mut ledger, &mut input).unwrap();

        assert_eq!(settings, Settings::default());
        assert!(ledger.is_empty());
    }

    #[test]
    fn end_of_input_at_the_menu_exits_normally() {
        let mut settings = Settings::default();
        let mut ledger = StatsLedger::new();

        let mut input = Cursor::new("");
        assert!(run_menu(&mut settings, &mut ledger, &mut input).is_ok());
    }

    #[test]
    fn aborted_session_records_no_stats() {
        let words = temp_words_file("abort");
        let mut settings = Settings::new(6, 5, words.to_string_lossy()).unwrap();
        let mut ledger = StatsLedger::new();

        // Secret is not in the word list, so the session aborts
        let mut input = Cursor::new("2\nalice\nzzzzz\n0\n");
        run_menu(&mut settings, &mut ledger, &mut input).unwrap();

        assert!(ledger.is_empty());
    }
}
