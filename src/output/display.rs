//! Display functions for the menu and the ledger views

use crate::settings::Settings;
use crate::stats::{StatsLedger, scoreboard};
use colored::Colorize;

/// Print the main menu
pub fn print_menu() {
    println!(
        "{}\n0. Exit\n1. Update settings\n2. Play\n3. View settings\n4. Scoreboard",
        "Choose an option:".bright_cyan()
    );
}

/// Print every settings pair, sorted by key
pub fn print_settings(settings: &Settings) {
    for (key, value) in settings.entries() {
        println!("{key}: {value}");
    }
}

/// Print the ranked scoreboard
pub fn print_scoreboard(ledger: &StatsLedger) {
    println!("{}", "Scoreboard:".bright_cyan());
    for line in scoreboard::render(ledger) {
        println!("{line}");
    }
}
