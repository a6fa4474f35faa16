//! Scoreboard ranking and rendering

use super::{PlayerStats, StatsLedger};

/// Render the ledger as ordered scoreboard lines
///
/// Ranking is by descending win rate, ties broken by ascending tag. Players
/// with at least one win show their games played, win rate, and average
/// tries per win to two decimal places; winless players show a `0.00` rate
/// and a literal `NaN` average.
///
/// # Examples
/// ```
/// use wordle_hotseat::stats::{StatsLedger, scoreboard};
///
/// let mut ledger = StatsLedger::new();
/// ledger.record("alice", 3, true);
/// ledger.record("alice", 6, false);
///
/// let lines = scoreboard::render(&ledger);
/// assert_eq!(lines, ["alice: 2 games, 50.00% win rate, 3.00 average tries"]);
/// ```
#[must_use]
pub fn render(ledger: &StatsLedger) -> Vec<String> {
    let mut rows: Vec<(&str, &PlayerStats)> = ledger.iter().collect();
    rows.sort_by(|(tag_a, stats_a), (tag_b, stats_b)| {
        stats_b
            .win_rate()
            .total_cmp(&stats_a.win_rate())
            .then_with(|| tag_a.cmp(tag_b))
    });

    rows.into_iter()
        .map(|(tag, stats)| format_row(tag, stats))
        .collect()
}

fn format_row(tag: &str, stats: &PlayerStats) -> String {
    let games = stats.games_played;
    match stats.average_tries() {
        Some(average) => format!(
            "{tag}: {games} games, {rate:.2}% win rate, {average:.2} average tries",
            rate = stats.win_rate()
        ),
        None => format!("{tag}: {games} games, 0.00% win rate, NaN average tries"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_win_rate_ranks_first() {
        let mut ledger = StatsLedger::new();
        // alice: 2 games, 1 win in 3 tries -> 50.00%, 3.00 average
        ledger.record("alice", 3, true);
        ledger.record("alice", 6, false);
        // bob: 4 games, 1 win in 4 tries -> 25.00%, 4.00 average
        ledger.record("bob", 4, true);
        ledger.record("bob", 6, false);
        ledger.record("bob", 6, false);
        ledger.record("bob", 6, false);

        let lines = render(&ledger);
        assert_eq!(
            lines,
            [
                "alice: 2 games, 50.00% win rate, 3.00 average tries",
                "bob: 4 games, 25.00% win rate, 4.00 average tries",
            ]
        );
    }

    #[test]
    fn equal_rates_break_ties_by_tag() {
        let mut ledger = StatsLedger::new();
        ledger.record("zoe", 2, true);
        ledger.record("amy", 5, true);

        let lines = render(&ledger);
        assert!(lines[0].starts_with("amy:"));
        assert!(lines[1].starts_with("zoe:"));
    }

    #[test]
    fn winless_row_shows_nan_average() {
        let mut ledger = StatsLedger::new();
        ledger.record("carol", 6, false);

        let lines = render(&ledger);
        assert_eq!(lines, ["carol: 1 games, 0.00% win rate, NaN average tries"]);
    }

    #[test]
    fn winless_rows_sort_below_winners() {
        let mut ledger = StatsLedger::new();
        ledger.record("carol", 6, false);
        ledger.record("dave", 2, true);

        let lines = render(&ledger);
        assert!(lines[0].starts_with("dave:"));
        assert!(lines[1].starts_with("carol:"));
    }

    #[test]
    fn empty_ledger_renders_nothing() {
        assert!(render(&StatsLedger::new()).is_empty());
    }
}
