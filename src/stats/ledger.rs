//! Per-player aggregate statistics
//!
//! The ledger lives for the process lifetime; nothing is persisted.

use rustc_hash::FxHashMap;

/// Aggregate results for one player tag
///
/// `total_tries_on_wins` only ever counts winning games, so the average
/// tries per win is `total_tries_on_wins / wins`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub games_played: u64,
    pub wins: u64,
    pub total_tries_on_wins: u64,
}

impl PlayerStats {
    /// Win rate as a percentage, `0` before any game is recorded
    #[must_use]
    pub fn win_rate(self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64 * 100.0
        }
    }

    /// Average tries per winning game, `None` while winless
    #[must_use]
    pub fn average_tries(self) -> Option<f64> {
        if self.wins == 0 {
            None
        } else {
            Some(self.total_tries_on_wins as f64 / self.wins as f64)
        }
    }
}

/// In-memory statistics keyed by player tag
///
/// Tags are case-sensitive and user-supplied; the same tag reused across
/// sessions accumulates into the same entry.
#[derive(Debug, Clone, Default)]
pub struct StatsLedger {
    entries: FxHashMap<String, PlayerStats>,
}

impl StatsLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished session into the ledger
    ///
    /// Always counts a played game, creating the entry on first sight.
    /// Wins additionally bump the win counter and charge `attempts` to the
    /// tries-on-wins total.
    pub fn record(&mut self, tag: &str, attempts: usize, won: bool) {
        let stats = self.entries.entry(tag.to_string()).or_default();
        stats.games_played += 1;
        if won {
            stats.wins += 1;
            stats.total_tries_on_wins += attempts as u64;
        }
    }

    /// Look up one player's stats
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&PlayerStats> {
        self.entries.get(tag)
    }

    /// Iterate over all `(tag, stats)` entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerStats)> {
        self.entries
            .iter()
            .map(|(tag, stats)| (tag.as_str(), stats))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_creates_entry_on_first_game() {
        let mut ledger = StatsLedger::new();
        ledger.record("alice", 3, true);

        let stats = ledger.get("alice").unwrap();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.total_tries_on_wins, 3);
    }

    #[test]
    fn record_accumulates_across_sessions() {
        let mut ledger = StatsLedger::new();
        ledger.record("alice", 3, true);
        ledger.record("alice", 6, false);

        let stats = ledger.get("alice").unwrap();
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.wins, 1);
        // Losses never touch the tries-on-wins total
        assert_eq!(stats.total_tries_on_wins, 3);
    }

    #[test]
    fn tags_are_case_sensitive() {
        let mut ledger = StatsLedger::new();
        ledger.record("alice", 2, true);
        ledger.record("Alice", 4, false);

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get("alice").unwrap().wins, 1);
        assert_eq!(ledger.get("Alice").unwrap().wins, 0);
    }

    #[test]
    fn win_rate_percentage() {
        let mut ledger = StatsLedger::new();
        ledger.record("bob", 4, true);
        ledger.record("bob", 6, false);
        ledger.record("bob", 6, false);
        ledger.record("bob", 6, false);

        let stats = ledger.get("bob").unwrap();
        assert!((stats.win_rate() - 25.0).abs() < f64::EPSILON);
        assert_eq!(stats.average_tries(), Some(4.0));
    }

    #[test]
    fn winless_player_has_no_average() {
        let mut ledger = StatsLedger::new();
        ledger.record("carol", 6, false);

        let stats = ledger.get("carol").unwrap();
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.average_tries(), None);
    }

    #[test]
    fn fresh_stats_rate_is_zero() {
        let stats = PlayerStats::default();
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);
    }
}
