// Team ledgers: the authoritative record of budgets and acquired players.

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// A player won at auction together with the price paid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acquisition {
    pub player: Player,
    pub price: f64,
}

/// The authoritative state of one team. Created before the auction starts
/// and mutated exclusively by the dealer when the team wins a player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamLedger {
    /// Display name of the team.
    pub name: String,
    /// Budget fixed at creation.
    pub total_budget: f64,
    /// Budget left to spend. Always `total_budget - spent()`.
    pub remaining_budget: f64,
    /// Roster cap.
    pub max_players: usize,
    /// Players won, in acquisition order.
    pub acquired: Vec<Acquisition>,
}

impl TeamLedger {
    pub fn new(name: impl Into<String>, budget: f64, max_players: usize) -> Self {
        TeamLedger {
            name: name.into(),
            total_budget: budget,
            remaining_budget: budget,
            max_players,
            acquired: Vec::new(),
        }
    }

    /// Total spent on winning bids so far.
    pub fn spent(&self) -> f64 {
        self.acquired.iter().map(|a| a.price).sum()
    }

    /// Whether the roster has reached its cap.
    pub fn roster_full(&self) -> bool {
        self.acquired.len() >= self.max_players
    }

    /// Whether a bid of the given size fits the remaining budget.
    pub fn can_afford(&self, bid: f64) -> bool {
        bid <= self.remaining_budget
    }

    /// Record a won player. The dealer only calls this after checking
    /// affordability and roster space, so the budget never goes negative.
    pub fn record_win(&mut self, player: Player, price: f64) {
        self.remaining_budget = (self.remaining_budget - price).max(0.0);
        self.acquired.push(Acquisition { player, price });
    }

    /// Sum of star ratings across the acquired roster.
    pub fn total_stars(&self) -> f64 {
        self.acquired.iter().map(|a| a.player.stars()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Role;
    use std::collections::HashMap;

    fn player(name: &str, stars: f64) -> Player {
        let mut stats = HashMap::new();
        stats.insert("stars".to_string(), stars);
        Player {
            name: name.into(),
            role: Role::Batsman,
            matches: 50,
            wickets: 0,
            base_price: 1.0,
            nationality: "I".into(),
            stats,
        }
    }

    #[test]
    fn new_ledger_starts_with_full_budget() {
        let ledger = TeamLedger::new("Team A", 60.0, 15);
        assert_eq!(ledger.remaining_budget, 60.0);
        assert_eq!(ledger.spent(), 0.0);
        assert!(ledger.acquired.is_empty());
        assert!(!ledger.roster_full());
    }

    #[test]
    fn record_win_updates_budget_and_roster() {
        let mut ledger = TeamLedger::new("Team A", 60.0, 15);
        ledger.record_win(player("P1", 7.0), 2.5);
        ledger.record_win(player("P2", 6.0), 1.5);

        assert_eq!(ledger.acquired.len(), 2);
        assert!((ledger.spent() - 4.0).abs() < 1e-9);
        assert!((ledger.remaining_budget - 56.0).abs() < 1e-9);
        assert!(
            (ledger.total_budget - ledger.spent() - ledger.remaining_budget).abs() < 1e-9,
            "budget invariant must hold after every win"
        );
    }

    #[test]
    fn acquisition_order_is_preserved() {
        let mut ledger = TeamLedger::new("Team A", 60.0, 15);
        ledger.record_win(player("First", 5.0), 1.0);
        ledger.record_win(player("Second", 5.0), 1.0);
        assert_eq!(ledger.acquired[0].player.name, "First");
        assert_eq!(ledger.acquired[1].player.name, "Second");
    }

    #[test]
    fn roster_full_at_cap() {
        let mut ledger = TeamLedger::new("Team A", 60.0, 2);
        ledger.record_win(player("P1", 5.0), 1.0);
        assert!(!ledger.roster_full());
        ledger.record_win(player("P2", 5.0), 1.0);
        assert!(ledger.roster_full());
    }

    #[test]
    fn can_afford_boundary() {
        let ledger = TeamLedger::new("Team A", 10.0, 15);
        assert!(ledger.can_afford(10.0));
        assert!(!ledger.can_afford(10.01));
    }

    #[test]
    fn total_stars_sums_roster() {
        let mut ledger = TeamLedger::new("Team A", 60.0, 15);
        ledger.record_win(player("P1", 8.0), 1.0);
        ledger.record_win(player("P2", 6.5), 1.0);
        assert!((ledger.total_stars() - 14.5).abs() < 1e-9);
    }
}
