// Bidding strategies: per-team decision logic polled by the dealer.
//
// Every strategy implements the same contract: `decide_bid` returns either
// the current bid unchanged (no raise) or a strictly higher amount, and
// `update_team` commits a won player into the strategy's own state. The
// dealer selects an implementation per team from config at setup.

pub mod advanced;
pub mod optimized;
pub mod statistical;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::StrategyKind;
use crate::player::{Player, Role};

/// No team may hold more than this many foreign players.
pub const MAX_FOREIGN_PLAYERS: u32 = 4;

/// Minimum roster requirement per role. Allrounders carry no minimum, so
/// the role-need bid rule never fires for them.
pub fn role_requirement(role: Role) -> u32 {
    match role {
        Role::Batsman => 3,
        Role::Bowler => 3,
        Role::Wicketkeeper => 1,
        Role::Allrounder => 0,
    }
}

/// Round a currency amount to two decimals.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// The decision contract each team's strategy implements.
///
/// `decide_bid` must never return less than `current_bid`; returning it
/// unchanged means "no raise". State changes happen only through
/// `update_team`, which the dealer calls exactly once per won player.
pub trait BiddingStrategy {
    fn decide_bid(&self, player: &Player, current_bid: f64, rng: &mut dyn RngCore) -> f64;

    fn update_team(&mut self, player: &Player, winning_bid: f64);

    /// The strategy's internal squad view, for reporting and tests.
    fn squad(&self) -> &SquadState;
}

/// Per-strategy mirror of the team's composition. Logically distinct from
/// the authoritative `TeamLedger`; the strategy consults only this view
/// when deciding bids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadState {
    pub remaining_budget: f64,
    pub batsmen: u32,
    pub bowlers: u32,
    pub allrounders: u32,
    pub wicketkeepers: u32,
    pub foreign_players: u32,
    pub players_acquired: Vec<Player>,
}

impl SquadState {
    pub fn new(total_budget: f64) -> Self {
        SquadState {
            remaining_budget: total_budget,
            batsmen: 0,
            bowlers: 0,
            allrounders: 0,
            wicketkeepers: 0,
            foreign_players: 0,
            players_acquired: Vec::new(),
        }
    }

    /// Count of acquired players in the given role.
    pub fn role_count(&self, role: Role) -> u32 {
        match role {
            Role::Batsman => self.batsmen,
            Role::Bowler => self.bowlers,
            Role::Allrounder => self.allrounders,
            Role::Wicketkeeper => self.wicketkeepers,
        }
    }

    /// Whether the squad is still below the minimum requirement for a role.
    pub fn needs_role(&self, role: Role) -> bool {
        self.role_count(role) < role_requirement(role)
    }

    /// Gate every bid: rejects when the standing bid already exceeds the
    /// tracked budget, or when the player is foreign and the quota is full.
    /// No side effects.
    pub fn is_valid_bid(&self, player: &Player, current_bid: f64) -> bool {
        if current_bid > self.remaining_budget {
            return false;
        }
        if player.is_foreign() && self.foreign_players >= MAX_FOREIGN_PLAYERS {
            return false;
        }
        true
    }

    /// Commit a won player: append, deduct the bid, bump counters.
    pub fn record_win(&mut self, player: &Player, winning_bid: f64) {
        match player.role {
            Role::Batsman => self.batsmen += 1,
            Role::Bowler => self.bowlers += 1,
            Role::Allrounder => self.allrounders += 1,
            Role::Wicketkeeper => self.wicketkeepers += 1,
        }
        if player.is_foreign() {
            self.foreign_players += 1;
        }
        self.remaining_budget = round_to_cents((self.remaining_budget - winning_bid).max(0.0));
        self.players_acquired.push(player.clone());
    }
}

/// Build the strategy implementation for a config tag.
pub fn build(kind: StrategyKind, total_budget: f64) -> Box<dyn BiddingStrategy> {
    match kind {
        StrategyKind::Optimized => Box::new(optimized::OptimizedStrategy::new(total_budget)),
        StrategyKind::Aggressive => Box::new(optimized::OptimizedStrategy::with_profile(
            total_budget,
            optimized::BidProfile::aggressive(),
        )),
        StrategyKind::Statistical => {
            Box::new(statistical::StatisticalStrategy::new(total_budget))
        }
        StrategyKind::Advanced => Box::new(advanced::AdvancedStrategy::new(total_budget)),
    }
}
