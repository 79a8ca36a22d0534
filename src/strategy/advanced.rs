// The advanced bidding strategy: star-chasing tempered by budget pacing.
// It refuses to sink more than a fixed fraction of its remaining budget
// into any one player, so it stays competitive deep into the auction.

use rand::{Rng, RngCore};

use crate::player::Player;
use crate::strategy::{round_to_cents, BiddingStrategy, SquadState};

/// Stars at or above which the chase rule engages.
const CHASE_THRESHOLD: f64 = 7.0;

/// How far above its own estimate the strategy will chase a needed role.
const CEILING_MARGIN: f64 = 1.1;

/// Largest share of the remaining budget committed to a single player.
const BUDGET_SHARE: f64 = 0.4;

const ROLE_INCREMENT: f64 = 0.6;
const CHASE_INCREMENT: f64 = 0.4;
const PROBE_INCREMENT: f64 = 0.2;
const PROBE_PROBABILITY: f64 = 0.25;
const PROBE_DISCOUNT: f64 = 0.8;

pub struct AdvancedStrategy {
    squad: SquadState,
}

impl AdvancedStrategy {
    pub fn new(total_budget: f64) -> Self {
        AdvancedStrategy {
            squad: SquadState::new(total_budget),
        }
    }

    /// Fair-value estimate: base price plus a star adjustment weighted a
    /// little above the optimized strategy's, floored at the base price.
    pub fn estimate_value(&self, player: &Player) -> f64 {
        let star_factor = (player.stars() - 5.0) * 0.5;
        (player.base_price + star_factor).max(player.base_price)
    }

    /// The most this strategy will let one player cost: slightly above its
    /// estimate, but never more than a share of the remaining budget.
    fn ceiling(&self, estimated: f64) -> f64 {
        (estimated * CEILING_MARGIN).min(self.squad.remaining_budget * BUDGET_SHARE)
    }
}

impl BiddingStrategy for AdvancedStrategy {
    fn decide_bid(&self, player: &Player, current_bid: f64, rng: &mut dyn RngCore) -> f64 {
        if !self.squad.is_valid_bid(player, current_bid) {
            return current_bid;
        }

        let estimated = self.estimate_value(player);
        let ceiling = self.ceiling(estimated);

        if self.squad.needs_role(player.role) && current_bid < ceiling {
            return round_to_cents(current_bid + ROLE_INCREMENT);
        }

        if player.stars() >= CHASE_THRESHOLD && current_bid < ceiling {
            return round_to_cents(current_bid + CHASE_INCREMENT);
        }

        if current_bid < estimated * PROBE_DISCOUNT && rng.gen::<f64>() < PROBE_PROBABILITY {
            return round_to_cents(current_bid + PROBE_INCREMENT);
        }

        current_bid
    }

    fn update_team(&mut self, player: &Player, winning_bid: f64) {
        self.squad.record_win(player, winning_bid);
    }

    fn squad(&self) -> &SquadState {
        &self.squad
    }
}
