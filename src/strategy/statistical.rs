// The statistical bidding strategy: values match and wicket history on top
// of the star rating, and replaces the stochastic probe with a fixed
// headroom band so its behavior is fully deterministic.

use rand::RngCore;

use crate::player::{Player, Role};
use crate::strategy::{round_to_cents, BiddingStrategy, SquadState};

/// Experience credit per 50 matches, capped at two increments.
const EXPERIENCE_STEP: f64 = 0.25;
const EXPERIENCE_CAP: f64 = 0.5;

/// Extra credit per wicket-per-match for bowlers and allrounders.
const WICKET_WEIGHT: f64 = 1.5;

/// Raise while a required role is unfilled and the bid sits under 90% of
/// the estimate.
const ROLE_INCREMENT: f64 = 0.5;
const ROLE_SLACK: f64 = 0.9;

/// Raise while the bid sits at least this far below the estimate.
const HEADROOM_INCREMENT: f64 = 0.3;
const HEADROOM_BAND: f64 = 0.3;

pub struct StatisticalStrategy {
    squad: SquadState,
}

impl StatisticalStrategy {
    pub fn new(total_budget: f64) -> Self {
        StatisticalStrategy {
            squad: SquadState::new(total_budget),
        }
    }

    /// Fair-value estimate from performance history: star rating around the
    /// neutral 5, an experience credit for matches played, and a strike-rate
    /// credit for wicket-takers. Floored at the base price.
    pub fn estimate_value(&self, player: &Player) -> f64 {
        let star_factor = (player.stars() - 5.0) * 0.3;
        let experience = ((player.matches as f64 / 50.0) * EXPERIENCE_STEP).min(EXPERIENCE_CAP);
        let wicket_factor = match player.role {
            Role::Bowler | Role::Allrounder if player.matches > 0 => {
                (player.wickets as f64 / player.matches as f64) * WICKET_WEIGHT
            }
            _ => 0.0,
        };
        (player.base_price + star_factor + experience + wicket_factor).max(player.base_price)
    }
}

impl BiddingStrategy for StatisticalStrategy {
    fn decide_bid(&self, player: &Player, current_bid: f64, _rng: &mut dyn RngCore) -> f64 {
        if !self.squad.is_valid_bid(player, current_bid) {
            return current_bid;
        }

        let estimated = self.estimate_value(player);

        if self.squad.needs_role(player.role) && current_bid < ROLE_SLACK * estimated {
            return round_to_cents(current_bid + ROLE_INCREMENT);
        }

        if current_bid + HEADROOM_BAND <= estimated {
            return round_to_cents(current_bid + HEADROOM_INCREMENT);
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
