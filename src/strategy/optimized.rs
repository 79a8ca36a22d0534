// The optimized bidding strategy: fill required roles first, chase star
// performers second, and opportunistically probe while value headroom
// remains. A `BidProfile` parameterises the increments so the aggressive
// variant shares the same decision shape with hotter constants.

use rand::{Rng, RngCore};

use crate::player::Player;
use crate::strategy::{round_to_cents, BiddingStrategy, SquadState};

/// Star rating at or above which a player is treated as a star performer.
pub const STAR_THRESHOLD: f64 = 8.0;

/// Per-star adjustment applied around the neutral rating of 5.
const STAR_VALUE_STEP: f64 = 0.4;

/// Multiplier applied to the estimate of star performers.
const STAR_PREMIUM: f64 = 1.2;

/// Tuning constants for the optimized decision policy.
#[derive(Debug, Clone, Copy)]
pub struct BidProfile {
    /// Raise used while a required role is unfilled.
    pub role_increment: f64,
    /// Raise used on star performers under the estimate.
    pub star_increment: f64,
    /// Raise used by the stochastic probe rule.
    pub probe_increment: f64,
    /// Probability the probe rule fires while headroom remains.
    pub probe_probability: f64,
    /// Fraction of the estimate the role-need rule will bid up to.
    pub role_slack: f64,
}

impl BidProfile {
    /// The standard profile.
    pub fn standard() -> Self {
        BidProfile {
            role_increment: 0.6,
            star_increment: 0.4,
            probe_increment: 0.2,
            probe_probability: 0.4,
            role_slack: 0.95,
        }
    }

    /// Hotter constants: bigger raises, more frequent probes, and a
    /// willingness to pay the full estimate to lock in a needed role.
    pub fn aggressive() -> Self {
        BidProfile {
            role_increment: 0.8,
            star_increment: 0.5,
            probe_increment: 0.3,
            probe_probability: 0.55,
            role_slack: 1.0,
        }
    }
}

pub struct OptimizedStrategy {
    squad: SquadState,
    profile: BidProfile,
}

impl OptimizedStrategy {
    pub fn new(total_budget: f64) -> Self {
        Self::with_profile(total_budget, BidProfile::standard())
    }

    pub fn with_profile(total_budget: f64, profile: BidProfile) -> Self {
        OptimizedStrategy {
            squad: SquadState::new(total_budget),
            profile,
        }
    }

    /// Fair-value estimate: base price adjusted by the star rating, with a
    /// premium for star performers, floored at the base price.
    pub fn estimate_value(&self, player: &Player) -> f64 {
        let stars = player.stars();
        let star_factor = (stars - 5.0) * STAR_VALUE_STEP;
        let mut estimated = player.base_price + star_factor;
        if stars >= STAR_THRESHOLD {
            estimated *= STAR_PREMIUM;
        }
        estimated.max(player.base_price)
    }
}

impl BiddingStrategy for OptimizedStrategy {
    fn decide_bid(&self, player: &Player, current_bid: f64, rng: &mut dyn RngCore) -> f64 {
        if !self.squad.is_valid_bid(player, current_bid) {
            return current_bid;
        }

        let estimated = self.estimate_value(player);
        let p = &self.profile;

        if self.squad.needs_role(player.role) && current_bid < p.role_slack * estimated {
            return round_to_cents(current_bid + p.role_increment);
        }

        if player.stars() >= STAR_THRESHOLD && current_bid < estimated {
            return round_to_cents(current_bid + p.star_increment);
        }

        if current_bid < estimated && rng.gen::<f64>() < p.probe_probability {
            return round_to_cents(current_bid + p.probe_increment);
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
