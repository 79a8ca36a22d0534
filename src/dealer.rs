// The dealer: drives one full pass over the player pool, running a
// multi-round ascending-bid resolution per player and committing each
// result to the winning team's ledger and strategy state.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::player::Player;
use crate::strategy::BiddingStrategy;
use crate::team::TeamLedger;

/// Hard cap on rounds per lot. Never reached by the shipped strategies
/// (budgets bound the raises) but protects against a misbehaving strategy
/// raising forever.
const MAX_ROUNDS_PER_LOT: usize = 10_000;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("auction requires at least one team")]
    NoTeams,

    #[error("auction requires a non-empty player pool")]
    NoPlayers,

    #[error("team '{name}' has invalid budget {budget}")]
    InvalidBudget { name: String, budget: f64 },

    #[error("team '{name}' has a zero roster cap")]
    InvalidRosterCap { name: String },
}

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Terminal outcome for one offered player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LotOutcome {
    Sold { team: String, price: f64 },
    Unsold,
}

/// One offered player together with how the lot ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotResult {
    pub player: Player,
    pub outcome: LotOutcome,
}

/// The result of a full auction pass, in offer order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuctionSummary {
    pub lots: Vec<LotResult>,
}

impl AuctionSummary {
    pub fn sold_count(&self) -> usize {
        self.lots
            .iter()
            .filter(|l| matches!(l.outcome, LotOutcome::Sold { .. }))
            .count()
    }

    pub fn unsold_count(&self) -> usize {
        self.lots.len() - self.sold_count()
    }
}

// ---------------------------------------------------------------------------
// Dealer
// ---------------------------------------------------------------------------

/// One auction participant as the dealer sees it: the authoritative ledger
/// plus the team's private bidding strategy.
pub struct TeamEntry {
    pub ledger: TeamLedger,
    pub strategy: Box<dyn BiddingStrategy>,
}

pub struct Dealer {
    teams: Vec<TeamEntry>,
    rng: ChaCha8Rng,
}

impl std::fmt::Debug for Dealer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dealer").finish_non_exhaustive()
    }
}

impl Dealer {
    /// Create a dealer over validated teams. `seed` fixes the stochastic
    /// bid rule for reproducible runs; `None` seeds from entropy.
    pub fn new(teams: Vec<TeamEntry>, seed: Option<u64>) -> Result<Self, SetupError> {
        if teams.is_empty() {
            return Err(SetupError::NoTeams);
        }
        for team in &teams {
            if !(team.ledger.total_budget > 0.0) {
                return Err(SetupError::InvalidBudget {
                    name: team.ledger.name.clone(),
                    budget: team.ledger.total_budget,
                });
            }
            if team.ledger.max_players == 0 {
                return Err(SetupError::InvalidRosterCap {
                    name: team.ledger.name.clone(),
                });
            }
        }

        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Dealer { teams, rng })
    }

    /// Run one full pass over the player pool. Unsold players are not
    /// retried within the pass.
    pub fn run_auction(&mut self, players: &[Player]) -> Result<AuctionSummary, SetupError> {
        if players.is_empty() {
            return Err(SetupError::NoPlayers);
        }

        let mut lots = Vec::with_capacity(players.len());
        for player in players {
            let outcome = self.sell_lot(player);
            lots.push(LotResult {
                player: player.clone(),
                outcome,
            });
        }

        let summary = AuctionSummary { lots };
        info!(
            "auction complete: {} sold, {} unsold",
            summary.sold_count(),
            summary.unsold_count()
        );
        Ok(summary)
    }

    /// The team ledgers, in configured order.
    pub fn ledgers(&self) -> impl Iterator<Item = &TeamLedger> {
        self.teams.iter().map(|t| &t.ledger)
    }

    /// Resolve one lot: poll every team per round until a round passes with
    /// no accepted raise, then commit the result.
    ///
    /// Within a round the highest offered raise wins; exact ties go to the
    /// team earliest in the configured order. Offers a team's ledger cannot
    /// cover are a contract violation of the strategy's own budget gate and
    /// are treated as a pass rather than trusted.
    fn sell_lot(&mut self, player: &Player) -> LotOutcome {
        let mut current_bid = player.base_price;
        let mut leader: Option<usize> = None;

        debug!(
            "offering {} ({}) at base price {:.2}",
            player.name, player.role, player.base_price
        );

        for round in 0.. {
            if round >= MAX_ROUNDS_PER_LOT {
                warn!(
                    "lot for {} hit the round cap; closing at {:.2}",
                    player.name, current_bid
                );
                break;
            }

            let mut best: Option<(usize, f64)> = None;
            for (idx, team) in self.teams.iter().enumerate() {
                if team.ledger.roster_full() {
                    continue;
                }
                let offer = team.strategy.decide_bid(player, current_bid, &mut self.rng);
                if offer <= current_bid {
                    continue;
                }
                if !team.ledger.can_afford(offer) {
                    warn!(
                        "{} offered {:.2} beyond its remaining budget {:.2}; treating as a pass",
                        team.ledger.name, offer, team.ledger.remaining_budget
                    );
                    continue;
                }
                debug!(
                    "round {}: {} raises to {:.2} for {}",
                    round, team.ledger.name, offer, player.name
                );
                if best.map_or(true, |(_, highest)| offer > highest) {
                    best = Some((idx, offer));
                }
            }

            match best {
                Some((idx, offer)) => {
                    current_bid = offer;
                    leader = Some(idx);
                }
                None => break,
            }
        }

        match leader {
            Some(idx) => {
                let team = &mut self.teams[idx];
                team.strategy.update_team(player, current_bid);
                team.ledger.record_win(player.clone(), current_bid);
                info!(
                    "{} sold to {} for {:.2}",
                    player.name, team.ledger.name, current_bid
                );
                LotOutcome::Sold {
                    team: team.ledger.name.clone(),
                    price: current_bid,
                }
            }
            None => {
                info!("{} unsold at base price {:.2}", player.name, player.base_price);
                LotOutcome::Unsold
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
