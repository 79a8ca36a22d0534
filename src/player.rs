// Player records: the immutable items offered at auction.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Neutral star rating assumed when a player record carries no `stars` metric.
pub const DEFAULT_STARS: f64 = 5.0;

/// Nationality code denoting a domestic player. Anything else is foreign.
pub const DOMESTIC_CODE: &str = "I";

/// The four roles a player can be auctioned under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Batsman,
    Bowler,
    Allrounder,
    Wicketkeeper,
}

impl Role {
    /// All roles, in dataset loading order.
    pub fn all() -> [Role; 4] {
        [
            Role::Batsman,
            Role::Bowler,
            Role::Allrounder,
            Role::Wicketkeeper,
        ]
    }

    /// Return the display string for this role.
    pub fn display_str(&self) -> &'static str {
        match self {
            Role::Batsman => "batsman",
            Role::Bowler => "bowler",
            Role::Allrounder => "allrounder",
            Role::Wicketkeeper => "wicketkeeper",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

/// One auction item. Constructed during ingestion, read-only afterwards;
/// the auction loop never mutates a player record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Display name. Not guaranteed unique across the pool.
    pub name: String,
    /// Role the player was listed under.
    pub role: Role,
    /// Career matches played. Zero when the source field was missing.
    pub matches: u32,
    /// Career wickets taken. Zero when the source field was missing.
    pub wickets: u32,
    /// Reserve price the bidding opens at. Never negative.
    pub base_price: f64,
    /// Nationality code; `"I"` is domestic, anything else is foreign.
    pub nationality: String,
    /// Named numeric metrics. The `stars` metric drives valuation.
    #[serde(default)]
    pub stats: HashMap<String, f64>,
}

impl Player {
    /// Whether the player counts against the foreign-player quota.
    pub fn is_foreign(&self) -> bool {
        self.nationality != DOMESTIC_CODE
    }

    /// Star rating, defaulting to the neutral rating of 5 when absent.
    pub fn stars(&self) -> f64 {
        self.stat("stars").unwrap_or(DEFAULT_STARS)
    }

    /// Look up a named metric.
    pub fn stat(&self, name: &str) -> Option<f64> {
        self.stats.get(name).copied()
    }
}
