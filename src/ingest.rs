// Player dataset loading.
//
// Reads the four role-specific CSV files (batsmen, bowlers, allrounders,
// wicketkeepers) and concatenates them into one auction pool. Rows are
// parsed leniently: missing or unparseable numeric fields coerce to 0
// (base price to 0.0) and absent optional columns are tolerated.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::warn;

use crate::config::DatasetPaths;
use crate::player::{Player, Role};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Column handling
// ---------------------------------------------------------------------------

const COL_NAME: &str = "Player";
const COL_MATCHES: &str = "Matches";
const COL_WICKETS: &str = "Wkts";
const COL_BASE_PRICE: &str = "BasePrice";
const COL_NATIONALITY: &str = "Nationality";
const COL_STARS: &str = "Stars";

/// Header-name → index map, matched case-insensitively with whitespace trimmed.
fn column_indices(headers: &csv::StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_lowercase(), idx))
        .collect()
}

fn field<'a>(
    record: &'a csv::StringRecord,
    columns: &HashMap<String, usize>,
    name: &str,
) -> Option<&'a str> {
    columns
        .get(&name.to_lowercase())
        .and_then(|&idx| record.get(idx))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Parse a numeric field, coercing absent or unparseable values to zero.
fn numeric_or_zero(
    record: &csv::StringRecord,
    columns: &HashMap<String, usize>,
    name: &str,
    player: &str,
) -> f64 {
    match field(record, columns, name) {
        None => 0.0,
        Some(raw) => match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                warn!(
                    "coercing unparseable {} value '{}' to 0 for player '{}'",
                    name, raw, player
                );
                0.0
            }
        },
    }
}

// ---------------------------------------------------------------------------
// Reader-based loader (private, enables testing without temp files)
// ---------------------------------------------------------------------------

fn load_players_from_reader<R: Read>(rdr: R, role: Role) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let columns = column_indices(reader.headers()?);

    let mut players = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping malformed {} row: {}", role, e);
                continue;
            }
        };

        let name = match field(&record, &columns, COL_NAME) {
            Some(n) => n.to_string(),
            None => {
                warn!("skipping nameless {} row", role);
                continue;
            }
        };

        let matches = numeric_or_zero(&record, &columns, COL_MATCHES, &name).max(0.0);
        let wickets = numeric_or_zero(&record, &columns, COL_WICKETS, &name).max(0.0);
        let base_price = numeric_or_zero(&record, &columns, COL_BASE_PRICE, &name);
        let base_price = if base_price < 0.0 {
            warn!(
                "coercing negative base price {} to 0.0 for player '{}'",
                base_price, name
            );
            0.0
        } else {
            base_price
        };
        let nationality = field(&record, &columns, COL_NATIONALITY)
            .unwrap_or("I")
            .to_string();

        // Stars only enter the stats map when the column is present; the
        // neutral default lives in Player::stars().
        let mut stats = HashMap::new();
        if let Some(raw) = field(&record, &columns, COL_STARS) {
            match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => {
                    stats.insert("stars".to_string(), v);
                }
                _ => {
                    warn!(
                        "dropping unparseable {} value '{}' for player '{}'; \
                         the neutral default applies",
                        COL_STARS, raw, name
                    );
                }
            }
        }

        players.push(Player {
            name,
            role,
            matches: matches.round() as u32,
            wickets: wickets.round() as u32,
            base_price,
            nationality,
            stats,
        });
    }
    Ok(players)
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

/// Load one role's players from a CSV file.
pub fn load_players(path: &Path, role: Role) -> Result<Vec<Player>, IngestError> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_players_from_reader(file, role).map_err(|e| IngestError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load all four datasets and concatenate them into the auction pool,
/// preserving dataset order (batsmen, bowlers, allrounders, wicketkeepers).
pub fn load_pool(paths: &DatasetPaths) -> Result<Vec<Player>, IngestError> {
    let mut pool = Vec::new();
    for (path, role) in [
        (&paths.batsmen, Role::Batsman),
        (&paths.bowlers, Role::Bowler),
        (&paths.allrounders, Role::Allrounder),
        (&paths.wicketkeepers, Role::Wicketkeeper),
    ] {
        pool.extend(load_players(Path::new(path), role)?);
    }

    if pool.is_empty() {
        return Err(IngestError::Validation(
            "datasets produced an empty player pool".into(),
        ));
    }

    Ok(pool)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
