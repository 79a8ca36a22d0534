// Configuration loading and parsing (config/auction.toml).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// auction.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire auction.toml file.
#[derive(Debug, Clone, Deserialize)]
struct AuctionFile {
    auction: AuctionSection,
    datasets: DatasetPaths,
    #[serde(default)]
    teams: Vec<TeamConfig>,
}

#[derive(Debug, Clone, Deserialize)]
struct AuctionSection {
    name: String,
    max_players: usize,
    /// RNG seed for the stochastic bid rule. Omit for a per-run random seed.
    #[serde(default)]
    seed: Option<u64>,
}

/// Paths to the four role-specific player CSV files.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetPaths {
    pub batsmen: String,
    pub bowlers: String,
    pub allrounders: String,
    pub wicketkeepers: String,
}

/// One `[[teams]]` entry: a participant with a budget and a chosen strategy.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamConfig {
    pub name: String,
    pub budget: f64,
    pub strategy: StrategyKind,
}

/// Which bidding strategy implementation a team uses. Tags match the
/// `strategy = "..."` values in auction.toml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Optimized,
    Aggressive,
    Statistical,
    Advanced,
}

/// The public config assembled from auction.toml.
#[derive(Debug, Clone)]
pub struct Config {
    pub auction_name: String,
    pub max_players: usize,
    pub seed: Option<u64>,
    pub datasets: DatasetPaths,
    pub teams: Vec<TeamConfig>,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/auction.toml` relative to
/// the given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy
/// defaults. Prefer `load_config()` which handles default initialization.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("auction.toml");
    let text = std::fs::read_to_string(&path).map_err(|_| ConfigError::FileNotFound {
        path: path.clone(),
    })?;
    let file: AuctionFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let config = Config {
        auction_name: file.auction.name,
        max_players: file.auction.max_players,
        seed: file.auction.seed,
        datasets: file.datasets,
        teams: file.teams,
    };

    validate(&config)?;

    Ok(config)
}

/// Ensure `config/auction.toml` exists by copying it from `defaults/` when
/// missing. Returns the list of files that were copied.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut copied = Vec::new();

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let target = config_dir.join(file_name);
        if target.exists() {
            continue;
        }

        std::fs::copy(&path, &target).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to copy {} to {}: {e}", path.display(), target.display()),
        })?;
        copied.push(target);
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working
/// directory, copying default config files first when needed.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.max_players == 0 {
        return Err(ConfigError::ValidationError {
            field: "auction.max_players".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.teams.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "teams".into(),
            message: "at least one team must be configured".into(),
        });
    }

    for team in &config.teams {
        if team.name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: "teams.name".into(),
                message: "team name must not be empty".into(),
            });
        }
        if !(team.budget > 0.0) {
            return Err(ConfigError::ValidationError {
                field: format!("teams.{}.budget", team.name),
                message: format!("must be > 0, got {}", team.budget),
            });
        }
    }

    // Duplicate team names would make ledgers ambiguous in reporting.
    for (i, team) in config.teams.iter().enumerate() {
        if config.teams[..i].iter().any(|t| t.name == team.name) {
            return Err(ConfigError::ValidationError {
                field: "teams.name".into(),
                message: format!("duplicate team name '{}'", team.name),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const VALID_TOML: &str = r#"
[auction]
name = "Test Auction"
max_players = 15
seed = 42

[datasets]
batsmen = "dataset/batsmen.csv"
bowlers = "dataset/bowlers.csv"
allrounders = "dataset/allrounders.csv"
wicketkeepers = "dataset/wicketkeepers.csv"

[[teams]]
name = "Team A"
budget = 60.0
strategy = "optimized"

[[teams]]
name = "Team B"
budget = 60.0
strategy = "statistical"
"#;

    fn write_config(dir_name: &str, toml_text: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(dir_name);
        let config_dir = tmp.join("config");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("auction.toml"), toml_text).unwrap();
        tmp
    }

    #[test]
    fn load_valid_config() {
        let tmp = write_config("auction_config_valid", VALID_TOML);
        let config = load_config_from(&tmp).expect("should load valid config");

        assert_eq!(config.auction_name, "Test Auction");
        assert_eq!(config.max_players, 15);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.datasets.batsmen, "dataset/batsmen.csv");
        assert_eq!(config.teams.len(), 2);
        assert_eq!(config.teams[0].name, "Team A");
        assert_eq!(config.teams[0].strategy, StrategyKind::Optimized);
        assert_eq!(config.teams[1].strategy, StrategyKind::Statistical);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn seed_is_optional() {
        let toml_text = VALID_TOML.replace("seed = 42\n", "");
        let tmp = write_config("auction_config_no_seed", &toml_text);
        let config = load_config_from(&tmp).expect("should load without seed");
        assert_eq!(config.seed, None);
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_zero_max_players() {
        let toml_text = VALID_TOML.replace("max_players = 15", "max_players = 0");
        let tmp = write_config("auction_config_zero_cap", &toml_text);
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "auction.max_players");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_nonpositive_budget() {
        let toml_text = VALID_TOML.replace("budget = 60.0\nstrategy = \"optimized\"", "budget = 0.0\nstrategy = \"optimized\"");
        let tmp = write_config("auction_config_zero_budget", &toml_text);
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "teams.Team A.budget");
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_empty_team_list() {
        let end = VALID_TOML.find("[[teams]]").unwrap();
        let tmp = write_config("auction_config_no_teams", &VALID_TOML[..end]);
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, "teams"),
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_duplicate_team_names() {
        let toml_text = VALID_TOML.replace("name = \"Team B\"", "name = \"Team A\"");
        let tmp = write_config("auction_config_dupe_names", &toml_text);
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::ValidationError { message, .. } => {
                assert!(message.contains("duplicate"));
            }
            other => panic!("expected ValidationError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_unknown_strategy_tag() {
        let toml_text = VALID_TOML.replace("strategy = \"statistical\"", "strategy = \"clairvoyant\"");
        let tmp = write_config("auction_config_bad_strategy", &toml_text);
        let err = load_config_from(&tmp).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn file_not_found_for_missing_auction_toml() {
        let tmp = std::env::temp_dir().join("auction_config_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        let err = load_config_from(&tmp).unwrap_err();
        match &err {
            ConfigError::FileNotFound { path } => {
                assert!(path.ends_with("auction.toml"));
            }
            other => panic!("expected FileNotFound, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = write_config("auction_config_invalid", "this is not valid [[[ toml");
        let err = load_config_from(&tmp).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_copies_missing_files() {
        let tmp = std::env::temp_dir().join("auction_config_ensure_copies");
        let _ = fs::remove_dir_all(&tmp);
        let defaults_dir = tmp.join("defaults");
        fs::create_dir_all(&defaults_dir).unwrap();
        fs::write(defaults_dir.join("auction.toml"), VALID_TOML).unwrap();

        assert!(!tmp.join("config").exists());
        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert_eq!(copied.len(), 1);
        assert!(tmp.join("config/auction.toml").exists());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_skips_existing() {
        let tmp = std::env::temp_dir().join("auction_config_ensure_skips");
        let _ = fs::remove_dir_all(&tmp);
        let defaults_dir = tmp.join("defaults");
        let config_dir = tmp.join("config");
        fs::create_dir_all(&defaults_dir).unwrap();
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(defaults_dir.join("auction.toml"), VALID_TOML).unwrap();
        fs::write(config_dir.join("auction.toml"), "# custom\n").unwrap();

        let copied = ensure_config_files(&tmp).expect("should succeed");
        assert!(copied.is_empty());
        let content = fs::read_to_string(config_dir.join("auction.toml")).unwrap();
        assert_eq!(content, "# custom\n");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn ensure_config_files_errors_when_both_dirs_missing() {
        let tmp = std::env::temp_dir().join("auction_config_both_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let err = ensure_config_files(&tmp).unwrap_err();
        match &err {
            ConfigError::DefaultsCopyError { message } => {
                assert!(message.contains("neither defaults/ nor config/"));
            }
            other => panic!("expected DefaultsCopyError, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }
}
