// Auction entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so stdout stays clean for the report)
// 2. Load config (copying defaults into place on first run)
// 3. Load the player pool from the configured datasets
// 4. Build one ledger + strategy pair per configured team
// 5. Run the auction
// 6. Print the lot-by-lot results and per-team summaries

use auction_engine::config;
use auction_engine::dealer::{Dealer, TeamEntry};
use auction_engine::ingest;
use auction_engine::report;
use auction_engine::strategy;
use auction_engine::team::TeamLedger;

use anyhow::Context;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;
    info!("Auction engine starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: auction={}, {} teams, {} roster slots each",
        config.auction_name,
        config.teams.len(),
        config.max_players
    );

    // 3. Load the player pool
    let pool = ingest::load_pool(&config.datasets).context("failed to load player pool")?;
    info!("Loaded {} players across all datasets", pool.len());

    // 4. Build the teams
    let teams: Vec<TeamEntry> = config
        .teams
        .iter()
        .map(|team| TeamEntry {
            ledger: TeamLedger::new(&team.name, team.budget, config.max_players),
            strategy: strategy::build(team.strategy, team.budget),
        })
        .collect();

    // 5. Run the auction
    let mut dealer =
        Dealer::new(teams, config.seed).context("failed to set up the auction")?;
    let summary = dealer
        .run_auction(&pool)
        .context("auction run failed")?;

    // 6. Print the results
    println!("{}", report::render_auction_summary(&summary));
    for ledger in dealer.ledgers() {
        println!("{}", report::render_team_summary(ledger));
    }

    info!("Auction engine finished");
    Ok(())
}

/// Initialize tracing to stderr so the report on stdout stays pipeable.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("auction_engine=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
