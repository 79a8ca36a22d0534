// Plain-text summaries printed at the end of a run. Kept as string
// builders rather than direct printing so the output is testable.

use std::fmt::Write;

use crate::dealer::{AuctionSummary, LotOutcome};
use crate::player::Role;
use crate::team::TeamLedger;

/// One team's final squad: every acquisition with its price, then the
/// spend, remaining budget, role breakdown, and total star rating.
pub fn render_team_summary(ledger: &TeamLedger) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", ledger.name);

    if ledger.acquired.is_empty() {
        let _ = writeln!(out, "  (no players acquired)");
    }
    for acquisition in &ledger.acquired {
        let _ = writeln!(
            out,
            "  {:<24} {:<12} {:>8.2}",
            acquisition.player.name, acquisition.player.role, acquisition.price
        );
    }

    let _ = writeln!(out, "  players:   {}/{}", ledger.acquired.len(), ledger.max_players);
    for role in Role::all() {
        let count = ledger
            .acquired
            .iter()
            .filter(|a| a.player.role == role)
            .count();
        let _ = writeln!(out, "    {:<12} {}", role, count);
    }
    let _ = writeln!(out, "  spent:     {:.2}", ledger.spent());
    let _ = writeln!(out, "  remaining: {:.2}", ledger.remaining_budget);
    let _ = writeln!(out, "  stars:     {:.1}", ledger.total_stars());
    out
}

/// The auction as a whole: lot-by-lot results and the sold/unsold tally.
pub fn render_auction_summary(summary: &AuctionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Auction results ===");
    for lot in &summary.lots {
        match &lot.outcome {
            LotOutcome::Sold { team, price } => {
                let _ = writeln!(
                    out,
                    "  {:<24} sold to {:<16} for {:>8.2}",
                    lot.player.name, team, price
                );
            }
            LotOutcome::Unsold => {
                let _ = writeln!(out, "  {:<24} unsold", lot.player.name);
            }
        }
    }
    let _ = writeln!(
        out,
        "  {} sold, {} unsold",
        summary.sold_count(),
        summary.unsold_count()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dealer::LotResult;
    use crate::player::Role;
    use crate::strategy::test_support::player;

    #[test]
    fn empty_ledger_renders_placeholder() {
        let ledger = TeamLedger::new("Strikers", 60.0, 15);
        let text = render_team_summary(&ledger);
        assert!(text.contains("=== Strikers ==="));
        assert!(text.contains("(no players acquired)"));
        assert!(text.contains("players:   0/15"));
        assert!(text.contains("remaining: 60.00"));
    }

    #[test]
    fn acquisitions_appear_with_prices() {
        let mut ledger = TeamLedger::new("Strikers", 60.0, 15);
        ledger.record_win(player("V Kohli", Role::Batsman, 2.0, "I", 9.0), 4.25);
        ledger.record_win(player("P Cummins", Role::Bowler, 2.0, "A", 8.5), 3.0);

        let text = render_team_summary(&ledger);
        assert!(text.contains("V Kohli"));
        assert!(text.contains("4.25"));
        assert!(text.contains("P Cummins"));
        assert!(text.contains("spent:     7.25"));
        assert!(text.contains("remaining: 52.75"));
        assert!(text.contains("stars:     17.5"));
    }

    #[test]
    fn auction_summary_lists_both_outcomes() {
        let summary = AuctionSummary {
            lots: vec![
                LotResult {
                    player: player("Sold Guy", Role::Batsman, 1.0, "I", 6.0),
                    outcome: LotOutcome::Sold {
                        team: "Strikers".into(),
                        price: 2.4,
                    },
                },
                LotResult {
                    player: player("Passed Guy", Role::Bowler, 1.5, "I", 4.0),
                    outcome: LotOutcome::Unsold,
                },
            ],
        };

        let text = render_auction_summary(&summary);
        assert!(text.contains("Sold Guy"));
        assert!(text.contains("sold to Strikers"));
        assert!(text.contains("Passed Guy"));
        assert!(text.contains("unsold"));
        assert!(text.contains("1 sold, 1 unsold"));
    }
}
