//! Simulation report generation.

use crate::game::MatchOutcome;
use crate::player::PurchasePolicy;
use serde::Serialize;

/// Win percentage of one policy across all runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyWinRate {
    pub policy: PurchasePolicy,
    pub wins: u32,
    pub percent: f64,
}

/// Aggregated results from multiple matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub timeouts: u32,
    pub avg_rounds: f64,
    /// One entry per policy, in roster order
    pub win_rates: Vec<PolicyWinRate>,
    /// Policy with the highest win rate (None when there are no runs)
    pub top_policy: Option<PurchasePolicy>,
    /// Every outcome record, in run order
    pub runs: Vec<MatchOutcome>,
}

impl SimReport {
    /// Aggregate outcome records.
    pub fn from_outcomes(outcomes: &[MatchOutcome]) -> Self {
        let num_runs = outcomes.len() as u32;
        let timeouts = outcomes.iter().map(MatchOutcome::timeout_flag).sum();

        let avg_rounds = if outcomes.is_empty() {
            0.0
        } else {
            outcomes.iter().map(|o| o.rounds as f64).sum::<f64>() / num_runs as f64
        };

        let mut wins = [0u32; PurchasePolicy::COUNT];
        for outcome in outcomes {
            for (total, won) in wins.iter_mut().zip(outcome.policy_wins()) {
                *total += won;
            }
        }

        let win_rates: Vec<PolicyWinRate> = PurchasePolicy::ALL
            .iter()
            .map(|&policy| {
                let wins = wins[policy.index()];
                PolicyWinRate {
                    policy,
                    wins,
                    percent: wins as f64 / num_runs.max(1) as f64 * 100.0,
                }
            })
            .collect();

        // Later policy in roster order wins ties
        let top_policy = if outcomes.is_empty() {
            None
        } else {
            win_rates
                .iter()
                .fold(None::<&PolicyWinRate>, |best, rate| match best {
                    Some(b) if b.wins > rate.wins => Some(b),
                    _ => Some(rate),
                })
                .map(|rate| rate.policy)
        };

        Self {
            num_runs,
            timeouts,
            avg_rounds,
            win_rates,
            top_policy,
            runs: outcomes.to_vec(),
        }
    }

    pub fn win_rate(&self, policy: PurchasePolicy) -> f64 {
        self.win_rates[policy.index()].percent
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str(&format!(
            "             RESULTS AFTER {} SIMULATED MATCHES\n",
            self.num_runs
        ));
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str("── TIMEOUTS ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Matches ending on the round cap: {:>10}\n\n",
            self.timeouts
        ));

        report.push_str("── LENGTH ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Average rounds per match:        {:>10.2}\n\n",
            self.avg_rounds
        ));

        report.push_str("── WIN RATE BY POLICY ───────────────────────────────────────────\n");
        for rate in &self.win_rates {
            let bar: String = "█".repeat((rate.percent / 5.0) as usize);
            report.push_str(&format!(
                "  {:<10} {:>6.2}% {}\n",
                rate.policy.name(),
                rate.percent,
                bar
            ));
        }
        report.push('\n');

        report.push_str("── MOST WINNING POLICY ──────────────────────────────────────────\n");
        match self.top_policy {
            Some(policy) => report.push_str(&format!("  {}\n", policy.name())),
            None => report.push_str("  (no matches played)\n"),
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerId;

    fn outcome(policy: PurchasePolicy, rounds: u32, timeout: bool) -> MatchOutcome {
        MatchOutcome {
            rounds,
            timeout,
            winner: PlayerId(policy.index() as u32 + 1),
            winner_policy: policy,
            standings: Vec::new(),
        }
    }

    #[test]
    fn test_report_generation() {
        let outcomes = vec![
            outcome(PurchasePolicy::Impulsive, 100, false),
            outcome(PurchasePolicy::Wary, 1000, true),
            outcome(PurchasePolicy::Wary, 200, false),
            outcome(PurchasePolicy::Random, 300, false),
        ];

        let report = SimReport::from_outcomes(&outcomes);
        assert_eq!(report.num_runs, 4);
        assert_eq!(report.timeouts, 1);
        assert!((report.avg_rounds - 400.0).abs() < 1e-9);
        assert_eq!(report.win_rate(PurchasePolicy::Impulsive), 25.0);
        assert_eq!(report.win_rate(PurchasePolicy::Picky), 0.0);
        assert_eq!(report.win_rate(PurchasePolicy::Wary), 50.0);
        assert_eq!(report.win_rate(PurchasePolicy::Random), 25.0);
        assert_eq!(report.top_policy, Some(PurchasePolicy::Wary));
    }

    #[test]
    fn test_win_rates_sum_to_hundred() {
        let outcomes: Vec<_> = (0..7)
            .map(|i| outcome(PurchasePolicy::ALL[i % 4], 10, false))
            .collect();
        let report = SimReport::from_outcomes(&outcomes);
        let total: f64 = report.win_rates.iter().map(|r| r.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_policy_tie_goes_to_later_policy() {
        let outcomes = vec![
            outcome(PurchasePolicy::Random, 10, false),
            outcome(PurchasePolicy::Picky, 10, false),
        ];
        let report = SimReport::from_outcomes(&outcomes);
        assert_eq!(report.top_policy, Some(PurchasePolicy::Random));

        let outcomes = vec![
            outcome(PurchasePolicy::Impulsive, 10, false),
            outcome(PurchasePolicy::Wary, 10, false),
            outcome(PurchasePolicy::Impulsive, 10, false),
        ];
        let report = SimReport::from_outcomes(&outcomes);
        assert_eq!(report.top_policy, Some(PurchasePolicy::Impulsive));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_outcomes(&[]);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_rounds, 0.0);
        assert_eq!(report.top_policy, None);
        assert!(report.win_rates.iter().all(|r| r.percent == 0.0));
        assert!(report.to_text().contains("no matches played"));
    }

    #[test]
    fn test_text_and_json() {
        let report = SimReport::from_outcomes(&[outcome(PurchasePolicy::Impulsive, 50, true)]);

        let text = report.to_text();
        assert!(text.contains("RESULTS AFTER 1 SIMULATED MATCHES"));
        assert!(text.contains("Impulsive"));
        assert!(text.contains("100.00%"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["num_runs"], 1);
        assert_eq!(json["timeouts"], 1);
        assert_eq!(json["top_policy"], "Impulsive");
        assert_eq!(json["win_rates"][0]["wins"], 1);
    }

    #[test]
    fn test_json_carries_every_run() {
        let outcomes = vec![
            outcome(PurchasePolicy::Wary, 12, false),
            outcome(PurchasePolicy::Picky, 1000, true),
            outcome(PurchasePolicy::Random, 40, false),
        ];
        let report = SimReport::from_outcomes(&outcomes);
        assert_eq!(report.runs, outcomes);

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        let runs = json["runs"].as_array().unwrap();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0]["rounds"], 12);
        assert_eq!(runs[1]["timeout"], true);
        assert_eq!(runs[2]["winner_policy"], "Random");
    }
}
