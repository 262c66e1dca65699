//! Simulation report generation.

use serde::Serialize;

use super::runner::RunStats;

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    runs.iter().map(f).sum::<f64>() / runs.len().max(1) as f64
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub completion_rate: f64,

    // Aggregated stats
    pub avg_battles: f64,
    pub avg_wipes: f64,
    pub avg_rounds: f64,
    pub avg_towers_cleared: f64,
    pub avg_final_currency: f64,
    pub avg_final_essence: f64,

    // Per-tower analysis, index 0 = tower 1
    pub avg_wipes_per_tower: Vec<f64>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let runs_completed = runs.iter().filter(|r| r.completed).count() as u32;
        let denom = num_runs.max(1) as f64;

        let avg_battles = mean(&runs, |r| r.battles as f64);
        let avg_wipes = mean(&runs, |r| r.wipes as f64);
        let avg_rounds = mean(&runs, |r| r.rounds as f64);
        let avg_towers_cleared = mean(&runs, |r| r.towers_cleared as f64);
        let avg_final_currency = mean(&runs, |r| r.final_currency as f64);
        let avg_final_essence = mean(&runs, |r| r.final_essence as f64);

        let towers = runs.iter().map(|r| r.wipes_by_tower.len()).max().unwrap_or(0);
        let avg_wipes_per_tower = (0..towers)
            .map(|t| mean(&runs, |r| r.wipes_by_tower.get(t).copied().unwrap_or(0) as f64))
            .collect();

        Self {
            num_runs,
            runs_completed,
            completion_rate: runs_completed as f64 / denom * 100.0,
            avg_battles,
            avg_wipes,
            avg_rounds,
            avg_towers_cleared,
            avg_final_currency,
            avg_final_essence,
            avg_wipes_per_tower,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} completed ({:.1}%)\n\n",
            self.num_runs, self.runs_completed, self.completion_rate
        ));

        report.push_str("── CAMPAIGN ─────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Battles:         {:.1}\n", self.avg_battles));
        report.push_str(&format!("  Avg Wipes:           {:.1}\n", self.avg_wipes));
        report.push_str(&format!("  Avg Rounds:          {:.0}\n", self.avg_rounds));
        report.push_str(&format!(
            "  Avg Towers Cleared:  {:.1}\n\n",
            self.avg_towers_cleared
        ));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Currency:  {:.0}\n",
            self.avg_final_currency
        ));
        report.push_str(&format!(
            "  Avg Final Essence:   {:.0}\n\n",
            self.avg_final_essence
        ));

        report.push_str("── WIPES PER TOWER ──────────────────────────────────────────────\n");
        for (i, wipes) in self.avg_wipes_per_tower.iter().enumerate() {
            if *wipes > 0.0 {
                let bar: String = "█".repeat((wipes * 4.0).min(40.0) as usize);
                report.push_str(&format!("  Tower {:2}: {:>5.2} {}\n", i + 1, wipes, bar));
            }
        }
        report.push('\n');

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
