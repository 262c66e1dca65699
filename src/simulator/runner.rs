//! Plays seeded campaigns with the auto-pilot and collects per-run stats.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::SimConfig;
use super::report::SimReport;
use crate::campaign::{AutoPilot, Campaign};
use crate::character::create_hero;

/// Statistics from one simulated campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    pub completed: bool,
    pub battles: u32,
    pub wipes: u32,
    pub rounds: u64,
    pub towers_cleared: usize,
    /// Summed over the party.
    pub final_currency: u64,
    pub final_essence: u64,
    pub wipes_by_tower: Vec<u32>,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, rng);
        debug!(
            run = run_idx + 1,
            completed = run.completed,
            battles = run.battles,
            wipes = run.wipes,
            towers = run.towers_cleared,
            "run finished"
        );
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs)
}

/// Plays one campaign to the end (or the battle cap).
pub fn simulate_single_run(config: &SimConfig, rng: ChaCha8Rng) -> RunStats {
    let mut campaign = Campaign::new(config.campaign_config(), rng);
    for (i, class) in config.party.iter().enumerate() {
        let name = format!("{} {}", class.name(), i + 1);
        if let Err(e) = campaign.add_hero(create_hero(*class, &name)) {
            warn!(error = %e, "hero left out of the simulated party");
            break;
        }
    }

    let summary = campaign.play(&mut AutoPilot);
    let status = campaign.status();

    RunStats {
        completed: summary.completed,
        battles: summary.battles,
        wipes: summary.wipes,
        rounds: summary.rounds,
        towers_cleared: status.towers_cleared(),
        final_currency: status.heroes.iter().map(|h| h.currency as u64).sum(),
        final_essence: status.heroes.iter().map(|h| h.essence as u64).sum(),
        wipes_by_tower: summary.wipes_by_tower,
    }
}
