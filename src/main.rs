//! Aethermoor command line: play a scripted campaign or run the balance
//! simulator.

use std::path::PathBuf;

use aethermoor::campaign::{AutoPilot, Campaign, CampaignConfig, CampaignStatus, TowerOutcome};
use aethermoor::character::{create_hero, HeroClass};
use aethermoor::simulator::{run_simulation, SimConfig};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Turn-based tower campaign engine
#[derive(Parser)]
#[command(name = "aethermoor")]
#[command(about = "Fight through the twenty towers of Aethermoor", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one campaign with the auto-pilot and print each tower
    Run(RunArgs),

    /// Play many campaigns and report balance statistics
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct PartyArgs {
    /// Hero class by name or number (1-5); repeat for a party
    #[arg(short, long = "class", default_value = "vanguard")]
    classes: Vec<HeroClass>,

    /// Shared-party mode
    #[arg(short, long)]
    multiplayer: bool,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Battles before a campaign gives up
    #[arg(long, default_value_t = 500)]
    max_battles: u32,
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    party: PartyArgs,

    /// Print the final status as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SimulateArgs {
    #[command(flatten)]
    party: PartyArgs,

    /// Number of campaigns to play
    #[arg(short = 'n', long, default_value_t = 200)]
    runs: u32,

    /// Also write the report as JSON to this directory
    #[arg(long, value_name = "DIR")]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run_campaign(args),
        Command::Simulate(args) => simulate(args),
    }
}

fn run_campaign(args: RunArgs) -> Result<()> {
    let party = &args.party;
    let config = CampaignConfig {
        multiplayer: party.multiplayer,
        max_battles: party.max_battles,
        ..Default::default()
    };
    let rng = match party.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut campaign = Campaign::new(config, rng);
    for (i, class) in party.classes.iter().enumerate() {
        let name = format!("{} {}", class.name(), i + 1);
        campaign
            .add_hero(create_hero(*class, &name))
            .with_context(|| format!("adding {}", name))?;
    }

    let mut controller = AutoPilot;
    while campaign.battles_fought() < party.max_battles {
        let Some(report) = campaign.play_next_tower(&mut controller) else {
            break;
        };
        match report.outcome {
            TowerOutcome::Cleared => println!(
                "Tower {:2}: cleared in {} rounds, +{} currency, +{} essence",
                report.tower, report.rounds, report.currency_reward, report.essence_share
            ),
            TowerOutcome::Wiped => println!(
                "Tower {:2}: party wiped after {} rounds, back to tower {}",
                report.tower,
                report.rounds,
                report.next_tower_index + 1
            ),
            TowerOutcome::Skipped => {}
        }
    }

    let status = campaign.status();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print_status(&status, campaign.is_finished());
    }
    Ok(())
}

fn print_status(status: &CampaignStatus, finished: bool) {
    println!();
    if finished {
        println!("Aethermoor is saved.");
    } else {
        println!(
            "Campaign stopped at tower {} ({} of 20 cleared).",
            status.current_tower_index + 1,
            status.towers_cleared()
        );
    }
    for (rank, hero) in status.heroes.iter().enumerate() {
        println!(
            "{}. {} the {}: {} essence, {} currency, ATK {}, DEF {}",
            rank + 1,
            hero.name,
            hero.class,
            hero.essence,
            hero.currency,
            hero.attack,
            hero.defense
        );
        let equipped = if hero.equipped.is_empty() {
            "None".to_string()
        } else {
            hero.equipped.join(", ")
        };
        println!("   Equipped: {} ({} weapons owned)", equipped, hero.weapons_owned);
    }
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let party = &args.party;
    if party.classes.is_empty() {
        bail!("at least one --class is required");
    }
    let config = SimConfig {
        num_runs: args.runs,
        seed: party.seed,
        party: party.classes.clone(),
        multiplayer: party.multiplayer,
        max_battles: party.max_battles,
        ..Default::default()
    };

    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    let names: Vec<&str> = config.party.iter().map(|c| c.name()).collect();
    println!("  Party:          {}", names.join(", "));
    println!("  Multiplayer:    {}", config.multiplayer);
    println!("  Max Battles:    {}", config.max_battles);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if let Some(dir) = args.json {
        let path = dir.join(format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ));
        std::fs::write(&path, report.to_json())
            .with_context(|| format!("writing {}", path.display()))?;
        println!("JSON report saved to: {}", path.display());
    }
    Ok(())
}
