//! Chi Combat - headless encounter runner
//!
//! Plays the seeded warrior against the seeded bandit through the session
//! registry, the same path an HTTP layer would take, and prints the result.

use chi_combat::abilities::{AbilityCatalog, Loadout};
use chi_combat::combat::{Action, EncounterBuilder, EncounterSnapshot, Settlement};
use chi_combat::core::config::{set_config, CombatConfig};
use chi_combat::core::error::Result;
use chi_combat::fighter::{CharacterSheet, EnemyProfile};
use chi_combat::session::SessionRegistry;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Headless encounter runner
#[derive(Parser, Debug)]
#[command(name = "chi-combat")]
#[command(about = "Run one combat encounter and print its log and outcome")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Combat config TOML (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ability catalog TOML (built-in techniques when omitted)
    #[arg(long)]
    abilities: Option<PathBuf>,

    /// Abilities to place on the hotbar, in order
    #[arg(long = "equip")]
    equip: Vec<String>,

    /// Player action every turn
    #[arg(long, default_value = "attack")]
    action: String,

    /// Stop after this many turns if nobody has fallen
    #[arg(long, default_value_t = 100)]
    max_turns: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
struct RunReport {
    seed: u64,
    finished: bool,
    snapshot: EncounterSnapshot,
    settlement: Option<Settlement>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chi_combat=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let config = CombatConfig::load(path)?;
        if set_config(config).is_err() {
            tracing::warn!("combat config already initialised, ignoring {}", path.display());
        }
    }

    let catalog = match &args.abilities {
        Some(path) => AbilityCatalog::load_from_toml(path)?,
        None => AbilityCatalog::with_defaults(),
    };
    let loadout = Loadout::hotbar(&catalog, &args.equip)?;

    let action: Action = args.action.parse()?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let enemy = EnemyProfile::shadow_bandit();
    let engine = EncounterBuilder::new()
        .player(CharacterSheet::test_warrior().to_snapshot())
        .opponent(enemy.to_snapshot())
        .loadout(loadout)
        .rewards(enemy.rewards())
        .seeded(seed)?;

    let registry = SessionRegistry::new();
    let (id, mut snapshot) = registry.start(engine).await;
    let mut settlement = None;

    for _ in 0..args.max_turns {
        let outcome = registry.act(id, action).await?;
        snapshot = outcome.snapshot;
        if outcome.settlement.is_some() {
            settlement = outcome.settlement;
            break;
        }
    }

    if settlement.is_none() {
        tracing::warn!(turns = args.max_turns, "turn limit reached without a winner");
        registry.evict(id).await;
    }

    let report = RunReport {
        seed,
        finished: settlement.is_some(),
        snapshot,
        settlement,
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &RunReport) {
    let s = &report.snapshot;
    println!("=== {} (seed {}) ===", s.enemy_name, report.seed);
    for line in &s.log {
        println!("{}", line);
    }
    println!();
    println!(
        "You: {}/{} HP, {}/{} chi, {} wounds{}",
        s.character_hp,
        s.character_max_hp,
        s.character_chi,
        s.character_max_chi,
        s.wounds,
        if s.rage_active { " (raging)" } else { "" }
    );
    println!("{}: {}/{} HP", s.enemy_name, s.enemy_hp, s.enemy_max_hp);

    match (s.victory, s.defeat) {
        (true, true) => println!("Both fighters fell."),
        (true, false) => println!("Victory!"),
        (false, true) => println!("Defeat."),
        (false, false) => println!("No winner after {} turns.", s.turn - 1),
    }

    if let Some(rewards) = report.settlement.as_ref().and_then(|s| s.rewards) {
        println!("Rewards: {} xp, {} gold", rewards.xp, rewards.gold);
    }
}
