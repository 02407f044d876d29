//! trump-duel - autoplay driver
//!
//! Deals a game from a catalog and plays it to completion, standing in for
//! both the human and the automated player. Useful for eyeballing the engine's
//! logs (`RUST_LOG=trump_duel=debug`).

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use trump_duel::{
    Attribute, AttributePolicy, CardId, Catalog, CatalogError, ConfigError, DealMode, EngineConfig,
    EngineError, GameEngine, GameRng, MemoryStore, Side, SideMap, UniformAttribute,
};

#[derive(Parser)]
#[command(name = "trump-duel")]
#[command(about = "Play a stat-battle card game between two automated players", long_about = None)]
struct Cli {
    /// JSON card catalog (defaults to the built-in dinosaurs)
    #[arg(long, value_name = "CATALOG_JSON")]
    catalog: Option<PathBuf>,

    /// TOML engine configuration
    #[arg(long, value_name = "CONFIG_TOML")]
    config: Option<PathBuf>,

    /// Seed for dealing and for both players' picks (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated card ids for the user's hand (random pack if absent)
    #[arg(long, value_delimiter = ',')]
    chosen: Vec<u32>,

    /// Let every Nth user turn time out
    #[arg(long, value_name = "N")]
    timeout_every: Option<u32>,

    /// Stop after this many resolutions even if nobody has won
    #[arg(long, default_value_t = 10_000)]
    max_rounds: u32,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trump_duel=info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    // The human stand-in gets its own stream so the engine's draws stay reproducible
    let mut picker = match config.seed {
        Some(seed) => GameRng::new(seed.wrapping_add(1)),
        None => GameRng::from_entropy(),
    };

    let mode = if cli.chosen.is_empty() {
        DealMode::RandomPack
    } else {
        DealMode::ChosenSet(cli.chosen.iter().copied().map(CardId::new).collect())
    };

    let engine = GameEngine::new(Arc::new(catalog), MemoryStore::new(), config);
    let created = engine.create_game(mode)?;
    let id = created.game_id;
    let mut game = created.game_state;

    println!(
        "Game {} - {} cards each, {} starts",
        id,
        engine.config().deck_size,
        game.current_turn
    );

    let mut user_turns = 0u32;
    let mut tally: SideMap<u32> = SideMap::with_value(0);
    let mut ties = 0u32;
    let mut resolutions = 0u32;

    while !game.is_finished() && resolutions < cli.max_rounds {
        let report = match game.current_turn {
            Side::User => {
                user_turns += 1;
                let timed_out = cli.timeout_every.is_some_and(|n| n > 0 && user_turns % n == 0);
                if timed_out {
                    engine.resolve_timeout(id)?
                } else {
                    let attribute: Attribute = UniformAttribute.choose(&game, &mut picker);
                    engine.resolve_user_turn(id, attribute)?
                }
            }
            Side::System => engine.resolve_system_turn(id)?,
        };

        match report.outcome.winner() {
            Some(side) => tally[side] += 1,
            None => ties += 1,
        }
        resolutions += 1;

        println!(
            "round {:>4}: {:<7} {:>20} {:>3} vs {:<3} {:<20} -> {:<6} ({}-{})",
            report.game_state.round_number,
            report.attribute,
            report.user_card.name,
            report.user_card.stat(report.attribute),
            report.system_card.stat(report.attribute),
            report.system_card.name,
            report.outcome,
            report.game_state.user_deck.len(),
            report.game_state.system_deck.len(),
        );
        game = report.game_state;
    }

    match game.winner {
        Some(winner) => println!(
            "{} wins after {} resolutions (user {} / system {} / ties {})",
            winner,
            resolutions,
            tally[Side::User],
            tally[Side::System],
            ties
        ),
        None => println!("No winner after {} resolutions", resolutions),
    }

    Ok(())
}
