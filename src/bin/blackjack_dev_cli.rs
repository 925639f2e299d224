// src/bin/blackjack_dev_cli.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use blackjack_table::api::{build_table_view, execute_command, Command};
use blackjack_table::domain::TableConfig;
use blackjack_table::engine::{Game, RandomSource};
use blackjack_table::infra::{DeterministicRng, SystemRng, UuidIdSource};

/// Dev-CLI блэкджек-стола: создаёт игру, сажает и убирает игроков,
/// печатает ошибки в stdout.
#[derive(Debug, Parser)]
#[command(name = "blackjack_dev_cli")]
struct Cli {
    /// JSON-конфиг стола (max_players, deck_count).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed для детерминированного перемешивания.
    #[arg(long)]
    seed: Option<u64>,

    /// Дополнительные игроки, которых нужно посадить.
    #[arg(long = "player")]
    players: Vec<String>,

    /// Печатать состояние стола в JSON в конце.
    #[arg(long)]
    dump: bool,

    /// Подробные логи.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug {
        "debug"
    } else {
        "blackjack_table=info,warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(cli.debug)
        .init();

    let config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config '{}'", path.display()))?;
            TableConfig::from_json_str(&raw)
                .with_context(|| format!("parsing config '{}'", path.display()))?
        }
        None => TableConfig::default(),
    };

    let mut game = Game::with_config(config, UuidIdSource).context("building game")?;

    println!("Start test here");

    match cli.seed {
        Some(seed) => run(&mut game, &mut DeterministicRng::from_seed(seed), &cli.players),
        None => run(&mut game, &mut SystemRng, &cli.players),
    }

    if cli.dump {
        let view = build_table_view(&game);
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    Ok(())
}

fn run<R: RandomSource>(game: &mut Game, rng: &mut R, extra_players: &[String]) {
    let mut commands = vec![
        Command::AddPlayer {
            name: "jon".to_string(),
        },
        Command::RemovePlayer {
            name: "bob".to_string(),
        },
    ];
    commands.extend(
        extra_players
            .iter()
            .map(|name| Command::AddPlayer { name: name.clone() }),
    );
    commands.push(Command::Shuffle);

    for command in commands {
        if let Err(err) = execute_command(game, rng, command) {
            println!("{err}");
        }
    }
}
