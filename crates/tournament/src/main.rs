//! Tournament CLI
//!
//! Run matches between checkers engines and report the results.

use anyhow::{bail, Context, Result};
use checkers_core::{Difficulty, Engine};
use clap::{Args, Parser, Subcommand};
use minimax_engine::MinimaxEngine;
use random_engine::RandomEngine;
use std::path::PathBuf;
use tournament::{MatchConfig, MatchRunner, TournamentResults};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// ML-checkers Tournament Runner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a match between two engines
    Match {
        /// First engine (minimax, random or random:SEED)
        engine1: String,
        /// Second engine
        engine2: String,
        #[command(flatten)]
        opts: MatchOpts,
    },
    /// Play one engine against every built-in opponent
    Gauntlet {
        challenger: String,
        #[command(flatten)]
        opts: MatchOpts,
    },
}

#[derive(Args, Debug)]
struct MatchOpts {
    /// TOML file with match settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of games per match
    #[arg(short, long)]
    games: Option<u32>,

    /// Difficulty level (easy, medium, hard, very-hard)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Search depth in plies, overriding the difficulty
    #[arg(short, long)]
    depth: Option<u8>,

    /// Turns per game before it is declared a draw
    #[arg(long)]
    max_turns: Option<u32>,

    /// Write the results as JSON to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl MatchOpts {
    fn match_config(&self) -> Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::load(path)
                .with_context(|| format!("loading match config {}", path.display()))?,
            None => MatchConfig::default(),
        };
        if let Some(games) = self.games {
            config.num_games = games;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if self.depth.is_some() {
            config.depth = self.depth;
        }
        if let Some(max_turns) = self.max_turns {
            config.max_turns = max_turns;
        }
        Ok(config)
    }
}

fn create_engine(spec: &str) -> Result<Box<dyn Engine>> {
    let (kind, arg) = match spec.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (spec, None),
    };
    match kind.to_lowercase().as_str() {
        "minimax" | "ai" => Ok(Box::new(MinimaxEngine::new())),
        "random" | "rand" => match arg {
            Some(seed) => {
                let seed: u64 = seed
                    .parse()
                    .with_context(|| format!("invalid random seed in {spec:?}"))?;
                Ok(Box::new(RandomEngine::with_seed(seed)))
            }
            None => Ok(Box::new(RandomEngine::new())),
        },
        _ => bail!("unknown engine {spec:?} (expected minimax, random or random:SEED)"),
    }
}

fn finish(results: &TournamentResults, output: Option<&PathBuf>) -> Result<()> {
    results.print_report();
    if let Some(path) = output {
        results
            .save(path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        info!(path = %path.display(), "results saved");
    }
    Ok(())
}

fn run_match(engine1_spec: &str, engine2_spec: &str, opts: &MatchOpts) -> Result<()> {
    let config = opts.match_config()?;
    let mut engine1 = create_engine(engine1_spec)?;
    let mut engine2 = create_engine(engine2_spec)?;

    info!(
        engine1 = engine1_spec,
        engine2 = engine2_spec,
        games = config.num_games,
        difficulty = %config.difficulty,
        depth = config.search_depth(),
        "starting match"
    );

    let runner = MatchRunner::new(config.clone());
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    let mut results = TournamentResults::new(
        &format!("Match: {engine1_spec} vs {engine2_spec}"),
        vec![engine1_spec.to_string(), engine2_spec.to_string()],
        config,
    );
    results.add_match(engine1_spec, engine2_spec, result);
    finish(&results, opts.output.as_ref())
}

fn run_gauntlet(challenger_spec: &str, opts: &MatchOpts) -> Result<()> {
    let config = opts.match_config()?;
    let opponents = ["minimax", "random"];

    // Fail on a bad challenger before any game is played
    create_engine(challenger_spec)?;

    info!(
        challenger = challenger_spec,
        opponents = ?opponents,
        games = config.num_games,
        depth = config.search_depth(),
        "starting gauntlet"
    );

    let mut results = TournamentResults::new(
        &format!("Gauntlet: {challenger_spec}"),
        std::iter::once(challenger_spec.to_string())
            .chain(opponents.iter().map(|s| s.to_string()))
            .collect(),
        config.clone(),
    );

    let runner = MatchRunner::new(config);
    for opponent in opponents {
        let mut challenger = create_engine(challenger_spec)?;
        let mut opp_engine = create_engine(opponent)?;

        let result = runner.run_match(challenger.as_mut(), opp_engine.as_mut());
        info!(
            opponent,
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            score = result.score(),
            "match finished"
        );
        results.add_match(challenger_spec, opponent, result);
    }

    finish(&results, opts.output.as_ref())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Match {
            engine1,
            engine2,
            opts,
        } => run_match(engine1, engine2, opts),
        Commands::Gauntlet { challenger, opts } => run_gauntlet(challenger, opts),
    }
}
