//! cricbugs CLI
//!
//! Instant and live-paced cricket matches in the terminal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cb_core::engine::{
    Atmosphere, AtmosphereSnapshot, CommentaryEvent, EntropySource, MatchObserver, SeededSource,
};
use cb_core::{
    all_teams, find_team, pick_match_teams, simulate_match, BallGenerator, LiveMatch, MatchConfig,
    MatchRequest, MatchTicker, SeededMatch, Team,
};

#[derive(Parser)]
#[command(name = "cricbugs")]
#[command(about = "Ball-by-ball cricket match simulator", long_about = None)]
struct Cli {
    /// Log engine events (overrides RUST_LOG default)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Match config file (YAML, or JSON by extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct MatchArgs {
    /// Team batting first (catalogue id, e.g. IND)
    #[arg(long, requires = "team2")]
    team1: Option<String>,

    /// Team batting second
    #[arg(long, requires = "team1")]
    team2: Option<String>,

    /// Favourite team ids used to pick the fixture when no teams are given
    #[arg(long = "favourite", conflicts_with = "team1")]
    favourites: Vec<String>,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Overs per innings (overrides the config)
    #[arg(long)]
    overs: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a whole match instantly
    Simulate {
        #[command(flatten)]
        args: MatchArgs,

        /// Print the full result as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Play a match at the configured tick cadence
    Live {
        #[command(flatten)]
        args: MatchArgs,

        /// Tick interval in milliseconds (overrides the config)
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Use the compact match-card reactions
        #[arg(long, default_value = "false")]
        compact: bool,
    },

    /// List the built-in teams
    Teams,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Simulate { args, json } => {
            let config = load_config(cli.config.as_deref(), &args)?;
            let seed = args.seed.unwrap_or_else(rand::random);
            let (team1, team2) = resolve_teams(&args, seed)?;
            tracing::info!(seed, team1 = %team1.id, team2 = %team2.id, json, "simulate");

            if json {
                let request = MatchRequest {
                    config: Some(config),
                    ..MatchRequest::new(seed, &team1.id, &team2.id)
                };
                let response = simulate_match(&request)?;
                println!("{}", serde_json::to_string_pretty(&response)?);
                return Ok(());
            }

            println!("🏏 {} vs {} (seed {})", team1.badge(), team2.badge(), seed);
            let mut live = SeededMatch::seeded(team1, team2, config, seed)?;
            let mut atmosphere = Atmosphere::new(SeededSource::seeded(seed));
            for event in live.run_to_completion() {
                atmosphere.on_event(&event);
                print_event(&event);
            }
            print_scoreboard(&live, &atmosphere.snapshot());
        }

        Commands::Live { args, interval_ms, compact } => {
            let mut config = load_config(cli.config.as_deref(), &args)?;
            if let Some(ms) = interval_ms {
                config.tick_interval_ms = ms;
            }
            let seed = args.seed.unwrap_or_else(rand::random);
            let (team1, team2) = resolve_teams(&args, seed)?;
            let interval = config.tick_interval();
            tracing::info!(
                seed,
                team1 = %team1.id,
                team2 = %team2.id,
                interval_ms = config.tick_interval_ms,
                "live match"
            );

            println!("📺 LIVE: {} vs {}", team1.badge(), team2.badge());
            let live = SeededMatch::seeded(team1, team2, config, seed)?;
            let source = EntropySource::from_entropy();
            let mut atmosphere =
                if compact { Atmosphere::compact(source) } else { Atmosphere::new(source) };

            let ticker = MatchTicker::spawn(live, interval)?;
            while let Some(update) = ticker.recv() {
                if let Some(event) = &update.event {
                    atmosphere.on_event(event);
                    print_event(event);
                }
            }
            let live = ticker.stop().context("match ticker worker panicked")?;
            tracing::debug!(complete = live.is_complete(), "live match stopped");
            print_scoreboard(&live, &atmosphere.snapshot());
        }

        Commands::Teams => {
            for team in all_teams() {
                println!("{}  {}", team.badge(), team.name);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}

fn load_config(path: Option<&Path>, args: &MatchArgs) -> Result<MatchConfig> {
    let config = match path {
        Some(path) => MatchConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    Ok(match args.overs {
        Some(overs) => config.with_max_overs(overs),
        None => config,
    })
}

fn resolve_teams(args: &MatchArgs, seed: u64) -> Result<(Team, Team)> {
    match (&args.team1, &args.team2) {
        (Some(team1), Some(team2)) => Ok((find_team(team1)?, find_team(team2)?)),
        _ => {
            for id in &args.favourites {
                find_team(id)?;
            }
            Ok(pick_match_teams(&args.favourites, &mut SeededSource::seeded(seed)))
        }
    }
}

fn print_event(event: &CommentaryEvent) {
    println!("[{:>5}] {:<7} {}", event.over, event.kind.display_tag(), event.text);
}

fn print_scoreboard<G: BallGenerator>(live: &LiveMatch<G>, atmosphere: &AtmosphereSnapshot) {
    let state = live.snapshot();
    println!();
    println!(
        "{} {} ({} ov)",
        live.team1().badge(),
        state.team1_score,
        state.team1_score.overs()
    );
    println!(
        "{} {} ({} ov)",
        live.team2().badge(),
        state.team2_score,
        state.team2_score.overs()
    );
    if let Some(chase) = live.chase() {
        println!("{} {}", chase.trend.arrow(), chase.describe());
    }
    if let Some(result) = live.result_text() {
        println!("🏆 {}", result);
    }
    println!(
        "🏏 {}  🎳 {}",
        atmosphere.crease.batter.line(),
        atmosphere.crease.bowler.line()
    );
    println!(
        "Crowd: {} {}  Overreaction: {}%",
        atmosphere.crowd_mood.emoji(),
        atmosphere.crowd_mood.label(),
        atmosphere.overreaction
    );
}
