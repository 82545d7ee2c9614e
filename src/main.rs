//! Binary entrypoint for the sillyquest CLI.
//!
//! Commands:
//! - `play [--seed <n>] [--name <hero>]` - play interactively on this terminal
//! - `simulate [--sessions <n>] [--seed <n>] [--strategy <s>]` - bot runs, JSON report
//! - `catalog` - list every enemy and weapon
//! - `init` - write a starter `config.toml`
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::Rng;
use std::io::{self, Write};

use sillyquest::config::Config;
use sillyquest::console::Console;
use sillyquest::game::autoplay::{play_out, StrategyKind};
use sillyquest::game::{Catalog, Session};

#[derive(Parser)]
#[command(name = "sillyquest")]
#[command(about = "A turn-based text adventure of random encounters and silly weapons")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play on this terminal
    Play {
        /// RNG seed for the first session (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Hero name; skips the name prompt
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Let a bot play and print a JSON report
    Simulate {
        /// Number of sessions to play
        #[arg(short = 'n', long, default_value_t = 100)]
        sessions: u32,
        /// Seed of the first session; later sessions count up from it
        #[arg(short, long)]
        seed: Option<u64>,
        /// How the bot decides
        #[arg(long, value_enum, default_value_t = Strategy::Reckless)]
        strategy: Strategy,
        /// Stop a session after this many encounters
        #[arg(long, default_value_t = 10_000)]
        max_turns: u32,
    },
    /// List the enemy and weapon catalogs
    Catalog,
    /// Write a default configuration file
    Init,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Reckless,
    Cautious,
}

impl From<Strategy> for StrategyKind {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Reckless => StrategyKind::Reckless,
            Strategy::Cautious => StrategyKind::Cautious,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging is configured from a provisional read; the real load below then
    // reports a missing or malformed file through the initialised logger.
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Some(Config::load(&cli.config).unwrap_or_default()),
    };
    init_logging(&pre_config, cli.verbose);
    let config = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load_or_default(&cli.config)?,
    };

    match cli.command {
        Commands::Play { seed, name } => {
            info!("Starting sillyquest v{}", env!("CARGO_PKG_VERSION"));
            let catalog = Catalog::standard()?;
            let stdin = io::stdin();
            let mut console = Console::new(
                stdin.lock(),
                io::stdout(),
                config.display.clone(),
                rand::thread_rng().gen(),
            );
            console.run(
                &catalog,
                seed.or(config.game.seed),
                name.as_deref(),
                &config.game.default_name,
            )?;
        }
        Commands::Simulate {
            sessions,
            seed,
            strategy,
            max_turns,
        } => {
            let catalog = Catalog::standard()?;
            let first = seed
                .or(config.game.seed)
                .unwrap_or_else(|| rand::thread_rng().gen());
            let kind = StrategyKind::from(strategy);
            let mut reports = Vec::with_capacity(sessions as usize);
            for i in 0..sessions {
                let mut session = Session::new(
                    &format!("Bot #{}", i + 1),
                    first.wrapping_add(i as u64),
                    catalog.clone(),
                )?;
                let mut bot = kind.build();
                reports.push(play_out(&mut session, bot.as_mut(), max_turns)?);
            }
            let played = reports.len().max(1) as f64;
            let best = reports.iter().map(|r| r.summary.score).max().unwrap_or(0);
            let mean_score = reports.iter().map(|r| r.summary.score as f64).sum::<f64>() / played;
            let mean_turns = reports.iter().map(|r| r.summary.turns as f64).sum::<f64>() / played;
            let unfinished = reports.iter().filter(|r| !r.finished).count();
            info!(
                "simulated {} sessions ({:?}): mean score {:.1}",
                reports.len(),
                kind,
                mean_score
            );
            let payload = serde_json::json!({
                "strategy": kind,
                "first_seed": first,
                "sessions": reports.len(),
                "best_score": best,
                "mean_score": mean_score,
                "mean_turns": mean_turns,
                "unfinished": unfinished,
                "reports": reports,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        Commands::Catalog => {
            let catalog = Catalog::standard()?;
            let mut out = io::stdout().lock();
            writeln!(out, "Enemies:")?;
            for e in catalog.enemies() {
                writeln!(
                    out,
                    "  {:<30} HP {:>3}  {} ({}-{})  +{} pts",
                    e.name(),
                    e.health(),
                    e.weapon().name(),
                    e.weapon().min_damage(),
                    e.weapon().max_damage(),
                    e.experience()
                )?;
            }
            writeln!(out, "Weapons:")?;
            for w in catalog.weapons() {
                writeln!(out, "  {:<30} {}", w.to_string(), w.description().unwrap_or(""))?;
            }
        }
        Commands::Init => {
            info!("Writing default configuration");
            Config::create_default(&cli.config)?;
            info!("Configuration file created at {}", cli.config);
        }
    }

    Ok(())
}

/// The game owns the terminal, so with a log file configured the console only
/// gets warnings unless `-v` asks for more.
fn init_logging(config: &Option<Config>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| c.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|c| c.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        let stderr_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());

            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }

            if echoes_to_console(record.level(), verbosity, stderr_tty) {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
                record.level(),
                record.args()
            )
        });
    }
    let _ = builder.try_init();
}

/// With a log file configured, env_logger's stderr only gets warnings and
/// errors, plus everything else under `-v` when stderr is a terminal.
fn echoes_to_console(level: log::Level, verbosity: u8, stderr_tty: bool) -> bool {
    level <= log::Level::Warn || (verbosity > 0 && stderr_tty)
}
