use clap::Parser;
use minesweeper::ui::{App, TerminalKeys, TerminalSession};
use minesweeper::{Difficulty, GameError};
use rand::{rngs::StdRng, SeedableRng};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "minesweeper", about = "Console Minesweeper")]
struct Args {
    /// Start every round at this difficulty instead of showing the menu.
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,
    /// Seed for mine placement; boards are random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Write diagnostics to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Tracing filter used with --log-file, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path, &args.log) {
            eprintln!("Cannot set up logging to {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
    }

    match run(&args) {
        Ok(_) => {
            println!("Thanks for playing!");
            ExitCode::SUCCESS
        }
        Err(GameError::Io(e)) if e.kind() == io::ErrorKind::Interrupted => {
            tracing::info!("interrupted");
            ExitCode::from(130)
        }
        Err(e) => {
            tracing::error!(error = %e, "game aborted");
            eprintln!("Game error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn log_filter(filter: &str) -> Result<EnvFilter, String> {
    EnvFilter::try_new(filter).map_err(|e| format!("invalid --log filter {filter:?}: {e}"))
}

fn init_logging(path: &Path, filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = log_filter(filter)?;
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn run(args: &Args) -> Result<u32, GameError> {
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(seed = ?args.seed, difficulty = ?args.difficulty, "starting");

    let _session = TerminalSession::enter()?;
    App::new(TerminalKeys, io::stdout(), rng)
        .with_difficulty(args.difficulty)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_rejects_bad_directives() {
        assert!(log_filter("debug").is_ok());
        assert!(log_filter("minesweeper=trace,warn").is_ok());

        let err = log_filter("minesweeper=loud").unwrap_err();
        assert!(err.contains("invalid --log filter"));
        assert!(err.contains("minesweeper=loud"));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["minesweeper", "--difficulty", "expert", "--seed", "7"]);
        assert_eq!(args.difficulty, Some(Difficulty::Expert));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.log, "info");
    }
}
