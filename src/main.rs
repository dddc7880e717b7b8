//! Wumpus - Entry Point
//!
//! Reads commands from stdin, one per line, until the game ends.

use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use wumpus::config::GameConfig;
use wumpus::ui::App;

fn main() -> Result<()> {
    let config = GameConfig::parse();
    init_logging(&config)?;

    log::info!("Starting Wumpus v{}", wumpus::VERSION);
    if let Some(seed) = config.seed {
        log::info!("Using fixed seed {}", seed);
    }

    let mut app = App::new(config.random_source())?;
    let result = run_command_loop(&mut app);

    if let Err(ref e) = result {
        log::error!("Game exited with error: {:#}", e);
    }
    log::info!("Wumpus shut down cleanly");
    result
}

/// Log to stderr, or to the configured file so it stays out of the game text
fn init_logging(config: &GameConfig) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Main read loop
fn run_command_loop<R: wumpus::RandomSource>(app: &mut App<R>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in app.intro() {
        writeln!(stdout, "{}", line)?;
    }

    let mut input = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        input.clear();
        let read = stdin
            .lock()
            .read_line(&mut input)
            .context("reading command")?;
        if read == 0 {
            writeln!(stdout)?;
            break;
        }

        let reply = app.handle_line(&input)?;
        for line in &reply.lines {
            writeln!(stdout, "{}", line)?;
        }
        if !reply.keep_going {
            break;
        }
    }

    Ok(())
}
