//! Calculator CLI Application
//!
//! Terminal front end for the calc-core library:
//! - Batch mode: evaluate a key script given with `--keys`
//! - Interactive mode: read key scripts from stdin, one per line
//! - Keyboard help (`--shortcuts`) and JSON state snapshots (`--json`)

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

mod config;
mod render;
mod session;

use config::AppConfig;
use session::Session;

/// Basic arithmetic calculator driven by keystrokes
#[derive(Parser, Debug)]
#[command(name = "calc-cli")]
#[command(about = "Left-to-right calculator driven by key scripts", long_about = None)]
#[command(version)]
struct Args {
    /// Key script to evaluate, e.g. "2+3*4=" or "9{Backspace}" (omit for interactive mode)
    #[arg(short, long, value_name = "SCRIPT")]
    keys: Option<String>,

    /// Path to configuration file (calc.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the display after every key instead of once per script
    #[arg(long)]
    trace: bool,

    /// Print the final calculator state as JSON
    #[arg(long)]
    json: bool,

    /// Show keyboard controls and exit
    #[arg(long)]
    shortcuts: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Calculator CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using calc-core library v{}", calc_core::VERSION);

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let mut session = Session::new(&config, args.trace);

    if args.shortcuts {
        print!("{}", render::shortcuts_table(session.keys()));
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.keys {
        Some(script) => session.run_script(script, &mut out)?,
        None => session.run_interactive(io::stdin().lock(), &mut out)?,
    }

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(session.state())?)?;
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
