//! Trendline CLI - project a price trend to a target time or to the start of
//! the current trading timeframes.
//!
//! # Usage
//!
//! ```bash
//! # Predict at an explicit target time (both models)
//! trendline predict --start-price 1 --end-price 10 \
//!     --start-time "2025-01-01 05:00" --end-time "2025-03-01 05:00" \
//!     --target-time "2025-03-07 05:00"
//!
//! # Predict at the start of every timeframe, as of now
//! trendline auto-detect --start-price 1 --end-price 10
//!
//! # Start of the current 4-hour bucket
//! trendline boundary --timeframe 4hourly --now "2025-03-07 13:59"
//!
//! # Change the operating timezone
//! trendline config set timezone Asia/Dubai
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod settings;

use cli::{Cli, Commands};
use commands::Context;
use settings::Settings;

fn main() {
    if let Err(e) = run() {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.quiet);

    let config_path = settings::resolve_path(cli.config.as_deref())?;

    // Config management works on the raw file, so only the calculation
    // commands resolve it into a context.
    let context = || -> Result<Context> {
        let settings = Settings::load(&config_path)?;
        Context::resolve(cli.format, cli.timezone.as_deref(), &settings)
    };

    match cli.command {
        Commands::Predict(args) => commands::predict::execute(args, &context()?)?,
        Commands::AutoDetect(args) => commands::auto_detect::execute(args, &context()?)?,
        Commands::Boundary(args) => commands::boundary::execute(args, &context()?)?,
        Commands::Config(args) => {
            commands::config::execute(args, &config_path, cli.format.unwrap_or_default())?;
        }
    }

    Ok(())
}
