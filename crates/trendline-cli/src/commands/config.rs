//! `trendline config`: inspect and edit the settings file.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::output::{
    print_header, print_info, print_output, print_success, print_warning, KeyValue,
};
use crate::settings::{ConfigKey, Settings};

/// `trendline config` arguments.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Settings operations.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print every setting with its effective value
    Show,

    /// Print one setting
    Get(GetArgs),

    /// Validate and store one setting
    Set(SetArgs),

    /// Describe the known keys and their defaults
    List,

    /// Restore defaults
    Reset(ResetArgs),

    /// Print where the settings file lives
    Path,
}

/// `config get` arguments.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Settings key (e.g. precision, timezone)
    pub key: ConfigKey,
}

/// `config set` arguments.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Settings key (e.g. precision, timezone)
    pub key: ConfigKey,

    /// New value
    pub value: String,
}

/// `config reset` arguments.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Restore every key
    #[arg(long, conflicts_with = "key")]
    pub all: bool,

    /// Key to restore
    pub key: Option<ConfigKey>,
}

/// A settings key with its description and default.
#[derive(Debug, Clone, Serialize, Tabled)]
struct KeyDescription {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
    #[tabled(rename = "Default")]
    default: String,
}

/// Runs a settings operation against the file at `path`.
pub fn execute(args: ConfigArgs, path: &Path, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(path, format),
        ConfigCommand::Get(get_args) => execute_get(get_args, path, format),
        ConfigCommand::Set(set_args) => execute_set(set_args, path),
        ConfigCommand::List => execute_list(format),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, path),
        ConfigCommand::Path => execute_path(path, format),
    }
}

fn execute_show(path: &Path, format: OutputFormat) -> Result<()> {
    let settings = Settings::load(path)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}={}", key, settings.get(*key));
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| KeyValue::new(key.as_str(), settings.get(*key)))
                .collect();
            if format == OutputFormat::Table {
                print_header("Settings");
            }
            print_output(&results, format)?;
        }
    }

    Ok(())
}

fn execute_get(args: GetArgs, path: &Path, format: OutputFormat) -> Result<()> {
    let settings = Settings::load(path)?;
    let value = settings.get(args.key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", args.key, value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": args.key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

fn execute_set(args: SetArgs, path: &Path) -> Result<()> {
    let mut settings = Settings::load(path)?;
    settings.set(args.key, &args.value)?;
    settings.save(path)?;

    print_success(&format!("{} is now {}", args.key, settings.get(args.key)));
    Ok(())
}

fn execute_list(format: OutputFormat) -> Result<()> {
    let defaults = Settings::default();
    let results: Vec<KeyDescription> = ConfigKey::all()
        .iter()
        .map(|key| KeyDescription {
            key: key.as_str(),
            description: key.description(),
            default: defaults.get(*key),
        })
        .collect();

    match format {
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key);
            }
            Ok(())
        }
        _ => {
            if format == OutputFormat::Table {
                print_header("Settings Keys");
            }
            print_output(&results, format)
        }
    }
}

fn execute_reset(args: ResetArgs, path: &Path) -> Result<()> {
    if args.all {
        Settings::default().save(path)?;
        print_success("All settings restored to defaults");
    } else if let Some(key) = args.key {
        let mut settings = Settings::load(path)?;
        settings.reset(key);
        settings.save(path)?;
        print_success(&format!("{} restored to {}", key, settings.get(key)));
    } else {
        print_warning("Nothing reset: name a key or pass --all");
    }

    Ok(())
}

fn execute_path(path: &Path, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Minimal {
        println!("{}", path.display());
        return Ok(());
    }

    let state = if path.exists() { "present" } else { "absent, defaults apply" };
    print_info(&format!("{} ({})", path.display(), state));
    Ok(())
}
