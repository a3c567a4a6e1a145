//! `oxidize-settings` — back up and restore GNOME appearance settings.
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod ctx;
mod export;
mod import;
mod record;
mod setting;
mod store;
mod util;

use ctx::Ctx;
use import::ImportOptions;
use record::SettingsRecord;
use store::Gsettings;

#[derive(Parser)]
#[command(name = "oxidize-settings", about = "Back up and restore desktop appearance settings")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Capture the current settings into the record file
    Export {
        /// Record file (default: settings.json, or `record` from the config)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Apply a previously exported record
    Import {
        /// Record file (default: settings.json, or `record` from the config)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Log what would be set without changing anything
        #[arg(long)]
        dry_run: bool,
        /// Do not write settings whose stored value is empty
        #[arg(long)]
        skip_empty: bool,
    },

    /// Print the record file
    Show {
        /// Record file (default: settings.json, or `record` from the config)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let ctx = Ctx::new().context("initialise context")?;

    match cli.cmd {
        Cmd::Export { file } => {
            let ctx = ctx.with_record(file);
            // Degraded values are kept in the record and only warned about.
            export::run(&Gsettings::new(&ctx.gsettings), &ctx.record_file)?;
            Ok(())
        }

        Cmd::Import {
            file,
            dry_run,
            skip_empty,
        } => {
            let ctx = ctx.with_record(file);
            let opts = ImportOptions {
                dry_run,
                skip_empty,
            };
            cmd_import(&ctx, opts)
        }

        Cmd::Show { file } => {
            let ctx = ctx.with_record(file);
            let record = SettingsRecord::load(&ctx.record_file).context("read settings record")?;
            for (setting, value) in record.entries() {
                println!("{setting} = {value}");
            }
            Ok(())
        }
    }
}

/// Apply the record; any failed key makes the whole run fail.
fn cmd_import(ctx: &Ctx, opts: ImportOptions) -> Result<()> {
    let report = import::run(&Gsettings::new(&ctx.gsettings), &ctx.record_file, opts)?;

    if !report.failures.is_empty() {
        let failed: Vec<String> = report.failures.iter().map(ToString::to_string).collect();
        bail!(
            "{} of {} settings failed to apply:\n  {}",
            report.failures.len(),
            setting::Setting::ALL.len(),
            failed.join("\n  ")
        );
    }

    Ok(())
}
