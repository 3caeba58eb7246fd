//! claimsite - headless preview of the CheckThat! 2025 paper page.
//!
//! The browser build lives in `claimsite_web`; this binary drives the same
//! widgets on tokio timers and logs every state change.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tokio::task::LocalSet;
use tracing::info;

use claimsite::config::SiteConfig;
use claimsite::logging;
use claimsite::preview;
use claimsite::training::SCHEDULE;

#[derive(Debug, Parser)]
#[command(name = "claimsite", version, about = "Headless preview of the paper page widgets")]
struct Cli {
    /// Config file (defaults to <config_dir>/claimsite/config.json when present)
    #[arg(long, global = true, env = "CLAIMSITE_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `claimsite=trace`
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Mount every widget and log state changes for a while
    Preview(PreviewArgs),
    /// Print the training animation timing table
    Schedule,
    /// Print the page copy as JSON
    Content {
        #[arg(long)]
        pretty: bool,
    },
    /// Write the effective config to the default location
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Default, Args)]
struct PreviewArgs {
    #[arg(long)]
    duration_ms: Option<u64>,
    #[arg(long)]
    no_training: bool,
    /// Node id to toggle on the architecture diagram (repeatable)
    #[arg(long = "toggle")]
    toggle: Vec<u8>,
    #[arg(long)]
    dataset: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = SiteConfig::discover(cli.config.as_deref())?;
    logging::init(cli.log.as_deref().unwrap_or(&config.log_filter));

    match cli.command.unwrap_or(Command::Preview(PreviewArgs::default())) {
        Command::Preview(args) => {
            if let Some(ms) = args.duration_ms {
                config.preview.duration_ms = ms;
            }
            if args.no_training {
                config.preview.run_training = false;
            }
            if !args.toggle.is_empty() {
                config.preview.toggle_nodes = args.toggle;
            }
            if let Some(i) = args.dataset {
                config.preview.dataset = i;
            }

            info!("Previewing for {} ms", config.preview.duration_ms);
            let report = LocalSet::new().run_until(preview::run(&config.preview)).await?;
            info!(
                "Final state: step={} phase={} nodes={} dataset={}",
                report.final_step,
                report.final_phase.label(),
                report.active_nodes,
                report.dataset
            );
        }
        Command::Schedule => {
            for (offset, phase) in SCHEDULE {
                println!("{:>6} ms  {:<13} {}", offset.as_millis(), phase.label(), phase.caption());
            }
        }
        Command::Content { pretty } => {
            println!("{}", config.content.to_json(pretty)?);
        }
        Command::InitConfig { force } => {
            let path = SiteConfig::default_path()?;
            config.write_new(&path, force)?;
            info!("Wrote config to {:?}", path);
        }
    }

    Ok(())
}
