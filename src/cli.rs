use crate::config::{
    DEFAULT_PATH_TEMPLATE, DEFAULT_REMOTE, DEFAULT_SCRAPER_NAME, DEFAULT_WEEKS,
};
use crate::model::Region;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Weekday and next-update analysis for per-region files in a git dataset")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    #[arg(long, env = "REPO_PATH", help = "Path to the dataset checkout (cloned there when missing)")]
    pub repo: Option<PathBuf>,

    #[arg(long, env = "CADENCE_REMOTE", default_value = DEFAULT_REMOTE, help = "Remote to clone from")]
    pub remote: String,

    #[arg(long, env = "CADENCE_WEEKS", default_value_t = DEFAULT_WEEKS, help = "Window length in weeks")]
    pub weeks: u32,

    #[arg(
        long,
        env = "CADENCE_PATH_TEMPLATE",
        default_value = DEFAULT_PATH_TEMPLATE,
        help = "Tracked file per region; {region} is replaced by the code"
    )]
    pub path_template: String,

    #[arg(
        long,
        env = "CADENCE_SCRAPER_NAME",
        default_value = DEFAULT_SCRAPER_NAME,
        help = "Committer name of the automated updater"
    )]
    pub scraper_name: String,

    #[arg(long, help = "Never clone; fail when the checkout is missing", default_value_t = false)]
    pub offline: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Weekday histogram and next-update prediction for one region
    Report {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output aggregated commits as NDJSON")]
        ndjson: bool,

        #[arg(long = "interactive", alias = "tui", alias = "ui", help = "Enable interactive terminal UI")]
        interactive: bool,

        #[arg(value_parser = parse_region, help = "Region code, e.g. ZH")]
        region: Option<Region>,
    },
    /// List the known region codes
    Regions,
}

fn parse_region(input: &str) -> std::result::Result<Region, String> {
    input.parse().map_err(|e: crate::error::CadenceError| e.to_string())
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Report {
                json,
                ndjson,
                interactive,
                region,
            } => crate::exec::report(self.common, json, ndjson, interactive, region),
            Commands::Regions => crate::exec::regions(),
        }
    }
}
