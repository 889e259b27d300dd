use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgGroup, CommandFactory, FromArgMatches, Parser};
use log::{error, info};

use crate::batch::orchestrator::Orchestrator;
use crate::config::confirm::PromptConfirm;
use crate::config::settings::BaseConfig;
use crate::options::{Batch, DEFAULT_CORES, DEFAULT_MIN_DEPTH, DEFAULT_OUTDIR, DEFAULT_SCRIPTS, DEFAULT_SNAKEFILE};
use crate::snakemake::executor::ProcessExecutor;

/// Sequential batch runs over many samples
mod batch;
/// Per-sample configuration records and writing them to disk
mod config;
mod error;
mod help;
mod options;
/// Sample and threshold inputs
mod request;
/// Snakemake command lines and process execution
mod snakemake;

#[derive(Parser, Debug)]
#[command(name = "hetcall", version, about = "Run ANGSD→basecalls→ROH analysis via Snakemake")]
#[command(group(ArgGroup::new("input").required(true).args(["bam", "bam_list"])))]
struct Args {
    /// BAM file for analysis
    #[arg(short, long, value_name = "FILE")]
    bam: Option<PathBuf>,

    /// File with BAM paths, one per line
    #[arg(short = 'l', long, value_name = "FILE")]
    bam_list: Option<PathBuf>,

    /// Output prefix (required for a single BAM, ignored for a BAM list)
    #[arg(short, long, value_name = "STR")]
    out_prefix: Option<String>,

    /// Output directory
    #[arg(short = 'd', long, value_name = "DIR", default_value = DEFAULT_OUTDIR)]
    outdir: PathBuf,

    /// Directory with required scripts
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_SCRIPTS)]
    scripts: PathBuf,

    /// Minimum depth for ANGSD
    #[arg(short, long, value_name = "INT", default_value_t = DEFAULT_MIN_DEPTH, allow_negative_numbers = true)]
    min_depth: i64,

    /// Number of cores for Snakemake (ANGSD threads are capped at 64)
    #[arg(short, long, value_name = "INT", default_value_t = DEFAULT_CORES, allow_negative_numbers = true)]
    cores: i64,

    /// Het calling threshold, can be repeated [default: 0.05]
    #[arg(short = 't', long = "threshold", value_name = "FLOAT", conflicts_with = "threshold_list")]
    thresholds: Vec<f64>,

    /// File with thresholds, one per line
    #[arg(short = 'T', long, value_name = "FILE")]
    threshold_list: Option<PathBuf>,

    /// ROH minimum threshold, can be repeated [default: 0.2]
    #[arg(short = 'R', long = "roh-min", value_name = "FLOAT", conflicts_with = "roh_list")]
    roh_mins: Vec<f64>,

    /// File with ROH thresholds, one per line
    #[arg(short = 'L', long, value_name = "FILE")]
    roh_list: Option<PathBuf>,

    /// Region string for ANGSD -r (e.g. 'chr1:' or 'chr1:1-200000000')
    #[arg(short, long, value_name = "STR")]
    regions: Option<String>,

    /// Regions file for ANGSD -rf (one scaffold per line)
    #[arg(short = 'f', long, value_name = "FILE")]
    rf: Option<PathBuf>,

    /// Snakefile path
    #[arg(short = 'S', long, value_name = "FILE", default_value = DEFAULT_SNAKEFILE)]
    snakefile: PathBuf,

    /// Config file path [default: config_<prefix>.json]
    #[arg(short = 'C', long, value_name = "FILE")]
    configfile: Option<PathBuf>,

    /// Show what would be done without executing
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Unlock working directory
    #[arg(short, long)]
    unlock: bool,

    /// Overwrite existing config files without asking
    #[arg(short = 'F', long)]
    force: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let detailed_help = help::render_help("hetcall").context("Rendering help text")?;
    let command = Args::command().after_help(detailed_help).arg_required_else_help(true);

    let matches = match command.try_get_matches() {
        Ok(matches) => matches,
        Err(err) => return Ok(usage_exit(err)),
    };
    let args = match Args::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(err) => return Ok(usage_exit(err)),
    };

    let batch = Batch::resolve(args)?;
    let base = BaseConfig::build(batch.settings);
    info!("Base config: {:?}", base);

    let mut orchestrator = Orchestrator::new(&batch.options, &base, PromptConfirm::stdio(), ProcessExecutor);
    let result = orchestrator.run_batch(&batch.requests);

    match result.is_success() {
        true => Ok(ExitCode::SUCCESS),
        false => {
            error!(
                "{} of {} runs did not complete ({} failed, {} skipped)",
                result.total - result.succeeded,
                result.total,
                result.failed,
                result.skipped
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Help and version requests (including a bare `hetcall`) succeed, usage errors fail
fn usage_exit(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            ExitCode::SUCCESS
        }
        _ => ExitCode::FAILURE,
    }
}
