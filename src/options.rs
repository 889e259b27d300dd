//! Turn parsed command line arguments into an immutable batch description
//!
//! Every input problem (missing list files, bad numbers, a lone `--bam` without a prefix) is
//! found here, before any sample runs.

use std::path::PathBuf;

use log::{info, warn};

use crate::config::settings::PipelineSettings;
use crate::error::{Error, Result};
use crate::request::list::{resolve_samples, ListKind};
use crate::request::sample::RunRequest;
use crate::request::threshold::{ThresholdSet, DEFAULT_HET_THRESHOLD, DEFAULT_ROH_MIN};
use crate::Args;

pub static DEFAULT_OUTDIR: &str = "results";
pub static DEFAULT_SCRIPTS: &str = "diversity";
pub static DEFAULT_SNAKEFILE: &str = "Snakefile";
pub const DEFAULT_MIN_DEPTH: i64 = 10;
pub const DEFAULT_CORES: i64 = 8;

/// How each run is written and executed, fixed for the whole batch
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub snakefile: PathBuf,
    /// Write every run's config here instead of `config_<prefix>.json`
    pub configfile: Option<PathBuf>,
    pub cores: i64,
    pub dry_run: bool,
    pub unlock: bool,
    pub force: bool,
}

/// Everything needed to start the batch loop
#[derive(Debug)]
pub struct Batch {
    pub requests: Vec<RunRequest>,
    pub settings: PipelineSettings,
    pub options: RunOptions,
}

impl Batch {
    pub fn resolve(args: Args) -> Result<Batch> {
        if args.bam.is_some() && args.out_prefix.is_none() {
            return Err(Error::Validation("--out-prefix is required when using --bam".to_string()));
        }

        let thresholds = ThresholdSet::resolve(
            args.threshold_list.as_deref(),
            &args.thresholds,
            DEFAULT_HET_THRESHOLD,
            ListKind::Thresholds,
        )?;
        let roh_mins = ThresholdSet::resolve(args.roh_list.as_deref(), &args.roh_mins, DEFAULT_ROH_MIN, ListKind::RohThresholds)?;

        if let Some(rf) = &args.rf {
            if !rf.exists() {
                return Err(Error::MissingFile { what: "regions", path: rf.clone() });
            }
        }
        if args.rf.is_some() && args.regions.is_some() {
            warn!("Both --regions and --rf given, passing both to the pipeline");
        }

        let requests = match (args.bam, args.bam_list, args.out_prefix) {
            (Some(bam), None, Some(prefix)) => vec![RunRequest::new(bam, prefix)],
            (None, Some(list), prefix) => {
                if prefix.is_some() {
                    warn!("--out-prefix is ignored when using --bam-list");
                }
                let requests = resolve_samples(&list)?;
                info!("Found {} BAM files to process", requests.len());
                requests
            }
            _ => return Err(Error::Validation("Exactly one of --bam or --bam-list is required".to_string())),
        };

        let settings = PipelineSettings {
            rf: args.rf,
            regions: args.regions,
            scripts: args.scripts,
            outdir: args.outdir,
            min_depth: args.min_depth,
            thresholds,
            roh_mins,
            cores: args.cores,
        };

        let options = RunOptions {
            snakefile: args.snakefile,
            configfile: args.configfile,
            cores: args.cores,
            dry_run: args.dry_run,
            unlock: args.unlock,
            force: args.force,
        };

        Ok(Batch { requests, settings, options })
    }
}
