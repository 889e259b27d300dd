use chrono::Utc;
use log::{error, info, warn};

use crate::batch::result::{BatchResult, RunStatus};
use crate::config::confirm::Confirm;
use crate::config::materialize::{config_path, materialize, Materialized};
use crate::config::settings::BaseConfig;
use crate::options::RunOptions;
use crate::request::sample::RunRequest;
use crate::snakemake::executor::{execute, Executor};
use crate::snakemake::invocation::Invocation;

/// Drives samples one at a time through config writing and Snakemake
pub struct Orchestrator<'a, C, E> {
    options: &'a RunOptions,
    base: &'a BaseConfig,
    confirm: C,
    executor: E,
}

impl<'a, C: Confirm, E: Executor> Orchestrator<'a, C, E> {
    pub fn new(options: &'a RunOptions, base: &'a BaseConfig, confirm: C, executor: E) -> Self {
        Orchestrator { options, base, confirm, executor }
    }

    /// Run every request in order, never stopping early
    pub fn run_batch(&mut self, requests: &[RunRequest]) -> BatchResult {
        let mut result = BatchResult::default();
        for (i, request) in requests.iter().enumerate() {
            info!("[{}/{}] Processing: {} -> {}", i + 1, requests.len(), request.bam.display(), request.prefix);
            let status = self.run_one(request);
            result.record(status);
        }

        info!("Completed {}", result);
        if result.skipped > 0 {
            warn!("{} of {} samples skipped", result.skipped, result.total);
        }
        result
    }

    fn run_one(&mut self, request: &RunRequest) -> RunStatus {
        let started = Utc::now();
        let config = self.base.specialize(request);
        let target = config_path(self.options.configfile.as_deref(), &request.prefix);

        if self.options.dry_run {
            info!("Dry run: config would be written to {}", target.display());
        } else {
            match materialize(&config, &target, self.options.force, &mut self.confirm) {
                Ok(Materialized::Written(path)) => info!("Config written to: {}", path.display()),
                Ok(Materialized::Skipped) => {
                    warn!("Skipping {} ({})", request.prefix, request.bam.display());
                    return RunStatus::Skipped;
                }
                Err(err) => {
                    error!("Can't prepare {}: {}", request.prefix, err);
                    return RunStatus::Failed;
                }
            }
        }

        let invocation = Invocation::snakemake(
            &self.options.snakefile,
            self.options.cores,
            &target,
            self.options.dry_run,
            self.options.unlock,
        );
        let outcome = execute(&invocation, self.options.dry_run, &mut self.executor);
        let elapsed = Utc::now() - started;

        match outcome.is_success() {
            true => {
                info!("Successfully completed: {} in {:.1}s", request.prefix, elapsed.num_milliseconds() as f64 / 1000.0);
                RunStatus::Succeeded
            }
            false => {
                error!("Snakemake failed for {}: {}", request.prefix, outcome);
                RunStatus::Failed
            }
        }
    }
}
