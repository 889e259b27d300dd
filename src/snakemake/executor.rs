use std::fmt;
use std::io;

use log::{error, info};

use crate::snakemake::invocation::Invocation;

/// Runs an invocation to completion
///
/// Returns the process exit code, or `None` if the process ended without one (killed by a
/// signal). An `Err` means the process never started.
pub trait Executor {
    fn run(&mut self, invocation: &Invocation) -> io::Result<Option<i32>>;
}

/// Spawns a real child process and blocks until it exits
///
/// stdout and stderr are inherited so the operator sees Snakemake's own output.
pub struct ProcessExecutor;

impl Executor for ProcessExecutor {
    fn run(&mut self, invocation: &Invocation) -> io::Result<Option<i32>> {
        let mut cmd = invocation.command();
        info!("Running snakemake process");
        info!("{:?}", &cmd);
        let status = cmd.status()?;
        Ok(status.code())
    }
}

/// How a single Snakemake run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitOutcome {
    Completed,
    DryRun,
    Failed { code: Option<i32> },
    NotStarted { reason: String },
}

impl ExitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExitOutcome::Completed | ExitOutcome::DryRun)
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExitOutcome::Completed => write!(f, "completed"),
            ExitOutcome::DryRun => write!(f, "dry run, not executed"),
            ExitOutcome::Failed { code: Some(code) } => write!(f, "exit code {code}"),
            ExitOutcome::Failed { code: None } => write!(f, "terminated by a signal"),
            ExitOutcome::NotStarted { reason } => write!(f, "could not start: {reason}"),
        }
    }
}

/// Show the invocation, then run it unless this is a dry run
///
/// Failures are logged here and returned as values; nothing is retried.
pub fn execute(invocation: &Invocation, dry_run: bool, executor: &mut dyn Executor) -> ExitOutcome {
    info!("Running: {invocation}");

    if dry_run {
        info!("(Dry run - no actual execution)");
        return ExitOutcome::DryRun;
    }

    match executor.run(invocation) {
        Ok(Some(0)) => ExitOutcome::Completed,
        Ok(code) => {
            match code {
                Some(code) => error!("Snakemake failed (exit code {code})"),
                None => error!("Snakemake was terminated by a signal"),
            }
            ExitOutcome::Failed { code }
        }
        Err(err) => {
            error!("Can't start {}: {}", invocation.program.to_string_lossy(), err);
            ExitOutcome::NotStarted { reason: err.to_string() }
        }
    }
}
