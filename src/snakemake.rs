//! Build Snakemake command lines and run them

/// The fixed-order Snakemake command line for one run
pub mod invocation;
/// Run an invocation and classify how it ended
pub mod executor;
