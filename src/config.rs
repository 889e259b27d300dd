//! Build per-sample Snakemake configuration and write it to disk

/// Typed configuration records handed to the pipeline
pub mod settings;
/// Ask the operator before clobbering an existing config file
pub mod confirm;
/// Write a run configuration to its config file
pub mod materialize;
