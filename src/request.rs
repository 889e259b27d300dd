//! Resolve the samples and thresholds a batch will run with

/// Read line-oriented list files (sample lists, numeric threshold lists)
pub mod list;
/// One BAM file and the prefix used to name everything derived from it
pub mod sample;
/// Non-empty, ordered sets of numeric cutoffs
pub mod threshold;
