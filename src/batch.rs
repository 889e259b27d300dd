//! Run every sample in order and add up how it went
//!
//! Runs never stop the batch: a failed or skipped sample is logged and the next one starts.

pub mod orchestrator;
pub mod result;
