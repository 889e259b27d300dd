use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::request::list::{resolve_numbers, ListKind};

pub const DEFAULT_HET_THRESHOLD: f64 = 0.05;
pub const DEFAULT_ROH_MIN: f64 = 0.2;

/// An ordered, non-empty sequence of cutoffs
///
/// Order comes from the source (flags or list file) and is never changed; the pipeline produces
/// one result set per value.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdSet(Vec<f64>);

impl ThresholdSet {
    pub fn new(values: Vec<f64>) -> Result<ThresholdSet> {
        if values.is_empty() {
            return Err(Error::Validation("A threshold set needs at least one value".to_string()));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(Error::Validation(format!("Threshold {bad} is not a finite number")));
        }
        Ok(ThresholdSet(values))
    }

    /// Pick the list file if there is one, then repeated flags, then the default
    pub fn resolve(list: Option<&Path>, flags: &[f64], default: f64, kind: ListKind) -> Result<ThresholdSet> {
        let set = match (list, flags) {
            (Some(path), _) => ThresholdSet::new(resolve_numbers(path, kind)?)?,
            (None, []) => ThresholdSet::new(vec![default])?,
            (None, values) => ThresholdSet::new(values.to_vec())?,
        };
        info!("Using {} {:?}", kind, set.as_slice());
        Ok(set)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn default_when_nothing_given() {
        let set = ThresholdSet::resolve(None, &[], DEFAULT_HET_THRESHOLD, ListKind::Thresholds).unwrap();
        assert_eq!(set.as_slice(), &[0.05]);
    }

    #[test]
    fn flags_keep_their_order() {
        let set = ThresholdSet::resolve(None, &[0.1, 0.05, 0.3], DEFAULT_HET_THRESHOLD, ListKind::Thresholds).unwrap();
        assert_eq!(set.as_slice(), &[0.1, 0.05, 0.3]);
    }

    #[test]
    fn list_file_wins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roh.txt");
        fs::write(&path, "0.1\n# comment\n0.3\n").unwrap();

        let set = ThresholdSet::resolve(Some(&path), &[], DEFAULT_ROH_MIN, ListKind::RohThresholds).unwrap();
        assert_eq!(set.into_vec(), vec![0.1, 0.3]);
    }

    #[test]
    fn empty_and_non_finite_sets_are_rejected() {
        assert!(ThresholdSet::new(vec![]).is_err());
        assert!(ThresholdSet::new(vec![0.1, f64::NAN]).is_err());
    }
}
