use std::path::PathBuf;

use serde::Serialize;

use crate::request::sample::RunRequest;
use crate::request::threshold::ThresholdSet;

/// ANGSD gets at most this many threads, however many cores Snakemake is given
pub const MAX_ANGSD_THREADS: u32 = 64;

/// Minimum ROH threshold(s)
///
/// A single value is written as a bare number and several as a list. The pipeline rules branch
/// on that shape, so it has to survive serialisation exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RohMin {
    Single(f64),
    Multiple(Vec<f64>),
}

impl From<ThresholdSet> for RohMin {
    fn from(set: ThresholdSet) -> RohMin {
        let mut values = set.into_vec();
        match values.len() {
            1 => RohMin::Single(values.remove(0)),
            _ => RohMin::Multiple(values),
        }
    }
}

/// Global settings resolved from the command line, before any sample is known
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub rf: Option<PathBuf>,
    pub regions: Option<String>,
    pub scripts: PathBuf,
    pub outdir: PathBuf,
    pub min_depth: i64,
    pub thresholds: ThresholdSet,
    pub roh_mins: ThresholdSet,
    pub cores: i64,
}

/// Configuration shared by every run in a batch
///
/// Field order is the order keys appear in the config file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseConfig {
    pub rf: Option<PathBuf>,
    pub regions: Option<String>,
    pub scripts: PathBuf,
    pub outdir: PathBuf,
    pub min_depth: i64,
    pub thresholds: Vec<f64>,
    pub roh_min: RohMin,
    pub angsd_threads: u32,
}

/// Configuration for one sample: the shared base plus the sample's BAM and prefix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunConfig {
    #[serde(flatten)]
    pub base: BaseConfig,
    pub bam: PathBuf,
    pub prefix: String,
}

impl BaseConfig {
    pub fn build(settings: PipelineSettings) -> BaseConfig {
        BaseConfig {
            rf: settings.rf,
            regions: settings.regions,
            scripts: settings.scripts,
            outdir: settings.outdir,
            min_depth: settings.min_depth,
            thresholds: settings.thresholds.into_vec(),
            roh_min: RohMin::from(settings.roh_mins),
            angsd_threads: angsd_threads(settings.cores),
        }
    }

    pub fn specialize(&self, request: &RunRequest) -> RunConfig {
        RunConfig {
            base: self.clone(),
            bam: request.bam.clone(),
            prefix: request.prefix.clone(),
        }
    }
}

/// Clamp any requested core count, including zero or negative ones, to `1..=64`
pub fn angsd_threads(cores: i64) -> u32 {
    cores.clamp(1, i64::from(MAX_ANGSD_THREADS)) as u32
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn settings(thresholds: Vec<f64>, roh_mins: Vec<f64>, cores: i64) -> PipelineSettings {
        PipelineSettings {
            rf: None,
            regions: Some("chr1:1-50000000".to_string()),
            scripts: PathBuf::from("diversity"),
            outdir: PathBuf::from("results"),
            min_depth: 10,
            thresholds: ThresholdSet::new(thresholds).unwrap(),
            roh_mins: ThresholdSet::new(roh_mins).unwrap(),
            cores,
        }
    }

    #[test]
    fn single_roh_min_collapses_to_scalar() {
        let base = BaseConfig::build(settings(vec![0.05, 0.1], vec![0.2], 8));
        assert_eq!(base.roh_min, RohMin::Single(0.2));
        assert_eq!(base.thresholds, vec![0.05, 0.1]);
    }

    #[test]
    fn several_roh_mins_stay_a_list() {
        let base = BaseConfig::build(settings(vec![0.05], vec![0.3, 0.1, 0.2], 8));
        assert_eq!(base.roh_min, RohMin::Multiple(vec![0.3, 0.1, 0.2]));
    }

    #[test]
    fn threads_are_clamped() {
        assert_eq!(angsd_threads(200), 64);
        assert_eq!(angsd_threads(0), 1);
        assert_eq!(angsd_threads(-1), 1);
        assert_eq!(angsd_threads(i64::MAX), 64);
        assert_eq!(angsd_threads(8), 8);
        assert_eq!(angsd_threads(64), 64);
        assert_eq!(BaseConfig::build(settings(vec![0.05], vec![0.2], 500)).angsd_threads, 64);
    }

    #[test]
    fn specialize_leaves_base_alone() {
        let base = BaseConfig::build(settings(vec![0.05], vec![0.2], 8));
        let before = base.clone();
        let run = base.specialize(&RunRequest::new("a.bam", "sampleA"));

        assert_eq!(base, before);
        assert_eq!(run.base, before);
        assert_eq!(run.prefix, "sampleA");
        assert_eq!(run.bam, PathBuf::from("a.bam"));
    }

    #[test]
    fn serialised_keys_follow_declaration_order() {
        let base = BaseConfig::build(settings(vec![0.05, 0.1], vec![0.1, 0.3], 8));
        let run = base.specialize(&RunRequest::new("b.bam", "b"));
        let text = serde_json::to_string(&run).unwrap();

        let keys = [
            "rf", "regions", "scripts", "outdir", "min_depth", "thresholds", "roh_min", "angsd_threads", "bam", "prefix",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| text.find(&format!("\"{key}\":")).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{text}");

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["rf"], json!(null));
        assert_eq!(value["roh_min"], json!([0.1, 0.3]));
        assert_eq!(value["angsd_threads"], json!(8));
    }

    #[test]
    fn scalar_roh_min_is_a_bare_number() {
        let base = BaseConfig::build(settings(vec![0.05], vec![0.2], 8));
        let value = serde_json::to_value(base.specialize(&RunRequest::new("a.bam", "a"))).unwrap();
        assert_eq!(value["roh_min"], json!(0.2));
    }
}
