use std::path::{Path, PathBuf};

/// A single sample to push through the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub bam: PathBuf,
    pub prefix: String,
}

impl RunRequest {
    pub fn new(bam: impl Into<PathBuf>, prefix: impl Into<String>) -> RunRequest {
        RunRequest { bam: bam.into(), prefix: prefix.into() }
    }

    /// Parse one sample list line: `<path> [prefix]`
    ///
    /// Tokens after the prefix are ignored. Returns `None` for a line with no tokens.
    pub fn from_line(line: &str) -> Option<RunRequest> {
        let mut tokens = line.split_whitespace();
        let bam = tokens.next()?;
        let prefix = match tokens.next() {
            Some(prefix) => prefix.to_string(),
            None => default_prefix(Path::new(bam)),
        };
        Some(RunRequest::new(bam, prefix))
    }
}

/// File name with the final extension removed, e.g. `/data/s1.bam` -> `s1`
pub fn default_prefix(bam: &Path) -> String {
    bam.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| bam.to_string_lossy().into_owned())
}
