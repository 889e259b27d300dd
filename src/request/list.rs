use std::fmt;
use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::{Error, Result};
use crate::request::sample::RunRequest;

/// What a list file holds, used to name it in log and error messages
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListKind {
    Samples,
    Thresholds,
    RohThresholds,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Samples => "bams",
            ListKind::Thresholds => "thresholds",
            ListKind::RohThresholds => "ROH thresholds",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read a sample list: one `<bam> [prefix]` per line
pub fn resolve_samples(path: &Path) -> Result<Vec<RunRequest>> {
    let requests: Vec<RunRequest> = read_entries(path, ListKind::Samples)?
        .into_iter()
        .filter_map(|(_, line)| RunRequest::from_line(&line))
        .collect();

    non_empty(path, requests)
}

/// Read a numeric list: one real number per line
///
/// Any line that isn't a finite number fails the whole list, no partial list is returned.
pub fn resolve_numbers(path: &Path, kind: ListKind) -> Result<Vec<f64>> {
    let mut values: Vec<f64> = Vec::new();
    for (line_num, line) in read_entries(path, kind)? {
        match line.parse::<f64>() {
            Ok(value) if value.is_finite() => values.push(value),
            _ => {
                warn!("Bad {} entry on line {} of {}", kind, line_num, path.display());
                return Err(Error::Parse {
                    kind,
                    path: path.to_path_buf(),
                    line: line_num,
                    text: line,
                });
            }
        }
    }

    non_empty(path, values)
}

/// Trimmed lines paired with their 1-based line number, blank and `#` lines dropped
fn read_entries(path: &Path, kind: ListKind) -> Result<Vec<(usize, String)>> {
    if !path.exists() {
        return Err(Error::MissingFile { what: kind.as_str(), path: path.to_path_buf() });
    }
    info!("Reading {} list {}", kind, path.display());
    let content = fs::read_to_string(path).map_err(|err| {
        warn!("Can't read {} list at path {}", kind, path.display());
        Error::Read { path: path.to_path_buf(), source: err }
    })?;

    Ok(content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(i, line)| (i, line.to_string()))
        .collect())
}

fn non_empty<T>(path: &Path, items: Vec<T>) -> Result<Vec<T>> {
    match items.is_empty() {
        true => Err(Error::EmptyList { path: path.to_path_buf() }),
        false => Ok(items),
    }
}
