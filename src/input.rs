//! Reading transition-count vectors from JSON files.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A counts file holds either a single transition-count vector or a series
/// of vectors, one per consecutive snapshot pair.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountsFile {
    Single(Vec<u64>),
    Series(Vec<Vec<u64>>),
}

/// Reads one or more count vectors from a JSON file.
///
/// Each vector is an independent unit of analysis; a series file simply
/// yields them in order.
pub fn read_counts(path: &Path) -> Result<Vec<Vec<u64>>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read counts file: {}", path.display()))?;
    let file: CountsFile = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse counts JSON: {}", path.display()))?;

    Ok(match file {
        CountsFile::Single(counts) => vec![counts],
        CountsFile::Series(series) => series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_single_vector() {
        let file = write_temp("[10, 10, 20, 20]");
        let series = read_counts(file.path()).unwrap();
        assert_eq!(series, vec![vec![10, 10, 20, 20]]);
    }

    #[test]
    fn reads_series_of_vectors() {
        let file = write_temp("[[1, 2, 3, 4], [5, 6, 7, 8]]");
        let series = read_counts(file.path()).unwrap();
        assert_eq!(series, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
    }

    #[test]
    fn rejects_negative_counts() {
        let file = write_temp("[10, -1, 20, 20]");
        assert!(read_counts(file.path()).is_err());
    }

    #[test]
    fn rejects_non_integer_counts() {
        let file = write_temp("[10.5, 1, 20, 20]");
        assert!(read_counts(file.path()).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        let file = write_temp("[10, 20,");
        assert!(read_counts(file.path()).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_counts(Path::new("/nonexistent/counts.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/counts.json"));
    }
}
