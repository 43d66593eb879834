//! Error types for the fetch-and-merge run.

use std::path::PathBuf;

/// Errors raised while loading templates, downloading bundles, or merging
/// them into the target tree.
///
/// Only the two configuration variants are handled by the binary (logged,
/// early return). Everything else propagates and aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Templates file does not exist.
    #[error("templates file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Templates file exists but is not valid YAML.
    #[error("invalid YAML in {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Transport failure or non-success HTTP status for a bundle download.
    #[error("download failed for {url}: {detail}")]
    Download { url: String, detail: String },

    /// Response body is not a readable zip archive, or an entry path is
    /// unsafe to extract.
    #[error("bad archive: {detail}")]
    Archive { detail: String },

    /// Directory creation or file write failed during the merge.
    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
