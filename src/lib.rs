//! Build-time fetcher for pre-built frontend template bundles.
//!
//! Reads a YAML list of template descriptors, downloads one `dist.zip`
//! release archive per descriptor, and merges its contents (minus the
//! fixed `dist/` prefix) into `<root>/cmd/dashboard/<path>`.
//!
//! - **config** - Descriptor loading with a lenient skip policy
//! - **fetch** - Blocking download of one release asset
//! - **merge** - Zip extraction with prefix stripping
//!
//! Descriptors are processed strictly sequentially; a fetch or merge
//! failure aborts the run. Files from earlier runs are never cleaned
//! up; the merge only ever adds or overwrites.

pub mod config;
pub mod error;
pub mod fetch;
pub mod merge;

pub use config::{load_templates, TemplateDescriptor};
pub use error::FetchError;
pub use fetch::{dist_url, download_dist};
pub use merge::{merge_archive, DIST_PREFIX};
