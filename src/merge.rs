//! Archive merge: extract a release zip into the target directory.
//!
//! Every bundle roots its content under a top-level `dist/` directory.
//! The merge strips that prefix and writes the remaining hierarchy into
//! the destination, creating parent directories on the way. Files
//! already present at the destination are overwritten if the archive
//! carries them and left alone otherwise; nothing is ever deleted.

use std::fs;
use std::io::{self, Cursor};
use std::path::{Component, Path, PathBuf};

use zip::ZipArchive;

use crate::error::FetchError;

/// Fixed top-level directory inside every release archive.
pub const DIST_PREFIX: &str = "dist/";

/// Merge the zip archive in `archive` into `dest`.
///
/// Entries outside `dist/` are skipped silently. Entries whose stripped
/// path would escape `dest` (absolute, or containing `..`) fail the
/// merge instead of being written.
pub fn merge_archive(archive: &[u8], dest: &Path) -> Result<(), FetchError> {
    let mut zip = ZipArchive::new(Cursor::new(archive)).map_err(|err| FetchError::Archive {
        detail: err.to_string(),
    })?;

    for index in 0..zip.len() {
        let mut entry = zip.by_index(index).map_err(|err| FetchError::Archive {
            detail: format!("entry {index}: {err}"),
        })?;

        let Some(relative) = entry.name().strip_prefix(DIST_PREFIX) else {
            continue;
        };
        let relative = safe_relative_path(relative, entry.name())?;
        let target = dest.join(&relative);

        if entry.is_dir() {
            create_dir(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                create_dir(parent)?;
            }
            let mut out = fs::File::create(&target).map_err(|source| FetchError::Filesystem {
                path: target.clone(),
                source,
            })?;
            io::copy(&mut entry, &mut out).map_err(|source| FetchError::Filesystem {
                path: target.clone(),
                source,
            })?;
        }
    }

    Ok(())
}

fn create_dir(path: &Path) -> Result<(), FetchError> {
    fs::create_dir_all(path).map_err(|source| FetchError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate that a stripped entry path stays below the destination.
fn safe_relative_path(relative: &str, entry_name: &str) -> Result<PathBuf, FetchError> {
    let candidate = Path::new(relative);
    for component in candidate.components() {
        if matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        ) {
            return Err(FetchError::Archive {
                detail: format!("entry '{entry_name}' escapes the destination directory"),
            });
        }
    }
    Ok(candidate.to_path_buf())
}
