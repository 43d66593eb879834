//! Release bundle download.
//!
//! One blocking GET per descriptor, default client settings. The whole
//! archive is buffered in memory before extraction starts; frontend
//! bundles are small enough that streaming to disk buys nothing.

use crate::error::FetchError;

/// Build the release download URL for a repository and version tag.
pub fn dist_url(repository: &str, version: &str) -> String {
    format!("{repository}/releases/download/{version}/dist.zip")
}

/// Download `dist.zip` for one release and return the raw archive bytes.
///
/// Any transport failure or non-success status is fatal for the run:
/// there is no retry and no per-descriptor isolation.
pub fn download_dist(repository: &str, version: &str) -> Result<Vec<u8>, FetchError> {
    let url = dist_url(repository, version);

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(&url)
        .send()
        .map_err(|err| FetchError::Download {
            url: url.clone(),
            detail: err.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Download {
            url,
            detail: format!("status code {status}"),
        });
    }

    let body = response.bytes().map_err(|err| FetchError::Download {
        url,
        detail: format!("reading response body: {err}"),
    })?;

    Ok(body.to_vec())
}
