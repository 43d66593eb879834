//! Frontend template descriptor loading.
//!
//! The templates file is a YAML sequence of mappings:
//!
//! ```yaml
//! - path: "app-a"
//!   repository: "https://example.com/org/app-a"
//!   version: "v1.2.3"
//! ```
//!
//! Mappings missing any of the three fields are dropped, not rejected.
//! This leniency is deliberate: a half-written entry disables itself
//! instead of breaking everyone else's build.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::FetchError;

/// One configured bundle: where to install it, where to fetch it from,
/// and which release tag to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// Installation path relative to `<root>/cmd/dashboard/`.
    pub path: String,
    /// Release repository base URL.
    pub repository: String,
    /// Release tag embedded into the download URL.
    pub version: String,
}

#[derive(Debug, Deserialize)]
struct RawTemplate {
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    repository: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

impl RawTemplate {
    fn into_descriptor(self) -> Option<TemplateDescriptor> {
        Some(TemplateDescriptor {
            path: self.path?,
            repository: self.repository?,
            version: self.version?,
        })
    }
}

/// Load the template descriptors from `path`.
///
/// An empty or null document yields an empty list (the run becomes a
/// no-op). A missing file and malformed YAML are distinct errors so the
/// caller can report them separately.
pub fn load_templates(path: &Path) -> Result<Vec<TemplateDescriptor>, FetchError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(FetchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => {
            return Err(FetchError::Filesystem {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    let parsed: Option<Vec<RawTemplate>> =
        serde_yaml::from_str(&raw).map_err(|source| FetchError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    let raw_templates = parsed.unwrap_or_default();
    let total = raw_templates.len();
    let templates: Vec<TemplateDescriptor> = raw_templates
        .into_iter()
        .filter_map(RawTemplate::into_descriptor)
        .collect();

    let skipped = total - templates.len();
    if skipped > 0 {
        println!("skipping {skipped} template(s) with missing fields");
    }

    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_templates(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write templates");
        file
    }

    #[test]
    fn loads_well_formed_entries_in_order() {
        let file = write_templates(
            r#"
- path: "app-a"
  repository: "https://example.com/org/app-a"
  version: "v1.2.3"
- path: "app-b"
  repository: "https://example.com/org/app-b"
  version: "v2.0.0"
"#,
        );

        let templates = load_templates(file.path()).expect("load");
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].path, "app-a");
        assert_eq!(templates[0].version, "v1.2.3");
        assert_eq!(templates[1].path, "app-b");
        assert_eq!(templates[1].repository, "https://example.com/org/app-b");
    }

    #[test]
    fn drops_entries_with_missing_fields() {
        let file = write_templates(
            r#"
- path: "keep-one"
  repository: "https://example.com/org/one"
  version: "v1"
- path: "no-version"
  repository: "https://example.com/org/broken"
- repository: "https://example.com/org/no-path"
  version: "v3"
- path: "keep-two"
  repository: "https://example.com/org/two"
  version: "v2"
"#,
        );

        let templates = load_templates(file.path()).expect("load");
        let paths: Vec<&str> = templates.iter().map(|t| t.path.as_str()).collect();
        assert_eq!(paths, ["keep-one", "keep-two"]);
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("frontend-templates.yaml");

        let err = load_templates(&missing).expect_err("should fail");
        assert!(matches!(err, FetchError::ConfigNotFound { .. }));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let file = write_templates("- path: [unclosed\n  repository: {{");

        let err = load_templates(file.path()).expect_err("should fail");
        assert!(matches!(err, FetchError::ConfigParse { .. }));
    }

    #[test]
    fn empty_file_yields_no_templates() {
        let file = write_templates("");
        let templates = load_templates(file.path()).expect("load");
        assert!(templates.is_empty());
    }

    #[test]
    fn null_document_yields_no_templates() {
        let file = write_templates("null\n");
        let templates = load_templates(file.path()).expect("load");
        assert!(templates.is_empty());
    }

    #[test]
    fn extra_keys_are_ignored() {
        let file = write_templates(
            r#"
- path: "app"
  repository: "https://example.com/org/app"
  version: "v1"
  comment: "not part of the schema"
"#,
        );

        let templates = load_templates(file.path()).expect("load");
        assert_eq!(templates.len(), 1);
    }
}
