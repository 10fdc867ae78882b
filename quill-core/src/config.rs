//! The `docs/README.yaml` config document.
//!
//! The document is a flat YAML mapping. A fixed set of known keys is
//! extracted by exact name match; everything else is ignored. Values are
//! opaque [`serde_yaml::Value`]s passed through to the templates verbatim —
//! the loader never interprets them.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;

/// Description values extracted from the config document.
///
/// Every field is optional; an absent key simply leaves its README section
/// empty. Note the `builwith` key: the published config schema spells it
/// without the first `t`, so documents using the conventional `builtwith`
/// spelling are silently ignored. Exact-match behavior is preserved here —
/// likely an upstream schema defect, tracked in DESIGN.md.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadmeConfig {
    pub about: Option<Value>,
    pub builtwith: Option<Value>,
    pub features: Option<Value>,
    pub image_desc1: Option<Value>,
    pub image_desc2: Option<Value>,
    pub image_file1: Option<Value>,
    pub image_file2: Option<Value>,
    pub resources: Option<Value>,
    pub terraform: Option<Value>,
    pub prerequisites: Option<Value>,
    pub quickstart: Option<Value>,
    pub usage: Option<Value>,
}

impl ReadmeConfig {
    /// Extract the known keys from a parsed YAML mapping.
    pub fn from_mapping(map: &Mapping) -> Self {
        let get = |key: &str| map.get(Value::String(key.to_owned())).cloned();
        ReadmeConfig {
            about: get("about"),
            builtwith: get("builwith"), // sic — schema key is missing a `t`
            features: get("features"),
            image_desc1: get("imageDesc1"),
            image_desc2: get("imageDesc2"),
            image_file1: get("imageFile1"),
            image_file2: get("imageFile2"),
            resources: get("resources"),
            terraform: get("terraform"),
            prerequisites: get("prerequisites"),
            quickstart: get("quickstart"),
            usage: get("usage"),
        }
    }

    /// Load and parse the config document at `path`.
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Parse`] (with path + line context) on malformed YAML,
    /// and [`ConfigError::NotAMapping`] when the document root is anything
    /// other than a mapping.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let doc: Value = serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        match doc {
            Value::Mapping(map) => Ok(Self::from_mapping(&map)),
            _ => Err(ConfigError::NotAMapping {
                path: path.to_path_buf(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
