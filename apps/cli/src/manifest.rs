//! Manifest input: a JSON array of enum declarations.
//!
//! ```json
//! [
//!   { "type_name": "Status", "repr": "string", "values": ["on", "off"], "raw_annotations": ["@marshal"] },
//!   { "type_name": "Number", "comments": ["// @marshal @sql", "// ENUM(one, two, three)"] }
//! ]
//! ```

use crate::error::CliError;
use enumgen_core::{EnumRepr, EnumSpec};
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Manifest path that means standard input.
pub const STDIN: &str = "-";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    pub type_name: String,
    #[serde(default)]
    pub repr: EnumRepr,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub raw_annotations: Vec<String>,
    /// Comment block above the declaration; directives and an `ENUM(...)` marker are read
    /// from it.
    #[serde(default)]
    pub comments: Vec<String>,
}

impl From<ManifestEntry> for EnumSpec {
    /// Comment directives come first, explicit `raw_annotations` after them. Explicit
    /// `values` replace the `ENUM(...)` marker.
    fn from(entry: ManifestEntry) -> Self {
        let mut spec = Self::from_comments(entry.type_name, entry.repr, &entry.comments);
        if !entry.values.is_empty() {
            spec.values = entry.values;
        }
        spec.with_annotations(entry.raw_annotations)
    }
}

/// Reads and decodes a manifest from `path`, or from stdin when `path` is `-`.
pub fn load_manifest(path: &Path) -> Result<Vec<EnumSpec>, CliError> {
    let read_err = |source| CliError::ManifestRead { path: path.to_path_buf(), source };

    let text = if path.as_os_str() == STDIN {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        buf
    } else {
        fs::read_to_string(path).map_err(read_err)?
    };

    let specs = parse_manifest(&text)
        .map_err(|source| CliError::ManifestFormat { path: path.to_path_buf(), source })?;

    debug!(path = %path.display(), types = specs.len(), "Loaded manifest");
    Ok(specs)
}

pub fn parse_manifest(text: &str) -> Result<Vec<EnumSpec>, serde_json::Error> {
    let entries: Vec<ManifestEntry> = serde_json::from_str(text)?;
    Ok(entries.into_iter().map(EnumSpec::from).collect())
}
