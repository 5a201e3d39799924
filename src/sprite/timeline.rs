use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{AssemblyError, SpriteError, SpriteResult};

/// One clip's region in the sprite, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineEntry {
    /// Inclusive region start.
    pub start: f64,
    /// Exclusive region end.
    pub end: f64,
    /// Whether playback should loop this region by default.
    #[serde(rename = "loop")]
    pub looping: bool,
}

impl TimelineEntry {
    /// Region length in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Timeline entry tagged with its clip name, in assembly order.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineRecord {
    /// Logical clip name.
    pub name: String,
    /// Clip region.
    pub entry: TimelineEntry,
}

/// Exported sprite description: output streams plus the named regions inside them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpriteManifest {
    /// Output stream identifiers, in export order.
    pub resources: Vec<String>,
    /// Clip name to region.
    pub spritemap: BTreeMap<String, TimelineEntry>,
}

/// Build the manifest from assembly records and output stream identifiers.
pub fn build_manifest(
    timeline: &[TimelineRecord],
    resources: Vec<String>,
) -> Result<SpriteManifest, AssemblyError> {
    if timeline.is_empty() {
        return Err(AssemblyError::NoClips);
    }
    let mut spritemap = BTreeMap::new();
    for rec in timeline {
        if spritemap.insert(rec.name.clone(), rec.entry).is_some() {
            return Err(AssemblyError::DuplicateKey {
                name: rec.name.clone(),
            });
        }
    }
    Ok(SpriteManifest {
        resources,
        spritemap,
    })
}

impl SpriteManifest {
    /// Serialize as pretty-printed JSON (two-space indent).
    pub fn to_json_pretty(&self) -> SpriteResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SpriteError::serde(e.to_string()))
    }

    /// Parse a manifest from JSON text.
    pub fn from_json_str(s: &str) -> SpriteResult<Self> {
        serde_json::from_str(s).map_err(|e| SpriteError::serde(e.to_string()))
    }

    /// Read a manifest JSON file.
    pub fn from_path(path: &Path) -> SpriteResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read manifest '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Write the manifest as pretty JSON to `path`.
    pub fn write_json(&self, path: &Path) -> SpriteResult<()> {
        crate::encode::ensure_parent_dir(path)?;
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        std::fs::write(path, json)
            .with_context(|| format!("write manifest '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/timeline.rs"]
mod tests;
