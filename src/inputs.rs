use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::foundation::error::{AssemblyError, SpriteError, SpriteResult};

/// Expand input patterns into an ordered file list.
///
/// Patterns are processed in the given order; the matches of one pattern are sorted. A pattern
/// that matches nothing is an error, unless it names an existing file literally (for file names
/// containing glob metacharacters).
pub fn expand_inputs<S: AsRef<str>>(patterns: &[S]) -> SpriteResult<Vec<PathBuf>> {
    let mut out = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let matches = glob::glob(pattern).map_err(|e| {
            SpriteError::validation(format!("invalid pattern '{pattern}': {e}"))
        })?;

        let before = out.len();
        for entry in matches {
            let path = entry.map_err(|e| {
                SpriteError::validation(format!("cannot read match of '{pattern}': {e}"))
            })?;
            out.push(path);
        }
        if out.len() == before {
            let literal = Path::new(pattern);
            if !literal.is_file() {
                return Err(SpriteError::validation(format!(
                    "no files matched pattern: {pattern}"
                )));
            }
            out.push(literal.to_path_buf());
        }
    }
    if out.is_empty() {
        return Err(AssemblyError::NoClips.into());
    }
    reject_duplicate_inputs(&out)?;
    Ok(out)
}

/// Fail if the same file appears twice in `inputs`.
pub fn reject_duplicate_inputs(inputs: &[PathBuf]) -> SpriteResult<()> {
    let mut seen = HashSet::with_capacity(inputs.len());
    for path in inputs {
        let key = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
        if !seen.insert(key) {
            return Err(SpriteError::validation(format!(
                "input '{}' is listed more than once",
                path.display()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/inputs.rs"]
mod tests;
