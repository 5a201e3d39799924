use std::collections::BTreeSet;

use crate::foundation::core::Clip;

/// Clips that should be flagged `loop: true` in the timeline.
///
/// Entries are base file names (`attack.wav`), compared exactly against each clip's file name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoopSet {
    names: BTreeSet<String>,
}

impl LoopSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list. Entries are trimmed; empty entries are ignored.
    pub fn parse(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Return `true` if `clip` is a loop member.
    pub fn contains(&self, clip: &Clip) -> bool {
        self.names.contains(&clip.file_name)
    }

    /// Return `true` if no loops were requested.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of requested names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Requested names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for LoopSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
