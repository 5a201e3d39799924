use std::collections::HashSet;

use crate::foundation::core::{AudioFormat, Clip};
use crate::foundation::error::AssemblyError;
use crate::sprite::loops::LoopSet;
use crate::sprite::timeline::{TimelineEntry, TimelineRecord};

/// Result of a completed assembly: the sprite PCM plus its timeline in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct Assembly {
    /// Interleaved output samples.
    pub samples: Vec<i32>,
    /// Reference format (fixed by the first clip).
    pub format: AudioFormat,
    /// Total frame count of `samples`.
    pub frames: u64,
    /// One record per clip, in the order the clips were pushed.
    pub timeline: Vec<TimelineRecord>,
}

impl Assembly {
    /// Total sprite length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.format.frames_to_secs(self.frames)
    }

    /// Look up a clip's region by logical name.
    pub fn entry(&self, name: &str) -> Option<&TimelineEntry> {
        self.timeline
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.entry)
    }
}

/// Fold state owned by one assembly run. Append-only.
#[derive(Debug, Default)]
struct AssemblyState {
    samples: Vec<i32>,
    reference: Option<AudioFormat>,
    /// Frames appended so far.
    cursor: u64,
    timeline: Vec<TimelineRecord>,
    keys: HashSet<String>,
}

/// Concatenates clips into one buffer and records each clip's `[start, end)` region.
///
/// Clips are processed strictly in push order. Offsets are derived from the absolute frame cursor,
/// never from summed durations, so there is no floating-point drift across many clips.
#[derive(Debug)]
pub struct SpriteAssembler<'a> {
    loops: &'a LoopSet,
    state: AssemblyState,
}

impl<'a> SpriteAssembler<'a> {
    /// Start an empty assembly.
    pub fn new(loops: &'a LoopSet) -> Self {
        Self {
            loops,
            state: AssemblyState::default(),
        }
    }

    /// Format fixed by the first accepted clip.
    pub fn reference_format(&self) -> Option<AudioFormat> {
        self.state.reference
    }

    /// Frames appended so far.
    pub fn cursor_frames(&self) -> u64 {
        self.state.cursor
    }

    /// Number of clips accepted so far.
    pub fn len(&self) -> usize {
        self.state.timeline.len()
    }

    /// Return `true` if no clip has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.state.timeline.is_empty()
    }

    /// Append `clip` and record its region.
    ///
    /// On error the state is left untouched.
    pub fn push(&mut self, clip: Clip) -> Result<&TimelineEntry, AssemblyError> {
        let reference = self.check(&clip)?;
        let channels = u64::from(reference.channels);
        let frames = clip.samples.len() as u64 / channels;
        let looping = self.loops.contains(&clip);

        let start = reference.frames_to_secs(self.state.cursor);
        if self.state.samples.is_empty() {
            self.state.samples = clip.samples;
        } else {
            let mut samples = clip.samples;
            self.state.samples.append(&mut samples);
        }
        self.state.cursor += frames;
        let end = reference.frames_to_secs(self.state.cursor);

        let entry = TimelineEntry {
            start,
            end,
            looping,
        };
        tracing::debug!(
            clip = %clip.name,
            start,
            end,
            looping = entry.looping,
            "appended clip"
        );

        self.state.reference = Some(reference);
        self.state.keys.insert(clip.name.clone());
        let idx = self.state.timeline.len();
        self.state.timeline.push(TimelineRecord {
            name: clip.name,
            entry,
        });
        Ok(&self.state.timeline[idx].entry)
    }

    /// Validate `clip` against the reference format; returns the format to use.
    fn check(&self, clip: &Clip) -> Result<AudioFormat, AssemblyError> {
        let reference = match self.state.reference {
            None => clip.format,
            Some(r) => {
                if clip.format.sample_rate != r.sample_rate {
                    return Err(AssemblyError::RateMismatch {
                        name: clip.name.clone(),
                        expected: r.sample_rate,
                        found: clip.format.sample_rate,
                    });
                }
                if clip.format.channels != r.channels {
                    return Err(AssemblyError::ChannelMismatch {
                        name: clip.name.clone(),
                        expected: r.channels,
                        found: clip.format.channels,
                    });
                }
                if clip.format.bit_depth != r.bit_depth {
                    return Err(AssemblyError::BitDepthMismatch {
                        name: clip.name.clone(),
                        expected: r.bit_depth,
                        found: clip.format.bit_depth,
                    });
                }
                r
            }
        };

        if clip.frames().is_none() {
            return Err(AssemblyError::MalformedBuffer {
                name: clip.name.clone(),
                samples: clip.samples.len(),
                channels: clip.format.channels,
            });
        }
        if self.state.keys.contains(&clip.name) {
            return Err(AssemblyError::DuplicateKey {
                name: clip.name.clone(),
            });
        }
        Ok(reference)
    }

    /// Finish the run, handing over the output buffer and timeline.
    pub fn finish(self) -> Result<Assembly, AssemblyError> {
        let format = self.state.reference.ok_or(AssemblyError::NoClips)?;
        Ok(Assembly {
            samples: self.state.samples,
            format,
            frames: self.state.cursor,
            timeline: self.state.timeline,
        })
    }
}

/// Assemble `clips` in iteration order.
pub fn assemble<I>(clips: I, loops: &LoopSet) -> Result<Assembly, AssemblyError>
where
    I: IntoIterator<Item = Clip>,
{
    let mut asm = SpriteAssembler::new(loops);
    for clip in clips {
        asm.push(clip)?;
    }
    asm.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/assembler.rs"]
mod tests;
