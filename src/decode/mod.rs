//! Decode capability.
//!
//! The sprite pipeline only depends on [`Decoder`]; [`wav::WavDecoder`] is the built-in implementation.

use std::path::Path;

use crate::foundation::core::Clip;
use crate::foundation::error::DecodeError;

/// RIFF/WAVE decoding via `hound`.
pub mod wav;

/// Capability that fully materializes one input file as a [`Clip`].
///
/// Implementations must return every sample (no partial reads): the assembler needs complete
/// buffers to compute offsets.
pub trait Decoder {
    /// Decode `path` into interleaved integer samples.
    fn decode(&self, path: &Path) -> Result<Clip, DecodeError>;
}

impl<D: Decoder + ?Sized> Decoder for &D {
    fn decode(&self, path: &Path) -> Result<Clip, DecodeError> {
        (**self).decode(path)
    }
}

impl<D: Decoder + ?Sized> Decoder for Box<D> {
    fn decode(&self, path: &Path) -> Result<Clip, DecodeError> {
        (**self).decode(path)
    }
}
