use std::path::PathBuf;

/// Convenience result type used across audiosprite.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Top-level error taxonomy used by the sprite APIs.
///
/// Every variant is fatal to a run: there is no partial-success mode.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// An input could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A clip could not be brought to the reference sample rate.
    #[error("reconcile error: {0}")]
    Reconcile(#[from] ReconcileError),

    /// The clip sequence violated an assembly invariant.
    #[error("assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    /// Writing or transcoding an output stream failed.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Invalid user-provided options or inputs.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing the manifest.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpriteError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Failures of the decode capability.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The path could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    NotFound {
        /// Offending input path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a well-formed, recognized audio container.
    #[error("'{}' is not a valid audio container: {detail}", path.display())]
    InvalidContainer {
        /// Offending input path.
        path: PathBuf,
        /// Decoder diagnostic.
        detail: String,
    },

    /// The container is valid but uses an encoding the decoder cannot read.
    #[error("'{}' uses an unsupported encoding: {detail}", path.display())]
    UnsupportedEncoding {
        /// Offending input path.
        path: PathBuf,
        /// Decoder diagnostic.
        detail: String,
    },
}

impl DecodeError {
    /// Path of the input that failed to decode.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path, .. }
            | Self::InvalidContainer { path, .. }
            | Self::UnsupportedEncoding { path, .. } => path,
        }
    }
}

/// Failures while reconciling a clip to the reference sample rate.
#[derive(thiserror::Error, Debug)]
pub enum ReconcileError {
    /// A resample was required but no resampler is configured.
    #[error("clip '{name}' is {from} Hz but the sprite is {to} Hz and no resampler is configured")]
    ResampleUnavailable {
        /// Logical clip name.
        name: String,
        /// Clip sample rate.
        from: u32,
        /// Reference sample rate.
        to: u32,
    },

    /// The resample capability (or the re-decode of its output) failed.
    #[error("resampling clip '{name}' failed: {detail}")]
    ResampleFailed {
        /// Logical clip name.
        name: String,
        /// Capability diagnostic.
        detail: String,
    },
}

/// Violations of the sprite assembly invariants.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// Clip sample rate differs from the reference rate.
    #[error("clip '{name}' has sample rate {found} Hz, expected {expected} Hz")]
    RateMismatch {
        /// Logical clip name.
        name: String,
        /// Reference sample rate.
        expected: u32,
        /// Clip sample rate.
        found: u32,
    },

    /// Clip channel count differs from the reference layout.
    #[error("clip '{name}' has {found} channel(s), expected {expected}")]
    ChannelMismatch {
        /// Logical clip name.
        name: String,
        /// Reference channel count.
        expected: u16,
        /// Clip channel count.
        found: u16,
    },

    /// Clip bit depth differs from the reference output bit depth.
    #[error("clip '{name}' is {found}-bit, expected {expected}-bit")]
    BitDepthMismatch {
        /// Logical clip name.
        name: String,
        /// Reference bit depth.
        expected: u16,
        /// Clip bit depth.
        found: u16,
    },

    /// Interleaved sample count is not a whole number of frames.
    #[error("clip '{name}' has {samples} samples, not divisible by {channels} channel(s)")]
    MalformedBuffer {
        /// Logical clip name.
        name: String,
        /// Interleaved sample count.
        samples: usize,
        /// Channel count.
        channels: u16,
    },

    /// Two inputs map to the same timeline key.
    #[error("duplicate clip name '{name}'")]
    DuplicateKey {
        /// Logical clip name.
        name: String,
    },

    /// Nothing to assemble.
    #[error("no input clips")]
    NoClips,
}

/// Failures of the encode/transcode capability.
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    /// Writing the lossless stream failed.
    #[error("failed to write '{}': {detail}", path.display())]
    WriteFailed {
        /// Destination path.
        path: PathBuf,
        /// Writer diagnostic.
        detail: String,
    },

    /// The external transcoder failed.
    #[error("transcode failed: {0}")]
    TranscodeFailed(String),
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
