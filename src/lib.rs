//! Audio sprite builder.
//!
//! Concatenates short clips into one PCM stream and records where each clip starts and ends, so
//! a player can seek into a single file instead of loading many.
//!
//! The build runs in four stages:
//! 1. decode every input into integer PCM ([`Decoder`]),
//! 2. bring mismatched sample rates to the first clip's rate ([`RateReconciler`]),
//! 3. fold the clips into one buffer plus a timeline ([`SpriteAssembler`]),
//! 4. write the lossless sprite, optional compressed exports ([`Transcoder`]) and the JSON
//!    manifest ([`SpriteManifest`]).
//!
//! [`SpriteBuilder`] wires these together:
//!
//! ```no_run
//! use audiosprite::{LinearResampler, SpriteBuilder, SpriteOpts, WavDecoder};
//!
//! let opts = SpriteOpts::new(vec!["a.wav".into(), "b.wav".into()], "out/sfx");
//! let out = SpriteBuilder::new(WavDecoder::new())
//!     .with_resampler(LinearResampler::new())
//!     .build(&opts)?;
//! println!("{}", out.manifest_path.display());
//! # Ok::<(), audiosprite::SpriteError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Input decoding.
pub mod decode;
/// Sprite and export encoding.
pub mod encode;
mod foundation;
/// Command-line input expansion.
pub mod inputs;
/// The end-to-end build.
pub mod pipeline;
/// Sample-rate reconciliation.
pub mod reconcile;
/// Assembly and timeline.
pub mod sprite;

pub use decode::Decoder;
pub use decode::wav::WavDecoder;
pub use encode::ffmpeg::{FfmpegTranscoder, is_ffmpeg_on_path};
pub use encode::format::OutputFormat;
pub use encode::transcode::Transcoder;
pub use encode::wav::encode_wav;
pub use foundation::core::{AudioFormat, Clip, clip_name};
pub use foundation::error::{
    AssemblyError, DecodeError, EncodeError, ReconcileError, SpriteError, SpriteResult,
};
pub use inputs::expand_inputs;
pub use pipeline::{SpriteBuilder, SpriteOpts, SpriteOutput};
pub use reconcile::ffmpeg::FfmpegResampler;
pub use reconcile::linear::LinearResampler;
pub use reconcile::{RateReconciler, Resampler};
pub use sprite::assembler::{Assembly, SpriteAssembler, assemble};
pub use sprite::loops::LoopSet;
pub use sprite::timeline::{SpriteManifest, TimelineEntry, TimelineRecord, build_manifest};
