use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::decode::Decoder;
use crate::foundation::core::{AudioFormat, Clip, clip_name};
use crate::foundation::error::DecodeError;

/// [`Decoder`] for integer PCM WAV files.
#[derive(Clone, Copy, Debug, Default)]
pub struct WavDecoder;

impl WavDecoder {
    /// Create a new WAV decoder.
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for WavDecoder {
    fn decode(&self, path: &Path) -> Result<Clip, DecodeError> {
        let file = File::open(path).map_err(|source| DecodeError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        decode_wav_reader(BufReader::new(file), path)
    }
}

/// Decode a WAV stream, attributing the clip (and any error) to `source`.
pub fn decode_wav_reader<R: Read>(reader: R, source: &Path) -> Result<Clip, DecodeError> {
    let mut wav = hound::WavReader::new(reader).map_err(|e| classify(source, e))?;
    let spec = wav.spec();

    if spec.sample_format != hound::SampleFormat::Int {
        return Err(DecodeError::UnsupportedEncoding {
            path: source.to_path_buf(),
            detail: format!(
                "{}-bit floating-point samples (integer PCM required)",
                spec.bits_per_sample
            ),
        });
    }
    let format = AudioFormat::new(spec.sample_rate, spec.channels, spec.bits_per_sample)
        .map_err(|e| invalid(source, e.to_string()))?;

    let samples = wav
        .samples::<i32>()
        .collect::<Result<Vec<i32>, _>>()
        .map_err(|e| classify(source, e))?;

    let name = clip_name(source).map_err(|e| invalid(source, e.to_string()))?;
    let file_name = source
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| name.clone());

    tracing::debug!(
        clip = %name,
        sample_rate = format.sample_rate,
        channels = format.channels,
        bit_depth = format.bit_depth,
        samples = samples.len(),
        "decoded wav"
    );

    Ok(Clip {
        name,
        file_name,
        source: source.to_path_buf(),
        samples,
        format,
    })
}

fn classify(path: &Path, err: hound::Error) -> DecodeError {
    match err {
        hound::Error::Unsupported => DecodeError::UnsupportedEncoding {
            path: path.to_path_buf(),
            detail: "unsupported wave format".to_owned(),
        },
        other => invalid(path, other.to_string()),
    }
}

fn invalid(path: &Path, detail: String) -> DecodeError {
    DecodeError::InvalidContainer {
        path: path.to_path_buf(),
        detail,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decode/wav.rs"]
mod tests;
