use std::io::{Cursor, Seek, Write};
use std::path::Path;

use crate::encode::ensure_parent_dir;
use crate::foundation::core::AudioFormat;
use crate::foundation::error::EncodeError;

/// Write interleaved integer samples as a PCM WAV file at `dest`.
pub fn encode_wav(samples: &[i32], format: AudioFormat, dest: &Path) -> Result<(), EncodeError> {
    let fail = |detail: String| EncodeError::WriteFailed {
        path: dest.to_path_buf(),
        detail,
    };

    ensure_parent_dir(dest).map_err(|e| fail(e.to_string()))?;
    let file = std::fs::File::create(dest).map_err(|e| fail(e.to_string()))?;
    write_samples(std::io::BufWriter::new(file), samples, format).map_err(|e| fail(e.to_string()))?;

    tracing::debug!(path = %dest.display(), samples = samples.len(), "wrote wav");
    Ok(())
}

/// Encode interleaved integer samples as an in-memory PCM WAV image.
pub fn encode_wav_bytes(samples: &[i32], format: AudioFormat) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Vec::with_capacity(44 + samples.len() * usize::from(format.bit_depth).div_ceil(8));
    write_samples(Cursor::new(&mut buf), samples, format).map_err(|e| {
        EncodeError::WriteFailed {
            path: "<memory>".into(),
            detail: e.to_string(),
        }
    })?;
    Ok(buf)
}

fn wav_spec(format: AudioFormat) -> hound::WavSpec {
    hound::WavSpec {
        channels: format.channels,
        sample_rate: format.sample_rate,
        bits_per_sample: format.bit_depth,
        sample_format: hound::SampleFormat::Int,
    }
}

fn write_samples<W: Write + Seek>(
    writer: W,
    samples: &[i32],
    format: AudioFormat,
) -> hound::Result<()> {
    let mut wav = hound::WavWriter::new(writer, wav_spec(format))?;
    // Fails with `TooWide` if a sample does not fit `bit_depth`.
    for &s in samples {
        wav.write_sample(s)?;
    }
    wav.finalize()
}

#[cfg(test)]
#[path = "../../tests/unit/encode/wav.rs"]
mod tests;
