use std::fmt;
use std::str::FromStr;

/// Container/codec an exported sprite stream is written in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PCM WAV (written directly, never transcoded).
    Wav,
    /// Ogg Vorbis.
    Ogg,
    /// MPEG-1 Layer III.
    Mp3,
    /// AAC in an MPEG-4 audio container.
    M4a,
    /// Dolby AC-3.
    Ac3,
    /// Opus in an Ogg container.
    Opus,
}

impl OutputFormat {
    /// Every supported format, in CLI listing order.
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Wav,
        OutputFormat::Ogg,
        OutputFormat::Mp3,
        OutputFormat::M4a,
        OutputFormat::Ac3,
        OutputFormat::Opus,
    ];

    /// File extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Wav => "wav",
            OutputFormat::Ogg => "ogg",
            OutputFormat::Mp3 => "mp3",
            OutputFormat::M4a => "m4a",
            OutputFormat::Ac3 => "ac3",
            OutputFormat::Opus => "opus",
        }
    }

    /// Return `true` for formats that need a transcoder.
    pub fn is_compressed(self) -> bool {
        self != OutputFormat::Wav
    }

    /// `ffmpeg` output arguments (muxer and codec) for this format.
    pub(crate) fn ffmpeg_args(self, bitrate_kbps: u32) -> Vec<String> {
        let bitrate = format!("{bitrate_kbps}k");
        let (muxer, codec) = match self {
            OutputFormat::Wav => return vec!["-f".into(), "wav".into()],
            OutputFormat::Ogg => ("ogg", "libvorbis"),
            OutputFormat::Mp3 => ("mp3", "libmp3lame"),
            OutputFormat::M4a => ("ipod", "aac"),
            OutputFormat::Ac3 => ("ac3", "ac3"),
            OutputFormat::Opus => ("opus", "libopus"),
        };
        let mut args = vec![
            "-c:a".to_owned(),
            codec.to_owned(),
            "-b:a".to_owned(),
            bitrate,
        ];
        if self == OutputFormat::Opus {
            // libopus only accepts 8/12/16/24/48 kHz.
            args.extend(["-ar".to_owned(), "48000".to_owned()]);
        }
        args.extend(["-f".to_owned(), muxer.to_owned()]);
        args
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('.').to_ascii_lowercase();
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.extension() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.extension()).collect();
                format!(
                    "unknown export format '{s}' (expected one of: {})",
                    known.join(", ")
                )
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/format.rs"]
mod tests;
