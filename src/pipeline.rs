//! End-to-end sprite build: decode, reconcile, assemble, encode, export the manifest.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::decode::Decoder;
use crate::encode::format::OutputFormat;
use crate::encode::transcode::Transcoder;
use crate::encode::wav::encode_wav;
use crate::foundation::core::AudioFormat;
use crate::foundation::error::{AssemblyError, EncodeError, SpriteError, SpriteResult};
use crate::inputs::reject_duplicate_inputs;
use crate::reconcile::{RateReconciler, Resampler};
use crate::sprite::assembler::{Assembly, SpriteAssembler};
use crate::sprite::loops::LoopSet;
use crate::sprite::timeline::{SpriteManifest, build_manifest};

/// Options for one sprite build.
#[derive(Clone, Debug)]
pub struct SpriteOpts {
    /// Input files, in sprite order.
    pub inputs: Vec<PathBuf>,
    /// Output base path without extension (`out/sfx` -> `out/sfx.wav`, `out/sfx.json`).
    pub out_base: PathBuf,
    /// Clips flagged as looping.
    pub loops: LoopSet,
    /// Export formats, in manifest `resources` order.
    pub formats: Vec<OutputFormat>,
    /// Replace existing output files.
    pub overwrite: bool,
}

impl SpriteOpts {
    /// Create options exporting a WAV sprite at `out_base`.
    pub fn new(inputs: Vec<PathBuf>, out_base: impl Into<PathBuf>) -> Self {
        Self {
            inputs,
            out_base: out_base.into(),
            loops: LoopSet::new(),
            formats: vec![OutputFormat::Wav],
            overwrite: true,
        }
    }

    /// Path of the exported stream in `format`.
    pub fn output_path(&self, format: OutputFormat) -> PathBuf {
        with_suffix(&self.out_base, format.extension())
    }

    /// Path of the JSON manifest.
    pub fn manifest_path(&self) -> PathBuf {
        with_suffix(&self.out_base, "json")
    }

    fn validate(&self) -> SpriteResult<()> {
        if self.out_base.file_name().is_none() {
            return Err(SpriteError::validation(format!(
                "output base '{}' has no file name",
                self.out_base.display()
            )));
        }
        if self.formats.is_empty() {
            return Err(SpriteError::validation("at least one export format is required"));
        }
        for (i, f) in self.formats.iter().enumerate() {
            if self.formats[..i].contains(f) {
                return Err(SpriteError::validation(format!(
                    "export format '{f}' is listed more than once"
                )));
            }
        }
        Ok(())
    }
}

fn with_suffix(base: &Path, ext: &str) -> PathBuf {
    let mut s = base.as_os_str().to_owned();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// Files and metadata produced by [`SpriteBuilder::build`].
#[derive(Clone, Debug)]
pub struct SpriteOutput {
    /// The exported manifest (also written to `manifest_path`).
    pub manifest: SpriteManifest,
    /// Manifest JSON file.
    pub manifest_path: PathBuf,
    /// Exported streams, in `resources` order.
    pub outputs: Vec<PathBuf>,
    /// Sprite PCM format.
    pub format: AudioFormat,
    /// Sprite length in frames.
    pub frames: u64,
}

/// Wires the decode, resample and transcode capabilities into a sprite build.
pub struct SpriteBuilder<'a> {
    decoder: Box<dyn Decoder + 'a>,
    resampler: Option<Box<dyn Resampler + 'a>>,
    transcoder: Option<Box<dyn Transcoder + 'a>>,
}

impl<'a> SpriteBuilder<'a> {
    /// Create a builder without resampling or transcoding support.
    pub fn new(decoder: impl Decoder + 'a) -> Self {
        Self {
            decoder: Box::new(decoder),
            resampler: None,
            transcoder: None,
        }
    }

    /// Enable resampling of clips whose rate differs from the first clip.
    pub fn with_resampler(mut self, resampler: impl Resampler + 'a) -> Self {
        self.resampler = Some(Box::new(resampler));
        self
    }

    /// Enable compressed exports.
    pub fn with_transcoder(mut self, transcoder: impl Transcoder + 'a) -> Self {
        self.transcoder = Some(Box::new(transcoder));
        self
    }

    /// Decode, reconcile and assemble `inputs` in order.
    ///
    /// Clips are folded one at a time; the first error aborts the run.
    #[tracing::instrument(skip_all, fields(inputs = inputs.len()))]
    pub fn assemble(&self, inputs: &[PathBuf], loops: &LoopSet) -> SpriteResult<Assembly> {
        if inputs.is_empty() {
            return Err(AssemblyError::NoClips.into());
        }
        reject_duplicate_inputs(inputs)?;
        warn_unmatched_loops(inputs, loops);

        let resampler = self.resampler.as_deref().map(|r| r as &dyn Resampler);
        let reconciler = RateReconciler::new(self.decoder.as_ref(), resampler);
        let mut asm = SpriteAssembler::new(loops);
        let mut reference_rate = None;
        for path in inputs {
            let clip = self.decoder.decode(path)?;
            let (clip, rate) = reconciler.reconcile(clip, reference_rate)?;
            reference_rate = Some(rate);
            asm.push(clip)?;
        }
        let assembly = asm.finish()?;

        tracing::info!(
            clips = assembly.timeline.len(),
            frames = assembly.frames,
            secs = assembly.duration_secs(),
            "assembled sprite"
        );
        Ok(assembly)
    }

    /// Build the sprite described by `opts` and write every output.
    ///
    /// Nothing is written before assembly succeeds, and on any later failure the files written by
    /// this call are removed again.
    #[tracing::instrument(skip_all, fields(out = %opts.out_base.display()))]
    pub fn build(&self, opts: &SpriteOpts) -> SpriteResult<SpriteOutput> {
        opts.validate()?;
        let transcoder = self.transcoder_for(&opts.formats)?;

        let wav_path = opts.output_path(OutputFormat::Wav);
        let manifest_path = opts.manifest_path();
        let planned: Vec<PathBuf> = opts
            .formats
            .iter()
            .map(|f| opts.output_path(*f))
            .chain([wav_path.clone(), manifest_path.clone()])
            .collect();

        let sources: HashSet<PathBuf> = opts.inputs.iter().map(|p| resolve_path(p)).collect();
        for p in &planned {
            if sources.contains(&resolve_path(p)) {
                return Err(SpriteError::validation(format!(
                    "output file '{}' is also an input",
                    p.display()
                )));
            }
        }
        if !opts.overwrite {
            for p in &planned {
                if p.exists() {
                    return Err(SpriteError::validation(format!(
                        "output file '{}' already exists",
                        p.display()
                    )));
                }
            }
        }

        let assembly = self.assemble(&opts.inputs, &opts.loops)?;

        let mut guard = OutputGuard::default();
        guard.track(wav_path.clone());
        encode_wav(&assembly.samples, assembly.format, &wav_path)?;

        let mut outputs = Vec::with_capacity(opts.formats.len());
        for &format in &opts.formats {
            let path = opts.output_path(format);
            if let Some(t) = transcoder.filter(|_| format.is_compressed()) {
                guard.track(path.clone());
                t.transcode(&wav_path, format, &path).map_err(|e| {
                    EncodeError::TranscodeFailed(format!("{format} '{}': {e:#}", path.display()))
                })?;
                tracing::info!(path = %path.display(), "transcoded");
            }
            outputs.push(path);
        }

        let resources = outputs
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        let manifest = build_manifest(&assembly.timeline, resources)?;
        guard.track(manifest_path.clone());
        manifest.write_json(&manifest_path)?;

        if !opts.formats.contains(&OutputFormat::Wav) {
            std::fs::remove_file(&wav_path).with_context(|| {
                format!("remove lossless intermediate '{}'", wav_path.display())
            })?;
        }
        guard.commit();

        Ok(SpriteOutput {
            manifest,
            manifest_path,
            outputs,
            format: assembly.format,
            frames: assembly.frames,
        })
    }

    fn transcoder_for(&self, formats: &[OutputFormat]) -> SpriteResult<Option<&dyn Transcoder>> {
        let compressed: Vec<String> = formats
            .iter()
            .filter(|f| f.is_compressed())
            .map(ToString::to_string)
            .collect();
        if compressed.is_empty() {
            return Ok(None);
        }
        match self.transcoder.as_deref() {
            Some(t) => Ok(Some(t as &dyn Transcoder)),
            None => Err(EncodeError::TranscodeFailed(format!(
                "no transcoder configured for {}",
                compressed.join(", ")
            ))
            .into()),
        }
    }
}

fn warn_unmatched_loops(inputs: &[PathBuf], loops: &LoopSet) {
    for name in loops.iter() {
        let hit = inputs
            .iter()
            .any(|p| p.file_name().and_then(|s| s.to_str()) == Some(name));
        if !hit {
            tracing::warn!(name, "loop entry matches no input");
        }
    }
}

/// Canonical form of `path`, resolving only the parent directory when the file does not exist yet.
fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(p) = std::fs::canonicalize(path) {
        return p;
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (std::fs::canonicalize(parent), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

/// Removes tracked output files on drop unless committed.
#[derive(Debug, Default)]
struct OutputGuard {
    paths: Vec<PathBuf>,
    committed: bool,
}

impl OutputGuard {
    fn track(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        for path in self.paths.iter().rev() {
            match std::fs::remove_file(path) {
                Ok(()) => tracing::debug!(path = %path.display(), "removed partial output"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to remove partial output")
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
