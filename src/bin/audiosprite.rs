use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use audiosprite::{
    Decoder as _, FfmpegResampler, FfmpegTranscoder, LinearResampler, LoopSet, OutputFormat,
    SpriteBuilder, SpriteOpts, WavDecoder,
};

#[derive(Parser, Debug)]
#[command(name = "audiosprite", version, about = "Pack audio clips into a single sprite")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a sprite and its JSON manifest.
    Build(BuildArgs),
    /// Print the PCM format of each input.
    Probe(ProbeArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Output base path; extensions are appended (`out/sfx` -> `out/sfx.wav`, `out/sfx.json`).
    #[arg(short, long)]
    out: PathBuf,

    /// Comma-separated base file names of clips to flag as looping (`music.wav`).
    #[arg(long, default_value = "")]
    loops: String,

    /// Comma-separated export formats, in manifest order.
    #[arg(long, value_delimiter = ',', default_value = "wav")]
    export: Vec<OutputFormat>,

    /// How to bring mismatched sample rates to the first clip's rate.
    #[arg(long, value_enum, default_value_t = ResamplerChoice::Ffmpeg)]
    resampler: ResamplerChoice,

    /// Bitrate for compressed exports, in kbit/s.
    #[arg(long, default_value_t = audiosprite::encode::ffmpeg::DEFAULT_BITRATE_KBPS)]
    bitrate: u32,

    /// Fail instead of replacing existing output files.
    #[arg(long)]
    keep_existing: bool,

    /// Input files or glob patterns, in sprite order.
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(Parser, Debug)]
struct ProbeArgs {
    /// Input files or glob patterns.
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ResamplerChoice {
    /// Resample through the system `ffmpeg` (falls back to `linear` when missing).
    Ffmpeg,
    /// Built-in linear interpolation.
    Linear,
    /// Reject clips whose rate differs from the first clip.
    None,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Probe(args) => cmd_probe(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let inputs = audiosprite::expand_inputs(&args.inputs).context("resolve inputs")?;

    let mut opts = SpriteOpts::new(inputs, args.out);
    opts.loops = LoopSet::parse(&args.loops);
    opts.formats = args.export;
    opts.overwrite = !args.keep_existing;

    let have_ffmpeg = audiosprite::is_ffmpeg_on_path();
    let mut builder = SpriteBuilder::new(WavDecoder::new());
    builder = match args.resampler {
        ResamplerChoice::Ffmpeg if have_ffmpeg => builder.with_resampler(FfmpegResampler::new()),
        ResamplerChoice::Ffmpeg => {
            tracing::warn!("ffmpeg not found on PATH; using the linear resampler");
            builder.with_resampler(LinearResampler::new())
        }
        ResamplerChoice::Linear => builder.with_resampler(LinearResampler::new()),
        ResamplerChoice::None => builder,
    };
    if opts.formats.iter().any(|f| f.is_compressed()) {
        anyhow::ensure!(
            have_ffmpeg,
            "compressed exports require `ffmpeg` on PATH (requested: {})",
            opts.formats
                .iter()
                .filter(|f| f.is_compressed())
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        builder = builder.with_transcoder(FfmpegTranscoder {
            bitrate_kbps: args.bitrate,
            ..FfmpegTranscoder::default()
        });
    }

    let out = builder
        .build(&opts)
        .with_context(|| format!("build sprite '{}'", opts.out_base.display()))?;

    for path in &out.outputs {
        eprintln!("wrote {}", path.display());
    }
    eprintln!("wrote {}", out.manifest_path.display());
    Ok(())
}

fn cmd_probe(args: ProbeArgs) -> anyhow::Result<()> {
    let inputs = audiosprite::expand_inputs(&args.inputs).context("resolve inputs")?;
    let decoder = WavDecoder::new();
    for path in &inputs {
        let clip = decoder
            .decode(path)
            .with_context(|| format!("probe '{}'", path.display()))?;
        let f = clip.format;
        let frames = clip
            .frames()
            .map_or_else(|| "misaligned".to_owned(), |n| n.to_string());
        println!(
            "{}\t{} Hz\t{} ch\t{}-bit\t{} frames\t{:.3} s",
            clip.name,
            f.sample_rate,
            f.channels,
            f.bit_depth,
            frames,
            clip.duration_secs()
        );
    }
    Ok(())
}
