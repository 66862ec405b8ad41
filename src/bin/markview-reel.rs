use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use markview_reel as reel;

#[derive(Parser, Debug)]
#[command(name = "markview-reel", version, about = "Build the markview.app presentation video")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize one audio clip per transcript section.
    Voiceover(VoiceoverArgs),
    /// Print where each clip and slide sits on the timeline.
    Timeline(TimelineArgs),
    /// Print the composition, or one evaluated frame, as JSON.
    Dump(DumpArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct VoiceoverArgs {
    /// Markdown transcript.
    #[arg(long, default_value = reel::DEFAULT_TRANSCRIPT_PATH)]
    transcript: PathBuf,

    /// Directory receiving the clips and metadata.json.
    #[arg(long, default_value = reel::DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,

    /// ElevenLabs API key. Falls back to `.env.local`, then `.env`, in the working directory.
    #[arg(long, env = reel::API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Voice to synthesize with.
    #[arg(long, default_value = reel::DEFAULT_VOICE_ID)]
    voice_id: String,

    /// Parse and list the sections without calling the API.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Measure clip lengths from the audio files in this directory.
    #[arg(long)]
    audio_dir: Option<PathBuf>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Evaluate this frame instead of dumping the whole composition.
    #[arg(long)]
    frame: Option<u64>,

    /// Measure clip lengths from the audio files in this directory.
    #[arg(long)]
    audio_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Font file used for all text.
    #[arg(long)]
    font: PathBuf,

    /// Measure clip lengths from the audio files in this directory.
    #[arg(long)]
    audio_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Font file used for all text.
    #[arg(long)]
    font: PathBuf,

    /// Directory holding the voiceover clips.
    #[arg(long, default_value = reel::DEFAULT_OUTPUT_DIR)]
    audio_dir: PathBuf,

    /// Encode without the voiceover track.
    #[arg(long, default_value_t = false)]
    no_audio: bool,

    /// Overwrite output if it already exists.
    #[arg(long, default_value_t = true)]
    overwrite: bool,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames rendered per chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// First frame to render.
    #[arg(long)]
    start: Option<u64>,

    /// Frame after the last one to render.
    #[arg(long)]
    end: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.cmd {
        Command::Voiceover(args) => cmd_voiceover(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_voiceover(args: VoiceoverArgs) -> anyhow::Result<()> {
    let mut cfg = if args.dry_run {
        reel::VoiceoverConfig::for_dry_run()
    } else {
        let api_key = match args.api_key {
            Some(key) => Some(key),
            None => reel::VoiceoverConfig::key_from_env_files(&std::env::current_dir()?)?,
        };
        reel::VoiceoverConfig::new(api_key)?
    };
    cfg.voice_id = args.voice_id;
    cfg.transcript_path = args.transcript;
    cfg.output_dir = args.out_dir;

    let synth = reel::ElevenLabsSynthesizer::new(&cfg)?;
    let opts = reel::GenerateOpts {
        dry_run: args.dry_run,
        ..reel::GenerateOpts::default()
    };
    let report = reel::generate_voiceover(&cfg, &synth, opts)?;

    if args.dry_run {
        for s in &report.sections {
            println!(
                "{:<14} {:>4}s +{:<3}s {:>5} chars",
                s.name,
                s.start_secs,
                s.duration_secs,
                s.text.chars().count()
            );
        }
        println!(
            "{} sections, {} characters",
            report.sections.len(),
            report.total_chars
        );
        return Ok(());
    }

    eprintln!(
        "wrote {} of {} clips ({} characters), metadata at {}",
        report.written.len(),
        report.sections.len(),
        report.total_chars,
        report.metadata_path.display()
    );
    for (name, err) in &report.failed {
        eprintln!("skipped {name}: {err}");
    }
    Ok(())
}

fn schedule_for(audio_dir: Option<&Path>) -> anyhow::Result<reel::Schedule> {
    let durations: Vec<(String, f64)> = match audio_dir {
        Some(dir) => reel::probe_durations(dir),
        None => reel::VOICEOVER_DURATIONS
            .iter()
            .map(|&(name, secs)| (name.to_string(), secs))
            .collect(),
    };
    Ok(reel::Schedule::back_to_back(
        &durations,
        reel::Fps::new(30, 1)?,
        reel::AUDIO_GAP_SECS,
        reel::OUTRO_TAIL_SECS,
    )?)
}

fn composition_for(audio_dir: Option<&Path>) -> anyhow::Result<reel::Composition> {
    let schedule = schedule_for(audio_dir)?;
    Ok(reel::Composition::markview(&schedule)?)
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let schedule = schedule_for(args.audio_dir.as_deref())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    println!(
        "{:<14} {:>9} {:>9} {:>13}",
        "section", "audio at", "length", "slide frames"
    );
    for e in &schedule.entries {
        println!(
            "{:<14} {:>8.2}s {:>8.2}s {:>6}..{:<6}",
            e.name, e.audio_start_secs, e.audio_duration_secs, e.slide.start.0, e.slide.end.0
        );
    }
    println!("ends at frame {}", schedule.end_frame().0);
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let comp = composition_for(args.audio_dir.as_deref())?;
    match args.frame {
        Some(f) => {
            let eval = reel::Evaluator::eval_frame(&comp, reel::FrameIndex(f))?;
            println!("{}", serde_json::to_string_pretty(&eval)?);
        }
        None => println!("{}", comp.to_json_pretty()?),
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = composition_for(args.audio_dir.as_deref())?;
    let opts = reel::CpuRendererOpts::with_font_file(&args.font)?;
    let mut renderer = reel::CpuRenderer::new(&opts)?;
    let frame = reel::render_frame(&comp, reel::FrameIndex(args.frame), &mut renderer)?;
    frame.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let comp = composition_for(Some(&args.audio_dir))?;
    let range = reel::FrameRange::new(
        reel::FrameIndex(args.start.unwrap_or(0)),
        reel::FrameIndex(args.end.unwrap_or(comp.duration)),
    )?;
    let opts = reel::RenderToMp4Opts {
        range,
        audio_dir: (!args.no_audio).then(|| args.audio_dir.clone()),
        overwrite: args.overwrite,
        threading: reel::RenderThreading {
            parallel: args.parallel,
            chunk_size: args.chunk_size,
            threads: args.threads,
        },
    };

    let renderer_opts = reel::CpuRendererOpts::with_font_file(&args.font)?;

    let started = std::time::Instant::now();
    let stats = reel::render_to_mp4(&comp, &args.out, &opts, &renderer_opts)?;
    eprintln!(
        "wrote {} ({} frames in {:.1}s)",
        args.out.display(),
        stats.frames_rendered,
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
