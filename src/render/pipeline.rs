use std::path::PathBuf;

use rayon::prelude::*;

use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{AudioInputConfig, FrameSink, SinkConfig};
use crate::eval::evaluator::Evaluator;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::FrameRGBA;
use crate::render::cpu::{CpuRenderer, CpuRendererOpts};
use crate::scene::composition::Composition;

/// Evaluate and rasterize a single frame.
///
/// Returns **premultiplied** RGBA8 pixels.
#[tracing::instrument(skip(comp, renderer))]
pub fn render_frame(
    comp: &Composition,
    frame: FrameIndex,
    renderer: &mut CpuRenderer,
) -> ReelResult<FrameRGBA> {
    let eval = Evaluator::eval_frame(comp, frame)?;
    renderer.render(comp.canvas, &eval)
}

/// Threading and chunking controls for multi-frame rendering.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Render chunks on a rayon pool when `true`.
    pub parallel: bool,
    /// Frames per chunk; each chunk is pushed to the sink before the next starts.
    pub chunk_size: usize,
    /// Worker thread count; rayon's default when `None`.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Counters returned by [`render_range`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames requested.
    pub frames_total: u64,
    /// Frames rasterized and pushed to the sink.
    pub frames_rendered: u64,
}

/// Render `range` into `sink`, in timeline order.
///
/// In parallel mode every rayon worker owns its own [`CpuRenderer`]; frames of a chunk are
/// collected and pushed in order once the whole chunk is done.
#[tracing::instrument(skip(comp, renderer_opts, sink, audio))]
pub fn render_range(
    comp: &Composition,
    range: FrameRange,
    renderer_opts: &CpuRendererOpts,
    threading: &RenderThreading,
    sink: &mut dyn FrameSink,
    audio: Option<AudioInputConfig>,
) -> ReelResult<RenderStats> {
    comp.validate()?;
    check_range(comp, range)?;

    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };
    let mut renderer = CpuRenderer::new(renderer_opts)?;

    sink.begin(SinkConfig {
        width: comp.canvas.width,
        height: comp.canvas.height,
        fps: comp.fps,
        audio,
    })?;

    let mut stats = RenderStats::default();
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let frames = match pool.as_ref() {
            Some(pool) => render_chunk_parallel(comp, chunk_start..chunk_end, renderer_opts, pool)?,
            None => (chunk_start..chunk_end)
                .map(|f| render_frame(comp, FrameIndex(f), &mut renderer))
                .collect::<ReelResult<Vec<_>>>()?,
        };
        for (f, frame) in (chunk_start..chunk_end).zip(&frames) {
            sink.push_frame(FrameIndex(f), frame)?;
        }
        stats.frames_total += chunk_end - chunk_start;
        stats.frames_rendered += frames.len() as u64;
        tracing::debug!(chunk_start, chunk_end, "chunk rendered");
        chunk_start = chunk_end;
    }

    sink.end()?;
    tracing::info!(frames = stats.frames_rendered, "render complete");
    Ok(stats)
}

fn render_chunk_parallel(
    comp: &Composition,
    frames: std::ops::Range<u64>,
    renderer_opts: &CpuRendererOpts,
    pool: &rayon::ThreadPool,
) -> ReelResult<Vec<FrameRGBA>> {
    let indices: Vec<u64> = frames.collect();
    pool.install(|| {
        indices
            .par_iter()
            .map_init(
                || CpuRenderer::new(renderer_opts),
                |worker, &f| -> ReelResult<FrameRGBA> {
                    let renderer = worker.as_mut().map_err(|e| {
                        ReelError::evaluation(format!("worker renderer init failed: {e}"))
                    })?;
                    render_frame(comp, FrameIndex(f), renderer)
                },
            )
            .collect()
    })
}

/// Options for [`render_to_mp4`].
#[derive(Clone, Debug)]
pub struct RenderToMp4Opts {
    /// Frames to encode.
    pub range: FrameRange,
    /// Directory holding the voiceover clips; `None` encodes silent video.
    pub audio_dir: Option<PathBuf>,
    /// Replace an existing output file.
    pub overwrite: bool,
    /// Render threading.
    pub threading: RenderThreading,
}

/// Render `opts.range` to an MP4 with the voiceover mixed in.
///
/// The audio mix goes to a temporary `f32le` file that is removed afterwards.
pub fn render_to_mp4(
    comp: &Composition,
    out_path: impl Into<PathBuf>,
    opts: &RenderToMp4Opts,
    renderer_opts: &CpuRendererOpts,
) -> ReelResult<RenderStats> {
    comp.validate()?;
    check_range(comp, opts.range)?;

    let mut audio_tmp = TempFileGuard(None);
    let audio = match opts.audio_dir.as_deref() {
        Some(dir) => {
            let path = std::env::temp_dir().join(format!(
                "markview_reel_mix_{}_{}.f32le",
                std::process::id(),
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_nanos())
                    .unwrap_or(0)
            ));
            let cfg = crate::audio::prepare_audio_mix(comp, dir, opts.range, &path)?;
            if cfg.is_some() {
                audio_tmp.0 = Some(path);
            }
            cfg
        }
        None => None,
    };

    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        overwrite: opts.overwrite,
        background: comp.background,
        ..FfmpegSinkOpts::new(out_path)
    });
    let stats = render_range(
        comp,
        opts.range,
        renderer_opts,
        &opts.threading,
        &mut sink,
        audio,
    )?;
    drop(audio_tmp);
    Ok(stats)
}

fn check_range(comp: &Composition, range: FrameRange) -> ReelResult<()> {
    if range.is_empty() {
        return Err(ReelError::validation("render range must be non-empty"));
    }
    if range.end.0 > comp.duration {
        return Err(ReelError::validation(format!(
            "render range end {} is past the composition duration {}",
            range.end.0, comp.duration
        )));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
