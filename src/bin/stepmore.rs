use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stepmore", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the stage after a number of presses as a PNG.
    Frame(FrameArgs),
    /// Render every tick of a run as a numbered PNG sequence.
    Frames(FramesArgs),
    /// Print one JSON stage snapshot per completed segment.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct StageArgs {
    /// Stage config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels (overrides the config).
    #[arg(long)]
    width: Option<u32>,

    /// Viewport height in pixels (overrides the config).
    #[arg(long)]
    height: Option<u32>,

    /// Repaint only the animating node each tick.
    #[arg(long)]
    current_only: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    stage: StageArgs,

    /// Presses to apply, each run until its segment settles.
    #[arg(long, default_value_t = 0)]
    clicks: u64,

    /// Press once more and stop after this many ticks.
    #[arg(long)]
    ticks: Option<u64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    stage: StageArgs,

    /// Presses to simulate.
    #[arg(long)]
    clicks: u64,

    /// Directory receiving `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    stage: StageArgs,

    /// Presses to simulate.
    #[arg(long)]
    clicks: u64,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn load_config(args: &StageArgs) -> anyhow::Result<stepmore::StageConfig> {
    let mut config = match &args.config {
        Some(path) => stepmore::StageConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => stepmore::StageConfig::default(),
    };
    if let Some(width) = args.width {
        config.viewport.width = width;
    }
    if let Some(height) = args.height {
        config.viewport.height = height;
    }
    if args.current_only {
        config.redraw = stepmore::RedrawPolicy::CurrentOnly;
    }
    config.validate()?;
    Ok(config)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(&args.stage)?;
    let mut session = stepmore::Session::new(config)?;
    let mut scratch = stepmore::RecordingSurface::new();

    for _ in 0..args.clicks {
        session.press();
        session.settle(&mut scratch);
        scratch.clear();
    }

    let frame = match args.ticks {
        Some(ticks) => {
            session.press();
            for _ in 0..ticks {
                if session.step(&mut scratch).is_none() {
                    break;
                }
                scratch.clear();
            }
            session.render_current()?
        }
        None => session.render_current()?,
    };

    stepmore::write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let config = load_config(&args.stage)?;
    let out_dir = args.out_dir.as_path();

    let stats = stepmore::render_interactions(config, args.clicks, |idx, frame| {
        stepmore::write_png(&frame_path(out_dir, idx), &frame)
    })?;

    eprintln!(
        "wrote {} frames to {} ({} segments)",
        stats.frames_rendered,
        out_dir.display(),
        stats.segments_completed
    );
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let config = load_config(&args.stage)?;
    let mut session = stepmore::Session::new(config)?;
    let mut scratch = stepmore::RecordingSurface::new();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.clicks {
        session.press();
        session.settle(&mut scratch);
        scratch.clear();
        serde_json::to_writer(&mut out, &session.stage().snapshot())
            .context("serialize snapshot")?;
        writeln!(out)?;
    }
    Ok(())
}

fn frame_path(dir: &Path, idx: stepmore::FrameIndex) -> PathBuf {
    dir.join(format!("frame_{:05}.png", idx.0))
}
