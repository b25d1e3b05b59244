use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use heartfield::{FieldConfig, Millis, ParticleField, Scene, TypedReveal};

#[derive(Parser, Debug)]
#[command(name = "heartfield", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scene on a virtual clock and write frames (or lifecycle events) as JSON.
    Simulate(SimulateArgs),
    /// Print the device class and spawn profile for a viewport width.
    Classify(ClassifyArgs),
    /// Print the effective, validated configuration.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Simulated time span in milliseconds.
    #[arg(long)]
    duration_ms: u64,

    /// Frames sampled per simulated second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Initial viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Seed for the spawn generator.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// JSON config overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Accept the greeting at this instant (ms), starting the typed reveal.
    #[arg(long)]
    accept_at: Option<u64>,

    /// Resize the viewport at an instant, as `MS:WIDTH`. Repeatable.
    #[arg(long = "resize-at")]
    resize_at: Vec<ResizeAt>,

    /// Write the spawn/remove/reclassify timeline instead of frames.
    #[arg(long)]
    events: bool,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Viewport width in CSS pixels.
    #[arg(long)]
    width: u32,

    /// JSON config overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// JSON config overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug)]
struct ResizeAt {
    at: u64,
    width: u32,
}

impl FromStr for ResizeAt {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (at, width) = s
            .split_once(':')
            .ok_or_else(|| format!("expected MS:WIDTH, got '{s}'"))?;
        Ok(Self {
            at: at
                .trim()
                .parse()
                .map_err(|e| format!("bad instant '{at}': {e}"))?,
            width: width
                .trim()
                .parse()
                .map_err(|e| format!("bad width '{width}': {e}"))?,
        })
    }
}

#[derive(Clone, Copy, Debug)]
enum Cue {
    Resize(u32),
    Accept,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Classify(args) => cmd_classify(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<FieldConfig> {
    match path {
        Some(p) => FieldConfig::from_json_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(FieldConfig::default()),
    }
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, value).with_context(|| "serialize JSON")?;
            w.flush()
                .with_context(|| format!("write output '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, value).with_context(|| "serialize JSON")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let cfg = load_config(args.config.as_deref())?;

    let mut field = ParticleField::with_seed(cfg, args.seed)?;
    field.classify(args.width, Millis::ZERO);
    let mut scene = Scene::new(field, TypedReveal::default());
    scene.start(Millis::ZERO);

    let mut cues: Vec<(u64, Cue)> = args
        .resize_at
        .iter()
        .map(|r| (r.at, Cue::Resize(r.width)))
        .collect();
    if let Some(at) = args.accept_at {
        cues.push((at, Cue::Accept));
    }
    cues.sort_by_key(|(at, _)| *at);
    let mut cues = cues.into_iter().peekable();

    // Every frame instant is k * 1000 / fps with k * 1000 <= duration_ms * fps.
    let fps = u64::from(args.fps);
    let frame_count = args
        .duration_ms
        .checked_mul(fps)
        .map(|scaled| scaled / 1000 + 1)
        .with_context(|| {
            format!(
                "--duration-ms {} at {fps} fps is too long",
                args.duration_ms
            )
        })?;
    let mut frames = Vec::new();
    let mut events = Vec::new();

    for k in 0..frame_count {
        let t = Millis(k * 1000 / fps);
        apply_cues(&mut scene, &mut cues, t);

        let frame = scene.render(t);
        if args.events {
            events.extend(scene.field_mut().drain_events());
        } else {
            frames.push(frame);
        }
    }

    // The last frame can fall short of the duration; run the tail so the timeline covers it.
    let end = Millis(args.duration_ms);
    apply_cues(&mut scene, &mut cues, end);
    for (at, _) in cues {
        tracing::warn!(at, duration_ms = args.duration_ms, "cue after end of simulation ignored");
    }
    scene.advance_to(end);
    if args.events {
        events.extend(scene.field_mut().drain_events());
    }

    tracing::info!(
        frames = frame_count,
        active = scene.field().len(),
        "simulation finished"
    );

    if args.events {
        write_json(args.out.as_deref(), &events)
    } else {
        write_json(args.out.as_deref(), &frames)
    }
}

fn apply_cues<I>(scene: &mut Scene, cues: &mut std::iter::Peekable<I>, until: Millis)
where
    I: Iterator<Item = (u64, Cue)>,
{
    while let Some((at, cue)) = cues.next_if(|(at, _)| *at <= until.0) {
        scene.advance_to(Millis(at));
        match cue {
            Cue::Resize(width) => {
                scene.resize(width, Millis(at));
            }
            Cue::Accept => {
                scene.accept(Millis(at));
            }
        }
    }
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let device = cfg.breakpoints.classify(args.width);
    let report = serde_json::json!({
        "width": args.width,
        "device": device,
        "profile": cfg.profile(device),
        "clamp_band": cfg.clamp_band(device),
    });
    write_json(None, &report)
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    write_json(None, &cfg)
}
