use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scrollcue::{
    FnObserver, JsonFileSource, NavVisibility, Progress, SceneConfig, SceneDirector, Shared,
    landing_scene, load_or_default, shared,
};

#[derive(Parser, Debug)]
#[command(name = "scrollcue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a scene at one progress value and print the result as JSON.
    Sample(SampleArgs),
    /// Simulate a linear scroll and print one JSON line per frame.
    Trace(TraceArgs),
    /// Write the landing-page scene generated from a content document.
    Preset(PresetArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Normalized scroll progress; clamped to [0, 1].
    #[arg(long)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Total scrollable extent in pixels.
    #[arg(long)]
    extent: f64,

    /// Number of frames between offset 0 and `extent`.
    #[arg(long, default_value_t = 60)]
    steps: u32,

    /// Override the scene's damping factor.
    #[arg(long)]
    damping: Option<f64>,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Content document JSON. Default content is used when missing or unreadable.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Output scene JSON; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Trace(args) => cmd_trace(args),
        Command::Preset(args) => cmd_preset(args),
    }
}

fn read_scene(path: &Path) -> anyhow::Result<SceneConfig> {
    SceneConfig::from_path(path).with_context(|| format!("load scene '{}'", path.display()))
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    let timeline = scene.timeline()?;
    let result = scrollcue::Evaluator::evaluate(&timeline, Progress::new(args.progress))?;
    let json = serde_json::to_string_pretty(&result).context("serialize evaluation")?;
    println!("{json}");
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let mut scene = read_scene(&args.in_path)?;
    if let Some(damping) = args.damping {
        scene.damping = damping;
        scene.validate().context("apply --damping")?;
    }
    anyhow::ensure!(args.steps > 0, "--steps must be > 0");

    let mut director: SceneDirector = scene.director()?;
    let nav: Shared<Option<NavVisibility>> = shared(None);
    let sink = nav.clone();
    director.subscribe(Box::new(FnObserver(move |event: &NavVisibility| {
        *sink.borrow_mut() = Some(*event);
    })));

    for frame in 0..=args.steps {
        let offset = args.extent * f64::from(frame) / f64::from(args.steps);
        director.tick(offset, args.extent);

        let envelopes: std::collections::BTreeMap<&str, f64> = director
            .last_result()
            .segments
            .iter()
            .map(|(id, out)| (id.as_str(), out.envelope.value))
            .collect();
        let line = serde_json::json!({
            "frame": frame,
            "offset": offset,
            "progress": director.last_progress().map(Progress::get),
            "direction": director.direction(),
            "nav": nav.borrow_mut().take(),
            "segments": envelopes,
        });
        println!("{line}");
    }
    Ok(())
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let content = match &args.content {
        Some(path) => load_or_default(&JsonFileSource::new(path)),
        None => Default::default(),
    };
    let json = landing_scene(&content).to_json_pretty()?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json).with_context(|| format!("write scene '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
