use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cellsheet", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Pack a frame directory or GIF into a sprite-sheet PNG.
    Pack(PackArgs),
    /// Decode the metadata carried in an atlas file name.
    Inspect(InspectArgs),
    /// Write the conformance vector suite as JSON.
    Vectors(VectorsArgs),
    /// Write the Second Life playback script.
    Script(ScriptArgs),
    /// Write the selected window as numbered PNG files.
    ExportFrames(ExportFramesArgs),
    /// Write the selected window as a looping animated GIF.
    ExportGif(ExportGifArgs),
}

#[derive(Args, Debug)]
struct WindowArgs {
    /// First frame of the window (inclusive).
    #[arg(long, allow_hyphen_values = true)]
    start: Option<i64>,

    /// End of the window (exclusive); defaults to the last frame.
    #[arg(long, allow_hyphen_values = true)]
    end: Option<i64>,
}

impl WindowArgs {
    fn select(&self, frames: &mut cellsheet::FrameSequence) -> anyhow::Result<()> {
        let start = self.start.unwrap_or(0);
        // An open end never lands before the start.
        let end = self.end.unwrap_or_else(|| (frames.len() as i64).max(start));
        frames.set_window(start, end)?;
        Ok(())
    }
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Frame directory (PNG/JPEG) or animated GIF.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory the atlas is written into.
    #[arg(long)]
    out_dir: PathBuf,

    /// Pack config JSON; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<u32>,

    #[arg(long)]
    columns: Option<u32>,

    /// Fixed atlas width in pixels.
    #[arg(long, conflicts_with = "original_scale")]
    width: Option<u32>,

    /// Fixed atlas height in pixels.
    #[arg(long, conflicts_with = "original_scale")]
    height: Option<u32>,

    /// Size cells to the largest frame instead of a fixed atlas.
    #[arg(long)]
    original_scale: bool,

    #[command(flatten)]
    window: WindowArgs,

    /// Playback rate written into the file name.
    #[arg(long)]
    fps: Option<u32>,

    /// Sheet name (must not contain '_').
    #[arg(long)]
    name: Option<String>,

    /// Sequence number.
    #[arg(long)]
    seq: Option<u32>,

    #[arg(long)]
    grid_lines: bool,

    #[arg(long)]
    frame_indices: bool,

    /// Blit frames at source size instead of fitting them to the cell.
    #[arg(long)]
    preserve_scale: bool,
}

#[derive(Parser, Debug)]
struct ExportFramesArgs {
    /// Frame directory (PNG/JPEG) or animated GIF.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory the numbered PNGs are written into.
    #[arg(long)]
    out_dir: PathBuf,

    /// File name prefix.
    #[arg(long, default_value = "frame")]
    stem: String,

    #[command(flatten)]
    window: WindowArgs,
}

#[derive(Parser, Debug)]
struct ExportGifArgs {
    /// Frame directory (PNG/JPEG) or animated GIF.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Playback rate of the GIF.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    #[command(flatten)]
    window: WindowArgs,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Artifact name or path; directory and extension are ignored.
    name: PathBuf,
}

#[derive(Parser, Debug)]
struct VectorsArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ScriptArgs {
    /// Output script path.
    #[arg(long)]
    out: PathBuf,

    /// Pack config JSON whose `script` section supplies defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Face to animate (all faces when omitted).
    #[arg(long)]
    face: Option<u32>,

    /// Link number of the prim showing the sheet.
    #[arg(long, allow_hyphen_values = true)]
    link: Option<i32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Pack(args) => cmd_pack(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Vectors(args) => cmd_vectors(args),
        Command::Script(args) => cmd_script(args),
        Command::ExportFrames(args) => cmd_export_frames(args),
        Command::ExportGif(args) => cmd_export_gif(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<cellsheet::PackConfig> {
    match path {
        Some(p) => Ok(cellsheet::PackConfig::from_path(p)?),
        None => Ok(cellsheet::PackConfig::default()),
    }
}

fn apply_overrides(cfg: &mut cellsheet::PackConfig, args: &PackArgs) {
    if let Some(rows) = args.rows {
        cfg.grid.rows = rows;
    }
    if let Some(columns) = args.columns {
        cfg.grid.columns = columns;
    }
    if args.original_scale {
        cfg.grid.sizing = cellsheet::SizingMode::OriginalScale;
    } else if args.width.is_some() || args.height.is_some() {
        let (w, h) = match cfg.grid.sizing {
            cellsheet::SizingMode::Fixed { width, height } => (width, height),
            cellsheet::SizingMode::OriginalScale => (2048, 2048),
        };
        cfg.grid.sizing = cellsheet::SizingMode::Fixed {
            width: args.width.unwrap_or(w),
            height: args.height.unwrap_or(h),
        };
    }
    if let Some(fps) = args.fps {
        cfg.frame_rate = fps;
    }
    if let Some(name) = &args.name {
        cfg.sheet_name = name.clone();
    }
    if let Some(seq) = args.seq {
        cfg.sequence_number = seq;
    }
    cfg.overlays.grid_lines |= args.grid_lines;
    cfg.overlays.frame_indices |= args.frame_indices;
    cfg.overlays.preserve_source_scale |= args.preserve_scale;
    cfg.grid = cfg.grid.clamped();
}

fn cmd_pack(args: PackArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    apply_overrides(&mut cfg, &args);
    cfg.validate()?;

    let frames = load_window(&args.in_path, &args.window)?;

    let composite =
        cellsheet::compose_styled(frames.window(), &cfg.grid, cfg.overlays, &cfg.style)?;
    for w in &composite.warnings {
        eprintln!("warning: {w}");
    }
    if let Some(summary) = composite.failure_summary() {
        eprintln!("warning: {summary}");
    }

    let meta = cfg.metadata(composite.frames_considered);
    let path = cellsheet::write_atlas(&composite.atlas, &meta, &args.out_dir)?;

    println!("{}", path.display());
    Ok(())
}

fn cmd_export_frames(args: ExportFramesArgs) -> anyhow::Result<()> {
    let frames = load_window(&args.in_path, &args.window)?;
    let written = cellsheet::write_sequence(frames.window(), &args.out_dir, &args.stem)?;
    eprintln!("wrote {} frames to {}", written.len(), args.out_dir.display());
    Ok(())
}

fn cmd_export_gif(args: ExportGifArgs) -> anyhow::Result<()> {
    let frames = load_window(&args.in_path, &args.window)?;
    cellsheet::write_gif(frames.window(), &args.out, args.fps)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn load_window(path: &Path, window: &WindowArgs) -> anyhow::Result<cellsheet::FrameSequence> {
    let mut frames = cellsheet::load_frames(path)
        .with_context(|| format!("load frames from '{}'", path.display()))?;
    window.select(&mut frames)?;
    Ok(frames)
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let meta = cellsheet::decode_path(&args.name)
        .with_context(|| format!("decode '{}'", args.name.display()))?;
    let json = serde_json::to_string_pretty(&meta).context("serialize metadata")?;
    println!("{json}");
    Ok(())
}

fn cmd_vectors(args: VectorsArgs) -> anyhow::Result<()> {
    let json = cellsheet::conformance::conformance_suite().to_json_pretty()?;
    write_text(&args.out, &json)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_script(args: ScriptArgs) -> anyhow::Result<()> {
    let mut opts = load_config(args.config.as_deref())?.script;
    if let Some(face) = args.face {
        opts.face = Some(face);
    }
    if let Some(link) = args.link {
        opts.link_number = link;
    }
    write_text(&args.out, &cellsheet::lsl_script(&opts))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}
