#![deny(unsafe_code)]
//! CLI binary for the starweave pattern animation system.
//!
//! Subcommands:
//! - `render` — drive an animation for N frames, write the last frame as PNG
//! - `points` — dump one frame's generated point list as JSON
//! - `text` — print a text block pattern
//! - `list` — print available layouts, styles, and text pattern kinds

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use starweave_core::{AnimationConfig, Scene};
use starweave_layouts::{LayoutKind, LAYOUT_NAMES};
use starweave_render::{Animator, PixelSurface, STYLE_NAMES};
use starweave_text::{
    build_pattern_named, typewriter_frame, CURSOR_INTERVAL_MS, TEXT_PATTERN_NAMES,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "starweave", about = "Animated star pattern renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an animation and write its final frame as a PNG snapshot.
    Render {
        /// Layout name (unknown names fall back to "grid").
        #[arg(short, long, default_value = "grid")]
        layout: String,

        /// Style name, or "textPattern" for the text showcase.
        #[arg(short, long, default_value = "morphing")]
        style: String,

        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 640)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 480)]
        height: usize,

        /// Number of frames to run before the snapshot.
        #[arg(short, long, default_value_t = 300)]
        frames: usize,

        /// Frame rate used to synthesize frame times.
        #[arg(long, default_value_t = 60.0)]
        fps: f64,

        /// PRNG seed for the matrix/explosion styles.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,

        /// Animation config as a JSON object
        /// (density, speed, pattern_size, star_pattern).
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Print one frame's generated point list as JSON.
    Points {
        /// Layout name (unknown names fall back to "grid").
        #[arg(short, long, default_value = "grid")]
        layout: String,

        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 640)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 480)]
        height: usize,

        /// Animation time in milliseconds.
        #[arg(short, long, default_value_t = 0.0)]
        time: f64,

        /// Density multiplier in (0, 2].
        #[arg(short, long, default_value_t = 1.0)]
        density: f64,
    },
    /// Print a text block pattern, optionally with the typewriter cursor.
    Text {
        /// Pattern kind (unknown names fall back to "rightTriangle").
        #[arg(short, long, default_value = "rightTriangle")]
        kind: String,

        /// Number of pattern rows.
        #[arg(short, long, default_value_t = 8)]
        size: usize,

        /// Overlay the typewriter cursor at this animation time (ms).
        #[arg(long)]
        cursor: Option<f64>,
    },
    /// List available layouts, styles, and text pattern kinds.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            if cli.json {
                let info = serde_json::json!({
                    "layouts": LAYOUT_NAMES,
                    "styles": STYLE_NAMES,
                    "text_patterns": TEXT_PATTERN_NAMES,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Layouts:");
                println!("  {}", LAYOUT_NAMES.join(", "));
                println!("Styles:");
                println!("  {}", STYLE_NAMES.join(", "));
                println!("Text patterns:");
                println!("  {}", TEXT_PATTERN_NAMES.join(", "));
            }
        }
        Command::Render {
            layout,
            style,
            width,
            height,
            frames,
            fps,
            seed,
            output,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            if !(fps > 0.0) {
                return Err(CliError::Input(format!("fps must be positive, got {fps}")));
            }
            let config = AnimationConfig::from_json(&params);

            let mut scene = Scene::new(&layout, &style, width as f64, height as f64, seed);
            scene.config = config.clone();
            scene.frames = frames;
            scene.validate()?;

            let mut surface = PixelSurface::new(width, height)?;
            let mut animator = Animator::new(&layout, &style, config, seed, 0.0);

            let frame_ms = 1000.0 / fps;
            let mut text_frame = None;
            for frame in 0..frames {
                text_frame = animator.frame(frame as f64 * frame_ms, width as f64, height as f64, &mut surface);
            }

            starweave_render::snapshot::write_png(&surface, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "scene": scene,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                if let Some(text) = text_frame {
                    println!("{text}");
                }
                eprintln!(
                    "rendered {layout}/{style} ({width}x{height}, {frames} frames, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
        Command::Points {
            layout,
            width,
            height,
            time,
            density,
        } => {
            let kind = LayoutKind::from_name(&layout);
            let points =
                starweave_layouts::generate(kind, width as f64, height as f64, time, density);
            if cli.json {
                let info = serde_json::json!({
                    "layout": kind.name(),
                    "count": points.len(),
                    "points": points,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&points)?);
            }
        }
        Command::Text { kind, size, cursor } => {
            let pattern = build_pattern_named(&kind, size);
            let pattern = match cursor {
                Some(time) => typewriter_frame(&pattern, time, CURSOR_INTERVAL_MS),
                None => pattern,
            };
            if cli.json {
                let info = serde_json::json!({
                    "kind": kind,
                    "size": size,
                    "pattern": pattern,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print!("{pattern}");
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
