/// Protopanel - rotating cube and blinking face on a pixel matrix
///
/// Usage:
///   protopanel cube [--fill] [--gif out.gif]   Spin a cube in the terminal or write a GIF
///   protopanel face                            Show the blinking face in the terminal
/// Press Q, Esc or Ctrl-C to stop a live display.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use protopanel_core::geometry::{MAX_CUBE_SIZE, MIN_CUBE_SIZE};
use protopanel_core::{CubeAnimation, CubeConfig, FaceConfig, FaceScene, Rgb};
use protopanel_terminal::{GifSink, TerminalApp};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Duration;

/// Two 64x32 matrices side by side
const FACE_MATRIX_WIDTH: usize = 128;
const FACE_MATRIX_HEIGHT: usize = 32;

#[derive(Parser)]
#[command(name = "protopanel", version, about = "Procedural shapes on LED-matrix sized panels")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rotating 3D cube
    Cube(CubeArgs),
    /// Blinking two-panel face
    Face(FaceArgs),
}

#[derive(Args)]
struct CubeArgs {
    #[arg(long, default_value_t = 64)]
    width: usize,
    #[arg(long, default_value_t = 32)]
    height: usize,
    #[arg(long, default_value_t = 30)]
    fps: u32,
    /// Frames in one full turn
    #[arg(long, default_value_t = 120)]
    frames: u64,
    /// Relative cube size, 1 (small) to 50 (fills the view)
    #[arg(long, default_value_t = 10.0)]
    cube_size: f32,
    #[arg(long, default_value = "#000000")]
    bg_color: String,
    #[arg(long, default_value = "#FFFFFF")]
    edge_color: String,
    /// Fill the faces instead of drawing a wireframe
    #[arg(long)]
    fill: bool,
    /// Write an animated GIF here instead of drawing in the terminal
    #[arg(long)]
    gif: Option<PathBuf>,
}

#[derive(Args)]
struct FaceArgs {
    #[arg(long, default_value = "#00FFFF")]
    color: String,
    /// How long the eyes stay open, in milliseconds
    #[arg(long, default_value_t = 3000)]
    dwell_ms: u64,
    /// How long a blink lasts, in milliseconds
    #[arg(long, default_value_t = 200)]
    blink_ms: u64,
}

fn parse_color(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex).with_context(|| format!("invalid color {hex}"))
}

impl CubeArgs {
    fn config(&self) -> Result<CubeConfig> {
        // The core clamps too; this only reports it
        let cube_size = self.cube_size.clamp(MIN_CUBE_SIZE, MAX_CUBE_SIZE);
        if cube_size != self.cube_size {
            log::warn!("cube size {} clamped to {}", self.cube_size, cube_size);
        }
        Ok(CubeConfig {
            width: self.width,
            height: self.height,
            fps: self.fps,
            frames: self.frames,
            cube_size,
            background: parse_color(&self.bg_color)?,
            edge: parse_color(&self.edge_color)?,
            fill: self.fill,
        })
    }
}

impl FaceArgs {
    fn config(&self) -> Result<FaceConfig> {
        Ok(FaceConfig {
            color: parse_color(&self.color)?,
            dwell: Duration::from_millis(self.dwell_ms),
            blink: Duration::from_millis(self.blink_ms),
        })
    }
}

fn cube(args: &CubeArgs) -> Result<()> {
    let animation = CubeAnimation::new(args.config()?);

    match &args.gif {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut sink = GifSink::new(BufWriter::new(file), animation.config().fps);
            animation
                .render_into(&mut sink)
                .with_context(|| format!("Failed to encode {}", path.display()))?;
            println!("GIF saved as {}", path.display());
        }
        None => {
            let config = animation.config();
            let mut app = TerminalApp::new(config.width, config.height);
            app.run_cube(&animation)?;
        }
    }
    Ok(())
}

fn face(args: &FaceArgs) -> Result<()> {
    let config = args.config()?;
    let scene = FaceScene::build();
    let mut app = TerminalApp::new(FACE_MATRIX_WIDTH, FACE_MATRIX_HEIGHT);
    app.run_face(&scene, &config)?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Cube(args) => cube(args),
        Command::Face(args) => face(args),
    }
}
