/// Immutable settings bundles, built once before rendering starts
use crate::geometry::{actual_size, relative_size};
use crate::panel::Rgb;
use std::time::Duration;

/// Settings for the rotating cube animation
#[derive(Debug, Clone, PartialEq)]
pub struct CubeConfig {
    pub width: usize,
    pub height: usize,
    /// Playback rate handed to the sink
    pub fps: u32,
    /// Frames in one full turn
    pub frames: u64,
    /// Size knob, 1 = small, 50 = fills 90% of the view; clamped to that range
    pub cube_size: f32,
    pub background: Rgb,
    pub edge: Rgb,
    pub fill: bool,
}

impl CubeConfig {
    pub fn relative_size(&self) -> f32 {
        relative_size(self.cube_size)
    }

    pub fn actual_size(&self) -> f32 {
        actual_size(self.cube_size)
    }

    /// Time each frame stays on screen
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps.max(1) as f64)
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 32,
            fps: 30,
            frames: 120,
            cube_size: 10.0,
            background: Rgb::BLACK,
            edge: Rgb::WHITE,
            fill: false,
        }
    }
}

/// Settings for the blinking face
#[derive(Debug, Clone, PartialEq)]
pub struct FaceConfig {
    pub color: Rgb,
    /// How long the open-eyed face is held
    pub dwell: Duration,
    /// How long the eyes stay shut
    pub blink: Duration,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            color: Rgb::CYAN,
            dwell: Duration::from_secs(3),
            blink: Duration::from_millis(200),
        }
    }
}
