/// Protopanel Core Library - rasterization and transform engine
///
/// This library draws procedural shapes onto fixed-size pixel panels: the
/// primitive rasterizers, the rotating-cube pose and projection pipeline, the
/// pre-drawn face scene, and the loops that hand finished frames to a display
/// or encoder.

pub mod animation;
pub mod config;
pub mod face;
pub mod geometry;
pub mod panel;
pub mod projection;
pub mod raster;
pub mod sequence;
pub mod sink;
pub mod transform;

// Re-export commonly used types
pub use animation::{interpolate_frames, CubeAnimation, CubeFrame, TweenError};
pub use config::{CubeConfig, FaceConfig};
pub use face::{FaceScene, PanelPair};
pub use geometry::Mesh;
pub use panel::{ColorError, Panel, Rgb};
pub use projection::{Segment, Viewport};
pub use raster::Brush;
pub use sink::{FrameSink, Interrupt, PixelMatrix};
pub use transform::Pose;
