/// Rotating cube frames: pose, projection and rasterization per frame index
use crate::config::CubeConfig;
use crate::geometry::Mesh;
use crate::panel::{Panel, Rgb};
use crate::projection::{project_edges, project_faces, FaceLoop, Segment, Viewport};
use crate::raster::{draw_line, fill_quad};
use crate::sink::FrameSink;
use crate::transform::Pose;
use thiserror::Error;

/// Everything computed for one frame before it is rasterized
#[derive(Debug, Clone, PartialEq)]
pub struct CubeFrame {
    pub index: u64,
    pub pose: Pose,
    pub segments: [Segment; 12],
    /// Only present in fill mode
    pub faces: Option<[FaceLoop; 6]>,
}

/// A full turn of the cube, one frame per index in `0..frames`
#[derive(Debug, Clone)]
pub struct CubeAnimation {
    config: CubeConfig,
    mesh: Mesh,
    viewport: Viewport,
}

impl CubeAnimation {
    pub fn new(config: CubeConfig) -> Self {
        let mesh = Mesh::cube(config.actual_size());
        let viewport = Viewport::new(config.width, config.height);

        log::info!("Requested cube size: {}", config.cube_size);
        log::info!("Relative size: {:.1}% of view", config.relative_size() * 100.0);
        log::info!("Actual size in view units: {}", config.actual_size());

        Self {
            config,
            mesh,
            viewport,
        }
    }

    pub fn config(&self) -> &CubeConfig {
        &self.config
    }

    /// Pose and project frame `index`; indices past the end wrap around
    pub fn frame(&self, index: u64) -> CubeFrame {
        let pose = Pose::at_frame(index, self.config.frames, self.config.actual_size());
        let vertices = pose.transform_mesh(&self.mesh);

        CubeFrame {
            index,
            pose,
            segments: project_edges(&vertices),
            faces: self.config.fill.then(|| project_faces(&vertices)),
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = CubeFrame> + '_ {
        (0..self.config.frames).map(move |index| self.frame(index))
    }

    /// Rasterize a frame onto a fresh panel.
    ///
    /// Faces are painted in face-list order, so back faces can land on top of
    /// front faces. Edges are drawn last.
    pub fn render(&self, frame: &CubeFrame) -> Panel<Rgb> {
        let mut panel = Panel::filled(self.config.width, self.config.height, self.config.background);

        if let Some(faces) = &frame.faces {
            for face in faces {
                let quad = face.corners.map(|corner| self.viewport.to_pixel(&corner));
                fill_quad(&mut panel, &quad, self.config.edge.scaled(face.shade));
            }
        }

        for segment in &frame.segments {
            let start = self.viewport.to_pixel(&segment.start);
            let end = self.viewport.to_pixel(&segment.end);
            draw_line(&mut panel, start.x, start.y, end.x, end.y, self.config.edge);
        }

        panel
    }

    /// Hand every frame to `sink` in display order, then finish it
    pub fn render_into<S: FrameSink>(&self, sink: &mut S) -> Result<u64, S::Error> {
        let mut count = 0;
        for frame in self.frames() {
            log::debug!("frame {} at angle {:.3}", frame.index, frame.pose.angle);
            sink.push(&self.render(&frame))?;
            count += 1;
        }
        sink.finish()?;
        Ok(count)
    }
}

/// Raised when two frames cannot be blended
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TweenError {
    #[error("cannot blend a {0}x{1} frame into a {2}x{3} frame")]
    SizeMismatch(usize, usize, usize, usize),
}

/// The `gap - 1` frames strictly between `start` and `end`.
///
/// In-between frame `i` blends every cell linearly with `t = i / gap`. A gap
/// of 0 or 1 leaves nothing to fill in.
pub fn interpolate_frames(
    start: &Panel<Rgb>,
    end: &Panel<Rgb>,
    gap: usize,
) -> Result<Vec<Panel<Rgb>>, TweenError> {
    let (width, height) = (start.width(), start.height());
    if (width, height) != (end.width(), end.height()) {
        return Err(TweenError::SizeMismatch(width, height, end.width(), end.height()));
    }

    log::debug!("interpolating {} frames", gap.saturating_sub(1));
    let tweens = (1..gap)
        .map(|i| {
            let t = i as f32 / gap as f32;
            let mut frame = Panel::new(width, height);
            for ((x, y, from), (_, _, to)) in start.pixels().zip(end.pixels()) {
                frame.set(x as i32, y as i32, from.lerp(to, t));
            }
            frame
        })
        .collect();
    Ok(tweens)
}
