/// Orthographic projection of the posed cube and mapping onto panel pixels
use crate::geometry::{CUBE_EDGES, CUBE_FACES, FACE_SHADES, VIEW_EXTENT};
use nalgebra::{Point2, Point3};

/// A projected edge in view units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2<f32>,
    pub end: Point2<f32>,
}

/// A projected face outline with its flat brightness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLoop {
    pub corners: [Point2<f32>; 4],
    pub shade: f32,
}

/// Drop the Z coordinate
pub fn project(point: &Point3<f32>) -> Point2<f32> {
    Point2::new(point.x, point.y)
}

pub fn project_edges(vertices: &[Point3<f32>; 8]) -> [Segment; 12] {
    CUBE_EDGES.map(|(a, b)| Segment {
        start: project(&vertices[a]),
        end: project(&vertices[b]),
    })
}

/// Face outlines in fixed face-list order, with no depth sorting or culling
pub fn project_faces(vertices: &[Point3<f32>; 8]) -> [FaceLoop; 6] {
    let mut faces = [FaceLoop {
        corners: [Point2::origin(); 4],
        shade: 0.0,
    }; 6];
    for (face, (indices, shade)) in faces.iter_mut().zip(CUBE_FACES.iter().zip(FACE_SHADES)) {
        face.corners = indices.map(|i| project(&vertices[i]));
        face.shade = shade;
    }
    faces
}

/// Maps the square view volume onto a panel, centred, with +y pointing up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: Point2<f32>,
    scale: f32,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            center: Point2::new(
                (width as f32 - 1.0) / 2.0,
                (height as f32 - 1.0) / 2.0,
            ),
            scale: width.min(height) as f32 / (2.0 * VIEW_EXTENT),
        }
    }

    /// Pixels per view unit
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_pixel(&self, point: &Point2<f32>) -> Point2<i32> {
        Point2::new(
            (self.center.x + point.x * self.scale).round() as i32,
            (self.center.y - point.y * self.scale).round() as i32,
        )
    }
}
