/// Per-frame cube pose: rotation plus orbital drift
use crate::geometry::Mesh;
use nalgebra::{Point3, Rotation3, Vector3};
use std::f32::consts::TAU;

/// X rotation runs at this fraction of the Y rotation
const X_SPIN_RATIO: f32 = 0.7;

/// Drift amplitude as a fraction of the cube's edge length
const DRIFT_RATIO: f32 = 0.05;

/// Rotation and translation of the mesh for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub angle: f32,
    pub rotation: Rotation3<f32>,
    pub translation: Vector3<f32>,
}

impl Pose {
    /// Phase angle of frame `index` in a loop of `total` frames.
    ///
    /// Derived from the integer index so long runs never accumulate drift.
    pub fn frame_angle(index: u64, total: u64) -> f32 {
        if total == 0 {
            return 0.0;
        }
        TAU * (index % total) as f32 / total as f32
    }

    pub fn at_frame(index: u64, total: u64, size: f32) -> Self {
        Self::from_angle(Self::frame_angle(index, total), size)
    }

    /// Pose for `angle` with drift scaled to a cube of edge length `size`
    pub fn from_angle(angle: f32, size: f32) -> Self {
        let s = size * DRIFT_RATIO;
        Self {
            angle,
            rotation: Self::rotation(angle),
            translation: Vector3::new(
                s * (2.0 * angle).sin(),
                s * (3.0 * angle).cos(),
                s * angle.sin(),
            ),
        }
    }

    /// Pose with no drift, rotation only
    pub fn rotation_only(angle: f32) -> Self {
        Self {
            angle,
            rotation: Self::rotation(angle),
            translation: Vector3::zeros(),
        }
    }

    /// `Ry(angle) * Rx(0.7 * angle)`, applied to column vectors
    pub fn rotation(angle: f32) -> Rotation3<f32> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), angle * X_SPIN_RATIO);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), angle);
        ry * rx
    }

    pub fn apply(&self, point: &Point3<f32>) -> Point3<f32> {
        self.rotation * point + self.translation
    }

    pub fn transform_mesh(&self, mesh: &Mesh) -> [Point3<f32>; 8] {
        mesh.vertices.map(|v| self.apply(&v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix3;

    #[test]
    fn test_identity_rotation() {
        let pose = Pose::rotation_only(0.0);
        assert!((pose.rotation.matrix() - Matrix3::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_composition_order() {
        let angle: f32 = 0.8;
        let (s, c) = angle.sin_cos();
        let (sx, cx) = (angle * 0.7).sin_cos();
        let ry = Matrix3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c);
        let rx = Matrix3::new(1.0, 0.0, 0.0, 0.0, cx, -sx, 0.0, sx, cx);
        let expected = ry * rx;
        assert!((Pose::rotation(angle).matrix() - expected).norm() < 1e-5);
    }

    #[test]
    fn test_frame_angles_cover_one_turn() {
        let total = 120;
        let angles: Vec<f32> = (0..total).map(|k| Pose::frame_angle(k, total)).collect();
        assert_eq!(angles.len(), 120);
        assert_eq!(angles[0], 0.0);
        for pair in angles.windows(2) {
            assert!((pair[1] - pair[0] - TAU / 120.0).abs() < 1e-5);
        }
        assert!(*angles.last().unwrap() < TAU);
    }

    #[test]
    fn test_frame_angle_wraps_without_drift() {
        assert_eq!(Pose::frame_angle(120 * 1_000_000 + 7, 120), Pose::frame_angle(7, 120));
        assert_eq!(Pose::frame_angle(5, 0), 0.0);
    }

    #[test]
    fn test_drift_at_angle_zero() {
        let pose = Pose::from_angle(0.0, 4.0);
        let s = 4.0 * 0.05;
        assert!((pose.translation - Vector3::new(0.0, s, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_unrotated_mesh_round_trip() {
        let mesh = Mesh::cube(4.4);
        let moved = Pose::rotation_only(0.0).transform_mesh(&mesh);
        for (a, b) in moved.iter().zip(mesh.vertices.iter()) {
            assert!((a - b).norm() < 1e-6);
        }
    }

    #[test]
    fn test_rotation_preserves_edge_lengths() {
        let mesh = Mesh::cube(3.0);
        let moved = Pose::from_angle(1.3, 3.0).transform_mesh(&mesh);
        for (a, b) in crate::geometry::CUBE_EDGES {
            assert!(((moved[a] - moved[b]).norm() - 3.0).abs() < 1e-5);
        }
    }
}
