/// Cube mesh tables and sizing
use nalgebra::Point3;

/// Half-width of the cubic view volume, which spans -10..10 on every axis
pub const VIEW_EXTENT: f32 = 10.0;

/// Range of the user-facing cube size knob
pub const MIN_CUBE_SIZE: f32 = 1.0;
pub const MAX_CUBE_SIZE: f32 = 50.0;

/// Unit cube corners, -1..1 on each axis
pub const CUBE_VERTICES: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0], // 0
    [1.0, -1.0, -1.0],  // 1
    [1.0, 1.0, -1.0],   // 2
    [-1.0, 1.0, -1.0],  // 3
    [-1.0, -1.0, 1.0],  // 4
    [1.0, -1.0, 1.0],   // 5
    [1.0, 1.0, 1.0],    // 6
    [-1.0, 1.0, 1.0],   // 7
];

pub const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0), // Bottom face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4), // Top face
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7), // Connecting edges
];

/// Faces in paint order; later faces overwrite earlier ones
pub const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3], // -z
    [4, 5, 6, 7], // +z
    [0, 1, 5, 4], // -y
    [2, 3, 7, 6], // +y
    [0, 3, 7, 4], // -x
    [1, 2, 6, 5], // +x
];

/// Flat brightness multiplier per face, applied to the edge color
pub const FACE_SHADES: [f32; 6] = [0.8, 0.9, 0.7, 0.6, 0.5, 0.4];

/// Fraction of the view volume the cube spans, up to 90% at size 50.
///
/// The knob is clamped to `1..=50` first; NaN falls back to the smallest size.
pub fn relative_size(cube_size: f32) -> f32 {
    let knob = if cube_size.is_nan() {
        MIN_CUBE_SIZE
    } else {
        cube_size.clamp(MIN_CUBE_SIZE, MAX_CUBE_SIZE)
    };
    0.05 + knob / MAX_CUBE_SIZE * 0.85
}

/// Edge length of the cube in view units
pub fn actual_size(cube_size: f32) -> f32 {
    2.0 * VIEW_EXTENT * relative_size(cube_size)
}

/// The cube's eight corners; topology lives in the constant tables above
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: [Point3<f32>; 8],
}

impl Mesh {
    /// A cube centred on the origin with the given edge length
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        Self {
            vertices: CUBE_VERTICES.map(|[x, y, z]| Point3::new(x * half, y * half, z * half)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_size_range() {
        assert!((relative_size(1.0) - 0.067).abs() < 1e-6);
        assert!((relative_size(50.0) - 0.90).abs() < 1e-6);
        assert!((relative_size(500.0) - 0.90).abs() < 1e-6);
        assert!((relative_size(10.0) - 0.22).abs() < 1e-6);
        assert!((actual_size(10.0) - 4.4).abs() < 1e-5);
    }

    #[test]
    fn test_size_knob_is_clamped() {
        for knob in [0.0, 0.5, -10.0, f32::NEG_INFINITY, f32::NAN] {
            assert_eq!(relative_size(knob), relative_size(1.0), "knob {}", knob);
        }
        assert_eq!(relative_size(f32::INFINITY), relative_size(50.0));
        assert!(actual_size(-10.0) > 0.0);
    }

    #[test]
    fn test_cube_mesh() {
        let mesh = Mesh::cube(4.0);
        assert_eq!(mesh.vertices[0], Point3::new(-2.0, -2.0, -2.0));
        assert_eq!(mesh.vertices[6], Point3::new(2.0, 2.0, 2.0));

        for (a, b) in CUBE_EDGES {
            let length = (mesh.vertices[a] - mesh.vertices[b]).norm();
            assert!((length - 4.0).abs() < 1e-6, "edge {:?}", (a, b));
        }
    }

    #[test]
    fn test_faces_are_planar_quads() {
        for face in CUBE_FACES {
            // Every face shares exactly one constant coordinate
            let shared = (0..3)
                .filter(|&axis| {
                    let value = CUBE_VERTICES[face[0]][axis];
                    face.iter().all(|&v| CUBE_VERTICES[v][axis] == value)
                })
                .count();
            assert_eq!(shared, 1, "face {:?}", face);
        }
    }
}
