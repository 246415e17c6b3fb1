//! Moving vertices between world space and the mesh's local frame.

use curveloft_math::Point3;

use crate::aggregate::VertexBuffer;

/// Express every vertex relative to `center`.
///
/// Returns a new buffer; `vertices` is left untouched.
pub fn recenter(vertices: &VertexBuffer, center: &Point3) -> VertexBuffer {
    vertices.translated(&-center.coords)
}

/// Inverse of [`recenter`]: move local vertices back to world space.
pub fn restore(vertices: &VertexBuffer, center: &Point3) -> VertexBuffer {
    vertices.translated(&center.coords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{build, CurveInput};
    use crate::ResampleSpec;

    #[test]
    fn test_recenter_subtracts_center() {
        let buffer = VertexBuffer {
            points: vec![Point3::new(1.0, 2.0, 3.0), Point3::new(-4.0, 0.5, 8.0)],
            points_per_curve: 2,
        };
        let local = recenter(&buffer, &Point3::new(1.0, 1.0, 1.0));
        assert_eq!(local.points[0], Point3::new(0.0, 1.0, 2.0));
        assert_eq!(local.points[1], Point3::new(-5.0, -0.5, 7.0));
        // Input untouched
        assert_eq!(buffer.points[0], Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_restore_round_trip() {
        let curves = [CurveInput::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
                Point3::new(4.0, 4.0, 0.0),
            ],
            Point3::new(2.0, 0.5, -1.0),
        )];
        let (world, center) = build(&curves, &ResampleSpec::new(9, false)).unwrap();
        let local = recenter(&world, &center);
        let back = restore(&local, &center);
        assert_eq!(back, world);
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = VertexBuffer {
            points: Vec::new(),
            points_per_curve: 3,
        };
        assert!(recenter(&buffer, &Point3::new(1.0, 1.0, 1.0)).is_empty());
    }
}
