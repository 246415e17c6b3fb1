#![warn(missing_docs)]

//! Math types for curveloft.
//!
//! Thin wrappers around nalgebra: the point and vector aliases used across
//! the workspace, the two primitives the arc-length resampler is built on
//! ([`distance`] and [`lerp`]), and the object [`Transform`] hosts use to
//! bring curve samples into world space.

use nalgebra::{Matrix4, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Euclidean distance between two points.
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    (b - a).norm()
}

/// The point at absolute distance `dist` from `a` along the segment `a → b`.
///
/// Computed as `a + (dist / |b - a|) * (b - a)`, so `dist` larger than the
/// segment length extrapolates past `b`. Returns `None` when `a` and `b`
/// coincide and the direction is undefined.
pub fn lerp(a: &Point3, b: &Point3, dist: f64) -> Option<Point3> {
    let span = distance(a, b);
    if span == 0.0 {
        return None;
    }
    let percent = dist / span;
    Some(*a + (b - a) * percent)
}

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `offset`.
    pub fn translation(offset: Vec3) -> Self {
        Self {
            matrix: Matrix4::new_translation(&offset),
        }
    }

    /// Non-uniform scale by `factor`.
    pub fn scale(factor: Vec3) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&factor),
        }
    }

    /// Rotation by Euler angles in radians, applied X first, then Y, then Z.
    pub fn rotation_xyz(angles: Vec3) -> Self {
        let rx = Matrix4::from_axis_angle(&Vector3::x_axis(), angles.x);
        let ry = Matrix4::from_axis_angle(&Vector3::y_axis(), angles.y);
        let rz = Matrix4::from_axis_angle(&Vector3::z_axis(), angles.z);
        Self {
            matrix: rz * ry * rx,
        }
    }

    /// Object-to-world transform: scale, then rotate, then move to `location`.
    pub fn from_location_rotation_scale(location: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self::translation(location)
            .then(&Self::rotation_xyz(rotation))
            .then(&Self::scale(scale))
    }

    /// Compose: `self * other`, so `other` is applied first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
