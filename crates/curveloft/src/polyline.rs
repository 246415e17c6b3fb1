//! Polyline input type and arc-length helpers.

use curveloft_math::{distance, Point3};

/// An ordered run of points approximating a curve with straight segments.
///
/// Points are expected in a coordinate space shared by every curve of a
/// batch. A polyline needs at least two points to be resampled; that is
/// checked by [`resample`](crate::resample), not on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Vertices in order.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Create a polyline from points.
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polyline has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arc length, including the closing segment when `cyclic`.
    pub fn length(&self, cyclic: bool) -> f64 {
        arc_length(&self.points, cyclic)
    }

    /// Vertices with the first point appended again when `cyclic`.
    pub(crate) fn closed_points(&self, cyclic: bool) -> Vec<Point3> {
        let mut points = Vec::with_capacity(self.points.len() + 1);
        points.extend_from_slice(&self.points);
        if cyclic {
            if let Some(first) = self.points.first() {
                points.push(*first);
            }
        }
        points
    }
}

impl From<Vec<Point3>> for Polyline {
    fn from(points: Vec<Point3>) -> Self {
        Self::new(points)
    }
}

/// Sum of distances between consecutive points.
///
/// With `cyclic` the segment from the last point back to the first is added.
pub fn arc_length(points: &[Point3], cyclic: bool) -> f64 {
    let open: f64 = points.windows(2).map(|w| distance(&w[0], &w[1])).sum();
    match (cyclic, points.first(), points.last()) {
        (true, Some(first), Some(last)) if points.len() > 1 => open + distance(last, first),
        _ => open,
    }
}

/// Arc length from the first point to every point, starting at `0.0`.
pub fn cumulative_lengths(points: &[Point3]) -> Vec<f64> {
    let mut lengths = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += distance(&points[i - 1], p);
        }
        lengths.push(total);
    }
    lengths
}
