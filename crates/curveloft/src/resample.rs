//! Arc-length resampling of a single polyline.

use curveloft_math::{distance, lerp, Point3};
use tracing::warn;

use crate::error::{MeshError, Result};
use crate::polyline::{arc_length, Polyline};
use crate::ResampleSpec;

/// Resample `polyline` into exactly `spec.segment_count` points evenly spaced
/// by arc length.
///
/// The first output point is the polyline's first point and the last output
/// point is the last point of the walked path, both copied verbatim. With
/// `spec.cyclic` the walked path is closed by the segment back to the first
/// point, so the last output point repeats the first one.
///
/// Interior points are placed by walking a cursor `segment_length` along the
/// path for every point. Whole original segments are consumed while the
/// remaining distance exceeds the distance to the next original vertex; the
/// point is then interpolated inside the segment that fits, and becomes the
/// start of the next measurement.
///
/// # Errors
///
/// * [`MeshError::InvalidSegmentCount`] if fewer than 2 points are requested
/// * [`MeshError::TooFewPoints`] if the polyline has fewer than 2 points
/// * [`MeshError::ZeroLength`] / [`MeshError::NonFiniteLength`] if the path
///   has no usable length
/// * [`MeshError::DegenerateSegment`] if an interpolation lands on a
///   zero-length segment
///
/// # Example
///
/// ```
/// use curveloft::{resample, Point3, Polyline, ResampleSpec};
///
/// let line = Polyline::new(vec![Point3::origin(), Point3::new(10.0, 0.0, 0.0)]);
/// let points = resample(&line, &ResampleSpec::new(3, false)).unwrap();
/// assert_eq!(points[1], Point3::new(5.0, 0.0, 0.0));
/// ```
pub fn resample(polyline: &Polyline, spec: &ResampleSpec) -> Result<Vec<Point3>> {
    spec.validate()?;
    if polyline.len() < 2 {
        return Err(MeshError::TooFewPoints(polyline.len()));
    }

    let path = polyline.closed_points(spec.cyclic);
    let total_length = arc_length(&path, false);
    if !total_length.is_finite() {
        return Err(MeshError::NonFiniteLength(total_length));
    }
    if total_length == 0.0 {
        return Err(MeshError::ZeroLength);
    }

    let segment_length = total_length / (spec.segment_count - 1) as f64;
    walk(&path, segment_length, spec.segment_count)
}

fn walk(path: &[Point3], segment_length: f64, count: usize) -> Result<Vec<Point3>> {
    let last_index = path.len() - 1;
    let mut result = Vec::with_capacity(count);
    result.push(path[0]);

    // Index of the original vertex the cursor last passed, and the point
    // the next measurement starts from.
    let mut vertex = 0;
    let mut cursor = path[0];

    for _ in 0..count.saturating_sub(2) {
        let mut remaining = segment_length;
        let mut to_next = distance(&cursor, &path[vertex + 1]);

        while remaining > to_next && vertex + 1 < last_index {
            vertex += 1;
            cursor = path[vertex];
            remaining -= to_next;
            to_next = distance(&cursor, &path[vertex + 1]);
        }

        let point = if remaining > to_next {
            warn!(
                overshoot = remaining - to_next,
                "resample cursor ran past the end of the curve, clamping"
            );
            path[last_index]
        } else {
            lerp(&cursor, &path[vertex + 1], remaining)
                .ok_or(MeshError::DegenerateSegment(vertex))?
        };

        cursor = point;
        result.push(point);
    }

    result.push(path[last_index]);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyline::cumulative_lengths;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn spec(segment_count: usize, cyclic: bool) -> ResampleSpec {
        ResampleSpec::new(segment_count, cyclic)
    }

    fn polyline(points: &[(f64, f64, f64)]) -> Polyline {
        Polyline::new(points.iter().map(|&(x, y, z)| Point3::new(x, y, z)).collect())
    }

    fn wavy() -> Polyline {
        polyline(&[
            (0.0, 0.0, 0.0),
            (1.3, 0.4, 0.0),
            (2.1, -0.7, 0.5),
            (3.9, 0.2, 1.1),
            (4.4, 1.8, 0.3),
            (6.0, 2.0, -0.2),
        ])
    }

    #[test]
    fn test_straight_line_midpoint() {
        let line = polyline(&[(0.0, 0.0, 0.0), (10.0, 0.0, 0.0)]);
        let points = resample(&line, &spec(3, false)).unwrap();
        assert_eq!(
            points,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(5.0, 0.0, 0.0),
                Point3::new(10.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_exact_point_count() {
        let curve = wavy();
        for count in [2, 3, 4, 7, 16, 51, 1001] {
            for cyclic in [false, true] {
                let points = resample(&curve, &spec(count, cyclic)).unwrap();
                assert_eq!(points.len(), count, "count {count}, cyclic {cyclic}");
            }
        }
    }

    #[test]
    fn test_endpoints_are_verbatim() {
        let curve = wavy();
        let first = curve.points[0];
        let last = *curve.points.last().unwrap();

        let open = resample(&curve, &spec(13, false)).unwrap();
        assert_eq!(open[0], first);
        assert_eq!(open[12], last);

        // A closed walk ends where it started
        let closed = resample(&curve, &spec(13, true)).unwrap();
        assert_eq!(closed[0], first);
        assert_eq!(closed[12], first);
    }

    #[test]
    fn test_corner_lands_on_vertex() {
        let l_shape = polyline(&[(0.0, 0.0, 0.0), (4.0, 0.0, 0.0), (4.0, 4.0, 0.0)]);
        let points = resample(&l_shape, &spec(5, false)).unwrap();
        let expected = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 2.0, 0.0),
            Point3::new(4.0, 4.0, 0.0),
        ];
        for (p, e) in points.iter().zip(expected.iter()) {
            assert_relative_eq!(*p, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_uneven_input_becomes_even() {
        let line = polyline(&[
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.5, 0.0, 0.0),
            (7.0, 0.0, 0.0),
            (10.0, 0.0, 0.0),
        ]);
        let count = 7;
        let points = resample(&line, &spec(count, false)).unwrap();
        let lengths = cumulative_lengths(&points);
        for (i, length) in lengths.iter().enumerate() {
            let expected = 10.0 * i as f64 / (count - 1) as f64;
            assert_abs_diff_eq!(*length, expected, epsilon = 1e-9);
        }
        assert!(lengths.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_even_input_is_idempotent() {
        // Unit-length staircase, already evenly spaced at 5 points
        let stairs = polyline(&[
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.0, 1.0, 0.0),
            (2.0, 1.0, 0.0),
            (2.0, 2.0, 0.0),
        ]);
        let points = resample(&stairs, &spec(5, false)).unwrap();
        for (p, e) in points.iter().zip(stairs.points.iter()) {
            assert_relative_eq!(*p, *e, epsilon = 1e-9);
        }

        let again = resample(&Polyline::new(points.clone()), &spec(5, false)).unwrap();
        for (p, e) in again.iter().zip(points.iter()) {
            assert_relative_eq!(*p, *e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_cyclic_square() {
        let square = polyline(&[
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.0, 1.0, 0.0),
            (0.0, 1.0, 0.0),
        ]);
        // Closed length 4, so 9 points land every 0.5 units
        let points = resample(&square, &spec(9, true)).unwrap();
        let expected = [
            (0.0, 0.0),
            (0.5, 0.0),
            (1.0, 0.0),
            (1.0, 0.5),
            (1.0, 1.0),
            (0.5, 1.0),
            (0.0, 1.0),
            (0.0, 0.5),
            (0.0, 0.0),
        ];
        for (p, &(x, y)) in points.iter().zip(expected.iter()) {
            assert_relative_eq!(*p, Point3::new(x, y, 0.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_interior_points_stay_on_segments() {
        let curve = wavy();
        let points = resample(&curve, &spec(40, false)).unwrap();
        let on_curve = |p: &Point3| {
            curve.points.windows(2).any(|w| {
                let through = distance(&w[0], p) + distance(p, &w[1]);
                (through - distance(&w[0], &w[1])).abs() < 1e-9
            })
        };
        assert!(points.iter().all(on_curve));
    }

    #[test]
    fn test_duplicate_vertices_are_skipped() {
        let line = polyline(&[
            (0.0, 0.0, 0.0),
            (0.0, 0.0, 0.0),
            (2.0, 0.0, 0.0),
            (2.0, 0.0, 0.0),
            (4.0, 0.0, 0.0),
        ]);
        let points = resample(&line, &spec(5, false)).unwrap();
        for (i, p) in points.iter().enumerate() {
            assert_relative_eq!(*p, Point3::new(i as f64, 0.0, 0.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_points_only_copies_endpoints() {
        let curve = wavy();
        let points = resample(&curve, &spec(2, false)).unwrap();
        assert_eq!(points, vec![curve.points[0], curve.points[5]]);
    }

    #[test]
    fn test_zero_length_is_degenerate() {
        let dot = polyline(&[(0.0, 0.0, 0.0), (0.0, 0.0, 0.0)]);
        for count in [2, 3, 10] {
            assert_eq!(
                resample(&dot, &spec(count, false)),
                Err(MeshError::ZeroLength)
            );
            assert_eq!(resample(&dot, &spec(count, true)), Err(MeshError::ZeroLength));
        }
    }

    #[test]
    fn test_tiny_curve_is_resampled() {
        let short = polyline(&[(0.0, 0.0, 0.0), (5e-10, 0.0, 0.0)]);
        let points = resample(&short, &spec(3, false)).unwrap();
        assert_eq!(
            points,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.5e-10, 0.0, 0.0),
                Point3::new(5e-10, 0.0, 0.0),
            ]
        );

        // Spacing scales with the curve, not with an absolute tolerance
        let micro = polyline(&[(0.0, 0.0, 0.0), (1e-10, 0.0, 0.0), (1e-10, 1e-10, 0.0)]);
        let count = 9;
        let points = resample(&micro, &spec(count, false)).unwrap();
        assert_eq!(points.len(), count);
        let lengths = cumulative_lengths(&points);
        for (i, length) in lengths.iter().enumerate() {
            let expected = 2e-10 * i as f64 / (count - 1) as f64;
            assert_relative_eq!(*length, expected, epsilon = 1e-22, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_non_finite_input() {
        let broken = polyline(&[(0.0, 0.0, 0.0), (f64::NAN, 0.0, 0.0)]);
        assert!(matches!(
            resample(&broken, &spec(3, false)),
            Err(MeshError::NonFiniteLength(_))
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        let line = polyline(&[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        assert_eq!(
            resample(&line, &spec(1, false)),
            Err(MeshError::InvalidSegmentCount(1))
        );
        assert_eq!(
            resample(&polyline(&[(0.0, 0.0, 0.0)]), &spec(3, false)),
            Err(MeshError::TooFewPoints(1))
        );
        assert_eq!(
            resample(&Polyline::new(Vec::new()), &spec(3, false)),
            Err(MeshError::TooFewPoints(0))
        );
    }
}
