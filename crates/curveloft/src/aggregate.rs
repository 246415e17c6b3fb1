//! Resampling a batch of curves into one flat vertex buffer.

use std::ops::Index;

use curveloft_math::{Point3, Vec3};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{MeshError, Result};
use crate::polyline::Polyline;
use crate::resample::resample;
use crate::ResampleSpec;

/// One input curve: its polyline in world space and its designated origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveInput {
    /// Sampled curve vertices.
    pub polyline: Polyline,
    /// Placement of the source curve, averaged into the mesh center.
    pub origin: Point3,
}

impl CurveInput {
    /// Create a curve input.
    pub fn new(polyline: impl Into<Polyline>, origin: Point3) -> Self {
        Self {
            polyline: polyline.into(),
            origin,
        }
    }
}

/// Resampled curves laid out one after another.
///
/// Point `j` of curve `i` lives at index `i * points_per_curve + j`; the
/// topology builder relies on this layout.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    /// All points, curve by curve.
    pub points: Vec<Point3>,
    /// Number of points every curve contributes.
    pub points_per_curve: usize,
}

impl VertexBuffer {
    /// Number of curves in the buffer.
    pub fn curve_count(&self) -> usize {
        if self.points_per_curve == 0 {
            0
        } else {
            self.points.len() / self.points_per_curve
        }
    }

    /// Total number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the buffer holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Flat index of point `point` of curve `curve`.
    pub fn index_of(&self, curve: usize, point: usize) -> usize {
        curve * self.points_per_curve + point
    }

    /// Points of one curve.
    pub fn curve(&self, curve: usize) -> &[Point3] {
        let start = self.index_of(curve, 0);
        &self.points[start..start + self.points_per_curve]
    }

    /// Copy of the buffer with every point moved by `offset`.
    pub fn translated(&self, offset: &Vec3) -> VertexBuffer {
        VertexBuffer {
            points: self.points.iter().map(|p| Point3::from(p.coords + offset)).collect(),
            points_per_curve: self.points_per_curve,
        }
    }
}

impl Index<usize> for VertexBuffer {
    type Output = Point3;

    fn index(&self, index: usize) -> &Point3 {
        &self.points[index]
    }
}

/// Resample every curve and concatenate the results in input order.
///
/// Returns the buffer together with the mean of the curve origins. Every
/// curve is checked before any work starts, and an error in any curve
/// aborts the whole batch: curves are never dropped from the output.
///
/// # Errors
///
/// * [`MeshError::InvalidSegmentCount`] for a bad `spec`
/// * [`MeshError::NoCurves`] if `curves` is empty
/// * [`MeshError::InCurve`] wrapping the first failing curve's error
pub fn build(curves: &[CurveInput], spec: &ResampleSpec) -> Result<(VertexBuffer, Point3)> {
    spec.validate()?;
    if curves.is_empty() {
        return Err(MeshError::NoCurves);
    }
    for (index, curve) in curves.iter().enumerate() {
        if curve.polyline.len() < 2 {
            return Err(MeshError::in_curve(
                index,
                MeshError::TooFewPoints(curve.polyline.len()),
            ));
        }
    }

    let resampled: Vec<Vec<Point3>> = curves
        .par_iter()
        .enumerate()
        .map(|(index, curve)| {
            resample(&curve.polyline, spec).map_err(|e| MeshError::in_curve(index, e))
        })
        .collect::<Result<_>>()?;

    let mut points = Vec::with_capacity(curves.len() * spec.segment_count);
    let mut origin_sum = Vec3::zeros();
    for (index, (curve, samples)) in curves.iter().zip(resampled).enumerate() {
        debug!(
            curve = index,
            input_points = curve.polyline.len(),
            length = curve.polyline.length(spec.cyclic),
            "resampled curve"
        );
        points.extend(samples);
        origin_sum += curve.origin.coords;
    }

    let center = Point3::from(origin_sum / curves.len() as f64);
    Ok((
        VertexBuffer {
            points,
            points_per_curve: spec.segment_count,
        },
        center,
    ))
}
