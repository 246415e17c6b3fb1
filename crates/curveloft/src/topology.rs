//! Edge and quad-face index generation for resampled curves.

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, Result};

/// Connectivity of a resampled vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topology {
    /// Polyline edges, produced for a single curve.
    Edges(Vec<[u32; 2]>),
    /// Quad faces across adjacent curves, produced for two or more curves.
    Faces(Vec<[u32; 4]>),
}

impl Topology {
    /// Edge list, if this is an edge topology.
    pub fn edges(&self) -> Option<&[[u32; 2]]> {
        match self {
            Topology::Edges(edges) => Some(edges),
            Topology::Faces(_) => None,
        }
    }

    /// Face list, if this is a face topology.
    pub fn faces(&self) -> Option<&[[u32; 4]]> {
        match self {
            Topology::Edges(_) => None,
            Topology::Faces(faces) => Some(faces),
        }
    }

    /// Number of edges or faces.
    pub fn len(&self) -> usize {
        match self {
            Topology::Edges(edges) => edges.len(),
            Topology::Faces(faces) => faces.len(),
        }
    }

    /// Check if there are no edges or faces.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every index referenced, edge by edge or face by face.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        let (edges, faces) = match self {
            Topology::Edges(edges) => (edges.as_slice(), &[][..]),
            Topology::Faces(faces) => (&[][..], faces.as_slice()),
        };
        edges
            .iter()
            .flatten()
            .chain(faces.iter().flatten())
            .copied()
    }
}

/// Build the connectivity for `curve_count` curves of `points_per_curve`
/// points each, laid out curve after curve.
///
/// One curve yields an open polyline. Several curves form a grid with one row
/// per curve: each quad joins two neighbouring points of one curve with the
/// matching points of the next curve. Rows never wrap from the last column
/// back to the first, even for cyclic curves.
///
/// # Errors
///
/// * [`MeshError::NoCurves`] if `curve_count` is zero
/// * [`MeshError::InvalidSegmentCount`] if `points_per_curve` is below 2
/// * [`MeshError::TooManyVertices`] if some vertex index would not fit in a `u32`
pub fn build_topology(points_per_curve: usize, curve_count: usize) -> Result<Topology> {
    if curve_count == 0 {
        return Err(MeshError::NoCurves);
    }
    if points_per_curve < 2 {
        return Err(MeshError::InvalidSegmentCount(points_per_curve));
    }
    let addressable = points_per_curve
        .checked_mul(curve_count)
        .is_some_and(|total| u32::try_from(total - 1).is_ok());
    if !addressable {
        return Err(MeshError::TooManyVertices {
            points_per_curve,
            curve_count,
        });
    }

    if curve_count == 1 {
        Ok(Topology::Edges(polyline_edges(points_per_curve, curve_count)))
    } else {
        Ok(Topology::Faces(grid_faces(points_per_curve, curve_count)))
    }
}

// Callers guarantee every index below `points_per_curve * curve_count` fits in a u32.
fn polyline_edges(points_per_curve: usize, curve_count: usize) -> Vec<[u32; 2]> {
    let total = points_per_curve * curve_count;
    (1..total)
        // Never joins the last point of one curve to the first of the next
        .filter(|i| i % points_per_curve != 0)
        .map(|i| [(i - 1) as u32, i as u32])
        .collect()
}

fn grid_faces(points_per_curve: usize, curve_count: usize) -> Vec<[u32; 4]> {
    let s = points_per_curve;
    let mut faces = Vec::with_capacity((s - 1) * (curve_count - 1));
    for col in 0..s - 1 {
        for row in 0..curve_count - 1 {
            let base = row * s + col;
            if (base + 1) % s == 0 {
                continue;
            }
            faces.push([
                base as u32,
                (base + 1) as u32,
                (base + s + 1) as u32,
                (base + s) as u32,
            ]);
        }
    }
    faces
}
