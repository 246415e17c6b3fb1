//! Error types for resampling and lofting.

use thiserror::Error;

use crate::ResampleSpec;

/// Broad category of a [`MeshError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or inconsistent resample settings.
    Config,
    /// The curve batch itself is malformed.
    InputValidation,
    /// A curve has no usable length.
    DegenerateGeometry,
}

/// Errors that can occur while building a mesh from curves.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Fewer than two output points per curve were requested.
    #[error("invalid segment count {0}: at least 2 points per curve are required")]
    InvalidSegmentCount(usize),

    /// The vertex buffer would hold more vertices than `u32` indices can address.
    #[error("{curve_count} curves of {points_per_curve} points exceed the u32 index range")]
    TooManyVertices {
        /// Points per curve requested.
        points_per_curve: usize,
        /// Number of curves in the batch.
        curve_count: usize,
    },

    /// Curves in one batch asked for different resample settings.
    #[error("curves disagree on resample settings: {0:?} vs {1:?}")]
    MismatchedSpecs(ResampleSpec, ResampleSpec),

    /// The batch contains no curves.
    #[error("no curves given")]
    NoCurves,

    /// A polyline has fewer than two points.
    #[error("polyline has {0} points, at least 2 are required")]
    TooFewPoints(usize),

    /// The polyline has zero total length.
    #[error("polyline has zero length")]
    ZeroLength,

    /// The polyline length is NaN or infinite.
    #[error("polyline length is not finite: {0}")]
    NonFiniteLength(f64),

    /// Interpolation was attempted on a zero-length segment.
    #[error("cannot interpolate on zero-length segment {0}")]
    DegenerateSegment(usize),

    /// An error raised while processing one curve of a batch.
    #[error("curve {index}: {source}")]
    InCurve {
        /// Position of the curve in the batch.
        index: usize,
        /// The underlying error.
        source: Box<MeshError>,
    },
}

impl MeshError {
    /// Category of this error. Per-curve errors report their source's kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MeshError::InvalidSegmentCount(_)
            | MeshError::TooManyVertices { .. }
            | MeshError::MismatchedSpecs(..) => ErrorKind::Config,
            MeshError::NoCurves | MeshError::TooFewPoints(_) => ErrorKind::InputValidation,
            MeshError::ZeroLength
            | MeshError::NonFiniteLength(_)
            | MeshError::DegenerateSegment(_) => ErrorKind::DegenerateGeometry,
            MeshError::InCurve { source, .. } => source.kind(),
        }
    }

    pub(crate) fn in_curve(index: usize, source: MeshError) -> Self {
        MeshError::InCurve {
            index,
            source: Box::new(source),
        }
    }
}

/// Result type for curveloft operations.
pub type Result<T> = std::result::Result<T, MeshError>;
