use thiserror::Error;

/// Every failure a spline operation can report.
///
/// All variants are deterministic functions of the inputs: there is nothing
/// to retry, and callers either validate up front or surface the message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("control point dimension must be at least 1")]
    DimensionZero,

    #[error("degree {degree} must be smaller than the number of control points {n_ctrlp}")]
    DegreeTooHigh { degree: usize, n_ctrlp: usize },

    #[error("failed to allocate backing storage")]
    AllocationFailure,

    #[error("knot multiplicity {multiplicity} exceeds curve order {order}")]
    MultiplicityExceeded { multiplicity: usize, order: usize },

    #[error("curve is undefined at parameter {0}")]
    ParameterUndefined(f64),

    #[error("invalid curve data: {0}")]
    InvalidCurve(String),
}

pub type Result<T> = std::result::Result<T, SplineError>;
