//! Failures of the kinematic computations

use std::fmt;

/// Kinematic operation that has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Forward,
    Inverse,
}

/// Why the requested configuration was classified as unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// Negative discriminant: the loci (three spheres, or a circle and a line) do not
    /// intersect.
    NoIntersection,
    /// Collinear elbow projections or a target in the shoulder plane, the closed form
    /// would divide by zero.
    Degenerate,
    /// NaN or infinity in the inputs or in the result.
    NonFinite,
}

/// The only failure of the kinematic engine. Retrying with the same inputs never succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KinematicsError {
    UnreachableGeometry {
        operation: Operation,
        /// Index of the failing arm (inverse kinematics only).
        arm: Option<usize>,
        cause: Cause,
    },
}

impl KinematicsError {
    pub(crate) fn forward(cause: Cause) -> Self {
        KinematicsError::UnreachableGeometry {
            operation: Operation::Forward,
            arm: None,
            cause,
        }
    }

    pub(crate) fn inverse(arm: usize, cause: Cause) -> Self {
        KinematicsError::UnreachableGeometry {
            operation: Operation::Inverse,
            arm: Some(arm),
            cause,
        }
    }

    pub fn operation(&self) -> Operation {
        match *self {
            KinematicsError::UnreachableGeometry { operation, .. } => operation,
        }
    }

    pub fn arm(&self) -> Option<usize> {
        match *self {
            KinematicsError::UnreachableGeometry { arm, .. } => arm,
        }
    }

    pub fn cause(&self) -> Cause {
        match *self {
            KinematicsError::UnreachableGeometry { cause, .. } => cause,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Operation::Forward => write!(f, "forward kinematics"),
            Operation::Inverse => write!(f, "inverse kinematics"),
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Cause::NoIntersection => write!(f, "no real intersection"),
            Cause::Degenerate => write!(f, "degenerate configuration"),
            Cause::NonFinite => write!(f, "non-finite value"),
        }
    }
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            KinematicsError::UnreachableGeometry {
                operation,
                arm: Some(arm),
                cause,
            } => write!(
                f,
                "Unreachable geometry in {}, arm {}: {}",
                operation,
                arm + 1,
                cause
            ),
            KinematicsError::UnreachableGeometry {
                operation,
                arm: None,
                cause,
            } => write!(f, "Unreachable geometry in {}: {}", operation, cause),
        }
    }
}

impl std::error::Error for KinematicsError {}
