//! Error handling for the kinematics core

/// Structural failures surfaced by forward kinematics, the Jacobian and the
/// center-of-mass aggregator. An unreachable inverse-kinematics target is not
/// an error; the solver signals it with an empty solution set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KinematicsError {
    /// A joint vector or per-link table does not match the DH table length.
    ShapeMismatch { expected: usize, found: usize },
    /// The mass table sums to zero (or less), so no center of mass exists.
    EmptyMass,
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicsError::ShapeMismatch { expected, found } =>
                write!(f, "Shape mismatch: expected {} entries, found {}", expected, found),
            KinematicsError::EmptyMass =>
                write!(f, "Empty mass: the mass table must have a positive total"),
        }
    }
}

impl std::error::Error for KinematicsError {}
