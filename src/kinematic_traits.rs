use nalgebra::Matrix4;

use crate::kinematics_error::KinematicsError;

/// Pose of a link or of the end effector, as a 4x4 homogeneous transform with
/// the canonical `[R t; 0 0 0 1]` layout. The rotation block of every
/// transform returned by this library is orthonormal with determinant +1 up
/// to accumulated floating error, and the last row is exactly `(0, 0, 0, 1)`.
/// ```
/// use nalgebra::Matrix4;
///
/// type Transform = Matrix4<f64>;
///
/// let identity: Transform = Matrix4::identity();
/// assert_eq!(identity[(3, 3)], 1.0);
/// ```
pub type Transform = Matrix4<f64>;

/// One joint-space solution of the analytical solver: six joint angles in
/// radians, each normalized into `[0, 2 PI)`.
pub type Joints = [f64; 6];

/// The analytical solver returns up to 8 solutions, enumerated in a fixed
/// branch order (shoulder, then wrist 2, then elbow). Use `is_valid` in
/// utils.rs to check a solution for finiteness.
pub type Solutions = Vec<Joints>;

pub trait Kinematics {
    /// Pose of the end effector for the given joint angles.
    fn forward(&self, q: &[f64]) -> Result<Transform, KinematicsError>;

    /// Poses of every link frame, base first. Entry 0 is the identity (the
    /// base frame expressed in itself), entry `i` the pose of frame `i` in
    /// base coordinates, and the last entry equals `forward(q)`.
    fn forward_with_joint_poses(&self, q: &[f64]) -> Result<Vec<Transform>, KinematicsError>;

    /// All joint-space branches reaching `pose`; empty when the pose is out
    /// of reach. Uses the default wrist angle when the wrist is aligned.
    ///
    /// # Panics
    ///
    /// The analytical solver reads rows 1..6 of the DH table by their
    /// physical meaning; calling it on a table with fewer than six rows is
    /// a programming error and panics.
    fn inverse(&self, pose: &Transform) -> Solutions;

    /// Like `inverse`, but when the wrist is aligned (joint 5 at 0 or PI)
    /// joint 6 becomes a free parameter and is set to `q6_des`.
    ///
    /// # Panics
    ///
    /// Panics if the DH table has fewer than six rows, as for `inverse`.
    fn inverse_with_wrist(&self, pose: &Transform, q6_des: f64) -> Solutions;
}
