//! Velocity Jacobian, manipulability and differential kinematics.

use nalgebra::linalg::SVD;
use nalgebra::{DMatrix, DVector, Vector3, Vector6};

use crate::kinematic_traits::Kinematics;
use crate::kinematics_error::KinematicsError;
use crate::kinematics_impl::DhKinematics;
use crate::utils::position_of;

/// Struct representing the Jacobian matrix
pub struct Jacobian {
    /// A 6xN matrix mapping joint velocities to end-effector velocities.
    /// Each column corresponds to a joint; the top three rows are the linear
    /// velocity contribution, the bottom three the angular one.
    matrix: DMatrix<f64>,

    /// Singular values below this cutoff are dropped by the pseudo-inverse
    epsilon: f64,
}

impl Jacobian {
    /// Computes the Jacobian for the given robot and joint configuration.
    /// `epsilon` is the singular-value cutoff used when a pseudo-inverse is
    /// needed to invert the matrix.
    pub fn new(robot: &DhKinematics, q: &[f64], epsilon: f64) -> Result<Self, KinematicsError> {
        let matrix = compute_jacobian(robot, q)?;
        Ok(Self { matrix, epsilon })
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Yoshikawa's manipulability index, `sqrt(det(J * J^T))`. Zero at
    /// singular configurations, strictly positive otherwise. Tiny negative
    /// determinants from floating noise are clamped before the square root.
    pub fn manipulability(&self) -> f64 {
        let jjt = &self.matrix * self.matrix.transpose();
        jjt.determinant().max(0.0).sqrt()
    }

    /// Computes the joint velocities required to achieve a desired
    /// end-effector velocity (linear in the top three components, angular in
    /// the bottom three).
    ///
    /// Uses the exact inverse when the Jacobian is square and invertible,
    /// otherwise falls back to the SVD pseudo-inverse.
    pub fn velocities(
        &self,
        desired_end_effector_velocity: &Vector6<f64>,
    ) -> Result<DVector<f64>, &'static str> {
        let desired = DVector::from_column_slice(desired_end_effector_velocity.as_slice());
        if self.matrix.is_square() {
            if let Some(jacobian_inverse) = self.matrix.clone().try_inverse() {
                return Ok(jacobian_inverse * desired);
            }
        }
        let svd = SVD::new(self.matrix.clone(), true, true);
        match svd.pseudo_inverse(self.epsilon) {
            Ok(jacobian_pseudoinverse) => Ok(jacobian_pseudoinverse * desired),
            Err(_) => Err("Unable to compute the pseudoinverse of the Jacobian matrix"),
        }
    }
}

/// Assembles the 6xN spatial Jacobian from the link frame chain. Column `i`
/// is `[z_i x (d_n - d_i); z_i]` in base coordinates, where `z_i` is the
/// z-axis of frame `i` (before joint `i+1` is applied), `d_i` the origin of
/// frame `i` and `d_n` the end-effector origin. The base z-axis contributes
/// the first column; the end-effector frame contributes none.
pub fn compute_jacobian(robot: &DhKinematics, q: &[f64]) -> Result<DMatrix<f64>, KinematicsError> {
    let chain = robot.forward_with_joint_poses(q)?;
    // The chain always holds q.len() + 1 frames, base first.
    let d_n = position_of(&chain[q.len()]);

    let mut jacobian = DMatrix::zeros(6, q.len());
    for (i, frame) in chain[..q.len()].iter().enumerate() {
        let d_i = position_of(frame);
        let z_i = Vector3::new(frame[(0, 2)], frame[(1, 2)], frame[(2, 2)]);
        let linear = z_i.cross(&(d_n - d_i));
        jacobian.fixed_view_mut::<3, 1>(0, i).copy_from(&linear);
        jacobian.fixed_view_mut::<3, 1>(3, i).copy_from(&z_i);
    }
    Ok(jacobian)
}

/// Yoshikawa manipulability of a configuration, as a free function.
pub fn manipulability(robot: &DhKinematics, q: &[f64]) -> Result<f64, KinematicsError> {
    let jacobian = compute_jacobian(robot, q)?;
    let jjt = &jacobian * jacobian.transpose();
    Ok(jjt.determinant().max(0.0).sqrt())
}
