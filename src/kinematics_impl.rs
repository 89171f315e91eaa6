//! Forward kinematics, the closed-form inverse solver and the center-of-mass
//! aggregator for arms described by Denavit-Hartenberg tables.
//!
//! The inverse solver follows the analytical UR decoupling known from
//! `ur_kin.cpp` in the ROS `universal_robot` stack: two shoulder branches,
//! two wrist-2 branches under each, two elbow branches under each of those,
//! eight candidates at most. Branches that cannot close the elbow triangle
//! are skipped; an unreachable pose yields an empty solution set.

use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::kinematic_traits::{Kinematics, Solutions, Transform};
use crate::kinematics_error::KinematicsError;
use crate::parameters::dh_kinematics::DhTable;
use crate::utils::dh_kinematics::is_valid;
use crate::utils::{sign, transform_point};

/// Magnitudes below this threshold are treated as exact zeros in every
/// branch decision of the inverse solver.
pub const ZERO_THRESH: f64 = 1e-8;

/// Margin (a quarter of a degree) by which sampled configurations should
/// stay clear of singular loci.
pub const ANGLE_MARGIN: f64 = PI / 720.0;

/// Wrist-3 angle used by [`Kinematics::inverse`] when the wrist is aligned
/// and joint 6 becomes a free parameter.
pub const DEFAULT_WRIST_ANGLE: f64 = 0.0;

/// Stateless solver over an owned DH table. All operations are pure
/// functions of their inputs, so one instance can serve many threads.
pub struct DhKinematics {
    dh: DhTable,
}

impl DhKinematics {
    /// Creates a new `DhKinematics` instance over the given table.
    pub fn new(dh: DhTable) -> Self {
        DhKinematics { dh }
    }

    pub fn dh(&self) -> &DhTable {
        &self.dh
    }

    fn expect_joint_count(&self, found: usize) -> Result<(), KinematicsError> {
        if found != self.dh.len() {
            return Err(KinematicsError::ShapeMismatch {
                expected: self.dh.len(),
                found,
            });
        }
        Ok(())
    }

    /// Mass-weighted average of the per-link COM positions in base
    /// coordinates, along with the total mass. `coms` holds each link's
    /// center of mass in that link's own frame; both tables are
    /// index-aligned with the DH table. The base frame carries no link.
    pub fn center_of_mass(
        &self,
        q: &[f64],
        coms: &[Vector3<f64>],
        masses: &[f64],
    ) -> Result<(Vector3<f64>, f64), KinematicsError> {
        self.expect_joint_count(q.len())?;
        self.expect_joint_count(coms.len())?;
        self.expect_joint_count(masses.len())?;
        let total: f64 = masses.iter().sum();
        if total <= 0.0 {
            return Err(KinematicsError::EmptyMass);
        }
        let frames = self.forward_with_joint_poses(q)?;
        let mut com = Vector3::zeros();
        for (i, frame) in frames[1..].iter().enumerate() {
            com += transform_point(frame, &coms[i]) * (masses[i] / total);
        }
        Ok((com, total))
    }
}

/// Snap angles within the zero threshold of 0 or of a full turn to exact
/// zero, then shift negatives into `[0, 2 PI)`.
fn normalized(angle: f64) -> f64 {
    let angle = if angle.abs() < ZERO_THRESH || (angle - 2.0 * PI).abs() < ZERO_THRESH {
        0.0
    } else {
        angle
    };
    if angle < 0.0 { angle + 2.0 * PI } else { angle }
}

impl Kinematics for DhKinematics {
    fn forward(&self, q: &[f64]) -> Result<Transform, KinematicsError> {
        self.expect_joint_count(q.len())?;
        let mut effector = Transform::identity();
        for (row, &theta) in self.dh.rows().iter().zip(q) {
            effector *= row.link_transform(theta);
        }
        Ok(effector)
    }

    fn forward_with_joint_poses(&self, q: &[f64]) -> Result<Vec<Transform>, KinematicsError> {
        self.expect_joint_count(q.len())?;
        let mut chain = Vec::with_capacity(q.len() + 1);
        let mut effector = Transform::identity();
        chain.push(effector);
        for (row, &theta) in self.dh.rows().iter().zip(q) {
            effector *= row.link_transform(theta);
            chain.push(effector);
        }
        Ok(chain)
    }

    fn inverse(&self, pose: &Transform) -> Solutions {
        self.inverse_with_wrist(pose, DEFAULT_WRIST_ANGLE)
    }

    fn inverse_with_wrist(&self, pose: &Transform, q6_des: f64) -> Solutions {
        let rows = self.dh.rows();
        assert!(
            rows.len() >= 6,
            "the analytical solver needs the six UR rows, table has {}",
            rows.len()
        );
        let a2 = rows[1].a;
        let a3 = rows[2].a;
        let d1 = rows[0].d;
        let d4 = rows[3].d;
        let d5 = rows[4].d;
        let d6 = rows[5].d;

        let t00 = pose[(0, 0)];
        let t01 = pose[(0, 1)];
        let t02 = pose[(0, 2)];
        let t03 = pose[(0, 3)];
        let t10 = pose[(1, 0)];
        let t11 = pose[(1, 1)];
        let t12 = pose[(1, 2)];
        let t13 = pose[(1, 3)];
        let t20 = pose[(2, 0)];
        let t21 = pose[(2, 1)];
        let t22 = pose[(2, 2)];
        let t23 = pose[(2, 3)];

        let a = d6 * t12 - t13;
        let b = d6 * t02 - t03;
        let r = a * a + b * b;

        // Shoulder rotation, three regimes depending on which of A, B vanishes.
        let q1: [f64; 2];
        if a.abs() < ZERO_THRESH {
            let div = if (d4.abs() - b.abs()).abs() < ZERO_THRESH {
                -sign(d4) * sign(b)
            } else {
                -d4 / b
            };
            let arcsin = div.asin();
            let arcsin = if arcsin.abs() < ZERO_THRESH { 0.0 } else { arcsin };
            q1 = [
                if arcsin < 0.0 { arcsin + 2.0 * PI } else { arcsin },
                PI - arcsin,
            ];
        } else if b.abs() < ZERO_THRESH {
            let div = if (d4.abs() - a.abs()).abs() < ZERO_THRESH {
                sign(d4) * sign(a)
            } else {
                d4 / a
            };
            let arccos = div.acos();
            q1 = [arccos, 2.0 * PI - arccos];
        } else if d4 * d4 > r {
            // The shoulder cannot offset far enough sideways: out of reach.
            return Solutions::new();
        } else {
            let arccos = (d4 / r.sqrt()).acos();
            let arctan = (-b).atan2(a);
            q1 = [normalized(arccos + arctan), normalized(-arccos + arctan)];
        }

        // Wrist 2, two branches under each shoulder branch.
        let mut q5 = [[0.0; 2]; 2];
        for i in 0..2 {
            let numer = t03 * q1[i].sin() - t13 * q1[i].cos() - d4;
            let div = if (numer.abs() - d6.abs()).abs() < ZERO_THRESH {
                sign(numer) * sign(d6)
            } else {
                numer / d6
            };
            let arccos = div.acos();
            q5[i] = [arccos, 2.0 * PI - arccos];
        }

        let mut solutions = Solutions::new();
        for i in 0..2 {
            for j in 0..2 {
                let (s1, c1) = q1[i].sin_cos();
                let (s5, c5) = q5[i][j].sin_cos();

                // Wrist 3, a free parameter when the wrist is aligned.
                let q6 = if s5.abs() < ZERO_THRESH {
                    q6_des
                } else {
                    normalized(
                        (sign(s5) * -(t01 * s1 - t11 * c1))
                            .atan2(sign(s5) * (t00 * s1 - t10 * c1)),
                    )
                };
                let (s6, c6) = q6.sin_cos();

                // Planar reduction of the remaining RRR chain.
                let x04x = -s5 * (t02 * c1 + t12 * s1)
                    - c5 * (s6 * (t01 * c1 + t11 * s1) - c6 * (t00 * c1 + t10 * s1));
                let x04y = c5 * (t20 * c6 - t21 * s6) - t22 * s5;
                let p13x = d5 * (s6 * (t00 * c1 + t10 * s1) + c6 * (t01 * c1 + t11 * s1))
                    - d6 * (t02 * c1 + t12 * s1)
                    + t03 * c1
                    + t13 * s1;
                let p13y = t23 - d1 - d6 * t22 + d5 * (t21 * c6 + t20 * s6);

                let mut c3 = (p13x * p13x + p13y * p13y - a2 * a2 - a3 * a3) / (2.0 * a2 * a3);
                if (c3.abs() - 1.0).abs() < ZERO_THRESH {
                    c3 = sign(c3);
                } else if c3.abs() > 1.0 {
                    // This leaf cannot close the elbow triangle.
                    continue;
                }
                let arccos = c3.acos();
                let q3 = [arccos, 2.0 * PI - arccos];
                let denom = a2 * a2 + a3 * a3 + 2.0 * a2 * a3 * c3;
                let s3 = arccos.sin();
                let elbow_a = a2 + a3 * c3;
                let elbow_b = a3 * s3;
                let q2 = [
                    ((elbow_a * p13y - elbow_b * p13x) / denom)
                        .atan2((elbow_a * p13x + elbow_b * p13y) / denom),
                    ((elbow_a * p13y + elbow_b * p13x) / denom)
                        .atan2((elbow_a * p13x - elbow_b * p13y) / denom),
                ];

                for k in 0..2 {
                    let (s23, c23) = (q2[k] + q3[k]).sin_cos();
                    let q4 = (c23 * x04y - s23 * x04x).atan2(x04x * c23 + x04y * s23);
                    let candidate = [
                        normalized(q1[i]),
                        normalized(q2[k]),
                        normalized(q3[k]),
                        normalized(q4),
                        normalized(q5[i][j]),
                        normalized(q6),
                    ];
                    // A NaN from a failed trigonometric inversion marks a
                    // branch the arm geometry cannot realize.
                    if is_valid(&candidate) {
                        solutions.push(candidate);
                    }
                }
            }
        }
        solutions
    }
}
