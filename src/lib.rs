//! Rust implementation of forward and closed-form inverse kinematics for
//! six-axis industrial robots described by Denavit-Hartenberg tables
//!
//! The inverse solver implements the analytical decoupling for UR-style arms
//! (parallel shoulder/elbow with the UR wrist geometry), as known from
//! `ur_kin.cpp` in the ROS [universal_robot](https://github.com/ros-industrial/universal_robot)
//! stack. Given a target end-effector pose it enumerates up to eight
//! joint-space branches: two shoulder rotations, two wrist-2 angles under
//! each, and elbow-up/elbow-down under each of those.
//!
//! # Features
//!
//! - Forward kinematics for the end effector alone or for the full chain of
//!   link frames (base identity first), driven by a plain DH table.
//! - All returned inverse solutions are real, normalized into `[0, 2 PI)`,
//!   and reproduce the target pose under forward kinematics; an unreachable
//!   pose yields an empty set rather than an error.
//! - For the kinematic singularity at J5 = 0 or J5 = 180 degrees, the wrist-3
//!   angle becomes a free parameter and the caller may pick it.
//! - Geometric 6xN velocity Jacobian, Yoshikawa manipulability, and joint
//!   velocities for a desired end-effector twist.
//! - Pose comparison (Euclidean position error plus worst-axis orientation
//!   error) and a configuration-dependent whole-robot center of mass.
//! - Bundled UR5 and UR5e tables with UR5 per-link COM and mass data.
//!
//! # Parameters
//!
//! The solvers are driven by a [`parameters::dh_kinematics::DhTable`]: one
//! `(alpha, a, d)` row per joint, with the joint angle supplied at call
//! time. The analytical inverse additionally assumes the UR row layout
//! (nonzero `a2`, `a3`; offsets `d1`, `d4`, `d5`, `d6`). Angles are radians
//! throughout; translation units are whatever the table uses.

pub mod parameters;
pub mod parameters_robots;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_error;
pub mod kinematics_impl;

pub mod jacobian;

#[cfg(test)]
mod tests;
