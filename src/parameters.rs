//! Defines the Denavit-Hartenberg parameter data structures

pub mod dh_kinematics {
    use nalgebra::Vector3;

    use crate::kinematic_traits::Transform;
    use crate::utils::{homogeneous, rot_x, rot_z};

    /// One row of a Denavit-Hartenberg table. See
    /// [parameters_robots.rs](parameters_robots.rs) for concrete robot models.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DhRow {
        /// Twist angle about the previous x-axis, radians.
        pub alpha: f64,

        /// Common-normal length along that x-axis.
        pub a: f64,

        /// Offset along the new z-axis. Units (meters for the bundled
        /// robots) carry through to every pose the solvers produce.
        pub d: f64,
    }

    impl DhRow {
        pub fn new(alpha: f64, a: f64, d: f64) -> Self {
            DhRow { alpha, a, d }
        }

        /// Homogeneous transform of this link for the joint angle `theta`:
        /// `Rot_z(theta) * Trans_x(a) * Rot_x(alpha) * Trans_z(d)`.
        pub fn link_transform(&self, theta: f64) -> Transform {
            let rotation = rot_z(theta) * rot_x(self.alpha);
            let shift = rotation * Vector3::new(self.a, 0.0, 0.0) + Vector3::new(0.0, 0.0, self.d);
            homogeneous(&rotation, &shift)
        }
    }

    /// Ordered DH rows, one per joint. Row order is the joint order; the
    /// analytical solver reads rows 1..6 by their physical meaning
    /// (shoulder, upper arm, forearm, wrist 1..3).
    #[derive(Debug, Clone, PartialEq)]
    pub struct DhTable {
        rows: Vec<DhRow>,
    }

    impl DhTable {
        pub fn new(rows: Vec<DhRow>) -> Self {
            DhTable { rows }
        }

        /// Number of joints described by the table.
        pub fn len(&self) -> usize {
            self.rows.len()
        }

        pub fn is_empty(&self) -> bool {
            self.rows.is_empty()
        }

        pub fn rows(&self) -> &[DhRow] {
            &self.rows
        }
    }

}
