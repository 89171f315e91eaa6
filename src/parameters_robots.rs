//! Hardcoded DH, COM and mass tables for a few robots

pub mod dh_kinematics {
    use std::f64::consts::FRAC_PI_2;

    use nalgebra::Vector3;

    use crate::parameters::dh_kinematics::{DhRow, DhTable};

    /// Lateral offset that places link 2 (and its COM) where it belongs in
    /// space. Rows 2 and 3 of the UR5 table carry it with opposite signs;
    /// the table is taken as authoritative data.
    pub const UR5_DIST_MOD: f64 = 0.10915;

    #[allow(dead_code)]
    impl DhTable {
        /// Universal Robots UR5, meters and radians.
        pub fn ur5() -> Self {
            DhTable::new(vec![
                //         alpha       a        d
                DhRow::new(FRAC_PI_2, 0.0, 0.089159),
                DhRow::new(0.0, -0.425, UR5_DIST_MOD),
                DhRow::new(0.0, -0.39225, -UR5_DIST_MOD),
                DhRow::new(FRAC_PI_2, 0.0, 0.10915),
                DhRow::new(-FRAC_PI_2, 0.0, 0.09465),
                DhRow::new(0.0, 0.0, 0.0823),
            ])
        }

        /// Universal Robots UR5e, the e-series sibling of the UR5.
        pub fn ur5e() -> Self {
            DhTable::new(vec![
                //         alpha       a        d
                DhRow::new(FRAC_PI_2, 0.0, 0.1625),
                DhRow::new(0.0, -0.425, 0.0),
                DhRow::new(0.0, -0.392, 0.0),
                DhRow::new(FRAC_PI_2, 0.0, 0.1333),
                DhRow::new(-FRAC_PI_2, 0.0, 0.0997),
                DhRow::new(0.0, 0.0, 0.0996),
            ])
        }
    }

    /// Per-link centers of mass of the UR5, each expressed in its own link
    /// frame. Index-aligned with [`DhTable::ur5`].
    pub fn ur5_link_coms() -> Vec<Vector3<f64>> {
        vec![
            //           x        y         z
            Vector3::new(0.0000, -0.02561, 0.00193),
            Vector3::new(0.2125, 0.0000, 0.11336 - UR5_DIST_MOD),
            Vector3::new(0.1500, 0.0000, 0.0265),
            Vector3::new(0.0000, -0.0018, 0.01634),
            Vector3::new(0.0000, 0.0018, 0.01634),
            Vector3::new(0.0000, 0.0000, -0.001159),
        ]
    }

    /// Per-link masses of the UR5 in kilograms, index-aligned with the DH table.
    pub fn ur5_link_masses() -> Vec<f64> {
        vec![3.7000, 8.3930, 2.3300, 1.2190, 1.2190, 0.1879]
    }

}
