#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, TAU};

    use nalgebra::{Matrix3, Vector3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::kinematic_traits::{Kinematics, Transform};
    use crate::kinematics_impl::{DhKinematics, ZERO_THRESH};
    use crate::parameters::dh_kinematics::DhTable;
    use crate::parameters_robots::dh_kinematics::{ur5_link_coms, ur5_link_masses};
    use crate::tests::test_utils::{
        assert_round_trip, best_branch_error, random_nonsingular_config, ROUND_TRIP_TOL,
    };
    use crate::utils::{homogeneous, invert_homogeneous, pose_error, position_of, rotation_of};

    fn ur5() -> DhKinematics {
        DhKinematics::new(DhTable::ur5())
    }

    #[test]
    fn test_forward_home_pose() {
        let robot = ur5();
        let pose = robot.forward(&[0.0; 6]).unwrap();

        // At the all-zero configuration the arm lies along -x with the
        // flange y-offset summing the wrist offsets.
        let expected_rotation = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 0.0, -1.0,
            0.0, 1.0, 0.0,
        );
        assert!((rotation_of(&pose) - expected_rotation).norm() < 1e-12);
        let expected_position = Vector3::new(-0.81725, -0.19145, -0.005491);
        assert!((position_of(&pose) - expected_position).norm() < 1e-9);

        assert_round_trip(&robot, &pose, &robot.inverse(&pose));
    }

    #[test]
    fn test_forward_bent_pose_and_round_trip() {
        let robot = ur5();
        let q = [FRAC_PI_2, -FRAC_PI_2, FRAC_PI_2, -FRAC_PI_2, -FRAC_PI_2, 0.0];
        let pose = robot.forward(&q).unwrap();

        let expected_position = Vector3::new(0.10915, -0.4869, 0.431859);
        assert!((position_of(&pose) - expected_position).norm() < 1e-9);

        let solutions = robot.inverse(&pose);
        assert_eq!(solutions.len(), 8);
        assert!(best_branch_error(&robot, &pose, &solutions) < 1e-9);
    }

    #[test]
    fn test_enumeration_order_is_stable() {
        let robot = ur5();
        let q = [FRAC_PI_2, -FRAC_PI_2, FRAC_PI_2, -FRAC_PI_2, -FRAC_PI_2, 0.0];
        let pose = robot.forward(&q).unwrap();
        let solutions = robot.inverse(&pose);

        // The first emitted branch is fixed by the (q1, q5, q3) enumeration.
        let first = [
            1.570796326795,
            5.181097572895,
            0.984968084222,
            1.687915976858,
            1.570796326795,
            3.141592653590,
        ];
        for (found, expected) in solutions[0].iter().zip(first) {
            assert!((found - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_translation_target_has_eight_branches() {
        let robot = ur5();
        let target = homogeneous(&Matrix3::identity(), &Vector3::new(0.5, 0.1, 0.3));
        let solutions = robot.inverse(&target);
        assert_eq!(solutions.len(), 8);
        for solution in &solutions {
            let reached = robot.forward(solution).unwrap();
            let (dp, da) = pose_error(&target, &reached);
            assert!(dp < ROUND_TRIP_TOL && da < ROUND_TRIP_TOL);
        }
    }

    #[test]
    fn test_unreachable_target_returns_empty() {
        let robot = ur5();
        let target = homogeneous(&Matrix3::identity(), &Vector3::new(2.0, 0.0, 0.3));
        assert!(robot.inverse(&target).is_empty());
    }

    #[test]
    fn test_base_axis_target_returns_empty() {
        let robot = ur5();
        // A point on the base z-axis degenerates the shoulder equation
        // (A = B = 0): no branch can realize it, none may leak through.
        let target = homogeneous(&Matrix3::identity(), &Vector3::new(0.0, 0.0, 0.5));
        assert!(robot.inverse(&target).is_empty());
    }

    #[test]
    fn test_home_pose_yields_zero_branch() {
        let robot = ur5();
        let pose = robot.forward(&[0.0; 6]).unwrap();
        let solutions = robot.inverse(&pose);

        // The wrist and elbow are both aligned at home, so duplicate
        // branches collapse: six come back, the first being exact zeros.
        assert_eq!(solutions.len(), 6);
        assert!(solutions[0].iter().all(|&angle| angle.abs() < 1e-9));
    }

    #[test]
    fn test_wrist_aligned_case_uses_desired_q6() {
        let robot = ur5();
        let q = [0.3, -1.1, 1.4, -0.7, 0.0, 0.4];
        let pose = robot.forward(&q).unwrap();
        let q6_des = 0.7;
        let solutions = robot.inverse_with_wrist(&pose, q6_des);
        assert_eq!(solutions.len(), 8);

        let mut aligned = 0;
        for solution in &solutions {
            for &angle in solution {
                assert!((0.0..TAU).contains(&angle), "angle {} not normalized", angle);
            }
            if solution[4].sin().abs() < ZERO_THRESH {
                assert_eq!(solution[5], q6_des);
                aligned += 1;
            }
            let reached = robot.forward(solution).unwrap();
            let (dp, da) = pose_error(&pose, &reached);
            assert!(dp < ROUND_TRIP_TOL && da < ROUND_TRIP_TOL);
        }
        assert!(aligned > 0, "expected wrist-aligned branches for this pose");
    }

    #[test]
    fn test_random_round_trip_sweep() {
        let robot = ur5();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let q = random_nonsingular_config(&mut rng);
            let pose = robot.forward(&q).unwrap();
            let solutions = robot.inverse(&pose);

            assert!(solutions.len() <= 8);
            for solution in &solutions {
                for &angle in solution {
                    assert!(angle.is_finite());
                    assert!((0.0..TAU).contains(&angle), "angle {} not normalized", angle);
                }
            }
            assert_round_trip(&robot, &pose, &solutions);
        }
    }

    #[test]
    fn test_chain_pairs_are_dh_links() {
        let robot = ur5();
        let q = [0.3, -1.1, 1.4, -0.7, 1.9, 0.4];
        let chain = robot.forward_with_joint_poses(&q).unwrap();

        assert_eq!(chain[0], Transform::identity());
        for (i, row) in robot.dh().rows().iter().enumerate() {
            let step = invert_homogeneous(&chain[i]) * chain[i + 1];
            let link = row.link_transform(q[i]);
            assert!((step - link).norm() < 1e-12);
        }
        assert_eq!(chain[6], robot.forward(&q).unwrap());
    }

    #[test]
    fn test_ur5e_round_trip() {
        let robot = DhKinematics::new(DhTable::ur5e());
        let q = [0.5, -0.8, 1.0, -0.4, 1.2, 0.3];
        let pose = robot.forward(&q).unwrap();
        let solutions = robot.inverse(&pose);
        assert_eq!(solutions.len(), 8);
        assert!(best_branch_error(&robot, &pose, &solutions) < 1e-9);
    }

    #[test]
    fn test_center_of_mass_home() {
        let robot = ur5();
        let masses = ur5_link_masses();
        let (com, total) = robot
            .center_of_mass(&[0.0; 6], &ur5_link_coms(), &masses)
            .unwrap();

        let expected_total: f64 = masses.iter().sum();
        assert!((total - expected_total).abs() < 1e-12);
        assert!((total - 17.0489).abs() < 1e-9);

        let expected = Vector3::new(-0.321675989360017, -0.078591822281789, 0.074750777475380);
        assert!((com - expected).norm() < 1e-9);
    }

    #[test]
    fn test_com_moves_with_configuration() {
        let robot = ur5();
        let coms = ur5_link_coms();
        let masses = ur5_link_masses();
        let (home, _) = robot.center_of_mass(&[0.0; 6], &coms, &masses).unwrap();
        let (lifted, total) = robot
            .center_of_mass(&[0.0, -FRAC_PI_2, 0.0, 0.0, 0.0, 0.0], &coms, &masses)
            .unwrap();
        // Total mass is configuration independent; the COM is not.
        assert!((total - masses.iter().sum::<f64>()).abs() < 1e-12);
        assert!((home - lifted).norm() > 0.1);
    }

    #[test]
    fn test_round_trip_through_a_rotated_target() {
        let robot = ur5();
        // A pose assembled directly rather than through forward kinematics.
        let rotation = crate::utils::rot_z(0.9) * crate::utils::rot_x(-0.4);
        let target = homogeneous(&rotation, &Vector3::new(0.35, -0.25, 0.42));
        let solutions = robot.inverse(&target);
        assert!(!solutions.is_empty() && solutions.len() <= 8);
        assert_round_trip(&robot, &target, &solutions);
    }

    #[test]
    fn test_manipulability_away_from_singularity_grows() {
        let robot = ur5();
        let singular = crate::jacobian::manipulability(&robot, &[0.0; 6]).unwrap();
        let generic =
            crate::jacobian::manipulability(&robot, &[0.3, -1.1, 1.4, -0.7, 1.9, 0.4]).unwrap();
        assert!(singular < 1e-6);
        assert!(generic > 0.01);
    }
}
