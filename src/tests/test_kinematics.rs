#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::geometry::RobotGeometry;
    use crate::kinematic_traits::{
        ARM_1, ARM_2, ARM_3, JOINTS_AT_ZERO, JointAngles, Kinematics, Position,
    };
    use crate::kinematics_error::{Cause, KinematicsError, Operation};
    use crate::kinematics_impl::DeltaKinematics;

    const ROUND_TRIP_TOLERANCE: f64 = 1e-3; // degrees

    fn reference_robot() -> DeltaKinematics {
        DeltaKinematics::new(RobotGeometry::default())
    }

    fn assert_round_trip(robot: &DeltaKinematics, joints: &JointAngles) {
        let position = robot.forward(joints)
            .unwrap_or_else(|e| panic!("{:?}: {}", joints, e));
        let back = robot.inverse(&position)
            .unwrap_or_else(|e| panic!("{:?} -> {:?}: {}", joints, position.as_slice(), e));
        for arm in 0..3 {
            assert!(
                (back[arm] - joints[arm]).abs() < ROUND_TRIP_TOLERANCE,
                "Round trip of {:?} returned {:?}", joints, back
            );
        }
    }

    #[test]
    fn test_zero_pose() {
        let position = reference_robot().forward(&JOINTS_AT_ZERO).unwrap();
        assert!(position.x.abs() < 0.01, "x = {}", position.x);
        assert!(position.y.abs() < 0.01, "y = {}", position.y);
        assert!((position.z - -277.198).abs() < 0.01, "z = {}", position.z);
    }

    #[test]
    fn test_symmetric_pose() {
        let position = reference_robot().forward(&[5.0, 10.0, 15.0]).unwrap();
        assert!((position.x - 13.131).abs() < 0.01, "x = {}", position.x);
        assert!((position.y - -22.505).abs() < 0.01, "y = {}", position.y);
        assert!((position.z - -294.011).abs() < 0.01, "z = {}", position.z);
    }

    #[test]
    fn test_equal_angles_stay_on_axis() {
        let robot = reference_robot();
        for theta in [-30.0, 0.0, 25.0, 60.0] {
            let position = robot.forward(&[theta; 3]).unwrap();
            assert!(
                position.x.abs() < 1e-9 && position.y.abs() < 1e-9,
                "{theta}: {:?}",
                position.as_slice()
            );
        }
    }

    #[test]
    fn test_deeper_with_larger_angles() {
        let robot = reference_robot();
        let high = robot.forward(&[-20.0; 3]).unwrap();
        let low = robot.forward(&[40.0; 3]).unwrap();
        assert!(low.z < high.z);
    }

    #[test]
    fn test_round_trip_grid() {
        let robot = reference_robot();
        let angles: Vec<f64> = (-4..=8).map(|i| i as f64 * 10.0).collect();
        for &t1 in &angles {
            for &t2 in &angles {
                for &t3 in &angles {
                    assert_round_trip(&robot, &[t1, t2, t3]);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_random() {
        let robot = reference_robot();
        let mut rng = StdRng::seed_from_u64(20240917);
        for _ in 0..10_000 {
            let joints: JointAngles = std::array::from_fn(|_| rng.gen_range(-40.0..85.0));
            assert_round_trip(&robot, &joints);
        }
    }

    #[test]
    fn test_round_trip_other_geometry() {
        let robot = DeltaKinematics::new(RobotGeometry::new(150.0, 120.0, 400.0, 45.0, 600.0));
        assert_round_trip(&robot, &[0.0, 0.0, 0.0]);
        assert_round_trip(&robot, &[-15.0, -5.0, 25.0]);
        assert_round_trip(&robot, &[60.0, -10.0, 0.0]);
    }

    #[test]
    fn test_inverse_of_zero_pose_position() {
        let robot = reference_robot();
        let joints = robot.inverse(&Position::new(0.0, 0.0, -277.198_058_483_700_27)).unwrap();
        assert!(joints.iter().all(|theta| theta.abs() < 1e-6), "{:?}", joints);
    }

    #[test]
    fn test_inverse_above_base_folds_arms_up() {
        // Mirror image of the hanging solution, all three arms agree.
        let joints = reference_robot().inverse(&Position::new(0.0, 0.0, 250.0)).unwrap();
        assert!((joints[0] - joints[1]).abs() < 1e-9);
        assert!((joints[0] - joints[2]).abs() < 1e-9);
    }

    #[test]
    fn test_forward_unreachable() {
        // Forearms too short to meet between the elbows
        let robot = DeltaKinematics::new(RobotGeometry {
            forearm_length: 60.0,
            ..RobotGeometry::default()
        });
        let err = robot.forward(&JOINTS_AT_ZERO).unwrap_err();
        assert_eq!(err, KinematicsError::UnreachableGeometry {
            operation: Operation::Forward,
            arm: None,
            cause: Cause::NoIntersection,
        });
    }

    #[test]
    fn test_forward_degenerate_geometry() {
        // Equal radii and vertical biceps: all elbows project onto the axis.
        let robot = DeltaKinematics::new(RobotGeometry {
            base_radius: 50.0,
            end_effector_radius: 50.0,
            ..RobotGeometry::default()
        });
        let err = robot.forward(&[90.0, 90.0, 90.0]).unwrap_err();
        assert_eq!(err.operation(), Operation::Forward);
        assert_eq!(err.cause(), Cause::Degenerate);
    }

    #[test]
    fn test_forward_rejects_nan() {
        let err = reference_robot().forward(&[0.0, f64::NAN, 0.0]).unwrap_err();
        assert_eq!(err.cause(), Cause::NonFinite);
    }

    #[test]
    fn test_inverse_too_far_fails_on_first_arm() {
        let robot = reference_robot();
        for position in [
            Position::new(0.0, 0.0, -500.0),
            Position::new(0.0, 0.0, -150.0),
            Position::new(300.0, 0.0, -250.0),
        ] {
            let err = robot.inverse(&position).unwrap_err();
            assert_eq!(err, KinematicsError::inverse(ARM_1, Cause::NoIntersection));
        }
    }

    #[test]
    fn test_inverse_reports_failing_arm() {
        let robot = reference_robot();

        // Far out along +y, the first arm still reaches.
        let err = robot.inverse(&Position::new(-100.0, 250.0, -250.0)).unwrap_err();
        assert_eq!(err, KinematicsError::inverse(ARM_2, Cause::NoIntersection));
        assert_eq!(
            err.to_string(),
            "Unreachable geometry in inverse kinematics, arm 2: no real intersection"
        );

        let err = robot.inverse(&Position::new(100.0, 250.0, -250.0)).unwrap_err();
        assert_eq!(err, KinematicsError::inverse(ARM_3, Cause::NoIntersection));
        assert_eq!(
            err.to_string(),
            "Unreachable geometry in inverse kinematics, arm 3: no real intersection"
        );
    }

    #[test]
    fn test_inverse_in_shoulder_plane() {
        let err = reference_robot().inverse(&Position::new(10.0, 10.0, 0.0)).unwrap_err();
        assert_eq!(err, KinematicsError::inverse(ARM_1, Cause::Degenerate));
    }

    #[test]
    fn test_inverse_rejects_infinity() {
        let err = reference_robot()
            .inverse(&Position::new(0.0, 0.0, f64::NEG_INFINITY))
            .unwrap_err();
        assert_eq!(err.cause(), Cause::NonFinite);
        assert_eq!(err.operation(), Operation::Inverse);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let robot = reference_robot();
        let joints = [12.5, -7.25, 33.0];
        let first = robot.forward(&joints).unwrap();
        for _ in 0..100 {
            assert_eq!(robot.forward(&joints).unwrap(), first);
        }
        let angles = robot.inverse(&first).unwrap();
        for _ in 0..100 {
            assert_eq!(robot.inverse(&first).unwrap(), angles);
        }
    }
}
