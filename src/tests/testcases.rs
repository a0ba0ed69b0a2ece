#[cfg(test)]
mod tests {
    use crate::kinematic_traits::Kinematics;
    use crate::kinematics_impl::DeltaKinematics;
    use crate::tests::test_utils;

    const CASES: &str = "src/tests/data/cases.yaml";

    #[test]
    fn test_load_yaml() {
        let result = test_utils::load_yaml(CASES);

        if let Err(e) = &result {
            println!("Error loading or parsing YAML file: {:#}", e);
        }
        assert!(result.is_ok(), "Failed to load or parse the YAML file");

        let cases = result.expect("Expected valid cases after parsing");
        assert_eq!(cases.geometries.len(), 3);
        assert!(!cases.cases.is_empty(), "No cases were loaded from the YAML file");
    }

    #[test]
    fn test_forward() {
        let cases = test_utils::load_yaml(CASES).expect("Failed to load cases");
        println!("Forward: {} test cases", cases.cases.len());

        for case in cases.cases.iter() {
            let robot = DeltaKinematics::new(cases.geometry_of(case));
            let position = robot.forward(&case.joints)
                .unwrap_or_else(|e| panic!("Case {}: {}", case.id, e));

            if !test_utils::positions_close(&position, &case.position, 1e-6) {
                println!("joints  : {:?}", &case.joints);
                println!("computed: {:?}", position.as_slice());
                println!("expected: {:?}", case.position.as_slice());
                panic!("Forward kinematics of case {} seems not equal", case.id);
            }
        }
    }

    #[test]
    fn test_inverse() {
        let cases = test_utils::load_yaml(CASES).expect("Failed to load cases");
        println!("Inverse: {} test cases", cases.cases.len());

        for case in cases.cases.iter() {
            let robot = DeltaKinematics::new(cases.geometry_of(case));
            let joints = robot.inverse(&case.position)
                .unwrap_or_else(|e| panic!("Case {}: {}", case.id, e));

            if !test_utils::joints_close(&joints, &case.joints, 1e-6) {
                println!("position: {:?}", case.position.as_slice());
                println!("computed: {:?}", joints);
                println!("expected: {:?}", &case.joints);
                panic!("Inverse kinematics of case {} seems not equal", case.id);
            }
        }
    }

    #[test]
    fn test_forward_lands_on_all_forearm_spheres() {
        let cases = test_utils::load_yaml(CASES).expect("Failed to load cases");
        for case in cases.cases.iter() {
            let geometry = cases.geometry_of(case);
            let robot = DeltaKinematics::new(geometry);
            let position = robot.forward(&case.joints).expect("Reachable case");
            for (arm, elbow) in robot.elbow_points(&case.joints).iter().enumerate() {
                let distance = (position - elbow).norm();
                assert!(
                    (distance - geometry.forearm_length).abs() < 1e-9,
                    "Case {}, arm {}: distance {} to the elbow", case.id, arm + 1, distance
                );
            }
        }
    }
}
