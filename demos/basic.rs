use delta_kinematics::geometry::RobotGeometry;
use delta_kinematics::kinematic_traits::{Kinematics, Position, JOINTS_AT_ZERO};
use delta_kinematics::kinematics_impl::DeltaKinematics;
use delta_kinematics::utils::{dump_joints, dump_position};

/// Usage example.
fn main() {
    // Create robot specifying geometry, millimeters.
    let geometry = RobotGeometry {
        base_radius: 75.0,
        bicep_length: 100.0,
        forearm_length: 300.0,
        end_effector_radius: 24.0,
        base_to_floor_distance: 400.0,
    };
    let robot = DeltaKinematics::new(geometry);

    println!("Zero pose, all biceps horizontal:");
    match robot.forward(&JOINTS_AT_ZERO) {
        Ok(position) => {
            dump_position(&position);
            let floor = robot.geometry().to_floor_frame(&position);
            println!("Height above the floor: {:.3}", floor.z);
        }
        Err(e) => println!("{}", e),
    }

    let joints = [5.0, 10.0, 15.0]; // Degrees
    println!("Forward kinematics of {:?}:", joints);
    let position = match robot.forward(&joints) {
        Ok(position) => position,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };
    dump_position(&position);

    println!("And back:");
    match robot.inverse(&position) {
        Ok(joints) => dump_joints(&joints),
        Err(e) => println!("{}", e),
    }

    println!("Position out of reach, second arm cannot get there:");
    if let Err(e) = robot.inverse(&Position::new(-100.0, 250.0, -250.0)) {
        println!("{}", e);
    }
}
