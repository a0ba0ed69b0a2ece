use delta_kinematics::batch::{first_unreachable, inverse_all};
use delta_kinematics::geometry::RobotGeometry;
use delta_kinematics::kinematic_traits::Position;
use delta_kinematics::kinematics_impl::DeltaKinematics;

/// Scans a horizontal grid of positions and prints which of them the robot can reach.
fn main() {
    let robot = DeltaKinematics::new(RobotGeometry::default());
    let z = -300.0;
    let steps: Vec<f64> = (-8..=8).map(|i| i as f64 * 25.0).collect();

    let positions: Vec<Position> = steps.iter()
        .flat_map(|&y| steps.iter().map(move |&x| Position::new(x, -y, z)))
        .collect();
    let results = inverse_all(&robot, &positions);

    println!(
        "Reachable positions at z = {} (x from {} to {}):",
        z,
        steps[0],
        steps[steps.len() - 1]
    );
    for row in results.chunks(steps.len()) {
        let line: String = row.iter()
            .map(|r| if r.is_ok() { '#' } else { '.' })
            .collect();
        println!("{}", line);
    }

    let reachable = results.iter().filter(|r| r.is_ok()).count();
    println!("{} of {} positions reachable", reachable, positions.len());

    if let Some((index, e)) = first_unreachable(&robot, &positions) {
        let p = positions[index];
        println!("First unreachable: ({}, {}, {}): {}", p.x, p.y, p.z, e);
    }
}
