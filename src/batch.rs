//! Parallel evaluation of many kinematic requests against the same robot.

use rayon::prelude::*;

use crate::kinematic_traits::{JointAngles, Kinematics, Position};
use crate::kinematics_error::KinematicsError;

/// Forward kinematics for every joint configuration in `joints`, computed in parallel.
/// The results are in the same order as the input.
pub fn forward_all(
    robot: &impl Kinematics,
    joints: &[JointAngles],
) -> Vec<Result<Position, KinematicsError>> {
    joints.par_iter().map(|qs| robot.forward(qs)).collect()
}

/// Inverse kinematics for every position in `positions`, computed in parallel.
/// The results are in the same order as the input.
pub fn inverse_all(
    robot: &impl Kinematics,
    positions: &[Position],
) -> Vec<Result<JointAngles, KinematicsError>> {
    positions.par_iter().map(|p| robot.inverse(p)).collect()
}

/// Checks a sequence of target positions, returning the index of the first one the robot
/// cannot reach together with the reason, or None if all are reachable.
///
/// The checks are done in parallel so should be fast.
pub fn first_unreachable(
    robot: &impl Kinematics,
    positions: &[Position],
) -> Option<(usize, KinematicsError)> {
    (0..positions.len())
        .into_par_iter()
        .filter_map(|i| robot.inverse(&positions[i]).err().map(|err| (i, err)))
        .find_first(|_| true)
}
