//! Helper functions

use crate::kinematic_traits::{JointAngles, Position};

/// Checks if all elements in the array are finite
pub fn is_valid(joints: &JointAngles) -> bool {
    joints.iter().all(|&q| q.is_finite())
}

/// Position as printed by the delta tool, one coordinate per line, millimeters with 3 decimals.
pub fn format_position(position: &Position) -> String {
    format!("x = {:.3}\ny = {:.3}\nz = {:.3}\n", position.x, position.y, position.z)
}

/// Joint angles as printed by the delta tool, one arm per line, degrees with 3 decimals.
pub fn format_joints(joints: &JointAngles) -> String {
    format!("theta1 = {:.3}\ntheta2 = {:.3}\ntheta3 = {:.3}\n", joints[0], joints[1], joints[2])
}

/// Print the position, see [`format_position`].
pub fn dump_position(position: &Position) {
    print!("{}", format_position(position));
}

/// Print joint values in degrees, see [`format_joints`].
pub fn dump_joints(joints: &JointAngles) {
    print!("{}", format_joints(joints));
}
