extern crate nalgebra as na;

use na::Vector3;

use crate::kinematics_error::KinematicsError;

/// Position of the end effector, millimeters. The origin is the centroid of the base plate,
/// and z is negative below the base plane.
/// ```
/// extern crate nalgebra as na;
/// use na::Vector3;
///
/// type Position = Vector3<f64>;
///
/// let position = Position::new(0.0, 0.0, -277.198);
/// ```
pub type Position = Vector3<f64>;

/// Shoulder angles of the three arms, in degrees. Each angle is measured in the local
/// vertical plane of its own arm.
pub type JointAngles = [f64; 3];

/// For providing joint angles when all shoulders are horizontal.
pub const JOINTS_AT_ZERO: JointAngles = [0.0; 3];

/// Index of the first arm (in the canonical YZ plane, pointing to -y).
pub const ARM_1: usize = 0;
/// Index of the second arm, rotated by +120 degrees from the first.
pub const ARM_2: usize = 1;
/// Index of the third arm, rotated by -120 degrees from the first.
pub const ARM_3: usize = 2;

pub trait Kinematics: Send + Sync {
    /// Find the end effector position for the given shoulder angles (degrees).
    /// Fails if the three forearms cannot meet in a single point.
    fn forward(&self, joints: &JointAngles) -> Result<Position, KinematicsError>;

    /// Find the shoulder angles (degrees) that place the end effector at the given position.
    /// Fails if the position cannot be reached by any of the arms.
    fn inverse(&self, position: &Position) -> Result<JointAngles, KinematicsError>;
}
