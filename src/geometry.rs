//! Defines the delta robot geometry data structure

use crate::kinematic_traits::Position;
use crate::parameter_error::ParameterError;

/// Physical linkage of the delta robot. All lengths are in millimeters.
///
/// The engine expects every field to be finite and strictly positive but does not check it;
/// call [`RobotGeometry::validate`] when the values come from outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobotGeometry {
    /// Radius of the circle the shoulder (motor) axes are mounted on.
    pub base_radius: f64,

    /// Length of the bicep, from the shoulder pivot to the elbow.
    pub bicep_length: f64,

    /// Length of the forearm, from the elbow to the end effector mounting point.
    pub forearm_length: f64,

    /// Radius of the circle the forearms are attached to on the end effector.
    pub end_effector_radius: f64,

    /// Distance from the base plane down to the floor. Not used by the kinematics,
    /// see [`RobotGeometry::to_floor_frame`].
    pub base_to_floor_distance: f64,
}

impl Default for RobotGeometry {
    fn default() -> Self {
        RobotGeometry {
            base_radius: 75.0,
            bicep_length: 100.0,
            forearm_length: 300.0,
            end_effector_radius: 24.0,
            base_to_floor_distance: 400.0,
        }
    }
}

impl RobotGeometry {
    pub fn new(
        base_radius: f64,
        bicep_length: f64,
        forearm_length: f64,
        end_effector_radius: f64,
        base_to_floor_distance: f64,
    ) -> Self {
        RobotGeometry {
            base_radius,
            bicep_length,
            forearm_length,
            end_effector_radius,
            base_to_floor_distance,
        }
    }

    /// Check that all lengths are finite and strictly positive.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in self.named_fields() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::InvalidGeometry(format!(
                    "'{}' must be finite and positive (got {})", name, value
                )));
            }
        }
        Ok(())
    }

    /// Convert the position from the base frame into the floor frame, where z is
    /// the height above the floor.
    pub fn to_floor_frame(&self, position: &Position) -> Position {
        Position::new(position.x, position.y, position.z + self.base_to_floor_distance)
    }

    /// Convert to string yaml representation (quick viewing, etc).
    pub fn to_yaml(&self) -> String {
        format!(
            "delta_geometry:\n  \
              base_radius: {}\n  \
              bicep_length: {}\n  \
              forearm_length: {}\n  \
              end_effector_radius: {}\n  \
              base_to_floor_distance: {}\n",
            self.base_radius,
            self.bicep_length,
            self.forearm_length,
            self.end_effector_radius,
            self.base_to_floor_distance,
        )
    }

    pub(crate) fn named_fields(&self) -> [(&'static str, f64); 5] {
        [
            ("base_radius", self.base_radius),
            ("bicep_length", self.bicep_length),
            ("forearm_length", self.forearm_length),
            ("end_effector_radius", self.end_effector_radius),
            ("base_to_floor_distance", self.base_to_floor_distance),
        ]
    }
}
