//! Configuration metadata that travels with the geometry but is not consumed by the kinematics.
//! The motor angle limits and the work envelope are kept for the callers (for instance a future
//! joint limit check); forward and inverse kinematics never read them.

use crate::geometry::RobotGeometry;
use crate::kinematic_traits::Position;
use crate::parameter_error::ParameterError;

/// Per-arm motor angle range, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorLimits {
    pub from: [f64; 3],
    pub to: [f64; 3],
}

impl MotorLimits {
    pub fn new(from: [f64; 3], to: [f64; 3]) -> Result<Self, ParameterError> {
        for arm in 0..3 {
            if !from[arm].is_finite() || !to[arm].is_finite() {
                return Err(ParameterError::ParseError(format!(
                    "motor_limits[{}] must be finite (got [{}, {}])", arm, from[arm], to[arm]
                )));
            }
            if from[arm] > to[arm] {
                return Err(ParameterError::ParseError(format!(
                    "motor_limits[{}] lower limit {} exceeds upper limit {}",
                    arm, from[arm], to[arm]
                )));
            }
        }
        Ok(MotorLimits { from, to })
    }
}

/// Axis aligned rectangular cuboid, millimeters, in the base frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min: Position,
    pub max: Position,
}

impl Envelope {
    pub fn new(min: Position, max: Position) -> Result<Self, ParameterError> {
        if !min.iter().chain(max.iter()).all(|v| v.is_finite()) {
            return Err(ParameterError::ParseError(
                "envelope corners must be finite".to_string()));
        }
        if min.iter().zip(max.iter()).any(|(lo, hi)| lo > hi) {
            return Err(ParameterError::ParseError(format!(
                "envelope min corner {:?} is not below max corner {:?}",
                min.as_slice(), max.as_slice()
            )));
        }
        Ok(Envelope { min, max })
    }

    /// Edge lengths along x, y and z.
    pub fn size(&self) -> Position {
        self.max - self.min
    }
}

/// Geometry together with the optional metadata, as read from a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RobotConfig {
    pub geometry: RobotGeometry,
    pub motor_limits: Option<MotorLimits>,
    pub envelope: Option<Envelope>,
}

impl RobotConfig {
    pub fn new(geometry: RobotGeometry) -> Self {
        RobotConfig { geometry, motor_limits: None, envelope: None }
    }

    /// YAML representation in the same layout the loader accepts.
    pub fn to_yaml(&self) -> String {
        let mut yaml = self.geometry.to_yaml();
        if let Some(limits) = &self.motor_limits {
            yaml.push_str("motor_limits:\n");
            for arm in 0..3 {
                yaml.push_str(&format!("  - [{}, {}]\n", limits.from[arm], limits.to[arm]));
            }
        }
        if let Some(envelope) = &self.envelope {
            yaml.push_str(&format!(
                "envelope:\n  min: [{}, {}, {}]\n  max: [{}, {}, {}]\n",
                envelope.min.x, envelope.min.y, envelope.min.z,
                envelope.max.x, envelope.max.y, envelope.max.z,
            ));
        }
        yaml
    }
}
