//! Supports reading the robot geometry from YAML file (optional)

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::geometry::RobotGeometry;
use crate::kinematic_traits::Position;
use crate::limits::{Envelope, MotorLimits, RobotConfig};
use crate::parameter_error::ParameterError;

const GEOMETRY_KEY: &str = "delta_geometry";

fn default_base_to_floor() -> f64 { 400.0 }

/// Lengths are optional here so that a missing one is reported by its name.
#[derive(Deserialize)]
struct GeometrySection {
    base_radius: Option<f64>,
    bicep_length: Option<f64>,
    forearm_length: Option<f64>,
    end_effector_radius: Option<f64>,
    #[serde(default = "default_base_to_floor")]
    base_to_floor_distance: f64,
}

#[derive(Deserialize)]
struct EnvelopeSection {
    min: Option<Vec<f64>>,
    max: Option<Vec<f64>>,
}

#[derive(Deserialize)]
struct Root {
    #[serde(rename = "delta_geometry")]
    geometry: Option<GeometrySection>,
    #[serde(default)]
    motor_limits: Option<Vec<Vec<f64>>>,
    #[serde(default)]
    envelope: Option<EnvelopeSection>,
}

impl RobotConfig {
    /// Read the robot configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// delta_geometry:
    ///   base_radius: 75.0
    ///   bicep_length: 100.0
    ///   forearm_length: 300.0
    ///   end_effector_radius: 24.0
    ///   base_to_floor_distance: 400.0
    /// motor_limits:
    ///   - [-60.0, 90.0]
    ///   - [-60.0, 90.0]
    ///   - [-60.0, 90.0]
    /// envelope:
    ///   min: [-100.0, -100.0, -350.0]
    ///   max: [100.0, 100.0, -220.0]
    /// ```
    /// `base_to_floor_distance`, `motor_limits` and `envelope` are optional.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        debug!("Loaded delta geometry from {}: {:?}", path.display(), config.geometry);
        Ok(config)
    }

    /// Parse the configuration from YAML text, see [`RobotConfig::from_yaml_file`].
    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let root: Root = serde_saphyr::from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;

        let section = root.geometry
            .ok_or_else(|| ParameterError::MissingField(GEOMETRY_KEY.to_string()))?;
        let required = |value: Option<f64>, key: &str| {
            value.ok_or_else(|| ParameterError::MissingField(format!("{}.{}", GEOMETRY_KEY, key)))
        };

        let geometry = RobotGeometry {
            base_radius: required(section.base_radius, "base_radius")?,
            bicep_length: required(section.bicep_length, "bicep_length")?,
            forearm_length: required(section.forearm_length, "forearm_length")?,
            end_effector_radius: required(section.end_effector_radius, "end_effector_radius")?,
            base_to_floor_distance: section.base_to_floor_distance,
        };
        geometry.validate()?;

        Ok(RobotConfig {
            geometry,
            motor_limits: root.motor_limits.map(motor_limits).transpose()?,
            envelope: root.envelope.map(envelope).transpose()?,
        })
    }
}

impl RobotGeometry {
    /// Read only the geometry from YAML file, ignoring the metadata.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        Ok(RobotConfig::from_yaml_file(path)?.geometry)
    }
}

fn fixed<const N: usize>(values: Vec<f64>, field: &str) -> Result<[f64; N], ParameterError> {
    <[f64; N]>::try_from(values).map_err(|values| ParameterError::InvalidLength {
        field: field.to_string(),
        expected: N,
        found: values.len(),
    })
}

fn motor_limits(rows: Vec<Vec<f64>>) -> Result<MotorLimits, ParameterError> {
    let rows: [Vec<f64>; 3] = rows.try_into().map_err(|rows: Vec<Vec<f64>>| {
        ParameterError::InvalidLength {
            field: "motor_limits".to_string(),
            expected: 3,
            found: rows.len(),
        }
    })?;

    let mut from = [0.0; 3];
    let mut to = [0.0; 3];
    for (arm, row) in rows.into_iter().enumerate() {
        let [lo, hi] = fixed::<2>(row, &format!("motor_limits[{}]", arm))?;
        from[arm] = lo;
        to[arm] = hi;
    }
    MotorLimits::new(from, to)
}

fn envelope(section: EnvelopeSection) -> Result<Envelope, ParameterError> {
    let corner = |values: Option<Vec<f64>>, key: &str| -> Result<Position, ParameterError> {
        let field = format!("envelope.{}", key);
        let values = values.ok_or_else(|| ParameterError::MissingField(field.clone()))?;
        Ok(Position::from(fixed::<3>(values, &field)?))
    };
    Envelope::new(corner(section.min, "min")?, corner(section.max, "max")?)
}
