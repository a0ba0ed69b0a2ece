use crate::geometry::RobotGeometry;
use crate::kinematic_traits::{ARM_1, ARM_2, ARM_3, JointAngles, Kinematics, Position};
use crate::kinematics_error::{Cause, KinematicsError};
use crate::utils::is_valid;

const SQRT3: f64 = 1.732_050_807_568_877_2;
const SIN120: f64 = SQRT3 / 2.0;
const COS120: f64 = -0.5;
const TAN60: f64 = SQRT3;
const SIN30: f64 = 0.5;
const TAN30: f64 = 1.0 / SQRT3;

/// Relative to bicep_length², below this the elbow projections are treated as collinear.
const DEGENERATE_TOLERANCE: f64 = 1e-12;

/// Closed form kinematics of the three-armed parallel robot. Holds only the immutable
/// geometry, so a single instance can be shared between threads.
#[derive(Debug, Clone, Copy)]
pub struct DeltaKinematics {
    geometry: RobotGeometry,
}

impl DeltaKinematics {
    /// Creates a new `DeltaKinematics` instance with the given geometry.
    pub fn new(geometry: RobotGeometry) -> Self {
        DeltaKinematics { geometry }
    }

    pub fn geometry(&self) -> &RobotGeometry {
        &self.geometry
    }

    /// Elbow points of the three arms for the given shoulder angles (degrees), already
    /// shifted by the radial gap between the base and the end effector mounting circles.
    /// The end effector center lies at forearm_length from each of them.
    pub fn elbow_points(&self, joints: &JointAngles) -> [Position; 3] {
        let g = &self.geometry;
        let t = (g.base_radius - g.end_effector_radius) * TAN30 / 2.0;
        let [theta1, theta2, theta3] = joints.map(f64::to_radians);

        let y1 = -(t + g.bicep_length * theta1.cos());
        let z1 = -g.bicep_length * theta1.sin();

        let y2 = (t + g.bicep_length * theta2.cos()) * SIN30;
        let x2 = y2 * TAN60;
        let z2 = -g.bicep_length * theta2.sin();

        let y3 = (t + g.bicep_length * theta3.cos()) * SIN30;
        let x3 = -y3 * TAN60;
        let z3 = -g.bicep_length * theta3.sin();

        [
            Position::new(0.0, y1, z1),
            Position::new(x2, y2, z2),
            Position::new(x3, y3, z3),
        ]
    }

    /// Intersects the three forearm spheres around the elbow points.
    fn intersect_spheres(&self, elbows: &[Position; 3]) -> Result<Position, KinematicsError> {
        let g = &self.geometry;
        let (y1, z1) = (elbows[0].y, elbows[0].z);
        let (x2, y2, z2) = (elbows[1].x, elbows[1].y, elbows[1].z);
        let (x3, y3, z3) = (elbows[2].x, elbows[2].y, elbows[2].z);

        let dnm = (y2 - y1) * x3 - (y3 - y1) * x2;
        if dnm.abs() <= DEGENERATE_TOLERANCE * g.bicep_length * g.bicep_length {
            return Err(KinematicsError::forward(Cause::Degenerate));
        }

        let w1 = y1 * y1 + z1 * z1;
        let w2 = x2 * x2 + y2 * y2 + z2 * z2;
        let w3 = x3 * x3 + y3 * y3 + z3 * z3;

        // x = (a1*z + b1)/dnm
        let a1 = (z2 - z1) * (y3 - y1) - (z3 - z1) * (y2 - y1);
        let b1 = -((w2 - w1) * (y3 - y1) - (w3 - w1) * (y2 - y1)) / 2.0;

        // y = (a2*z + b2)/dnm
        let a2 = -(z2 - z1) * x3 + (z3 - z1) * x2;
        let b2 = ((w2 - w1) * x3 - (w3 - w1) * x2) / 2.0;

        // a*z^2 + b*z + c = 0
        let a = a1 * a1 + a2 * a2 + dnm * dnm;
        let b = 2.0 * (a1 * b1 + a2 * (b2 - y1 * dnm) - z1 * dnm * dnm);
        let c = (b2 - y1 * dnm) * (b2 - y1 * dnm) + b1 * b1
            + dnm * dnm * (z1 * z1 - g.forearm_length * g.forearm_length);

        let d = b * b - 4.0 * a * c;
        if d < 0.0 {
            return Err(KinematicsError::forward(Cause::NoIntersection));
        }

        // The root below the shoulders.
        let z0 = -0.5 * (b + d.sqrt()) / a;
        let x0 = (a1 * z0 + b1) / dnm;
        let y0 = (a2 * z0 + b2) / dnm;

        Ok(Position::new(x0, y0, z0))
    }

    /// Solves a single arm in its own YZ plane. The target must already be rotated
    /// into the frame of that arm.
    fn solve_planar_arm(
        &self,
        arm: usize,
        x0: f64,
        y0: f64,
        z0: f64,
    ) -> Result<f64, KinematicsError> {
        let g = &self.geometry;
        if z0 == 0.0 {
            return Err(KinematicsError::inverse(arm, Cause::Degenerate));
        }

        let y1 = -0.5 * TAN30 * g.base_radius;
        let y0 = y0 - 0.5 * TAN30 * g.end_effector_radius;
        let bicep = g.bicep_length;

        // z = a + b*y
        let a = (x0 * x0 + y0 * y0 + z0 * z0 + bicep * bicep
            - g.forearm_length * g.forearm_length - y1 * y1) / (2.0 * z0);
        let b = (y1 - y0) / z0;

        let d = -(a + b * y1) * (a + b * y1) + bicep * (b * b * bicep + bicep);
        if d < 0.0 {
            return Err(KinematicsError::inverse(arm, Cause::NoIntersection));
        }

        let yj = (y1 - a * b - d.sqrt()) / (b * b + 1.0);
        let zj = a + b * yj;

        let mut theta = (-zj / (y1 - yj)).atan().to_degrees();
        if yj > y1 {
            // Elbow folded past the vertical through the shoulder pivot
            theta += 180.0;
        }
        Ok(theta)
    }
}

impl Kinematics for DeltaKinematics {
    fn forward(&self, joints: &JointAngles) -> Result<Position, KinematicsError> {
        if !is_valid(joints) {
            return Err(KinematicsError::forward(Cause::NonFinite));
        }
        let position = self.intersect_spheres(&self.elbow_points(joints))?;
        if !position.iter().all(|v| v.is_finite()) {
            return Err(KinematicsError::forward(Cause::NonFinite));
        }
        Ok(position)
    }

    fn inverse(&self, position: &Position) -> Result<JointAngles, KinematicsError> {
        let (x, y, z) = (position.x, position.y, position.z);
        let targets = [
            (ARM_1, x, y),
            (ARM_2, x * COS120 + y * SIN120, y * COS120 - x * SIN120),
            (ARM_3, x * COS120 - y * SIN120, y * COS120 + x * SIN120),
        ];

        let mut joints = [0.0; 3];
        for (arm, xr, yr) in targets {
            if !(xr.is_finite() && yr.is_finite() && z.is_finite()) {
                return Err(KinematicsError::inverse(arm, Cause::NonFinite));
            }
            let theta = self.solve_planar_arm(arm, xr, yr, z)?;
            if !theta.is_finite() {
                return Err(KinematicsError::inverse(arm, Cause::NonFinite));
            }
            joints[arm] = theta;
        }
        Ok(joints)
    }
}
