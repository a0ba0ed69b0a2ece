//! Rust implementation of inverse and forward kinematic solutions for three-armed parallel
//! ("delta") robots with rotary shoulder actuators.
//!
//! The end effector hangs below the base on three arms spaced 120° apart. Each arm is a bicep,
//! driven by a shoulder motor, and a forearm that connects the elbow to the end effector.
//! Both directions are solved in closed form:
//!
//! - forward kinematics intersects the three spheres of radius `forearm_length` around the
//!   elbow points;
//! - inverse kinematics rotates the target into the plane of each arm and intersects the
//!   circle swept by the bicep with the line of elbow points that keep the forearm length.
//!
//! # Features
//!
//! - Angles are in degrees on the public boundary, all lengths are in millimeters.
//! - Configurations without a real solution (negative discriminant), collinear elbow
//!   projections and non-finite values are reported as
//!   [`KinematicsError::UnreachableGeometry`](kinematics_error::KinematicsError), never as NaN.
//!   Failures of inverse kinematics name the arm that failed.
//! - The solver holds only an immutable geometry and can be shared freely between threads.
//!   With the `parallel` feature, [`batch`] evaluates many requests in parallel.
//! - With the `allow_filesystem` feature, the geometry (plus optional motor limits and work
//!   envelope metadata) can be read from YAML, and the `delta` command line tool is built.
//!
//! # Parameters
//!
//! The robot is described by [`RobotGeometry`](geometry::RobotGeometry): base radius, bicep
//! length, forearm length, end effector radius and the distance from the base to the floor.
//! The last one does not take part in the kinematics; it only serves to convert positions into
//! the floor frame.
//!
//! ```
//! use delta_kinematics::geometry::RobotGeometry;
//! use delta_kinematics::kinematic_traits::Kinematics;
//! use delta_kinematics::kinematics_impl::DeltaKinematics;
//!
//! let robot = DeltaKinematics::new(RobotGeometry::default());
//! let position = robot.forward(&[0.0, 0.0, 0.0]).unwrap();
//! assert!((position.z + 277.198).abs() < 0.01);
//!
//! let joints = robot.inverse(&position).unwrap();
//! assert!(joints.iter().all(|theta| theta.abs() < 1e-6));
//! ```

pub mod geometry;

pub mod parameter_error;

#[cfg(feature = "allow_filesystem")]
pub mod geometry_from_file;

pub mod limits;

pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_error;
pub mod kinematics_impl;

#[cfg(feature = "parallel")]
pub mod batch;

#[cfg(test)]
mod tests;
