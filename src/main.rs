//! Command line front end for the delta robot kinematics.
//!
//! ```text
//! delta forward --t1 5 --t2 10 --t3 15
//! delta inverse -x 10 -y -20 -z -290
//! delta --config robot.yaml describe
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use delta_kinematics::geometry::RobotGeometry;
use delta_kinematics::kinematic_traits::{Kinematics, Position};
use delta_kinematics::kinematics_impl::DeltaKinematics;
use delta_kinematics::limits::RobotConfig;
use delta_kinematics::utils::{dump_joints, dump_position};

/// Forward and inverse kinematics of a three-armed delta robot.
#[derive(Parser)]
#[command(name = "delta", version, about)]
struct Cli {
    #[command(flatten)]
    geometry: GeometryArgs,

    /// Read the geometry from YAML file. Cannot be combined with the geometry flags.
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Unset flags take the reference geometry values.
#[derive(Args)]
struct GeometryArgs {
    /// Base radius [default: 75]
    #[arg(short = 'b', long, value_name = "mm", global = true)]
    base_radius: Option<f64>,

    /// Bicep length [default: 100]
    #[arg(short = 'r', long, value_name = "mm", global = true)]
    bicep_length: Option<f64>,

    /// Forearm length [default: 300]
    #[arg(short = 'f', long, value_name = "mm", global = true)]
    forearm_length: Option<f64>,

    /// End effector radius [default: 24]
    #[arg(short = 'e', long, value_name = "mm", global = true)]
    end_effector_radius: Option<f64>,

    /// Distance from the base to the floor [default: 400]
    #[arg(short = 'd', long, value_name = "mm", global = true)]
    base_to_floor_distance: Option<f64>,
}

impl GeometryArgs {
    /// Geometry flags present on the command line.
    fn given(&self) -> Vec<&'static str> {
        [
            ("--base-radius", self.base_radius),
            ("--bicep-length", self.bicep_length),
            ("--forearm-length", self.forearm_length),
            ("--end-effector-radius", self.end_effector_radius),
            ("--base-to-floor-distance", self.base_to_floor_distance),
        ]
        .into_iter()
        .filter_map(|(flag, value)| value.map(|_| flag))
        .collect()
    }
}

impl From<&GeometryArgs> for RobotGeometry {
    fn from(args: &GeometryArgs) -> Self {
        let reference = RobotGeometry::default();
        RobotGeometry::new(
            args.base_radius.unwrap_or(reference.base_radius),
            args.bicep_length.unwrap_or(reference.bicep_length),
            args.forearm_length.unwrap_or(reference.forearm_length),
            args.end_effector_radius.unwrap_or(reference.end_effector_radius),
            args.base_to_floor_distance.unwrap_or(reference.base_to_floor_distance),
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Forward kinematics: shoulder angles to end effector position.
    Forward {
        /// Theta 1 angle, degrees
        #[arg(long = "t1", default_value_t = 0.0, allow_negative_numbers = true)]
        theta1: f64,

        /// Theta 2 angle, degrees
        #[arg(long = "t2", default_value_t = 0.0, allow_negative_numbers = true)]
        theta2: f64,

        /// Theta 3 angle, degrees
        #[arg(long = "t3", default_value_t = 0.0, allow_negative_numbers = true)]
        theta3: f64,
    },

    /// Inverse kinematics: end effector position to shoulder angles.
    Inverse {
        /// X position, mm
        #[arg(short = 'x', default_value_t = 0.0, allow_negative_numbers = true)]
        x: f64,

        /// Y position, mm
        #[arg(short = 'y', default_value_t = 0.0, allow_negative_numbers = true)]
        y: f64,

        /// Z position, mm
        #[arg(short = 'z', default_value_t = 250.0, allow_negative_numbers = true)]
        z: f64,
    },

    /// Print the effective robot configuration as YAML.
    Describe,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<RobotConfig> {
    let config = match &cli.config {
        Some(path) => {
            let given = cli.geometry.given();
            if !given.is_empty() {
                bail!("--config cannot be combined with {}", given.join(", "));
            }
            RobotConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to load geometry from {}", path.display()))?
        }
        None => {
            let geometry = RobotGeometry::from(&cli.geometry);
            geometry.validate().context("Invalid geometry flags")?;
            RobotConfig::new(geometry)
        }
    };
    debug!("Using {:?}", config.geometry);
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let robot = DeltaKinematics::new(config.geometry);

    match cli.command {
        Commands::Forward { theta1, theta2, theta3 } => {
            info!("Forward kinematics for [{}, {}, {}]", theta1, theta2, theta3);
            let position = robot
                .forward(&[theta1, theta2, theta3])
                .context("Error computing forward kinematics")?;
            dump_position(&position);
        }
        Commands::Inverse { x, y, z } => {
            info!("Inverse kinematics for ({}, {}, {})", x, y, z);
            let joints = robot
                .inverse(&Position::new(x, y, z))
                .context("Error computing inverse kinematics")?;
            dump_joints(&joints);
        }
        Commands::Describe => {
            print!("{}", config.to_yaml());
        }
    }
    Ok(())
}
