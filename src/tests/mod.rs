mod test_kinematics;

#[cfg(feature = "allow_filesystem")]
mod testcases;
