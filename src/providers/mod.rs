//! Pose source implementations

pub mod static_pose;

pub use static_pose::StaticPose;
