//! Provider trait for pose sources

use super::types::CameraPose;
use crate::Result;

/// Trait for camera pose sources
///
/// The send loop pulls one pose per tick and builds a fresh frame from it. Sources own
/// whatever state they need to produce the next pose; pacing is the send loop's job.
#[async_trait::async_trait]
pub trait PoseSource: Send + 'static {
    /// Get the pose for the next frame
    ///
    /// Returns:
    /// - `Ok(Some(pose))` - Pose for this tick
    /// - `Ok(None)` - Source exhausted (normal termination)
    /// - `Err(e)` - Transient failure, the send loop backs off and asks again
    async fn next_pose(&mut self) -> Result<Option<CameraPose>>;
}
