//! Static pose source

use tracing::debug;

use crate::Result;
use crate::provider::PoseSource;
use crate::types::CameraPose;

/// Pose source that yields the same pose on every tick, forever
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticPose {
    pose: CameraPose,
}

impl StaticPose {
    /// Create a source for a fixed pose
    pub fn new(pose: CameraPose) -> Self {
        debug!(?pose, "Static pose source created");
        Self { pose }
    }

    /// The pose this source yields
    pub fn pose(&self) -> CameraPose {
        self.pose
    }
}

impl Default for StaticPose {
    fn default() -> Self {
        Self::new(CameraPose::REFERENCE)
    }
}

#[async_trait::async_trait]
impl PoseSource for StaticPose {
    async fn next_pose(&mut self) -> Result<Option<CameraPose>> {
        Ok(Some(self.pose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_pose_never_ends() {
        let mut source = StaticPose::default();

        for _ in 0..1000 {
            let pose = source.next_pose().await.expect("static source cannot fail");
            assert_eq!(pose, Some(CameraPose::REFERENCE));
        }
    }

    #[tokio::test]
    async fn static_pose_yields_configured_pose() {
        let pose = CameraPose::new([1.0, -2.0, 3.5], [0.25, 0.5, 0.75], 10, -10);
        let mut source = StaticPose::new(pose);

        assert_eq!(source.pose(), pose);
        assert_eq!(source.next_pose().await.expect("static source cannot fail"), Some(pose));
    }
}
