//! Driver spawns and manages the frame send loop

use futures::Stream;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace, warn};

use super::provider::PoseSource;
use crate::codec::build_frame;
use crate::transport::Transport;

/// Default pause between frames
pub const DEFAULT_SEND_INTERVAL: Duration = Duration::from_millis(5);

/// Shortest pause between frames; shorter settings are raised to this
pub const MIN_SEND_INTERVAL: Duration = Duration::from_millis(1);

/// Default base delay after a pose source failure
pub const DEFAULT_SOURCE_BACKOFF: Duration = Duration::from_millis(50);

/// Consecutive pose source failures tolerated before the loop stops
pub const MAX_SOURCE_ERRORS: u32 = 10;

/// Send loop parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverSettings {
    /// Camera identifier written into every frame (low 8 bits)
    pub camera_id: u32,
    /// Pause between frames, at least [`MIN_SEND_INTERVAL`]
    pub interval: Duration,
    /// Base delay after a pose source failure, doubled per consecutive failure
    pub source_backoff: Duration,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            camera_id: 0xFF,
            interval: DEFAULT_SEND_INTERVAL,
            source_backoff: DEFAULT_SOURCE_BACKOFF,
        }
    }
}

/// Running totals for a send loop
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendStats {
    /// Frames handed to the transport successfully
    pub frames_sent: u64,
    /// Frames the transport failed to send
    pub send_failures: u64,
    /// Ticks where the pose source failed
    pub source_failures: u64,
    /// Most recent failure message
    pub last_error: Option<String>,
}

/// Handle to a running send loop
///
/// Dropping the handle cancels the loop.
pub struct SenderHandle {
    stats: watch::Receiver<SendStats>,
    cancel: CancellationToken,
    task: Option<JoinHandle<SendStats>>,
}

impl SenderHandle {
    /// Snapshot of the current totals
    pub fn stats(&self) -> SendStats {
        self.stats.borrow().clone()
    }

    /// Totals as a stream, yielding whenever they change
    pub fn stats_updates(&self) -> impl Stream<Item = SendStats> + 'static {
        WatchStream::new(self.stats.clone())
    }

    /// Token that stops the loop when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Ask the loop to stop after the current tick
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the loop has exited
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|task| task.is_finished())
    }

    /// Wait for the loop to exit and return its final totals
    ///
    /// Does not cancel the loop; call [`cancel`](Self::cancel) first to stop a source
    /// that never ends.
    pub async fn join(mut self) -> SendStats {
        match self.task.take() {
            Some(task) => match task.await {
                Ok(stats) => stats,
                Err(e) => {
                    error!("Send loop task failed: {}", e);
                    self.stats()
                }
            },
            None => self.stats(),
        }
    }
}

impl Drop for SenderHandle {
    fn drop(&mut self) {
        debug!("Dropping sender handle");
        self.cancel.cancel();
    }
}

/// Driver spawns and manages the frame send loop
///
/// The spawned task owns the pose source and the transport. Each tick it pulls a pose,
/// builds a fresh frame and sends it. Retryable transport failures are counted and
/// skipped; any other error stops the loop.
pub struct Driver;

impl Driver {
    /// Spawn the send loop for the given source and transport
    pub fn spawn<S, T>(source: S, transport: T, settings: DriverSettings) -> SenderHandle
    where
        S: PoseSource,
        T: Transport,
    {
        let (stats_tx, stats_rx) = watch::channel(SendStats::default());
        let cancel = CancellationToken::new();
        let cancel_loop = cancel.clone();

        let task = tokio::spawn(async move {
            Self::send_loop(source, transport, settings, stats_tx, cancel_loop).await
        });

        SenderHandle { stats: stats_rx, cancel, task: Some(task) }
    }

    /// Send loop - paces ticks, builds frames and hands them to the transport
    async fn send_loop<S, T>(
        mut source: S,
        transport: T,
        settings: DriverSettings,
        stats_tx: watch::Sender<SendStats>,
        cancel: CancellationToken,
    ) -> SendStats
    where
        S: PoseSource,
        T: Transport,
    {
        let target = transport.target();
        let period = settings.interval.max(MIN_SEND_INTERVAL);
        info!(
            "Send loop started: target={}, camera_id={}, interval={:?}",
            target,
            settings.camera_id as u8,
            period
        );

        let mut stats = SendStats::default();
        let mut error_count = 0u32;

        let mut ticker = interval(period);
        // Late ticks push the schedule back rather than bursting
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if cancel.is_cancelled() {
                info!("Send loop cancelled");
                break;
            }

            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("Send loop cancelled while waiting for tick");
                    break;
                }
                _ = ticker.tick() => {}
            }

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!("Send loop cancelled while waiting for pose");
                    break;
                }
                result = source.next_pose() => result,
            };

            match result {
                Ok(Some(pose)) => {
                    error_count = 0;
                    let frame = build_frame(settings.camera_id, &pose);

                    match transport.send_frame(&frame).await {
                        Ok(_) => {
                            stats.frames_sent += 1;
                            trace!("Frame {} sent: {}", stats.frames_sent, frame);
                        }
                        Err(e) if e.is_retryable() => {
                            // One lost frame must not stop the stream
                            stats.send_failures += 1;
                            warn!("Failed to send frame to {}: {}", target, e);
                            stats.last_error = Some(e.to_string());
                        }
                        Err(e) => {
                            stats.send_failures += 1;
                            error!("Transport to {} failed permanently, stopping: {}", target, e);
                            stats.last_error = Some(e.to_string());
                            stats_tx.send_replace(stats.clone());
                            break;
                        }
                    }

                    stats_tx.send_replace(stats.clone());
                }
                Ok(None) => {
                    info!("Pose source ended after {} frames", stats.frames_sent);
                    break;
                }
                Err(e) => {
                    error_count += 1;
                    stats.source_failures += 1;
                    stats.last_error = Some(e.to_string());
                    stats_tx.send_replace(stats.clone());
                    error!("Pose source error ({}/{}): {}", error_count, MAX_SOURCE_ERRORS, e);

                    if !e.is_retryable() {
                        error!("Pose source failed permanently, stopping");
                        break;
                    }

                    if error_count >= MAX_SOURCE_ERRORS {
                        error!("Too many pose source errors, stopping");
                        break;
                    }

                    // Exponential backoff: base, 2x, 4x, ... capped at 32x
                    let backoff = settings.source_backoff * (1u32 << error_count.min(5));
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            info!("Send loop cancelled during backoff");
                            break;
                        }
                        _ = tokio::time::sleep(backoff) => {}
                    }
                }
            }
        }

        info!(
            "Send loop ended ({} frames sent, {} send failures, {} source failures)",
            stats.frames_sent, stats.send_failures, stats.source_failures
        );
        stats
    }
}
