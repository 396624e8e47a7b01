//! Interactive stop signals for the send loop.
//!
//! The loop stops when the operator presses ENTER or hits Ctrl-C. Stdin is read on a
//! detached OS thread, never on the runtime's blocking pool.

use std::io::BufRead;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Cancel `token` once a line (or EOF) arrives on `input`.
///
/// Returns immediately if the token is already cancelled when the read completes.
pub fn cancel_on_line<R>(mut input: R, token: &CancellationToken)
where
    R: BufRead,
{
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => debug!("Console input closed"),
        Ok(_) => debug!("Console input received"),
        Err(e) => warn!("Failed to read console input: {}", e),
    }

    if !token.is_cancelled() {
        info!("Stop requested from console");
        token.cancel();
    }
}

/// Watch stdin on a background thread and cancel `token` when ENTER is pressed.
pub fn spawn_enter_watcher(token: CancellationToken) -> std::io::Result<()> {
    std::thread::Builder::new().name("freed-stdin".to_string()).spawn(move || {
        let stdin = std::io::stdin();
        cancel_on_line(stdin.lock(), &token);
    })?;
    Ok(())
}

/// Cancel `token` on Ctrl-C, or return early if it is cancelled by something else.
pub async fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::select! {
        _ = token.cancelled() => {}
        result = tokio::signal::ctrl_c() => {
            match result {
                Ok(()) => info!("Stop requested by interrupt"),
                Err(e) => warn!("Failed to listen for interrupt: {}", e),
            }
            token.cancel();
        }
    }
}
