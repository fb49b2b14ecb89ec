use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::DataProvider;

/// Poll a file-backed provider and reload it when the file changes.
///
/// File reads and listener rebuilds run on the blocking pool. Must be called
/// within a tokio runtime. Abort the returned handle to stop.
pub fn spawn_auto_reload(provider: Arc<DataProvider>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately; content was read at construction
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let p = provider.clone();
            match tokio::task::spawn_blocking(move || p.reload_if_modified()).await {
                Ok(Ok(true)) => {
                    tracing::info!(provider = %provider.tag(), "provider file changed, reloaded");
                }
                Ok(Ok(false)) => {}
                Ok(Err(e)) => {
                    tracing::warn!(provider = %provider.tag(), error = %e, "provider reload failed");
                }
                Err(e) => {
                    tracing::warn!(provider = %provider.tag(), error = %e, "provider reload task failed");
                }
            }
        }
    })
}
