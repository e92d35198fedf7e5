use std::time::Duration;
use chrono::Utc;
use tracing::debug;
use crate::session::SessionRegistry;

pub async fn periodic_cleanup_task(sessions: SessionRegistry) {

    let cleanup_interval = Duration::from_secs(3600); //atm each 1hr

    debug!("Starting Session-Cleanup-Task.");

    loop {
        tokio::time::sleep(cleanup_interval).await;
        debug!("Starting periodic session cleanup...");

        //sessions idle past the cookie lifetime cannot come back
        let cutoff = Utc::now() - chrono::Duration::days(7);
        let removed = sessions.sweep_idle(cutoff).await;
        if removed > 0 {
            debug!("Session cleanup: {} idle sessions removed.", removed);
        }
        debug!("Periodic cleanup finished.");
    }
}
