use std::time::Duration;

use log::{error, info};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::services::dashboard::{DashboardService, DashboardState};

/// Handle to a background refresh task. The loop can be paused while the
/// dashboard is not visible and is stopped for good on teardown; dropping
/// the handle without `shutdown` leaves no way to stop the task, so callers
/// keep it for the dashboard's lifetime.
pub struct Poller {
    shutdown: watch::Sender<bool>,
    pause: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn the periodic refresh loop. Fresh dashboard states arrive on
    /// the returned channel; failed refreshes are logged and skipped.
    pub fn spawn(
        mut service: DashboardService,
        interval: Duration,
    ) -> (Self, mpsc::Receiver<DashboardState>) {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let (pause_tx, pause_rx) = watch::channel(false);
        let (state_tx, state_rx) = mpsc::channel(4);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = shutdown_rx.changed() => {
                        if *shutdown_rx.borrow() {
                            info!("Stopping dashboard poller");
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        if *pause_rx.borrow() {
                            continue;
                        }
                        refresh_once(&mut service, &state_tx).await;
                    }
                }
            }
        });

        let poller = Self {
            shutdown: shutdown_tx,
            pause: pause_tx,
            handle,
        };
        (poller, state_rx)
    }

    /// Suspend refreshes while the dashboard is not visible
    pub fn pause(&self) {
        let _ = self.pause.send(true);
    }

    pub fn resume(&self) {
        let _ = self.pause.send(false);
    }

    /// Stop the loop and wait for the task to finish
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}

async fn refresh_once(service: &mut DashboardService, state_tx: &mpsc::Sender<DashboardState>) {
    match service.refresh().await {
        Ok(Some(state)) => {
            let _ = state_tx.send(state).await;
        }
        Ok(None) => {
            // superseded by a newer refresh, nothing to publish
        }
        Err(e) => {
            error!("Dashboard refresh failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::api::PlatformClient;
    use crate::auth::AuthStore;
    use crate::config::ApiSettings;

    fn unreachable_service(name: &str) -> DashboardService {
        let settings = ApiSettings {
            // nothing listens here, refreshes fail fast
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        let token_path = std::env::temp_dir().join(format!(
            "review-dashboard-poller-{}-{}",
            std::process::id(),
            name
        ));
        let client = PlatformClient::new(&settings, AuthStore::new(token_path)).unwrap();
        DashboardService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn shutdown_stops_the_task() {
        let (poller, _states) =
            Poller::spawn(unreachable_service("shutdown"), Duration::from_millis(10));

        tokio::time::sleep(Duration::from_millis(30)).await;
        tokio::time::timeout(Duration::from_secs(5), poller.shutdown())
            .await
            .expect("poller did not stop after shutdown");
    }

    #[tokio::test]
    async fn paused_poller_skips_refreshes() {
        let (poller, mut states) =
            Poller::spawn(unreachable_service("pause"), Duration::from_millis(10));

        poller.pause();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(states.try_recv().is_err());

        poller.resume();
        poller.shutdown().await;
    }
}
