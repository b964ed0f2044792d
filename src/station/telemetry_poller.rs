use super::{StateStore, StationLink};
use crate::http_handler::HTTPError;
use crate::{error, event, info, warn};
use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Periodically samples the station and keeps the planet map relative to it.
///
/// Each tick runs exactly one round-trip and awaits it before the next tick
/// is taken, so requests of this poller never overlap. Every station request
/// is stamped with a sequence number and the [`StateStore`] drops samples
/// older than the one it already holds.
pub struct TelemetryPoller<L: StationLink> {
    link: Arc<L>,
    store: Arc<StateStore>,
    scan_radius: u32,
    period: Duration,
    seq: AtomicU64,
}

impl<L: StationLink> TelemetryPoller<L> {
    pub fn new(link: Arc<L>, store: Arc<StateStore>, scan_radius: u32, period: Duration) -> Self {
        Self { link, store, scan_radius, period, seq: AtomicU64::new(0) }
    }

    fn next_seq(&self) -> u64 { self.seq.fetch_add(1, Ordering::Relaxed) + 1 }

    /// Initial load on entering the map: station first, then the planets
    /// around it. Only when both succeed is the view revealed.
    ///
    /// # Errors
    /// The first failing request; its text is also published as the view error.
    pub async fn bootstrap(&self) -> Result<(), HTTPError> {
        let seq = self.next_seq();
        let station = match self.link.station().await {
            Ok(station) => station,
            Err(e) => return Err(self.publish_failure("station", e)),
        };
        let planets = match self.link.planets(self.scan_radius).await {
            Ok(planets) => planets,
            Err(e) => return Err(self.publish_failure("planet", e)),
        };
        info!(
            "Map ready: {} planets within {} around {}",
            planets.len(),
            self.scan_radius,
            station.pos()
        );
        self.store.apply_bootstrap(seq, station, planets);
        Ok(())
    }

    /// One telemetry tick: fetch the station and move the map.
    ///
    /// # Errors
    /// The failed request; the view is suppressed with its text.
    pub async fn poll_once(&self) -> Result<(), HTTPError> {
        let seq = self.next_seq();
        match self.link.station().await {
            Ok(station) => {
                let pos = station.pos();
                if self.store.apply_station(seq, station) {
                    event!("Station sample #{seq} at {pos}");
                } else {
                    warn!("Dropped stale station sample #{seq}");
                }
                Ok(())
            }
            Err(e) => Err(self.publish_failure("station", e)),
        }
    }

    fn publish_failure(&self, what: &str, e: HTTPError) -> HTTPError {
        error!("Fetching {what} data failed: {e}");
        self.store.fail(e.to_string());
        e
    }

    /// Runs the poll loop until `c_tok` is cancelled.
    ///
    /// While no planet catalogue is cached a tick performs the bootstrap,
    /// afterwards it performs a plain station poll. Failures are published
    /// and retried on the next tick. Cancellation also aborts a round-trip
    /// that is still in flight.
    pub async fn run(self: Arc<Self>, c_tok: CancellationToken) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                () = c_tok.cancelled() => break,
                _ = ticker.tick() => {}
            }
            let round = async {
                if self.store.has_planets() { self.poll_once().await } else { self.bootstrap().await }
            };
            // failures are already published to the store
            tokio::select! {
                () = c_tok.cancelled() => break,
                _ = round => {}
            }
        }
        info!("Telemetry poller stopped");
    }
}
