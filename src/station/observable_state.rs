use super::{Planet, StationState, planet::relocate_all};
use tokio::sync::watch;

/// Readiness of the map as presented to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// The bootstrap has not completed yet.
    Loading,
    /// Station and planets are known, the map can be drawn.
    Ready,
    /// The map is suppressed, the contained text is shown instead.
    NotReady(String),
}

/// Everything the rendering layer reads.
#[derive(Debug, Clone)]
pub struct ObservableState {
    /// Whether the control buttons are currently offered.
    show_control_overlay: bool,
    /// Cached planet catalogue, `None` until the bootstrap succeeded.
    planets: Option<Vec<Planet>>,
    station: Option<StationState>,
    view: ViewState,
    /// Failure of the last control command, kept apart from the map error.
    command_error: Option<String>,
    /// Sequence number of the station sample currently applied.
    last_sample: u64,
}

impl ObservableState {
    fn new() -> Self {
        Self {
            show_control_overlay: true,
            planets: None,
            station: None,
            view: ViewState::Loading,
            command_error: None,
            last_sample: 0,
        }
    }

    pub fn show_control_overlay(&self) -> bool { self.show_control_overlay }
    pub fn planets(&self) -> &[Planet] { self.planets.as_deref().unwrap_or_default() }
    pub fn has_planets(&self) -> bool { self.planets.is_some() }
    pub fn station(&self) -> Option<&StationState> { self.station.as_ref() }
    pub fn view(&self) -> &ViewState { &self.view }
    #[cfg(test)]
    pub fn is_ready(&self) -> bool { self.view == ViewState::Ready }
    pub fn command_error(&self) -> Option<&str> { self.command_error.as_deref() }
    pub fn last_sample(&self) -> u64 { self.last_sample }
}

/// The single shared state instance, passed explicitly to every writer.
///
/// Writes go through `watch::Sender::send_modify`/`send_if_modified`,
/// subscribers are woken on every published change.
#[derive(Debug)]
pub struct StateStore {
    tx: watch::Sender<ObservableState>,
}

impl StateStore {
    /// Error text shown when a station sample arrives before any planet catalogue.
    ///
    /// [`TelemetryPoller::run`](super::TelemetryPoller::run) bootstraps while no
    /// catalogue is cached, so only direct callers of
    /// [`apply_station`](Self::apply_station) reach this state.
    pub const PLANETS_MISSING: &'static str = "planets not found";

    pub fn new() -> Self {
        let (tx, _) = watch::channel(ObservableState::new());
        Self { tx }
    }

    /// Returns a receiver that observes every published state.
    pub fn subscribe(&self) -> watch::Receiver<ObservableState> { self.tx.subscribe() }

    /// Returns a clone of the current state.
    pub fn snapshot(&self) -> ObservableState { self.tx.borrow().clone() }

    /// Returns the last known station state, if any.
    pub fn station(&self) -> Option<StationState> { self.tx.borrow().station.clone() }

    pub fn has_planets(&self) -> bool { self.tx.borrow().has_planets() }

    /// Applies a polled station sample.
    ///
    /// Samples with a sequence number not newer than the applied one are
    /// dropped. On success the cached planets are moved relative to the new
    /// position and the view is revealed; without a cached catalogue the
    /// view is suppressed.
    ///
    /// # Returns
    /// `false` if the sample was stale and nothing changed.
    pub fn apply_station(&self, seq: u64, station: StationState) -> bool {
        self.tx.send_if_modified(|state| {
            if seq <= state.last_sample {
                return false;
            }
            let pos = station.pos();
            state.last_sample = seq;
            state.station = Some(station);
            if let Some(planets) = state.planets.as_mut() {
                relocate_all(planets, pos);
                state.view = ViewState::Ready;
            } else {
                state.view = ViewState::NotReady(Self::PLANETS_MISSING.to_string());
            }
            true
        })
    }

    /// Stores the bootstrap result: the station sample together with a fresh
    /// planet catalogue, and reveals the view.
    ///
    /// A newer station sample that was applied in the meantime wins over
    /// `station`; the catalogue is relocated against whichever is kept.
    pub fn apply_bootstrap(&self, seq: u64, station: StationState, mut planets: Vec<Planet>) {
        self.tx.send_modify(|state| {
            if seq > state.last_sample || state.station.is_none() {
                state.last_sample = state.last_sample.max(seq);
                state.station = Some(station);
            }
            if let Some(current) = state.station.as_ref() {
                relocate_all(&mut planets, current.pos());
            }
            state.planets = Some(planets);
            state.view = ViewState::Ready;
        });
    }

    /// Suppresses the map and shows `message` instead.
    pub fn fail(&self, message: impl Into<String>) {
        let next = ViewState::NotReady(message.into());
        self.tx.send_if_modified(|state| {
            if state.view == next {
                return false;
            }
            state.view = next;
            true
        });
    }

    /// Records the outcome of a control command. A success clears a
    /// previous command error and leaves everything else untouched.
    pub fn record_command(&self, error: Option<String>) {
        self.tx.send_if_modified(|state| {
            if state.command_error == error {
                return false;
            }
            state.command_error = error;
            true
        });
    }

    /// Hides the control overlay if it is shown.
    ///
    /// # Returns
    /// `true` if this call hid the overlay, `false` if it already was hidden.
    pub fn try_hide_overlay(&self) -> bool {
        self.tx.send_if_modified(|state| {
            let was_shown = state.show_control_overlay;
            state.show_control_overlay = false;
            was_shown
        })
    }

    pub fn show_overlay(&self) {
        self.tx.send_if_modified(|state| {
            let was_hidden = !state.show_control_overlay;
            state.show_control_overlay = true;
            was_hidden
        });
    }
}

impl Default for StateStore {
    fn default() -> Self { Self::new() }
}
