use crate::http_handler::http_client::HTTPClient;
use crate::station::{CommandSender, StateStore, TelemetryPoller};
use crate::util::StationConfig;
use std::sync::Arc;

/// Struct bundling the shared components of the client, providing access
/// to the HTTP client, the observable state, the telemetry poller and the
/// command sender.
///
/// # Fields
/// - `client`: The http client connected with the station API endpoint.
/// - `store`: The observable state read by the console.
/// - `poller`: The telemetry poller keeping station and map current.
/// - `commander`: The command sender issuing thrust and rotation changes.
#[derive(Clone)]
pub struct Keychain {
    /// The HTTP client for performing network requests.
    client: Arc<HTTPClient>,
    /// The single shared state instance.
    store: Arc<StateStore>,
    /// The periodic station poller.
    poller: Arc<TelemetryPoller<HTTPClient>>,
    /// The command sender for the station controls.
    commander: Arc<CommandSender<HTTPClient>>,
}

impl Keychain {
    /// Creates a new instance of `Keychain` from the runtime configuration.
    ///
    /// # Arguments
    /// - `config`: Server host, scan radius and poll period.
    pub fn new(config: &StationConfig) -> Self {
        let client = Arc::new(HTTPClient::new(config.base_url()));
        let store = Arc::new(StateStore::new());
        let poller = Arc::new(TelemetryPoller::new(
            Arc::clone(&client),
            Arc::clone(&store),
            config.scan_radius(),
            config.poll_interval(),
        ));
        let commander = Arc::new(CommandSender::new(
            Arc::clone(&client),
            Arc::clone(&store),
            CommandSender::<HTTPClient>::DEFAULT_COOLDOWN,
        ));
        Self { client, store, poller, commander }
    }

    /// Provides a cloned reference to the HTTP client.
    pub fn client(&self) -> Arc<HTTPClient> { Arc::clone(&self.client) }

    /// Provides a cloned reference to the state store.
    pub fn store(&self) -> Arc<StateStore> { Arc::clone(&self.store) }

    /// Provides a cloned reference to the telemetry poller.
    pub fn poller(&self) -> Arc<TelemetryPoller<HTTPClient>> { Arc::clone(&self.poller) }

    /// Provides a cloned reference to the command sender.
    pub fn commander(&self) -> Arc<CommandSender<HTTPClient>> { Arc::clone(&self.commander) }
}
