use crate::fatal;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// against the station backend.
///
/// The client keeps both the server host (needed to resolve static asset paths
/// such as planet images) and the API root every endpoint path is appended to.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Server host, e.g. `"http://localhost:2023"`.
    host: String,
    /// API root, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Path segment under which all REST endpoints live.
    const API_ROOT: &'static str = "/api";
    /// Per-request timeout.
    const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

    /// Constructs a new `HTTPClient` for the given server host.
    ///
    /// # Arguments
    /// * `host_url` – The server host without the API suffix (e.g. `"http://192.168.1.37:2023"`).
    ///   A trailing slash is ignored.
    pub fn new(host_url: &str) -> HTTPClient { Self::with_timeout(host_url, Self::REQUEST_TIMEOUT) }

    /// Like [`HTTPClient::new`], with a custom per-request `timeout`.
    pub fn with_timeout(host_url: &str, timeout: std::time::Duration) -> HTTPClient {
        let host = host_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| fatal!("Unable to build HTTP client: {e}"));
        HTTPClient { client, base_url: format!("{host}{}", Self::API_ROOT), host }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the API root all endpoints are relative to.
    pub fn url(&self) -> &str { self.base_url.as_str() }
    /// Returns the bare server host.
    pub fn host(&self) -> &str { self.host.as_str() }
}
