use crate::warn;
use std::{env, str::FromStr, time::Duration};

/// Runtime settings of the client, read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct StationConfig {
    /// Server host, e.g. `"http://localhost:2023"`.
    base_url: String,
    /// Radius around the station in which planets are requested.
    scan_radius: u32,
    /// Period of the telemetry poller.
    poll_interval: Duration,
}

impl StationConfig {
    pub const BASE_URL_ENV: &'static str = "STATION_BASE_URL";
    pub const SCAN_RADIUS_ENV: &'static str = "STATION_SCAN_RADIUS";
    pub const POLL_INTERVAL_ENV: &'static str = "STATION_POLL_INTERVAL_MS";

    const DEFAULT_BASE_URL: &'static str = "http://localhost:2023";
    const DEFAULT_SCAN_RADIUS: u32 = 1500;
    const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

    /// Reads the configuration from `STATION_*` environment variables,
    /// falling back to the defaults for absent or unparsable values.
    pub fn from_env() -> Self {
        let base_url = env::var(Self::BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());
        let scan_radius = parse_or(
            Self::SCAN_RADIUS_ENV,
            env::var(Self::SCAN_RADIUS_ENV).ok().as_deref(),
            Self::DEFAULT_SCAN_RADIUS,
        );
        let raw_poll_ms = parse_or(
            Self::POLL_INTERVAL_ENV,
            env::var(Self::POLL_INTERVAL_ENV).ok().as_deref(),
            Self::DEFAULT_POLL_INTERVAL_MS,
        );
        // a zero period would make the poll interval panic
        let poll_ms = if raw_poll_ms == 0 {
            warn!("{} must be positive, using {}ms", Self::POLL_INTERVAL_ENV, Self::DEFAULT_POLL_INTERVAL_MS);
            Self::DEFAULT_POLL_INTERVAL_MS
        } else {
            raw_poll_ms
        };
        Self { base_url, scan_radius, poll_interval: Duration::from_millis(poll_ms) }
    }

    pub fn base_url(&self) -> &str { &self.base_url }
    pub fn scan_radius(&self) -> u32 { self.scan_radius }
    pub fn poll_interval(&self) -> Duration { self.poll_interval }
}

/// Parses `raw` or returns `default`, warning when a value was present but invalid.
pub(crate) fn parse_or<T: FromStr + Copy + std::fmt::Display>(
    name: &str,
    raw: Option<&str>,
    default: T,
) -> T {
    match raw.map(str::trim) {
        None | Some("") => default,
        Some(v) => v.parse().unwrap_or_else(|_| {
            warn!("Invalid value '{v}' for {name}, using {default}");
            default
        }),
    }
}
