//! Station telemetry and control: the data model, the shared observable
//! state, the periodic telemetry poller and the command sender.

mod command_sender;
mod observable_state;
mod planet;
mod station_link;
mod station_state;
mod telemetry_poller;


pub use command_sender::{CommandError, CommandSender, StationCommand};
pub use observable_state::{ObservableState, StateStore, ViewState};
pub use planet::Planet;
pub use station_link::StationLink;
pub use station_state::{StationState, UNKNOWN, fmt_reading};
#[cfg(test)]
pub use station_state::StationTransform;
pub use telemetry_poller::TelemetryPoller;
