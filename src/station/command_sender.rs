use super::{StateStore, StationLink};
use crate::http_handler::HTTPError;
use crate::{cmd, warn};
use std::{sync::Arc, time::Duration};
use strum_macros::{Display, EnumString};

/// The control actions offered on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum StationCommand {
    /// Speed up.
    #[strum(serialize = "fire")]
    Fire,
    /// Slow down.
    #[strum(serialize = "stop")]
    Stop,
    /// Rotate counter-clockwise.
    #[strum(serialize = "left")]
    TurnLeft,
    /// Rotate clockwise.
    #[strum(serialize = "right")]
    TurnRight,
}

/// Which control value a command changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CommandAxis {
    #[strum(to_string = "linear speed")]
    LinearSpeed,
    #[strum(to_string = "rotation speed")]
    RotationSpeed,
}

impl StationCommand {
    /// Step applied per button press.
    const STEP: f64 = 10.0;

    pub fn axis(self) -> CommandAxis {
        match self {
            StationCommand::Fire | StationCommand::Stop => CommandAxis::LinearSpeed,
            StationCommand::TurnLeft | StationCommand::TurnRight => CommandAxis::RotationSpeed,
        }
    }

    pub fn delta(self) -> f64 {
        match self {
            StationCommand::Fire | StationCommand::TurnRight => Self::STEP,
            StationCommand::Stop | StationCommand::TurnLeft => -Self::STEP,
        }
    }
}

#[derive(Debug, Display)]
pub enum CommandError {
    #[strum(to_string = "No station state received yet")]
    NoStationState,
    #[strum(to_string = "Controls are cooling down")]
    Cooldown,
    #[strum(to_string = "Command failed: {source}")]
    Http { source: HTTPError },
}

impl std::error::Error for CommandError {}

/// Sends thrust and rotation commands to the station.
///
/// A command only reports success or failure. Failures are recorded as the
/// command error of the [`StateStore`] and never touch the map view.
pub struct CommandSender<L: StationLink> {
    link: Arc<L>,
    store: Arc<StateStore>,
    cooldown: Duration,
}

impl<L: StationLink> CommandSender<L> {
    /// Time the control overlay stays hidden after a command.
    pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(2);

    pub fn new(link: Arc<L>, store: Arc<StateStore>, cooldown: Duration) -> Self {
        Self { link, store, cooldown }
    }

    /// Computes the target of `command` from the last known station state.
    ///
    /// Linear speed builds on the measured speed, rotation on the requested
    /// rotation rate. Unknown values count as zero.
    fn target(&self, command: StationCommand) -> Result<f64, CommandError> {
        let station = self.store.station().ok_or(CommandError::NoStationState)?;
        let transform = station.transform();
        let last = match command.axis() {
            CommandAxis::LinearSpeed => transform.linear_speed(),
            CommandAxis::RotationSpeed => transform.required_rotation_speed_cw_deg(),
        };
        Ok(last.unwrap_or(0.0) + command.delta())
    }

    /// Issues `command` and waits for the server's answer.
    ///
    /// The control overlay is hidden for the cooldown period; commands issued
    /// meanwhile are rejected.
    ///
    /// # Returns
    /// The value that was sent.
    ///
    /// # Errors
    /// [`CommandError::NoStationState`] before the first sample,
    /// [`CommandError::Cooldown`] while the overlay is hidden, and
    /// [`CommandError::Http`] if the request failed.
    pub async fn send(&self, command: StationCommand) -> Result<f64, CommandError> {
        let target = self.target(command)?;
        if !self.store.try_hide_overlay() {
            return Err(CommandError::Cooldown);
        }
        self.schedule_overlay_restore();

        let axis = command.axis();
        let res = match axis {
            CommandAxis::LinearSpeed => self.link.set_linear_speed(target).await,
            CommandAxis::RotationSpeed => self.link.set_rotation_speed(target).await,
        };
        match res {
            Ok(ack) => {
                cmd!("{command}: {axis} set to {target:.1} ({})", ack.trim());
                self.store.record_command(None);
                Ok(target)
            }
            Err(source) => {
                warn!("{command}: setting {axis} to {target:.1} failed: {source}");
                self.store.record_command(Some(source.to_string()));
                Err(CommandError::Http { source })
            }
        }
    }

    fn schedule_overlay_restore(&self) {
        let store = Arc::clone(&self.store);
        let cooldown = self.cooldown;
        tokio::spawn(async move {
            tokio::time::sleep(cooldown).await;
            store.show_overlay();
        });
    }
}
