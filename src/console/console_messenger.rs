use super::render::{render_catalogue, render_map, render_status};
use crate::station::{CommandError, ObservableState, StationCommand, ViewState};
use crate::util::Keychain;
use crate::{error, info, log, warn};
use std::io::BufRead;
use strum_macros::EnumString;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

/// Console-only requests that do not talk to the station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub(super) enum ConsoleRequest {
    Status,
    Map,
    Planets,
    Help,
    Quit,
}

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ConsoleInput {
    Command(StationCommand),
    Request(ConsoleRequest),
}

impl ConsoleInput {
    pub(super) fn parse(line: &str) -> Option<Self> {
        let word = line.trim();
        if let Ok(command) = word.parse::<StationCommand>() {
            return Some(ConsoleInput::Command(command));
        }
        word.parse::<ConsoleRequest>().ok().map(ConsoleInput::Request)
    }
}

const HELP: &str = "commands: fire | stop | left | right | status | map | planets | help | quit";

/// Reads stdin on a detached thread and forwards every line.
///
/// The blocking read cannot be cancelled and stays off the runtime; the
/// thread ends with the process. The channel closes at end of input.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(10);
    std::thread::spawn(move || {
        for next in std::io::stdin().lock().lines() {
            let line = match next {
                Ok(line) => line,
                Err(e) => {
                    error!("Reading console input failed: {e}");
                    break;
                }
            };
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Reads commands from stdin and answers them from the shared state.
pub struct ConsoleMessenger {
    keychain: Keychain,
}

impl ConsoleMessenger {
    pub fn new(keychain: Keychain) -> Self { Self { keychain } }

    /// Serves `lines` until `quit`, end of input or cancellation.
    pub async fn run(&self, mut lines: mpsc::Receiver<String>, c_tok: CancellationToken) {
        info!("{HELP}");
        loop {
            let line = tokio::select! {
                () = c_tok.cancelled() => break,
                next = lines.recv() => match next {
                    Some(line) => line,
                    None => break,
                },
            };
            if line.trim().is_empty() {
                continue;
            }
            match ConsoleInput::parse(&line) {
                Some(ConsoleInput::Request(ConsoleRequest::Quit)) => break,
                Some(input) => self.handle(input).await,
                None => warn!("Unknown command '{}', {HELP}", line.trim()),
            }
        }
    }

    async fn handle(&self, input: ConsoleInput) {
        let state = self.keychain.store().snapshot();
        match input {
            ConsoleInput::Command(command) => {
                match self.keychain.commander().send(command).await {
                    Ok(_) => {}
                    Err(CommandError::Cooldown) => warn!("Controls are cooling down, try again shortly"),
                    Err(e) => warn!("{e}"),
                }
            }
            ConsoleInput::Request(ConsoleRequest::Status) => match state.station() {
                Some(station) => println!("{}", render_status(station)),
                None => warn!("No station state received yet"),
            },
            ConsoleInput::Request(ConsoleRequest::Map) => println!("{}", render_map(&state)),
            ConsoleInput::Request(ConsoleRequest::Planets) => {
                println!("{}", render_catalogue(state.planets()));
            }
            ConsoleInput::Request(ConsoleRequest::Help | ConsoleRequest::Quit) => info!("{HELP}"),
        }
    }
}

/// Logs transitions of the map view until `c_tok` is cancelled.
pub async fn watch_view(mut rx: watch::Receiver<ObservableState>, c_tok: CancellationToken) {
    let mut last_view = rx.borrow_and_update().view().clone();
    let mut last_cmd_err = None;
    loop {
        tokio::select! {
            () = c_tok.cancelled() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
        let (view, cmd_err) = {
            let state = rx.borrow_and_update();
            (state.view().clone(), state.command_error().map(str::to_string))
        };
        if view != last_view {
            match &view {
                ViewState::Ready => log!("Map ready"),
                ViewState::NotReady(msg) => error!("Map unavailable: {msg}"),
                ViewState::Loading => {}
            }
            last_view = view;
        }
        if cmd_err != last_cmd_err {
            if let Some(err) = &cmd_err {
                warn!("Control link degraded: {err}");
            }
            last_cmd_err = cmd_err;
        }
    }
}
