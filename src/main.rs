#![allow(clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod console;
mod http_handler;
mod station;
mod util;

use crate::console::{ConsoleMessenger, spawn_stdin_reader, watch_view};
use crate::util::{Keychain, StationConfig};
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let config = StationConfig::from_env();
    let keychain = Keychain::new(&config);
    info!(
        "Connecting to {} (scan radius {}, polling every {}ms)",
        keychain.client().url(),
        config.scan_radius(),
        config.poll_interval().as_millis()
    );

    let c_tok = CancellationToken::new();
    let poller = keychain.poller();
    let poll_tok = c_tok.clone();
    let poll_handle = tokio::spawn(async move { poller.run(poll_tok).await });
    let watch_handle = tokio::spawn(watch_view(keychain.store().subscribe(), c_tok.clone()));

    let console = ConsoleMessenger::new(keychain.clone());
    tokio::select! {
        () = console.run(spawn_stdin_reader(), c_tok.clone()) => info!("Console closed"),
        res = tokio::signal::ctrl_c() => {
            if let Err(e) = res {
                error!("Unable to listen for shutdown signal: {e}");
            }
            info!("Shutdown requested");
        }
    }

    c_tok.cancel();
    for (name, handle) in [("poller", poll_handle), ("state watcher", watch_handle)] {
        if let Err(e) = handle.await {
            error!("The {name} task ended abnormally: {e}");
        }
    }
}
