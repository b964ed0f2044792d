//! Text console standing in for the map screen: renders the observable
//! state and turns typed commands into station commands.

mod console_messenger;
mod render;


pub use console_messenger::{ConsoleMessenger, spawn_stdin_reader, watch_view};
