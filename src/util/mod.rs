mod config;
mod keychain;
pub mod logger;
mod vec2d;

pub use config::StationConfig;
pub use keychain::Keychain;
pub use vec2d::Vec2D;
