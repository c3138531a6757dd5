mod config;
mod game_mode;

pub use config::{Config, get_config_manager};
pub use game_mode::GameMode;
