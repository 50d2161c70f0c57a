pub mod config;
pub mod palette;
pub mod render;

pub use config::{ConfigError, ConfigFormat, ThemeConfig};
pub use palette::{BREEZE, theme};
pub use render::render_config_module;
