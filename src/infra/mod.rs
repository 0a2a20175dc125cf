//! Infrastructure module - logging, paths, configuration

pub mod logging;
pub mod paths;
pub mod settings;

pub use logging::{init_tracing, is_debug_enabled};
pub use paths::{get_app_dir, get_settings_path};
pub use settings::Settings;
