/// Backend base URL lookup and validation
pub mod backend;

/// Settings file loading and source precedence
pub mod settings;

pub use settings::{AppConfig, load_app_configuration};
