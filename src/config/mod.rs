mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, Profile, Project, ResourcesConfig, StartView, UiConfig, DEFAULT_ENDPOINT,
};
