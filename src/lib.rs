pub mod config;
pub mod logging;
pub mod resources;
pub mod ui;
