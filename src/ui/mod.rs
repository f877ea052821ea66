pub mod app;
pub mod components;
pub mod events;
pub mod footer;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod resources;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
