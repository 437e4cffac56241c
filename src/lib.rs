// Library crate: positioning core, in-memory host and the terminal front end

pub mod config;
pub mod event;
pub mod geometry;
pub mod host;
pub mod menu;
pub mod types;
pub mod view;
pub mod viewport;

#[cfg(feature = "runtime")]
pub mod app;
#[cfg(feature = "runtime")]
pub mod keybindings;
