//! Home screen
//!
//! Sidebar navigation, consumption summary and the utility entry grid

pub mod components;
pub mod renderer;
pub mod state;

pub use renderer::render_home;
pub use state::{HomeAction, HomeState};
