// Module declarations
mod app;
mod dialog;
mod form;
pub mod home;
mod login;
mod register;
pub mod splash;
// Re-exports for external use
pub use app::{App, UIConfig, run};
