//! Home screen component modules

pub mod footer;
pub mod header;
pub mod overview;
pub mod profile;
pub mod settings;
pub mod sidebar;
