//! The logged-in user, carried from the login screen into the home screen.

use crate::store::UserId;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub username: String,
    pub logged_in_at: DateTime<Local>,
}

impl Session {
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            logged_in_at: Local::now(),
        }
    }

    /// Local date used as the entry date of new readings.
    pub fn today(&self) -> chrono::NaiveDate {
        Local::now().date_naive()
    }
}
