//! Registration and login.

mod password;

use password::{hash_password, verify_password};

use crate::error::{EcoError, Result};
use crate::store::{NewUser, Store, User, UserId};

/// Fields collected by the registration form, already trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Registration {
    /// Form-level check: every field, optional ones included, must be filled in.
    pub fn require_all_fields(&self) -> Result<()> {
        require("Username", &self.username)?;
        require("Password", &self.password)?;
        require("Full Name", self.name.as_deref().unwrap_or_default())?;
        require("Email", self.email.as_deref().unwrap_or_default())?;
        Ok(())
    }
}

/// Form-level check of the login fields.
pub fn require_credentials(username: &str, password: &str) -> Result<()> {
    require("Username", username)?;
    require("Password", password)
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EcoError::MissingRequiredField(field));
    }
    Ok(())
}

/// Creates a user. Fails with [`EcoError::DuplicateUsername`] when the name is taken.
pub fn register(store: &Store, registration: &Registration) -> Result<UserId> {
    let password = hash_password(&registration.password)?;
    let id = store.insert_user(&NewUser {
        username: &registration.username,
        password: &password,
        name: registration.name.as_deref(),
        email: registration.email.as_deref(),
    })?;
    log::info!("Registered user {} with id {}", registration.username, id);
    Ok(id)
}

/// Returns the user id when the credentials match.
///
/// An unknown username and a wrong password both give `None`.
pub fn authenticate(store: &Store, username: &str, password: &str) -> Result<Option<UserId>> {
    let Some(user) = store.find_user_by_username(username)? else {
        log::info!("Login failed for {}", username);
        return Ok(None);
    };
    if !verify_password(password, &user.password) {
        log::info!("Login failed for {}", username);
        return Ok(None);
    }
    if password::is_legacy(&user.password) {
        log::info!("Rehashing legacy password of user {}", user.id);
        store.update_password(user.id, &hash_password(password)?)?;
    }
    log::info!("User {} logged in", user.id);
    Ok(Some(user.id))
}

pub fn user_profile(store: &Store, id: UserId) -> Result<Option<User>> {
    store.find_user(id)
}
