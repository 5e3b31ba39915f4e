//! `users` table access.

use super::Store;
use crate::error::{EcoError, Result};
use rusqlite::{ErrorCode, OptionalExtension, Row, params};
use std::fmt::{Display, Formatter};

/// Surrogate key of a user row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Stored credential: a password hash, or plaintext for rows written by
    /// older releases.
    pub password: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: UserId(row.get("id")?),
            username: row.get("username")?,
            password: row.get("password")?,
            name: row.get("name")?,
            email: row.get("email")?,
        })
    }

    /// Full name when known, username otherwise.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Fields of a user row about to be inserted.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub username: &'a str,
    /// Already hashed.
    pub password: &'a str,
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl Store {
    /// Inserts a user, reporting a taken username as [`EcoError::DuplicateUsername`].
    pub fn insert_user(&self, user: &NewUser<'_>) -> Result<UserId> {
        let conn = self.connect()?;
        let inserted = conn.execute(
            "INSERT INTO users (username, password, name, email) VALUES (?1, ?2, ?3, ?4)",
            params![user.username, user.password, user.name, user.email],
        );
        match inserted {
            Ok(_) => Ok(UserId(conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(EcoError::DuplicateUsername(user.username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let conn = self.connect()?;
        let user = conn
            .query_row(
                "SELECT id, username, password, name, email FROM users WHERE username = ?1",
                params![username],
                User::from_row,
            )
            .optional()?;
        Ok(user)
    }

    pub fn find_user(&self, id: UserId) -> Result<Option<User>> {
        let conn = self.connect()?;
        let user = conn
            .query_row(
                "SELECT id, username, password, name, email FROM users WHERE id = ?1",
                params![id.0],
                User::from_row,
            )
            .optional()?;
        Ok(user)
    }

    /// Replaces the stored credential of a user.
    pub fn update_password(&self, id: UserId, password: &str) -> Result<()> {
        let conn = self.connect()?;
        conn.execute(
            "UPDATE users SET password = ?1 WHERE id = ?2",
            params![password, id.0],
        )?;
        Ok(())
    }

    pub fn count_users(&self) -> Result<i64> {
        let conn = self.connect()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?)
    }
}
