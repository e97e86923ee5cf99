use serde::{Deserialize, Serialize};

use super::TableRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "usuario")]
    pub username: String,
    /// Lowercase hex SHA-256 of the password.
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl TableRow for Account {
    const HEADERS: &'static [&'static str] = &["usuario", "password"];
}

#[derive(Debug, Deserialize)]
pub struct CreateAccount {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}
