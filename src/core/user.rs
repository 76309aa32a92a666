use std::fmt;

use serde::{Serialize, Deserialize};

use crate::core::error::ProbeResult;

/// The record sent to the user endpoint. Neither field is validated.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(username: &str, password: &str) -> UserRecord {
        UserRecord { username: username.to_owned(), password: password.to_owned() }
    }

    pub fn example() -> UserRecord {
        UserRecord::new("username", "123456")
    }

    /// Serialize into the JSON text used as a request body.
    pub fn to_payload(&self) -> ProbeResult<String> {
        let payload = serde_json::to_string(self)?;
        return Ok(payload);
    }

    pub fn from_payload(payload: &str) -> ProbeResult<UserRecord> {
        let record = serde_json::from_str(payload)?;
        return Ok(record);
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}

// keep the password out of logs
impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserRecord {}", self.username)
    }
}
