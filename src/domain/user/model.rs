use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::Id;
use crate::utils::errors::ApiError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    pub id: Id,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Ids of the pets this user currently owns. Kept consistent by the
    /// repository: pet reassignment and deletes rewrite this list.
    pub pets: Vec<Id>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update received from the transport layer. Absent fields leave
/// the stored value untouched.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserUpdateReceive {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl User {
    pub fn new(
        email: String,
        password: String,
        first_name: String,
        last_name: String,
    ) -> Result<Self, ApiError> {
        if email.is_empty() {
            return Err(ApiError::InvalidData("Email cannot be empty".to_string()));
        }
        if password.is_empty() {
            return Err(ApiError::InvalidData("Password cannot be empty".to_string()));
        }

        let now = Utc::now();
        Ok(User {
            id: Id::new(),
            email,
            password,
            first_name,
            last_name,
            pets: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Merges the fields present in the patch into this record and returns
    /// the updated snapshot.
    pub fn apply(mut self, receive: UserUpdateReceive) -> Result<Self, ApiError> {
        if let Some(email) = receive.email {
            if email.is_empty() {
                return Err(ApiError::InvalidData("Email cannot be empty".to_string()));
            }
            self.email = email;
        }
        if let Some(password) = receive.password {
            if password.is_empty() {
                return Err(ApiError::InvalidData("Password cannot be empty".to_string()));
            }
            self.password = password;
        }
        if let Some(first_name) = receive.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = receive.last_name {
            self.last_name = last_name;
        }
        self.updated_at = Utc::now();
        Ok(self)
    }
}

// ----------------------------- TESTS --------------------------------
