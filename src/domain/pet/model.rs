use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::id::Id;
use crate::utils::errors::ApiError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pet {
    pub id: Id,
    pub name: String,
    pub age: i32,
    /// The user that currently owns this pet, if any. At most one owner at
    /// any time; the repository rewrites this on reassignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Id>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PetUpdateReceive {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

impl Pet {
    pub fn new(name: String, age: i32) -> Result<Self, ApiError> {
        if name.is_empty() {
            return Err(ApiError::InvalidData("Name cannot be empty".to_string()));
        }
        if age < 0 {
            return Err(ApiError::InvalidData("Age cannot be negative".to_string()));
        }

        let now = Utc::now();
        Ok(Pet {
            id: Id::new(),
            name,
            age,
            owner: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply(mut self, receive: PetUpdateReceive) -> Result<Self, ApiError> {
        if let Some(name) = receive.name {
            if name.is_empty() {
                return Err(ApiError::InvalidData("Name cannot be empty".to_string()));
            }
            self.name = name;
        }
        if let Some(age) = receive.age {
            if age < 0 {
                return Err(ApiError::InvalidData("Age cannot be negative".to_string()));
            }
            self.age = age;
        }
        self.updated_at = Utc::now();
        Ok(self)
    }
}

// ----------------------------- TESTS --------------------------------
