use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::errors::ApiError;

/// Primary key for every entity. Wraps a v4 UUID so the textual form is the
/// canonical hyphenated encoding and generation never reuses a value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Id(Uuid);

impl Id {
    pub fn new() -> Self {
        Id(Uuid::new_v4())
    }

    pub fn parse(text: &str) -> Result<Id, ApiError> {
        Uuid::parse_str(text)
            .map(Id)
            .map_err(|_| ApiError::InvalidId(text.to_string()))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Id {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::parse(s)
    }
}

// ----------------------------- TESTS --------------------------------
