//! Shared domain enumerations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Which button submitted the post editor form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostIntent {
    Create,
    Update,
    Delete,
}

impl PostIntent {
    pub fn as_str(self) -> &'static str {
        match self {
            PostIntent::Create => "create",
            PostIntent::Update => "update",
            PostIntent::Delete => "delete",
        }
    }
}

impl fmt::Display for PostIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostIntent {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "create" => Ok(PostIntent::Create),
            "update" => Ok(PostIntent::Update),
            "delete" => Ok(PostIntent::Delete),
            other => Err(DomainError::validation(format!(
                "unknown post intent `{other}`"
            ))),
        }
    }
}
