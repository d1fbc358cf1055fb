use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// The single domain record managed by the service.
/// Ids are assigned by the store and unique at any point in time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: u32,
    pub title: String,
    pub year: i32,
    pub genres: Vec<String>,
}

/// Creation input: id is server-assigned, so the payload carries only the
/// user-settable fields. Unknown properties are rejected outright.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    pub title: String,
    pub year: i32,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl CreateMovie {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() {
            return Err(ModelError::Validation("title must not be empty".into()));
        }
        Ok(())
    }
}

/// Partial update input. Every field is optional; fields left out keep their
/// stored value. Unknown properties are rejected, same as on create.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

impl UpdateMovie {
    pub fn validate(&self) -> Result<(), ModelError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(ModelError::Validation("title must not be empty".into()));
            }
        }
        Ok(())
    }

    /// Merge the provided fields into an existing record, leaving the rest
    /// (including the id) untouched.
    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(genres) = &self.genres {
            movie.genres = genres.clone();
        }
    }
}
