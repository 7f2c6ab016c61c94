#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Prefix shared by every generated profile id.
pub const PROFILE_ID_PREFIX: &str = "teacher-";

/// Identifier of a profile within one collection.
///
/// Loaded rows get `teacher-<row index>`, created profiles get
/// `teacher-<creation timestamp>`. Ids are never supplied by callers of the
/// create operation.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidProfileId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Id assigned to the row at `index` of a loaded dataset.
    pub fn for_row(index: usize) -> Self {
        Self(format!("{PROFILE_ID_PREFIX}{index}"))
    }

    /// Id assigned to a profile created at `millis` since the Unix epoch.
    pub fn for_timestamp(millis: i64) -> Self {
        Self(format!("{PROFILE_ID_PREFIX}{millis}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ProfileId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProfileId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
