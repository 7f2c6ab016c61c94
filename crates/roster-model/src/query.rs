//! Query parameters driving the derived profile view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Language, ModelError};

/// Minimum level selected when a language filter is first enabled.
pub const DEFAULT_MIN_LEVEL: i32 = 1;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(ModelError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// Field a view is sorted by.
///
/// Parsed from the textual keys used by the presentation layer: `name`,
/// `languages.<language>`, `skills`, `hobbies`, `interests`. Anything else is
/// kept verbatim as [`SortKey::Field`] and compared directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    Name,
    Language(Language),
    Skills,
    Hobbies,
    Interests,
    Field(String),
}

impl SortKey {
    pub fn parse(raw: &str) -> Self {
        let key = raw.trim();
        match key {
            "name" => Self::Name,
            "skills" => Self::Skills,
            "hobbies" => Self::Hobbies,
            "interests" => Self::Interests,
            _ => key
                .strip_prefix("languages.")
                .and_then(|lang| lang.parse::<Language>().ok())
                .map_or_else(|| Self::Field(key.to_string()), Self::Language),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Language(lang) => write!(f, "languages.{}", lang.key()),
            Self::Skills => f.write_str("skills"),
            Self::Hobbies => f.write_str("hobbies"),
            Self::Interests => f.write_str("interests"),
            Self::Field(field) => f.write_str(field),
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SortKey> for String {
    fn from(value: SortKey) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn asc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }
}

/// A selected language together with its inclusive minimum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageFilter {
    pub language: Language,
    pub min_level: i32,
}

/// Everything the query pipeline needs besides the collection itself.
///
/// Empty strings and a missing language mean the corresponding stage is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pub search: String,
    pub language: Option<Language>,
    pub min_level: i32,
    pub skill: String,
    pub sort: SortSpec,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            language: None,
            min_level: DEFAULT_MIN_LEVEL,
            skill: String::new(),
            sort: SortSpec::default(),
        }
    }
}

impl QueryParams {
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: Language, min_level: i32) -> Self {
        self.language = Some(language);
        self.min_level = min_level;
        self
    }

    #[must_use]
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skill = skill.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn language_filter(&self) -> Option<LanguageFilter> {
        self.language.map(|language| LanguageFilter {
            language,
            min_level: self.min_level,
        })
    }

    /// True when any filtering stage is active (sorting aside).
    pub fn has_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.language.is_some() || !self.skill.trim().is_empty()
    }

    /// Clears search, language and skill filters and restores the default level.
    /// The sort order is kept.
    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.language = None;
        self.min_level = DEFAULT_MIN_LEVEL;
        self.skill.clear();
    }
}
