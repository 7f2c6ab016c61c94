//! Spoken languages tracked per profile and their proficiency levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// One of the five languages every profile carries a level for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Arabic,
    Urdu,
    Malayalam,
    Hindi,
}

impl Language {
    /// All languages in display and export order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Arabic,
        Language::Urdu,
        Language::Malayalam,
        Language::Hindi,
    ];

    /// Lowercase key used in sort keys (`languages.<key>`) and serialized data.
    pub fn key(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Arabic => "arabic",
            Language::Urdu => "urdu",
            Language::Malayalam => "malayalam",
            Language::Hindi => "hindi",
        }
    }

    /// Column header used in the source table.
    pub fn column(self) -> &'static str {
        match self {
            Language::English => "ENGLISH",
            Language::Arabic => "ARABIC",
            Language::Urdu => "URDU",
            Language::Malayalam => "MALAYALAM",
            Language::Hindi => "HINDI",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
            Language::Urdu => "Urdu",
            Language::Malayalam => "Malayalam",
            Language::Hindi => "Hindi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ModelError::UnknownLanguage(s.to_string()))
    }
}

/// Proficiency levels for all five languages.
///
/// Levels are nominally in `0..=5`, where 0 means "no data" and is hidden from
/// display. Values outside that range are kept as loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Languages {
    pub english: i32,
    pub arabic: i32,
    pub urdu: i32,
    pub malayalam: i32,
    pub hindi: i32,
}

impl Languages {
    pub fn get(&self, language: Language) -> i32 {
        match language {
            Language::English => self.english,
            Language::Arabic => self.arabic,
            Language::Urdu => self.urdu,
            Language::Malayalam => self.malayalam,
            Language::Hindi => self.hindi,
        }
    }

    pub fn set(&mut self, language: Language, level: i32) {
        let slot = match language {
            Language::English => &mut self.english,
            Language::Arabic => &mut self.arabic,
            Language::Urdu => &mut self.urdu,
            Language::Malayalam => &mut self.malayalam,
            Language::Hindi => &mut self.hindi,
        };
        *slot = level;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, i32)> + '_ {
        Language::ALL.into_iter().map(|lang| (lang, self.get(lang)))
    }

    /// Languages with a non-zero level, in display order.
    pub fn displayed(&self) -> impl Iterator<Item = (Language, i32)> + '_ {
        self.iter().filter(|(_, level)| *level != 0)
    }
}

/// Human-readable label for a proficiency level.
pub fn proficiency_label(level: i32) -> &'static str {
    match level {
        l if l >= 5 => "Native",
        4 => "Fluent",
        3 => "Advanced",
        2 => "Intermediate",
        _ => "Basic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_keys_case_insensitively() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" malayalam ".parse::<Language>().unwrap(), Language::Malayalam);
        assert!("french".parse::<Language>().is_err());
    }

    #[test]
    fn set_and_get_round_trip_every_language() {
        let mut levels = Languages::default();
        for (offset, lang) in Language::ALL.into_iter().enumerate() {
            levels.set(lang, offset as i32 + 1);
        }
        let collected: Vec<i32> = levels.iter().map(|(_, level)| level).collect();
        assert_eq!(collected, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn displayed_skips_zero_levels() {
        let levels = Languages {
            english: 4,
            urdu: 2,
            ..Languages::default()
        };
        let shown: Vec<Language> = levels.displayed().map(|(lang, _)| lang).collect();
        assert_eq!(shown, vec![Language::English, Language::Urdu]);
    }

    #[test]
    fn labels_follow_level_thresholds() {
        assert_eq!(proficiency_label(9), "Native");
        assert_eq!(proficiency_label(5), "Native");
        assert_eq!(proficiency_label(4), "Fluent");
        assert_eq!(proficiency_label(3), "Advanced");
        assert_eq!(proficiency_label(2), "Intermediate");
        assert_eq!(proficiency_label(1), "Basic");
    }
}
