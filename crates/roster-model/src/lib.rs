pub mod error;
pub mod ids;
pub mod language;
pub mod profile;
pub mod query;

pub use error::{ModelError, ValidationError};
pub use ids::ProfileId;
pub use language::{Language, Languages, proficiency_label};
pub use profile::{Profile, ProfileDraft, ProfilePatch};
pub use query::{DEFAULT_MIN_LEVEL, LanguageFilter, QueryParams, SortDirection, SortKey, SortSpec};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_into_profile_keeps_fields() {
        let draft = ProfileDraft::new("Amina")
            .with_level(Language::English, 5)
            .with_skill("Math");
        let profile = draft.into_profile(ProfileId::new("teacher-1").unwrap());
        assert_eq!(profile.id.as_str(), "teacher-1");
        assert_eq!(profile.name, "Amina");
        assert_eq!(profile.languages.english, 5);
        assert_eq!(profile.skills, vec!["Math".to_string()]);
    }

    #[test]
    fn query_params_serialize() {
        let params = QueryParams::default();
        let json = serde_json::to_string(&params).expect("serialize params");
        let round: QueryParams = serde_json::from_str(&json).expect("deserialize params");
        assert_eq!(round, params);
    }
}
