//! Staff profile records and the inputs used to create or edit them.

use serde::{Deserialize, Serialize};

use crate::{Language, Languages, ProfileId, ValidationError};

/// A single staff member's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    /// Photo path or URL; empty when there is no photo.
    pub image: String,
    pub languages: Languages,
    pub skills: Vec<String>,
    pub hobbies: Vec<String>,
    pub interests: Vec<String>,
}

impl Profile {
    pub fn has_image(&self) -> bool {
        !self.image.trim().is_empty()
    }

    /// Drops the id, keeping every editable field.
    pub fn to_draft(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.clone(),
            image: self.image.clone(),
            languages: self.languages,
            skills: self.skills.clone(),
            hobbies: self.hobbies.clone(),
            interests: self.interests.clone(),
        }
    }
}

/// Every profile field except the id, as submitted by a create form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub image: String,
    pub languages: Languages,
    pub skills: Vec<String>,
    pub hobbies: Vec<String>,
    pub interests: Vec<String>,
}

impl ProfileDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: Languages) -> Self {
        self.languages = languages;
        self
    }

    #[must_use]
    pub fn with_level(mut self, language: Language, level: i32) -> Self {
        self.languages.set(language, level);
        self
    }

    #[must_use]
    pub fn with_skill(mut self, skill: &str) -> Self {
        push_item(&mut self.skills, skill);
        self
    }

    #[must_use]
    pub fn with_hobby(mut self, hobby: &str) -> Self {
        push_item(&mut self.hobbies, hobby);
        self
    }

    #[must_use]
    pub fn with_interest(mut self, interest: &str) -> Self {
        push_item(&mut self.interests, interest);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)
    }

    pub fn into_profile(self, id: ProfileId) -> Profile {
        Profile {
            id,
            name: self.name,
            image: self.image,
            languages: self.languages,
            skills: self.skills,
            hobbies: self.hobbies,
            interests: self.interests,
        }
    }
}

/// Partial update merged into an existing profile. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub languages: Option<Languages>,
    pub skills: Option<Vec<String>>,
    pub hobbies: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image.is_none()
            && self.languages.is_none()
            && self.skills.is_none()
            && self.hobbies.is_none()
            && self.interests.is_none()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }

    /// Overwrites the fields present in the patch; the id is never touched.
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(image) = &self.image {
            profile.image = image.clone();
        }
        if let Some(languages) = self.languages {
            profile.languages = languages;
        }
        if let Some(skills) = &self.skills {
            profile.skills = skills.clone();
        }
        if let Some(hobbies) = &self.hobbies {
            profile.hobbies = hobbies.clone();
        }
        if let Some(interests) = &self.interests {
            profile.interests = interests.clone();
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(())
    }
}

// Form entries are trimmed and blank ones are ignored.
fn push_item(items: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        items.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        ProfileDraft::new("Omar")
            .with_image("omar.png")
            .with_level(Language::Arabic, 5)
            .with_skill("Art")
            .into_profile(ProfileId::for_row(1))
    }

    #[test]
    fn draft_items_are_trimmed_and_blank_ones_skipped() {
        let draft = ProfileDraft::new("Sara")
            .with_skill("  Math ")
            .with_skill("   ")
            .with_hobby("Chess")
            .with_interest("");
        assert_eq!(draft.skills, vec!["Math"]);
        assert_eq!(draft.hobbies, vec!["Chess"]);
        assert!(draft.interests.is_empty());
    }

    #[test]
    fn blank_name_fails_validation() {
        assert_eq!(
            ProfileDraft::new("  ").validate(),
            Err(ValidationError::EmptyName)
        );
        assert!(ProfileDraft::new("Amina").validate().is_ok());
        let patch = ProfilePatch {
            name: Some(String::new()),
            ..ProfilePatch::default()
        };
        assert_eq!(patch.validate().unwrap_err().field(), "name");
        assert!(ProfilePatch::default().validate().is_ok());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut profile = sample();
        let patch = ProfilePatch {
            name: Some("Omar K".to_string()),
            skills: Some(vec!["Art".to_string(), "Design".to_string()]),
            ..ProfilePatch::default()
        };
        patch.apply_to(&mut profile);
        assert_eq!(profile.id, "teacher-1");
        assert_eq!(profile.name, "Omar K");
        assert_eq!(profile.image, "omar.png");
        assert_eq!(profile.languages.arabic, 5);
        assert_eq!(profile.skills, vec!["Art", "Design"]);
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ProfilePatch::default().is_empty());
        let patch = ProfilePatch {
            image: Some(String::new()),
            ..ProfilePatch::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn to_draft_round_trips_fields() {
        let profile = sample();
        let back = profile.to_draft().into_profile(profile.id.clone());
        assert_eq!(back, profile);
        assert!(profile.has_image());
    }
}
