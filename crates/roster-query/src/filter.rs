use roster_model::{LanguageFilter, Profile};

/// Keep profiles whose level in the selected language is at least the minimum.
pub fn filter_by_language<'a>(
    profiles: Vec<&'a Profile>,
    filter: LanguageFilter,
) -> Vec<&'a Profile> {
    profiles
        .into_iter()
        .filter(|profile| profile.languages.get(filter.language) >= filter.min_level)
        .collect()
}

/// Keep profiles with a skill containing `skill`, ignoring case.
/// A blank filter keeps everything.
pub fn filter_by_skill<'a>(profiles: Vec<&'a Profile>, skill: &str) -> Vec<&'a Profile> {
    let needle = skill.trim().to_lowercase();
    if needle.is_empty() {
        return profiles;
    }
    profiles
        .into_iter()
        .filter(|profile| {
            profile
                .skills
                .iter()
                .any(|candidate| candidate.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::{Language, ProfileDraft, ProfileId};

    fn profiles() -> Vec<Profile> {
        vec![
            ProfileDraft::new("Amina")
                .with_level(Language::Urdu, 5)
                .with_skill("Python Programming")
                .into_profile(ProfileId::for_row(0)),
            ProfileDraft::new("Omar")
                .with_level(Language::Urdu, 2)
                .with_skill("Art")
                .into_profile(ProfileId::for_row(1)),
            ProfileDraft::new("Sara")
                .with_level(Language::Urdu, 3)
                .into_profile(ProfileId::for_row(2)),
        ]
    }

    #[test]
    fn language_minimum_is_inclusive() {
        let all = profiles();
        let kept = filter_by_language(
            all.iter().collect(),
            LanguageFilter {
                language: Language::Urdu,
                min_level: 3,
            },
        );
        let names: Vec<&str> = kept.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Amina", "Sara"]);
    }

    #[test]
    fn skill_filter_matches_substrings() {
        let all = profiles();
        let kept = filter_by_skill(all.iter().collect(), "program");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Amina");
        assert!(filter_by_skill(all.iter().collect(), "cooking").is_empty());
        assert_eq!(filter_by_skill(all.iter().collect(), "  ").len(), 3);
    }
}
