use std::cmp::Ordering;

use roster_model::{Profile, SortDirection, SortKey, SortSpec};

/// Stable sort by the requested key; equal keys keep their input order in
/// both directions.
pub fn sort_profiles(profiles: &mut [&Profile], spec: &SortSpec) {
    profiles.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, &spec.key);
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Compare two profiles on a single key, ascending.
///
/// Names compare case-insensitively, language keys numerically, and the list
/// fields by entry count. `Field` keys compare the named text field directly
/// (`id`, `image`); unknown fields compare equal.
pub fn compare_by_key(a: &Profile, b: &Profile, key: &SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_text(&a.name, &b.name),
        SortKey::Language(language) => a.languages.get(*language).cmp(&b.languages.get(*language)),
        SortKey::Skills => a.skills.len().cmp(&b.skills.len()),
        SortKey::Hobbies => a.hobbies.len().cmp(&b.hobbies.len()),
        SortKey::Interests => a.interests.len().cmp(&b.interests.len()),
        SortKey::Field(field) => match field.as_str() {
            "id" => compare_text(a.id.as_str(), b.id.as_str()),
            "image" => compare_text(&a.image, &b.image),
            _ => Ordering::Equal,
        },
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
