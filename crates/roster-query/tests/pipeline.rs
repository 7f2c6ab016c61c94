//! Integration tests for the query pipeline.

use std::cmp::Ordering;
use std::collections::HashMap;

use proptest::prelude::*;
use roster_model::{
    Language, Languages, Profile, ProfileDraft, ProfileId, QueryParams, SortKey, SortSpec,
};
use roster_query::{compare_by_key, compute_view};

fn teacher(index: usize, name: &str, english: i32, skill: &str) -> Profile {
    ProfileDraft::new(name)
        .with_level(Language::English, english)
        .with_skill(skill)
        .into_profile(ProfileId::for_row(index))
}

fn scenario() -> Vec<Profile> {
    vec![
        teacher(0, "Amina", 5, "Math"),
        teacher(1, "Omar", 2, "Art"),
        teacher(2, "Sara", 4, "Math"),
    ]
}

fn names(view: &[Profile]) -> Vec<&str> {
    view.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn language_filter_and_name_sort_scenario() {
    let params = QueryParams::default()
        .with_language(Language::English, 3)
        .with_sort(SortSpec::asc(SortKey::Name));
    let view = compute_view(&scenario(), &params);
    assert_eq!(names(&view), vec!["Amina", "Sara"]);
}

#[test]
fn default_params_sort_by_name_only() {
    let mut collection = scenario();
    collection.reverse();
    let view = compute_view(&collection, &QueryParams::default());
    assert_eq!(names(&view), vec!["Amina", "Omar", "Sara"]);
}

#[test]
fn stages_compose_in_order() {
    let collection = scenario();
    let params = QueryParams::default()
        .with_search("math")
        .with_skill("MATH")
        .with_language(Language::English, 5)
        .with_sort(SortSpec::desc(SortKey::Name));
    let view = compute_view(&collection, &params);
    assert_eq!(names(&view), vec!["Amina"]);
}

#[test]
fn search_matches_name_and_lists() {
    let collection = vec![
        ProfileDraft::new("Fatima")
            .with_hobby("Gardening")
            .into_profile(ProfileId::for_row(0)),
        ProfileDraft::new("Yusuf")
            .with_interest("Astronomy")
            .into_profile(ProfileId::for_row(1)),
    ];
    let by_hobby = compute_view(&collection, &QueryParams::default().with_search("garden"));
    assert_eq!(names(&by_hobby), vec!["Fatima"]);
    let by_typo = compute_view(&collection, &QueryParams::default().with_search("astronmy"));
    assert_eq!(names(&by_typo), vec!["Yusuf"]);
    let by_name = compute_view(&collection, &QueryParams::default().with_search("yusuf"));
    assert_eq!(names(&by_name), vec!["Yusuf"]);
}

#[test]
fn unrelated_term_yields_empty_view() {
    let view = compute_view(&scenario(), &QueryParams::default().with_search("zzzzzz"));
    assert!(view.is_empty());
}

#[test]
fn input_is_not_mutated() {
    let collection = scenario();
    let before = collection.clone();
    let _ = compute_view(
        &collection,
        &QueryParams::default().with_sort(SortSpec::desc(SortKey::Name)),
    );
    assert_eq!(collection, before);
}

fn arb_profile() -> impl Strategy<Value = ProfileDraft> {
    (
        prop::sample::select(vec!["Amina", "amina", "Omar", "Sara", "Zaid"]),
        prop::array::uniform5(0i32..=5),
        prop::collection::vec(
            prop::sample::select(vec!["Math", "math tutoring", "Art", "PYTHON", "Python"]),
            0..3,
        ),
    )
        .prop_map(|(name, levels, skills)| {
            let mut languages = Languages::default();
            for (language, level) in Language::ALL.into_iter().zip(levels) {
                languages.set(language, level);
            }
            let mut draft = ProfileDraft::new(name).with_languages(languages);
            for skill in skills {
                draft = draft.with_skill(skill);
            }
            draft
        })
}

fn arb_collection() -> impl Strategy<Value = Vec<Profile>> {
    prop::collection::vec(arb_profile(), 0..12).prop_map(|drafts| {
        drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| draft.into_profile(ProfileId::for_row(index)))
            .collect()
    })
}

fn arb_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(vec![
        SortKey::Name,
        SortKey::Language(Language::English),
        SortKey::Language(Language::Malayalam),
        SortKey::Skills,
        SortKey::Hobbies,
        SortKey::Field("unknown".to_string()),
    ])
}

proptest! {
    #[test]
    fn language_filter_partitions_collection(
        collection in arb_collection(),
        language in prop::sample::select(Language::ALL.to_vec()),
        min_level in 0i32..=5,
    ) {
        let params = QueryParams::default().with_language(language, min_level);
        let view = compute_view(&collection, &params);
        let kept: Vec<&ProfileId> = view.iter().map(|p| &p.id).collect();
        for profile in &view {
            prop_assert!(profile.languages.get(language) >= min_level);
        }
        for profile in collection.iter().filter(|p| !kept.contains(&&p.id)) {
            prop_assert!(profile.languages.get(language) < min_level);
        }
    }

    #[test]
    fn sort_is_stable_in_both_directions(
        collection in arb_collection(),
        key in arb_key(),
        descending in any::<bool>(),
    ) {
        let spec = if descending { SortSpec::desc(key.clone()) } else { SortSpec::asc(key.clone()) };
        let position: HashMap<&ProfileId, usize> =
            collection.iter().enumerate().map(|(idx, p)| (&p.id, idx)).collect();
        let view = compute_view(&collection, &QueryParams::default().with_sort(spec));
        prop_assert_eq!(view.len(), collection.len());
        for pair in view.windows(2) {
            let ordering = compare_by_key(&pair[0], &pair[1], &key);
            let expected_not = if descending { Ordering::Less } else { Ordering::Greater };
            prop_assert_ne!(ordering, expected_not);
            if ordering == Ordering::Equal {
                prop_assert!(position[&pair[0].id] < position[&pair[1].id]);
            }
        }
    }

    #[test]
    fn skill_filter_ignores_case(collection in arb_collection()) {
        let upper = compute_view(&collection, &QueryParams::default().with_skill("PYTHON"));
        let lower = compute_view(&collection, &QueryParams::default().with_skill("python"));
        prop_assert_eq!(upper, lower);
    }
}
