//! The profile store.
//!
//! Holds the canonical collection, the query parameters, the load state and
//! the derived view. Every mutator and parameter setter recomputes the view
//! synchronously, so readers never observe a stale or partial result.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::Utc;
use roster_ingest::{LoadError, load_profiles_from_path};
use roster_model::{
    Language, Profile, ProfileDraft, ProfileId, ProfilePatch, QueryParams, SortSpec,
};
use roster_query::{FuzzyMatcher, compute_view_with};
use tracing::{debug, error, info};

/// Message shown to users when the roster could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load profile data. Please try again later.";

/// Read-only view of the store handed to the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct StoreSnapshot<'a> {
    pub profiles: &'a [Profile],
    pub view: &'a [Profile],
    pub loading: bool,
    pub error: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
    params: QueryParams,
    matcher: FuzzyMatcher,
    view: Vec<Profile>,
    loading: bool,
    error: Option<String>,
    selected: Option<ProfileId>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    /// An empty store waiting for its dataset.
    pub fn new() -> Self {
        Self {
            profiles: Vec::new(),
            params: QueryParams::default(),
            matcher: FuzzyMatcher::default(),
            view: Vec::new(),
            loading: true,
            error: None,
            selected: None,
        }
    }

    /// A store that is already loaded with `profiles`.
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        let mut store = Self::new();
        store.finish_load(Ok(profiles));
        store
    }

    /// Read the dataset at `path`, recording a load failure instead of
    /// returning it.
    pub fn load_from_path(path: &Path) -> Self {
        let mut store = Self::new();
        store.finish_load(load_profiles_from_path(path));
        store
    }

    /// Complete the one-time load. A failure leaves the collection empty and
    /// sets the user-visible error; there is no retry.
    pub fn finish_load(&mut self, result: Result<Vec<Profile>, LoadError>) {
        self.loading = false;
        match result {
            Ok(profiles) => {
                info!(profile_count = profiles.len(), "profile store ready");
                self.profiles = profiles;
                self.error = None;
            }
            Err(err) => {
                error!(error = %err, detail = %err.user_message(), "profile load failed");
                self.profiles.clear();
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        self.recompute();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The canonical collection in insertion order.
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// The filtered and sorted view for the current parameters.
    pub fn view(&self) -> &[Profile] {
        &self.view
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn snapshot(&self) -> StoreSnapshot<'_> {
        StoreSnapshot {
            profiles: &self.profiles,
            view: &self.view,
            loading: self.loading,
            error: self.error.as_deref(),
        }
    }

    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| &profile.id == id)
    }

    /// Distinct skills across the collection, sorted, for skill pickers.
    pub fn unique_skills(&self) -> Vec<String> {
        self.profiles
            .iter()
            .flat_map(|profile| profile.skills.iter())
            .filter(|skill| !skill.is_empty())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // --- Mutators ---

    /// Append a new profile with a fresh id and return that id.
    pub fn create(&mut self, draft: ProfileDraft) -> ProfileId {
        let id = self.next_id();
        debug!(id = %id, "creating profile");
        self.profiles.push(draft.into_profile(id.clone()));
        self.recompute();
        id
    }

    /// Merge `patch` into the profile with `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: &ProfileId, patch: &ProfilePatch) {
        match self.profiles.iter_mut().find(|profile| &profile.id == id) {
            Some(profile) => {
                patch.apply_to(profile);
                debug!(id = %id, "updated profile");
                self.recompute();
            }
            None => debug!(id = %id, "update ignored: no such profile"),
        }
    }

    /// Remove the profile with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &ProfileId) {
        let before = self.profiles.len();
        self.profiles.retain(|profile| &profile.id != id);
        if self.profiles.len() == before {
            debug!(id = %id, "delete ignored: no such profile");
            return;
        }
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        debug!(id = %id, "deleted profile");
        self.recompute();
    }

    // --- Selection ---

    /// Select the profile with `id`; unknown ids clear the selection.
    pub fn select(&mut self, id: Option<&ProfileId>) {
        self.selected = id.filter(|id| self.get(id).is_some()).cloned();
    }

    /// The selected profile as it currently stands in the collection.
    pub fn selected(&self) -> Option<&Profile> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    // --- Query parameters ---

    pub fn set_params(&mut self, params: QueryParams) {
        self.params = params;
        self.recompute();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.params.search = term.into();
        self.recompute();
    }

    pub fn set_language(&mut self, language: Option<Language>) {
        self.params.language = language;
        self.recompute();
    }

    pub fn set_min_level(&mut self, level: i32) {
        self.params.min_level = level;
        self.recompute();
    }

    pub fn set_skill(&mut self, skill: impl Into<String>) {
        self.params.skill = skill.into();
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.params.sort = sort;
        self.recompute();
    }

    pub fn reset_filters(&mut self) {
        self.params.reset_filters();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.view = compute_view_with(&self.matcher, &self.profiles, &self.params);
        debug!(
            total = self.profiles.len(),
            visible = self.view.len(),
            "view recomputed"
        );
    }

    /// `teacher-<now in ms>`, bumped forward until it does not collide.
    fn next_id(&self) -> ProfileId {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = ProfileId::for_timestamp(millis);
            if self.get(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ProfileStore {
        ProfileStore::with_profiles(vec![
            ProfileDraft::new("Omar")
                .with_skill("Art")
                .into_profile(ProfileId::for_row(0)),
            ProfileDraft::new("Amina")
                .with_skill("Math")
                .with_skill("Art")
                .into_profile(ProfileId::for_row(1)),
        ])
    }

    #[test]
    fn new_store_is_loading_until_finished() {
        let mut store = ProfileStore::new();
        assert!(store.is_loading());
        store.finish_load(Ok(Vec::new()));
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        assert!(store.view().is_empty());
    }

    #[test]
    fn failed_load_sets_message_and_empties_collection() {
        let mut store = seeded();
        store.finish_load(load_profiles_from_path(Path::new("/no/such/roster.csv")));
        assert_eq!(store.error(), Some(LOAD_ERROR_MESSAGE));
        assert!(store.profiles().is_empty());
        assert!(!store.snapshot().loading);
    }

    #[test]
    fn created_ids_are_unique() {
        let mut store = seeded();
        let first = store.create(ProfileDraft::new("Sara"));
        let second = store.create(ProfileDraft::new("Zaid"));
        assert_ne!(first, second);
        assert!(first.as_str().starts_with("teacher-"));
        assert_eq!(store.profiles().len(), 4);
        assert_eq!(store.profiles()[2].name, "Sara");
    }

    #[test]
    fn unique_skills_are_sorted_and_distinct() {
        assert_eq!(seeded().unique_skills(), vec!["Art", "Math"]);
    }

    #[test]
    fn selection_follows_updates_and_deletes() {
        let mut store = seeded();
        let id = ProfileId::for_row(0);
        store.select(Some(&id));
        store.update(
            &id,
            &ProfilePatch {
                name: Some("Omar K".to_string()),
                ..ProfilePatch::default()
            },
        );
        assert_eq!(store.selected().map(|p| p.name.as_str()), Some("Omar K"));
        store.delete(&id);
        assert!(store.selected().is_none());
    }

    #[test]
    fn selecting_unknown_id_clears_selection() {
        let mut store = seeded();
        store.select(Some(&ProfileId::for_row(1)));
        store.select(Some(&ProfileId::for_row(9)));
        assert!(store.selected().is_none());
    }
}
