//! The profile query pipeline.
//!
//! [`compute_view`] turns the full collection plus [`QueryParams`] into the
//! ordered list shown to users. Stages run in a fixed order, each feeding the
//! next, and are skipped when their parameter is unset:
//!
//! 1. fuzzy free-text search (best matches first)
//! 2. language filter (`level >= min_level`)
//! 3. skill filter (case-insensitive substring)
//! 4. stable sort
//!
//! The pipeline never mutates its input. An empty result is a normal outcome.

pub mod filter;
pub mod search;
pub mod sort;

use roster_model::{Profile, QueryParams};
use tracing::debug;

pub use filter::{filter_by_language, filter_by_skill};
pub use search::{DEFAULT_THRESHOLD, FuzzyMatcher, SearchHit};
pub use sort::{compare_by_key, sort_profiles};

/// Run the pipeline with the default fuzzy matcher.
pub fn compute_view(collection: &[Profile], params: &QueryParams) -> Vec<Profile> {
    compute_view_with(&FuzzyMatcher::default(), collection, params)
}

/// Run the pipeline with an explicit matcher.
pub fn compute_view_with(
    matcher: &FuzzyMatcher,
    collection: &[Profile],
    params: &QueryParams,
) -> Vec<Profile> {
    select(matcher, collection, params)
        .into_iter()
        .cloned()
        .collect()
}

/// Same as [`compute_view_with`] but borrows from the collection.
pub fn select<'a>(
    matcher: &FuzzyMatcher,
    collection: &'a [Profile],
    params: &QueryParams,
) -> Vec<&'a Profile> {
    let mut view: Vec<&Profile> = collection.iter().collect();

    if !params.search.trim().is_empty() {
        view = matcher
            .search(&view, &params.search)
            .into_iter()
            .map(|hit| hit.profile)
            .collect();
        debug!(remaining = view.len(), "search stage");
    }

    if let Some(filter) = params.language_filter() {
        view = filter_by_language(view, filter);
        debug!(
            language = %filter.language,
            min_level = filter.min_level,
            remaining = view.len(),
            "language stage"
        );
    }

    if !params.skill.trim().is_empty() {
        view = filter_by_skill(view, &params.skill);
        debug!(remaining = view.len(), "skill stage");
    }

    sort_profiles(&mut view, &params.sort);
    view
}
