//! Approximate free-text search over profiles.
//!
//! A term matches a field when some substring of the field is within a small
//! Levenshtein distance of the term. The allowed distance grows with the term
//! length: `floor(len * threshold)` edits, so short terms must match exactly
//! and longer ones tolerate typos.

use std::cmp::Ordering;

use rapidfuzz::distance::levenshtein;
use roster_model::Profile;

/// Default strictness: at most 30% of the term's characters may be edits.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// A profile that passed the search stage with its match error
/// (0.0 for an exact substring match, higher is worse).
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub profile: &'a Profile,
    pub error: f64,
}

/// Fuzzy matcher applied to name, skills, hobbies and interests.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher {
    threshold: f64,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl FuzzyMatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Search `profiles` for `term`, best matches first.
    ///
    /// Matching is case-insensitive. Profiles with equal error keep their input
    /// order. A blank term matches everything with error 0.
    pub fn search<'a>(&self, profiles: &[&'a Profile], term: &str) -> Vec<SearchHit<'a>> {
        let pattern: Vec<char> = term.trim().to_lowercase().chars().collect();
        if pattern.is_empty() {
            return profiles
                .iter()
                .copied()
                .map(|profile| SearchHit { profile, error: 0.0 })
                .collect();
        }
        let mut hits: Vec<SearchHit<'a>> = profiles
            .iter()
            .copied()
            .filter_map(|profile| {
                self.profile_error(&pattern, profile)
                    .map(|error| SearchHit { profile, error })
            })
            .collect();
        hits.sort_by(|a, b| a.error.partial_cmp(&b.error).unwrap_or(Ordering::Equal));
        hits
    }

    /// Best (lowest) error of any searchable field, or `None` if nothing matches.
    fn profile_error(&self, pattern: &[char], profile: &Profile) -> Option<f64> {
        std::iter::once(&profile.name)
            .chain(&profile.skills)
            .chain(&profile.hobbies)
            .chain(&profile.interests)
            .filter_map(|field| self.field_error(pattern, field))
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    fn field_error(&self, pattern: &[char], field: &str) -> Option<f64> {
        let text: Vec<char> = field.to_lowercase().chars().collect();
        let max_edits = self.max_edits(pattern.len());
        substring_distance(pattern, &text, max_edits)
            .map(|edits| edits as f64 / pattern.len() as f64)
    }

    fn max_edits(&self, pattern_len: usize) -> usize {
        (pattern_len as f64 * self.threshold + f64::EPSILON).floor() as usize
    }
}

/// Smallest edit distance between `pattern` and any substring of `text`,
/// provided it does not exceed `max_edits`.
///
/// Only windows whose length differs from the pattern by at most `max_edits`
/// can reach that bound, so those are the only ones compared.
fn substring_distance(pattern: &[char], text: &[char], max_edits: usize) -> Option<usize> {
    let min_len = pattern.len().saturating_sub(max_edits);
    let max_len = (pattern.len() + max_edits).min(text.len());
    let mut best: Option<usize> = None;
    for len in min_len..=max_len {
        if len == 0 {
            // An empty window costs one deletion per pattern character.
            best = Some(pattern.len());
            continue;
        }
        for window in text.windows(len) {
            let edits = levenshtein::distance(pattern.iter().copied(), window.iter().copied());
            if edits <= max_edits && best.is_none_or(|current| edits < current) {
                best = Some(edits);
                if edits == 0 {
                    return best;
                }
            }
        }
    }
    best
}
