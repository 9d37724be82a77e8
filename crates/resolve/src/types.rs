//! Candidate types shared by every searcher and resolver.
//!
//! A [`ComponentMatch`] is one scored candidate for a user-supplied
//! identifier; [`ComponentMatches`] is the ordered collection a searcher
//! returns. Scores run downhill: `0.0` is an exact match, anything above it
//! is a weaker one, and candidates from different searchers are only
//! comparable once tier weights have been applied.
//!
//! Invariant: [`ComponentMatches::exact`] and [`ComponentMatches::inexact`]
//! partition the collection — no candidate appears in both, none is dropped.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::PartialMatch;

/// A single scored candidate produced by a [`Searcher`](crate::Searcher).
///
/// `score` semantics: `0.0` means the candidate is an exact match for the
/// query; strictly positive values indicate decreasing confidence (higher is
/// worse). `metadata` is an opaque blob owned by the producing searcher —
/// callers that need to act on the winning candidate (pull an image, load a
/// template) read what they need from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMatch {
    /// The identifier this candidate was discovered under.
    pub value: String,
    /// Match quality: `0.0` is exact, larger values are weaker matches.
    pub score: f32,
    /// Human-readable descriptor for display (image name, template name, ...).
    #[serde(default)]
    pub description: String,
    /// Opaque attributes supplied by the producing searcher.
    #[serde(default)]
    pub metadata: JsonValue,
}

impl ComponentMatch {
    pub fn new(value: impl Into<String>, score: f32) -> Self {
        Self {
            value: value.into(),
            score,
            description: String::new(),
            metadata: JsonValue::Null,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }

    /// True when this candidate matched the query exactly.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.score == 0.0
    }
}

/// An ordered collection of candidates, sortable ascending by score.
///
/// Sorting is stable: candidates with equal scores keep their discovery
/// order, so sorting an already-sorted collection changes nothing. This is
/// what makes tie-breaks deterministic across repeated resolutions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentMatches(Vec<ComponentMatch>);

impl ComponentMatches {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, candidate: ComponentMatch) {
        self.0.push(candidate);
    }

    pub fn extend(&mut self, other: ComponentMatches) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&ComponentMatch> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComponentMatch> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ComponentMatch] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<ComponentMatch> {
        self.0
    }

    /// Stable ascending sort by score. NaN scores are treated as equal to
    /// everything, which keeps the sort total without panicking; searchers
    /// are expected not to produce them.
    pub fn sort_by_score(&mut self) {
        self.0
            .sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    }

    /// The candidates with score `0.0`, in collection order.
    pub fn exact(&self) -> ComponentMatches {
        self.0.iter().filter(|m| m.is_exact()).cloned().collect()
    }

    /// The candidates with nonzero score, in collection order.
    pub fn inexact(&self) -> ComponentMatches {
        self.0.iter().filter(|m| !m.is_exact()).cloned().collect()
    }
}

impl From<Vec<ComponentMatch>> for ComponentMatches {
    fn from(matches: Vec<ComponentMatch>) -> Self {
        Self(matches)
    }
}

impl FromIterator<ComponentMatch> for ComponentMatches {
    fn from_iter<I: IntoIterator<Item = ComponentMatch>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ComponentMatches {
    type Item = ComponentMatch;
    type IntoIter = std::vec::IntoIter<ComponentMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ComponentMatches {
    type Item = &'a ComponentMatch;
    type IntoIter = std::slice::Iter<'a, ComponentMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Candidate values joined for error messages and logs.
impl fmt::Display for ComponentMatches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", m.value)?;
        }
        Ok(())
    }
}

/// A successful resolution: the single winning candidate, plus an optional
/// partial-match advisory the caller should surface as a warning.
///
/// The advisory channel exists because "best-effort candidate found" is a
/// usable outcome: the caller typically proceeds with the candidate and
/// prints the warning, rather than failing outright.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub candidate: ComponentMatch,
    pub advisory: Option<PartialMatch>,
}

impl Resolution {
    /// A clean resolution with no advisory attached.
    pub fn full(candidate: ComponentMatch) -> Self {
        Self {
            candidate,
            advisory: None,
        }
    }

    /// A best-effort resolution carrying a partial-match warning.
    pub fn partial(value: impl Into<String>, candidate: ComponentMatch) -> Self {
        let advisory = PartialMatch {
            value: value.into(),
            candidate: candidate.clone(),
        };
        Self {
            candidate,
            advisory: Some(advisory),
        }
    }

    pub fn is_partial(&self) -> bool {
        self.advisory.is_some()
    }

    pub fn into_candidate(self) -> ComponentMatch {
        self.candidate
    }
}
