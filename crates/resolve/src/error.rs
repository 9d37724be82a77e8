//! The error surface of the resolution engine.
//!
//! Two layers, deliberately separate:
//!
//! - [`SearchError`] — operational failures of a search itself (bad input,
//!   I/O, parsing). Searchers never use errors to signal "nothing found" or
//!   "too many found"; an empty match set is a perfectly good answer.
//! - [`ResolveError`] — the resolution layer's verdicts: absence
//!   ([`NoMatch`](ResolveError::NoMatch)), ambiguity
//!   ([`MultipleMatches`](ResolveError::MultipleMatches)), or a propagated
//!   operational failure.
//!
//! [`PartialMatch`] sits outside both: it is an advisory attached to a
//! *successful* [`Resolution`](crate::Resolution) whose winner is not a
//! perfect match. Callers usually proceed with the candidate and log the
//! advisory as a warning.
//!
//! All types are cloneable and comparable so tests and callers can match on
//! them precisely.

use thiserror::Error;

use crate::types::{ComponentMatch, ComponentMatches};

/// Operational failures raised by a [`Searcher`](crate::Searcher).
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Query terms the searcher cannot interpret.
    #[error("invalid search term: {0}")]
    InvalidTerm(String),
    /// I/O failure while consulting a backing store.
    #[error("search i/o failure: {0}")]
    Io(String),
    /// A candidate source exists but could not be parsed.
    #[error("search parse failure: {0}")]
    Parse(String),
    /// Searcher-specific failure that fits no other category.
    #[error("search backend failure: {0}")]
    Backend(String),
    /// Several members of a fan-out search failed.
    #[error("{} search failure(s): {}", .0.len(), join_errors(.0))]
    Aggregate(Vec<SearchError>),
}

impl SearchError {
    /// Fold member failures into a single error: none stays `None`, one is
    /// returned as itself, several become [`SearchError::Aggregate`].
    pub fn aggregate(mut failures: Vec<SearchError>) -> Option<SearchError> {
        match failures.len() {
            0 => None,
            1 => failures.pop(),
            _ => Some(SearchError::Aggregate(failures)),
        }
    }
}

fn join_errors(errors: &[SearchError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Terminal failures of [`Resolver::resolve`](crate::Resolver::resolve).
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ResolveError {
    /// No candidate was found anywhere; reported to the user as "not found".
    #[error("no match found for \"{value}\"")]
    NoMatch { value: String },
    /// More than one candidate qualifies. The candidate list is included so
    /// the user can disambiguate manually.
    #[error("multiple matches found for \"{value}\": {candidates}")]
    MultipleMatches {
        value: String,
        candidates: ComponentMatches,
    },
    /// A searcher failed while looking for candidates.
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl ResolveError {
    pub fn no_match(value: impl Into<String>) -> Self {
        ResolveError::NoMatch {
            value: value.into(),
        }
    }

    pub fn multiple(value: impl Into<String>, candidates: ComponentMatches) -> Self {
        ResolveError::MultipleMatches {
            value: value.into(),
            candidates,
        }
    }
}

/// Advisory attached to a successful [`Resolution`](crate::Resolution)
/// whose winning candidate has a nonzero score.
///
/// Implements [`std::error::Error`] so callers can feed it to their usual
/// warning/logging machinery, but it never terminates a resolution.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("\"{value}\" resolved to \"{}\" through a partial match (score {})", .candidate.value, .candidate.score)]
pub struct PartialMatch {
    /// The identifier the caller asked to resolve.
    pub value: String,
    /// The best-effort candidate the resolution settled on.
    pub candidate: ComponentMatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_folds_by_count() {
        assert_eq!(SearchError::aggregate(vec![]), None);

        let single = SearchError::aggregate(vec![SearchError::Io("disk gone".into())]);
        assert_eq!(single, Some(SearchError::Io("disk gone".into())));

        let several = SearchError::aggregate(vec![
            SearchError::Io("disk gone".into()),
            SearchError::Parse("bad json".into()),
        ]);
        match several {
            Some(SearchError::Aggregate(inner)) => assert_eq!(inner.len(), 2),
            other => panic!("expected aggregate, got {other:?}"),
        }
    }

    #[test]
    fn aggregate_message_lists_members() {
        let err = SearchError::Aggregate(vec![
            SearchError::Io("disk gone".into()),
            SearchError::Parse("bad json".into()),
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("2 search failure(s):"), "{msg}");
        assert!(msg.contains("disk gone"), "{msg}");
        assert!(msg.contains("bad json"), "{msg}");
    }

    #[test]
    fn resolve_error_messages_name_the_value() {
        let err = ResolveError::no_match("mysql");
        assert_eq!(err.to_string(), "no match found for \"mysql\"");

        let candidates: ComponentMatches = vec![
            ComponentMatch::new("mysql-community", 0.5),
            ComponentMatch::new("mysql-enterprise", 0.5),
        ]
        .into();
        let err = ResolveError::multiple("mysql", candidates);
        let msg = err.to_string();
        assert!(msg.contains("mysql-community"), "{msg}");
        assert!(msg.contains("mysql-enterprise"), "{msg}");
    }

    #[test]
    fn partial_match_displays_both_sides() {
        let advisory = PartialMatch {
            value: "node".into(),
            candidate: ComponentMatch::new("nodejs", 0.5),
        };
        let msg = advisory.to_string();
        assert!(msg.contains("node"), "{msg}");
        assert!(msg.contains("nodejs"), "{msg}");
    }
}
