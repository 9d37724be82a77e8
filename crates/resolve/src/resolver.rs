//! Resolution strategies: turning a scored candidate set into one decision.
//!
//! A [`Resolver`] answers a single question — "which concrete resource does
//! this string mean?" — with exactly one candidate or a definitive, typed
//! failure. The four strategies here differ only in how they adjudicate the
//! candidate set their searcher returns:
//!
//! | Strategy | Picks | Can report ambiguity |
//! |----------|-------|----------------------|
//! | [`FirstMatchResolver`] | first in raw searcher order | no |
//! | [`HighestScoreResolver`] | best (lowest) score | no |
//! | [`HighestUniqueScoreResolver`] | best score, if unique | yes |
//! | [`UniqueExactOrInexactMatchResolver`] | unique exact, else unique inexact | yes |
//!
//! The fifth, tier-aware strategy lives in
//! [`tiered`](crate::PerfectMatchWeightedResolver).
//!
//! Strategies never swallow an operational searcher error: only the absence
//! or ambiguity of *results* is translated into
//! [`NoMatch`](crate::ResolveError::NoMatch) /
//! [`MultipleMatches`](crate::ResolveError::MultipleMatches).

use crate::error::ResolveError;
use crate::searcher::Searcher;
use crate::types::{ComponentMatch, Resolution};

/// A capability producing exactly one candidate — or a definitive failure —
/// for a single query value.
pub trait Resolver: Send + Sync {
    fn resolve(&self, value: &str) -> Result<Resolution, ResolveError>;
}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve(&self, value: &str) -> Result<Resolution, ResolveError> {
        (**self).resolve(value)
    }
}

impl<R: Resolver + ?Sized> Resolver for Box<R> {
    fn resolve(&self, value: &str) -> Result<Resolution, ResolveError> {
        (**self).resolve(value)
    }
}

impl<R: Resolver + ?Sized> Resolver for std::sync::Arc<R> {
    fn resolve(&self, value: &str) -> Result<Resolution, ResolveError> {
        (**self).resolve(value)
    }
}

/// Resolves to the first match in the searcher's raw output order.
///
/// No sorting happens, so the searcher's configured member order is the
/// whole policy. Never fails with `MultipleMatches`; an empty result set is
/// `NoMatch`.
pub struct FirstMatchResolver<S> {
    pub searcher: S,
}

impl<S> FirstMatchResolver<S> {
    pub fn new(searcher: S) -> Self {
        Self { searcher }
    }
}

impl<S: Searcher> Resolver for FirstMatchResolver<S> {
    fn resolve(&self, value: &str) -> Result<Resolution, ResolveError> {
        let matches = self.searcher.search(&[value])?;
        let first = matches
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::no_match(value))?;
        Ok(Resolution::full(first))
    }
}

/// Resolves to the best-scored match, ties broken by discovery order.
///
/// Never fails with `MultipleMatches`.
pub struct HighestScoreResolver<S> {
    pub searcher: S,
}

impl<S> HighestScoreResolver<S> {
    pub fn new(searcher: S) -> Self {
        Self { searcher }
    }
}

impl<S: Searcher> Resolver for HighestScoreResolver<S> {
    fn resolve(&self, value: &str) -> Result<Resolution, ResolveError> {
        let mut matches = self.searcher.search(&[value])?;
        matches.sort_by_score();
        let best = matches
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::no_match(value))?;
        Ok(Resolution::full(best))
    }
}

/// Resolves to the best-scored match only when that score is unique.
///
/// A tie at the minimum is ambiguity the user has to break, so it fails
/// with `MultipleMatches` carrying the whole candidate set.
pub struct HighestUniqueScoreResolver<S> {
    pub searcher: S,
}

impl<S> HighestUniqueScoreResolver<S> {
    pub fn new(searcher: S) -> Self {
        Self { searcher }
    }
}

impl<S: Searcher> Resolver for HighestUniqueScoreResolver<S> {
    fn resolve(&self, value: &str) -> Result<Resolution, ResolveError> {
        let mut matches = self.searcher.search(&[value])?;
        matches.sort_by_score();
        match matches.as_slice() {
            [] => Err(ResolveError::no_match(value)),
            [_] => {
                let best = matches.into_inner().remove(0);
                Ok(Resolution::full(best))
            }
            [best, runner_up, ..] => {
                if best.score == runner_up.score {
                    return Err(ResolveError::multiple(value, matches));
                }
                let best = matches.into_inner().remove(0);
                Ok(Resolution::full(best))
            }
        }
    }
}

/// Resolves to the unique exact match, falling back to a unique inexact one.
///
/// One exact match wins outright; two or more exact matches are ambiguous
/// regardless of any inexact candidates. With no exact match, a lone
/// inexact candidate is accepted as-is.
pub struct UniqueExactOrInexactMatchResolver<S> {
    pub searcher: S,
}

impl<S> UniqueExactOrInexactMatchResolver<S> {
    pub fn new(searcher: S) -> Self {
        Self { searcher }
    }
}

impl<S: Searcher> Resolver for UniqueExactOrInexactMatchResolver<S> {
    fn resolve(&self, value: &str) -> Result<Resolution, ResolveError> {
        let mut matches = self.searcher.search(&[value])?;
        matches.sort_by_score();

        let exact = matches.exact();
        match exact.len() {
            0 => {
                let inexact = matches.inexact();
                match inexact.len() {
                    0 => Err(ResolveError::no_match(value)),
                    1 => {
                        let only = inexact.into_inner().remove(0);
                        Ok(Resolution::full(only))
                    }
                    // Deliberate: the ambiguity report carries the exact set,
                    // which is empty on this branch. Callers parse the shape
                    // of this error; changing it is a breaking change.
                    _ => Err(ResolveError::multiple(value, exact)),
                }
            }
            1 => {
                let only = exact.into_inner().remove(0);
                Ok(Resolution::full(only))
            }
            _ => Err(ResolveError::multiple(value, exact)),
        }
    }
}

/// Split a searcher's results for `value` into the unique exact match (if
/// any) and the inexact remainder.
///
/// More than one exact candidate is ambiguity and fails with
/// `MultipleMatches` carrying the exact set. Useful for pre-qualifying a
/// candidate before committing to a heavier resolution pipeline.
pub fn search_exact<S: Searcher>(
    searcher: &S,
    value: &str,
) -> Result<(Option<ComponentMatch>, Vec<ComponentMatch>), ResolveError> {
    let matches = searcher.search(&[value])?;

    let exact = matches.exact();
    let inexact = matches.inexact().into_inner();
    match exact.len() {
        0 => Ok((None, inexact)),
        1 => Ok((exact.into_inner().pop(), inexact)),
        _ => Err(ResolveError::multiple(value, exact)),
    }
}
