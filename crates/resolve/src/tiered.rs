//! Tiered adjudication: the strategy behind "try the exact sources first,
//! then widen the net".
//!
//! A [`PerfectMatchWeightedResolver`] walks its searchers in tiers of equal
//! weight, lowest weight first. A tier that produces a lone perfect match
//! ends the walk immediately; everything else a tier produces is rescaled by
//! the tier weight and pooled. Once the tiers are exhausted the pool is
//! adjudicated: a strict best candidate wins (with a partial-match advisory
//! when its score is nonzero), a tie is ambiguity, and an empty pool is "no
//! match" — unless a file-backed searcher can tell a better story about a
//! path-shaped input.
//!
//! The walk is strictly one-way: tiers are visited in ascending-weight
//! order, and there is no backtracking into an already-processed tier.

use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::ResolveError;
use crate::resolver::Resolver;
use crate::searcher::{
    MultiSimpleSearcher, PathDiagnostics as _, SearchObserver, Searcher, TracingObserver,
};
use crate::types::{ComponentMatches, Resolution};


/// A searcher participating in tiered resolution, tagged with its tier
/// weight.
///
/// Weight `0.0` is the authoritative exact tier: its matches keep their raw
/// scores. Nonzero weights mark fallback tiers whose pooled scores are
/// rescaled by the weight, so a whole tier ranks behind every lower one.
#[derive(Clone)]
pub struct WeightedResolver {
    pub searcher: Arc<dyn Searcher>,
    pub weight: f32,
}

impl WeightedResolver {
    pub fn new(searcher: Arc<dyn Searcher>, weight: f32) -> Self {
        Self { searcher, weight }
    }
}

/// Resolves through weighted tiers, short-circuiting on a perfect match.
pub struct PerfectMatchWeightedResolver {
    resolvers: Vec<WeightedResolver>,
    observer: Arc<dyn SearchObserver>,
}

impl PerfectMatchWeightedResolver {
    /// Build a tiered resolver over the given entries.
    ///
    /// Entries are stably re-sorted by ascending weight here: tier grouping
    /// walks contiguous runs of equal weight, so an unsorted sequence would
    /// silently split one logical tier into several. Equal-weight entries
    /// keep the order they were given in, which is also their merge order
    /// within the tier.
    pub fn new(mut resolvers: Vec<WeightedResolver>) -> Self {
        resolvers.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));
        Self {
            resolvers,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the failure sink handed to each tier's fan-out search.
    pub fn with_observer(mut self, observer: Arc<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The configured entries, ascending by weight.
    pub fn entries(&self) -> &[WeightedResolver] {
        &self.resolvers
    }

    /// Last-resort diagnostic for an empty pool: when `value` names an
    /// existing file, a searcher with path diagnostics may know precisely
    /// why that file produced no candidate (say, a syntax error in a
    /// template), and that beats a generic "no match".
    fn diagnose_path(&self, value: &str) -> Option<ResolveError> {
        if !Path::new(value).is_file() {
            return None;
        }
        for entry in &self.resolvers {
            if let Some(diagnostics) = entry.searcher.diagnostics() {
                if let Some(err) = diagnostics.diagnose(value) {
                    return Some(err.into());
                }
            }
        }
        None
    }
}

impl Resolver for PerfectMatchWeightedResolver {
    fn resolve(&self, value: &str) -> Result<Resolution, ResolveError> {
        let mut imperfect = ComponentMatches::new();

        for tier in self.resolvers.chunk_by(|a, b| a.weight == b.weight) {
            let weight = tier[0].weight;
            let group = MultiSimpleSearcher::new(
                tier.iter().map(|entry| Arc::clone(&entry.searcher)).collect(),
            )
            .with_observer(Arc::clone(&self.observer));

            let (matches, err) = group.search_all(&[value]);
            if matches.is_empty() {
                if let Some(err) = err {
                    // A tier that failed outright and produced nothing is a
                    // genuine failure, not an empty result.
                    debug!(value, weight, error = %err, "tier search failed");
                    return Err(err.into());
                }
                continue;
            }

            // search_all returns the tier's merge sorted ascending.
            let mut pool = matches.into_inner();
            if pool[0].score == 0.0 && (pool.len() == 1 || pool[1].score != 0.0) {
                // A lone perfect match is authoritative; lower tiers are
                // never consulted.
                return Ok(Resolution::full(pool.swap_remove(0)));
            }
            for mut candidate in pool {
                if weight != 0.0 {
                    candidate.score *= weight;
                }
                imperfect.push(candidate);
            }
        }

        match imperfect.len() {
            0 => match self.diagnose_path(value) {
                Some(err) => Err(err),
                None => Err(ResolveError::no_match(value)),
            },
            1 => {
                let best = imperfect.into_inner().remove(0);
                if best.score != 0.0 {
                    Ok(Resolution::partial(value, best))
                } else {
                    Ok(Resolution::full(best))
                }
            }
            _ => {
                imperfect.sort_by_score();
                let pool = imperfect.as_slice();
                if pool[0].score < pool[1].score {
                    let best = imperfect.into_inner().swap_remove(0);
                    if best.score != 0.0 {
                        Ok(Resolution::partial(value, best))
                    } else {
                        Ok(Resolution::full(best))
                    }
                } else {
                    Err(ResolveError::multiple(value, imperfect))
                }
            }
        }
    }
}
