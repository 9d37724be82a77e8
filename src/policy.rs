//! Declarative strategy selection.
//!
//! [`ResolvePolicy`] is the serde-friendly description of *how* to resolve:
//! which adjudication strategy to run, and — for the tiered strategy — the
//! weight of each searcher. Deployments keep it in configuration; at
//! startup the caller pairs it with the searcher fleet and gets back a
//! ready-to-share [`Resolver`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use resolve::{
    FirstMatchResolver, HighestScoreResolver, HighestUniqueScoreResolver, MultiSimpleSearcher,
    PerfectMatchWeightedResolver, Resolver, Searcher, UniqueExactOrInexactMatchResolver,
    WeightedResolver,
};

/// Selects a resolution strategy.
///
/// The multi-searcher simple strategies fan out through a
/// [`MultiSimpleSearcher`]; `PerfectWeighted` pairs weights with searchers
/// positionally (the tiered resolver re-sorts ascending at construction).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ResolvePolicy {
    /// First match in raw searcher order.
    First,
    /// Best score wins; ties broken by discovery order.
    HighestScore,
    /// Best score wins only when it is unique.
    HighestUniqueScore,
    /// Unique exact match, falling back to a unique inexact one.
    UniqueExactOrInexact,
    /// Tiered adjudication with one weight per searcher.
    PerfectWeighted { weights: Vec<f32> },
}

impl ResolvePolicy {
    /// Validate the policy in isolation (weight arity is checked against
    /// the searcher fleet in [`build`](ResolvePolicy::build)).
    pub fn validate(&self) -> Result<(), PolicyError> {
        if let ResolvePolicy::PerfectWeighted { weights } = self {
            if weights.is_empty() {
                return Err(PolicyError::NoWeights);
            }
            for &weight in weights {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(PolicyError::InvalidWeight(weight));
                }
            }
        }
        Ok(())
    }

    /// Assemble the configured strategy over the given searchers.
    pub fn build(
        &self,
        searchers: Vec<Arc<dyn Searcher>>,
    ) -> Result<Box<dyn Resolver>, PolicyError> {
        self.validate()?;
        if searchers.is_empty() {
            return Err(PolicyError::NoSearchers);
        }

        Ok(match self {
            ResolvePolicy::First => Box::new(FirstMatchResolver::new(MultiSimpleSearcher::new(
                searchers,
            ))),
            ResolvePolicy::HighestScore => Box::new(HighestScoreResolver::new(
                MultiSimpleSearcher::new(searchers),
            )),
            ResolvePolicy::HighestUniqueScore => Box::new(HighestUniqueScoreResolver::new(
                MultiSimpleSearcher::new(searchers),
            )),
            ResolvePolicy::UniqueExactOrInexact => Box::new(
                UniqueExactOrInexactMatchResolver::new(MultiSimpleSearcher::new(searchers)),
            ),
            ResolvePolicy::PerfectWeighted { weights } => {
                if weights.len() != searchers.len() {
                    return Err(PolicyError::WeightCount {
                        weights: weights.len(),
                        searchers: searchers.len(),
                    });
                }
                let entries = searchers
                    .into_iter()
                    .zip(weights.iter().copied())
                    .map(|(searcher, weight)| WeightedResolver::new(searcher, weight))
                    .collect();
                Box::new(PerfectMatchWeightedResolver::new(entries))
            }
        })
    }
}

impl Default for ResolvePolicy {
    /// The conservative default: accept a unique exact match, fall back to
    /// a unique inexact one, and make the user break any tie.
    fn default() -> Self {
        ResolvePolicy::UniqueExactOrInexact
    }
}

/// Policy validation and assembly failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    #[error("perfect_weighted policy requires at least one weight")]
    NoWeights,
    #[error("tier weight {0} must be finite and non-negative")]
    InvalidWeight(f32),
    #[error("policy requires at least one searcher")]
    NoSearchers,
    #[error("{weights} weight(s) configured for {searchers} searcher(s)")]
    WeightCount { weights: usize, searchers: usize },
}
