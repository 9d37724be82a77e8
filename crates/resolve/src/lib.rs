//! # Component resolution core (`resolve`)
//!
//! ## Purpose
//!
//! `resolve` decides what a user-supplied identifier — an image name, a
//! template name, a repository reference — actually refers to. Pluggable
//! [`Searcher`]s produce scored candidates; a [`Resolver`] strategy
//! adjudicates them down to exactly one [`ComponentMatch`] or a precise,
//! typed failure. Command-line tooling sits on top: before it can act on
//! `"ruby"`, something has to decide *which* ruby.
//!
//! ## Contract
//!
//! - This crate performs no lookups of its own — no network, no file reads
//!   during a search. Searchers are injected; the engine aggregates,
//!   scores, and adjudicates what they return. (The single exception is the
//!   tiered resolver's final `is_file` probe, documented on
//!   [`PerfectMatchWeightedResolver`].)
//! - Scores run downhill: `0.0` is an exact match, higher is worse, and
//!   cross-searcher comparison is only meaningful after weighting.
//! - Everything is immutable after construction: one configured resolver
//!   can serve many threads. Composites invoke members sequentially, in
//!   configured order; a hung searcher blocks the call, so callers wanting
//!   bounded latency wrap individual searchers before injecting them.
//!
//! ## Core Types
//!
//! - [`ComponentMatch`] / [`ComponentMatches`]: scored candidates and the
//!   sortable, partitionable collections of them.
//! - [`Searcher`]: the lookup capability; [`MultiSimpleSearcher`] and
//!   [`MultiWeightedSearcher`] fan one query out over many backends.
//! - [`Resolver`]: the decision capability, in five strategies from
//!   [`FirstMatchResolver`] up to the tiered
//!   [`PerfectMatchWeightedResolver`].
//! - [`SearchError`] / [`ResolveError`] / [`PartialMatch`]: the error
//!   taxonomy — operational failures, terminal verdicts, and the soft
//!   partial-match advisory.
//!
//! ## Example
//!
//! ```
//! use resolve::{
//!     ComponentMatch, ComponentMatches, HighestUniqueScoreResolver, Resolver, SearchError,
//!     Searcher,
//! };
//!
//! struct FixedSearcher(Vec<ComponentMatch>);
//!
//! impl Searcher for FixedSearcher {
//!     fn search(&self, _terms: &[&str]) -> Result<ComponentMatches, SearchError> {
//!         Ok(self.0.clone().into())
//!     }
//! }
//!
//! let searcher = FixedSearcher(vec![
//!     ComponentMatch::new("ruby-25", 0.5),
//!     ComponentMatch::new("ruby", 0.0),
//! ]);
//! let resolver = HighestUniqueScoreResolver::new(searcher);
//!
//! let resolution = resolver.resolve("ruby").unwrap();
//! assert_eq!(resolution.candidate.value, "ruby");
//! ```

mod error;
mod resolver;
mod searcher;
mod tiered;
mod types;

pub use crate::error::{PartialMatch, ResolveError, SearchError};
pub use crate::resolver::{
    search_exact, FirstMatchResolver, HighestScoreResolver, HighestUniqueScoreResolver, Resolver,
    UniqueExactOrInexactMatchResolver,
};
pub use crate::searcher::{
    MultiSimpleSearcher, MultiWeightedSearcher, PathDiagnostics, SearchObserver, Searcher,
    TracingObserver, WeightedSearcher,
};
pub use crate::tiered::{PerfectMatchWeightedResolver, WeightedResolver};
pub use crate::types::{ComponentMatch, ComponentMatches, Resolution};
