//! Workspace umbrella crate for the component-resolution engine.
//!
//! This crate stitches the core engine and the file-backed template
//! searcher together behind one API entry point, and adds the declarative
//! [`ResolvePolicy`] layer so deployments can pick a resolution strategy in
//! configuration rather than code.
//!
//! A typical caller builds its searcher fleet (registry, template,
//! repository, ...), picks a policy, and resolves:
//!
//! ```
//! use std::sync::Arc;
//! use resolvent::{
//!     ComponentMatch, ComponentMatches, ResolvePolicy, Resolver, SearchError, Searcher,
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
//! let searchers: Vec<Arc<dyn Searcher>> = vec![Arc::new(FixedSearcher(vec![
//!     ComponentMatch::new("ruby", 0.0),
//!     ComponentMatch::new("ruby-25", 0.5),
//! ]))];
//!
//! let resolver = ResolvePolicy::default().build(searchers).unwrap();
//! let resolution = resolver.resolve("ruby").unwrap();
//! assert_eq!(resolution.candidate.value, "ruby");
//! ```

pub use resolve::{
    search_exact, ComponentMatch, ComponentMatches, FirstMatchResolver, HighestScoreResolver,
    HighestUniqueScoreResolver, MultiSimpleSearcher, MultiWeightedSearcher, PartialMatch,
    PathDiagnostics, PerfectMatchWeightedResolver, Resolution, ResolveError, Resolver,
    SearchError, SearchObserver, Searcher, TracingObserver, WeightedResolver, WeightedSearcher,
};
pub use template::{TemplateFileSearcher, TemplateManifest};

mod policy;

pub use crate::policy::{PolicyError, ResolvePolicy};
