//! The searcher side of the engine: capability traits and the composite
//! searchers that fan a query out over several backends.
//!
//! ## Contract
//!
//! - A [`Searcher`] produces zero or more scored candidates for the given
//!   terms. Finding nothing is not an error; finding too much is not an
//!   error. Any `Err` is an operational failure of the search itself.
//! - A match scored `0.0` represents exact identity with the query.
//! - Searchers hold no mutable state; a configured searcher may be shared
//!   across threads and reused for many searches.
//!
//! Composite searchers come in two flavors. [`MultiSimpleSearcher`] merges
//! members as equals and reports member failures as an aggregated error.
//! [`MultiWeightedSearcher`] biases each member's scores by that member's
//! weight before merging, and drops failing members entirely — a broken
//! fallback backend should not take down the search.
//!
//! Failures inside the composites are reported through an injected
//! [`SearchObserver`] rather than a process-wide logger, so embedding
//! applications decide what "logging" means. The default observer forwards
//! to `tracing`.

use std::sync::Arc;

use tracing::warn;

use crate::error::SearchError;
use crate::types::ComponentMatches;

/// A capability producing zero or more scored candidates for query terms.
pub trait Searcher: Send + Sync {
    /// Search for candidates matching `terms`.
    ///
    /// Implementations must not signal "no match" or "ambiguous match" via
    /// `Err` — those verdicts belong to the resolution layer. An empty
    /// [`ComponentMatches`] is the correct way to report absence.
    fn search(&self, terms: &[&str]) -> Result<ComponentMatches, SearchError>;

    /// Capability probe: searchers able to explain why a path-shaped input
    /// produced no candidate return themselves here.
    fn diagnostics(&self) -> Option<&dyn PathDiagnostics> {
        None
    }
}

/// Optional capability of file-backed searchers: explain why a given path
/// cannot produce a candidate.
///
/// The tiered resolver consults this as a last resort when resolution found
/// nothing and the input names an existing file — a concrete parse error is
/// a far better answer than a generic "no match".
pub trait PathDiagnostics {
    /// Re-examine `path`; `Some` carries the underlying failure.
    fn diagnose(&self, path: &str) -> Option<SearchError>;
}

impl<S: Searcher + ?Sized> Searcher for &S {
    fn search(&self, terms: &[&str]) -> Result<ComponentMatches, SearchError> {
        (**self).search(terms)
    }

    fn diagnostics(&self) -> Option<&dyn PathDiagnostics> {
        (**self).diagnostics()
    }
}

impl<S: Searcher + ?Sized> Searcher for Box<S> {
    fn search(&self, terms: &[&str]) -> Result<ComponentMatches, SearchError> {
        (**self).search(terms)
    }

    fn diagnostics(&self) -> Option<&dyn PathDiagnostics> {
        (**self).diagnostics()
    }
}

impl<S: Searcher + ?Sized> Searcher for Arc<S> {
    fn search(&self, terms: &[&str]) -> Result<ComponentMatches, SearchError> {
        (**self).search(terms)
    }

    fn diagnostics(&self) -> Option<&dyn PathDiagnostics> {
        (**self).diagnostics()
    }
}

/// Sink for non-fatal failures inside composite searchers.
///
/// Fan-out searchers keep going when a member fails; the failure lands here
/// instead of aborting the call. Inject a custom sink with
/// [`MultiSimpleSearcher::with_observer`] /
/// [`MultiWeightedSearcher::with_observer`] to route these events into
/// metrics or a test capture.
pub trait SearchObserver: Send + Sync {
    /// A member searcher failed for the given terms.
    fn search_failed(&self, terms: &[&str], err: &SearchError);
}

/// Default observer: structured `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn search_failed(&self, terms: &[&str], err: &SearchError) {
        warn!(?terms, error = %err, "member search failed");
    }
}

/// Fan-out over an ordered set of equal-standing searchers.
pub struct MultiSimpleSearcher {
    searchers: Vec<Arc<dyn Searcher>>,
    observer: Arc<dyn SearchObserver>,
}

impl MultiSimpleSearcher {
    pub fn new(searchers: Vec<Arc<dyn Searcher>>) -> Self {
        Self {
            searchers,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn len(&self) -> usize {
        self.searchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.searchers.is_empty()
    }

    /// Invoke every member in configured order and merge the survivors.
    ///
    /// Member failures are reported to the observer and folded into the
    /// returned aggregate; they never abort the call. The merged matches are
    /// sorted ascending by score (stable, so members earlier in the list win
    /// ties). The aggregate is `None` when every member succeeded.
    pub fn search_all(&self, terms: &[&str]) -> (ComponentMatches, Option<SearchError>) {
        let mut merged = ComponentMatches::new();
        let mut failures = Vec::new();
        for searcher in &self.searchers {
            match searcher.search(terms) {
                Ok(matches) => merged.extend(matches),
                Err(err) => {
                    self.observer.search_failed(terms, &err);
                    failures.push(err);
                }
            }
        }
        merged.sort_by_score();
        (merged, SearchError::aggregate(failures))
    }
}

impl Searcher for MultiSimpleSearcher {
    /// At the trait boundary a member failure takes precedence: resolution
    /// strategies built on a plain [`Searcher`] must not act on a candidate
    /// set that is silently missing a backend's contribution. Callers that
    /// want the partial results alongside the aggregate use
    /// [`search_all`](MultiSimpleSearcher::search_all).
    fn search(&self, terms: &[&str]) -> Result<ComponentMatches, SearchError> {
        match self.search_all(terms) {
            (matches, None) => Ok(matches),
            (_, Some(err)) => Err(err),
        }
    }
}

/// A searcher paired with a priority weight.
///
/// Weight `0.0` marks the authoritative exact tier; higher weights mark
/// fallback tiers whose candidates rank behind every lower tier.
#[derive(Clone)]
pub struct WeightedSearcher {
    pub searcher: Arc<dyn Searcher>,
    pub weight: f32,
}

impl WeightedSearcher {
    pub fn new(searcher: Arc<dyn Searcher>, weight: f32) -> Self {
        Self { searcher, weight }
    }
}

/// Fan-out over weighted searchers.
///
/// Every surviving match gets its member's weight *added* to its score
/// before merging. The bias is additive rather than multiplicative so a
/// whole tier ranks behind lower tiers while base scores still order peers
/// within the tier.
pub struct MultiWeightedSearcher {
    searchers: Vec<WeightedSearcher>,
    observer: Arc<dyn SearchObserver>,
}

impl MultiWeightedSearcher {
    pub fn new(searchers: Vec<WeightedSearcher>) -> Self {
        Self {
            searchers,
            observer: Arc::new(TracingObserver),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }
}

impl Searcher for MultiWeightedSearcher {
    /// A failing member is reported and dropped; the search still succeeds
    /// with whatever the other members produced.
    fn search(&self, terms: &[&str]) -> Result<ComponentMatches, SearchError> {
        let mut merged = ComponentMatches::new();
        for member in &self.searchers {
            match member.searcher.search(terms) {
                Ok(matches) => {
                    for mut candidate in matches {
                        candidate.score += member.weight;
                        merged.push(candidate);
                    }
                }
                Err(err) => self.observer.search_failed(terms, &err),
            }
        }
        merged.sort_by_score();
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::types::ComponentMatch;

    /// Searcher returning a fixed candidate list.
    struct StaticSearcher(Vec<ComponentMatch>);

    impl Searcher for StaticSearcher {
        fn search(&self, _terms: &[&str]) -> Result<ComponentMatches, SearchError> {
            Ok(self.0.clone().into())
        }
    }

    /// Searcher that always fails with the given error.
    struct FailingSearcher(SearchError);

    impl Searcher for FailingSearcher {
        fn search(&self, _terms: &[&str]) -> Result<ComponentMatches, SearchError> {
            Err(self.0.clone())
        }
    }

    /// Observer capturing every reported failure.
    #[derive(Default)]
    struct CapturingObserver(Mutex<Vec<SearchError>>);

    impl SearchObserver for CapturingObserver {
        fn search_failed(&self, _terms: &[&str], err: &SearchError) {
            self.0.lock().expect("observer lock").push(err.clone());
        }
    }

    fn candidate(value: &str, score: f32) -> ComponentMatch {
        ComponentMatch::new(value, score)
    }

    #[test]
    fn multi_simple_merges_and_sorts_ascending() {
        let multi = MultiSimpleSearcher::new(vec![
            Arc::new(StaticSearcher(vec![
                candidate("beta", 0.5),
                candidate("alpha", 0.0),
            ])),
            Arc::new(StaticSearcher(vec![candidate("gamma", 0.25)])),
        ]);

        let (matches, err) = multi.search_all(&["a"]);
        assert!(err.is_none());
        let order: Vec<&str> = matches.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(order, vec!["alpha", "gamma", "beta"]);
    }

    #[test]
    fn multi_simple_keeps_survivors_when_one_member_fails() {
        let observer = Arc::new(CapturingObserver::default());
        let multi = MultiSimpleSearcher::new(vec![
            Arc::new(StaticSearcher(vec![candidate("alpha", 0.5)])),
            Arc::new(FailingSearcher(SearchError::Io("registry down".into()))),
            Arc::new(StaticSearcher(vec![candidate("beta", 0.25)])),
        ])
        .with_observer(observer.clone());

        let (matches, err) = multi.search_all(&["a"]);

        // Survivors are merged and sorted; the failure is still reported.
        let order: Vec<&str> = matches.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(order, vec!["beta", "alpha"]);
        assert_eq!(err, Some(SearchError::Io("registry down".into())));
        assert_eq!(observer.0.lock().expect("observer lock").len(), 1);
    }

    #[test]
    fn multi_simple_aggregates_several_failures() {
        let multi = MultiSimpleSearcher::new(vec![
            Arc::new(FailingSearcher(SearchError::Io("registry down".into()))),
            Arc::new(FailingSearcher(SearchError::Parse("bad manifest".into()))),
        ]);

        let (matches, err) = multi.search_all(&["a"]);
        assert!(matches.is_empty());
        match err {
            Some(SearchError::Aggregate(inner)) => assert_eq!(inner.len(), 2),
            other => panic!("expected aggregate, got {other:?}"),
        }
    }

    #[test]
    fn multi_simple_trait_surface_errors_on_any_failure() {
        let multi = MultiSimpleSearcher::new(vec![
            Arc::new(StaticSearcher(vec![candidate("alpha", 0.0)])),
            Arc::new(FailingSearcher(SearchError::Io("registry down".into()))),
        ]);

        let result = Searcher::search(&multi, &["a"]);
        assert_eq!(result, Err(SearchError::Io("registry down".into())));
    }

    #[test]
    fn weighted_search_biases_scores_additively() {
        let multi = MultiWeightedSearcher::new(vec![
            WeightedSearcher::new(
                Arc::new(StaticSearcher(vec![candidate("fallback", 0.25)])),
                1.0,
            ),
            WeightedSearcher::new(Arc::new(StaticSearcher(vec![candidate("primary", 0.5)])), 0.0),
        ]);

        let matches = multi.search(&["a"]).expect("search");
        let scored: Vec<(&str, f32)> = matches
            .iter()
            .map(|m| (m.value.as_str(), m.score))
            .collect();
        // 0.5 + 0.0 sorts ahead of 0.25 + 1.0.
        assert_eq!(scored, vec![("primary", 0.5), ("fallback", 1.25)]);
    }

    #[test]
    fn weighted_search_drops_failing_members() {
        let observer = Arc::new(CapturingObserver::default());
        let multi = MultiWeightedSearcher::new(vec![
            WeightedSearcher::new(
                Arc::new(FailingSearcher(SearchError::Backend("boom".into()))),
                0.0,
            ),
            WeightedSearcher::new(Arc::new(StaticSearcher(vec![candidate("alpha", 0.5)])), 1.0),
        ])
        .with_observer(observer.clone());

        let matches = multi.search(&["a"]).expect("search succeeds regardless");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.first().expect("match").score, 1.5);
        assert_eq!(observer.0.lock().expect("observer lock").len(), 1);
    }

    #[test]
    fn default_probe_reports_no_diagnostics() {
        let searcher = StaticSearcher(vec![]);
        assert!(searcher.diagnostics().is_none());
    }
}
