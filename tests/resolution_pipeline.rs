//! End-to-end resolution scenarios over the umbrella API: a searcher fleet,
//! a policy, and the tiered pipeline with the template searcher's
//! diagnostic fallback.

use std::io::Write as _;
use std::sync::Arc;

use tempfile::NamedTempFile;

use resolvent::{
    ComponentMatch, ComponentMatches, PerfectMatchWeightedResolver, ResolveError, ResolvePolicy,
    Resolver, SearchError, Searcher, TemplateFileSearcher, WeightedResolver,
};

/// A canned registry: candidates it "knows", returned for any query.
struct RegistrySearcher(Vec<ComponentMatch>);

impl Searcher for RegistrySearcher {
    fn search(&self, _terms: &[&str]) -> Result<ComponentMatches, SearchError> {
        Ok(self.0.clone().into())
    }
}

struct BrokenSearcher;

impl Searcher for BrokenSearcher {
    fn search(&self, _terms: &[&str]) -> Result<ComponentMatches, SearchError> {
        Err(SearchError::Backend("registry unreachable".into()))
    }
}

fn candidate(value: &str, score: f32) -> ComponentMatch {
    ComponentMatch::new(value, score)
}

#[test]
fn policy_built_pipeline_resolves_across_searchers() {
    let searchers: Vec<Arc<dyn Searcher>> = vec![
        Arc::new(RegistrySearcher(vec![candidate("docker.io/ruby", 0.5)])),
        Arc::new(RegistrySearcher(vec![candidate("quay.io/ruby", 0.0)])),
    ];

    let resolver = ResolvePolicy::UniqueExactOrInexact
        .build(searchers)
        .expect("build");

    let resolution = resolver.resolve("ruby").expect("resolve");
    assert_eq!(resolution.candidate.value, "quay.io/ruby");
    assert!(!resolution.is_partial());
}

#[test]
fn weighted_policy_prefers_the_lighter_tier() {
    let searchers: Vec<Arc<dyn Searcher>> = vec![
        Arc::new(RegistrySearcher(vec![candidate("local/ruby", 0.25)])),
        Arc::new(RegistrySearcher(vec![candidate("hub/ruby", 0.25)])),
    ];

    let resolver = ResolvePolicy::PerfectWeighted {
        weights: vec![0.0, 2.0],
    }
    .build(searchers)
    .expect("build");

    // Tier 0 pools 0.25 raw; tier 2 pools 0.25 * 2 = 0.5. Strict best wins
    // with a partial-match advisory.
    let resolution = resolver.resolve("ruby").expect("resolve");
    assert_eq!(resolution.candidate.value, "local/ruby");
    assert_eq!(resolution.candidate.score, 0.25);
    let advisory = resolution.advisory.expect("advisory");
    assert_eq!(advisory.value, "ruby");
}

#[test]
fn template_file_wins_the_exact_tier() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"name":"rails-postgres","description":"Rails with PostgreSQL"}}"#
    )
    .expect("write");
    let path = file.path().to_string_lossy().into_owned();

    let resolver = PerfectMatchWeightedResolver::new(vec![
        WeightedResolver::new(Arc::new(TemplateFileSearcher::new()), 0.0),
        WeightedResolver::new(
            Arc::new(RegistrySearcher(vec![candidate("hub/rails", 0.5)])),
            1.0,
        ),
    ]);

    let resolution = resolver.resolve(&path).expect("resolve");
    assert_eq!(resolution.candidate.value, path);
    assert!(resolution.candidate.is_exact());
    assert_eq!(resolution.candidate.description, "rails-postgres");
}

#[test]
fn broken_template_file_beats_generic_no_match() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{{ not a manifest").expect("write");
    let path = file.path().to_string_lossy().into_owned();

    // The registry tier knows nothing and the template tier fails outright
    // on the malformed manifest, so the caller sees the parse error — not a
    // generic "no match" for a file that plainly exists.
    let resolver = PerfectMatchWeightedResolver::new(vec![
        WeightedResolver::new(Arc::new(RegistrySearcher(vec![])), 0.0),
        WeightedResolver::new(Arc::new(TemplateFileSearcher::new()), 1.0),
    ]);

    match resolver.resolve(&path) {
        Err(ResolveError::Search(SearchError::Parse(msg))) => {
            assert!(msg.contains(&path), "{msg}")
        }
        other => panic!("expected parse diagnostic, got {other:?}"),
    }
}

#[test]
fn ambiguity_reports_every_candidate() {
    let searchers: Vec<Arc<dyn Searcher>> = vec![Arc::new(RegistrySearcher(vec![
        candidate("docker.io/node", 0.0),
        candidate("quay.io/node", 0.0),
    ]))];

    let resolver = ResolvePolicy::default().build(searchers).expect("build");

    match resolver.resolve("node") {
        Err(ResolveError::MultipleMatches { value, candidates }) => {
            assert_eq!(value, "node");
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("expected multiple matches, got {other:?}"),
    }
}

#[test]
fn dead_backend_fails_simple_strategies_loudly() {
    let searchers: Vec<Arc<dyn Searcher>> = vec![
        Arc::new(RegistrySearcher(vec![candidate("ruby", 0.0)])),
        Arc::new(BrokenSearcher),
    ];

    let resolver = ResolvePolicy::First.build(searchers).expect("build");

    match resolver.resolve("ruby") {
        Err(ResolveError::Search(SearchError::Backend(msg))) => {
            assert_eq!(msg, "registry unreachable")
        }
        other => panic!("expected backend failure, got {other:?}"),
    }
}

#[test]
fn resolution_is_deterministic_across_repeats() {
    let searchers: Vec<Arc<dyn Searcher>> = vec![
        Arc::new(RegistrySearcher(vec![
            candidate("a/app", 0.5),
            candidate("b/app", 0.5),
        ])),
        Arc::new(RegistrySearcher(vec![candidate("c/app", 0.25)])),
    ];
    let resolver = ResolvePolicy::HighestScore.build(searchers).expect("build");

    let first = resolver.resolve("app").expect("resolve");
    for _ in 0..10 {
        let again = resolver.resolve("app").expect("resolve");
        assert_eq!(again, first);
    }
}
