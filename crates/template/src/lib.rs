//! # Template file searcher (`template`)
//!
//! ## Purpose
//!
//! The file-backed member of a resolution pipeline: when a user hands the
//! tooling something like `./rails.json`, this searcher checks whether the
//! term names a readable template manifest on disk and, if so, offers it as
//! an exact candidate. It is the one searcher that can *explain* a
//! path-shaped failure — a manifest that exists but does not parse — which
//! the tiered resolver surfaces instead of a generic "no match".
//!
//! ## Contract
//!
//! - A term that does not name an existing file yields no candidate; that
//!   is absence, not an error.
//! - A file that exists but cannot be read or parsed is an operational
//!   failure ([`SearchError::Io`] / [`SearchError::Parse`]).
//! - A parsed manifest yields exactly one candidate with score `0.0` (the
//!   path named it precisely) carrying the manifest in its metadata.

use std::fs;
use std::path::Path;

use tracing::debug;

use resolve::{ComponentMatch, ComponentMatches, PathDiagnostics, SearchError, Searcher};

mod manifest;

pub use crate::manifest::TemplateManifest;

/// Searches explicit file paths for template manifests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateFileSearcher;

impl TemplateFileSearcher {
    pub fn new() -> Self {
        Self
    }

    /// Load the manifest at `path`. `Ok(None)` means the path does not name
    /// a file; errors mean the file exists but is unusable.
    fn load(&self, path: &str) -> Result<Option<TemplateManifest>, SearchError> {
        let file = Path::new(path);
        if !file.is_file() {
            return Ok(None);
        }
        let raw =
            fs::read_to_string(file).map_err(|err| SearchError::Io(format!("{path}: {err}")))?;
        let manifest = serde_json::from_str(&raw)
            .map_err(|err| SearchError::Parse(format!("{path}: {err}")))?;
        Ok(Some(manifest))
    }

    fn to_match(&self, path: &str, manifest: TemplateManifest) -> ComponentMatch {
        let metadata = serde_json::to_value(&manifest).unwrap_or_default();
        ComponentMatch::new(path, 0.0)
            .with_description(manifest.name)
            .with_metadata(metadata)
    }
}

impl Searcher for TemplateFileSearcher {
    fn search(&self, terms: &[&str]) -> Result<ComponentMatches, SearchError> {
        let mut matches = ComponentMatches::new();
        for term in terms {
            if let Some(manifest) = self.load(term)? {
                debug!(path = term, template = %manifest.name, "template manifest matched");
                matches.push(self.to_match(term, manifest));
            }
        }
        Ok(matches)
    }

    fn diagnostics(&self) -> Option<&dyn PathDiagnostics> {
        Some(self)
    }
}

impl PathDiagnostics for TemplateFileSearcher {
    /// Re-run the load; a failure is exactly the diagnostic the tiered
    /// resolver wants to show instead of "no match".
    fn diagnose(&self, path: &str) -> Option<SearchError> {
        self.load(path).err()
    }
}
