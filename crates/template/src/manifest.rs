//! The on-disk template descriptor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// A template manifest as stored on disk: a JSON object with a mandatory
/// `name`, optional display fields, and whatever else the template author
/// put there (object lists, parameters), preserved verbatim in `rest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateManifest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Arbitrary key/value labels attached by the template author.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    /// Unvalidated remainder of the manifest.
    #[serde(flatten)]
    pub rest: BTreeMap<String, JsonValue>,
}
