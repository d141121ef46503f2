//! Response shape returned to the hosting framework.
//!
//! A successful run answers with a mapping of named outputs, each carrying a
//! title, a description and the download link of the artifact the container
//! produced. Use the typed types instead of ad-hoc `serde_json::json!` so
//! every handler serializes the same shape.

use std::collections::BTreeMap;

use serde::Serialize;

/// One downloadable artifact.
#[derive(Debug, Clone, Serialize)]
pub struct OutputLink {
    pub title: String,
    pub description: String,
    pub href: String,
}

/// The `{ "outputs": { ... } }` envelope of a successful execution.
#[derive(Debug, Default, Serialize)]
pub struct ProcessOutputs {
    pub outputs: BTreeMap<String, OutputLink>,
}

impl ProcessOutputs {
    pub fn insert(&mut self, key: impl Into<String>, title: &str, description: &str, href: String) {
        self.outputs.insert(
            key.into(),
            OutputLink {
                title: title.to_string(),
                description: description.to_string(),
                href,
            },
        );
    }
}

/// Build the public download URL of an artifact.
///
/// Some operations link straight under the base URL, others through the
/// `out/` path segment mirroring the host directory layout; the descriptor
/// decides.
pub fn download_href(base_url: &str, via_out_dir: bool, filename: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if via_out_dir {
        format!("{base}/out/{filename}")
    } else {
        format!("{base}/{filename}")
    }
}
