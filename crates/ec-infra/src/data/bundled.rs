//! Static fallback catalog shipped inside the binary.

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use ec_core::catalog::ResourceKind;
use ec_core::ports::BundledDataPort;

const CONTACTS_JSON: &str = include_str!("../../assets/contacts.json");
const VIDEOS_JSON: &str = include_str!("../../assets/videos.json");
const PATHWAYS_JSON: &str = include_str!("../../assets/pathways.json");

/// Serves the embedded JSON arrays. Events have no bundled counterpart and
/// fall back to an empty feed.
pub struct BundledCatalog;

impl BundledDataPort for BundledCatalog {
    fn load_raw(&self, kind: ResourceKind) -> Result<Vec<Value>> {
        let raw = match kind {
            ResourceKind::Contacts => CONTACTS_JSON,
            ResourceKind::Videos => VIDEOS_JSON,
            ResourceKind::Pathways => PATHWAYS_JSON,
            ResourceKind::Events => {
                debug!("no bundled events, serving empty feed");
                return Ok(Vec::new());
            }
        };

        let items: Vec<Value> = serde_json::from_str(raw)
            .with_context(|| format!("parse bundled {} failed", kind))?;

        debug!(%kind, count = items.len(), "loaded bundled data");
        Ok(items)
    }
}
