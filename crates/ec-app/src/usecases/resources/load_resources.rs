//! Use case for loading a resource collection with bundled fallback.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info_span, warn, Instrument};

use ec_core::catalog::{normalize, ResourceKind, ResourceSet};
use ec_core::ports::BundledDataPort;

use crate::cache::RemoteDataCache;

/// Serves a resource collection to a screen: cache first (which fetches
/// through to the remote API as needed), bundled static data when the remote
/// path fails. No error escapes to the caller for a remote failure; the
/// substitution is the designed degraded mode.
pub struct LoadResources {
    cache: Arc<RemoteDataCache>,
    bundled: Arc<dyn BundledDataPort>,
}

impl LoadResources {
    pub fn new(cache: Arc<RemoteDataCache>, bundled: Arc<dyn BundledDataPort>) -> Self {
        Self { cache, bundled }
    }

    pub async fn execute(&self, kind: ResourceKind) -> Result<ResourceSet> {
        let span = info_span!("usecase.load_resources.execute", %kind);

        async {
            match self.cache.get(kind).await {
                Ok(records) => Ok(records),
                Err(err) => {
                    warn!(%kind, error = %err, "remote fetch failed, substituting bundled data");
                    let raw = self
                        .bundled
                        .load_raw(kind)
                        .with_context(|| format!("load bundled {} failed", kind))?;
                    Ok(normalize(kind, &raw))
                }
            }
        }
        .instrument(span)
        .await
    }
}
