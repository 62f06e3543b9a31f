use serde_json::Value;

use crate::catalog::kind::ResourceKind;

/// Static fallback data shipped with the application, used when the remote
/// API is unreachable or returns nothing usable.
pub trait BundledDataPort: Send + Sync {
    fn load_raw(&self, kind: ResourceKind) -> anyhow::Result<Vec<Value>>;
}
