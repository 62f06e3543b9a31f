use async_trait::async_trait;
use serde_json::Value;

use crate::catalog::kind::ResourceKind;
use crate::ports::errors::ResourceApiError;

/// Remote resource fetch. Implementations return the raw upstream array with
/// any transport envelope already removed; field mapping onto canonical
/// records is the caller's concern.
#[async_trait]
pub trait ResourceApiPort: Send + Sync {
    async fn fetch_raw(&self, kind: ResourceKind) -> Result<Vec<Value>, ResourceApiError>;
}
