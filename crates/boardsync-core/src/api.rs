use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::result::SyncResult;

/// The injected query-execution capability.
///
/// An implementation sends one GraphQL query or mutation string to the remote
/// service and returns the response's `data` payload. Attaching the account's
/// authorization credential to every call is the implementation's job.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn execute(&self, query: &str) -> SyncResult<Value>;
}

/// Cheaply clonable handle to an [`ApiClient`].
///
/// An account hands this to its boards, which hand it on to groups and items,
/// so every descendant issues its queries under the same authorization.
#[derive(Clone)]
pub struct Api {
    client: Arc<dyn ApiClient>,
}

impl Api {
    pub fn new(client: impl ApiClient + 'static) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn from_arc(client: Arc<dyn ApiClient>) -> Self {
        Self { client }
    }

    pub async fn execute(&self, query: &str) -> SyncResult<Value> {
        self.client.execute(query).await
    }
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api").finish_non_exhaustive()
    }
}
