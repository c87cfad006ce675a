use async_trait::async_trait;
use dualdial_domain::{DomainError, IpRecord};
use tokio::time::Instant;

/// Name resolution to IP records.
#[async_trait]
pub trait IpLookup: Send + Sync {
    /// Resolves `host` before `deadline`.
    ///
    /// Implementations report an expired deadline as
    /// [`DomainError::LookupTimeout`].
    async fn lookup_ip(&self, host: &str, deadline: Instant)
        -> Result<Vec<IpRecord>, DomainError>;
}
