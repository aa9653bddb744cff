// # Directory API Trait
//
// Organization and per-organization network listings.
//
// ## Implementations
//
// - Meraki Dashboard: `localdns-provider-meraki` crate
//
// Results are memoized by `DirectoryCache`; implementations never cache.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::model::{Network, Organization};

/// Trait for the platform's organization/network directory
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Errors
///
/// Every failure is returned as a normalized [`crate::ApiError`]. Implementations
/// do not retry.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// List every organization the API key can access
    async fn list_organizations(&self) -> ApiResult<Vec<Organization>>;

    /// List the networks of one organization
    async fn list_networks(&self, org_id: &str) -> ApiResult<Vec<Network>>;
}
