// # Directory Cache
//
// In-memory memoization of the organization list and of per-organization
// network lists.
//
// ## Lifetime
//
// - The organization list is fetched once and kept until `clear()`
// - Network lists are keyed by organization ID, fetched on first access and
//   kept until invalidated, or until the optional TTL elapses
// - A failed fetch stores nothing, so the next access retries
// - A failed fetch for one organization never touches another's entry

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::error::ApiResult;
use crate::model::{Network, Organization};
use crate::traits::DirectoryApi;

#[derive(Debug, Clone)]
struct CachedNetworks {
    networks: Vec<Network>,
    fetched_at: Instant,
}

/// Memoizing front of a [`DirectoryApi`]
///
/// Clones share the same underlying maps.
///
/// # Example
///
/// ```rust,ignore
/// let cache = DirectoryCache::new();
/// let first = cache.networks(&api, "111").await?;  // remote fetch
/// let again = cache.networks(&api, "111").await?;  // served from memory
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectoryCache {
    organizations: Arc<RwLock<Option<Vec<Organization>>>>,
    networks: Arc<RwLock<HashMap<String, CachedNetworks>>>,
    network_ttl: Option<Duration>,
}

impl DirectoryCache {
    /// Create an empty cache whose entries never expire
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache whose network entries expire after `ttl`
    pub fn with_network_ttl(ttl: Option<Duration>) -> Self {
        Self {
            network_ttl: ttl,
            ..Self::default()
        }
    }

    /// Organization list, fetched on first successful call
    pub async fn organizations(&self, api: &dyn DirectoryApi) -> ApiResult<Vec<Organization>> {
        if let Some(orgs) = self.organizations.read().await.as_ref() {
            tracing::debug!("Using cached organizations data");
            return Ok(orgs.clone());
        }

        tracing::info!("Fetching organizations from the Dashboard API");
        match api.list_organizations().await {
            Ok(orgs) => {
                *self.organizations.write().await = Some(orgs.clone());
                Ok(orgs)
            }
            Err(e) => {
                tracing::warn!("Error fetching organizations: {}", e);
                Err(e)
            }
        }
    }

    /// Network list of `org_id`, fetched on first successful call for that key
    pub async fn networks(&self, api: &dyn DirectoryApi, org_id: &str) -> ApiResult<Vec<Network>> {
        {
            let guard = self.networks.read().await;
            if let Some(entry) = guard.get(org_id)
                && !self.is_expired(entry)
            {
                tracing::debug!("Using cached networks data for organization {}", org_id);
                return Ok(entry.networks.clone());
            }
        }

        tracing::info!("Fetching networks for organization {} from the Dashboard API", org_id);
        match api.list_networks(org_id).await {
            Ok(networks) => {
                let entry = CachedNetworks {
                    networks: networks.clone(),
                    fetched_at: Instant::now(),
                };
                self.networks.write().await.insert(org_id.to_string(), entry);
                Ok(networks)
            }
            Err(e) => {
                tracing::warn!("Error fetching networks for organization {}: {}", org_id, e);
                Err(e)
            }
        }
    }

    /// Drop the cached network list of `org_id`
    pub async fn invalidate_networks(&self, org_id: &str) {
        if self.networks.write().await.remove(org_id).is_some() {
            tracing::debug!("Invalidated cached networks for organization {}", org_id);
        }
    }

    /// Drop everything
    pub async fn clear(&self) {
        *self.organizations.write().await = None;
        self.networks.write().await.clear();
    }

    /// Whether the organization list is cached
    pub async fn has_organizations(&self) -> bool {
        self.organizations.read().await.is_some()
    }

    /// Whether a live network list is cached for `org_id`
    pub async fn has_networks(&self, org_id: &str) -> bool {
        self.networks
            .read()
            .await
            .get(org_id)
            .is_some_and(|entry| !self.is_expired(entry))
    }

    fn is_expired(&self, entry: &CachedNetworks) -> bool {
        self.network_ttl
            .is_some_and(|ttl| entry.fetched_at.elapsed() >= ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Directory that fails the first `failures` calls, then succeeds
    struct FlakyDirectory {
        failures: AtomicUsize,
        org_calls: AtomicUsize,
        network_calls: Mutex<Vec<String>>,
    }

    impl FlakyDirectory {
        fn new(failures: usize) -> Self {
            Self {
                failures: AtomicUsize::new(failures),
                org_calls: AtomicUsize::new(0),
                network_calls: Mutex::new(Vec::new()),
            }
        }

        fn fail_once(&self) -> bool {
            self.failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
        }
    }

    #[async_trait]
    impl DirectoryApi for FlakyDirectory {
        async fn list_organizations(&self) -> ApiResult<Vec<Organization>> {
            self.org_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_once() {
                return Err(ApiError::connection("connection refused"));
            }
            Ok(vec![Organization {
                id: "111".to_string(),
                name: "Acme".to_string(),
                url: None,
                api: Default::default(),
                licensing: Default::default(),
            }])
        }

        async fn list_networks(&self, org_id: &str) -> ApiResult<Vec<Network>> {
            self.network_calls.lock().unwrap().push(org_id.to_string());
            if self.fail_once() {
                return Err(ApiError::http(500, "boom"));
            }
            Ok(vec![Network {
                id: format!("{}-net", org_id),
                name: "Eng".to_string(),
                network_type: None,
                time_zone: None,
                tags: Vec::new(),
            }])
        }
    }

    #[tokio::test]
    async fn test_organizations_fetched_once() {
        let api = FlakyDirectory::new(0);
        let cache = DirectoryCache::new();

        assert!(!cache.has_organizations().await);
        let first = cache.organizations(&api).await.unwrap();
        let second = cache.organizations(&api).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(api.org_calls.load(Ordering::SeqCst), 1);
        assert!(cache.has_organizations().await);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let api = FlakyDirectory::new(1);
        let cache = DirectoryCache::new();

        let err = cache.organizations(&api).await.unwrap_err();
        assert_eq!(err, ApiError::connection("connection refused"));
        assert!(!cache.has_organizations().await);

        assert!(cache.organizations(&api).await.is_ok());
        assert_eq!(api.org_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_network_failure_does_not_poison_other_org() {
        let api = FlakyDirectory::new(0);
        let cache = DirectoryCache::new();

        cache.networks(&api, "111").await.unwrap();

        api.failures.store(1, Ordering::SeqCst);
        assert!(cache.networks(&api, "222").await.is_err());

        assert!(cache.has_networks("111").await);
        assert!(!cache.has_networks("222").await);
        assert_eq!(cache.networks(&api, "111").await.unwrap()[0].id, "111-net");
        assert_eq!(*api.network_calls.lock().unwrap(), vec!["111", "222"]);
    }

    #[tokio::test]
    async fn test_invalidate_networks_refetches() {
        let api = FlakyDirectory::new(0);
        let cache = DirectoryCache::new();

        cache.networks(&api, "111").await.unwrap();
        cache.invalidate_networks("111").await;
        cache.networks(&api, "111").await.unwrap();

        assert_eq!(api.network_calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_clear_drops_everything() {
        let api = FlakyDirectory::new(0);
        let cache = DirectoryCache::new();

        cache.organizations(&api).await.unwrap();
        cache.networks(&api, "111").await.unwrap();
        cache.clear().await;

        assert!(!cache.has_organizations().await);
        assert!(!cache.has_networks("111").await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_network_ttl_expiry() {
        let api = FlakyDirectory::new(0);
        let cache = DirectoryCache::with_network_ttl(Some(Duration::from_secs(60)));

        cache.networks(&api, "111").await.unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;
        cache.networks(&api, "111").await.unwrap();
        assert_eq!(api.network_calls.lock().unwrap().len(), 1);

        tokio::time::advance(Duration::from_secs(31)).await;
        assert!(!cache.has_networks("111").await);
        cache.networks(&api, "111").await.unwrap();
        assert_eq!(api.network_calls.lock().unwrap().len(), 2);
    }
}
