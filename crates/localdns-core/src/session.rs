//! Session context
//!
//! A [`Session`] holds the selected organization and owns its own
//! [`DirectoryCache`]. Every orchestration call takes the session explicitly,
//! so two sessions never share selection or cache state.

use std::time::Duration;

use crate::cache::DirectoryCache;
use crate::error::{Error, Result};

/// Per-user console session
#[derive(Debug, Default)]
pub struct Session {
    selected: Option<String>,
    cache: DirectoryCache,
}

impl Session {
    /// Create a session with no organization selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session whose cached network lists expire after `ttl`
    pub fn with_network_ttl(ttl: Option<Duration>) -> Self {
        Self {
            selected: None,
            cache: DirectoryCache::with_network_ttl(ttl),
        }
    }

    /// Select the active organization
    ///
    /// The ID is not checked against the remote; an unknown ID surfaces as a
    /// remote error on the next call. Selecting an organization drops its
    /// cached network list so the next listing is fresh.
    pub async fn set_organization(&mut self, org_id: impl Into<String>) {
        let org_id = org_id.into();
        self.cache.invalidate_networks(&org_id).await;
        tracing::info!("Organization ID set to: {}", org_id);
        self.selected = Some(org_id);
    }

    /// The selected organization, if any
    pub fn selected_organization(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected organization, or [`Error::NoOrganizationSelected`]
    pub fn organization(&self) -> Result<&str> {
        self.selected_organization()
            .ok_or(Error::NoOrganizationSelected)
    }

    /// Directory cache owned by this session
    pub fn cache(&self) -> &DirectoryCache {
        &self.cache
    }
}
