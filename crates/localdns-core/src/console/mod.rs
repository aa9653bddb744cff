//! Local DNS console orchestration
//!
//! The LocalDnsConsole is responsible for:
//! - Joining profiles, assignments and networks into display rows
//! - Serving directory data through the session's cache
//! - Forwarding create/delete commands to the Local DNS API
//!
//! ## Architecture
//!
//! ```text
//!   UI shell ──(&Session)──► LocalDnsConsole
//!                                 │
//!             ┌───────────────────┼────────────────────┐
//!             ▼                   ▼                    ▼
//!     ┌──────────────┐   ┌────────────────┐   ┌──────────────┐
//!     │DirectoryCache│──►│  DirectoryApi  │   │ LocalDnsApi  │
//!     │ (session)    │   │ (orgs, nets)   │   │ (uncached)   │
//!     └──────────────┘   └────────────────┘   └──────────────┘
//! ```
//!
//! ## Ordering
//!
//! Rows come back in the order the remote returned them; nothing is sorted.
//!
//! ## Failures
//!
//! Any remote failure aborts the operation and is returned as
//! [`Error::Remote`](crate::Error::Remote) with the normalized value intact.
//! An empty remote collection is an empty `Vec`, never an error.

mod mutations;

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::error::Result;
use crate::session::Session;
use crate::traits::{DirectoryApi, LocalDnsApi};
use crate::views::{
    AssignmentWithNames, DnsRecordRow, NetworkRow, OrganizationRow, ProfileWithNetwork,
    UNASSIGNED, UNKNOWN,
};

/// Orchestration layer over the remote APIs
///
/// Holds no per-user state; everything scoped to a user lives in the
/// [`Session`] passed to each call.
#[derive(Clone)]
pub struct LocalDnsConsole {
    directory: Arc<dyn DirectoryApi>,
    local_dns: Arc<dyn LocalDnsApi>,
}

impl LocalDnsConsole {
    /// Create a console from separate directory and Local DNS clients
    pub fn new(directory: Arc<dyn DirectoryApi>, local_dns: Arc<dyn LocalDnsApi>) -> Self {
        Self {
            directory,
            local_dns,
        }
    }

    /// Create a console from one client serving both APIs
    pub fn from_client<C>(client: C) -> Self
    where
        C: DirectoryApi + LocalDnsApi + 'static,
    {
        let client = Arc::new(client);
        Self::new(client.clone(), client)
    }

    /// Organizations accessible with the configured key (cached)
    pub async fn organizations(&self, session: &Session) -> Result<Vec<OrganizationRow>> {
        let orgs = session.cache().organizations(self.directory.as_ref()).await?;
        Ok(orgs.iter().map(OrganizationRow::from).collect())
    }

    /// Networks of the selected organization (cached)
    pub async fn networks(&self, session: &Session) -> Result<Vec<NetworkRow>> {
        let org_id = session.organization()?;
        let networks = session
            .cache()
            .networks(self.directory.as_ref(), org_id)
            .await?;
        Ok(networks.iter().map(NetworkRow::from).collect())
    }

    /// Every profile with the network it is assigned to
    ///
    /// Profiles no assignment references get [`UNASSIGNED`] for both network
    /// columns. When several assignments reference one profile, the last one
    /// listed wins.
    pub async fn list_profiles_with_networks(
        &self,
        session: &Session,
    ) -> Result<Vec<ProfileWithNetwork>> {
        let org_id = session.organization()?;

        let profiles = self.local_dns.list_profiles(org_id).await?;
        let assignments = self.list_network_assignments(session).await?;

        let mut profile_to_network: HashMap<&str, (&str, &str)> = HashMap::new();
        for assignment in &assignments {
            if let (Some(profile_id), Some(network_id)) = (
                assignment.profile_id.as_deref(),
                assignment.network_id.as_deref(),
            ) && !profile_id.is_empty()
                && !network_id.is_empty()
            {
                profile_to_network.insert(
                    profile_id,
                    (network_id, assignment.network_name.as_str()),
                );
            }
        }

        let rows: Vec<ProfileWithNetwork> = profiles
            .into_iter()
            .map(|profile| {
                let (network_id, network_name) = profile_to_network
                    .get(profile.profile_id.as_str())
                    .copied()
                    .unwrap_or((UNASSIGNED, UNASSIGNED));
                ProfileWithNetwork {
                    network_id: network_id.to_string(),
                    network_name: network_name.to_string(),
                    profile_id: profile.profile_id,
                    name: profile.name,
                }
            })
            .collect();

        debug!("Listed {} profile(s) for organization {}", rows.len(), org_id);
        Ok(rows)
    }

    /// Every DNS record, with its owning profile by ID only
    pub async fn list_dns_records(&self, session: &Session) -> Result<Vec<DnsRecordRow>> {
        let org_id = session.organization()?;

        let records = self.local_dns.list_records(org_id).await?;
        let rows: Vec<DnsRecordRow> = records.iter().map(DnsRecordRow::from).collect();

        debug!("Listed {} DNS record(s) for organization {}", rows.len(), org_id);
        Ok(rows)
    }

    /// Every network assignment with resolved network and profile names
    ///
    /// Fetches networks (through the cache), then profiles, then assignments.
    /// A reference absent from the fetched snapshot resolves to [`UNKNOWN`].
    pub async fn list_network_assignments(
        &self,
        session: &Session,
    ) -> Result<Vec<AssignmentWithNames>> {
        let org_id = session.organization()?;

        let networks = session
            .cache()
            .networks(self.directory.as_ref(), org_id)
            .await?;
        let network_names: HashMap<&str, &str> = networks
            .iter()
            .filter(|n| !n.id.is_empty())
            .map(|n| (n.id.as_str(), n.name.as_str()))
            .collect();

        let profiles = self.local_dns.list_profiles(org_id).await?;
        let profile_names: HashMap<&str, &str> = profiles
            .iter()
            .filter(|p| !p.profile_id.is_empty())
            .map(|p| (p.profile_id.as_str(), p.name.as_str()))
            .collect();

        let assignments = self.local_dns.list_assignments(org_id).await?;
        let rows: Vec<AssignmentWithNames> = assignments
            .into_iter()
            .map(|assignment| {
                let network_name = resolve(&network_names, assignment.network_id());
                let profile_name = resolve(&profile_names, assignment.profile_id());
                AssignmentWithNames {
                    network_id: assignment.network_id().map(str::to_string),
                    profile_id: assignment.profile_id().map(str::to_string),
                    assignment_id: assignment.assignment_id,
                    network_name,
                    profile_name,
                }
            })
            .collect();

        debug!(
            "Listed {} network assignment(s) for organization {}",
            rows.len(),
            org_id
        );
        Ok(rows)
    }
}

fn resolve(names: &HashMap<&str, &str>, id: Option<&str>) -> String {
    id.and_then(|id| names.get(id))
        .map(|name| name.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

impl std::fmt::Debug for LocalDnsConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalDnsConsole").finish_non_exhaustive()
    }
}
