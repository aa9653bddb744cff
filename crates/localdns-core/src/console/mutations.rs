// # Mutation Operations
//
// Thin create/delete wrappers. The only local check is that identifiers are
// non-empty; every business rule is enforced remotely and comes back as a
// normalized HTTP error.

use tracing::info;

use super::LocalDnsConsole;
use crate::error::{Error, Result};
use crate::model::{
    Assignment, AssignmentRef, DnsRecord, IdRef, NewAssignment, NewDnsRecord, NewProfile, Profile,
};
use crate::session::Session;
use crate::traits::{ApiResponse, Created};

fn require_id<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::invalid_input(format!("{} cannot be empty", field)));
    }
    Ok(value)
}

impl LocalDnsConsole {
    /// Create a profile named `name`
    pub async fn create_profile(&self, session: &Session, name: &str) -> Result<Created<Profile>> {
        let org_id = session.organization()?;

        let created = self
            .local_dns
            .create_profile(
                org_id,
                &NewProfile {
                    name: name.to_string(),
                },
            )
            .await?;

        match &created {
            Created::Entity(profile) => {
                info!("Created profile {} ({})", profile.profile_id, profile.name)
            }
            Created::NoContent => info!("Created profile {} (no content returned)", name),
        }
        Ok(created)
    }

    /// Delete the profile `profile_id`
    pub async fn delete_profile(&self, session: &Session, profile_id: &str) -> Result<ApiResponse> {
        let org_id = session.organization()?;
        let profile_id = require_id("profile ID", profile_id)?;

        let response = self.local_dns.delete_profile(org_id, profile_id).await?;
        info!("Deleted profile {}", profile_id);
        Ok(response)
    }

    /// Create a DNS record in the profile `profile_id`
    pub async fn create_dns_record(
        &self,
        session: &Session,
        profile_id: &str,
        hostname: &str,
        address: &str,
    ) -> Result<Created<DnsRecord>> {
        let org_id = session.organization()?;
        let profile_id = require_id("profile ID", profile_id)?;

        let created = self
            .local_dns
            .create_record(
                org_id,
                &NewDnsRecord {
                    hostname: hostname.to_string(),
                    address: address.to_string(),
                    profile: IdRef::new(profile_id),
                },
            )
            .await?;

        match &created {
            Created::Entity(record) => info!(
                "Created DNS record {} ({} -> {}) in profile {}",
                record.record_id, record.hostname, record.address, profile_id
            ),
            Created::NoContent => info!(
                "Created DNS record {} -> {} in profile {} (no content returned)",
                hostname, address, profile_id
            ),
        }
        Ok(created)
    }

    /// Delete the DNS record `record_id`
    pub async fn delete_dns_record(&self, session: &Session, record_id: &str) -> Result<ApiResponse> {
        let org_id = session.organization()?;
        let record_id = require_id("record ID", record_id)?;

        let response = self.local_dns.delete_record(org_id, record_id).await?;
        info!("Deleted DNS record {}", record_id);
        Ok(response)
    }

    /// Assign `profile_id` to `network_id` (single-item bulk create)
    pub async fn assign_profile_to_network(
        &self,
        session: &Session,
        network_id: &str,
        profile_id: &str,
    ) -> Result<Created<Vec<Assignment>>> {
        let org_id = session.organization()?;
        let network_id = require_id("network ID", network_id)?;
        let profile_id = require_id("profile ID", profile_id)?;

        let items = [NewAssignment {
            network: IdRef::new(network_id),
            profile: IdRef::new(profile_id),
        }];
        let created = self.local_dns.create_assignments(org_id, &items).await?;

        info!("Assigned profile {} to network {}", profile_id, network_id);
        Ok(created)
    }

    /// Remove the assignment `assignment_id` (single-item bulk delete)
    pub async fn remove_network_assignment(
        &self,
        session: &Session,
        assignment_id: &str,
    ) -> Result<ApiResponse> {
        let org_id = session.organization()?;
        let assignment_id = require_id("assignment ID", assignment_id)?;

        let items = [AssignmentRef {
            assignment_id: assignment_id.to_string(),
        }];
        let response = self.local_dns.delete_assignments(org_id, &items).await?;

        info!("Removed network assignment {}", assignment_id);
        Ok(response)
    }
}
