// # Local DNS API Trait
//
// Profiles, DNS records and profile-to-network assignments of one
// organization.
//
// ## Usage
//
// ```rust,ignore
// use localdns_core::LocalDnsApi;
//
// let profiles = api.list_profiles("111").await?;
// for profile in profiles {
//     println!("{} {}", profile.profile_id, profile.name);
// }
// ```

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiResult;
use crate::model::{Assignment, AssignmentRef, DnsRecord, NewAssignment, NewDnsRecord, NewProfile, Profile};

/// Successful outcome of a call whose body is not decoded
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// 2xx with a JSON body
    Json(Value),
    /// 2xx with an empty body
    NoContent,
}

/// Successful outcome of a create call
///
/// The Dashboard may accept a create and answer with an empty body; that is
/// still a success, it just carries no entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Created<T> {
    /// 2xx with the created entity
    Entity(T),
    /// 2xx with an empty body
    NoContent,
}

impl<T> Created<T> {
    /// The created entity, if the remote returned one
    pub fn entity(self) -> Option<T> {
        match self {
            Created::Entity(value) => Some(value),
            Created::NoContent => None,
        }
    }
}

/// Trait for the Local DNS configuration API
///
/// Every method is a single remote call scoped to `org_id`. List methods return
/// items in the order the remote sent them. Nothing is cached.
///
/// # Errors
///
/// Failures are returned as a normalized [`crate::ApiError`]; business-rule
/// violations (duplicate names, invalid pairs, exclusivity of a network's
/// assignment) surface as [`crate::ApiErrorKind::Http`] with the remote status.
#[async_trait]
pub trait LocalDnsApi: Send + Sync {
    /// `GET profiles`
    async fn list_profiles(&self, org_id: &str) -> ApiResult<Vec<Profile>>;

    /// `POST profiles`
    async fn create_profile(
        &self,
        org_id: &str,
        profile: &NewProfile,
    ) -> ApiResult<Created<Profile>>;

    /// `DELETE profiles/{id}`
    async fn delete_profile(&self, org_id: &str, profile_id: &str) -> ApiResult<ApiResponse>;

    /// `GET records`
    async fn list_records(&self, org_id: &str) -> ApiResult<Vec<DnsRecord>>;

    /// `POST records`
    async fn create_record(
        &self,
        org_id: &str,
        record: &NewDnsRecord,
    ) -> ApiResult<Created<DnsRecord>>;

    /// `DELETE records/{id}`
    async fn delete_record(&self, org_id: &str, record_id: &str) -> ApiResult<ApiResponse>;

    /// `GET profiles/assignments`
    async fn list_assignments(&self, org_id: &str) -> ApiResult<Vec<Assignment>>;

    /// `POST profiles/assignments/bulkCreate`
    async fn create_assignments(
        &self,
        org_id: &str,
        items: &[NewAssignment],
    ) -> ApiResult<Created<Vec<Assignment>>>;

    /// `POST profiles/assignments/bulkDelete`
    async fn delete_assignments(
        &self,
        org_id: &str,
        items: &[AssignmentRef],
    ) -> ApiResult<ApiResponse>;
}
