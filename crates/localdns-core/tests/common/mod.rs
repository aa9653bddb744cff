//! Test doubles and common utilities for console contract tests
//!
//! `FakeDashboard` keeps an in-memory copy of the remote state, records every
//! call it receives and can be told to fail specific operations.

#![allow(dead_code)]

use localdns_core::error::{ApiError, ApiResult};
use localdns_core::model::{
    Assignment, AssignmentRef, DnsRecord, IdRef, NewAssignment, NewDnsRecord, NewProfile,
    Network, Organization, Profile,
};
use localdns_core::traits::{ApiResponse, Created, DirectoryApi, LocalDnsApi};
use localdns_core::{LocalDnsConsole, Session};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
struct RemoteState {
    organizations: Vec<Organization>,
    networks: HashMap<String, Vec<Network>>,
    profiles: Vec<Profile>,
    records: Vec<DnsRecord>,
    assignments: Vec<Assignment>,
    next_id: usize,
}

/// In-memory stand-in for the Dashboard API
#[derive(Default)]
pub struct FakeDashboard {
    state: Mutex<RemoteState>,
    calls: Mutex<Vec<String>>,
    failures: Mutex<HashMap<&'static str, ApiError>>,
    empty_create_bodies: AtomicBool,
}

impl FakeDashboard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_organizations(self: &Arc<Self>, orgs: Vec<Organization>) -> Arc<Self> {
        self.state.lock().unwrap().organizations = orgs;
        Arc::clone(self)
    }

    pub fn with_networks(self: &Arc<Self>, org_id: &str, networks: Vec<Network>) -> Arc<Self> {
        self.state
            .lock()
            .unwrap()
            .networks
            .insert(org_id.to_string(), networks);
        Arc::clone(self)
    }

    pub fn with_profiles(self: &Arc<Self>, profiles: Vec<Profile>) -> Arc<Self> {
        self.state.lock().unwrap().profiles = profiles;
        Arc::clone(self)
    }

    pub fn with_records(self: &Arc<Self>, records: Vec<DnsRecord>) -> Arc<Self> {
        self.state.lock().unwrap().records = records;
        Arc::clone(self)
    }

    pub fn with_assignments(self: &Arc<Self>, assignments: Vec<Assignment>) -> Arc<Self> {
        self.state.lock().unwrap().assignments = assignments;
        Arc::clone(self)
    }

    /// Make every call to `operation` fail with `error` until cleared
    pub fn fail(&self, operation: &'static str, error: ApiError) {
        self.failures.lock().unwrap().insert(operation, error);
    }

    pub fn clear_failures(&self) {
        self.failures.lock().unwrap().clear();
    }

    /// Accept creates but answer them with an empty 2xx body
    pub fn with_empty_create_bodies(self: &Arc<Self>) -> Arc<Self> {
        self.empty_create_bodies.store(true, Ordering::SeqCst);
        Arc::clone(self)
    }

    fn created<T>(&self, value: T) -> Created<T> {
        if self.empty_create_bodies.load(Ordering::SeqCst) {
            Created::NoContent
        } else {
            Created::Entity(value)
        }
    }

    /// Every call received, as `operation:org_id`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls to `operation` (any organization)
    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.split(':').next() == Some(operation))
            .count()
    }

    /// Operation names in call order
    pub fn operations(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.split(':').next().unwrap_or_default().to_string())
            .collect()
    }

    fn enter(&self, operation: &'static str, org_id: &str) -> ApiResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", operation, org_id));
        match self.failures.lock().unwrap().get(operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        format!("{}-{}", prefix, 100 + state.next_id)
    }
}

#[async_trait::async_trait]
impl DirectoryApi for FakeDashboard {
    async fn list_organizations(&self) -> ApiResult<Vec<Organization>> {
        self.enter("list_organizations", "-")?;
        Ok(self.state.lock().unwrap().organizations.clone())
    }

    async fn list_networks(&self, org_id: &str) -> ApiResult<Vec<Network>> {
        self.enter("list_networks", org_id)?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .networks
            .get(org_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl LocalDnsApi for FakeDashboard {
    async fn list_profiles(&self, org_id: &str) -> ApiResult<Vec<Profile>> {
        self.enter("list_profiles", org_id)?;
        Ok(self.state.lock().unwrap().profiles.clone())
    }

    async fn create_profile(
        &self,
        org_id: &str,
        profile: &NewProfile,
    ) -> ApiResult<Created<Profile>> {
        self.enter("create_profile", org_id)?;
        let created = Profile {
            profile_id: self.next_id("prof"),
            name: profile.name.clone(),
        };
        self.state.lock().unwrap().profiles.push(created.clone());
        Ok(self.created(created))
    }

    async fn delete_profile(&self, org_id: &str, profile_id: &str) -> ApiResult<ApiResponse> {
        self.enter("delete_profile", org_id)?;
        let mut state = self.state.lock().unwrap();
        let before = state.profiles.len();
        state.profiles.retain(|p| p.profile_id != profile_id);
        if state.profiles.len() == before {
            return Err(ApiError::http(404, "{\"errors\":[\"Profile not found\"]}"));
        }
        Ok(ApiResponse::NoContent)
    }

    async fn list_records(&self, org_id: &str) -> ApiResult<Vec<DnsRecord>> {
        self.enter("list_records", org_id)?;
        Ok(self.state.lock().unwrap().records.clone())
    }

    async fn create_record(
        &self,
        org_id: &str,
        record: &NewDnsRecord,
    ) -> ApiResult<Created<DnsRecord>> {
        self.enter("create_record", org_id)?;
        let created = DnsRecord {
            record_id: self.next_id("rec"),
            hostname: record.hostname.clone(),
            address: record.address.clone(),
            profile: Some(record.profile.clone()),
        };
        self.state.lock().unwrap().records.push(created.clone());
        Ok(self.created(created))
    }

    async fn delete_record(&self, org_id: &str, record_id: &str) -> ApiResult<ApiResponse> {
        self.enter("delete_record", org_id)?;
        let mut state = self.state.lock().unwrap();
        let before = state.records.len();
        state.records.retain(|r| r.record_id != record_id);
        if state.records.len() == before {
            return Err(ApiError::http(404, "{\"errors\":[\"Record not found\"]}"));
        }
        Ok(ApiResponse::NoContent)
    }

    async fn list_assignments(&self, org_id: &str) -> ApiResult<Vec<Assignment>> {
        self.enter("list_assignments", org_id)?;
        Ok(self.state.lock().unwrap().assignments.clone())
    }

    async fn create_assignments(
        &self,
        org_id: &str,
        items: &[NewAssignment],
    ) -> ApiResult<Created<Vec<Assignment>>> {
        self.enter("create_assignments", org_id)?;
        let mut created = Vec::new();
        for item in items {
            let taken = self
                .state
                .lock()
                .unwrap()
                .assignments
                .iter()
                .any(|a| a.network_id() == Some(item.network.id.as_str()));
            if taken {
                return Err(ApiError::http(
                    400,
                    "{\"errors\":[\"Network already has a profile assigned\"]}",
                ));
            }
            let assignment = Assignment {
                assignment_id: self.next_id("assign"),
                network: Some(item.network.clone()),
                profile: Some(item.profile.clone()),
            };
            self.state.lock().unwrap().assignments.push(assignment.clone());
            created.push(assignment);
        }
        Ok(self.created(created))
    }

    async fn delete_assignments(
        &self,
        org_id: &str,
        items: &[AssignmentRef],
    ) -> ApiResult<ApiResponse> {
        self.enter("delete_assignments", org_id)?;
        let mut state = self.state.lock().unwrap();
        for item in items {
            state
                .assignments
                .retain(|a| a.assignment_id != item.assignment_id);
        }
        Ok(ApiResponse::Json(serde_json::json!({ "items": items })))
    }
}

pub fn organization(id: &str, name: &str) -> Organization {
    Organization {
        id: id.to_string(),
        name: name.to_string(),
        url: None,
        api: Default::default(),
        licensing: Default::default(),
    }
}

pub fn network(id: &str, name: &str) -> Network {
    Network {
        id: id.to_string(),
        name: name.to_string(),
        network_type: None,
        time_zone: None,
        tags: Vec::new(),
    }
}

pub fn profile(id: &str, name: &str) -> Profile {
    Profile {
        profile_id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn record(id: &str, hostname: &str, address: &str, profile_id: &str) -> DnsRecord {
    DnsRecord {
        record_id: id.to_string(),
        hostname: hostname.to_string(),
        address: address.to_string(),
        profile: Some(IdRef::new(profile_id)),
    }
}

pub fn assignment(id: &str, network_id: &str, profile_id: &str) -> Assignment {
    Assignment {
        assignment_id: id.to_string(),
        network: Some(IdRef::new(network_id)),
        profile: Some(IdRef::new(profile_id)),
    }
}

/// Console over `fake` plus a session with `org_id` selected
pub async fn console_for(fake: &Arc<FakeDashboard>, org_id: &str) -> (LocalDnsConsole, Session) {
    let console = LocalDnsConsole::new(fake.clone(), fake.clone());
    let mut session = Session::new();
    session.set_organization(org_id).await;
    (console, session)
}
