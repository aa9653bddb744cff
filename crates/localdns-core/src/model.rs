//! Remote-owned entities
//!
//! These mirror the Dashboard API JSON shapes. Every field, identifiers
//! included, is optional or defaulted so one sparse item never fails a whole
//! list; a missing identifier decodes as an empty string.

use serde::{Deserialize, Serialize};

/// Reference to another entity by id (`{"id": "..."}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    #[serde(default)]
    pub id: String,
}

impl IdRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Organization API access flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiAccess {
    #[serde(default)]
    pub enabled: bool,
}

/// Organization licensing information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Licensing {
    #[serde(default)]
    pub model: Option<String>,
}

/// Top-level tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub api: ApiAccess,
    #[serde(default)]
    pub licensing: Licensing,
}

/// Site grouping inside an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub network_type: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Local DNS profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub profile_id: String,
    #[serde(default)]
    pub name: String,
}

/// Hostname to address mapping owned by a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    #[serde(default)]
    pub record_id: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub profile: Option<IdRef>,
}

fn ref_id(id_ref: &Option<IdRef>) -> Option<&str> {
    id_ref
        .as_ref()
        .map(|r| r.id.as_str())
        .filter(|id| !id.is_empty())
}

impl DnsRecord {
    pub fn profile_id(&self) -> Option<&str> {
        ref_id(&self.profile)
    }
}

/// Binding of one profile to one network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(default)]
    pub assignment_id: String,
    #[serde(default)]
    pub network: Option<IdRef>,
    #[serde(default)]
    pub profile: Option<IdRef>,
}

impl Assignment {
    pub fn network_id(&self) -> Option<&str> {
        ref_id(&self.network)
    }

    pub fn profile_id(&self) -> Option<&str> {
        ref_id(&self.profile)
    }
}

/// Body of `POST profiles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub name: String,
}

/// Body of `POST records`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDnsRecord {
    pub hostname: String,
    pub address: String,
    pub profile: IdRef,
}

/// One item of a `profiles/assignments/bulkCreate` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAssignment {
    pub network: IdRef,
    pub profile: IdRef,
}

/// One item of a `profiles/assignments/bulkDelete` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRef {
    pub assignment_id: String,
}

/// List envelope used by the Local DNS endpoints (`{"items": [...]}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Items<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Items<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}
