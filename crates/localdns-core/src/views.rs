//! Denormalized display rows
//!
//! Each row is a flat record of column name to display value. Rows serialize
//! with their display column names and render as table cells via [`Tabular`].

use serde::Serialize;

use crate::model::{DnsRecord, Network, Organization, Profile};

/// Placeholder for a profile that no assignment references
pub const UNASSIGNED: &str = "[unassigned]";

/// Placeholder for a foreign key absent from the fetched snapshot
pub const UNKNOWN: &str = "[unknown]";

/// A row that can be rendered as a table line
pub trait Tabular {
    /// Column headers, in display order
    const COLUMNS: &'static [&'static str];

    /// Cell values, aligned with [`Tabular::COLUMNS`]
    fn cells(&self) -> Vec<String>;

    /// Short label used when offering the row as a choice
    fn label(&self) -> String;
}

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Organization listing row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    #[serde(rename = "API Enabled")]
    pub api_enabled: bool,
    #[serde(rename = "Licensing Model")]
    pub licensing_model: Option<String>,
}

impl From<&Organization> for OrganizationRow {
    fn from(org: &Organization) -> Self {
        Self {
            id: org.id.clone(),
            name: org.name.clone(),
            url: org.url.clone(),
            api_enabled: org.api.enabled,
            licensing_model: org.licensing.model.clone(),
        }
    }
}

impl Tabular for OrganizationRow {
    const COLUMNS: &'static [&'static str] = &["ID", "Name", "URL", "API Enabled", "Licensing Model"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            cell(&self.url),
            self.api_enabled.to_string(),
            cell(&self.licensing_model),
        ]
    }

    fn label(&self) -> String {
        format!("[{}] - {}", self.id, self.name)
    }
}

/// Network listing row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub network_type: Option<String>,
    #[serde(rename = "Time Zone")]
    pub time_zone: Option<String>,
    /// Tags joined with `", "`
    #[serde(rename = "Tags")]
    pub tags: String,
}

impl From<&Network> for NetworkRow {
    fn from(network: &Network) -> Self {
        Self {
            id: network.id.clone(),
            name: network.name.clone(),
            network_type: network.network_type.clone(),
            time_zone: network.time_zone.clone(),
            tags: network.tags.join(", "),
        }
    }
}

impl Tabular for NetworkRow {
    const COLUMNS: &'static [&'static str] = &["ID", "Name", "Type", "Time Zone", "Tags"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            cell(&self.network_type),
            cell(&self.time_zone),
            self.tags.clone(),
        ]
    }

    fn label(&self) -> String {
        format!("[{}] - {}", self.id, self.name)
    }
}

/// Profile with the network it is assigned to
///
/// `network_id` and `network_name` hold [`UNASSIGNED`] when no assignment
/// references the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileWithNetwork {
    #[serde(rename = "Profile ID")]
    pub profile_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Network ID")]
    pub network_id: String,
    #[serde(rename = "Network Name")]
    pub network_name: String,
}

/// A bare profile, before any assignment is known
impl From<&Profile> for ProfileWithNetwork {
    fn from(profile: &Profile) -> Self {
        Self {
            profile_id: profile.profile_id.clone(),
            name: profile.name.clone(),
            network_id: UNASSIGNED.to_string(),
            network_name: UNASSIGNED.to_string(),
        }
    }
}

impl Tabular for ProfileWithNetwork {
    const COLUMNS: &'static [&'static str] = &["Profile ID", "Name", "Network ID", "Network Name"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.profile_id.clone(),
            self.name.clone(),
            self.network_id.clone(),
            self.network_name.clone(),
        ]
    }

    fn label(&self) -> String {
        format!("[{}] - {}", self.profile_id, self.name)
    }
}

/// DNS record row; the owning profile is shown by ID only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsRecordRow {
    #[serde(rename = "Record ID")]
    pub record_id: String,
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Profile ID")]
    pub profile_id: Option<String>,
}

impl From<&DnsRecord> for DnsRecordRow {
    fn from(record: &DnsRecord) -> Self {
        Self {
            record_id: record.record_id.clone(),
            hostname: record.hostname.clone(),
            address: record.address.clone(),
            profile_id: record.profile_id().map(str::to_string),
        }
    }
}

impl Tabular for DnsRecordRow {
    const COLUMNS: &'static [&'static str] = &["Record ID", "Hostname", "Address", "Profile ID"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.record_id.clone(),
            self.hostname.clone(),
            self.address.clone(),
            cell(&self.profile_id),
        ]
    }

    fn label(&self) -> String {
        format!("[{}] - {}", self.record_id, self.hostname)
    }
}

/// Assignment with resolved network and profile names
///
/// Names hold [`UNKNOWN`] when the referenced entity is not in the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentWithNames {
    #[serde(rename = "Assignment ID")]
    pub assignment_id: String,
    #[serde(rename = "Network ID")]
    pub network_id: Option<String>,
    #[serde(rename = "Network Name")]
    pub network_name: String,
    #[serde(rename = "Profile ID")]
    pub profile_id: Option<String>,
    #[serde(rename = "Profile Name")]
    pub profile_name: String,
}

impl Tabular for AssignmentWithNames {
    const COLUMNS: &'static [&'static str] = &[
        "Assignment ID",
        "Network ID",
        "Network Name",
        "Profile ID",
        "Profile Name",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.assignment_id.clone(),
            cell(&self.network_id),
            self.network_name.clone(),
            cell(&self.profile_id),
            self.profile_name.clone(),
        ]
    }

    fn label(&self) -> String {
        format!(
            "[{}] - Network: {}-{} - Profile: {}-{}",
            self.assignment_id,
            cell(&self.network_id),
            self.network_name,
            cell(&self.profile_id),
            self.profile_name
        )
    }
}
