//! Dispatch of console commands onto [`LocalDnsConsole`]

use std::io::Write;

use anyhow::Result;
use localdns_core::views::{DnsRecordRow, ProfileWithNetwork};
use localdns_core::{Created, LocalDnsConsole, Session, Tabular};

use crate::cli::{AssignmentAction, ConsoleCommand, ProfileAction, RecordAction};
use crate::render;

/// Run one console command and write its output
pub async fn execute(
    console: &LocalDnsConsole,
    session: &Session,
    command: ConsoleCommand,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        ConsoleCommand::Orgs => {
            let rows = console.organizations(session).await?;
            render::rows(out, &rows, json, "No organizations found.")
        }
        ConsoleCommand::Networks => {
            let rows = console.networks(session).await?;
            render::rows(out, &rows, json, "No networks found.")
        }
        ConsoleCommand::Profiles { action } => profiles(console, session, action, json, out).await,
        ConsoleCommand::Records { action } => records(console, session, action, json, out).await,
        ConsoleCommand::Assignments { action } => {
            assignments(console, session, action, json, out).await
        }
    }
}

async fn profiles(
    console: &LocalDnsConsole,
    session: &Session,
    action: ProfileAction,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        ProfileAction::List => {
            let rows = console.list_profiles_with_networks(session).await?;
            render::rows(out, &rows, json, "No profiles found.")
        }
        ProfileAction::Create { name } => {
            match console.create_profile(session, &name).await? {
                Created::Entity(profile) => {
                    let message =
                        format!("Profile created: {}", ProfileWithNetwork::from(&profile).label());
                    render::created(out, &profile, json, &message)
                }
                Created::NoContent => render::created_without_body(out, "Profile", json),
            }
        }
        ProfileAction::Delete { profile_id } => {
            console.delete_profile(session, &profile_id).await?;
            render::deleted(out, "Profile", &profile_id, json)
        }
    }
}

async fn records(
    console: &LocalDnsConsole,
    session: &Session,
    action: RecordAction,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        RecordAction::List => {
            let rows = console.list_dns_records(session).await?;
            render::rows(out, &rows, json, "No DNS records found.")
        }
        RecordAction::Create {
            profile,
            hostname,
            address,
        } => {
            let created = console
                .create_dns_record(session, &profile, &hostname, &address)
                .await?;
            match created {
                Created::Entity(record) => {
                    let message = format!(
                        "DNS record created: {} -> {}",
                        DnsRecordRow::from(&record).label(),
                        record.address
                    );
                    render::created(out, &record, json, &message)
                }
                Created::NoContent => render::created_without_body(out, "DNS record", json),
            }
        }
        RecordAction::Delete { record_id } => {
            console.delete_dns_record(session, &record_id).await?;
            render::deleted(out, "Record", &record_id, json)
        }
    }
}

async fn assignments(
    console: &LocalDnsConsole,
    session: &Session,
    action: AssignmentAction,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match action {
        AssignmentAction::List => {
            let rows = console.list_network_assignments(session).await?;
            render::rows(out, &rows, json, "No assignments found.")
        }
        AssignmentAction::Create { network, profile } => {
            let created = console
                .assign_profile_to_network(session, &network, &profile)
                .await?;
            let Some(created) = created.entity() else {
                return render::created_without_body(out, "Assignment", json);
            };
            let ids: Vec<&str> = created.iter().map(|a| a.assignment_id.as_str()).collect();
            let message = format!(
                "Profile {} assigned to network {} ({})",
                profile.trim(),
                network.trim(),
                ids.join(", ")
            );
            render::created(out, &created, json, &message)
        }
        AssignmentAction::Delete { assignment_id } => {
            console
                .remove_network_assignment(session, &assignment_id)
                .await?;
            render::deleted(out, "Assignment", &assignment_id, json)
        }
    }
}
