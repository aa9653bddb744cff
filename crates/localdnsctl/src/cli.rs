//! Command-line surface
//!
//! The same [`ConsoleCommand`] set is accepted on the command line and inside
//! the interactive shell.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Organization to operate on
    #[arg(long, global = true, env = "LOCALDNS_ORG_ID")]
    pub org: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the license disclaimer
    Disclaimer,

    /// Start an interactive session
    Shell,

    #[command(flatten)]
    Console(ConsoleCommand),
}

/// Commands that talk to the Dashboard API
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// List organizations visible to the API key
    Orgs,

    /// List networks of the selected organization
    Networks,

    /// Manage Local DNS profiles
    Profiles {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Manage Local DNS records
    Records {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Manage profile-to-network assignments
    Assignments {
        #[command(subcommand)]
        action: AssignmentAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    /// List profiles with their assigned network
    List,
    /// Create a profile
    Create { name: String },
    /// Delete a profile
    Delete { profile_id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RecordAction {
    /// List DNS records
    List,
    /// Create a DNS record in a profile
    Create {
        #[arg(long)]
        profile: String,
        #[arg(long)]
        hostname: String,
        #[arg(long)]
        address: String,
    },
    /// Delete a DNS record
    Delete { record_id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AssignmentAction {
    /// List assignments with network and profile names
    List,
    /// Assign a profile to a network
    Create {
        #[arg(long)]
        network: String,
        #[arg(long)]
        profile: String,
    },
    /// Remove an assignment
    Delete { assignment_id: String },
}

/// One line typed into the interactive shell
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Select the organization for the following commands
    Use { org_id: String },

    /// Print the license disclaimer
    Disclaimer,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,

    #[command(flatten)]
    Console(ConsoleCommand),
}

/// Split a shell line into words, honoring double quotes
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err("unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
