//! Remote API traits for the Local DNS console
//!
//! This module defines the seams between orchestration and transport.
//!
//! - [`DirectoryApi`]: Organization and network listings
//! - [`LocalDnsApi`]: Local DNS profiles, records and network assignments

pub mod directory;
pub mod local_dns;

pub use directory::DirectoryApi;
pub use local_dns::{ApiResponse, Created, LocalDnsApi};
