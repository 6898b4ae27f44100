//! Directory source port
//!
//! Defines the interface for fetching user records from external sources
//! (the dummyjson HTTP endpoint, demo data, etc.)

use crate::domain::result::Result;
use crate::domain::User;

/// Result of fetching users from a provider
#[derive(Debug, Default)]
pub struct FetchUsersResult {
    pub users: Vec<User>,
    /// Human-readable notes about records that were skipped
    pub warnings: Vec<String>,
}

/// Directory source trait
///
/// Implementations fetch the full user collection from an external source.
/// The RosterService uses this trait to load data without knowing the
/// specifics of each provider (dummyjson, demo, etc.)
pub trait DirectoryProvider: Send + Sync {
    /// Provider name (e.g., "dummyjson", "demo")
    fn name(&self) -> &str;

    /// Fetch the full user collection
    ///
    /// The source is static, so providers return everything in one call;
    /// no paging parameters are sent.
    fn fetch_users(&self) -> Result<FetchUsersResult>;
}
