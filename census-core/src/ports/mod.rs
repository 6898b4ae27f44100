//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod directory_provider;

pub use directory_provider::{DirectoryProvider, FetchUsersResult};
