//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - dummyjson HTTP client for DirectoryProvider
//! - Demo data provider for offline use and testing

pub mod demo;
pub mod dummyjson;
