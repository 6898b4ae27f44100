//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod roster;
mod user;
pub mod result;

pub use roster::Roster;
pub use user::{DisplayUser, User};
