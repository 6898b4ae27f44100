//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod demo;
mod status;
pub mod debounce;
pub mod filter;
pub mod logging;
pub mod roster;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
pub use demo::DemoService;
pub use filter::DirectoryFilter;
pub use logging::{LogEntry, LogEvent, LoggingService};
pub use roster::{LoadState, RosterService};
pub use status::{BirthDateRange, StatusService, StatusSummary};
