//! Display formatting for models, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers cover collections and results so the same data can be
//! rendered differently depending on context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Session, Step) │───▶│ (Queue, Result) │───▶│  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (Queue, Workouts, Records)
//! - [`results`]: Operation results (RecordResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Timestamp and countdown formatting
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use pacer_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Workout recorded".to_string());
//! assert_eq!(status.to_string(), "Success: Workout recorded\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Queue, Records, Workouts};
pub use datetime::{Clock, LocalDateTime};
pub use results::RecordResult;
pub use status::OperationStatus;
