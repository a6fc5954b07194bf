//! Sweep Executor
//!
//! Runs the sweep and turns its results into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! BenchmarkConfig (pivot.toml + CLI flags)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Generate inputs, time both strategies per size
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Summary stats and comparison per size (parallel)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Build Report with metadata and chart data
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable table
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Sweep execution with progress reporting
//! - [`statistics`] - Parallel statistics computation
//! - [`report`] - Report building
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;
mod report;
mod statistics;

// Re-export public API
pub use execution::{Executor, SweepOutcome};
pub use formatting::{format_human_output, format_table};
pub use metadata::build_report_meta;
pub use report::build_report;
pub use statistics::{SizeStatistics, compute_statistics};
