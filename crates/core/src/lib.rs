// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Event resource-allocation engine.
//!
//! Two subsystems over immutable snapshots:
//! - the staffing allocator (`staffing`, `conflict`): role requirements,
//!   slot assignment, and the busy-staff confirmation gate
//! - the equipment reconciler (`equipment`): merging a package baseline
//!   with ad-hoc extras
//!
//! `apply` wraps both behind `Command` values for callers that want one
//! entry point and an audit trail.

mod apply;
mod command;
mod config;
mod conflict;
mod equipment;
mod error;
mod staffing;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use config::{AllocationConfig, ConflictResolution, PackageSwitchPolicy};
pub use conflict::{
    AssignmentConflict, ConflictGate, ConflictOverride, GateTransition, cancel, confirm,
    request_assignment,
};
pub use equipment::{adjust_extra, baseline_for, carry_extras, merge};
pub use error::CoreError;
pub use staffing::{
    AvailabilityFilter, add_role, assign, can_assign, candidates_for, change_required_count,
    is_assigned_anywhere, next_requirement_id, remove_role, staffing_totals, unassign,
};
pub use state::{EventDraft, TransitionResult};
