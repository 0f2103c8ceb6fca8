// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Allocation policy configuration.
//!
//! Two behaviors are policy rather than fixed rules: what happens to extra
//! allocations when the selected package changes, and what a confirmed
//! busy-staff assignment leaves behind.

use serde::{Deserialize, Serialize};

/// How extra allocations survive a change of the selected package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageSwitchPolicy {
    /// Clear every extra allocation.
    Reset,
    /// Keep every extra allocation as entered.
    Preserve,
    /// Keep positive extras; keep zero rows only where the new package has a baseline.
    #[default]
    Revalidate,
}

/// What confirming a busy-staff assignment records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictResolution {
    /// Assign only; the other commitment is not tracked.
    AssignOnly,
    /// Assign and keep a `ConflictOverride` on the draft for later reconciliation.
    #[default]
    RecordOverride,
}

/// Policy knobs for one allocation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Treatment of extras on package change.
    pub package_switch: PackageSwitchPolicy,
    /// Treatment of confirmed conflicts.
    pub conflict_resolution: ConflictResolution,
}
