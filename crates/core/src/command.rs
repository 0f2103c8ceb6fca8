// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use stagehand_domain::{PackageId, RequirementId, Role, StaffId};

const fn default_count() -> i64 {
    1
}

/// One user action against an event draft, expressed as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// Add demand for a role, or grow an existing requirement for it.
    AddRole {
        /// The role.
        role: Role,
        /// How many people; non-positive counts as one.
        #[serde(default = "default_count")]
        count: i64,
    },
    /// Delete a requirement and its assignments.
    RemoveRole {
        /// The requirement to delete.
        requirement_id: RequirementId,
    },
    /// Grow or shrink a requirement's slot count.
    ChangeRequiredCount {
        /// The requirement to resize.
        requirement_id: RequirementId,
        /// The signed change.
        delta: i64,
    },
    /// Pick a staff member for a requirement, subject to the conflict gate.
    RequestAssignment {
        /// The requirement to fill.
        requirement_id: RequirementId,
        /// The picked staff member.
        staff_id: StaffId,
    },
    /// Confirm the pending busy-staff assignment.
    ConfirmAssignment,
    /// Discard the pending busy-staff assignment.
    CancelAssignment,
    /// Remove a staff member from a requirement.
    Unassign {
        /// The requirement.
        requirement_id: RequirementId,
        /// The staff member to remove.
        staff_id: StaffId,
    },
    /// Change the selected package; `None` clears it.
    SelectPackage {
        /// The package to select.
        package_id: Option<PackageId>,
    },
    /// Adjust the extra quantity of one item.
    AdjustExtra {
        /// The item.
        item_name: String,
        /// The signed change.
        delta: i64,
    },
}

impl Command {
    /// Returns the audit action name for this command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddRole { .. } => "AddRole",
            Self::RemoveRole { .. } => "RemoveRole",
            Self::ChangeRequiredCount { .. } => "ChangeRequiredCount",
            Self::RequestAssignment { .. } => "RequestAssignment",
            Self::ConfirmAssignment => "ConfirmAssignment",
            Self::CancelAssignment => "CancelAssignment",
            Self::Unassign { .. } => "Unassign",
            Self::SelectPackage { .. } => "SelectPackage",
            Self::AdjustExtra { .. } => "AdjustExtra",
        }
    }
}
