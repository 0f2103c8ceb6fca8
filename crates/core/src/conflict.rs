// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Busy-staff conflict gate.
//!
//! Assigning a staff member flagged `Busy` is a decision point, not an
//! error. The gate has two states:
//!
//! ```text
//! Idle --(request busy candidate)--> PendingConfirmation
//! PendingConfirmation --(confirm)--> Idle   (assign runs)
//! PendingConfirmation --(cancel)---> Idle   (no mutation)
//! ```
//!
//! Available candidates bypass the gate and are assigned immediately.
//! Requests that `assign` would ignore anyway (unknown requirement,
//! duplicate, full) never open a pending confirmation.

use crate::staffing::{assign, can_assign};
use serde::{Deserialize, Serialize};
use stagehand_domain::{RequirementId, RoleRequirement, StaffId, StaffProfile};
use tracing::debug;

/// A pending decision raised when a busy staff member is targeted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentConflict {
    /// The candidate being assigned.
    pub staff: StaffProfile,
    /// The requirement the candidate would fill.
    pub requirement_id: RequirementId,
    /// Description of the commitment that makes the candidate busy.
    pub commitment: String,
}

impl AssignmentConflict {
    /// Builds the conflict for a candidate, describing the other commitment
    /// from the profile's busy reason when present.
    #[must_use]
    pub fn for_candidate(candidate: &StaffProfile, requirement_id: RequirementId) -> Self {
        let commitment: String = candidate.busy_reason.clone().unwrap_or_else(|| {
            format!(
                "{} is marked busy with another commitment",
                candidate.name
            )
        });

        Self {
            staff: candidate.clone(),
            requirement_id,
            commitment,
        }
    }
}

/// Record of a confirmed conflict, kept so the other commitment can be
/// reconciled outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictOverride {
    /// The staff member assigned despite being busy.
    pub staff_id: StaffId,
    /// The requirement they were assigned to.
    pub requirement_id: RequirementId,
    /// The commitment that was overridden.
    pub commitment: String,
}

impl From<&AssignmentConflict> for ConflictOverride {
    fn from(conflict: &AssignmentConflict) -> Self {
        Self {
            staff_id: conflict.staff.id.clone(),
            requirement_id: conflict.requirement_id,
            commitment: conflict.commitment.clone(),
        }
    }
}

/// The conflict gate state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConflictGate {
    /// No decision pending.
    #[default]
    Idle,
    /// Waiting for the user to confirm or cancel.
    PendingConfirmation(AssignmentConflict),
}

impl ConflictGate {
    /// Returns the pending conflict, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&AssignmentConflict> {
        match self {
            Self::Idle => None,
            Self::PendingConfirmation(conflict) => Some(conflict),
        }
    }

    /// Returns whether a decision is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::PendingConfirmation(_))
    }
}

/// Result of driving the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateTransition {
    /// The gate after the step.
    pub gate: ConflictGate,
    /// The requirements after the step.
    pub requirements: Vec<RoleRequirement>,
    /// The conflict that was confirmed and assigned in this step, if any.
    pub confirmed: Option<AssignmentConflict>,
}

impl GateTransition {
    fn unchanged(gate: &ConflictGate, requirements: &[RoleRequirement]) -> Self {
        Self {
            gate: gate.clone(),
            requirements: requirements.to_vec(),
            confirmed: None,
        }
    }
}

/// Requests assignment of `candidate` to a requirement.
///
/// # Arguments
///
/// * `gate` - The current gate state
/// * `requirements` - The event's current requirements
/// * `requirement_id` - The requirement to fill
/// * `candidate` - The staff member picked
///
/// # Returns
///
/// - Unchanged state if a decision is already pending or `assign` would be a no-op
/// - An assigned, still idle state for an available candidate
/// - A pending state with unchanged requirements for a busy candidate
#[must_use]
pub fn request_assignment(
    gate: &ConflictGate,
    requirements: &[RoleRequirement],
    requirement_id: RequirementId,
    candidate: &StaffProfile,
) -> GateTransition {
    if gate.is_pending() {
        debug!(
            staff_id = candidate.id.value(),
            "request_assignment: ignored while a confirmation is pending"
        );
        return GateTransition::unchanged(gate, requirements);
    }

    if !can_assign(requirements, requirement_id, &candidate.id) {
        debug!(
            requirement_id = requirement_id.value(),
            staff_id = candidate.id.value(),
            "request_assignment: assignment would be a no-op"
        );
        return GateTransition::unchanged(gate, requirements);
    }

    if candidate.is_busy() {
        return GateTransition {
            gate: ConflictGate::PendingConfirmation(AssignmentConflict::for_candidate(
                candidate,
                requirement_id,
            )),
            requirements: requirements.to_vec(),
            confirmed: None,
        };
    }

    GateTransition {
        gate: ConflictGate::Idle,
        requirements: assign(requirements, requirement_id, &candidate.id),
        confirmed: None,
    }
}

/// Confirms the pending conflict and performs the assignment.
///
/// Confirming while idle is a no-op.
#[must_use]
pub fn confirm(gate: &ConflictGate, requirements: &[RoleRequirement]) -> GateTransition {
    let Some(conflict) = gate.pending() else {
        return GateTransition::unchanged(gate, requirements);
    };

    let updated: Vec<RoleRequirement> =
        assign(requirements, conflict.requirement_id, &conflict.staff.id);
    let confirmed: Option<AssignmentConflict> =
        (updated.as_slice() != requirements).then(|| conflict.clone());

    GateTransition {
        gate: ConflictGate::Idle,
        requirements: updated,
        confirmed,
    }
}

/// Discards the pending conflict without mutating anything.
#[must_use]
pub const fn cancel(_gate: &ConflictGate) -> ConflictGate {
    ConflictGate::Idle
}
