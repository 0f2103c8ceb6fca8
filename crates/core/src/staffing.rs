// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staffing allocator.
//!
//! Pure operations over one event's list of role requirements. Each
//! operation takes the current list by reference and returns a new list;
//! the input is never modified.
//!
//! None of these operations fail. Unknown ids, duplicate assignments, and
//! assignments beyond capacity are no-ops that return an unchanged copy.
//! Busy-staff conflict checking is not done here; see `conflict`.

use serde::{Deserialize, Serialize};
use stagehand_domain::{
    Availability, RequirementId, Role, RoleRequirement, StaffId, StaffProfile,
};
use tracing::debug;

/// Availability tab applied by `candidates_for`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityFilter {
    /// No availability filtering.
    #[default]
    All,
    /// Only staff flagged available.
    AvailableOnly,
    /// Only staff flagged busy.
    BusyOnly,
}

impl AvailabilityFilter {
    /// Returns whether a staff member with `availability` passes this filter.
    #[must_use]
    pub const fn allows(self, availability: Availability) -> bool {
        match self {
            Self::All => true,
            Self::AvailableOnly => matches!(availability, Availability::Available),
            Self::BusyOnly => matches!(availability, Availability::Busy),
        }
    }
}

/// Returns the id the next added requirement receives.
///
/// The id is one past both the highest id present and `last_issued`, the
/// highest id the event has ever handed out. Carrying `last_issued`
/// forward keeps an id retired by a removal from coming back.
#[must_use]
pub fn next_requirement_id(requirements: &[RoleRequirement], last_issued: u32) -> RequirementId {
    let max: u32 = requirements
        .iter()
        .map(|r| r.id().value())
        .max()
        .unwrap_or(0);
    RequirementId::new(max.max(last_issued).saturating_add(1))
}

/// Adds demand for `count` people of `role`.
///
/// If a requirement for `role` already exists its required count grows by
/// `count`; otherwise a new, unassigned requirement is appended with the id
/// from [`next_requirement_id`]. A non-positive `count` is treated as 1.
///
/// # Arguments
///
/// * `requirements` - The event's current requirements
/// * `role` - The role to add
/// * `count` - How many people to add demand for
/// * `last_issued` - The highest requirement id issued so far, 0 if none
#[must_use]
pub fn add_role(
    requirements: &[RoleRequirement],
    role: Role,
    count: i64,
    last_issued: u32,
) -> Vec<RoleRequirement> {
    let count: u32 = u32::try_from(count.max(1)).unwrap_or(u32::MAX);
    let mut updated: Vec<RoleRequirement> = requirements.to_vec();

    if let Some(existing) = updated.iter_mut().find(|r| r.role() == role) {
        let grown: u32 = existing.required_count().saturating_add(count);
        existing.set_required_count(grown);
        return updated;
    }

    updated.push(RoleRequirement::new(
        next_requirement_id(requirements, last_issued),
        role,
        count,
    ));
    updated
}

/// Deletes a requirement together with its assignments.
///
/// An unknown id is a no-op.
#[must_use]
pub fn remove_role(
    requirements: &[RoleRequirement],
    requirement_id: RequirementId,
) -> Vec<RoleRequirement> {
    let updated: Vec<RoleRequirement> = requirements
        .iter()
        .filter(|r| r.id() != requirement_id)
        .cloned()
        .collect();

    if updated.len() == requirements.len() {
        debug!(
            requirement_id = requirement_id.value(),
            "remove_role: requirement not found"
        );
    }
    updated
}

/// Changes a requirement's slot count by `delta`.
///
/// The new count is `max(assigned, required + delta)`, and never below 1.
/// An unknown id is a no-op.
#[must_use]
pub fn change_required_count(
    requirements: &[RoleRequirement],
    requirement_id: RequirementId,
    delta: i64,
) -> Vec<RoleRequirement> {
    let mut updated: Vec<RoleRequirement> = requirements.to_vec();

    if let Some(requirement) = updated.iter_mut().find(|r| r.id() == requirement_id) {
        let target: i64 = i64::from(requirement.required_count()).saturating_add(delta);
        let target: u32 = u32::try_from(target.max(0)).unwrap_or(u32::MAX);
        requirement.set_required_count(target);
    } else {
        debug!(
            requirement_id = requirement_id.value(),
            "change_required_count: requirement not found"
        );
    }
    updated
}

/// Returns whether `assign` would change anything.
///
/// This is the single capacity/duplicate gate shared by `assign` and the
/// conflict gate.
#[must_use]
pub fn can_assign(
    requirements: &[RoleRequirement],
    requirement_id: RequirementId,
    staff_id: &StaffId,
) -> bool {
    requirements
        .iter()
        .find(|r| r.id() == requirement_id)
        .is_some_and(|r| r.accepts(staff_id))
}

/// Places `staff_id` into the next free slot of a requirement.
///
/// No-op if the requirement is absent, the staff member is already in it,
/// or every slot is filled. Busy flags are not consulted.
#[must_use]
pub fn assign(
    requirements: &[RoleRequirement],
    requirement_id: RequirementId,
    staff_id: &StaffId,
) -> Vec<RoleRequirement> {
    let mut updated: Vec<RoleRequirement> = requirements.to_vec();

    let applied: bool = updated
        .iter_mut()
        .find(|r| r.id() == requirement_id)
        .is_some_and(|r| r.push_assignment(staff_id.clone()));

    if !applied {
        debug!(
            requirement_id = requirement_id.value(),
            staff_id = staff_id.value(),
            "assign: no-op"
        );
    }
    updated
}

/// Removes `staff_id` from a requirement's slots.
///
/// No-op if either is absent.
#[must_use]
pub fn unassign(
    requirements: &[RoleRequirement],
    requirement_id: RequirementId,
    staff_id: &StaffId,
) -> Vec<RoleRequirement> {
    let mut updated: Vec<RoleRequirement> = requirements.to_vec();

    if let Some(requirement) = updated.iter_mut().find(|r| r.id() == requirement_id) {
        requirement.remove_assignment(staff_id);
    }
    updated
}

/// Returns whether `staff_id` occupies a slot in any requirement of the event.
#[must_use]
pub fn is_assigned_anywhere(requirements: &[RoleRequirement], staff_id: &StaffId) -> bool {
    requirements.iter().any(|r| r.is_assigned(staff_id))
}

/// Builds the assignable pool for one requirement's picker.
///
/// Excludes anyone already assigned to any requirement of this event and
/// anyone lacking the requirement's role, then applies a case-insensitive
/// search over name and role labels and the availability tab. Output keeps
/// roster order. An unknown requirement id yields an empty pool.
///
/// # Arguments
///
/// * `requirements` - The event's current requirements
/// * `requirement_id` - The requirement whose picker is open
/// * `staff` - The roster
/// * `search_text` - Free-text search; blank matches everyone
/// * `filter` - The availability tab
#[must_use]
pub fn candidates_for<'a>(
    requirements: &[RoleRequirement],
    requirement_id: RequirementId,
    staff: &'a [StaffProfile],
    search_text: &str,
    filter: AvailabilityFilter,
) -> Vec<&'a StaffProfile> {
    let Some(requirement) = requirements.iter().find(|r| r.id() == requirement_id) else {
        return Vec::new();
    };
    let role: Role = requirement.role();

    staff
        .iter()
        .filter(|profile| !is_assigned_anywhere(requirements, &profile.id))
        .filter(|profile| profile.has_role(role))
        .filter(|profile| profile.matches_search(search_text))
        .filter(|profile| filter.allows(profile.availability))
        .collect()
}

/// Counts filled and demanded slots across all requirements.
///
/// Returns `(assigned, required)`.
#[must_use]
pub fn staffing_totals(requirements: &[RoleRequirement]) -> (u32, u32) {
    requirements.iter().fold((0, 0), |(assigned, required), r| {
        (
            assigned.saturating_add(r.assigned_count()),
            required.saturating_add(r.required_count()),
        )
    })
}
