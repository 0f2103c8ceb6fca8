// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The shape an event takes when handed to storage.
//!
//! Requirements are flattened to a role name, counts, and resolved staff
//! profiles. Equipment is flattened to one row per merged line. A pending
//! busy-staff confirmation is session state and is never persisted.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use stagehand::{ConflictOverride, EventDraft};
use stagehand_domain::{
    Catalog, EquipmentId, EquipmentLine, ExtraAllocation, PackageId, RequirementId, Role,
    RoleRequirement, StaffId, StaffProfile,
};
use tracing::{debug, warn};

/// A role requirement as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRoleRequirement {
    /// The role's display label.
    pub role_name: String,
    /// Number of slots.
    pub required: u32,
    /// Number of filled slots.
    pub assigned: u32,
    /// The assigned staff, in slot order.
    pub members: Vec<StaffProfile>,
}

/// One merged equipment row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedEquipmentLine {
    /// Catalog id of the item, or `None` when the name is not in the catalog.
    pub id: Option<EquipmentId>,
    /// The item name.
    pub name: String,
    /// Quantity contributed by the selected package.
    pub in_package: u32,
    /// Ad-hoc quantity on top of the package.
    pub extra: i64,
}

/// Everything the storage layer receives when an event is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSavePayload {
    /// The event being saved.
    pub event_id: String,
    /// The selected package, if any.
    pub package_id: Option<PackageId>,
    /// Role requirements in event order.
    pub roles: Vec<PersistedRoleRequirement>,
    /// The merged equipment table.
    pub equipment: Vec<PersistedEquipmentLine>,
    /// Confirmed busy-staff assignments awaiting reconciliation. Their
    /// requirement ids are 1-based positions in `roles`.
    #[serde(default)]
    pub overrides: Vec<ConflictOverride>,
}

impl EventSavePayload {
    /// Serializes the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String, ApiError> {
        let result: Result<String, serde_json::Error> = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };

        result.map_err(|e| ApiError::Internal {
            message: format!("Failed to serialize save payload: {e}"),
        })
    }
}

fn persist_requirement(
    catalog: &Catalog,
    event_id: &str,
    requirement: &RoleRequirement,
) -> PersistedRoleRequirement {
    let members: Vec<StaffProfile> = requirement
        .assigned()
        .iter()
        .filter_map(|id| {
            let profile: Option<&StaffProfile> = catalog.staff(id);
            if profile.is_none() {
                warn!(
                    event_id,
                    staff_id = id.value(),
                    requirement_id = requirement.id().value(),
                    "assigned staff member is not in the roster; omitted from save"
                );
            }
            profile.cloned()
        })
        .collect();

    PersistedRoleRequirement {
        role_name: requirement.role().label().to_string(),
        required: requirement.required_count(),
        assigned: requirement.assigned_count(),
        members,
    }
}

fn persist_line(catalog: &Catalog, line: EquipmentLine) -> PersistedEquipmentLine {
    PersistedEquipmentLine {
        id: catalog.equipment_by_name(&line.name).map(|item| item.id.clone()),
        name: line.name,
        in_package: line.baseline,
        extra: line.extra,
    }
}

/// Flattens a draft into the persisted save shape.
///
/// # Arguments
///
/// * `catalog` - Roster and equipment catalog used to resolve ids
/// * `draft` - The draft being saved
#[must_use]
pub fn build_save_payload(catalog: &Catalog, draft: &EventDraft) -> EventSavePayload {
    if let Some(conflict) = draft.gate.pending() {
        warn!(
            event_id = %draft.event_id,
            staff_id = conflict.staff.id.value(),
            "pending confirmation is discarded on save"
        );
    }

    EventSavePayload {
        event_id: draft.event_id.clone(),
        package_id: draft.selected_package.clone(),
        roles: draft
            .requirements
            .iter()
            .map(|r| persist_requirement(catalog, &draft.event_id, r))
            .collect(),
        equipment: draft
            .equipment_lines(catalog)
            .into_iter()
            .map(|line| persist_line(catalog, line))
            .collect(),
        overrides: positional_overrides(draft),
    }
}

/// Rewrites override requirement ids to 1-based positions in the requirement list.
fn positional_overrides(draft: &EventDraft) -> Vec<ConflictOverride> {
    draft
        .overrides
        .iter()
        .filter_map(|o| {
            let position: usize = draft
                .requirements
                .iter()
                .position(|r| r.id() == o.requirement_id)?;
            let requirement_id: RequirementId =
                RequirementId::new(u32::try_from(position + 1).ok()?);
            Some(ConflictOverride {
                requirement_id,
                ..o.clone()
            })
        })
        .collect()
}

/// Rebuilds an editable draft from a persisted payload.
///
/// Requirement ids are renumbered from 1 in stored order. Extra allocations
/// are recovered from every row whose extra is non-zero or that the
/// package does not list, which reproduces the same merged table.
/// Overrides whose staff member no longer holds the slot are dropped.
///
/// # Arguments
///
/// * `event_id` - The event the draft belongs to
/// * `payload` - The stored shape
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if a role name does not resolve.
pub fn restore_draft(event_id: &str, payload: &EventSavePayload) -> Result<EventDraft, ApiError> {
    if payload.event_id != event_id {
        warn!(
            event_id,
            payload_event_id = %payload.event_id,
            "restoring payload saved under a different event id"
        );
    }

    let mut draft: EventDraft = EventDraft::new(event_id);
    draft.selected_package = payload.package_id.clone();

    for (index, persisted) in payload.roles.iter().enumerate() {
        let role: Role = Role::parse_str(&persisted.role_name)?;
        let id: RequirementId = RequirementId::new(
            u32::try_from(index + 1).map_err(|_| ApiError::InvalidInput {
                field: String::from("roles"),
                message: String::from("Too many role requirements"),
            })?,
        );
        if persisted.assigned as usize != persisted.members.len() {
            debug!(
                role = %role,
                assigned = persisted.assigned,
                members = persisted.members.len(),
                "assigned count disagrees with members; using members"
            );
        }

        draft.requirements.push(RoleRequirement::with_assigned(
            id,
            role,
            persisted.required,
            persisted.members.iter().map(|m| m.id.clone()),
        ));
    }

    draft.last_requirement_id = draft
        .requirements
        .last()
        .map_or(0, |r| r.id().value());

    // Stored extras below zero are read back as zero
    draft.extras = payload
        .equipment
        .iter()
        .filter(|line| line.extra != 0 || line.in_package == 0)
        .map(|line| ExtraAllocation::new(&line.name, line.extra.max(0)))
        .collect();

    draft.overrides = payload
        .overrides
        .iter()
        .filter(|o| {
            let held: bool = draft
                .requirements
                .iter()
                .any(|r| r.id() == o.requirement_id && r.is_assigned(&o.staff_id));
            if !held {
                warn!(
                    event_id,
                    staff_id = o.staff_id.value(),
                    "dropping override for an assignment that is no longer held"
                );
            }
            held
        })
        .cloned()
        .collect();

    Ok(draft)
}

/// Returns the staff ids assigned anywhere in a payload, in stored order.
#[must_use]
pub fn assigned_staff(payload: &EventSavePayload) -> Vec<StaffId> {
    let mut seen: Vec<StaffId> = Vec::new();
    for member in payload.roles.iter().flat_map(|r| &r.members) {
        if !seen.contains(&member.id) {
            seen.push(member.id.clone());
        }
    }
    seen
}
