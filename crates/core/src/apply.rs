// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::config::{AllocationConfig, ConflictResolution};
use crate::conflict::{
    ConflictGate, ConflictOverride, GateTransition, cancel, confirm, request_assignment,
};
use crate::equipment::{adjust_extra, carry_extras};
use crate::error::CoreError;
use crate::staffing::{add_role, change_required_count, next_requirement_id, remove_role, unassign};
use crate::state::{EventDraft, TransitionResult};
use stagehand_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use stagehand_domain::{Catalog, PackageDefinition, RequirementId, StaffProfile};
use tracing::info;

/// Applies a command to an event draft, producing a new draft and an audit event.
///
/// The input draft is never modified. Allocation no-ops (unknown
/// requirement ids, duplicate or over-capacity assignments) still succeed
/// and yield an audit event whose before and after summaries match.
///
/// # Arguments
///
/// * `catalog` - Roster, equipment catalog, and packages
/// * `draft` - The current draft (immutable)
/// * `command` - The command to apply
/// * `config` - Allocation policies
/// * `actor` - Who issued the command
/// * `cause` - Why it was issued
///
/// # Errors
///
/// Returns an error if:
/// - `RequestAssignment` names a staff id that is not in the roster
/// - `SelectPackage` names a package id that is not in the catalog
#[allow(clippy::too_many_lines)]
pub fn apply(
    catalog: &Catalog,
    draft: &EventDraft,
    command: Command,
    config: &AllocationConfig,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let before: StateSnapshot = draft.to_snapshot();
    let action_name: &'static str = command.name();
    let mut new_draft: EventDraft = draft.clone();

    let details: String = match command {
        Command::AddRole { role, count } => {
            let issued: RequirementId =
                next_requirement_id(&draft.requirements, draft.last_requirement_id);
            new_draft.requirements =
                add_role(&draft.requirements, role, count, draft.last_requirement_id);
            if new_draft.requirements.len() > draft.requirements.len() {
                new_draft.last_requirement_id = issued.value();
            }
            format!("Added {} x {role}", count.max(1))
        }
        Command::RemoveRole { requirement_id } => {
            new_draft.requirements = remove_role(&draft.requirements, requirement_id);
            new_draft
                .overrides
                .retain(|o| o.requirement_id != requirement_id);

            // A pending decision for a deleted requirement has nothing left to confirm
            if draft
                .gate
                .pending()
                .is_some_and(|c| c.requirement_id == requirement_id)
            {
                new_draft.gate = ConflictGate::Idle;
            }
            format!("Removed requirement {}", requirement_id.value())
        }
        Command::ChangeRequiredCount {
            requirement_id,
            delta,
        } => {
            new_draft.requirements =
                change_required_count(&draft.requirements, requirement_id, delta);
            format!(
                "Changed requirement {} by {delta:+}",
                requirement_id.value()
            )
        }
        Command::RequestAssignment {
            requirement_id,
            staff_id,
        } => {
            let candidate: &StaffProfile = catalog.require_staff(&staff_id)?;
            let transition: GateTransition =
                request_assignment(&draft.gate, &draft.requirements, requirement_id, candidate);

            let outcome: &str = if transition.gate.is_pending() && !draft.gate.is_pending() {
                "awaiting confirmation"
            } else if transition.requirements == draft.requirements {
                "unchanged"
            } else {
                "assigned"
            };
            new_draft.requirements = transition.requirements;
            new_draft.gate = transition.gate;
            format!(
                "Requested '{}' for requirement {}: {outcome}",
                staff_id.value(),
                requirement_id.value()
            )
        }
        Command::ConfirmAssignment => {
            let transition: GateTransition = confirm(&draft.gate, &draft.requirements);
            new_draft.requirements = transition.requirements;
            new_draft.gate = transition.gate;

            match transition.confirmed {
                Some(conflict) => {
                    if config.conflict_resolution == ConflictResolution::RecordOverride {
                        new_draft.overrides.push(ConflictOverride::from(&conflict));
                    }
                    format!(
                        "Confirmed '{}' for requirement {} over: {}",
                        conflict.staff.id.value(),
                        conflict.requirement_id.value(),
                        conflict.commitment
                    )
                }
                None => String::from("Nothing to confirm"),
            }
        }
        Command::CancelAssignment => {
            new_draft.gate = cancel(&draft.gate);
            draft.gate.pending().map_or_else(
                || String::from("Nothing to cancel"),
                |c| format!("Cancelled assignment of '{}'", c.staff.id.value()),
            )
        }
        Command::Unassign {
            requirement_id,
            staff_id,
        } => {
            new_draft.requirements = unassign(&draft.requirements, requirement_id, &staff_id);
            new_draft
                .overrides
                .retain(|o| !(o.requirement_id == requirement_id && o.staff_id == staff_id));
            format!(
                "Unassigned '{}' from requirement {}",
                staff_id.value(),
                requirement_id.value()
            )
        }
        Command::SelectPackage { package_id } => {
            if package_id == draft.selected_package {
                String::from("Package unchanged")
            } else {
                let package: Option<&PackageDefinition> = match &package_id {
                    Some(id) => Some(catalog.require_package(id)?),
                    None => None,
                };
                new_draft.extras = carry_extras(&draft.extras, package, config.package_switch);
                new_draft.selected_package = package_id;
                format!(
                    "Selected package {}",
                    package.map_or("none", |p| p.name.as_str())
                )
            }
        }
        Command::AdjustExtra { item_name, delta } => {
            new_draft.extras = adjust_extra(
                &draft.extras,
                draft.package(catalog),
                &item_name,
                delta,
            );
            format!("Adjusted extra '{}' by {delta:+}", item_name.trim())
        }
    };

    let after: StateSnapshot = new_draft.to_snapshot();
    info!(
        event_id = %draft.event_id,
        action = action_name,
        "{details}"
    );

    let audit_event: AuditEvent = AuditEvent::new(
        draft.event_id.clone(),
        actor,
        cause,
        Action::new(String::from(action_name), Some(details)),
        before,
        after,
    );

    Ok(TransitionResult {
        new_draft,
        audit_event,
    })
}
