// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Offline replay of a recorded editing session.
//!
//! A session document carries the reference data, the allocation policies,
//! an optional previously saved payload to start from, and the commands
//! issued against the event, in order.

use crate::error::ApiError;
use crate::persisted::{EventSavePayload, build_save_payload, restore_draft};
use serde::Deserialize;
use stagehand::{AllocationConfig, Command, EventDraft, TransitionResult, apply};
use stagehand_audit::{Actor, AuditLog, Cause};
use stagehand_domain::Catalog;
use tracing::{info, warn};

/// A recorded editing session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The event being edited.
    pub event_id: String,
    /// Roster, equipment catalog, and packages.
    pub catalog: Catalog,
    /// Allocation policies.
    #[serde(default)]
    pub config: AllocationConfig,
    /// A previously saved state to start from instead of an empty draft.
    #[serde(default)]
    pub saved: Option<EventSavePayload>,
    /// Commands in the order they were issued.
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Session {
    /// Parses a session document.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MalformedDocument` if the JSON is invalid or the
    /// catalog it carries has duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the draft replay starts from.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved payload cannot be restored.
    pub fn initial_draft(&self) -> Result<EventDraft, ApiError> {
        self.saved.as_ref().map_or_else(
            || Ok(EventDraft::new(&self.event_id)),
            |payload| restore_draft(&self.event_id, payload),
        )
    }
}

/// Result of replaying a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayOutcome {
    /// The draft after the last command.
    pub draft: EventDraft,
    /// One audit event per applied command.
    pub audit_log: AuditLog,
    /// The save payload for the final draft.
    pub payload: EventSavePayload,
}

/// Applies every command of a session in order.
///
/// # Arguments
///
/// * `session` - The session to replay
/// * `actor` - Attributed to every command
/// * `cause` - Attributed to every command
///
/// # Errors
///
/// Returns `ApiError::CommandRejected` for the first command that names
/// an unknown staff member or package, or the restore error if the saved
/// payload is invalid.
pub fn replay(session: &Session, actor: &Actor, cause: &Cause) -> Result<ReplayOutcome, ApiError> {
    let mut draft: EventDraft = session.initial_draft()?;
    let mut audit_log: AuditLog = AuditLog::new();

    for (index, command) in session.commands.iter().enumerate() {
        let action: &'static str = command.name();
        let result: TransitionResult = apply(
            &session.catalog,
            &draft,
            command.clone(),
            &session.config,
            actor.clone(),
            cause.clone(),
        )
        .map_err(|err| ApiError::CommandRejected {
            index,
            action: action.to_string(),
            reason: Box::new(ApiError::from(err)),
        })?;

        audit_log.record(result.audit_event);
        draft = result.new_draft;
    }

    if let Some(conflict) = draft.gate.pending() {
        warn!(
            event_id = %session.event_id,
            staff_id = conflict.staff.id.value(),
            "session ended with an unanswered confirmation"
        );
    }

    let payload: EventSavePayload = build_save_payload(&session.catalog, &draft);
    info!(
        event_id = %session.event_id,
        commands = session.commands.len(),
        roles = payload.roles.len(),
        equipment = payload.equipment.len(),
        "Replayed session"
    );

    Ok(ReplayOutcome {
        draft,
        audit_log,
        payload,
    })
}
