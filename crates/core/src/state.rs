// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::conflict::{ConflictGate, ConflictOverride};
use crate::equipment::merge;
use crate::staffing::staffing_totals;
use stagehand_audit::{AuditEvent, StateSnapshot};
use stagehand_domain::{
    Catalog, EquipmentLine, ExtraAllocation, PackageDefinition, PackageId, RoleRequirement,
};
use tracing::warn;

/// The allocation state of one event being edited.
///
/// The caller owns the current draft and replaces it with the
/// `new_draft` of each `TransitionResult`. Keeping earlier drafts gives undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// The event this draft belongs to.
    pub event_id: String,
    /// Role requirements with their assignments.
    pub requirements: Vec<RoleRequirement>,
    /// The highest requirement id handed out so far. Only ever grows.
    pub last_requirement_id: u32,
    /// The selected package, if any.
    pub selected_package: Option<PackageId>,
    /// Ad-hoc equipment additions.
    pub extras: Vec<ExtraAllocation>,
    /// Confirmed busy-staff assignments awaiting reconciliation.
    pub overrides: Vec<ConflictOverride>,
    /// The busy-staff conflict gate.
    pub gate: ConflictGate,
}

impl EventDraft {
    /// Creates an empty draft for an event.
    #[must_use]
    pub fn new(event_id: &str) -> Self {
        Self {
            event_id: event_id.to_string(),
            requirements: Vec::new(),
            last_requirement_id: 0,
            selected_package: None,
            extras: Vec::new(),
            overrides: Vec::new(),
            gate: ConflictGate::Idle,
        }
    }

    /// Resolves the selected package against the catalog.
    ///
    /// A selected id missing from the catalog is treated as no package.
    #[must_use]
    pub fn package<'a>(&self, catalog: &'a Catalog) -> Option<&'a PackageDefinition> {
        let id: &PackageId = self.selected_package.as_ref()?;
        let package: Option<&PackageDefinition> = catalog.package(id);
        if package.is_none() {
            warn!(
                event_id = %self.event_id,
                package_id = id.value(),
                "selected package is not in the catalog"
            );
        }
        package
    }

    /// Recomputes the merged equipment table.
    #[must_use]
    pub fn equipment_lines(&self, catalog: &Catalog) -> Vec<EquipmentLine> {
        merge(self.package(catalog), &self.extras)
    }

    /// Summarizes the draft for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let (assigned, required): (u32, u32) = staffing_totals(&self.requirements);
        let extras_total: i64 = self.extras.iter().map(|e| e.quantity).sum();

        StateSnapshot::new(format!(
            "roles={},slots={assigned}/{required},package={},extras={}:{extras_total},overrides={},pending={}",
            self.requirements.len(),
            self.selected_package
                .as_ref()
                .map_or("none", PackageId::value),
            self.extras.len(),
            self.overrides.len(),
            self.gate
                .pending()
                .map_or("none", |conflict| conflict.staff.id.value()),
        ))
    }
}

/// The result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The draft after the command.
    pub new_draft: EventDraft,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
