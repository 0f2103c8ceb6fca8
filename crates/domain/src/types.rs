// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Opaque identity of a staff member.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    /// Creates a new `StaffId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Identity of a role requirement, unique within its owning event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementId(u32);

impl RequirementId {
    /// Creates a new `RequirementId`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric id.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Identity of a package definition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    /// Creates a new `PackageId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Identity of an equipment catalog item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentId(String);

impl EquipmentId {
    /// Creates a new `EquipmentId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Coarse, event-independent availability flag supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    Busy,
}

/// Employment grouping used for read-only reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StaffCategory {
    #[default]
    Internal,
    Outsourced,
}

/// One person eligible for assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffProfile {
    /// The unique staff id.
    pub id: StaffId,
    /// Display name.
    pub name: String,
    /// Roles this person may fill.
    pub roles: BTreeSet<Role>,
    /// Busy/available flag.
    pub availability: Availability,
    /// Internal or outsourced.
    pub category: StaffCategory,
    /// Description of the commitment that makes this person busy, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub busy_reason: Option<String>,
}

impl StaffProfile {
    /// Creates a new `StaffProfile` with no busy reason.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique staff id
    /// * `name` - The display name
    /// * `roles` - The roles this person may fill
    /// * `availability` - The busy/available flag
    /// * `category` - Internal or outsourced
    #[must_use]
    pub fn new(
        id: StaffId,
        name: &str,
        roles: impl IntoIterator<Item = Role>,
        availability: Availability,
        category: StaffCategory,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            roles: roles.into_iter().collect(),
            availability,
            category,
            busy_reason: None,
        }
    }

    /// Returns a copy of this profile carrying a busy reason.
    #[must_use]
    pub fn with_busy_reason(mut self, reason: &str) -> Self {
        self.busy_reason = Some(reason.to_string());
        self
    }

    /// Returns whether this person may fill `role`.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns whether this person is flagged busy.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.availability == Availability::Busy
    }

    /// Case-insensitive substring match against name and role labels.
    ///
    /// An empty or whitespace-only search matches every profile.
    #[must_use]
    pub fn matches_search(&self, search_text: &str) -> bool {
        let needle: String = search_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&needle)
            || self.roles.iter().any(|role| role.label_contains(&needle))
    }
}

/// A demand for `required_count` people of one role on a single event.
///
/// `assigned[i]` occupies slot `i`. Invariants: `required_count >= 1`,
/// `assigned.len() <= required_count`, no duplicate staff ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequirement {
    id: RequirementId,
    role: Role,
    required_count: u32,
    assigned: Vec<StaffId>,
}

impl RoleRequirement {
    /// Creates an empty requirement. A count of zero is floored to one.
    #[must_use]
    pub fn new(id: RequirementId, role: Role, required_count: u32) -> Self {
        Self {
            id,
            role,
            required_count: required_count.max(1),
            assigned: Vec::new(),
        }
    }

    /// Creates a requirement with existing assignments, e.g. when restoring a saved event.
    ///
    /// Duplicate ids are dropped (first occurrence wins) and the required
    /// count is raised to cover every remaining assignment.
    #[must_use]
    pub fn with_assigned(
        id: RequirementId,
        role: Role,
        required_count: u32,
        assigned: impl IntoIterator<Item = StaffId>,
    ) -> Self {
        let mut unique: Vec<StaffId> = Vec::new();
        for staff_id in assigned {
            if !unique.contains(&staff_id) {
                unique.push(staff_id);
            }
        }
        let floor: u32 = u32::try_from(unique.len()).unwrap_or(u32::MAX).max(1);

        Self {
            id,
            role,
            required_count: required_count.max(floor),
            assigned: unique,
        }
    }

    /// Returns the requirement id.
    #[must_use]
    pub const fn id(&self) -> RequirementId {
        self.id
    }

    /// Returns the demanded role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the number of slots.
    #[must_use]
    pub const fn required_count(&self) -> u32 {
        self.required_count
    }

    /// Returns the assigned staff ids in slot order.
    #[must_use]
    pub fn assigned(&self) -> &[StaffId] {
        &self.assigned
    }

    /// Returns the number of filled slots.
    #[must_use]
    pub fn assigned_count(&self) -> u32 {
        u32::try_from(self.assigned.len()).unwrap_or(u32::MAX)
    }

    /// Returns the staff id occupying slot `index`, or `None` for an empty position.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&StaffId> {
        self.assigned.get(index)
    }

    /// Returns whether every slot is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.assigned_count() >= self.required_count
    }

    /// Returns whether `staff_id` already occupies a slot.
    #[must_use]
    pub fn is_assigned(&self, staff_id: &StaffId) -> bool {
        self.assigned.contains(staff_id)
    }

    /// The single assignment gate: a staff id is accepted only when it is
    /// not already assigned here and a slot is free.
    #[must_use]
    pub fn accepts(&self, staff_id: &StaffId) -> bool {
        !self.is_full() && !self.is_assigned(staff_id)
    }

    /// Fills the next free slot with `staff_id`.
    ///
    /// Returns `false` without modifying anything if `accepts` is false.
    pub fn push_assignment(&mut self, staff_id: StaffId) -> bool {
        if !self.accepts(&staff_id) {
            return false;
        }
        self.assigned.push(staff_id);
        true
    }

    /// Removes `staff_id` from its slot, shifting later slots down.
    ///
    /// Returns `false` if it was not assigned.
    pub fn remove_assignment(&mut self, staff_id: &StaffId) -> bool {
        let before: usize = self.assigned.len();
        self.assigned.retain(|id| id != staff_id);
        self.assigned.len() != before
    }

    /// Sets the slot count, clamped to at least one and to the number of
    /// filled slots.
    pub fn set_required_count(&mut self, required_count: u32) {
        self.required_count = required_count.max(self.assigned_count()).max(1);
    }
}

/// A named, categorized item from the master equipment catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentCatalogItem {
    /// The unique item id.
    pub id: EquipmentId,
    /// Display name, also the merge key.
    pub name: String,
    /// Free-form category (e.g. "Audio", "Lighting").
    pub category: String,
}

impl EquipmentCatalogItem {
    /// Creates a new `EquipmentCatalogItem`.
    #[must_use]
    pub fn new(id: EquipmentId, name: &str, category: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
        }
    }
}

/// A named bundle of equipment.
///
/// Each item is encoded as `"<count>x <itemName>"`, or a bare name for a count of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDefinition {
    /// The unique package id.
    pub id: PackageId,
    /// Display name.
    pub name: String,
    /// Encoded package lines in display order.
    pub items: Vec<String>,
}

impl PackageDefinition {
    /// Creates a new `PackageDefinition`.
    #[must_use]
    pub fn new(id: PackageId, name: &str, items: impl IntoIterator<Item = String>) -> Self {
        Self {
            id,
            name: name.to_string(),
            items: items.into_iter().collect(),
        }
    }
}

/// One user-entered equipment adjustment layered on top of the package baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraAllocation {
    /// The item name this adjustment applies to.
    pub item_name: String,
    /// Quantity added; may be any sign while being edited.
    pub quantity: i64,
}

impl ExtraAllocation {
    /// Creates a new `ExtraAllocation`.
    #[must_use]
    pub fn new(item_name: &str, quantity: i64) -> Self {
        Self {
            item_name: item_name.to_string(),
            quantity,
        }
    }
}

/// One row of the merged equipment table. Always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquipmentLine {
    /// The item name, unique within one merge.
    pub name: String,
    /// Quantity contributed by the selected package.
    pub baseline: u32,
    /// Sum of ad-hoc additions.
    pub extra: i64,
    /// `baseline + extra`.
    pub total: i64,
}

impl EquipmentLine {
    /// Creates a line, computing the total.
    #[must_use]
    pub fn new(name: &str, baseline: u32, extra: i64) -> Self {
        Self {
            name: name.to_string(),
            baseline,
            extra,
            total: i64::from(baseline).saturating_add(extra),
        }
    }
}
