// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only reference data shared by the staffing and equipment logic.
//!
//! A `Catalog` is built once from caller-supplied collections and then only
//! queried. Construction rejects duplicate ids so that every lookup by id
//! has exactly one answer.

use crate::error::DomainError;
use crate::role::Role;
use crate::types::{
    Availability, EquipmentCatalogItem, EquipmentId, PackageDefinition, PackageId, StaffCategory,
    StaffId, StaffProfile,
};
use serde::Deserialize;
use std::collections::HashMap;

/// Indexed roster, equipment catalog, and package list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "CatalogData")]
pub struct Catalog {
    staff: Vec<StaffProfile>,
    equipment: Vec<EquipmentCatalogItem>,
    packages: Vec<PackageDefinition>,
    staff_index: HashMap<StaffId, usize>,
    package_index: HashMap<PackageId, usize>,
    equipment_name_index: HashMap<String, usize>,
}

/// Wire shape of a catalog before indexing.
#[derive(Debug, Deserialize)]
struct CatalogData {
    #[serde(default)]
    staff: Vec<StaffProfile>,
    #[serde(default)]
    equipment: Vec<EquipmentCatalogItem>,
    #[serde(default)]
    packages: Vec<PackageDefinition>,
}

impl TryFrom<CatalogData> for Catalog {
    type Error = DomainError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Self::new(data.staff, data.equipment, data.packages)
    }
}

/// Roster split by staff category, in roster order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroups<'a> {
    /// Internal staff.
    pub internal: Vec<&'a StaffProfile>,
    /// Outsourced staff.
    pub outsourced: Vec<&'a StaffProfile>,
}

impl Catalog {
    /// Builds a catalog and its lookup indexes.
    ///
    /// # Arguments
    ///
    /// * `staff` - The roster
    /// * `equipment` - The master equipment catalog
    /// * `packages` - The package definitions
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two staff profiles share an id
    /// - Two equipment items share an id
    /// - Two packages share an id
    pub fn new(
        staff: Vec<StaffProfile>,
        equipment: Vec<EquipmentCatalogItem>,
        packages: Vec<PackageDefinition>,
    ) -> Result<Self, DomainError> {
        let mut staff_index: HashMap<StaffId, usize> = HashMap::with_capacity(staff.len());
        for (index, profile) in staff.iter().enumerate() {
            if staff_index.insert(profile.id.clone(), index).is_some() {
                return Err(DomainError::DuplicateStaffId(profile.id.clone()));
            }
        }

        let mut equipment_ids: HashMap<&EquipmentId, usize> = HashMap::new();
        let mut equipment_name_index: HashMap<String, usize> = HashMap::new();
        for (index, item) in equipment.iter().enumerate() {
            if equipment_ids.insert(&item.id, index).is_some() {
                return Err(DomainError::DuplicateEquipmentId(item.id.clone()));
            }
            // First item wins when two share a display name.
            equipment_name_index
                .entry(normalize_name(&item.name))
                .or_insert(index);
        }

        let mut package_index: HashMap<PackageId, usize> = HashMap::with_capacity(packages.len());
        for (index, package) in packages.iter().enumerate() {
            if package_index.insert(package.id.clone(), index).is_some() {
                return Err(DomainError::DuplicatePackageId(package.id.clone()));
            }
        }

        Ok(Self {
            staff,
            equipment,
            packages,
            staff_index,
            package_index,
            equipment_name_index,
        })
    }

    /// Returns the full roster in input order.
    #[must_use]
    pub fn roster(&self) -> &[StaffProfile] {
        &self.staff
    }

    /// Returns the equipment catalog in input order.
    #[must_use]
    pub fn equipment(&self) -> &[EquipmentCatalogItem] {
        &self.equipment
    }

    /// Returns the package definitions in input order.
    #[must_use]
    pub fn packages(&self) -> &[PackageDefinition] {
        &self.packages
    }

    /// Looks up a staff profile by id.
    #[must_use]
    pub fn staff(&self, id: &StaffId) -> Option<&StaffProfile> {
        self.staff_index.get(id).map(|&index| &self.staff[index])
    }

    /// Looks up a staff profile by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::StaffNotFound` if the id is not in the roster.
    pub fn require_staff(&self, id: &StaffId) -> Result<&StaffProfile, DomainError> {
        self.staff(id)
            .ok_or_else(|| DomainError::StaffNotFound(id.clone()))
    }

    /// Looks up a package by id.
    #[must_use]
    pub fn package(&self, id: &PackageId) -> Option<&PackageDefinition> {
        self.package_index.get(id).map(|&index| &self.packages[index])
    }

    /// Looks up a package by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PackageNotFound` if the id is unknown.
    pub fn require_package(&self, id: &PackageId) -> Result<&PackageDefinition, DomainError> {
        self.package(id)
            .ok_or_else(|| DomainError::PackageNotFound(id.clone()))
    }

    /// Looks up an equipment item by display name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn equipment_by_name(&self, name: &str) -> Option<&EquipmentCatalogItem> {
        self.equipment_name_index
            .get(&normalize_name(name))
            .map(|&index| &self.equipment[index])
    }

    /// Returns equipment items whose category matches, ignoring case.
    #[must_use]
    pub fn equipment_in_category(&self, category: &str) -> Vec<&EquipmentCatalogItem> {
        self.equipment
            .iter()
            .filter(|item| item.category.eq_ignore_ascii_case(category.trim()))
            .collect()
    }

    /// Returns staff who may fill `role`, in roster order.
    #[must_use]
    pub fn staff_with_role(&self, role: Role) -> Vec<&StaffProfile> {
        self.staff.iter().filter(|s| s.has_role(role)).collect()
    }

    /// Returns staff with the given availability flag, in roster order.
    #[must_use]
    pub fn staff_by_availability(&self, availability: Availability) -> Vec<&StaffProfile> {
        self.staff
            .iter()
            .filter(|s| s.availability == availability)
            .collect()
    }

    /// Splits the roster into internal and outsourced staff.
    #[must_use]
    pub fn group_by_category(&self) -> CategoryGroups<'_> {
        let (internal, outsourced): (Vec<&StaffProfile>, Vec<&StaffProfile>) = self
            .staff
            .iter()
            .partition(|s| s.category == StaffCategory::Internal);

        CategoryGroups {
            internal,
            outsourced,
        }
    }

    /// Returns the role vocabulary offered by role pickers.
    #[must_use]
    pub const fn role_vocabulary() -> &'static [Role] {
        &Role::ALL
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
