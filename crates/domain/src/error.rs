// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{EquipmentId, PackageId, StaffId};

/// Errors that can occur during domain validation and catalog lookups.
///
/// Allocation operations themselves never fail; these errors describe
/// reference data that cannot be trusted or references that cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A role string does not map to any entry in the role vocabulary.
    UnknownRole(String),
    /// Two staff profiles in a roster share an id.
    DuplicateStaffId(StaffId),
    /// Two equipment catalog items share an id.
    DuplicateEquipmentId(EquipmentId),
    /// Two package definitions share an id.
    DuplicatePackageId(PackageId),
    /// Staff member is not present in the roster.
    StaffNotFound(StaffId),
    /// Package is not present in the package list.
    PackageNotFound(PackageId),
    /// A staff profile failed field validation.
    InvalidStaffProfile {
        /// The offending staff id.
        staff_id: StaffId,
        /// Description of the validation error.
        reason: String,
    },
    /// A package line has no item name.
    EmptyPackageItem {
        /// The package being validated.
        package_id: PackageId,
        /// Zero-based position of the line within the package.
        line_index: usize,
    },
    /// A package line encodes a quantity of zero.
    ZeroQuantityPackageItem {
        /// The package being validated.
        package_id: PackageId,
        /// The item name.
        item: String,
    },
    /// The same item name appears on more than one package line.
    DuplicatePackageItem {
        /// The package being validated.
        package_id: PackageId,
        /// The repeated item name.
        item: String,
    },
    /// A package line names an item that is absent from the equipment catalog.
    UnknownEquipment {
        /// The package being validated.
        package_id: PackageId,
        /// The unmatched item name.
        item: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRole(role) => write!(f, "Unknown role: '{role}'"),
            Self::DuplicateStaffId(id) => {
                write!(f, "Staff id '{}' appears more than once in the roster", id.value())
            }
            Self::DuplicateEquipmentId(id) => {
                write!(
                    f,
                    "Equipment id '{}' appears more than once in the catalog",
                    id.value()
                )
            }
            Self::DuplicatePackageId(id) => {
                write!(f, "Package id '{}' is defined more than once", id.value())
            }
            Self::StaffNotFound(id) => write!(f, "Staff member '{}' not found", id.value()),
            Self::PackageNotFound(id) => write!(f, "Package '{}' not found", id.value()),
            Self::InvalidStaffProfile { staff_id, reason } => {
                write!(f, "Invalid staff profile '{}': {reason}", staff_id.value())
            }
            Self::EmptyPackageItem {
                package_id,
                line_index,
            } => {
                write!(
                    f,
                    "Package '{}' line {line_index} has no item name",
                    package_id.value()
                )
            }
            Self::ZeroQuantityPackageItem { package_id, item } => {
                write!(
                    f,
                    "Package '{}' lists '{item}' with a quantity of zero",
                    package_id.value()
                )
            }
            Self::DuplicatePackageItem { package_id, item } => {
                write!(
                    f,
                    "Package '{}' lists '{item}' on more than one line",
                    package_id.value()
                )
            }
            Self::UnknownEquipment { package_id, item } => {
                write!(
                    f,
                    "Package '{}' references '{item}' which is not in the equipment catalog",
                    package_id.value()
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
