// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::catalog::Catalog;
use crate::error::DomainError;
use crate::package_line::{PackageLine, parse_package_line};
use crate::types::{PackageDefinition, StaffProfile};
use std::collections::HashSet;

/// Validates that a staff profile's basic field constraints are met.
///
/// # Arguments
///
/// * `profile` - The profile to validate
///
/// # Errors
///
/// Returns `DomainError::InvalidStaffProfile` if:
/// - The id is empty
/// - The name is empty
/// - The profile lists no roles
pub fn validate_staff_profile(profile: &StaffProfile) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidStaffProfile {
        staff_id: profile.id.clone(),
        reason: reason.to_string(),
    };

    if profile.id.value().trim().is_empty() {
        return Err(invalid("Staff id cannot be empty"));
    }

    if profile.name.trim().is_empty() {
        return Err(invalid("Name cannot be empty"));
    }

    // Rule: a profile that can fill no role never shows up in any picker
    if profile.roles.is_empty() {
        return Err(invalid("At least one role is required"));
    }

    Ok(())
}

/// Validates how a package definition was authored.
///
/// Package lines never fail to decode; this check is for package editors
/// that want stricter guarantees than the best-effort decoder gives.
///
/// # Arguments
///
/// * `package` - The package to validate
/// * `catalog` - When given, every item name must resolve in its equipment catalog
///
/// # Errors
///
/// Returns the first problem found:
/// - `EmptyPackageItem` for a blank line
/// - `ZeroQuantityPackageItem` for a `"0x ..."` line
/// - `DuplicatePackageItem` when a name appears on two lines
/// - `UnknownEquipment` when a name is not in the catalog
pub fn validate_package_definition(
    package: &PackageDefinition,
    catalog: Option<&Catalog>,
) -> Result<(), DomainError> {
    let mut seen: HashSet<String> = HashSet::new();

    for (line_index, raw) in package.items.iter().enumerate() {
        let line: PackageLine = parse_package_line(raw);

        if line.name.is_empty() {
            return Err(DomainError::EmptyPackageItem {
                package_id: package.id.clone(),
                line_index,
            });
        }

        if line.count == 0 {
            return Err(DomainError::ZeroQuantityPackageItem {
                package_id: package.id.clone(),
                item: line.name,
            });
        }

        if !seen.insert(line.name.clone()) {
            return Err(DomainError::DuplicatePackageItem {
                package_id: package.id.clone(),
                item: line.name,
            });
        }

        if let Some(catalog) = catalog
            && catalog.equipment_by_name(&line.name).is_none()
        {
            return Err(DomainError::UnknownEquipment {
                package_id: package.id.clone(),
                item: line.name,
            });
        }
    }

    Ok(())
}
