// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod package_line;
mod role;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CategoryGroups};
pub use error::DomainError;
pub use package_line::{PackageLine, parse_package_line};
pub use role::Role;
pub use types::{
    Availability, EquipmentCatalogItem, EquipmentId, EquipmentLine, ExtraAllocation,
    PackageDefinition, PackageId, RequirementId, RoleRequirement, StaffCategory, StaffId,
    StaffProfile,
};
pub use validation::{validate_package_definition, validate_staff_profile};
