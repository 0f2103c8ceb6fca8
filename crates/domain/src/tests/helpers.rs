// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Availability, Catalog, EquipmentCatalogItem, EquipmentId, PackageDefinition, PackageId, Role,
    StaffCategory, StaffId, StaffProfile,
};

pub fn create_test_staff(
    id: &str,
    name: &str,
    roles: &[Role],
    availability: Availability,
) -> StaffProfile {
    StaffProfile::new(
        StaffId::new(id),
        name,
        roles.iter().copied(),
        availability,
        StaffCategory::Internal,
    )
}

pub fn create_test_package(id: &str, items: &[&str]) -> PackageDefinition {
    PackageDefinition::new(
        PackageId::new(id),
        "Test Package",
        items.iter().map(|item| String::from(*item)),
    )
}

pub fn create_test_catalog() -> Catalog {
    let staff: Vec<StaffProfile> = vec![
        create_test_staff("s1", "Alice Moreau", &[Role::Host], Availability::Available),
        create_test_staff(
            "s2",
            "Bram Okafor",
            &[Role::SoundEngineer, Role::LightingTechnician],
            Availability::Busy,
        ),
        StaffProfile::new(
            StaffId::new("s3"),
            "Chen Li",
            [Role::Host, Role::Emcee],
            Availability::Available,
            StaffCategory::Outsourced,
        ),
    ];
    let equipment: Vec<EquipmentCatalogItem> = vec![
        EquipmentCatalogItem::new(EquipmentId::new("eq-mic"), "Microphone", "Audio"),
        EquipmentCatalogItem::new(EquipmentId::new("eq-spk"), "Speaker", "Audio"),
        EquipmentCatalogItem::new(EquipmentId::new("eq-proj"), "Projector", "Video"),
    ];
    let packages: Vec<PackageDefinition> = vec![create_test_package(
        "pkg-basic",
        &["2x Microphone", "1x Projector"],
    )];

    Catalog::new(staff, equipment, packages).unwrap()
}
