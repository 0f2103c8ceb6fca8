// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stagehand_audit::{Actor, Cause};
use stagehand_domain::{
    Availability, Catalog, EquipmentCatalogItem, EquipmentId, PackageDefinition, PackageId,
    RequirementId, Role, RoleRequirement, StaffCategory, StaffId, StaffProfile,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("planner-7"), String::from("planner"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("ui-31"), String::from("Event form"))
}

pub fn staff(id: &str, name: &str, roles: &[Role], availability: Availability) -> StaffProfile {
    StaffProfile::new(
        StaffId::new(id),
        name,
        roles.iter().copied(),
        availability,
        StaffCategory::Internal,
    )
}

pub fn sid(id: &str) -> StaffId {
    StaffId::new(id)
}

pub fn rid(id: u32) -> RequirementId {
    RequirementId::new(id)
}

pub fn requirement(id: u32, role: Role, required: u32, assigned: &[&str]) -> RoleRequirement {
    RoleRequirement::with_assigned(
        RequirementId::new(id),
        role,
        required,
        assigned.iter().map(|s| StaffId::new(s)),
    )
}

pub fn package(id: &str, items: &[&str]) -> PackageDefinition {
    PackageDefinition::new(
        PackageId::new(id),
        id,
        items.iter().map(|item| String::from(*item)),
    )
}

/// Roster:
/// - `alice`: Host, available
/// - `bram`: Host + Emcee, busy ("Wedding at Harbour Hall")
/// - `chen`: Sound Engineer, available
/// - `dana`: Sound Engineer + Lighting Technician, busy, no reason
/// - `eli`: Usher, available, outsourced
pub fn create_test_roster() -> Vec<StaffProfile> {
    vec![
        staff("alice", "Alice Moreau", &[Role::Host], Availability::Available),
        staff(
            "bram",
            "Bram Okafor",
            &[Role::Host, Role::Emcee],
            Availability::Busy,
        )
        .with_busy_reason("Wedding at Harbour Hall"),
        staff(
            "chen",
            "Chen Li",
            &[Role::SoundEngineer],
            Availability::Available,
        ),
        staff(
            "dana",
            "Dana Ruiz",
            &[Role::SoundEngineer, Role::LightingTechnician],
            Availability::Busy,
        ),
        StaffProfile::new(
            StaffId::new("eli"),
            "Eli Novak",
            [Role::Usher],
            Availability::Available,
            StaffCategory::Outsourced,
        ),
    ]
}

pub fn create_test_catalog() -> Catalog {
    let equipment: Vec<EquipmentCatalogItem> = vec![
        EquipmentCatalogItem::new(EquipmentId::new("eq-mic"), "Microphone", "Audio"),
        EquipmentCatalogItem::new(EquipmentId::new("eq-proj"), "Projector", "Video"),
        EquipmentCatalogItem::new(EquipmentId::new("eq-spk"), "Speaker", "Audio"),
    ];
    let packages: Vec<PackageDefinition> = vec![
        package("basic", &["2x Microphone", "1x Projector"]),
        package("concert", &["4x Speaker", "2x Microphone"]),
    ];

    Catalog::new(create_test_roster(), equipment, packages).unwrap()
}
