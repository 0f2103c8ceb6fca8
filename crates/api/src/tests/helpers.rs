// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use stagehand_audit::{Actor, Cause};
use stagehand_domain::{
    Availability, Catalog, EquipmentCatalogItem, EquipmentId, PackageDefinition, PackageId, Role,
    StaffCategory, StaffId, StaffProfile,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("planner-7"), String::from("planner"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("replay-1"), String::from("Session replay"))
}

pub fn create_test_catalog() -> Catalog {
    let staff: Vec<StaffProfile> = vec![
        StaffProfile::new(
            StaffId::new("alice"),
            "Alice Moreau",
            [Role::Host],
            Availability::Available,
            StaffCategory::Internal,
        ),
        StaffProfile::new(
            StaffId::new("bram"),
            "Bram Okafor",
            [Role::Host, Role::Emcee],
            Availability::Busy,
            StaffCategory::Internal,
        )
        .with_busy_reason("Wedding at Harbour Hall"),
        StaffProfile::new(
            StaffId::new("chen"),
            "Chen Li",
            [Role::SoundEngineer],
            Availability::Available,
            StaffCategory::Outsourced,
        ),
    ];
    let equipment: Vec<EquipmentCatalogItem> = vec![
        EquipmentCatalogItem::new(EquipmentId::new("eq-mic"), "Microphone", "Audio"),
        EquipmentCatalogItem::new(EquipmentId::new("eq-proj"), "Projector", "Video"),
    ];
    let packages: Vec<PackageDefinition> = vec![PackageDefinition::new(
        PackageId::new("basic"),
        "Basic",
        [String::from("2x Microphone"), String::from("1x Projector")],
    )];

    Catalog::new(staff, equipment, packages).unwrap()
}

/// A session document matching `create_test_catalog`, with the given
/// commands array spliced in.
pub fn session_json(commands: &str) -> String {
    format!(
        r#"{{
  "eventId": "evt-42",
  "catalog": {{
    "staff": [
      {{"id": "alice", "name": "Alice Moreau", "roles": ["Host"], "availability": "available", "category": "internal"}},
      {{"id": "bram", "name": "Bram Okafor", "roles": ["Host", "MC"], "availability": "busy", "category": "internal", "busyReason": "Wedding at Harbour Hall"}},
      {{"id": "chen", "name": "Chen Li", "roles": ["audio engineer"], "availability": "available", "category": "outsourced"}}
    ],
    "equipment": [
      {{"id": "eq-mic", "name": "Microphone", "category": "Audio"}},
      {{"id": "eq-proj", "name": "Projector", "category": "Video"}}
    ],
    "packages": [
      {{"id": "basic", "name": "Basic", "items": ["2x Microphone", "1x Projector"]}}
    ]
  }},
  "commands": {commands}
}}"#
    )
}
