// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_roster, requirement, rid, sid};
use crate::{AssignmentConflict, ConflictGate, GateTransition, cancel, confirm, request_assignment};
use stagehand_domain::{Role, RoleRequirement, StaffProfile};

fn profile<'a>(roster: &'a [StaffProfile], id: &str) -> &'a StaffProfile {
    roster.iter().find(|p| p.id.value() == id).unwrap()
}

#[test]
fn test_available_candidate_bypasses_gate() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    let transition: GateTransition = request_assignment(
        &ConflictGate::Idle,
        &requirements,
        rid(1),
        profile(&roster, "alice"),
    );

    assert_eq!(transition.gate, ConflictGate::Idle);
    assert_eq!(transition.requirements[0].assigned(), &[sid("alice")]);
    assert_eq!(transition.confirmed, None);
}

#[test]
fn test_busy_candidate_is_intercepted_before_assign() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    let transition: GateTransition = request_assignment(
        &ConflictGate::Idle,
        &requirements,
        rid(1),
        profile(&roster, "bram"),
    );

    assert_eq!(transition.requirements, requirements);
    let conflict: &AssignmentConflict = transition.gate.pending().unwrap();
    assert_eq!(conflict.staff.id, sid("bram"));
    assert_eq!(conflict.requirement_id, rid(1));
    assert_eq!(conflict.commitment, "Wedding at Harbour Hall");
}

#[test]
fn test_conflict_without_busy_reason_gets_generic_description() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::SoundEngineer, 1, &[])];

    let transition: GateTransition = request_assignment(
        &ConflictGate::Idle,
        &requirements,
        rid(1),
        profile(&roster, "dana"),
    );

    let conflict: &AssignmentConflict = transition.gate.pending().unwrap();
    assert_eq!(
        conflict.commitment,
        "Dana Ruiz is marked busy with another commitment"
    );
}

#[test]
fn test_confirm_assigns_and_returns_to_idle() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];
    let pending: GateTransition = request_assignment(
        &ConflictGate::Idle,
        &requirements,
        rid(1),
        profile(&roster, "bram"),
    );

    let confirmed: GateTransition = confirm(&pending.gate, &pending.requirements);

    assert_eq!(confirmed.gate, ConflictGate::Idle);
    assert_eq!(confirmed.requirements[0].assigned(), &[sid("bram")]);
    assert_eq!(confirmed.confirmed.unwrap().staff.id, sid("bram"));
}

#[test]
fn test_cancel_discards_without_mutation() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];
    let pending: GateTransition = request_assignment(
        &ConflictGate::Idle,
        &requirements,
        rid(1),
        profile(&roster, "bram"),
    );

    let gate: ConflictGate = cancel(&pending.gate);

    assert_eq!(gate, ConflictGate::Idle);
    assert_eq!(pending.requirements, requirements);
}

#[test]
fn test_confirm_while_idle_is_no_op() {
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    let transition: GateTransition = confirm(&ConflictGate::Idle, &requirements);

    assert_eq!(transition.gate, ConflictGate::Idle);
    assert_eq!(transition.requirements, requirements);
    assert_eq!(transition.confirmed, None);
}

#[test]
fn test_requests_are_ignored_while_pending() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];
    let pending: GateTransition = request_assignment(
        &ConflictGate::Idle,
        &requirements,
        rid(1),
        profile(&roster, "bram"),
    );

    let transition: GateTransition = request_assignment(
        &pending.gate,
        &pending.requirements,
        rid(1),
        profile(&roster, "alice"),
    );

    assert_eq!(transition.gate, pending.gate);
    assert_eq!(transition.requirements, requirements);
}

#[test]
fn test_busy_candidate_for_full_requirement_stays_idle() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 1, &["alice"])];

    let transition: GateTransition = request_assignment(
        &ConflictGate::Idle,
        &requirements,
        rid(1),
        profile(&roster, "bram"),
    );

    assert_eq!(transition.gate, ConflictGate::Idle);
    assert_eq!(transition.requirements, requirements);
}

#[test]
fn test_busy_candidate_already_assigned_stays_idle() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 3, &["bram"])];

    let transition: GateTransition = request_assignment(
        &ConflictGate::Idle,
        &requirements,
        rid(1),
        profile(&roster, "bram"),
    );

    assert!(!transition.gate.is_pending());
}
