// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_roster, requirement, rid, sid};
use crate::{
    AvailabilityFilter, add_role, assign, candidates_for, change_required_count, remove_role,
    unassign,
};
use stagehand_domain::{Role, RoleRequirement, StaffProfile};

fn ids(profiles: &[&StaffProfile]) -> Vec<String> {
    profiles.iter().map(|p| p.id.value().to_string()).collect()
}

// ============================================================================
// add_role
// ============================================================================

#[test]
fn test_add_role_appends_new_requirement() {
    let requirements: Vec<RoleRequirement> = add_role(&[], Role::Host, 2, 0);

    assert_eq!(requirements.len(), 1);
    assert_eq!(requirements[0].id(), rid(1));
    assert_eq!(requirements[0].role(), Role::Host);
    assert_eq!(requirements[0].required_count(), 2);
    assert!(requirements[0].assigned().is_empty());
}

#[test]
fn test_add_existing_role_increments_count() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &["alice"])];

    let requirements: Vec<RoleRequirement> = add_role(&start, Role::Host, 3, 1);

    assert_eq!(requirements.len(), 1);
    assert_eq!(requirements[0].required_count(), 5);
    assert_eq!(requirements[0].assigned(), &[sid("alice")]);
}

#[test]
fn test_add_role_floors_non_positive_count() {
    let requirements: Vec<RoleRequirement> = add_role(&[], Role::Usher, 0, 0);
    assert_eq!(requirements[0].required_count(), 1);

    let requirements: Vec<RoleRequirement> = add_role(&requirements, Role::Usher, -4, 1);
    assert_eq!(requirements[0].required_count(), 2);
}

#[test]
fn test_add_role_does_not_modify_input() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 1, &[])];

    let _ = add_role(&start, Role::Host, 1, 1);

    assert_eq!(start[0].required_count(), 1);
}

#[test]
fn test_add_role_ids_stay_unique_after_removal() {
    let requirements: Vec<RoleRequirement> = add_role(&[], Role::Host, 1, 0);
    let requirements: Vec<RoleRequirement> = add_role(&requirements, Role::Usher, 1, 1);
    let requirements: Vec<RoleRequirement> = remove_role(&requirements, rid(1));
    let requirements: Vec<RoleRequirement> = add_role(&requirements, Role::Security, 1, 2);

    let ids: Vec<u32> = requirements.iter().map(|r| r.id().value()).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_add_role_does_not_reuse_id_of_removed_last_requirement() {
    let requirements: Vec<RoleRequirement> = add_role(&[], Role::Host, 1, 0);
    let requirements: Vec<RoleRequirement> = add_role(&requirements, Role::Usher, 1, 1);
    let requirements: Vec<RoleRequirement> = remove_role(&requirements, rid(2));
    let requirements: Vec<RoleRequirement> = add_role(&requirements, Role::Security, 1, 2);

    let ids: Vec<u32> = requirements.iter().map(|r| r.id().value()).collect();
    assert_eq!(ids, vec![1, 3]);
}

// ============================================================================
// remove_role
// ============================================================================

#[test]
fn test_remove_role_deletes_requirement_and_assignments() {
    let start: Vec<RoleRequirement> = vec![
        requirement(1, Role::Host, 2, &["alice"]),
        requirement(2, Role::Usher, 1, &["eli"]),
    ];

    let requirements: Vec<RoleRequirement> = remove_role(&start, rid(1));

    assert_eq!(requirements, vec![requirement(2, Role::Usher, 1, &["eli"])]);
}

#[test]
fn test_remove_unknown_role_is_no_op() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    assert_eq!(remove_role(&start, rid(9)), start);
}

// ============================================================================
// change_required_count
// ============================================================================

#[test]
fn test_change_required_count_grows_and_shrinks() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    let grown: Vec<RoleRequirement> = change_required_count(&start, rid(1), 3);
    assert_eq!(grown[0].required_count(), 5);

    let shrunk: Vec<RoleRequirement> = change_required_count(&grown, rid(1), -2);
    assert_eq!(shrunk[0].required_count(), 3);
}

#[test]
fn test_change_required_count_clamps_to_assigned_length() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 3, &["a", "b", "c"])];

    let requirements: Vec<RoleRequirement> = change_required_count(&start, rid(1), -5);

    assert_eq!(requirements[0].required_count(), 3);
}

#[test]
fn test_change_required_count_floors_at_one() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    let requirements: Vec<RoleRequirement> = change_required_count(&start, rid(1), -10);

    assert_eq!(requirements[0].required_count(), 1);
}

#[test]
fn test_change_required_count_unknown_id_is_no_op() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    assert_eq!(change_required_count(&start, rid(7), 4), start);
}

// ============================================================================
// assign / unassign
// ============================================================================

#[test]
fn test_assign_fills_next_slot() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    let requirements: Vec<RoleRequirement> = assign(&start, rid(1), &sid("alice"));
    let requirements: Vec<RoleRequirement> = assign(&requirements, rid(1), &sid("bram"));

    assert_eq!(requirements[0].assigned(), &[sid("alice"), sid("bram")]);
}

#[test]
fn test_assign_same_staff_twice_is_no_op() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    let once: Vec<RoleRequirement> = assign(&start, rid(1), &sid("staffA"));
    let twice: Vec<RoleRequirement> = assign(&once, rid(1), &sid("staffA"));

    assert_eq!(twice[0].assigned(), &[sid("staffA")]);
    assert_eq!(once, twice);
}

#[test]
fn test_assign_beyond_capacity_is_no_op() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 1, &["alice"])];

    assert_eq!(assign(&start, rid(1), &sid("bram")), start);
}

#[test]
fn test_assign_to_unknown_requirement_is_no_op() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    assert_eq!(assign(&start, rid(2), &sid("alice")), start);
}

#[test]
fn test_unassign_removes_staff() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &["alice", "bram"])];

    let requirements: Vec<RoleRequirement> = unassign(&start, rid(1), &sid("alice"));

    assert_eq!(requirements[0].assigned(), &[sid("bram")]);
    assert_eq!(requirements[0].required_count(), 2);
}

#[test]
fn test_unassign_absent_staff_is_no_op() {
    let start: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &["alice"])];

    assert_eq!(unassign(&start, rid(1), &sid("zoe")), start);
    assert_eq!(unassign(&start, rid(5), &sid("alice")), start);
}

// ============================================================================
// candidates_for
// ============================================================================

#[test]
fn test_candidates_filter_by_role() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::SoundEngineer, 2, &[])];

    let pool = candidates_for(&requirements, rid(1), &roster, "", AvailabilityFilter::All);

    assert_eq!(ids(&pool), vec!["chen", "dana"]);
}

#[test]
fn test_candidates_exclude_staff_assigned_to_any_requirement() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![
        requirement(1, Role::Emcee, 1, &["bram"]),
        requirement(2, Role::Host, 2, &[]),
    ];

    let pool = candidates_for(&requirements, rid(2), &roster, "", AvailabilityFilter::All);

    assert_eq!(ids(&pool), vec!["alice"]);
}

#[test]
fn test_candidates_search_is_case_insensitive_over_name_and_roles() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::SoundEngineer, 2, &[])];

    let by_name = candidates_for(&requirements, rid(1), &roster, "RUIZ", AvailabilityFilter::All);
    assert_eq!(ids(&by_name), vec!["dana"]);

    let by_role = candidates_for(
        &requirements,
        rid(1),
        &roster,
        "lighting",
        AvailabilityFilter::All,
    );
    assert_eq!(ids(&by_role), vec!["dana"]);
}

#[test]
fn test_candidates_availability_tabs() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    let available = candidates_for(
        &requirements,
        rid(1),
        &roster,
        "",
        AvailabilityFilter::AvailableOnly,
    );
    let busy = candidates_for(
        &requirements,
        rid(1),
        &roster,
        "",
        AvailabilityFilter::BusyOnly,
    );

    assert_eq!(ids(&available), vec!["alice"]);
    assert_eq!(ids(&busy), vec!["bram"]);
}

#[test]
fn test_candidates_for_unknown_requirement_is_empty() {
    let roster: Vec<StaffProfile> = create_test_roster();
    let requirements: Vec<RoleRequirement> = vec![requirement(1, Role::Host, 2, &[])];

    let pool = candidates_for(&requirements, rid(3), &roster, "", AvailabilityFilter::All);

    assert!(pool.is_empty());
}
