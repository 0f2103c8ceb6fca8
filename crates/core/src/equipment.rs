// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Equipment reconciler.
//!
//! The selected package contributes a read-only baseline per item; ad-hoc
//! extra allocations are layered on top. The two are kept as separate
//! counters and merged on demand into one `EquipmentLine` per item name.
//! Item names are compared after trimming surrounding whitespace.

use crate::config::PackageSwitchPolicy;
use stagehand_domain::{EquipmentLine, ExtraAllocation, PackageDefinition, parse_package_line};
use std::collections::HashMap;
use tracing::debug;

/// Returns the quantity `package` contributes for `item_name`.
///
/// Repeated lines for the same name are summed. No package means zero.
#[must_use]
pub fn baseline_for(package: Option<&PackageDefinition>, item_name: &str) -> u32 {
    let key: &str = item_name.trim();

    package.map_or(0, |package| {
        package
            .items
            .iter()
            .map(|raw| parse_package_line(raw))
            .filter(|line| line.name == key)
            .fold(0_u32, |sum, line| sum.saturating_add(line.count))
    })
}

/// Merges the selected package and the extra allocations into one table.
///
/// Package items seed the table in package order with their baseline;
/// every extra allocation is then added to the row for its name, creating
/// a zero-baseline row (appended in first-seen order) when the package
/// does not list it.
///
/// # Arguments
///
/// * `selected_package` - The package chosen for the event, if any
/// * `extras` - The event's extra allocations
#[must_use]
pub fn merge(
    selected_package: Option<&PackageDefinition>,
    extras: &[ExtraAllocation],
) -> Vec<EquipmentLine> {
    let mut rows: Vec<(String, u32, i64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    if let Some(package) = selected_package {
        for raw in &package.items {
            let line = parse_package_line(raw);
            match index.get(&line.name) {
                Some(&position) => {
                    rows[position].1 = rows[position].1.saturating_add(line.count);
                }
                None => {
                    index.insert(line.name.clone(), rows.len());
                    rows.push((line.name, line.count, 0));
                }
            }
        }
    }

    for extra in extras {
        let name: &str = extra.item_name.trim();
        match index.get(name) {
            Some(&position) => {
                rows[position].2 = rows[position].2.saturating_add(extra.quantity);
            }
            None => {
                index.insert(name.to_string(), rows.len());
                rows.push((name.to_string(), 0, extra.quantity));
            }
        }
    }

    rows.into_iter()
        .map(|(name, baseline, extra)| EquipmentLine::new(&name, baseline, extra))
        .collect()
}

/// Adjusts the extra quantity for one item by `delta`.
///
/// All allocations for the item collapse into a single row holding
/// `current + delta`, positioned where the first one was. When that
/// result is not positive the row is dropped if the package gives the
/// item no baseline, and otherwise kept at zero. When the item has no
/// allocation yet, a positive `delta` creates one and anything else is a
/// no-op.
///
/// # Arguments
///
/// * `allocations` - The event's current extra allocations
/// * `selected_package` - The package chosen for the event, if any
/// * `item_name` - The item to adjust
/// * `delta` - The signed change
#[must_use]
pub fn adjust_extra(
    allocations: &[ExtraAllocation],
    selected_package: Option<&PackageDefinition>,
    item_name: &str,
    delta: i64,
) -> Vec<ExtraAllocation> {
    let key: &str = item_name.trim();
    let first: Option<usize> = allocations
        .iter()
        .position(|a| a.item_name.trim() == key);

    let Some(first) = first else {
        let mut updated: Vec<ExtraAllocation> = allocations.to_vec();
        if delta > 0 {
            updated.push(ExtraAllocation::new(key, delta));
        } else {
            debug!(item = key, delta, "adjust_extra: nothing to reduce");
        }
        return updated;
    };

    let current: i64 = allocations
        .iter()
        .filter(|a| a.item_name.trim() == key)
        .fold(0_i64, |sum, a| sum.saturating_add(a.quantity));
    let result: i64 = current.saturating_add(delta);

    let replacement: Option<ExtraAllocation> = if result > 0 {
        Some(ExtraAllocation::new(key, result))
    } else if baseline_for(selected_package, key) > 0 {
        Some(ExtraAllocation::new(key, 0))
    } else {
        None
    };

    let mut updated: Vec<ExtraAllocation> = Vec::with_capacity(allocations.len());
    for (position, allocation) in allocations.iter().enumerate() {
        if position == first {
            updated.extend(replacement.clone());
        } else if allocation.item_name.trim() != key {
            updated.push(allocation.clone());
        }
    }
    updated
}

/// Carries extra allocations across a package change.
///
/// Negative quantities come out as 0 under every policy.
///
/// # Arguments
///
/// * `allocations` - The extra allocations entered under the old package
/// * `new_package` - The package being switched to, if any
/// * `policy` - How to treat the existing allocations
#[must_use]
pub fn carry_extras(
    allocations: &[ExtraAllocation],
    new_package: Option<&PackageDefinition>,
    policy: PackageSwitchPolicy,
) -> Vec<ExtraAllocation> {
    match policy {
        PackageSwitchPolicy::Reset => Vec::new(),
        PackageSwitchPolicy::Preserve => allocations
            .iter()
            .map(|allocation| {
                ExtraAllocation::new(&allocation.item_name, allocation.quantity.max(0))
            })
            .collect(),
        PackageSwitchPolicy::Revalidate => allocations
            .iter()
            .filter_map(|allocation| {
                let quantity: i64 = allocation.quantity.max(0);
                if quantity > 0 || baseline_for(new_package, &allocation.item_name) > 0 {
                    Some(ExtraAllocation::new(&allocation.item_name, quantity))
                } else {
                    None
                }
            })
            .collect(),
    }
}
