//! Ordering and nesting of a textbook's units.

use std::collections::{HashMap, HashSet};

use crate::models::{
    domain::{Passage, Unit},
    dto::{request::UnitOrder, response::UnitNode},
};

/// Sibling display order: `order_index`, then title, then id.
pub fn sort_siblings(units: &mut [Unit]) {
    units.sort_by(|a, b| {
        a.order_index
            .cmp(&b.order_index)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Groups units by parent. A parent id that is absent from `units` (or points
/// at the unit itself) puts the unit at the root.
fn group_by_parent(units: Vec<Unit>) -> HashMap<Option<String>, Vec<Unit>> {
    let ids: HashSet<String> = units.iter().map(|u| u.id.clone()).collect();
    let mut groups: HashMap<Option<String>, Vec<Unit>> = HashMap::new();

    for unit in units {
        let parent = unit
            .parent_id
            .clone()
            .filter(|parent| ids.contains(parent) && parent != &unit.id);
        groups.entry(parent).or_default().push(unit);
    }

    groups
}

fn build_level(
    parent: Option<String>,
    groups: &mut HashMap<Option<String>, Vec<Unit>>,
    passages: &mut HashMap<String, Vec<Passage>>,
) -> Vec<UnitNode> {
    let mut siblings = groups.remove(&parent).unwrap_or_default();
    sort_siblings(&mut siblings);

    siblings
        .into_iter()
        .map(|unit| {
            let children = build_level(Some(unit.id.clone()), groups, passages);
            let unit_passages = passages.remove(&unit.id).unwrap_or_default();
            UnitNode {
                unit,
                passages: unit_passages,
                children,
            }
        })
        .collect()
}

/// Nests `units` under their parents and attaches each passage to its unit.
/// Passages without a matching unit are left out.
pub fn build_unit_tree(units: Vec<Unit>, passages: Vec<Passage>) -> Vec<UnitNode> {
    let total = units.len();
    let mut groups = group_by_parent(units);

    let mut passages_by_unit: HashMap<String, Vec<Passage>> = HashMap::new();
    for passage in passages {
        if let Some(unit_id) = passage.unit_id.clone() {
            passages_by_unit.entry(unit_id).or_default().push(passage);
        }
    }

    let roots = build_level(None, &mut groups, &mut passages_by_unit);

    let unreachable: usize = groups.values().map(Vec::len).sum();
    if unreachable > 0 {
        log::warn!(
            "{} of {} units are unreachable from the root (cyclic parent_id chain)",
            unreachable,
            total
        );
    }

    roots
}

/// Renumbers every sibling group to `1..=n`, keeping the current display
/// order. Only units whose `order_index` changes are returned.
pub fn normalized_order(units: Vec<Unit>) -> Vec<UnitOrder> {
    let mut changes = Vec::new();

    for (_, mut siblings) in group_by_parent(units) {
        sort_siblings(&mut siblings);
        for (position, unit) in siblings.into_iter().enumerate() {
            let order_index = position as i32 + 1;
            if unit.order_index != order_index {
                changes.push(UnitOrder {
                    id: unit.id,
                    order_index,
                });
            }
        }
    }

    changes.sort_by(|a, b| a.id.cmp(&b.id));
    changes
}
