//! Phase 2: pick display units and convert member quantities into them.

use pantry_core::config::DisplayUnitPolicy;
use pantry_core::errors::ConversionError;
use pantry_core::{Quantity, UnitKind};
use pantry_units::UnitConverter;
use tracing::trace;

use super::phase1_collecting::{Group, Member};

/// Converted amounts that share one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub unit: Option<String>,
    pub kind: UnitKind,
    pub amounts: Vec<Quantity>,
    /// Indices into the group's members.
    pub members: Vec<usize>,
}

/// A group after conversion. The first bucket is the primary total; any
/// further buckets hold members that could not be converted into it.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedGroup {
    pub group: Group,
    pub buckets: Vec<Bucket>,
    pub unquantified: Vec<usize>,
    /// Members whose amount was too large to convert. They still land in a
    /// bucket of their own unit.
    pub overflowed: Vec<usize>,
}

pub fn convert_group(
    group: Group,
    converter: &UnitConverter,
    policy: DisplayUnitPolicy,
) -> ConvertedGroup {
    let (mut pending, unquantified): (Vec<usize>, Vec<usize>) = (0..group.members.len())
        .partition(|&i| group.members[i].ingredient.quantity.is_some());

    let base = group.key.base().to_string();
    let mut buckets = Vec::new();
    let mut overflowed = Vec::new();
    while !pending.is_empty() {
        let target = choose_display_unit(&group.members, &pending, policy);
        let mut bucket = Bucket {
            kind: converter.kind_of(target.as_deref()),
            unit: target,
            amounts: Vec::new(),
            members: Vec::new(),
        };
        let mut rest = Vec::new();
        for i in pending {
            let member = &group.members[i];
            let Some(quantity) = member.ingredient.quantity.as_ref() else {
                continue;
            };
            match converter.convert_ingredient(
                quantity,
                member.unit.as_deref(),
                bucket.unit.as_deref(),
                &base,
            ) {
                Ok(amount) => {
                    bucket.amounts.push(amount);
                    bucket.members.push(i);
                }
                Err(e) => {
                    trace!(key = %group.key, error = %e, "Member kept apart from display unit");
                    if matches!(e, ConversionError::Overflow { .. }) {
                        overflowed.push(i);
                    }
                    rest.push(i);
                }
            }
        }
        buckets.push(bucket);
        pending = rest;
    }

    ConvertedGroup {
        group,
        buckets,
        unquantified,
        overflowed,
    }
}

/// Display unit among the pending members: the first seen, or with
/// `MostCommon` the unit most members use, ties going to the first seen.
pub fn choose_display_unit(
    members: &[Member],
    pending: &[usize],
    policy: DisplayUnitPolicy,
) -> Option<String> {
    let first = pending.first().and_then(|&i| members[i].unit.clone());
    if policy == DisplayUnitPolicy::FirstSeen {
        return first;
    }

    let mut tally: Vec<(Option<&str>, usize)> = Vec::new();
    for &i in pending {
        let unit = members[i].unit.as_deref();
        match tally.iter_mut().find(|(u, _)| *u == unit) {
            Some((_, count)) => *count += 1,
            None => tally.push((unit, 1)),
        }
    }
    let mut best: Option<(Option<&str>, usize)> = None;
    for (unit, count) in tally {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((unit, count));
        }
    }
    match best {
        Some((unit, _)) => unit.map(str::to_string),
        None => first,
    }
}
