//! Phase 3: exact sums per bucket. No rounding happens here.

use pantry_core::{Quantity, UnitKind};
use tracing::trace;

use super::phase1_collecting::Group;
use super::phase2_converting::ConvertedGroup;

/// One summed amount. `rounded` equals `exact` until phase 4 runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    pub unit: Option<String>,
    pub kind: UnitKind,
    pub exact: Quantity,
    pub rounded: Quantity,
    pub members: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummedGroup {
    pub group: Group,
    /// Primary total first, then the unmerged ones.
    pub tallies: Vec<Tally>,
    pub unquantified: Vec<usize>,
    /// Members whose amount could not be converted, summed or rounded
    /// without overflowing.
    pub overflowed: Vec<usize>,
}

impl SummedGroup {
    pub fn primary(&self) -> Option<&Tally> {
        self.tallies.first()
    }

    pub fn unmerged(&self) -> &[Tally] {
        self.tallies.get(1..).unwrap_or(&[])
    }
}

/// Sum each bucket exactly. An amount that would overflow its bucket's
/// running total starts a separate tally in the same unit.
pub fn sum_group(converted: ConvertedGroup) -> SummedGroup {
    let mut overflowed = converted.overflowed;
    let mut tallies = Vec::new();
    for bucket in converted.buckets {
        let mut own: Vec<Tally> = Vec::new();
        for (amount, member) in bucket.amounts.into_iter().zip(bucket.members) {
            let absorbed = own.iter_mut().any(|tally| match tally.exact.checked_add(&amount) {
                Some(sum) => {
                    tally.exact = sum;
                    tally.members.push(member);
                    true
                }
                None => false,
            });
            if absorbed {
                continue;
            }
            if !own.is_empty() {
                trace!(member, "Amount overflows its total, kept as a separate line");
                overflowed.push(member);
            }
            own.push(Tally {
                unit: bucket.unit.clone(),
                kind: bucket.kind,
                exact: amount,
                rounded: Quantity::zero(),
                members: vec![member],
            });
        }
        tallies.extend(own);
    }
    for tally in &mut tallies {
        tally.rounded = tally.exact.clone();
    }
    overflowed.sort_unstable();
    overflowed.dedup();
    SummedGroup {
        group: converted.group,
        tallies,
        unquantified: converted.unquantified,
        overflowed,
    }
}
