//! Property tests for exact quantity arithmetic and rounding.

use pantry_core::Quantity;
use proptest::prelude::*;

fn quantity() -> impl Strategy<Value = Quantity> {
    (0u64..10_000, 1u64..64).prop_map(|(n, d)| Quantity::new(n, d).unwrap())
}

fn step() -> impl Strategy<Value = Quantity> {
    prop_oneof![
        Just(Quantity::new(1, 4).unwrap()),
        Just(Quantity::new(1, 2).unwrap()),
        Just(Quantity::new(1, 3).unwrap()),
        Just(Quantity::whole(1)),
    ]
}

proptest! {
    #[test]
    fn ceil_never_rounds_down(q in quantity(), s in step()) {
        let rounded = q.ceil_to(&s).unwrap();
        prop_assert!(rounded >= q);
        prop_assert!(rounded < q.checked_add(&s).unwrap());
    }

    #[test]
    fn ceil_is_idempotent(q in quantity(), s in step()) {
        let once = q.ceil_to(&s).unwrap();
        let twice = once.ceil_to(&s).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn ceil_lands_on_grid(q in quantity(), s in step()) {
        let rounded = q.ceil_to(&s).unwrap();
        let steps = rounded.checked_div(&s).unwrap();
        prop_assert_eq!(steps.parts().1, 1);
    }

    #[test]
    fn addition_is_commutative(a in quantity(), b in quantity()) {
        prop_assert_eq!(a.checked_add(&b), b.checked_add(&a));
    }

    #[test]
    fn sum_is_order_independent(mut items in prop::collection::vec(quantity(), 0..12)) {
        let forward = Quantity::checked_sum(&items);
        items.reverse();
        let backward = Quantity::checked_sum(&items);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn huge_sums_fail_instead_of_wrapping(n in (u64::MAX / 2 + 1)..u64::MAX) {
        let big = Quantity::whole(n);
        prop_assert_eq!(big.checked_add(&big), None);
    }

    #[test]
    fn display_parses_back(q in quantity()) {
        let shown = q.to_string();
        let parsed: Quantity = shown.parse().unwrap();
        prop_assert_eq!(parsed, q);
    }
}
