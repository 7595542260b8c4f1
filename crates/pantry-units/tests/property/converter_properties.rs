//! Property tests for unit conversion.

use pantry_core::Quantity;
use pantry_units::UnitConverter;
use proptest::prelude::*;

const VOLUME: &[&str] = &[
    "teaspoon", "tablespoon", "fluid ounce", "cup", "pint", "quart", "gallon", "milliliter", "liter",
];
const WEIGHT: &[&str] = &["ounce", "pound", "gram", "kilogram"];

fn quantity() -> impl Strategy<Value = Quantity> {
    (1u64..500, 1u64..16).prop_map(|(n, d)| Quantity::new(n, d).unwrap())
}

proptest! {
    #[test]
    fn volume_roundtrip_is_exact(q in quantity(), a in 0..VOLUME.len(), b in 0..VOLUME.len()) {
        let c = UnitConverter::default();
        let there = c.convert(&q, Some(VOLUME[a]), Some(VOLUME[b])).unwrap();
        let back = c.convert(&there, Some(VOLUME[b]), Some(VOLUME[a])).unwrap();
        prop_assert_eq!(back, q);
    }

    #[test]
    fn weight_roundtrip_is_exact(q in quantity(), a in 0..WEIGHT.len(), b in 0..WEIGHT.len()) {
        let c = UnitConverter::default();
        let there = c.convert(&q, Some(WEIGHT[a]), Some(WEIGHT[b])).unwrap();
        let back = c.convert(&there, Some(WEIGHT[b]), Some(WEIGHT[a])).unwrap();
        prop_assert_eq!(back, q);
    }

    #[test]
    fn volume_to_weight_always_fails_without_density(
        q in quantity(), a in 0..VOLUME.len(), b in 0..WEIGHT.len()
    ) {
        let c = UnitConverter::default();
        prop_assert!(c.convert(&q, Some(VOLUME[a]), Some(WEIGHT[b])).is_err());
        prop_assert!(c.convert_ingredient(&q, Some(VOLUME[a]), Some(WEIGHT[b]), "onion").is_err());
    }
}
