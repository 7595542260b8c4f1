//! Property tests for the local text parser.

use pantry_core::Quantity;
use pantry_parser::parse;
use proptest::prelude::*;

const UNITS: &[(&str, &str)] = &[
    ("cup", "cup"),
    ("cups", "cup"),
    ("tbsp", "tablespoon"),
    ("teaspoons", "teaspoon"),
    ("oz", "ounce"),
    ("lbs", "pound"),
    ("g", "gram"),
    ("cloves", "clove"),
    ("cans", "can"),
];

const NAMES: &[&str] = &["flour", "sugar", "onion", "olive oil", "black beans", "chicken broth"];

proptest! {
    #[test]
    fn never_panics_and_keeps_raw_text(line in "\\PC{0,60}") {
        let p = parse(&line);
        prop_assert_eq!(p.raw_text, line);
    }

    #[test]
    fn well_formed_lines_roundtrip(
        whole in 1u64..20,
        frac in prop::option::of((1u64..4, 5u64..9)),
        unit in 0..UNITS.len(),
        name in 0..NAMES.len(),
    ) {
        let (amount_text, expected) = match frac {
            Some((n, d)) => (
                format!("{whole} {n}/{d}"),
                Quantity::whole(whole).checked_add(&Quantity::new(n, d).unwrap()).unwrap(),
            ),
            None => (whole.to_string(), Quantity::whole(whole)),
        };
        let line = format!("{amount_text} {} {}", UNITS[unit].0, NAMES[name]);
        let p = parse(&line);
        prop_assert_eq!(p.quantity, Some(expected));
        prop_assert_eq!(p.unit.as_deref(), Some(UNITS[unit].1));
        prop_assert_eq!(p.name, NAMES[name]);
    }

    #[test]
    fn range_never_below_either_bound(a in 1u64..10, b in 1u64..10) {
        let p = parse(&format!("{a}-{b} cups stock"));
        let q = p.quantity.unwrap();
        prop_assert!(q >= Quantity::whole(a));
        prop_assert!(q >= Quantity::whole(b));
    }
}
