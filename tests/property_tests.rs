//! Property-based tests for hdpaths
//!
//! These tests use proptest to verify the grammar invariants across a wide
//! range of generated paths.

use hdpaths::{DerivationPath, PathElement, MAX_INDEX};
use proptest::prelude::*;

/// Strategy for an arbitrary valid element: any 31-bit index, either flag.
fn any_element() -> impl Strategy<Value = PathElement> {
    (any::<bool>(), 0u32..=MAX_INDEX)
        .prop_map(|(hardened, index)| PathElement::new(hardened, index).unwrap())
}

fn any_path() -> impl Strategy<Value = DerivationPath> {
    proptest::collection::vec(any_element(), 0..8).prop_map(DerivationPath::from_elements)
}

proptest! {
    /// format -> parse is the identity for every constructible path.
    #[test]
    fn format_then_parse_round_trips(path in any_path()) {
        let reparsed = DerivationPath::parse(&path.to_string()).unwrap();
        prop_assert_eq!(reparsed, path);
    }

    /// Formatting is idempotent: parse(format(p)) formats identically.
    #[test]
    fn formatting_is_idempotent(path in any_path()) {
        let text = path.to_string();
        let reparsed = DerivationPath::parse(&text).unwrap();
        prop_assert_eq!(reparsed.to_string(), text);
    }

    /// Canonical output never contains whitespace and always starts at the root.
    #[test]
    fn canonical_form_is_clean(path in any_path()) {
        let text = path.to_string();
        prop_assert!(text.starts_with('m'));
        prop_assert!(!text.contains(' '));
        prop_assert!(!text.ends_with('/'));
    }

    /// Spaces injected around segments and hardening markers are ignored.
    /// Only the body after `m/` is space-tolerant; the root marker itself
    /// must stay flush against the first separator.
    #[test]
    fn whitespace_injection_is_tolerated(path in any_path()) {
        let text = path.to_string();
        let spaced = match text.strip_prefix("m/") {
            Some(body) => {
                let body: String = body.chars().flat_map(|c| [c, ' ']).collect();
                format!("m/{body}")
            }
            None => format!("  {text}  "),
        };
        let reparsed = DerivationPath::parse(&spaced).unwrap();
        prop_assert_eq!(reparsed, path);
    }

    /// Increment changes exactly the last index, by one, keeping its flag.
    #[test]
    fn increment_touches_only_the_last_index(
        mut elements in proptest::collection::vec(
            (any::<bool>(), 0u32..MAX_INDEX),
            1..8,
        )
    ) {
        let path = DerivationPath::from_elements(
            elements
                .iter()
                .map(|&(h, i)| PathElement::new(h, i).unwrap())
                .collect(),
        );
        let next = path.increment().unwrap();

        let last = elements.len() - 1;
        elements[last].1 += 1;
        let expected = DerivationPath::from_elements(
            elements
                .iter()
                .map(|&(h, i)| PathElement::new(h, i).unwrap())
                .collect(),
        );
        prop_assert_eq!(next, expected);
    }

    /// Encoded indices only ever differ from the raw index in bit 31.
    #[test]
    fn hardening_only_sets_bit_31(element in any_element()) {
        prop_assert_eq!(element.encoded_index() & MAX_INDEX, element.index());
        prop_assert_eq!(element.encoded_index() >= 0x8000_0000, element.hardened());
    }

    /// Equal paths hash identically (map/set key contract).
    #[test]
    fn equal_paths_agree_on_hash(path in any_path()) {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let copy = DerivationPath::parse(&path.to_string()).unwrap();
        prop_assert_eq!(&copy, &path);

        let hash = |p: &DerivationPath| {
            let mut hasher = DefaultHasher::new();
            p.hash(&mut hasher);
            hasher.finish()
        };
        prop_assert_eq!(hash(&copy), hash(&path));
    }
}
