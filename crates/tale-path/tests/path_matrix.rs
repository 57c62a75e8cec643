use proptest::prelude::*;
use tale_path::{Component, Path};

#[test]
fn absolute_paths_matrix() {
    let path = Path::parse("knot.stitch");
    assert!(!path.is_relative());
    assert_eq!(path.len(), 2);
    assert!(path.contains_named_component());

    let path = Path::parse("0.1.2");
    assert!(!path.contains_named_component());
    assert_eq!(path.head(), Some(&Component::Index(0)));

    let path = Path::parse("a.b.c");
    assert_eq!(path.to_string(), "a.b.c");
}

#[test]
fn relative_paths_matrix() {
    let path = Path::parse(".^");
    assert!(path.is_relative());
    assert_eq!(path.len(), 1);
    assert!(path.components()[0].is_parent());

    let path = Path::parse(".^.s");
    assert_eq!(path.to_string(), ".^.s");
    assert_eq!(path.tail().to_string(), ".s");
}

#[test]
fn index_components_are_canonical_only() {
    assert_eq!(Component::parse("12"), Component::Index(12));
    assert_eq!(Component::parse("012"), Component::Name("012".into()));
    assert_eq!(Component::parse("-1"), Component::Name("-1".into()));
    assert_eq!(Component::parse(""), Component::Name(String::new()));
}

proptest! {
    #[test]
    fn path_string_roundtrips(s in "[.^a-z0-9_-]{0,24}") {
        prop_assert_eq!(Path::parse(&s).to_string(), s);
    }

    #[test]
    fn parse_is_deterministic(s in "[.a-z0-9]{0,16}") {
        prop_assert_eq!(Path::parse(&s), Path::parse(&s));
    }
}
