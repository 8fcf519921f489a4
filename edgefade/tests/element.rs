use edgefade::{find_element, find_element_mut, Content, Element};

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_add_remove() {
    let mut el = Element::box_().class("scroll-wrapper");
    assert!(el.has_class("scroll-wrapper"));
    assert!(!el.has_class("show-left-shadow"));

    el.add_class("show-left-shadow");
    assert!(el.has_class("show-left-shadow"));

    el.remove_class("show-left-shadow");
    assert!(!el.has_class("show-left-shadow"));
}

#[test]
fn test_class_no_duplicates() {
    let mut el = Element::box_().class("marker");
    el.add_class("marker");
    el.set_class("marker", true);
    assert_eq!(el.classes, vec!["marker".to_string()]);
}

#[test]
fn test_set_class_toggles() {
    let mut el = Element::box_();

    el.set_class("flag", true);
    assert!(el.has_class("flag"));

    el.set_class("flag", false);
    assert!(!el.has_class("flag"));

    // Removing an absent class is fine.
    el.set_class("flag", false);
    assert!(el.classes.is_empty());
}

// ============================================================================
// Tree Lookup
// ============================================================================

#[test]
fn test_find_element() {
    let root = Element::col()
        .id("root")
        .child(Element::box_().id("a").child(Element::text("deep").id("deep")))
        .child(Element::text("b").id("b"));

    assert_eq!(find_element(&root, "root").map(|e| e.id.as_str()), Some("root"));
    assert_eq!(find_element(&root, "deep").map(|e| e.id.as_str()), Some("deep"));
    assert!(find_element(&root, "missing").is_none());
}

#[test]
fn test_find_element_mut() {
    let mut root = Element::col()
        .id("root")
        .child(Element::box_().id("target"));

    find_element_mut(&mut root, "target")
        .unwrap()
        .add_class("found");

    assert!(find_element(&root, "target").unwrap().has_class("found"));
}

// ============================================================================
// Builders
// ============================================================================

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::box_();
    let b = Element::box_();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_child_builds_children_content() {
    let root = Element::row()
        .child(Element::text("one"))
        .child(Element::text("two"));

    match &root.content {
        Content::Children(children) => assert_eq!(children.len(), 2),
        other => panic!("expected children, got {other:?}"),
    }
}

#[test]
fn test_children_extends() {
    let root = Element::row()
        .child(Element::text("one"))
        .children([Element::text("two"), Element::text("three")]);

    match &root.content {
        Content::Children(children) => assert_eq!(children.len(), 3),
        other => panic!("expected children, got {other:?}"),
    }
}
