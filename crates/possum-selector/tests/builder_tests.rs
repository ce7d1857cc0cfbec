//! Integration tests for compound selector construction and validation.

use possum_selector::{
    PartKind, Render, SelectorError, attr, class, element, id, pseudo_class, pseudo_element,
};

// Entry points
// Each starts a fresh builder seeded with a single part.

#[test]
fn test_element_entry_point() {
    assert_eq!(element("div").render(), "div");
}

#[test]
fn test_id_entry_point() {
    assert_eq!(id("main").render(), "#main");
}

#[test]
fn test_class_entry_point() {
    assert_eq!(class("container").render(), ".container");
}

#[test]
fn test_attr_entry_point() {
    assert_eq!(attr("href").render(), "[href]");
}

#[test]
fn test_pseudo_class_entry_point() {
    assert_eq!(pseudo_class("focus").render(), ":focus");
}

#[test]
fn test_pseudo_element_entry_point() {
    assert_eq!(pseudo_element("before").render(), "::before");
}

// Chained construction
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
// "A compound selector is a sequence of simple selectors that are not
// separated by a combinator."

#[test]
fn test_chained_compound_selector() {
    let mut selector = element("a");
    let _ = selector
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.render(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_all_kinds_in_canonical_order() {
    let mut selector = element("input");
    let _ = selector
        .id("quantity")
        .unwrap()
        .class("spinner")
        .unwrap()
        .attr(r#"type="number""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .pseudo_element("selection")
        .unwrap();
    assert_eq!(
        selector.render(),
        r#"input#quantity.spinner[type="number"]:focus::selection"#
    );
}

#[test]
fn test_kinds_may_be_skipped() {
    let mut selector = element("ul");
    let _ = selector.pseudo_class("hover").unwrap();
    assert_eq!(selector.render(), "ul:hover");

    let mut selector = id("sidebar");
    let _ = selector.attr("hidden").unwrap().pseudo_element("after").unwrap();
    assert_eq!(selector.render(), "#sidebar[hidden]::after");

    let mut selector = class("icon");
    let _ = selector.pseudo_element("before").unwrap();
    assert_eq!(selector.render(), ".icon::before");
}

#[test]
fn test_id_then_repeated_classes() {
    let mut selector = id("main");
    let _ = selector.class("container").unwrap().class("editable").unwrap();
    assert_eq!(selector.render(), "#main.container.editable");
}

#[test]
fn test_repeatable_kinds_repeat_freely() {
    let mut selector = element("input");
    let _ = selector
        .attr(r#"type="text""#)
        .unwrap()
        .attr("required")
        .unwrap()
        .pseudo_class("enabled")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(
        selector.render(),
        r#"input[type="text"][required]:enabled:focus"#
    );
}

// Uniqueness
// Element, id, and pseudo-element occur at most once per compound selector.

#[test]
fn test_duplicate_element_is_rejected() {
    let mut selector = element("div");
    let err = selector.element("span").unwrap_err();
    assert_eq!(err, SelectorError::DuplicateKind(PartKind::Element));
}

#[test]
fn test_duplicate_id_is_rejected() {
    let mut selector = id("x");
    let err = selector.id("x").unwrap_err();
    assert_eq!(err, SelectorError::DuplicateKind(PartKind::Id));
    assert_eq!(selector.render(), "#x");
}

#[test]
fn test_duplicate_pseudo_element_is_rejected() {
    let mut selector = pseudo_element("before");
    let err = selector.pseudo_element("after").unwrap_err();
    assert_eq!(err, SelectorError::DuplicateKind(PartKind::PseudoElement));
}

#[test]
fn test_duplicate_reported_before_ordering() {
    // A second id after classes violates both rules; the duplicate wins.
    let mut selector = id("main");
    let _ = selector.class("container").unwrap();
    let err = selector.id("other").unwrap_err();
    assert_eq!(err, SelectorError::DuplicateKind(PartKind::Id));
}

// Ordering
// Parts follow the canonical order element, id, class, attribute,
// pseudo-class, pseudo-element.

#[test]
fn test_id_after_class_is_rejected() {
    let mut selector = class("y");
    let err = selector.id("x").unwrap_err();
    assert_eq!(err, SelectorError::OutOfOrder(PartKind::Id));
}

#[test]
fn test_element_after_id_is_rejected() {
    let mut selector = id("main");
    let err = selector.element("div").unwrap_err();
    assert_eq!(err, SelectorError::OutOfOrder(PartKind::Element));
}

#[test]
fn test_class_after_attr_is_rejected() {
    let mut selector = attr("href");
    let err = selector.class("external").unwrap_err();
    assert_eq!(err, SelectorError::OutOfOrder(PartKind::Class));
}

#[test]
fn test_attr_after_pseudo_class_is_rejected() {
    let mut selector = pseudo_class("focus");
    let err = selector.attr("href").unwrap_err();
    assert_eq!(err, SelectorError::OutOfOrder(PartKind::Attribute));
}

#[test]
fn test_pseudo_class_after_pseudo_element_is_rejected() {
    let mut selector = pseudo_element("before");
    let err = selector.pseudo_class("hover").unwrap_err();
    assert_eq!(err, SelectorError::OutOfOrder(PartKind::PseudoClass));
}

// Failure behavior
// A failed append mutates nothing and the builder stays usable.

#[test]
fn test_failed_append_leaves_builder_unchanged() {
    let mut selector = id("main");
    let _ = selector.class("container").unwrap();
    let before = selector.render();

    assert!(selector.element("div").is_err());
    assert!(selector.id("other").is_err());
    assert_eq!(selector.render(), before);
}

#[test]
fn test_builder_usable_after_failed_append() {
    let mut selector = id("main");
    assert!(selector.element("div").is_err());
    let _ = selector.class("container").unwrap();
    assert_eq!(selector.render(), "#main.container");
}

// Rendering

#[test]
fn test_render_is_idempotent() {
    let selector = element("div");
    let first = selector.render();
    let second = selector.render();
    assert_eq!(first, second);
}

#[test]
fn test_render_observes_latest_state() {
    let mut selector = element("div");
    assert_eq!(selector.render(), "div");
    let _ = selector.class("card").unwrap();
    assert_eq!(selector.render(), "div.card");
}

#[test]
fn test_display_matches_render() {
    let mut selector = element("div");
    let _ = selector.id("main").unwrap();
    assert_eq!(selector.to_string(), selector.render());
}

#[test]
fn test_values_are_spliced_verbatim() {
    // Value text is never validated, including the empty string.
    assert_eq!(class("").render(), ".");
    assert_eq!(attr("").render(), "[]");
    assert_eq!(pseudo_class("nth-of-type(even)").render(), ":nth-of-type(even)");
}

#[test]
fn test_independent_builders_do_not_interfere() {
    let mut first = element("div");
    let mut second = element("span");
    let _ = first.class("a").unwrap();
    let _ = second.class("b").unwrap();
    assert_eq!(first.render(), "div.a");
    assert_eq!(second.render(), "span.b");
}
