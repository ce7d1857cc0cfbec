//! The compound-selector state machine.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! A [`SelectorBuilder`] accumulates the textual form of one compound
//! selector part by part. Every append operation validates the structural
//! rules (once-only kinds, canonical ordering) before touching any state, so
//! a failed append leaves the builder exactly as it was.

use std::fmt;

use crate::Render;
use crate::error::SelectorError;
use crate::part::{PartKind, PartSet};

/// One compound selector under construction.
///
/// Builders are created through the crate-level entry points ([`element`],
/// [`id`], [`class`], [`attr`], [`pseudo_class`], [`pseudo_element`]), each
/// of which seeds a fresh builder with its first part. Further parts are
/// appended through the methods here, which return `&mut Self` on success so
/// calls chain with `?`.
///
/// The accumulated text is append-only: once a fragment has been written it
/// is never rewritten, and [`Render::render`] returns the text as it stands
/// at any point during construction.
///
/// [`element`]: crate::element
/// [`id`]: crate::id
/// [`class`]: crate::class
/// [`attr`]: crate::attr
/// [`pseudo_class`]: crate::pseudo_class
/// [`pseudo_element`]: crate::pseudo_element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorBuilder {
    /// Accumulated textual form of the selector. Only ever extended.
    rendered: String,
    /// Every part kind appended so far, repeatable kinds included.
    seen: PartSet,
}

impl SelectorBuilder {
    /// Seed a fresh builder with its first part.
    ///
    /// The first append on an empty builder can violate neither uniqueness
    /// nor ordering, so no checks run.
    pub(crate) fn start(kind: PartKind, value: &str) -> Self {
        let mut builder = Self {
            rendered: String::new(),
            seen: PartSet::EMPTY,
        };
        builder.push_part(kind, value);
        builder
    }

    /// Append a type selector (`value`).
    ///
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateKind`] if this builder already holds a type
    /// selector; [`SelectorError::OutOfOrder`] if any later-ordered part has
    /// already been appended.
    pub fn element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(PartKind::Element, value)
    }

    /// Append an ID selector (`#value`).
    ///
    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateKind`] if this builder already holds an ID
    /// selector; [`SelectorError::OutOfOrder`] if any later-ordered part has
    /// already been appended.
    pub fn id(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(PartKind::Id, value)
    }

    /// Append a class selector (`.value`). May be called any number of times.
    ///
    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// # Example
    /// ```
    /// use possum_selector::{Render, id};
    ///
    /// let mut selector = id("main");
    /// let _ = selector.class("container")?.class("editable")?;
    /// assert_eq!(selector.render(), "#main.container.editable");
    /// # Ok::<(), possum_selector::SelectorError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any later-ordered part has already
    /// been appended.
    pub fn class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(PartKind::Class, value)
    }

    /// Append an attribute selector (`[value]`). May be called any number of
    /// times.
    ///
    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// The condition text between the brackets is spliced verbatim; the
    /// builder does not inspect attribute names, match operators, or quoting.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any later-ordered part has already
    /// been appended.
    pub fn attr(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(PartKind::Attribute, value)
    }

    /// Append a pseudo-class selector (`:value`). May be called any number
    /// of times.
    ///
    /// [Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if any later-ordered part has already
    /// been appended.
    pub fn pseudo_class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(PartKind::PseudoClass, value)
    }

    /// Append a pseudo-element selector (`::value`).
    ///
    /// [Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateKind`] if this builder already holds a
    /// pseudo-element. The ordering check cannot fail here since no kind
    /// orders after the pseudo-element.
    pub fn pseudo_element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(PartKind::PseudoElement, value)
    }

    /// Validate and append one part.
    ///
    /// Uniqueness is checked before ordering: a repeated once-only kind
    /// always reports [`SelectorError::DuplicateKind`] even though the
    /// repeat also sits at or before the furthest kind reached. Both checks
    /// run before any mutation.
    fn append(&mut self, kind: PartKind, value: &str) -> Result<&mut Self, SelectorError> {
        if kind.is_unique() && self.seen.contains(kind) {
            return Err(SelectorError::DuplicateKind(kind));
        }
        if self.seen.contains_later_than(kind) {
            return Err(SelectorError::OutOfOrder(kind));
        }
        self.push_part(kind, value);
        Ok(self)
    }

    /// Record `kind` and write its formatted fragment. No validation.
    fn push_part(&mut self, kind: PartKind, value: &str) {
        self.seen.insert(kind);
        self.rendered.push_str(kind.prefix());
        self.rendered.push_str(value);
        self.rendered.push_str(kind.suffix());
    }
}

impl Render for SelectorBuilder {
    fn render(&self) -> String {
        self.rendered.clone()
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}
