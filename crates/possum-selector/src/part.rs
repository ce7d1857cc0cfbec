//! Selector part kinds and the per-builder bookkeeping set.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//!
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator, and represents a set of simultaneous
//! conditions on a single element."
//!
//! Within one compound selector the part kinds follow a fixed relative
//! order, and the type selector, ID selector, and pseudo-element may each
//! appear at most once. Both rules are enforced by the builder through the
//! kinds and set defined here.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// The kind of one part of a compound selector.
///
/// Declaration order is the canonical order: the variants are listed in the
/// relative order their parts must appear within a compound selector, so the
/// derived `Ord` compares kinds by position and [`PartKind::index`] yields
/// the 0-based position directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `table`, `tr`
    #[strum(serialize = "element")]
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#data`
    #[strum(serialize = "id")]
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.container`, `.draggable`
    #[strum(serialize = "class")]
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// Attribute condition in square brackets.
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    #[strum(serialize = "attribute")]
    Attribute,

    /// [Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// Colon-prefixed condition on element state or structure.
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    #[strum(serialize = "pseudo-class")]
    PseudoClass,

    /// [Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// Double-colon-prefixed abstraction of a sub-part of an element.
    ///
    /// Examples: `::before`, `::first-line`
    #[strum(serialize = "pseudo-element")]
    PseudoElement,
}

impl PartKind {
    /// The 0-based position of this kind in the canonical order.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Element => 0,
            Self::Id => 1,
            Self::Class => 2,
            Self::Attribute => 3,
            Self::PseudoClass => 4,
            Self::PseudoElement => 5,
        }
    }

    /// Whether this kind may appear at most once per compound selector.
    ///
    /// An element has exactly one type, one id, and one rendered
    /// pseudo-element, so those parts cannot meaningfully repeat. Class,
    /// attribute, and pseudo-class conditions stack freely.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text spliced immediately before the part's value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text spliced immediately after the part's value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }

    /// The canonical order as a comma-separated list, for diagnostics.
    #[must_use]
    pub fn order_hint() -> String {
        Self::iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A fixed-size set of [`PartKind`]s backed by a bitmask.
///
/// Bit `n` records whether the kind with canonical index `n` has been
/// appended, which makes the ordering check a single shift-and-test instead
/// of one boolean flag per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct PartSet(u8);

impl PartSet {
    /// The empty set.
    pub(crate) const EMPTY: Self = Self(0);

    /// Whether `kind` is in the set.
    pub(crate) const fn contains(self, kind: PartKind) -> bool {
        (self.0 & (1 << kind.index())) != 0
    }

    /// Add `kind` to the set.
    pub(crate) const fn insert(&mut self, kind: PartKind) {
        self.0 |= 1 << kind.index();
    }

    /// Whether any member has a strictly greater canonical index than `kind`.
    pub(crate) const fn contains_later_than(self, kind: PartKind) -> bool {
        (self.0 >> (kind.index() + 1)) != 0
    }
}
