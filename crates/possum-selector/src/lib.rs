//! Typed, chainable construction of CSS selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selector construction** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - type, ID, class, attribute, pseudo-class, and pseudo-element parts
//!   - at-most-once enforcement for type, ID, and pseudo-element parts
//!   - canonical part ordering (element, id, class, attribute,
//!     pseudo-class, pseudo-element)
//!
//! - **Selector combination** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - descendant, child, next-sibling, and subsequent-sibling combinators
//!   - arbitrary nesting: a combined selector is itself a combine operand
//!
//! # Not Implemented
//!
//! - Selector parsing (this crate only constructs; it never reads CSS)
//! - Specificity calculation
//! - Validation of part value text: values are spliced verbatim, so the
//!   caller is responsible for escaping
//! - DOM matching
//!
//! # Example
//!
//! ```
//! use possum_selector::{Render, combine, element};
//!
//! let mut item = element("div");
//! let _ = item.id("main")?.class("container")?.class("draggable")?;
//!
//! let mut table = element("table");
//! let _ = table.id("data")?;
//! let mut row = element("tr");
//! let _ = row.pseudo_class("nth-of-type(even)")?;
//! let mut cell = element("td");
//! let _ = cell.pseudo_class("nth-of-type(even)")?;
//!
//! let striped = combine(&combine(&table, "~", &row), " ", &cell);
//! let selector = combine(&item, "+", &striped);
//! assert_eq!(
//!     selector.render(),
//!     "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)",
//! );
//! # Ok::<(), possum_selector::SelectorError>(())
//! ```

/// Compound-selector state machine and append validation.
pub mod builder;
/// Combinator tokens and combined selectors per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Append errors.
pub mod error;
/// Selector part kinds in canonical order.
pub mod part;

// Re-exports for convenience
pub use builder::SelectorBuilder;
pub use combinator::{Combinator, CombinedSelector};
pub use error::SelectorError;
pub use part::PartKind;

/// A selector value that renders to its CSS text form.
///
/// Implemented by [`SelectorBuilder`] and [`CombinedSelector`]. [`combine`]
/// accepts any implementor, so builders and previously combined selectors
/// mix freely as operands.
pub trait Render {
    /// Render the selector to CSS text.
    ///
    /// Rendering is read-only and idempotent: with no intervening append it
    /// returns identical strings, and it may be called at any point during
    /// construction to observe the text accumulated so far.
    #[must_use]
    fn render(&self) -> String;
}

/// Start a compound selector with a type selector (`value`).
///
/// # Example
/// ```
/// use possum_selector::{Render, element};
///
/// let mut selector = element("a");
/// let _ = selector.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
/// assert_eq!(selector.render(), r#"a[href$=".png"]:focus"#);
/// # Ok::<(), possum_selector::SelectorError>(())
/// ```
#[must_use]
pub fn element(value: &str) -> SelectorBuilder {
    SelectorBuilder::start(PartKind::Element, value)
}

/// Start a compound selector with an ID selector (`#value`).
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::start(PartKind::Id, value)
}

/// Start a compound selector with a class selector (`.value`).
#[must_use]
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::start(PartKind::Class, value)
}

/// Start a compound selector with an attribute selector (`[value]`).
#[must_use]
pub fn attr(value: &str) -> SelectorBuilder {
    SelectorBuilder::start(PartKind::Attribute, value)
}

/// Start a compound selector with a pseudo-class selector (`:value`).
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::start(PartKind::PseudoClass, value)
}

/// Start a compound selector with a pseudo-element selector (`::value`).
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::start(PartKind::PseudoElement, value)
}

/// Join two selectors with a combinator token.
///
/// The result renders as `first.render() + " " + combinator + " " +
/// second.render()`: exactly one space on each side of the token, whatever
/// the token contains. The descendant combinator's token is itself a single
/// space ([`Combinator::token`]), so a descendant join renders three
/// consecutive spaces. That output is part of the rendering contract and
/// must stay byte-exact.
///
/// The token is not validated; unknown tokens pass through verbatim, with a
/// one-shot diagnostic logged for anything outside the four standard tokens.
/// Operands are only read, never consumed: they stay valid and can be
/// combined again or appended to afterwards.
///
/// # Example
/// ```
/// use possum_selector::{Combinator, Render, combine, element, id};
///
/// let nav = id("nav");
/// let link = element("a");
/// let child = combine(&nav, Combinator::Child.token(), &link);
/// assert_eq!(child.render(), "#nav > a");
///
/// // Combined selectors nest as operands.
/// let mut hovered = element("li");
/// let _ = hovered.pseudo_class("hover")?;
/// assert_eq!(combine(&child, "~", &hovered).render(), "#nav > a ~ li:hover");
/// # Ok::<(), possum_selector::SelectorError>(())
/// ```
#[must_use]
pub fn combine(first: &impl Render, combinator: &str, second: &impl Render) -> CombinedSelector {
    CombinedSelector::join(first, combinator, second)
}
