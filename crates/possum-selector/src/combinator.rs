//! Selector combination.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use std::fmt;

use possum_common::warning::warn_once;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::Render;

/// The four standard combinator tokens.
///
/// [`combine`](crate::combine) takes its token as opaque text, so this enum
/// is a convenience for callers that want the standard tokens spelled by
/// name rather than as string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors."
    #[strum(serialize = "descendant")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two
    /// compound selectors."
    #[strum(serialize = "child")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two
    /// compound selectors."
    #[strum(serialize = "next-sibling")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two
    /// compound selectors."
    #[strum(serialize = "subsequent-sibling")]
    SubsequentSibling,
}

impl Combinator {
    /// The literal token text of this combinator.
    ///
    /// Note the descendant combinator's token is a single space; see
    /// [`combine`](crate::combine) for how that interacts with the spaces
    /// the join itself inserts.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

/// Two renderable selectors joined by a combinator token.
///
/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a chain of one or more compound selectors
/// separated by combinators."
///
/// The join is rendered eagerly at construction; the value itself is
/// immutable and renders the same text every time. Combined selectors
/// implement [`Render`], so they can be operands of a further
/// [`combine`](crate::combine) call to build arbitrarily nested chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    /// The pre-rendered join of both operands and the token.
    rendered: String,
}

impl CombinedSelector {
    /// Join two rendered operands with `combinator` between single spaces.
    ///
    /// The token is spliced verbatim. A token outside the four standard
    /// combinators is reported once through the warning channel but still
    /// passes through unchanged.
    pub(crate) fn join(first: &impl Render, combinator: &str, second: &impl Render) -> Self {
        if !Combinator::iter().any(|known| known.token() == combinator) {
            warn_once(
                "selector",
                &format!("unrecognized combinator token '{combinator}'"),
            );
        }
        Self {
            rendered: format!("{} {combinator} {}", first.render(), second.render()),
        }
    }
}

impl Render for CombinedSelector {
    fn render(&self) -> String {
        self.rendered.clone()
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}
