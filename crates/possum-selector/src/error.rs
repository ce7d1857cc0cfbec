//! Errors reported while building a compound selector.

use thiserror::Error;

use crate::part::PartKind;

/// Error raised by a [`SelectorBuilder`](crate::SelectorBuilder) append
/// operation.
///
/// Both variants indicate a malformed call sequence at the append site, not
/// bad input data: the builder is left exactly as it was before the failed
/// call, and retrying the same call can never succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A once-only part kind was appended a second time.
    ///
    /// Only `element`, `id`, and `pseudo-element` are once-only; class,
    /// attribute, and pseudo-class parts may repeat freely.
    #[error(
        "{0} selector already present: element, id, and pseudo-element \
         may occur at most once per compound selector"
    )]
    DuplicateKind(PartKind),

    /// A part was appended after a kind that must follow it.
    #[error(
        "{0} selector out of order: parts of a compound selector follow the order {order}",
        order = PartKind::order_hint()
    )]
    OutOfOrder(PartKind),
}
