//! Walking and matching `source()` chains.

use crate::{NativeError, PinnedError, XError};
use std::error::Error;

/// Every error in the chain, starting with `err` itself.
pub fn iter<'a>(err: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

/// Whether `target` appears anywhere in `err`'s chain.
///
/// A node matches when it is the very same value as `target`, when both are
/// handles to the same [`XError`] or [`NativeError`], or when the node is an
/// `XError` whose current native view is `target`.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
/// use xerror::{XError, chain, errorf, xerrorf};
///
/// static NOT_FOUND: LazyLock<XError> = LazyLock::new(|| XError::new("not found"));
///
/// let err = errorf!("handler: %w", xerrorf!("lookup: %w", &*NOT_FOUND));
/// assert!(chain::is(&err, &*NOT_FOUND));
/// assert!(!chain::is(&err, &XError::new("not found")));
/// ```
pub fn is(err: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    iter(err).any(|node| same(node, target))
}

/// The first error of type `T` in `err`'s chain.
pub fn find<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    iter(err).find_map(|node| node.downcast_ref::<T>())
}

fn same(node: &(dyn Error + 'static), target: &(dyn Error + 'static)) -> bool {
    if std::ptr::addr_eq(node, target) {
        return true;
    }
    if let Some(x) = augmented(node) {
        if let Some(t) = augmented(target) {
            return x.ptr_eq(t);
        }
        if let Some(t) = target.downcast_ref::<NativeError>() {
            return x.to_error().ptr_eq(t);
        }
        return false;
    }
    match (node.downcast_ref::<NativeError>(), target.downcast_ref::<NativeError>()) {
        (Some(n), Some(t)) => n.ptr_eq(t),
        _ => false,
    }
}

fn augmented<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a XError> {
    err.downcast_ref::<XError>()
        .or_else(|| err.downcast_ref::<PinnedError>().map(PinnedError::xerror))
}
