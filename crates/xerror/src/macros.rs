//! Formatted-error constructors.

/// Build an [`XError`](crate::XError) from a `%`-verb template.
///
/// Arguments are converted with [`Arg::from`](crate::Arg). The argument at
/// the first `%w` is linked as the cause, and as the wrapped predecessor
/// when it is an `XError`.
///
/// # Examples
///
/// ```
/// use xerror::{XError, xerrorf};
///
/// let inner = XError::with_kind("WRAPPED_ERROR", "not enough rocks");
/// let err = xerrorf!("wrapped custom err: %w", inner);
/// assert_eq!(err.to_string(), "wrapped custom err: Kind: WRAPPED_ERROR | not enough rocks");
/// assert!(err.is_kind("WRAPPED_ERROR"));
/// ```
#[macro_export]
macro_rules! xerrorf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::XError::formatted($template, ::std::vec![$($crate::Arg::from($arg)),*])
    };
}

/// Build a [`NativeError`](crate::NativeError) from a `%`-verb template.
///
/// # Examples
///
/// ```
/// use xerror::{errorf, xerrorf};
///
/// let err = errorf!(
///     "wrapped err: %w",
///     xerrorf!("not enough rocks %d/30 in bucket", 19).as_kind("CUSTOM_ERROR"),
/// );
/// assert_eq!(
///     err.to_string(),
///     "wrapped err: Kind: CUSTOM_ERROR | not enough rocks 19/30 in bucket"
/// );
/// ```
#[macro_export]
macro_rules! errorf {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::NativeError::formatted($template, ::std::vec![$($crate::Arg::from($arg)),*])
    };
}
