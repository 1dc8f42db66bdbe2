//! Plain error values and formatted-error construction.

use crate::template::{self, Arg};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Shared handle to any error captured as the cause of another.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// A plain error: message, optional source, optional stack trace.
///
/// Cloning shares identity, so a clone matches the original under
/// [`chain::is`](crate::chain::is). The alternate format flag (`{:#}`)
/// appends the captured stack trace, if any.
///
/// # Examples
///
/// ```
/// use xerror::{NativeError, chain, errorf};
///
/// let root = NativeError::new("disk full");
/// let err = errorf!("write failed: %w", &root);
///
/// assert_eq!(err.to_string(), "write failed: disk full");
/// assert!(chain::is(&err, &root));
/// assert!(!chain::is(&err, &NativeError::new("disk full")));
/// ```
#[derive(Clone)]
pub struct NativeError(Arc<NativeInner>);

struct NativeInner {
    message: String,
    source: Option<Cause>,
    #[cfg(feature = "backtrace")]
    backtrace: Option<backtrace::Backtrace>,
}

impl NativeError {
    /// Create an error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_parts(message.into(), None, false)
    }

    /// Create an error wrapping `source`.
    pub fn wrap(message: impl Into<String>, source: impl Error + Send + Sync + 'static) -> Self {
        Self::from_parts(message.into(), Some(Arc::new(source)), false)
    }

    /// Build an error from a `%`-verb template.
    ///
    /// The argument at the first `%w` verb, when it is an error, becomes the
    /// source of the new error. Prefer the [`errorf!`](crate::errorf) macro.
    pub fn formatted(template: &str, args: Vec<Arg>) -> Self {
        let message = template::render(template, &args);
        let source = template::wrapped_arg(template, &args).and_then(Arg::cause);
        Self::from_parts(message, source, false)
    }

    pub(crate) fn from_parts(message: String, source: Option<Cause>, capture: bool) -> Self {
        #[cfg(not(feature = "backtrace"))]
        let _ = capture;
        Self(Arc::new(NativeInner {
            message,
            source,
            #[cfg(feature = "backtrace")]
            backtrace: capture.then(backtrace::Backtrace::new),
        }))
    }

    /// The message, without stack trace.
    pub fn message(&self) -> &str {
        &self.0.message
    }

    /// The stack trace captured when this error was built, if any.
    #[cfg(feature = "backtrace")]
    pub fn backtrace(&self) -> Option<&backtrace::Backtrace> {
        self.0.backtrace.as_ref()
    }

    /// Whether both handles refer to the same error.
    pub fn ptr_eq(&self, other: &NativeError) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    #[cfg(feature = "backtrace")]
    fn write_trace(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.backtrace {
            Some(trace) => write!(f, "\n{:?}", trace),
            None => Ok(()),
        }
    }

    #[cfg(not(feature = "backtrace"))]
    fn write_trace(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl fmt::Display for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.message)?;
        if f.alternate() {
            self.write_trace(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for NativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeError")
            .field("message", &self.0.message)
            .field("source", &self.0.source)
            .finish()
    }
}

impl Error for NativeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_links_source() {
        let err = NativeError::wrap("read failed", std::io::Error::other("eof"));
        assert_eq!(err.to_string(), "read failed");
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("eof"));
    }

    #[test]
    fn clones_share_identity() {
        let err = NativeError::new("boom");
        assert!(err.ptr_eq(&err.clone()));
        assert!(!err.ptr_eq(&NativeError::new("boom")));
    }

    #[cfg(feature = "backtrace")]
    #[test]
    fn alternate_flag_appends_captured_trace() {
        let err = NativeError::from_parts("traced".to_string(), None, true);
        assert!(err.backtrace().is_some());
        assert_eq!(err.to_string(), "traced");
        let full = format!("{:#}", err);
        assert!(full.starts_with("traced\n"));
    }

    #[test]
    fn alternate_flag_without_trace_is_plain() {
        let err = NativeError::new("plain");
        assert_eq!(format!("{:#}", err), "plain");
    }
}
