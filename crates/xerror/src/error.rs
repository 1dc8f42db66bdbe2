//! The augmented error node.

use crate::native::{Cause, NativeError};
use crate::params::{self, Params};
use crate::template::{self, Arg};
use crate::{Kind, chain};
use serde_json::Value as JsonValue;
use std::error::Error;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// An error carrying a kind, parameters and an optional stack trace.
///
/// `XError` is a shared handle: clones alias one node, and every fluent
/// method mutates that node in place and hands back another handle to it.
/// Each mutation re-renders the node's native view.
///
/// A node built with [`xerrorf!`](crate::xerrorf) whose `%w` argument is
/// itself an `XError` records that argument as its wrapped predecessor. Kind
/// and pin queries walk that link; chain matching walks the native
/// [`source`](Error::source) chain instead.
///
/// # Examples
///
/// ```
/// use xerror::{Kind, XError, chain, xerrorf};
///
/// let inner = XError::with_kind("db_timeout", "query took too long");
/// let outer = xerrorf!("loading user %d: %w", 42, &inner).with_param("retry", 3);
///
/// assert_eq!(
///     outer.to_string(),
///     "Kind: N/A | loading user 42: Kind: DB_TIMEOUT | query took too long, Params: [retry: {3}]"
/// );
/// assert!(outer.is_kind("db_timeout"));
/// assert!(chain::is(&outer, &inner));
///
/// inner.pin();
/// assert_eq!(outer.resolve_kind(), Kind::from("db_timeout"));
/// ```
#[derive(Clone)]
pub struct XError(Arc<Node>);

struct Node {
    wrapped: Option<XError>,
    cause: Option<Cause>,
    state: RwLock<State>,
}

struct State {
    kind: Kind,
    message: String,
    pinned: bool,
    stack_trace: bool,
    params: Option<Params>,
    view: NativeError,
}

impl XError {
    /// Create an unclassified error.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(Kind::NA, message)
    }

    /// Create an error with an explicit kind.
    pub fn with_kind(kind: impl Into<Kind>, message: impl Into<String>) -> Self {
        Self::assemble(kind.into(), message.into(), None, None)
    }

    /// Build an error from a `%`-verb template.
    ///
    /// The message is rendered exactly as [`NativeError::formatted`] renders
    /// it. The argument at the first `%w` verb becomes the native cause and,
    /// when it is an `XError`, the wrapped predecessor. Prefer the
    /// [`xerrorf!`](crate::xerrorf) macro.
    pub fn formatted(template: &str, args: Vec<Arg>) -> Self {
        let message = template::render(template, &args);
        let at_wrap = template::wrapped_arg(template, &args);
        let wrapped = at_wrap.and_then(Arg::augmented);
        let cause = at_wrap.and_then(Arg::cause);
        Self::assemble(Kind::NA, message, wrapped, cause)
    }

    fn assemble(
        kind: Kind,
        message: String,
        wrapped: Option<XError>,
        cause: Option<Cause>,
    ) -> Self {
        let view = NativeError::from_parts(message.clone(), cause.clone(), false);
        let err = Self(Arc::new(Node {
            wrapped,
            cause,
            state: RwLock::new(State {
                kind,
                message,
                pinned: false,
                stack_trace: false,
                params: None,
                view,
            }),
        }));
        err.refresh();
        err
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.0.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.0.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, mutate: impl FnOnce(&mut State)) -> Self {
        mutate(&mut *self.write());
        self.refresh();
        self.clone()
    }

    /// Re-render the native view from current state and return it.
    fn refresh(&self) -> NativeError {
        let kind = self.resolve_kind();
        let mut state = self.write();
        let line = render_line(&kind, &state.message, state.params.as_ref());
        if state.stack_trace || line != state.view.message() {
            state.view = NativeError::from_parts(line, self.0.cause.clone(), state.stack_trace);
        }
        state.view.clone()
    }

    /// Nodes from this one down the wrapped chain.
    fn links(&self) -> impl Iterator<Item = &XError> {
        std::iter::successors(Some(self), |x| x.0.wrapped.as_ref())
    }

    /// Reclassify this error.
    pub fn as_kind(&self, kind: impl Into<Kind>) -> Self {
        let kind = kind.into();
        tracing::trace!(kind = %kind, "Reclassifying error");
        self.update(|state| state.kind = kind)
    }

    /// Replace the message.
    pub fn msg(&self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.update(|state| state.message = message)
    }

    /// Freeze this node's kind as the kind of every chain it ends up in.
    ///
    /// Outer errors wrapping this one resolve to this kind regardless of
    /// their own. There is no way back.
    pub fn pin(&self) -> PinnedError {
        let pinned = self.update(|state| {
            if !state.pinned {
                tracing::debug!(kind = %state.kind, "Pinned error kind");
            }
            state.pinned = true;
        });
        PinnedError(pinned)
    }

    /// Render with a stack trace captured at each re-render.
    pub fn with_stack_trace(&self) -> Self {
        self.update(|state| state.stack_trace = true)
    }

    /// Insert or overwrite one parameter.
    pub fn with_param(&self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        let (key, value) = (key.into(), value.into());
        self.update(|state| {
            state.params.get_or_insert_with(Params::new).insert(key, value);
        })
    }

    /// Merge parameters into the existing ones, or clear them all when
    /// `params` is empty.
    pub fn with_params<I, K, V>(&self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<JsonValue>,
    {
        let incoming: Params = params
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.update(|state| {
            if incoming.is_empty() {
                state.params = None;
            } else {
                state.params.get_or_insert_with(Params::new).extend(incoming);
            }
        })
    }

    /// Whether this node or any node it wraps has exactly this kind.
    ///
    /// Pinning is not consulted.
    pub fn is_kind(&self, kind: impl Into<Kind>) -> bool {
        let kind = kind.into();
        self.links().any(|x| x.read().kind == kind)
    }

    /// Whether this node or any node it wraps is pinned.
    pub fn is_pinned(&self) -> bool {
        self.links().any(|x| x.read().pinned)
    }

    /// The kind of the first pinned node from here inward, else this node's
    /// own kind.
    pub fn resolve_kind(&self) -> Kind {
        self.links()
            .find_map(|x| {
                let state = x.read();
                if state.pinned {
                    Some(state.kind.clone())
                } else {
                    None
                }
            })
            .unwrap_or_else(|| self.kind())
    }

    /// This node's own kind, ignoring pins.
    pub fn kind(&self) -> Kind {
        self.read().kind.clone()
    }

    /// The raw message without kind or parameter decoration.
    pub fn error_msg(&self) -> String {
        self.read().message.clone()
    }

    /// A snapshot of the parameters, if any were set.
    pub fn params(&self) -> Option<Params> {
        self.read().params.clone()
    }

    /// The predecessor recorded at the `%w` position, if any.
    pub fn wrapped(&self) -> Option<&XError> {
        self.0.wrapped.as_ref()
    }

    /// The native view as of the last mutation.
    pub fn to_error(&self) -> NativeError {
        self.read().view.clone()
    }

    /// Whether `target` appears in this error's native view chain, its
    /// captured cause chain, or the chain one level below the view.
    pub fn is(&self, target: &(dyn Error + 'static)) -> bool {
        let view = self.to_error();
        chain::is(&view, target)
            || self.0.cause.as_deref().is_some_and(|cause| chain::is(cause, target))
            || view.source().is_some_and(|below| chain::is(below, target))
    }

    /// Whether both handles refer to the same node.
    pub fn ptr_eq(&self, other: &XError) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn render_line(kind: &Kind, message: &str, params: Option<&Params>) -> String {
    let params = params.filter(|p| !p.is_empty());
    let mut line = match params {
        None if kind.is_na() => message.to_string(),
        _ => format!("Kind: {} | {}", kind.as_str().to_uppercase(), message),
    };
    if let Some(params) = params {
        line.push_str(&format!(", Params: [{}]", params::render(params)));
    }
    line
}

impl fmt::Display for XError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.refresh())
    }
}

impl fmt::Debug for XError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("XError")
            .field("kind", &state.kind)
            .field("message", &state.message)
            .field("pinned", &state.pinned)
            .field("params", &state.params)
            .field("wrapped", &self.0.wrapped)
            .finish()
    }
}

impl Error for XError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.cause.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

/// A pinned error, narrowed to reading.
///
/// Returned by [`XError::pin`]. It still renders, matches and wraps like the
/// node it came from, but exposes no further mutation.
#[derive(Clone, derive_more::Display)]
#[display("{}", _0)]
pub struct PinnedError(XError);

impl PinnedError {
    pub(crate) fn xerror(&self) -> &XError {
        &self.0
    }

    /// The raw message without kind or parameter decoration.
    pub fn error_msg(&self) -> String {
        self.0.error_msg()
    }

    /// The pinned kind.
    pub fn kind(&self) -> Kind {
        self.0.kind()
    }

    /// The native view as of the last mutation.
    pub fn to_error(&self) -> NativeError {
        self.0.to_error()
    }

    /// See [`XError::is`].
    pub fn is(&self, target: &(dyn Error + 'static)) -> bool {
        self.0.is(target)
    }
}

impl fmt::Debug for PinnedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PinnedError").field(&self.0).finish()
    }
}

impl Error for PinnedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}
