//! Classified, parameterised, chain-aware error values.
//!
//! [`XError`] is an error node carrying a [`Kind`], structured parameters and
//! an optional stack trace. Nodes wrap one another through `%`-verb templates
//! ([`xerrorf!`]), and stay matchable through the ordinary
//! [`source`](std::error::Error::source) chain with [`chain::is`].
//!
//! # Rendering
//!
//! - Unclassified, no parameters: the message alone.
//! - Otherwise: `Kind: <KIND> | <message>`, followed by
//!   `, Params: [key: {value} | ...]` when parameters are set.
//! - With [`XError::with_stack_trace`], a captured stack trace follows on the
//!   next lines.
//!
//! # Pinning
//!
//! [`XError::pin`] freezes a node's kind: every error wrapping it resolves to
//! the pinned kind ([`XError::resolve_kind`]) and renders with it.
//!
//! # Examples
//!
//! ```
//! use xerror::{Kind, XError, chain, errorf, xerrorf};
//!
//! const STORAGE: Kind = Kind::from_static("storage");
//!
//! let root = XError::with_kind(STORAGE, "disk full").pin();
//! let err = xerrorf!("saving report %q: %w", "q3", &root).as_kind("report");
//!
//! assert_eq!(err.resolve_kind(), STORAGE);
//! assert!(err.is_pinned());
//! assert!(chain::is(&errorf!("request failed: %w", &err), &root));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chain;
mod error;
mod kind;
mod macros;
mod native;
mod params;
mod template;

pub use error::{PinnedError, XError};
pub use kind::Kind;
pub use native::{Cause, NativeError};
pub use params::Params;
pub use template::{Arg, wrap_verb_position};
