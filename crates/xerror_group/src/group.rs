//! The error aggregator.

use crate::{CountMode, GroupRenderConfig};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

type Entry = Option<Arc<dyn Error + Send + Sync + 'static>>;

/// An ordered collection of independent errors, itself an error.
///
/// Appending never inspects the errors. Rendering emits a count header and
/// one bullet per entry whose message is not empty; entries appended as
/// `None` count toward the header but render nothing.
#[derive(Debug, Clone, Default)]
pub struct ErrorGroup {
    errs: Vec<Entry>,
    config: GroupRenderConfig,
}

impl ErrorGroup {
    /// Create an empty group with the default rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty group with the given rendering.
    pub fn with_config(config: GroupRenderConfig) -> Self {
        Self {
            errs: Vec::new(),
            config,
        }
    }

    /// The rendering configuration.
    pub fn config(&self) -> &GroupRenderConfig {
        &self.config
    }

    /// Append one error.
    pub fn append(&mut self, err: impl Error + Send + Sync + 'static) {
        self.errs.push(Some(Arc::new(err)));
    }

    /// Append a boxed error.
    pub fn append_boxed(&mut self, err: Box<dyn Error + Send + Sync + 'static>) {
        self.errs.push(Some(Arc::from(err)));
    }

    /// Append an optional error. `None` is kept as an empty entry.
    pub fn append_opt<E>(&mut self, err: Option<E>)
    where
        E: Error + Send + Sync + 'static,
    {
        match err {
            Some(err) => self.append(err),
            None => self.errs.push(None),
        }
    }

    /// Append every entry of `other`, in order.
    pub fn append_group(&mut self, other: &ErrorGroup) {
        self.errs.extend(other.errs.iter().cloned());
        tracing::debug!(
            appended = other.errs.len(),
            total = self.errs.len(),
            "Appended error group"
        );
    }

    /// Number of appended entries.
    pub fn len(&self) -> usize {
        self.errs.len()
    }

    /// Whether nothing was appended.
    pub fn is_empty(&self) -> bool {
        self.errs.is_empty()
    }

    /// Appended entries in order; `None` for entries appended as `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<&(dyn Error + Send + Sync + 'static)>> {
        self.errs.iter().map(|entry| entry.as_deref())
    }

    /// `None` when empty, otherwise this group as an error.
    pub fn to_error_or_none(&self) -> Option<&ErrorGroup> {
        (!self.is_empty()).then_some(self)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ErrorGroup> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.errs
            .iter()
            .flatten()
            .map(|err| err.to_string())
            .filter(|message| !message.is_empty())
    }
}

impl fmt::Display for ErrorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.messages().collect();
        let count = match self.config.count_mode() {
            CountMode::Appended => self.errs.len(),
            CountMode::Rendered => messages.len(),
        };
        writeln!(
            f,
            "{} error{} occurred:",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for message in messages {
            writeln!(f, "\t{} {}", self.config.bullet(), message)?;
        }
        Ok(())
    }
}

impl Error for ErrorGroup {}

impl Extend<Box<dyn Error + Send + Sync + 'static>> for ErrorGroup {
    fn extend<T: IntoIterator<Item = Box<dyn Error + Send + Sync + 'static>>>(&mut self, iter: T) {
        for err in iter {
            self.append_boxed(err);
        }
    }
}
