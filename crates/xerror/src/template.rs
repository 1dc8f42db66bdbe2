//! `%`-verb templates with a `%w` wrap verb.
//!
//! Each verb consumes one [`Arg`]. `%w` marks the argument the built error
//! wraps; only the first `%w` links a source. `%q` quotes its argument, `%+v`
//! renders an error argument with its stack trace, every other verb renders
//! the argument's `Display`. Flags, width and precision are accepted and
//! ignored. `%%` is a literal percent sign.

use crate::native::{Cause, NativeError};
use crate::{Kind, PinnedError, XError};
use std::error::Error;
use std::fmt::Display;
use std::sync::Arc;

const VERB_FLAGS: &str = "+-# 0123456789.";

/// One template argument.
#[derive(Debug, Clone)]
pub enum Arg {
    /// A plain value, already rendered.
    Value(String),
    /// An augmented error, linked as the wrapped predecessor when it sits at
    /// the wrap verb.
    Augmented(XError),
    /// Any other error.
    Native(Cause),
}

impl Arg {
    /// Wrap any displayable value.
    pub fn display(value: impl Display) -> Self {
        Self::Value(value.to_string())
    }

    /// Wrap any error so it can sit at a `%w` verb.
    pub fn error(err: impl Error + Send + Sync + 'static) -> Self {
        Self::Native(Arc::new(err))
    }

    /// The error carried by this argument, if any.
    pub(crate) fn cause(&self) -> Option<Cause> {
        match self {
            Self::Value(_) => None,
            Self::Augmented(x) => Some(Arc::new(x.clone())),
            Self::Native(err) => Some(Arc::clone(err)),
        }
    }

    /// The augmented error carried by this argument, if any.
    pub(crate) fn augmented(&self) -> Option<XError> {
        match self {
            Self::Augmented(x) => Some(x.clone()),
            _ => None,
        }
    }

    fn render(&self, verb: char, plus: bool) -> String {
        match (self, verb) {
            (Self::Value(value), 'w') => format!("%!w({})", value),
            (Self::Value(value), 'q') => format!("{:?}", value),
            (Self::Value(value), _) => value.clone(),
            (_, 'q') => format!("{:?}", self.render_error(false)),
            (_, 'v') => self.render_error(plus),
            _ => self.render_error(false),
        }
    }

    fn render_error(&self, alternate: bool) -> String {
        match (self, alternate) {
            (Self::Augmented(x), true) => format!("{:#}", x),
            (Self::Augmented(x), false) => x.to_string(),
            (Self::Native(err), true) => format!("{:#}", err),
            (Self::Native(err), false) => err.to_string(),
            (Self::Value(value), _) => value.clone(),
        }
    }
}

macro_rules! value_args {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Value(value.to_string())
                }
            }
        )*
    };
}

value_args!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    String, &str, &String, Kind, &Kind,
);

impl From<XError> for Arg {
    fn from(err: XError) -> Self {
        Self::Augmented(err)
    }
}

impl From<&XError> for Arg {
    fn from(err: &XError) -> Self {
        Self::Augmented(err.clone())
    }
}

impl From<PinnedError> for Arg {
    fn from(err: PinnedError) -> Self {
        Self::Augmented(err.xerror().clone())
    }
}

impl From<&PinnedError> for Arg {
    fn from(err: &PinnedError) -> Self {
        Self::Augmented(err.xerror().clone())
    }
}

impl From<NativeError> for Arg {
    fn from(err: NativeError) -> Self {
        Self::Native(Arc::new(err))
    }
}

impl From<&NativeError> for Arg {
    fn from(err: &NativeError) -> Self {
        Self::Native(Arc::new(err.clone()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    Verb { verb: char, plus: bool },
    NoVerb,
}

fn tokenize(template: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            tokens.push(Token::Literal(c));
            continue;
        }
        if chars.next_if_eq(&'%').is_some() {
            tokens.push(Token::Literal('%'));
            continue;
        }
        let mut plus = false;
        while let Some(flag) = chars.next_if(|c| VERB_FLAGS.contains(*c)) {
            plus |= flag == '+';
        }
        match chars.next() {
            Some(verb) => tokens.push(Token::Verb { verb, plus }),
            None => tokens.push(Token::NoVerb),
        }
    }
    tokens
}

/// 1-based index of the argument consumed by the first `%w` verb.
///
/// # Examples
///
/// ```
/// use xerror::wrap_verb_position;
///
/// assert_eq!(wrap_verb_position("wrapped err: %w"), Some(1));
/// assert_eq!(wrap_verb_position("too many buckets: %d/%d, wrapped err: %w"), Some(3));
/// assert_eq!(wrap_verb_position("100%% sure: %s"), None);
/// ```
pub fn wrap_verb_position(template: &str) -> Option<usize> {
    tokenize(template)
        .into_iter()
        .filter_map(|token| match token {
            Token::Verb { verb, .. } => Some(verb),
            _ => None,
        })
        .position(|verb| verb == 'w')
        .map(|index| index + 1)
}

/// The argument sitting at the first `%w` verb.
pub(crate) fn wrapped_arg<'a>(template: &str, args: &'a [Arg]) -> Option<&'a Arg> {
    wrap_verb_position(template).and_then(|position| args.get(position - 1))
}

/// Substitute `args` into `template`.
pub(crate) fn render(template: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    for token in tokenize(template) {
        match token {
            Token::Literal(c) => out.push(c),
            Token::NoVerb => out.push_str("%!(NOVERB)"),
            Token::Verb { verb, plus } => match remaining.next() {
                Some(arg) => out.push_str(&arg.render(verb, plus)),
                None => out.push_str(&format!("%!{}(MISSING)", verb)),
            },
        }
    }

    let extra: Vec<String> = remaining.map(|arg| arg.render('v', false)).collect();
    if !extra.is_empty() {
        out.push_str(&format!("%!(EXTRA {})", extra.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_verb_alone() {
        assert_eq!(wrap_verb_position("wrapped err: %w"), Some(1));
    }

    #[test]
    fn wrap_verb_after_other_verbs() {
        assert_eq!(
            wrap_verb_position("too many buckets: %d/%d, wrapped err: %w"),
            Some(3)
        );
    }

    #[test]
    fn wrap_verb_between_other_verbs() {
        assert_eq!(
            wrap_verb_position("service proc: %s failed, wrapped err: %w, lost %d"),
            Some(2)
        );
    }

    #[test]
    fn first_wrap_verb_wins() {
        assert_eq!(wrap_verb_position("%s: %w then %w"), Some(2));
    }

    #[test]
    fn flagged_verbs_still_count() {
        assert_eq!(wrap_verb_position("%+v %5.2f %w"), Some(3));
    }

    #[test]
    fn no_wrap_verb() {
        assert_eq!(wrap_verb_position("no wrapped errors here"), None);
        assert_eq!(wrap_verb_position("dangling %"), None);
    }

    #[test]
    fn renders_values_in_order() {
        let args = vec![Arg::from("bucket"), Arg::from(19), Arg::from(30)];
        assert_eq!(
            render("not enough rocks in %s: %d/%d", &args),
            "not enough rocks in bucket: 19/30"
        );
    }

    #[test]
    fn literal_percent() {
        assert_eq!(render("100%% done", &[]), "100% done");
    }

    #[test]
    fn quote_verb() {
        assert_eq!(render("name %q", &[Arg::from("bob")]), "name \"bob\"");
    }

    #[test]
    fn missing_and_extra_arguments() {
        assert_eq!(render("a %d b %s", &[Arg::from(1)]), "a 1 b %!s(MISSING)");
        assert_eq!(
            render("only %d", &[Arg::from(1), Arg::from(2), Arg::from("x")]),
            "only 1%!(EXTRA 2, x)"
        );
    }

    #[test]
    fn trailing_percent() {
        assert_eq!(render("oops %", &[]), "oops %!(NOVERB)");
    }

    #[test]
    fn wrap_verb_with_value_is_flagged() {
        let args = vec![Arg::from(5)];
        assert_eq!(render("bad %w", &args), "bad %!w(5)");
        assert!(wrapped_arg("bad %w", &args).and_then(Arg::cause).is_none());
    }

    #[test]
    fn wrapped_arg_out_of_range() {
        assert!(wrapped_arg("lost %w", &[]).is_none());
    }
}
