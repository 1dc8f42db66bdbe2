//! Comparing expected lines with a rendered error group.

use crate::GroupMismatch;
use std::error::Error;

const DEFAULT_BULLET: &str = "*";

/// Compare `expected` lines with the bullets of a rendered error group.
///
/// Tabs are removed, the text is trimmed and split on newlines, the header
/// line is dropped and each line loses its leading `* ` bullet. Order and
/// duplicates are ignored on both sides.
///
/// # Errors
///
/// Returns a [`GroupMismatch`] listing expected lines that never appeared and
/// lines that were not expected.
#[track_caller]
pub fn compare<S: AsRef<str>>(expected: &[S], rendered: &str) -> Result<(), GroupMismatch> {
    compare_with_bullet(expected, rendered, DEFAULT_BULLET)
}

/// Like [`compare`], for groups rendered with a custom bullet marker.
///
/// # Errors
///
/// See [`compare`].
#[track_caller]
pub fn compare_with_bullet<S: AsRef<str>>(
    expected: &[S],
    rendered: &str,
    bullet: &str,
) -> Result<(), GroupMismatch> {
    let expected: Vec<&str> = expected.iter().map(|line| line.as_ref()).collect();
    let actual = group_lines(rendered, bullet);
    let actual: Vec<&str> = actual.iter().map(String::as_str).collect();

    let missing = absent_from(&expected, &actual);
    let unexpected = absent_from(&actual, &expected);
    if missing.is_empty() && unexpected.is_empty() {
        return Ok(());
    }

    tracing::debug!(
        missing = missing.len(),
        unexpected = unexpected.len(),
        "Error group lines differ"
    );
    Err(GroupMismatch::new(missing, unexpected))
}

/// Compare `expected` lines with the rendering of `actual`.
///
/// No error means no lines, so only an empty `expected` matches `None`.
///
/// # Errors
///
/// See [`compare`].
#[track_caller]
pub fn match_group_errors<S: AsRef<str>>(
    expected: &[S],
    actual: Option<&(dyn Error + 'static)>,
) -> Result<(), GroupMismatch> {
    match_group_errors_with_bullet(expected, actual, DEFAULT_BULLET)
}

/// Like [`match_group_errors`], for groups rendered with a custom bullet
/// marker.
///
/// # Errors
///
/// See [`compare`].
#[track_caller]
pub fn match_group_errors_with_bullet<S: AsRef<str>>(
    expected: &[S],
    actual: Option<&(dyn Error + 'static)>,
    bullet: &str,
) -> Result<(), GroupMismatch> {
    let rendered = actual.map(|err| err.to_string()).unwrap_or_default();
    compare_with_bullet(expected, &rendered, bullet)
}

fn group_lines(rendered: &str, bullet: &str) -> Vec<String> {
    let marker = format!("{} ", bullet);
    let untabbed = rendered.replace('\t', "");
    let trimmed = untabbed.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .lines()
        .skip(1)
        .map(|line| line.strip_prefix(marker.as_str()).unwrap_or(line).to_string())
        .collect()
}

fn absent_from(lines: &[&str], other: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !other.contains(*line))
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only_has_no_lines() {
        assert!(group_lines("0 errors occurred:\n", "*").is_empty());
        assert!(group_lines("", "*").is_empty());
    }

    #[test]
    fn strips_tabs_and_bullets() {
        assert_eq!(
            group_lines("2 errors occurred:\n\t* x\n\t* y\n", "*"),
            vec!["x", "y"]
        );
    }

    #[test]
    fn strips_custom_bullet_only() {
        assert_eq!(
            group_lines("2 errors occurred:\n\t- x\n\t* y\n", "-"),
            vec!["x", "* y"]
        );
    }
}
