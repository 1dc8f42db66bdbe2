//! Test assertions for the lines of an aggregated error.
//!
//! An error group renders as a header line followed by one bullet per error.
//! [`compare`] checks that the bullets are exactly a given set of lines, in
//! any order, and reports the difference when they are not.
//!
//! # Examples
//!
//! ```
//! use xerror_grouptest::compare;
//!
//! let rendered = "2 errors occurred:\n\t* x\n\t* y\n";
//! assert!(compare(&["y", "x"], rendered).is_ok());
//!
//! let mismatch = compare(&["x"], rendered).unwrap_err();
//! assert_eq!(mismatch.to_string(), "1 unexpected error(s):\n\ty\n");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compare;
mod mismatch;

pub use compare::{
    compare, compare_with_bullet, match_group_errors, match_group_errors_with_bullet,
};
pub use mismatch::GroupMismatch;
