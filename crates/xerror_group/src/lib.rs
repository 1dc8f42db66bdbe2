//! Aggregate independent errors into one error.
//!
//! [`ErrorGroup`] collects errors of any type in the order they were appended
//! and renders them as one multi-line error:
//!
//! ```text
//! 2 errors occurred:
//! 	* first failure
//! 	* second failure
//! ```
//!
//! # Examples
//!
//! ```
//! use xerror_group::ErrorGroup;
//!
//! fn validate(names: &[&str]) -> Result<(), ErrorGroup> {
//!     let mut group = ErrorGroup::new();
//!     for name in names {
//!         if name.is_empty() {
//!             group.append(std::io::Error::other("empty name"));
//!         }
//!     }
//!     group.into_result()
//! }
//!
//! assert!(validate(&["a", "b"]).is_ok());
//! let err = validate(&["a", ""]).unwrap_err();
//! assert_eq!(err.to_string(), "1 error occurred:\n\t* empty name\n");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod group;

pub use config::{
    CountMode, GroupRenderConfig, GroupRenderConfigBuilder, GroupRenderConfigBuilderError,
};
pub use group::ErrorGroup;
