//! Rendering options for error groups.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What the `<N> errors occurred:` header counts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CountMode {
    /// Every appended entry, including ones that render no line.
    #[default]
    Appended,
    /// Only entries that render a bullet line.
    Rendered,
}

/// Rendering configuration for an [`ErrorGroup`](crate::ErrorGroup).
///
/// # Examples
///
/// ```
/// use xerror_group::{CountMode, GroupRenderConfig};
///
/// let config = GroupRenderConfig::builder()
///     .count_mode(CountMode::Rendered)
///     .build()
///     .unwrap();
/// assert_eq!(*config.count_mode(), CountMode::Rendered);
/// assert_eq!(config.bullet(), "*");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default, setter(into))]
pub struct GroupRenderConfig {
    /// What the header counts
    #[serde(default)]
    count_mode: CountMode,

    /// Marker in front of each rendered error
    #[serde(default = "default_bullet")]
    bullet: String,
}

fn default_bullet() -> String {
    "*".to_string()
}

impl Default for GroupRenderConfig {
    fn default() -> Self {
        Self {
            count_mode: CountMode::default(),
            bullet: default_bullet(),
        }
    }
}

impl GroupRenderConfig {
    /// Creates a new config builder.
    pub fn builder() -> GroupRenderConfigBuilder {
        GroupRenderConfigBuilder::default()
    }
}
