#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEV_FRAGMENT;

/// Startup configuration passed to the application instance at creation.
///
/// Constructed synchronously at load time from the current URL, consumed
/// exactly once by the instance constructor, never mutated afterwards. The
/// serialized shape is the documented contract surface between host and
/// instance: `{"isDev": <bool>}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootConfig {
    /// Development mode, enabled by loading the page with the dev fragment.
    pub is_dev: bool,
}

impl BootConfig {
    /// Derive the configuration from the page URL's fragment identifier.
    ///
    /// Pure and side-effect-free. Only the exact literal [`DEV_FRAGMENT`]
    /// enables development mode; any other fragment (including none) yields
    /// the default.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        Self { is_dev: fragment == DEV_FRAGMENT }
    }
}
