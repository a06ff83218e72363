//! The one-time handshake between host page and application runtime.
//!
//! Control flow is a single linear sequence at page load: resolve the mount
//! element, derive the startup configuration from the URL fragment,
//! instantiate the application. No retries anywhere; every failure here is
//! fatal at load time.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::config::BootConfig;
use crate::consts::MOUNT_ELEMENT_ID;
use crate::page::HostPage;
use crate::runtime::{AppRuntime, InstantiateError};

/// Error raised by [`boot`].
#[derive(Debug, thiserror::Error)]
pub enum BootError {
    /// The document contains no element with the fixed mount id. There is
    /// no fallback mount strategy.
    #[error("mount element #{id} not found in document")]
    MissingMount {
        /// The id that was looked up.
        id: &'static str,
    },
    /// The opaque runtime failed to construct the instance.
    #[error(transparent)]
    Instantiate(#[from] InstantiateError),
    /// The application was already started for this page load; exactly one
    /// instance exists per load and re-invocation is not supported.
    #[error("application already started for this page load")]
    AlreadyStarted,
}

/// Run the load-time handshake and return the instance handle.
///
/// Synchronous and linear. On any error no instance exists: the sequence
/// either fails before instantiation ([`BootError::MissingMount`]) or
/// propagates the runtime's own constructor failure with nothing retained.
pub fn boot<R, P>(runtime: &R, page: &P) -> Result<R::Handle, BootError>
where
    R: AppRuntime,
    P: HostPage<Mount = R::Mount>,
{
    let mount = page
        .mount_element(MOUNT_ELEMENT_ID)
        .ok_or(BootError::MissingMount { id: MOUNT_ELEMENT_ID })?;

    let config = BootConfig::from_fragment(&page.fragment());
    log::info!("booting application (is_dev: {})", config.is_dev);

    let handle = runtime.instantiate(mount, &config)?;
    log::info!("application instance created");
    Ok(handle)
}
