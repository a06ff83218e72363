//! Injected seam for the opaque application runtime.
//!
//! The application itself is compiled elsewhere and its internals are not
//! visible to the host. The host only needs two capabilities from it:
//! construct one instance against a mount target, and push messages into
//! named inbound ports on the resulting handle. Modeling those as traits
//! keeps the bootstrap sequence independent of whatever rendering or
//! state-management technology backs the real application.

#[cfg(test)]
#[path = "runtime_test.rs"]
mod runtime_test;

use serde_json::Value;

use crate::config::BootConfig;

/// Error reported by the opaque runtime when instance construction fails.
#[derive(Debug, thiserror::Error)]
#[error("application instantiation failed: {reason}")]
pub struct InstantiateError {
    /// Cause as reported by the runtime.
    pub reason: String,
}

impl InstantiateError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Error returned by a rejected port push.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The instance exposes no inbound port with this name.
    #[error("unknown inbound port: {0}")]
    UnknownPort(String),
    /// The port exists but refused the payload.
    #[error("port {port} rejected payload: {reason}")]
    Rejected {
        /// Name of the refusing port.
        port: String,
        /// Cause as reported by the instance.
        reason: String,
    },
}

/// Handle to a live application instance.
///
/// The handle is the host's only interaction surface after construction:
/// one-way pushes into named inbound ports. The port set is an extensible
/// named-channel surface; [`crate::consts::PORT_MOUSE_UP`] is the one the
/// host drives itself.
pub trait AppHandle {
    /// Push one message into the named inbound port.
    ///
    /// Fire-and-forget from the host's perspective: the instance queues the
    /// message on its internal event queue and returns nothing to the
    /// caller. Pushes are delivered in call order.
    fn send(&self, port: &str, payload: Value) -> Result<(), PortError>;
}

/// The externally supplied application runtime.
pub trait AppRuntime {
    /// Mount target the instance renders into.
    type Mount;
    /// Handle to a constructed instance.
    type Handle: AppHandle;

    /// Create one application instance bound to `mount`.
    ///
    /// Synchronous; called exactly once per page load.
    fn instantiate(
        &self,
        mount: Self::Mount,
        config: &BootConfig,
    ) -> Result<Self::Handle, InstantiateError>;
}
