//! # appshell
//!
//! Host bootstrap layer for a browser single-page application whose actual
//! logic ships as a separately compiled, opaque runtime. The host does
//! exactly four things at page load: locate the mount element, derive the
//! startup configuration from the URL fragment, instantiate the application
//! once, and forward document mouse-up events into the instance's inbound
//! port.
//!
//! All decision logic lives in plain modules that compile and test natively;
//! everything that touches the DOM sits behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Fixed contract identifiers (mount id, dev fragment, port names) |
//! | [`config`] | Startup configuration and fragment derivation |
//! | [`runtime`] | Injected seam for the opaque application runtime |
//! | [`page`] | Host-page seam (mount lookup, fragment read) |
//! | [`bootstrap`] | The one-time load handshake |
//! | [`forward`] | Mouse-up forwarding into the instance port |
//! | `browser` | DOM wiring (`hydrate` only) |

pub mod bootstrap;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod consts;
pub mod forward;
pub mod page;
pub mod runtime;
