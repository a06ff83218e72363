//! Fixed identifiers of the host/application contract.

// ── DOM ─────────────────────────────────────────────────────────

/// Id of the element the application instance renders into.
///
/// Must exist in the document at script-execution time; there is no fallback
/// mount strategy.
pub const MOUNT_ELEMENT_ID: &str = "app";

// ── URL ─────────────────────────────────────────────────────────

/// URL fragment (as reported by `location.hash`) that enables development
/// mode. Exact match only; any other fragment means the default mode.
pub const DEV_FRAGMENT: &str = "#dev";

// ── Ports ───────────────────────────────────────────────────────

/// Inbound port notified once per document pointer release, null payload.
pub const PORT_MOUSE_UP: &str = "mouseUp";
