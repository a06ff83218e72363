//! Event forwarding from the host page into the application instance.

#[cfg(test)]
#[path = "forward_test.rs"]
mod forward_test;

use serde_json::Value;

use crate::consts::PORT_MOUSE_UP;
use crate::runtime::AppHandle;

/// Forward one pointer-release event into the instance's mouse-up port.
///
/// Called once per physical event; pushes arrive in dispatch order because
/// both the listener and the push run synchronously on the page's event
/// loop. Fire-and-forget: a rejected push is logged and dropped, isolated
/// to this single event, and never tears down the listener or affects later
/// events.
pub fn notify_mouse_up(handle: &impl AppHandle) {
    if let Err(err) = handle.send(PORT_MOUSE_UP, Value::Null) {
        log::error!("mouse-up forward dropped: {err}");
    }
}
