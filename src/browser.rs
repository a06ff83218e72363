//! Browser-side wiring: DOM lookup, console logging, and the document-level
//! mouse-up listener. Requires a browser environment (`hydrate` feature).

use std::cell::Cell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::bootstrap::{self, BootError};
use crate::forward::notify_mouse_up;
use crate::page::HostPage;
use crate::runtime::{AppHandle, AppRuntime};

thread_local! {
    // Page-scoped once-guard; never reset, matching the page lifetime of
    // the instance and its listener.
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// The live document, as consumed by the bootstrap sequence.
pub struct BrowserPage;

impl HostPage for BrowserPage {
    type Mount = web_sys::Element;

    fn mount_element(&self, id: &str) -> Option<web_sys::Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    fn fragment(&self) -> String {
        web_sys::window()
            .map(|w| w.location())
            .and_then(|loc| loc.hash().ok())
            .unwrap_or_default()
    }
}

/// Bootstrap the application against the live document.
///
/// Initializes console logging and the panic hook, runs
/// [`bootstrap::boot`], then registers the single document `mouseup`
/// listener that feeds the instance's port. The listener stays registered
/// for the lifetime of the page; there is no teardown. Repeat calls fail
/// with [`BootError::AlreadyStarted`] without creating a second instance.
///
/// # Errors
///
/// Returns [`BootError`] when the mount element is missing, the runtime's
/// constructor fails, or the application was already started.
pub fn start<R>(runtime: &R) -> Result<(), BootError>
where
    R: AppRuntime<Mount = web_sys::Element>,
    R::Handle: 'static,
{
    if STARTED.with(Cell::get) {
        return Err(BootError::AlreadyStarted);
    }

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let handle = bootstrap::boot(runtime, &BrowserPage)?;
    STARTED.with(|flag| flag.set(true));

    register_mouse_up_listener(handle);
    Ok(())
}

/// Register the one `mouseup` listener on the document, no capture or
/// filtering options. The closure owns the instance handle and is leaked so
/// both live as long as the page.
fn register_mouse_up_listener<H>(handle: H)
where
    H: AppHandle + 'static,
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let cb = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
        notify_mouse_up(&handle);
    }) as Box<dyn FnMut(web_sys::MouseEvent)>);

    if document
        .add_event_listener_with_callback("mouseup", cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::error!("failed to register document mouseup listener");
    }
    cb.forget();
}
