use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use super::*;
use crate::runtime::{AppHandle, PortError};

// =============================================================
// Test doubles
// =============================================================

/// Mount token handed out by the fake page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FakeMount;

struct FakePage {
    has_mount: bool,
    fragment: &'static str,
}

impl HostPage for FakePage {
    type Mount = FakeMount;

    fn mount_element(&self, id: &str) -> Option<FakeMount> {
        assert_eq!(id, MOUNT_ELEMENT_ID);
        self.has_mount.then_some(FakeMount)
    }

    fn fragment(&self) -> String {
        self.fragment.to_owned()
    }
}

struct FakeHandle;

impl AppHandle for FakeHandle {
    fn send(&self, _port: &str, _payload: Value) -> Result<(), PortError> {
        Ok(())
    }
}

/// Runtime that records every instantiation it performs.
#[derive(Default)]
struct FakeRuntime {
    fail: bool,
    instantiations: Rc<RefCell<Vec<BootConfig>>>,
}

impl AppRuntime for FakeRuntime {
    type Mount = FakeMount;
    type Handle = FakeHandle;

    fn instantiate(
        &self,
        _mount: FakeMount,
        config: &BootConfig,
    ) -> Result<FakeHandle, InstantiateError> {
        if self.fail {
            return Err(InstantiateError::new("constructor refused"));
        }
        self.instantiations.borrow_mut().push(*config);
        Ok(FakeHandle)
    }
}

// =============================================================
// Successful boot
// =============================================================

#[test]
fn boot_with_mount_present_creates_exactly_one_instance() {
    let runtime = FakeRuntime::default();
    let page = FakePage { has_mount: true, fragment: "" };

    let result = boot(&runtime, &page);

    assert!(result.is_ok());
    assert_eq!(runtime.instantiations.borrow().len(), 1);
}

#[test]
fn dev_fragment_reaches_the_instance_as_dev_mode() {
    let runtime = FakeRuntime::default();
    let page = FakePage { has_mount: true, fragment: "#dev" };

    boot(&runtime, &page).ok().unwrap();

    assert!(runtime.instantiations.borrow()[0].is_dev);
}

#[test]
fn other_fragments_reach_the_instance_as_default_mode() {
    for fragment in ["", "#devx", "#about", "dev"] {
        let runtime = FakeRuntime::default();
        let page = FakePage { has_mount: true, fragment };

        boot(&runtime, &page).ok().unwrap();

        assert!(!runtime.instantiations.borrow()[0].is_dev, "fragment: {fragment:?}");
    }
}

// =============================================================
// Failure modes
// =============================================================

#[test]
fn missing_mount_fails_before_any_instantiation() {
    let runtime = FakeRuntime::default();
    let page = FakePage { has_mount: false, fragment: "#dev" };

    let err = boot(&runtime, &page).err().unwrap();

    assert!(matches!(err, BootError::MissingMount { id: "app" }));
    assert_eq!(runtime.instantiations.borrow().len(), 0);
}

#[test]
fn missing_mount_error_names_the_id() {
    let err = BootError::MissingMount { id: MOUNT_ELEMENT_ID };
    assert_eq!(err.to_string(), "mount element #app not found in document");
}

#[test]
fn instantiation_failure_propagates() {
    let runtime = FakeRuntime { fail: true, ..FakeRuntime::default() };
    let page = FakePage { has_mount: true, fragment: "" };

    let err = boot(&runtime, &page).err().unwrap();

    assert!(matches!(err, BootError::Instantiate(_)));
    assert_eq!(runtime.instantiations.borrow().len(), 0);
}
