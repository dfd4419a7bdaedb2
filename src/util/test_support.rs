//! In-memory stand-ins for browser objects, shared by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::util::dom::{ActivateHandler, ThemeRoot, ToggleControl};
use crate::util::storage::{PreferenceStore, StorageError};

/// Root element fake; clones share the same marker.
#[derive(Clone, Debug, Default)]
pub struct FakeRoot {
    dark: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl FakeRoot {
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ThemeRoot for FakeRoot {
    fn is_dark(&self) -> bool {
        self.dark.get()
    }

    fn set_dark(&self, dark: bool) {
        self.dark.set(dark);
        self.writes.set(self.writes.get() + 1);
    }
}

/// Store whose every access fails, like a locked-down `localStorage`.
#[derive(Debug, Default)]
pub struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Access("SecurityError".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[derive(Default)]
struct ControlInner {
    checked: Option<bool>,
    handler: Option<ActivateHandler>,
}

/// Toggle control fake that records its state and lets tests "click" it.
#[derive(Clone, Default)]
pub struct FakeControl {
    inner: Rc<RefCell<ControlInner>>,
}

impl FakeControl {
    pub fn checked(&self) -> Option<bool> {
        self.inner.borrow().checked
    }

    pub fn is_bound(&self) -> bool {
        self.inner.borrow().handler.is_some()
    }

    /// Fire the registered handler, as a click or change would.
    pub fn activate(&self) {
        let handler = self.inner.borrow_mut().handler.take();
        if let Some(mut handler) = handler {
            handler();
            self.inner.borrow_mut().handler = Some(handler);
        }
    }
}

impl ToggleControl for FakeControl {
    fn set_checked(&self, checked: bool) {
        self.inner.borrow_mut().checked = Some(checked);
    }

    fn on_activate(&self, handler: ActivateHandler) {
        self.inner.borrow_mut().handler = Some(handler);
    }
}
