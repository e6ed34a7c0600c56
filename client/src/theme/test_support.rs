//! In-memory stand-ins for the browser environment.

use std::cell::RefCell;
use std::rc::Rc;

use super::mode::ThemeMode;
use super::root::RootMarker;
use super::storage::{PreferenceStore, StorageError};
use super::system::{ColorSchemeSignal, SchemeCallback, Subscription};

#[derive(Debug, Default)]
struct MemoryStoreState {
    value: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// Shared in-memory store; clones see the same value, like one `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<MemoryStoreState>>,
}

impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        let store = Self::default();
        store.state.borrow_mut().value = Some(value.to_owned());
        store
    }

    /// A store whose reads and writes both throw.
    pub fn broken() -> Self {
        let store = Self::default();
        store.set_fail_reads(true);
        store.set_fail_writes(true);
        store
    }

    pub fn value(&self) -> Option<String> {
        self.state.borrow().value.clone()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(StorageError::Read("SecurityError".to_owned()));
        }
        Ok(state.value.clone())
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(StorageError::Write("QuotaExceededError".to_owned()));
        }
        state.value = Some(value.to_owned());
        Ok(())
    }
}

#[derive(Default)]
struct FakeSchemeState {
    dark: bool,
    next_id: usize,
    listeners: Vec<(usize, Rc<dyn Fn(bool)>)>,
}

/// Controllable OS signal.
#[derive(Clone, Default)]
pub struct FakeScheme {
    state: Rc<RefCell<FakeSchemeState>>,
}

impl FakeScheme {
    pub fn new(dark: bool) -> Self {
        let scheme = Self::default();
        scheme.state.borrow_mut().dark = dark;
        scheme
    }

    /// Change the OS preference and notify every live listener.
    pub fn set_dark(&self, dark: bool) {
        let listeners: Vec<Rc<dyn Fn(bool)>> = {
            let mut state = self.state.borrow_mut();
            state.dark = dark;
            state.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl ColorSchemeSignal for FakeScheme {
    fn prefers_dark(&self) -> bool {
        self.state.borrow().dark
    }

    fn watch(&self, callback: SchemeCallback) -> Subscription {
        let id = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, Rc::from(callback)));
            id
        };
        let state = Rc::clone(&self.state);
        Subscription::new(move || state.borrow_mut().listeners.retain(|(l, _)| *l != id))
    }
}

/// Root marker that records every mark.
#[derive(Clone, Debug, Default)]
pub struct RecordingRoot {
    marks: Rc<RefCell<Vec<ThemeMode>>>,
}

impl RecordingRoot {
    pub fn last(&self) -> Option<ThemeMode> {
        self.marks.borrow().last().copied()
    }

    pub fn marks(&self) -> Vec<ThemeMode> {
        self.marks.borrow().clone()
    }
}

impl RootMarker for RecordingRoot {
    fn mark(&self, mode: ThemeMode) {
        self.marks.borrow_mut().push(mode);
    }
}
