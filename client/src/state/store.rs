//! Access to a shared state value from async lifecycle code.
//!
//! Components hand the lifecycle an `RwSignal`; tests hand it a `RefCell`.
//! Both calls return `None` once the underlying value is gone (a disposed
//! signal after the view unmounts), which turns late timers into no-ops.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

/// Read/modify handle to a piece of widget state.
pub trait StateStore<S> {
    /// Mutate the value, notifying subscribers.
    fn modify<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R>;

    /// Read the value without subscribing.
    fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
}

impl<S: Send + Sync + 'static> StateStore<S> for RwSignal<S> {
    fn modify<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<S> StateStore<S> for RefCell<S> {
    fn modify<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl<S, T: StateStore<S>> StateStore<S> for Rc<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        (**self).modify(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        (**self).inspect(f)
    }
}
