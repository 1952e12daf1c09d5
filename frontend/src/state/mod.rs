//! Client-side state machines.
//!
//! # State
//!
//! - [`session`] - Login / registration / logout transitions and the credential
//! - [`upload`] - File submission: drag, uploading, result or error
//!
//! The machines are plain values. Components keep them in `RwSignal`s and
//! async workflows reach them through [`Store`], so a workflow that resolves
//! after its view was torn down simply does nothing.

use leptos::{RwSignal, SignalUpdate};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub mod session;
pub mod upload;

pub use session::*;
pub use upload::*;

/// Owner of a state value that may disappear while a request is in flight.
pub trait Store<T> {
    /// Apply `f` if the value still exists; `None` once it is gone.
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: 'static> Store<T> for RwSignal<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> Store<T> for Rc<RefCell<T>> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T> Store<T> for Weak<RefCell<T>> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.upgrade().map(|cell| f(&mut cell.borrow_mut()))
    }
}
