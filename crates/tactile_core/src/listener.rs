//! Observer registry
//!
//! Widgets expose settlement and decision events through [`Listeners`]; the
//! host subscribes with a closure and keeps the returned [`ListenerId`] to
//! unsubscribe later. Everything runs on the UI thread, so listeners are
//! `FnMut` and need not be `Send`.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`Listeners::subscribe`]
    pub struct ListenerId;
}

type Callback<E> = Box<dyn FnMut(&E)>;

/// A set of callbacks notified with `&E`
pub struct Listeners<E> {
    callbacks: SlotMap<ListenerId, Callback<E>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            callbacks: SlotMap::with_key(),
        }
    }

    /// Register a callback
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&E) + 'static,
    {
        self.callbacks.insert(Box::new(callback))
    }

    /// Remove a callback; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.callbacks.remove(id).is_some()
    }

    /// Notify every registered callback
    pub fn emit(&mut self, event: &E) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}
