use std::fmt;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle returned by [`Listeners::subscribe`].
    pub struct ListenerId;
}

/// Callbacks notified with a shared reference to each event.
pub struct Listeners<E> {
    subs: SlotMap<ListenerId, Box<dyn Fn(&E)>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            subs: SlotMap::with_key(),
        }
    }

    pub fn subscribe(&mut self, f: impl Fn(&E) + 'static) -> ListenerId {
        let id = self.subs.insert(Box::new(f));
        log::trace!("listener {id:?} subscribed ({} total)", self.subs.len());
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let removed = self.subs.remove(id).is_some();
        if removed {
            log::trace!("listener {id:?} unsubscribed");
        }
        removed
    }

    pub fn notify(&self, event: &E) {
        for sub in self.subs.values() {
            sub(event);
        }
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.subs.len())
            .finish()
    }
}
