//! Client side store holding the [`AuthState`].
//!
//! Components register a callback with [`AuthStore::subscribe`] and receive every new
//! snapshot. The returned [`Subscription`] unregisters the callback when dropped.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use dioxus::logger::tracing::info;

use crate::datatypes::AuthState;

/// Intents that change the auth state.
///
/// Signing in happens outside the front-end; the store is seeded with the
/// resulting state through [`AuthStore::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Logout,
}

type Listener = Rc<dyn Fn(&AuthState)>;

#[derive(Default)]
struct Inner {
    state: AuthState,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Cheaply clonable handle to the shared auth state.
#[derive(Clone, Default)]
pub struct AuthStore {
    inner: Rc<RefCell<Inner>>,
}

impl PartialEq for AuthStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("state", &self.inner.borrow().state)
            .field("listeners", &self.subscriber_count())
            .finish()
    }
}

impl AuthStore {
    #[must_use]
    pub fn new(state: AuthState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state,
                ..Inner::default()
            })),
        }
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.inner.borrow().state.clone()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Call `listener` with every state the store transitions to.
    #[must_use = "the listener is removed as soon as the subscription is dropped"]
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    /// Apply an action and notify the subscribers.
    ///
    /// Listeners run after the store released its borrow so they may read the
    /// store again.
    pub fn dispatch(&self, action: AuthAction) {
        let (state, listeners) = {
            let mut inner = self.inner.borrow_mut();
            inner.state = match action {
                AuthAction::Logout => {
                    info!("Logging out");
                    AuthState::Anonymous
                }
            };
            let listeners: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (inner.state.clone(), listeners)
        };
        for listener in listeners {
            listener(&state);
        }
    }
}

/// Registration of a listener, removed on drop.
pub struct Subscription {
    id: u64,
    store: Weak<RefCell<Inner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
