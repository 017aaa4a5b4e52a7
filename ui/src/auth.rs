use std::rc::Rc;

use dioxus::prelude::*;
use polling_shared::datatypes::AuthState;

use crate::PollingContext;

/// Subscribe the calling component to the auth store.
///
/// The returned signal follows every state the store transitions to, so the
/// component rerenders on login and logout. The subscription is released when the
/// component unmounts.
pub fn use_auth_state() -> Signal<AuthState> {
    let PollingContext { store, .. } = use_context::<PollingContext>();
    let state = use_signal(|| store.snapshot());
    let _subscription = use_hook(move || {
        Rc::new(store.subscribe(move |next| {
            let mut state = state;
            if *state.peek() != *next {
                state.set(next.clone());
            }
        }))
    });
    state
}
