//! Keeps the auth slice in the browser's local storage so a reload does not log the
//! user out.

use std::str::FromStr as _;

use dioxus::logger::tracing::{info, warn};
use polling_shared::datatypes::{AuthState, Lang};

pub const AUTH_SLICE_KEY: &str = "pollingapp.auth";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<web_sys::Storage> {
    None
}

/// The auth state persisted by an earlier visit, anonymous if there is none or it
/// can not be read.
pub fn restore() -> AuthState {
    let Some(json) = local_storage().and_then(|storage| storage.get_item(AUTH_SLICE_KEY).ok().flatten())
    else {
        info!("No persisted auth slice found");
        return AuthState::Anonymous;
    };
    match AuthState::from_json(&json) {
        Ok(state) => {
            info!("Restored auth slice, authenticated: {}", state.is_authenticated());
            state
        }
        Err(e) => {
            warn!("Ignoring persisted auth slice: {}", e);
            AuthState::Anonymous
        }
    }
}

/// Mirror `state` into local storage. An anonymous state removes the entry.
pub fn persist(state: &AuthState) {
    let Some(storage) = local_storage() else {
        return;
    };
    let result = match state {
        AuthState::Anonymous => storage.remove_item(AUTH_SLICE_KEY),
        AuthState::Authenticated(_) => match state.to_json() {
            Ok(json) => storage.set_item(AUTH_SLICE_KEY, &json),
            Err(e) => {
                warn!("Failed to serialize the auth slice: {}", e);
                return;
            }
        },
    };
    if let Err(e) = result {
        warn!("Failed to update the persisted auth slice: {:?}", e);
    }
}

/// The preferred language of the browser if it is one the app is translated to.
pub fn browser_lang() -> Lang {
    #[cfg(target_arch = "wasm32")]
    let preferred = web_sys::window().and_then(|window| window.navigator().language());
    #[cfg(not(target_arch = "wasm32"))]
    let preferred: Option<String> = None;

    preferred
        .and_then(|tag| Lang::from_str(&tag).ok())
        .unwrap_or_default()
}
