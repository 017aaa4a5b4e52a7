//! This crate contains all shared UI for the workspace.

mod auth;
pub mod create_poll;
pub mod header;
pub mod home;
pub mod navbar;
pub mod translations;

pub use auth::use_auth_state;
use dioxus::signals::Signal;
pub use header::{HeaderView, UserAvatar, activate_entry};
pub use navbar::{PageHeader, Route};
use polling_shared::{datatypes::Lang, store::AuthStore};

#[derive(Clone, Default)]
pub struct PollingContext {
    pub store: AuthStore,
    pub lang: Signal<Lang>,
}
