use crate::{PollingContext, create_poll::CreatePoll, header::HeaderView, home::Dashboard, use_auth_state};
use dioxus::{logger::tracing::info, prelude::*};
use dioxus_i18n::t;
use polling_shared::{menu::NavTarget, store::AuthAction};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(HeaderLayout)]
    #[redirect("/", || Route::Dashboard {})]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/create_poll")]
    CreatePoll {},
    // PageNotFound is a catch all route that will match any route and placing the matched segments in the route field
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Dashboard => Self::Dashboard {},
            NavTarget::CreatePoll => Self::CreatePoll {},
        }
    }
}

/// The page header bound to the router and the auth store of the [`PollingContext`].
#[component]
pub fn PageHeader() -> Element {
    let PollingContext { store, lang } = use_context::<PollingContext>();
    let auth = use_auth_state();
    let nav = navigator();

    rsx! {
        HeaderView {
            auth: auth(),
            lang: lang(),
            on_back: move |_| {
                info!("Navigating back");
                nav.go_back();
            },
            on_navigate: move |target: NavTarget| {
                info!("Navigating to {}", target.path());
                nav.push(Route::from(target));
            },
            on_logout: move |_| {
                info!("Logout requested from the page header");
                store.dispatch(AuthAction::Logout);
            },
        }
    }
}

#[component]
pub fn HeaderLayout() -> Element {
    rsx! {
        PageHeader {}
        Outlet::<Route> {}
    }
}

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    let requested = route.join("/");
    rsx! {
        div { class: "container",
            div { class: "section",
                div { class: "notification is-danger",
                    h1 { class: "title", {t!("not-found-title")} }
                    p { class: "subtitle", {t!("not-found-subtitle")} }
                    p { {t!("not-found-route", route: requested)} }
                }
            }
        }
    }
}
