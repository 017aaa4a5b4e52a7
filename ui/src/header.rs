//! The sticky page header with navigation and the profile menu.
//!
//! [`HeaderView`] only renders what it is given: the auth state is a prop and every
//! interaction leaves the component through one of its event handlers. The routed
//! wrapper in [`crate::navbar`] connects those handlers to the router and the store.

use dioxus::prelude::*;
use dioxus_i18n::t;
use polling_shared::{
    color::avatar_color,
    datatypes::{AuthState, Avatar, Lang, User},
    format::format_long_datetime,
    menu::{HeaderEffect, MenuKey, MenuSelection, NavTarget},
};

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

const BACK_SVG: Asset = asset!("/assets/icons/back.svg");
const HOME_SVG: Asset = asset!("/assets/icons/home.svg");
const EDIT_SVG: Asset = asset!("/assets/icons/edit.svg");
const USER_SVG: Asset = asset!("/assets/icons/user.svg");
const MAIL_SVG: Asset = asset!("/assets/icons/mail.svg");
const CALENDAR_SVG: Asset = asset!("/assets/icons/calendar.svg");
const LOGOUT_SVG: Asset = asset!("/assets/icons/logout.svg");

const STICKY_STYLE: &str = "position: sticky; top: 0; z-index: 1001;";

#[component]
pub fn HeaderView(
    auth: AuthState,
    #[props(default)] lang: Lang,
    on_back: EventHandler,
    on_navigate: EventHandler<NavTarget>,
    on_logout: EventHandler,
) -> Element {
    let selection = use_signal(MenuSelection::default);

    let activate =
        move |key: MenuKey| activate_entry(selection, key, on_navigate, on_logout);
    let item_class = move |key: MenuKey| {
        if selection.read().is_selected(key) {
            "is-active"
        } else {
            ""
        }
    };

    let AuthState::Authenticated(user) = auth else {
        return rsx! {
            div {}
        };
    };
    let created_at = format_long_datetime(user.created_at, lang);

    rsx! {
        document::Stylesheet { href: HEADER_CSS }
        nav { class: "page-header", style: STICKY_STYLE,
            div { class: "page-header-heading",
                button {
                    class: "page-header-back",
                    title: t!("header-back"),
                    onclick: move |_| on_back.call(()),
                    img { class: "icon", src: BACK_SVG, alt: "" }
                }
                h1 { class: "page-header-title", {t!("header-title")} }
                span { class: "page-header-subtitle" }
            }
            ul { class: "header-menu",
                li {
                    class: item_class(MenuKey::Home),
                    "data-menu-key": MenuKey::Home.as_str(),
                    a {
                        href: NavTarget::Dashboard.path(),
                        onclick: move |evt| {
                            evt.prevent_default();
                            activate(MenuKey::Home);
                        },
                        img { class: "icon", src: HOME_SVG, alt: "" }
                        span { {t!("menu-home")} }
                    }
                }
                li {
                    class: item_class(MenuKey::CreatePoll),
                    "data-menu-key": MenuKey::CreatePoll.as_str(),
                    a {
                        href: NavTarget::CreatePoll.path(),
                        onclick: move |evt| {
                            evt.prevent_default();
                            activate(MenuKey::CreatePoll);
                        },
                        img { class: "icon", src: EDIT_SVG, alt: "" }
                        span { {t!("menu-create-poll")} }
                    }
                }
                li { class: "submenu",
                    div { class: "submenu-title", tabindex: "0",
                        UserAvatar { user: user.clone() }
                    }
                    ul { class: "submenu-popup",
                        li { class: "menu-group",
                            div {
                                class: "menu-group-title",
                                style: "font-weight: bold;",
                                {t!("menu-profile")}
                            }
                            ul {
                                li {
                                    class: item_class(MenuKey::ProfileUsername),
                                    "data-menu-key": MenuKey::ProfileUsername.as_str(),
                                    onclick: move |_| activate(MenuKey::ProfileUsername),
                                    img { class: "icon", src: USER_SVG, alt: "" }
                                    span { class: "profile-username", "{user.username}" }
                                }
                                li {
                                    class: item_class(MenuKey::ProfileEmail),
                                    "data-menu-key": MenuKey::ProfileEmail.as_str(),
                                    onclick: move |_| activate(MenuKey::ProfileEmail),
                                    img { class: "icon", src: MAIL_SVG, alt: "" }
                                    span { class: "profile-email", "{user.email}" }
                                }
                                li {
                                    class: item_class(MenuKey::ProfileCreatedAt),
                                    "data-menu-key": MenuKey::ProfileCreatedAt.as_str(),
                                    onclick: move |_| activate(MenuKey::ProfileCreatedAt),
                                    img { class: "icon", src: CALENDAR_SVG, alt: "" }
                                    span { class: "profile-created-at", "{created_at}" }
                                }
                            }
                        }
                        li { class: "menu-group",
                            div {
                                class: "menu-group-title",
                                style: "font-weight: bold;",
                                {t!("menu-logout")}
                            }
                            ul {
                                li {
                                    class: item_class(MenuKey::Logout),
                                    "data-menu-key": MenuKey::Logout.as_str(),
                                    onclick: move |_| activate(MenuKey::Logout),
                                    img { class: "icon", src: LOGOUT_SVG, alt: "" }
                                    span { {t!("menu-exit")} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Highlight the entry `key` and forward the effect activating it has.
pub fn activate_entry(
    mut selection: Signal<MenuSelection>,
    key: MenuKey,
    on_navigate: EventHandler<NavTarget>,
    on_logout: EventHandler,
) {
    let effect = selection.write().activate(key);
    match effect {
        Some(HeaderEffect::Navigate(target)) => on_navigate.call(target),
        Some(HeaderEffect::Logout) => on_logout.call(()),
        None => {}
    }
}

/// Circular badge showing the avatar image of a user or, without one, a coloured
/// circle with the initial of the username.
#[component]
pub fn UserAvatar(user: User) -> Element {
    match &user.avatar {
        Avatar::Placeholder => {
            let color = avatar_color(&user.username);
            let initial = user.username.initial();
            rsx! {
                span {
                    class: "avatar avatar-placeholder",
                    style: "background-color: {color};",
                    "{initial}"
                }
            }
        }
        Avatar::Image(src) => rsx! {
            img {
                class: "avatar",
                src: "{src}",
                alt: t!("avatar-alt", username: user.username.to_string()),
            }
        },
    }
}
