use std::cell::RefCell;

use chrono::{TimeZone as _, Utc};
use dioxus::{dioxus_core::NoOpMutations, prelude::*};
use dioxus_i18n::prelude::use_init_i18n;
use polling_shared::{
    datatypes::{AuthState, Avatar, Lang, User, Username},
    menu::{MenuKey, MenuSelection, NavTarget},
    store::{AuthAction, AuthStore},
};
use ui::{HeaderView, PollingContext, activate_entry, translations, use_auth_state};

#[component]
fn Harness(auth: AuthState, lang: Lang) -> Element {
    use_init_i18n(move || translations::config(translations::langid(lang)));
    rsx! {
        HeaderView {
            auth,
            lang,
            on_back: move |_| {},
            on_navigate: move |_| {},
            on_logout: move |_| {},
        }
    }
}

fn render(auth: AuthState, lang: Lang) -> String {
    let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { auth, lang });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn user(name: &str, avatar: Avatar) -> User {
    User {
        username: Username::try_from(name).expect("valid username"),
        email: "a@x.com".to_string(),
        created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
        avatar,
    }
}

#[test]
fn test_anonymous_renders_empty_placeholder() {
    let html = render(AuthState::Anonymous, Lang::EnUS);
    assert!(html.contains("<div></div>"), "{html}");
    assert!(!html.contains("<nav"));
    assert!(!html.contains("href"));
    assert!(!html.contains("Polling App"));
}

#[test]
fn test_authenticated_renders_navigation_and_profile() {
    let html = render(
        AuthState::Authenticated(user("alice", Avatar::Placeholder)),
        Lang::EnUS,
    );
    assert!(html.contains("<nav"), "{html}");
    assert!(html.contains("position: sticky"));
    assert!(html.contains("Polling App"));
    assert_eq!(html.matches(r#"href="/dashboard""#).count(), 1);
    assert_eq!(html.matches(r#"href="/create_poll""#).count(), 1);
    assert!(html.contains("Home"));
    assert!(html.contains("Create Poll"));
    assert!(html.contains(">alice</span>"));
    assert!(html.contains(">a@x.com</span>"));
    assert!(html.contains("Sunday, January 1, 2023 12:00 AM"));
    assert!(html.contains("Profile"));
    assert!(html.contains("Exit"));
    assert_eq!(html.matches("data-menu-key=").count(), 6);
}

#[test]
fn test_placeholder_avatar_shows_initial() {
    let html = render(
        AuthState::Authenticated(user("alice", Avatar::Placeholder)),
        Lang::EnUS,
    );
    assert!(html.contains("avatar-placeholder"), "{html}");
    assert!(html.contains(">A</span>"));
    assert!(html.contains("background-color: #"));
}

#[test]
fn test_image_avatar_uses_reference() {
    let html = render(
        AuthState::Authenticated(user(
            "bob",
            Avatar::Image("https://img.example/bob.png".to_string()),
        )),
        Lang::EnUS,
    );
    assert!(html.contains(r#"src="https://img.example/bob.png""#), "{html}");
    assert!(!html.contains("avatar-placeholder"));
}

#[test]
fn test_home_is_highlighted_initially() {
    let html = render(
        AuthState::Authenticated(user("alice", Avatar::Placeholder)),
        Lang::EnUS,
    );
    assert_eq!(html.matches("is-active").count(), 1, "{html}");
}

#[test]
fn test_german_header() {
    let html = render(
        AuthState::Authenticated(user("alice", Avatar::Placeholder)),
        Lang::DeDE,
    );
    assert!(html.contains("Umfrage-App"), "{html}");
    assert!(html.contains("Sonntag, 1. Januar 2023 00:00"));
    assert!(html.contains("Verlassen"));
}

#[component]
fn StoreHarness(store: AuthStore) -> Element {
    use_init_i18n(|| translations::config(translations::langid(Lang::EnUS)));
    use_context_provider(|| PollingContext {
        store: store.clone(),
        lang: Signal::new(Lang::EnUS),
    });
    let auth = use_auth_state();
    rsx! {
        HeaderView {
            auth: auth(),
            on_back: move |_| {},
            on_navigate: move |_| {},
            on_logout: move |_| {},
        }
    }
}

#[test]
fn test_header_follows_the_store() {
    let store = AuthStore::new(AuthState::Authenticated(user("alice", Avatar::Placeholder)));
    let mut dom = VirtualDom::new_with_props(
        StoreHarness,
        StoreHarnessProps {
            store: store.clone(),
        },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("<nav"), "{html}");
    assert_eq!(store.subscriber_count(), 1);

    dom.in_runtime(|| store.dispatch(AuthAction::Logout));
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("<div></div>"), "{html}");
    assert!(!html.contains("<nav"));
    assert!(!html.contains("alice"));

    drop(dom);
    assert_eq!(store.subscriber_count(), 0);
}

thread_local! {
    static EFFECTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Activates `keys` in order and renders the key that ends up highlighted.
#[component]
fn ClickHarness(keys: Vec<MenuKey>) -> Element {
    let selection = use_signal(MenuSelection::default);
    let on_navigate = use_callback(|target: NavTarget| {
        EFFECTS.with_borrow_mut(|effects| effects.push(target.path().to_string()));
    });
    let on_logout = use_callback(|()| {
        EFFECTS.with_borrow_mut(|effects| effects.push("logout".to_string()));
    });
    use_hook(|| {
        for key in keys.iter().copied() {
            activate_entry(selection, key, on_navigate, on_logout);
        }
    });
    rsx! { "{selection.peek().selected().as_str()}" }
}

fn click(keys: Vec<MenuKey>) -> (String, Vec<String>) {
    EFFECTS.with_borrow_mut(Vec::clear);
    let mut dom = VirtualDom::new_with_props(ClickHarness, ClickHarnessProps { keys });
    dom.rebuild_in_place();
    let selected = dioxus_ssr::render(&dom);
    (selected, EFFECTS.with_borrow(Clone::clone))
}

#[test]
fn test_menu_clicks_reach_handlers() {
    let (selected, effects) = click(vec![MenuKey::CreatePoll]);
    assert_eq!(selected, "create-poll");
    assert_eq!(effects, vec!["/create_poll"]);

    let (selected, effects) = click(vec![MenuKey::CreatePoll, MenuKey::Home]);
    assert_eq!(selected, "home");
    assert_eq!(effects, vec!["/create_poll", "/dashboard"]);

    let (selected, effects) = click(vec![MenuKey::ProfileUsername, MenuKey::ProfileEmail]);
    assert_eq!(selected, "setting:2");
    assert!(effects.is_empty());
}

#[test]
fn test_exit_dispatches_one_logout() {
    let (selected, effects) = click(vec![MenuKey::Logout]);
    assert_eq!(selected, "setting:4");
    assert_eq!(effects, vec!["logout"]);
}
