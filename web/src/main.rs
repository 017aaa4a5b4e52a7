use std::rc::Rc;

use dioxus::prelude::*;

use dioxus_i18n::prelude::{i18n, use_init_i18n};
use polling_shared::store::AuthStore;
use ui::PollingContext;

mod session;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "web")]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let lang = use_hook(session::browser_lang);
    use_init_i18n(move || ui::translations::config(ui::translations::langid(lang)));
    let context = use_context_provider(|| PollingContext {
        store: AuthStore::new(session::restore()),
        lang: Signal::new(lang),
    });
    let _persistence = use_hook(|| Rc::new(context.store.subscribe(session::persist)));
    let mut language_selector = i18n();
    let selected_lang = context.lang;
    let _language_setter = use_memo(move || {
        language_selector.set_language(ui::translations::langid(selected_lang()));
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<ui::Route> {}
    }
}
