use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn CreatePoll() -> Element {
    rsx! {
        section { class: "section",
            h1 { class: "title", {t!("create-poll-title")} }
        }
    }
}
