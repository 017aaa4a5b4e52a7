use dioxus::prelude::*;
use dioxus_i18n::t;

use crate::use_auth_state;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth_state();

    rsx! {
        section { class: "section",
            h1 { class: "title", {t!("dashboard-title")} }
            if let Some(user) = auth().user().cloned() {
                p { {t!("dashboard-welcome", username: user.username.to_string())} }
            } else {
                p { {t!("dashboard-welcome-stranger")} }
            }
        }
    }
}
