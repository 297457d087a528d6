use dioxus::prelude::*;

use crate::components::app_navbar::nav_link;
use crate::core::language::use_language;
use crate::core::page::Page;

/// Floating "back to home" control on the detail pages.
#[component]
pub fn BackButton() -> Element {
    let lang = use_language();
    let label = lang.t("backHome");

    rsx! {
        div { class: "back-button", title: "{label}",
            {nav_link(Page::Home, "back-button__link", "←")}
        }
    }
}
