use dioxus::prelude::*;

#[component]
pub fn SectionHeading(#[props(into)] title: String, #[props(default)] lead: Option<String>) -> Element {
    rsx! {
        div { class: "section-heading",
            h2 { class: "section-heading__title", "{title}" }
            if let Some(lead) = lead {
                p { class: "section-heading__lead", "{lead}" }
            }
        }
    }
}
