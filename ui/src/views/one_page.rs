use dioxus::prelude::*;

use crate::core::page::Page;
use crate::views::{AboutSection, FencingSection, Hero, InstructorsSection, ProgramsSection};

/// Every page stacked into one scrolling document. Nav links resolve to the
/// section anchors.
#[component]
pub fn OnePage() -> Element {
    rsx! {
        div { class: "page page-one",
            div { id: Page::Home.anchor(), Hero {} }
            AboutSection {}
            FencingSection {}
            InstructorsSection {}
            ProgramsSection {}
        }
    }
}
