use dioxus::prelude::*;

use crate::components::contact::ContactButton;
use crate::components::page_hero::PageHero;
use crate::components::reveal::RevealOnView;
use crate::components::section_heading::SectionHeading;
use crate::content::{copy, ProgramCategory, ProgramClass, ATHLETE_RESULTS, CLASS_NOTES, PROGRAMS};
use crate::core::language::use_language;
use crate::core::page::Page;
use crate::core::settings::SiteSettings;

#[component]
fn ClassEntry(class: ProgramClass) -> Element {
    let lang = use_language();

    rsx! {
        div { class: "program-class {class.kind.css_modifier()}",
            h4 { class: "program-class__kind", {lang.t(class.kind.label_key())} }
            for slot in class.schedule.iter() {
                p { key: "{slot}", class: "program-class__slot", {*slot} }
            }
            p { class: "program-class__description", {class.description} }
        }
    }
}

#[component]
fn CategoryCard(program: ProgramCategory) -> Element {
    let lang = use_language();
    let settings = SiteSettings::default();

    rsx! {
        RevealOnView { threshold: settings.section_reveal_threshold,
            article { class: "card card--program",
                div { class: "card__header",
                    span { class: "card__icon", aria_hidden: "true", {program.icon} }
                    h3 { class: "card__title", {lang.t(program.category_key)} }
                }
                for class in program.classes.iter().copied() {
                    ClassEntry { key: "{class.kind.label_key()}", class }
                }
            }
        }
    }
}

/// Age categories with their classes.
#[component]
pub fn ProgramGrid() -> Element {
    rsx! {
        div { class: "grid grid--three",
            for program in PROGRAMS {
                CategoryCard { key: "{program.category_key}", program }
            }
        }
    }
}

#[component]
fn NoteList(heading: String, #[props(default)] lead: Option<String>, items: &'static [&'static str]) -> Element {
    rsx! {
        div { class: "card card--notes",
            h3 { class: "card__title", "{heading}" }
            if let Some(lead) = lead {
                p { class: "card__body", "{lead}" }
            }
            ul { class: "note-list",
                for item in items.iter() {
                    li { key: "{item}", class: "note-list__item", {*item} }
                }
            }
        }
    }
}

#[component]
pub fn Programs() -> Element {
    let lang = use_language();

    rsx! {
        div { class: "page page-programs",
            PageHero {
                page: Page::Programs,
                title: lang.t("programsTitle"),
                subtitle: lang.t("programsSubtitle"),
            }
            section { class: "section",
                div { class: "container",
                    ProgramGrid {}
                }
            }
            section { class: "section section--muted",
                div { class: "container grid grid--two",
                    NoteList {
                        heading: lang.t("athleteResults"),
                        lead: copy::RESULTS_LEAD.to_string(),
                        items: &ATHLETE_RESULTS,
                    }
                    NoteList { heading: lang.t("classInfo"), items: &CLASS_NOTES }
                }
                div { class: "container centered",
                    ContactButton { label: lang.t("contactUs") }
                }
            }
        }
    }
}

#[component]
pub fn ProgramsSection() -> Element {
    let lang = use_language();

    rsx! {
        section { id: Page::Programs.anchor(), class: "section section--muted",
            div { class: "container",
                SectionHeading { title: lang.t("programsTitle") }
                ProgramGrid {}
                div { class: "grid grid--two section__notes",
                    NoteList {
                        heading: lang.t("athleteResults"),
                        lead: copy::RESULTS_LEAD.to_string(),
                        items: &ATHLETE_RESULTS,
                    }
                    NoteList { heading: lang.t("classInfo"), items: &CLASS_NOTES }
                }
            }
        }
    }
}
