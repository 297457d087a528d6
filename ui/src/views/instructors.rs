use dioxus::prelude::*;

use crate::components::image::FallbackImage;
use crate::components::page_hero::PageHero;
use crate::components::reveal::RevealOnView;
use crate::components::section_heading::SectionHeading;
use crate::content::{Instructor, INSTRUCTORS};
use crate::core::language::use_language;
use crate::core::page::Page;
use crate::core::settings::SiteSettings;

#[component]
fn FactList(heading: String, items: &'static [&'static str]) -> Element {
    rsx! {
        div { class: "fact-list",
            h4 { class: "fact-list__heading", "{heading}" }
            ul {
                for item in items.iter() {
                    li { key: "{item}", {*item} }
                }
            }
        }
    }
}

/// One instructor. The compact form (one-page layout) shows the translated
/// profile summary instead of the three lists when the instructor has one.
#[component]
pub fn InstructorCard(instructor: Instructor, #[props(default)] compact: bool) -> Element {
    let lang = use_language();
    let settings = SiteSettings::default();
    let profile: Option<Vec<String>> = instructor
        .profile_key
        .filter(|_| compact)
        .map(|key| lang.t(key).lines().map(str::to_string).collect());

    rsx! {
        RevealOnView { threshold: settings.section_reveal_threshold,
            article { class: "card card--instructor",
                div { class: "card__portrait",
                    FallbackImage { src: instructor.image, alt: instructor.name }
                }
                div { class: "card__text",
                    h3 { class: "card__title", {instructor.name} }
                    span { class: "chip chip--role", {lang.t(instructor.role_key)} }
                    if let Some(lines) = profile {
                        for line in lines {
                            p { key: "{line}", class: "card__body", "{line}" }
                        }
                    } else {
                        FactList { heading: lang.t("achievements"), items: instructor.achievements }
                        FactList { heading: lang.t("education"), items: instructor.education }
                        FactList { heading: lang.t("experience"), items: instructor.experience }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Instructors() -> Element {
    let lang = use_language();

    rsx! {
        div { class: "page page-instructors",
            PageHero {
                page: Page::Instructors,
                title: lang.t("instructorsTitle"),
                subtitle: lang.t("instructorsSubtitle"),
            }
            section { class: "section",
                div { class: "container stack",
                    for instructor in INSTRUCTORS {
                        InstructorCard { key: "{instructor.name}", instructor }
                    }
                }
            }
        }
    }
}

#[component]
pub fn InstructorsSection() -> Element {
    let lang = use_language();

    rsx! {
        section { id: Page::Instructors.anchor(), class: "section",
            div { class: "container",
                SectionHeading { title: lang.t("instructorsTitle") }
                div { class: "grid grid--two",
                    for instructor in INSTRUCTORS {
                        InstructorCard { key: "{instructor.name}", instructor, compact: true }
                    }
                }
            }
        }
    }
}
