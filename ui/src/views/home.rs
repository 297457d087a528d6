use dioxus::prelude::*;

use crate::components::app_navbar::nav_link;
use crate::components::page_hero::PageHero;
use crate::components::reveal::RevealOnView;
use crate::components::section_heading::SectionHeading;
use crate::content::{copy, SectionCard, HOME_SECTIONS};
use crate::core::language::use_language;
use crate::core::page::Page;
use crate::core::settings::SiteSettings;

/// Landing hero: title, subtitle, description and the inquiry button.
#[component]
pub fn Hero() -> Element {
    let lang = use_language();

    rsx! {
        PageHero {
            page: Page::Home,
            title: lang.t("heroTitle"),
            subtitle: lang.t("heroSubtitle"),
            description: lang.t("heroDescription"),
            cta: lang.t("heroButton"),
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "page page-home",
            Hero {}
            section { class: "section section--muted",
                div { class: "container",
                    SectionHeading {
                        title: copy::ACADEMY_NAME,
                        lead: copy::HOME_SECTIONS_LEAD.to_string(),
                    }
                    div { class: "grid grid--two",
                        for card in HOME_SECTIONS {
                            SectionCardView { key: "{card.page.anchor()}", card }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionCardView(card: SectionCard) -> Element {
    let lang = use_language();
    let settings = SiteSettings::default();

    rsx! {
        RevealOnView { threshold: settings.section_reveal_threshold,
            article { class: "card card--link",
                div { class: "card__icon", aria_hidden: "true", {card.icon} }
                h3 { class: "card__title", {lang.t(card.page.label_key())} }
                p { class: "card__body", {card.teaser} }
                {nav_link(card.page, "button button--outlined", &lang.t("learnMore"))}
            }
        }
    }
}
