use dioxus::prelude::*;

use crate::components::contact::SocialChips;
use crate::components::page_hero::PageHero;
use crate::components::reveal::RevealOnView;
use crate::components::section_heading::SectionHeading;
use crate::content::{copy, InfoCard, INFO_CARDS};
use crate::core::language::use_language;
use crate::core::page::Page;
use crate::core::settings::SiteSettings;

/// Location, phone, hours and facilities cards followed by the social chips.
#[component]
pub fn AcademyInfo() -> Element {
    rsx! {
        div { class: "grid grid--two",
            for card in INFO_CARDS {
                InfoCardView { key: "{card.title}", card }
            }
        }
        div { class: "social",
            h3 { class: "social__title", {copy::SOCIAL_TITLE} }
            SocialChips {}
        }
    }
}

#[component]
fn InfoCardView(card: InfoCard) -> Element {
    let lang = use_language();
    let settings = SiteSettings::default();

    rsx! {
        RevealOnView { threshold: settings.section_reveal_threshold,
            article { class: "card card--info",
                div { class: "card__icon card__icon--square", aria_hidden: "true", {card.icon} }
                div { class: "card__text",
                    h3 { class: "card__title", {card.title} }
                    for key in card.body_keys {
                        p { key: "{key}", class: "card__body", {lang.t(key)} }
                    }
                }
            }
        }
    }
}

/// Routed About page.
#[component]
pub fn About() -> Element {
    let lang = use_language();

    rsx! {
        div { class: "page page-about",
            PageHero {
                page: Page::About,
                title: lang.t("aboutDetailTitle"),
                subtitle: lang.t("aboutDetailSubtitle"),
                description: lang.t("aboutDetailDescription"),
                cta: lang.t("contactUs"),
            }
            section { class: "section",
                div { class: "container",
                    SectionHeading {
                        title: copy::ACADEMY_INFO_TITLE,
                        lead: copy::ACADEMY_INFO_LEAD.to_string(),
                    }
                    AcademyInfo {}
                }
            }
        }
    }
}

/// About block of the single-page layout.
#[component]
pub fn AboutSection() -> Element {
    let lang = use_language();

    rsx! {
        section { id: Page::About.anchor(), class: "section",
            div { class: "container",
                SectionHeading {
                    title: lang.t("aboutTitle"),
                    lead: lang.t("aboutDescription"),
                }
                AcademyInfo {}
            }
        }
    }
}
