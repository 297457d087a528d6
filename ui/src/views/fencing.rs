use dioxus::prelude::*;

use crate::components::page_hero::PageHero;
use crate::components::reveal::RevealOnView;
use crate::components::section_heading::SectionHeading;
use crate::content::{copy, Feature, BENEFITS, TECHNIQUES};
use crate::core::language::use_language;
use crate::core::page::Page;
use crate::core::settings::SiteSettings;

#[component]
fn FeatureCard(feature: Feature) -> Element {
    let settings = SiteSettings::default();

    rsx! {
        RevealOnView { threshold: settings.section_reveal_threshold,
            article { class: "card card--feature",
                div { class: "card__icon", aria_hidden: "true", {feature.icon} }
                h3 { class: "card__title", {feature.title} }
                p { class: "card__body", {feature.description} }
            }
        }
    }
}

#[component]
fn FeatureGrid(features: &'static [Feature]) -> Element {
    rsx! {
        div { class: "grid grid--four",
            for feature in features.iter().copied() {
                FeatureCard { key: "{feature.title}", feature }
            }
        }
    }
}

#[component]
pub fn Fencing() -> Element {
    let lang = use_language();

    rsx! {
        div { class: "page page-fencing",
            PageHero {
                page: Page::Fencing,
                title: lang.t("fencingDetailTitle"),
                subtitle: lang.t("fencingSubtitle"),
                description: lang.t("fencingDescription"),
            }
            section { class: "section",
                div { class: "container",
                    SectionHeading {
                        title: copy::BENEFITS_TITLE,
                        lead: copy::BENEFITS_LEAD.to_string(),
                    }
                    FeatureGrid { features: &BENEFITS }
                }
            }
            section { class: "section section--muted",
                div { class: "container",
                    SectionHeading {
                        title: lang.t("sabreCharacteristics"),
                        lead: lang.t("sabreDescription"),
                    }
                    p { class: "prose", {copy::SABRE_BODY} }
                    FeatureGrid { features: &TECHNIQUES }
                }
            }
        }
    }
}

/// Fencing block of the single-page layout: intro plus the benefit cards.
#[component]
pub fn FencingSection() -> Element {
    let lang = use_language();

    rsx! {
        section { id: Page::Fencing.anchor(), class: "section section--muted",
            div { class: "container",
                SectionHeading {
                    title: lang.t("fencingTitle"),
                    lead: lang.t("fencingSubtitle"),
                }
                p { class: "prose", {lang.t("fencingDescription")} }
                p { class: "prose", {copy::FENCING_LEAD} }
                FeatureGrid { features: &BENEFITS }
            }
        }
    }
}
