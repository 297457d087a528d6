use dioxus::prelude::*;

use crate::components::back_button::BackButton;
use crate::components::contact::ContactButton;
use crate::components::reveal::RevealOnView;
use crate::core::page::Page;
use crate::core::settings::SiteSettings;

/// Full-width dark hero with the page's background image.
///
/// The landing page gets the taller variant and no back button.
#[component]
pub fn PageHero(
    page: Page,
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] description: Option<String>,
    /// Label of the dial-in call to action, if the page has one.
    #[props(default)]
    cta: Option<String>,
) -> Element {
    let settings = SiteSettings::default();
    let is_home = page == Page::Home;
    let (variant, threshold) = if is_home {
        ("hero hero--landing", settings.hero_reveal_threshold)
    } else {
        ("hero", settings.section_reveal_threshold)
    };
    let background = page.hero_image();

    rsx! {
        section {
            class: "{variant}",
            style: "--hero-image: url('{background}')",
            if !is_home {
                BackButton {}
            }
            RevealOnView { threshold, class: "hero__content",
                h1 { class: "hero__title", "{title}" }
                if let Some(subtitle) = subtitle {
                    h2 { class: "hero__subtitle", "{subtitle}" }
                }
                if let Some(description) = description {
                    p { class: "hero__description", "{description}" }
                }
                if let Some(cta) = cta {
                    ContactButton { label: cta }
                }
            }
        }
    }
}
