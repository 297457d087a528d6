use dioxus::prelude::*;

use crate::content::SOCIAL_LINKS;
use crate::core::links::ExternalLink;

/// Anchor to an [`ExternalLink`]; the browser handles the dial / new tab.
#[component]
pub fn ExternalAnchor(link: ExternalLink, #[props(default)] class: String, children: Element) -> Element {
    rsx! {
        a {
            class: "{class}",
            href: link.href(),
            target: link.target(),
            rel: link.rel(),
            {children}
        }
    }
}

/// Primary call-to-action that opens the phone dialer.
#[component]
pub fn ContactButton(label: String, #[props(default)] class: String) -> Element {
    rsx! {
        ExternalAnchor {
            link: ExternalLink::Phone,
            class: "button button--cta {class}",
            "{label}"
        }
    }
}

/// Outlined chips for the academy's social channels.
#[component]
pub fn SocialChips() -> Element {
    rsx! {
        div { class: "social-chips",
            for social in SOCIAL_LINKS {
                ExternalAnchor {
                    key: "{social.label}",
                    link: social.link,
                    class: "chip chip--outlined",
                    "{social.label}"
                }
            }
        }
    }
}
