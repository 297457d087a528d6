use dioxus::prelude::*;

use crate::components::contact::ExternalAnchor;
use crate::components::image::FallbackImage;
use crate::content::{copy, images, SOCIAL_LINKS};
use crate::core::language::use_language;

#[component]
pub fn SiteFooter() -> Element {
    let lang = use_language();

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__about",
                    div { class: "footer__brand",
                        FallbackImage {
                            class: "footer__logo",
                            src: images::LOGO_WHITE,
                            alt: images::LOGO_ALT,
                        }
                        h3 { class: "footer__brand-name", {copy::ACADEMY_NAME} }
                    }
                    p { class: "footer__description", {lang.t("footerDescription")} }
                    div { class: "footer__social",
                        for social in SOCIAL_LINKS {
                            ExternalAnchor {
                                key: "{social.label}",
                                link: social.link,
                                class: "footer__social-button",
                                span { aria_hidden: "true", {social.icon} }
                                span { class: "visually-hidden", {social.label} }
                            }
                        }
                    }
                }

                div { class: "footer__contact",
                    h4 { {lang.t("contact")} }
                    p { "📍 " {lang.t("address")} }
                    p { "📞 " {lang.t("phone")} }
                    p { "🕒 " {lang.t("weekdayHours")} }
                    p { "🕒 " {lang.t("weekendHours")} }
                }
            }

            hr { class: "footer__divider" }
            p { class: "footer__copyright", {copy::COPYRIGHT} }
        }
    }
}
