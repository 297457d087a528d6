use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::components::image::FallbackImage;
use crate::components::language_switcher::LanguageSwitcher;
use crate::content::{copy, images};
use crate::core::dom;
use crate::core::language::use_language;
use crate::core::page::Page;
use crate::core::viewport::use_viewport;

/// Platforms with a router register a `NavBuilder` so shared components can
/// emit real route links without knowing the platform's `Route` enum.
///
/// Without a registered builder every [`nav_link`] falls back to an in-page
/// anchor that smooth-scrolls to the page's section, which is what the
/// single-page presentation needs.
///
/// Example (in a platform crate):
/// ```ignore
/// fn link(page: Page, class: &str, label: &str) -> Element {
///     rsx!(Link { class: "{class}", to: Route::from(page), "{label}" })
/// }
/// register_nav(NavBuilder { link });
/// ```
pub struct NavBuilder {
    // Must return a link element whose only child is `label`.
    pub link: fn(page: Page, class: &str, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        debug!("nav builder already registered; keeping the first one");
    }
}

/// Link to `page` in whichever presentation is active.
pub fn nav_link(page: Page, class: &str, label: &str) -> Element {
    if let Some(builder) = NAV_BUILDER.get() {
        return (builder.link)(page, class, label);
    }

    let anchor = page.anchor();
    rsx! {
        a {
            class: "{class}",
            href: "#{anchor}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                dom::scroll_to(anchor);
            },
            "{label}"
        }
    }
}

/// Site header: brand, page navigation, language switcher.
///
/// Below the mobile breakpoint the inline menu is replaced by a toggle that
/// opens a drawer. Picking an entry in the drawer closes it.
#[component]
pub fn SiteHeader() -> Element {
    let lang = use_language();
    let viewport = use_viewport();
    let mut menu_open = use_signal(|| false);

    #[cfg(debug_assertions)]
    debug!(lang = %lang.get(), ?viewport, "[render] SiteHeader");

    let mobile = viewport.layout.is_mobile();
    let header_class = if viewport.scrolled {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };
    let items: Vec<(Page, String)> = Page::ALL
        .into_iter()
        .map(|page| (page, lang.t(page.label_key())))
        .collect();

    rsx! {
        header { id: "navbar", class: "{header_class}",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    FallbackImage {
                        class: "navbar__logo",
                        src: images::LOGO,
                        alt: images::LOGO_ALT,
                    }
                    {nav_link(Page::Home, "navbar__brand-mark", copy::BRAND_SHORT)}
                }

                if mobile {
                    button {
                        r#type: "button",
                        class: "navbar__menu-toggle",
                        aria_label: lang.t("openMenu"),
                        aria_expanded: "{menu_open()}",
                        onclick: move |_| menu_open.set(!menu_open()),
                        "☰"
                    }
                } else {
                    nav { class: "navbar__links",
                        for (page, label) in items.iter() {
                            Fragment { key: "{page.anchor()}",
                                {nav_link(*page, "navbar__link", label)}
                            }
                        }
                    }
                    div { class: "navbar__locale", LanguageSwitcher {} }
                }
            }
        }

        if mobile && menu_open() {
            div {
                class: "navbar__backdrop",
                onclick: move |_| menu_open.set(false),
            }
            aside { class: "navbar__drawer",
                div { class: "navbar__drawer-header",
                    span { class: "navbar__drawer-title", {copy::BRAND_SHORT} }
                    button {
                        r#type: "button",
                        class: "navbar__drawer-close",
                        aria_label: lang.t("closeMenu"),
                        onclick: move |_| menu_open.set(false),
                        "✕"
                    }
                }
                ul { class: "navbar__drawer-links",
                    for (page, label) in items.iter() {
                        li {
                            key: "{page.anchor()}",
                            onclick: move |_| menu_open.set(false),
                            {nav_link(*page, "navbar__drawer-link", label)}
                        }
                    }
                }
                div { class: "navbar__drawer-locale", LanguageSwitcher {} }
            }
        }
    }
}
