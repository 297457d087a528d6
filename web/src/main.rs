use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder, SiteFooter, SiteHeader};
use ui::core::language::use_language_provider;
use ui::core::page::Page;
use ui::core::settings::SiteSettings;
use ui::core::viewport::{use_viewport_provider, use_viewport_tracking, ViewportState};
use ui::i18n::LanguageCode;
use ui::views::{About, Fencing, Home, Instructors, Programs};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/fencing")]
    Fencing {},
    #[route("/instructors")]
    Instructors {},
    #[route("/programs")]
    Programs {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::About => Route::About {},
            Page::Fencing => Route::Fencing {},
            Page::Instructors => Route::Instructors {},
            Page::Programs => Route::Programs {},
        }
    }
}

fn nav_link(page: Page, class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::from(page),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| register_nav(NavBuilder { link: nav_link }));

    use_language_provider(LanguageCode::default());
    let viewport = use_viewport_provider(ViewportState::default());
    use_viewport_tracking(viewport, SiteSettings::default());

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web layout around the shared header and footer, which lets the shell use
/// the web-specific `Route` enum for its outlet.
#[component]
fn WebLayout() -> Element {
    rsx! {
        SiteHeader {}
        main { class: "site-main", Outlet::<Route> {} }
        SiteFooter {}
    }
}
