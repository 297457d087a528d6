//! Shared UI crate for the Star Fencing Academy site. Content, translations,
//! the navigation shell and every page view live here; the platform crates
//! only choose a presentation (routed pages or one scrolling page).

use dioxus::prelude::*;

pub mod content;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Header, nav links and the optional route link builder (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::{nav_link, register_nav, NavBuilder, SiteHeader};

    pub mod back_button;
    pub mod contact;
    pub mod footer;
    pub use footer::SiteFooter;
    pub mod image;
    pub mod language_switcher;
    pub use language_switcher::LanguageSwitcher;
    pub mod page_hero;
    pub mod reveal;
    pub mod section_heading;
}

/// Shared theme, bundled by the asset pipeline on web. Desktop embeds the same
/// file with `include_str!`.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
