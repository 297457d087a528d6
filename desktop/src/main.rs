#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::desktop::Config;
use dioxus::prelude::*;

use ui::components::{SiteFooter, SiteHeader};
use ui::core::language::use_language_provider;
use ui::core::settings::SiteSettings;
use ui::core::viewport::{use_viewport_provider, use_viewport_tracking, ViewportState};
use ui::i18n::LanguageCode;
use ui::views::OnePage;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!(
                            "스타펜싱 아카데미 – v{}",
                            env!("CARGO_PKG_VERSION")
                        ))
                        .with_inner_size(LogicalSize::new(1280.0, 860.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

/// Single scrolling page. No route builder is registered, so every nav entry
/// scrolls to its section anchor.
#[component]
fn App() -> Element {
    use_language_provider(LanguageCode::default());
    let viewport = use_viewport_provider(ViewportState::default());
    use_viewport_tracking(viewport, SiteSettings::default());

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        SiteHeader {}
        main { class: "site-main", OnePage {} }
        SiteFooter {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load images straight from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
