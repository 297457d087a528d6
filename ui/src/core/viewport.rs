//! Viewport-derived presentation state.
//!
//! Mobile vs desktop is a pure function of the viewport width and the header's
//! "scrolled" style is a pure function of the scroll offset. The shell feeds
//! raw [`ViewportSample`]s in (see `core::dom`); views only ever see the
//! derived [`ViewportState`], so a scroll event that crosses no threshold does
//! not re-render anything.

use dioxus::prelude::*;
use serde::Deserialize;
use tracing::debug;

use super::dom;
use super::settings::SiteSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    Mobile,
    #[default]
    Desktop,
}

impl Layout {
    pub fn for_width(width: f64, settings: &SiteSettings) -> Self {
        if width < settings.mobile_breakpoint_px {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Layout::Mobile)
    }
}

/// One raw reading from the browser.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ViewportSample {
    pub width: f64,
    pub scroll_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    pub layout: Layout,
    pub scrolled: bool,
}

impl ViewportState {
    pub fn new(layout: Layout, scrolled: bool) -> Self {
        Self { layout, scrolled }
    }

    pub fn from_sample(sample: ViewportSample, settings: &SiteSettings) -> Self {
        Self {
            layout: Layout::for_width(sample.width, settings),
            scrolled: sample.scroll_y > settings.scroll_threshold_px,
        }
    }
}

/// Provide the viewport state to the tree below the caller.
pub fn use_viewport_provider(initial: ViewportState) -> Signal<ViewportState> {
    use_context_provider(|| Signal::new(initial))
}

/// Keep `state` in sync with the browser window. Writes only when a derived
/// value actually changes.
pub fn use_viewport_tracking(mut state: Signal<ViewportState>, settings: SiteSettings) {
    use_future(move || async move {
        let mut samples = dom::watch_viewport();
        while let Ok(sample) = samples.recv::<ViewportSample>().await {
            let next = ViewportState::from_sample(sample, &settings);
            if *state.peek() != next {
                debug!(?next, "viewport state changed");
                state.set(next);
            }
        }
    });
}

/// Read the viewport state; outside a provider this is the desktop default.
pub fn use_viewport() -> ViewportState {
    let state = use_hook(|| try_consume_context::<Signal<ViewportState>>());
    state.map(|s| s()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::SITE;

    fn sample(width: f64, scroll_y: f64) -> ViewportSample {
        ViewportSample { width, scroll_y }
    }

    #[test]
    fn narrow_viewports_are_mobile() {
        assert_eq!(Layout::for_width(375.0, &SITE), Layout::Mobile);
        assert_eq!(Layout::for_width(899.9, &SITE), Layout::Mobile);
        assert_eq!(Layout::for_width(900.0, &SITE), Layout::Desktop);
        assert_eq!(Layout::for_width(1440.0, &SITE), Layout::Desktop);
    }

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!ViewportState::from_sample(sample(1200.0, 0.0), &SITE).scrolled);
        assert!(!ViewportState::from_sample(sample(1200.0, 50.0), &SITE).scrolled);
        assert!(ViewportState::from_sample(sample(1200.0, 51.0), &SITE).scrolled);
    }

    #[test]
    fn samples_within_a_band_derive_the_same_state() {
        let a = ViewportState::from_sample(sample(1280.0, 120.0), &SITE);
        let b = ViewportState::from_sample(sample(1024.0, 900.0), &SITE);
        assert_eq!(a, b);
    }

    #[test]
    fn sample_deserializes_from_browser_payload() {
        let sample: ViewportSample =
            serde_json::from_str(r#"{"width": 390, "scroll_y": 12.5}"#).unwrap();
        assert_eq!(sample, ViewportSample { width: 390.0, scroll_y: 12.5 });
    }
}
