//! Compile-time site settings. There is no runtime configuration source; the
//! platform shells read these through [`SiteSettings::default`].

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteSettings {
    /// Viewports narrower than this render the collapsed (mobile) menu.
    pub mobile_breakpoint_px: f64,
    /// Vertical scroll offset past which the header switches to its solid style.
    pub scroll_threshold_px: f64,
    /// Intersection ratio that reveals the landing hero.
    pub hero_reveal_threshold: f64,
    /// Intersection ratio that reveals every other section.
    pub section_reveal_threshold: f64,
}

/// Matches the `md` breakpoint of the theme stylesheet.
pub const SITE: SiteSettings = SiteSettings {
    mobile_breakpoint_px: 900.0,
    scroll_threshold_px: 50.0,
    hero_reveal_threshold: 0.3,
    section_reveal_threshold: 0.2,
};

impl Default for SiteSettings {
    fn default() -> Self {
        SITE
    }
}
