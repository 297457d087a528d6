//! The five pages of the site and how each is addressed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Fencing,
    Instructors,
    Programs,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Fencing,
        Page::Instructors,
        Page::Programs,
    ];

    /// Route path in the multi-page presentation.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Fencing => "/fencing",
            Page::Instructors => "/instructors",
            Page::Programs => "/programs",
        }
    }

    /// Element id of the section in the single-page presentation.
    pub fn anchor(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Fencing => "fencing",
            Page::Instructors => "instructors",
            Page::Programs => "programs",
        }
    }

    /// Translation key of the navigation label.
    pub fn label_key(self) -> &'static str {
        // Nav labels share their key with the anchor id.
        self.anchor()
    }

    /// Background image of the page hero.
    pub fn hero_image(self) -> &'static str {
        match self {
            Page::Home => "/images/hero/fencing-bg.jpg",
            Page::About => "/images/about/academy-interior.jpg",
            Page::Fencing => "/images/fencing/sabre-action.jpg",
            Page::Instructors => "/images/instructors/coaching-scene.jpg",
            Page::Programs => "/images/programs/class-training.jpg",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        Page::ALL
            .into_iter()
            .find(|page| page.path().trim_end_matches('/') == trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/about/"), Some(Page::About));
        assert_eq!(Page::from_path("/contact"), None);
    }

    #[test]
    fn anchors_are_unique() {
        let mut anchors: Vec<_> = Page::ALL.iter().map(|p| p.anchor()).collect();
        anchors.sort();
        anchors.dedup();
        assert_eq!(anchors.len(), Page::ALL.len());
    }
}
