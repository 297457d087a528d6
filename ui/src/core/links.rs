//! Outbound link targets. These are opaque constants; nothing is observed
//! after a link is opened.

/// Phone number as printed on the site.
pub const PHONE_DISPLAY: &str = "02-2088-5358";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    Phone,
    Instagram,
    Kakao,
}

impl ExternalLink {
    pub fn href(self) -> &'static str {
        match self {
            ExternalLink::Phone => "tel:02-2088-5358",
            ExternalLink::Instagram => "https://www.instagram.com/star_fencing",
            ExternalLink::Kakao => "https://pf.kakao.com/_xlxcxnxl",
        }
    }

    /// Dialer links replace the current context; social links open a new one.
    pub fn target(self) -> &'static str {
        match self {
            ExternalLink::Phone => "_self",
            ExternalLink::Instagram | ExternalLink::Kakao => "_blank",
        }
    }

    pub fn rel(self) -> Option<&'static str> {
        match self.target() {
            "_blank" => Some("noopener noreferrer"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialer_matches_printed_number() {
        assert_eq!(ExternalLink::Phone.href(), format!("tel:{PHONE_DISPLAY}"));
        assert_eq!(ExternalLink::Phone.rel(), None);
    }

    #[test]
    fn social_links_open_in_new_context() {
        for link in [ExternalLink::Instagram, ExternalLink::Kakao] {
            assert_eq!(link.target(), "_blank");
            assert!(link.href().starts_with("https://"));
            assert!(link.rel().is_some());
        }
    }
}
