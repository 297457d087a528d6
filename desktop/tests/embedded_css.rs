#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) stays present and non-trivial.
//!
//! The desktop shell inlines `ui/assets/theme/main.css` at compile time. A
//! truncated or moved file would only show up as an unstyled window at runtime.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--hero-image", "body {", ".button--cta"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn braces_are_balanced() {
    let open = EMBEDDED_CSS.matches('{').count();
    let close = EMBEDDED_CSS.matches('}').count();
    assert_eq!(open, close, "unbalanced braces in the embedded theme");
}
