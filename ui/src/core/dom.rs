//! Browser glue. Each helper installs a small script through the renderer's
//! `eval` channel and streams readings back with `dioxus.send`.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use dioxus::document::Eval;

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// A DOM id unique for this session, for elements that need to be observed.
pub fn unique_id(prefix: &str) -> String {
    let n = NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n}")
}

/// Stream `{ width, scroll_y }` on load, scroll and resize.
pub fn watch_viewport() -> Eval {
    document::eval(
        r#"
        const sample = () => dioxus.send({ width: window.innerWidth, scroll_y: window.scrollY });
        window.addEventListener("scroll", sample, { passive: true });
        window.addEventListener("resize", sample);
        sample();
        "#,
    )
}

/// Stream intersection ratios of the element with `id`. The observer
/// disconnects itself once a reading meets `threshold`.
pub fn watch_intersection(id: &str, threshold: f64) -> Eval {
    document::eval(&format!(
        r#"
        const el = document.getElementById("{id}");
        if (el) {{
            const observer = new IntersectionObserver((entries) => {{
                for (const entry of entries) {{
                    dioxus.send(entry.intersectionRatio);
                    if (entry.intersectionRatio >= {threshold}) observer.disconnect();
                }}
            }}, {{ threshold: [{threshold}] }});
            observer.observe(el);
        }}
        "#
    ))
}

/// Smooth-scroll to the section with `id`.
pub fn scroll_to(id: &'static str) {
    spawn(async move {
        let _ = document::eval(&format!(
            r#"document.getElementById("{id}")?.scrollIntoView({{ behavior: "smooth" }});"#
        ))
        .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_per_call() {
        let a = unique_id("reveal");
        let b = unique_id("reveal");
        assert_ne!(a, b);
        assert!(a.starts_with("reveal-"));
    }
}
