use dioxus::prelude::*;

/// `img` that hides itself when the asset fails to load.
#[component]
pub fn FallbackImage(
    #[props(into)] src: String,
    #[props(into)] alt: String,
    #[props(default, into)] class: String,
) -> Element {
    let mut failed = use_signal(|| false);

    if failed() {
        return rsx! {};
    }

    rsx! {
        img {
            class: "{class}",
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| failed.set(true),
        }
    }
}
