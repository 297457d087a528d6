use dioxus::prelude::*;

use crate::core::dom;
use crate::core::reveal::Reveal;

/// Wrapper that fades its children in the first time enough of it is on
/// screen. The transition happens once per instance.
#[component]
pub fn RevealOnView(
    threshold: f64,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let element_id = use_hook(|| dom::unique_id("reveal"));
    let mut reveal = use_signal(|| Reveal::new(threshold));

    let watched_id = element_id.clone();
    use_future(move || {
        let watched_id = watched_id.clone();
        async move {
            let mut readings = dom::watch_intersection(&watched_id, threshold);
            while let Ok(ratio) = readings.recv::<f64>().await {
                if reveal.with_mut(|r| r.observe(ratio)) {
                    break;
                }
            }
        }
    });

    let state_class = if reveal.read().is_revealed() {
        "reveal reveal--visible"
    } else {
        "reveal"
    };

    rsx! {
        div { id: "{element_id}", class: "{state_class} {class}", {children} }
    }
}
