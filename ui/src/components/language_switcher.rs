use dioxus::prelude::*;
use tracing::debug;

use crate::core::language::use_language;
use crate::i18n::LanguageCode;

/// Dropdown listing the three site languages; the active one is marked.
#[component]
pub fn LanguageSwitcher() -> Element {
    let lang = use_language();
    let current = lang.get();
    let mut open = use_signal(|| false);

    let mut pick = move |code: LanguageCode| {
        if !lang.select(code) {
            debug!(%code, "[i18n] language already active");
        }
        open.set(false);
    };

    rsx! {
        div { class: "language-switcher",
            button {
                r#type: "button",
                class: "language-switcher__button",
                aria_label: lang.t("languageLabel"),
                aria_haspopup: "listbox",
                aria_expanded: "{open()}",
                onclick: move |_| open.set(!open()),
                "{current.flag()} {current.native_name()}"
                span { class: "language-switcher__caret", aria_hidden: "true", "▾" }
            }

            if open() {
                ul { class: "language-switcher__menu", role: "listbox",
                    for code in LanguageCode::ALL {
                        li {
                            key: "{code}",
                            role: "option",
                            aria_selected: "{code == current}",
                            class: if code == current {
                                "language-switcher__option language-switcher__option--selected"
                            } else {
                                "language-switcher__option"
                            },
                            onclick: move |_| pick(code),
                            "{code.flag()} {code.native_name()}"
                        }
                    }
                }
            }
        }
    }
}
