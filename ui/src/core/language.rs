//! Session-lifetime "current language" context.
//!
//! The root component calls [`use_language_provider`] once; it loads the
//! [`TranslationStore`] and distributes a [`Language`] handle through the
//! component context. Views read through [`use_language`]. The only write
//! path is [`Language::set`], which validates the code and skips no-op
//! switches so that re-selecting the active language does not re-render.

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::i18n::{I18nError, LanguageCode, TranslationStore};

/// Decide what a switch request means for the current language.
///
/// `Ok(Some(code))` means the language changes, `Ok(None)` means the request
/// names the language already active, and an unsupported code is rejected.
pub fn resolve_switch(current: LanguageCode, requested: &str) -> Result<Option<LanguageCode>, I18nError> {
    let next: LanguageCode = requested.parse()?;
    Ok((next != current).then_some(next))
}

/// Shared handle to the active language and the translation store. Both
/// fields are arena handles owned by the providing scope, so the handle is
/// `Copy` and can move into any number of event closures.
#[derive(Clone, Copy, PartialEq)]
pub struct Language {
    code: Signal<LanguageCode>,
    store: CopyValue<TranslationStore>,
}

impl Language {
    /// Current language. Reading subscribes the calling component.
    pub fn get(&self) -> LanguageCode {
        (self.code)()
    }

    /// Translate `key` in the current language (falls back to `key`).
    pub fn t(&self, key: &str) -> String {
        let lang = self.get();
        self.store.read().lookup(lang, key).to_string()
    }

    pub fn with_store<R>(&self, f: impl FnOnce(&TranslationStore) -> R) -> R {
        f(&self.store.read())
    }

    /// Switch to `next`. Returns whether the language changed; re-selecting the
    /// active language does not write the signal.
    pub fn select(&self, next: LanguageCode) -> bool {
        let mut code = self.code;
        let current = *code.peek();
        if current == next {
            return false;
        }
        debug!(from = %current, to = %next, "[i18n] language switch");
        code.set(next);
        true
    }

    /// Switch language from an untyped code. Unsupported codes leave the
    /// current language untouched.
    pub fn set(&self, requested: &str) -> Result<bool, I18nError> {
        match resolve_switch(*self.code.peek(), requested) {
            Ok(Some(next)) => Ok(self.select(next)),
            Ok(None) => Ok(false),
            Err(err) => {
                warn!(%err, "[i18n] rejected language switch");
                Err(err)
            }
        }
    }
}

/// Create the language context for the subtree rooted at the caller.
pub fn use_language_provider(initial: LanguageCode) -> Language {
    let store = use_hook(|| CopyValue::new(TranslationStore::load_or_empty()));
    let code = use_signal(|| initial);
    use_context_provider(|| Language { code, store })
}

/// Read the language context. Without a provider (e.g. a component rendered
/// in isolation) a detached Korean context backed by the embedded catalogs is
/// used instead.
pub fn use_language() -> Language {
    use_hook(|| {
        try_consume_context::<Language>().unwrap_or_else(|| {
            warn!("[i18n] no language provider in scope; using a detached default");
            Language {
                code: Signal::new(LanguageCode::default()),
                store: CopyValue::new(TranslationStore::load_or_empty()),
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_to_another_language_changes_it() {
        assert_eq!(
            resolve_switch(LanguageCode::Ko, "en"),
            Ok(Some(LanguageCode::En))
        );
        assert_eq!(
            resolve_switch(LanguageCode::En, "zh"),
            Ok(Some(LanguageCode::Zh))
        );
    }

    #[test]
    fn switching_to_the_active_language_is_a_no_op() {
        for lang in LanguageCode::ALL {
            assert_eq!(resolve_switch(lang, lang.code()), Ok(None));
        }
    }

    #[test]
    fn unsupported_code_is_rejected() {
        assert_eq!(
            resolve_switch(LanguageCode::Ko, "ja"),
            Err(I18nError::InvalidLanguage("ja".into()))
        );
    }

    #[test]
    fn every_pair_of_languages_can_switch() {
        for from in LanguageCode::ALL {
            for to in LanguageCode::ALL {
                let expected = (from != to).then_some(to);
                assert_eq!(resolve_switch(from, to.code()), Ok(expected));
            }
        }
    }
}
