//! Internationalization (i18n) support for `star-fencing-ui`.
//!
//! This module wires together:
//! - `fluent` (catalog parsing + message formatting) and `fluent-syntax` (message ids)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `unic-langid` (language identifiers handed to Fluent)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   ko/star-fencing.ftl   (default language)
//!   en/star-fencing.ftl
//!   zh/star-fencing.ftl
//! ```
//!
//! Every catalog is resolved once into a flat key → string [`Dictionary`]
//! when the [`TranslationStore`] is built. After that, lookups are plain map
//! reads and never fail: an unknown key comes back verbatim.
//!
//! The store holds no "current language". Which language a view renders in is
//! decided by the `Language` context (see `core::language`).
//!
//! To add a new message:
//! 1. Add `key = value` to every `i18n/<code>/star-fencing.ftl`.
//! 2. Run the tests; the completeness checks list any catalog that lags.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use fluent::{FluentBundle, FluentResource};
use fluent_syntax::ast::Entry;
use rust_embed::Embed;
use thiserror::Error;
use tracing::{debug, warn};
use unic_langid::{langid, LanguageIdentifier};

/// Canonical catalog filename (without extension) shared by all languages.
const DOMAIN: &str = "star-fencing";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Flat key → display string table for one language.
pub type Dictionary = BTreeMap<String, String>;

/// The three languages the site ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LanguageCode {
    #[default]
    Ko,
    En,
    Zh,
}

impl LanguageCode {
    /// Display order used by the language switcher.
    pub const ALL: [LanguageCode; 3] = [LanguageCode::Ko, LanguageCode::En, LanguageCode::Zh];

    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::Ko => "ko",
            LanguageCode::En => "en",
            LanguageCode::Zh => "zh",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            LanguageCode::Ko => "한국어",
            LanguageCode::En => "English",
            LanguageCode::Zh => "中文",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            LanguageCode::Ko => "🇰🇷",
            LanguageCode::En => "🇺🇸",
            LanguageCode::Zh => "🇨🇳",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        match self {
            LanguageCode::Ko => langid!("ko"),
            LanguageCode::En => langid!("en"),
            LanguageCode::Zh => langid!("zh"),
        }
    }

    fn catalog_path(self) -> String {
        format!("{}/{DOMAIN}.ftl", self.code())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = I18nError;

    /// Only the exact codes `ko`, `en` and `zh` are accepted.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "ko" => Ok(LanguageCode::Ko),
            "en" => Ok(LanguageCode::En),
            "zh" => Ok(LanguageCode::Zh),
            other => Err(I18nError::InvalidLanguage(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    #[error("unsupported language code `{0}` (expected one of: ko, en, zh)")]
    InvalidLanguage(String),
    #[error("no embedded catalog for `{0}`")]
    MissingCatalog(LanguageCode),
    #[error("catalog for `{0}` is not valid UTF-8")]
    Encoding(LanguageCode),
    #[error("catalog for `{lang}` has {count} error(s); first: {first}")]
    Catalog {
        lang: LanguageCode,
        count: usize,
        first: String,
    },
}

/// Immutable per-language dictionaries, built once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationStore {
    dictionaries: HashMap<LanguageCode, Dictionary>,
}

impl TranslationStore {
    /// Build the store from the catalogs embedded in this crate.
    pub fn load() -> Result<Self, I18nError> {
        let mut sources = Vec::with_capacity(LanguageCode::ALL.len());
        for lang in LanguageCode::ALL {
            let file = Localizations::get(&lang.catalog_path())
                .ok_or(I18nError::MissingCatalog(lang))?;
            let text = String::from_utf8(file.data.into_owned())
                .map_err(|_| I18nError::Encoding(lang))?;
            sources.push((lang, text));
        }
        Self::from_sources(sources)
    }

    /// Like [`TranslationStore::load`], but degrades to an empty store (every
    /// lookup returns its key) instead of failing.
    pub fn load_or_empty() -> Self {
        match Self::load() {
            Ok(store) => store,
            Err(err) => {
                warn!(%err, "[i18n] failed loading catalogs; rendering raw keys");
                Self::default()
            }
        }
    }

    /// Build the store from Fluent sources, one per language.
    pub fn from_sources<S>(sources: impl IntoIterator<Item = (LanguageCode, S)>) -> Result<Self, I18nError>
    where
        S: Into<String>,
    {
        let mut dictionaries = HashMap::new();
        for (lang, source) in sources {
            let dictionary = resolve_catalog(lang, source.into())?;
            debug!(lang = %lang, messages = dictionary.len(), "[i18n] catalog loaded");
            dictionaries.insert(lang, dictionary);
        }
        Ok(Self { dictionaries })
    }

    /// Look up `key` in `lang`. Unknown keys (or a language without a
    /// dictionary) yield `key` itself, unchanged.
    pub fn lookup<'a>(&'a self, lang: LanguageCode, key: &'a str) -> &'a str {
        self.dictionaries
            .get(&lang)
            .and_then(|dict| dict.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    pub fn has(&self, lang: LanguageCode, key: &str) -> bool {
        self.dictionaries
            .get(&lang)
            .is_some_and(|dict| dict.contains_key(key))
    }

    /// Message keys defined for `lang`, sorted.
    pub fn keys(&self, lang: LanguageCode) -> impl Iterator<Item = &str> + '_ {
        self.dictionaries
            .get(&lang)
            .into_iter()
            .flat_map(|dict| dict.keys().map(String::as_str))
    }

    /// Languages with a loaded dictionary, in switcher order.
    pub fn languages(&self) -> Vec<LanguageCode> {
        LanguageCode::ALL
            .into_iter()
            .filter(|lang| self.dictionaries.contains_key(lang))
            .collect()
    }
}

/// Parse one Fluent catalog and format each message into a plain string.
fn resolve_catalog(lang: LanguageCode, source: String) -> Result<Dictionary, I18nError> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| I18nError::Catalog {
        lang,
        count: errors.len(),
        first: errors.first().map(|e| e.to_string()).unwrap_or_default(),
    })?;
    let ids = message_ids(&resource);

    let mut bundle = FluentBundle::new(vec![lang.langid()]);
    bundle.set_use_isolating(false);
    bundle.add_resource(resource).map_err(|errors| I18nError::Catalog {
        lang,
        count: errors.len(),
        first: errors.first().map(|e| e.to_string()).unwrap_or_default(),
    })?;

    let mut dictionary = Dictionary::new();
    for id in ids {
        let Some(pattern) = bundle.get_message(&id).and_then(|msg| msg.value()) else {
            continue;
        };
        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if let Some(err) = errors.first() {
            return Err(I18nError::Catalog {
                lang,
                count: errors.len(),
                first: err.to_string(),
            });
        }
        dictionary.insert(id, value.into_owned());
    }
    Ok(dictionary)
}

/// Message identifiers in source order. Terms and comments are not messages.
fn message_ids(resource: &FluentResource) -> Vec<String> {
    resource
        .entries()
        .filter_map(|entry| match entry {
            Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> TranslationStore {
        TranslationStore::load().expect("embedded catalogs parse")
    }

    #[test]
    fn every_language_has_an_embedded_catalog() {
        assert_eq!(embedded().languages(), LanguageCode::ALL.to_vec());
    }

    #[test]
    fn english_hero_title() {
        assert_eq!(
            embedded().lookup(LanguageCode::En, "heroTitle"),
            "Better Today Than Yesterday"
        );
    }

    #[test]
    fn phone_is_language_invariant() {
        let store = embedded();
        assert_eq!(store.lookup(LanguageCode::Zh, "phone"), "02-2088-5358");
        for lang in LanguageCode::ALL {
            assert_eq!(store.lookup(lang, "phone"), "02-2088-5358");
        }
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        let store = embedded();
        for lang in LanguageCode::ALL {
            assert_eq!(store.lookup(lang, "doesNotExist"), "doesNotExist");
            assert!(!store.has(lang, "doesNotExist"));
        }
        assert_eq!(TranslationStore::default().lookup(LanguageCode::Ko, "heroTitle"), "heroTitle");
    }

    #[test]
    fn multiline_messages_keep_line_breaks() {
        let profile = embedded().lookup(LanguageCode::En, "hwangProfile").to_string();
        assert_eq!(profile.lines().count(), 4);
        assert!(profile.starts_with("Graduated from Hongik"));
    }

    #[test]
    fn parses_supported_codes_only() {
        assert_eq!("ko".parse::<LanguageCode>(), Ok(LanguageCode::Ko));
        assert_eq!("zh".parse::<LanguageCode>(), Ok(LanguageCode::Zh));
        assert_eq!(
            "fr".parse::<LanguageCode>(),
            Err(I18nError::InvalidLanguage("fr".into()))
        );
        assert!("EN".parse::<LanguageCode>().is_err());
        assert!("".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn default_language_is_korean() {
        assert_eq!(LanguageCode::default(), LanguageCode::Ko);
    }

    #[test]
    fn broken_catalog_is_reported() {
        let err = TranslationStore::from_sources([(LanguageCode::En, "ok = fine\nbroken = {\n")])
            .expect_err("unterminated placeable");
        assert!(matches!(err, I18nError::Catalog { lang: LanguageCode::En, .. }));
    }

    #[test]
    fn message_ids_skip_comments_and_continuations() {
        let source = "# c\n## group\nfirst = a\nmulti =\n    line one\n    line = two\n-term = x\n";
        let resource = FluentResource::try_new(source.to_string()).expect("valid catalog");
        assert_eq!(message_ids(&resource), vec!["first".to_string(), "multi".to_string()]);
    }

    #[test]
    fn terms_and_attribute_only_messages_stay_out_of_the_dictionary() {
        let store = TranslationStore::from_sources([(
            LanguageCode::En,
            "-brand = Star\ntitle = { -brand } Fencing\nbutton =\n    .aria-label = Open\n",
        )])
        .expect("valid catalog");
        let keys: Vec<&str> = store.keys(LanguageCode::En).collect();
        assert_eq!(keys, vec!["title"]);
        assert_eq!(store.lookup(LanguageCode::En, "title"), "Star Fencing");
    }
}
