mod translations;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use translations::{EN_TABLE, PL_TABLE};

static EN: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| EN_TABLE.iter().copied().collect());
static PL: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| PL_TABLE.iter().copied().collect());

/// The active display locale. Anything that isn't recognized resolves to the
/// default (`En`) rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Pl,
}

impl Language {
    /// Recognize an explicit language signal. Unsupported values (e.g. `fr`)
    /// are `None` so resolution can fall through to the next source.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("en") {
            Some(Self::En)
        } else if value.eq_ignore_ascii_case("pl") {
            Some(Self::Pl)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pl => "pl",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::En => Self::Pl,
            Self::Pl => Self::En,
        }
    }

    fn table(&self) -> &'static HashMap<&'static str, &'static str> {
        match self {
            Self::En => &EN,
            Self::Pl => &PL,
        }
    }
}

/// Read-only bundle of the URL and locale signals relevant to language
/// resolution. Built fresh from the router on every navigation.
#[derive(Debug, Clone)]
pub struct NavigationContext<'a> {
    query: &'a str,
    locales: &'a [String],
}

impl<'a> NavigationContext<'a> {
    /// `query` may come with or without the leading `?`. `locales` are the
    /// user agent's preferences in priority order.
    pub fn new(query: &'a str, locales: &'a [String]) -> Self {
        Self {
            query: query.strip_prefix('?').unwrap_or(query),
            locales,
        }
    }

    fn lang_param(&self) -> Option<&'a str> {
        self.query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find_map(|(k, v)| (k == "lang").then_some(v))
    }
}

/// Resolve the active language from a navigation context.
///
/// Precedence: explicit `lang=` query parameter, then the first locale
/// preference with a supported primary subtag, then the default. Total over
/// its input domain; malformed queries and locale strings just fall through.
pub fn resolve(ctx: &NavigationContext) -> Language {
    if let Some(lang) = ctx.lang_param().and_then(Language::parse) {
        return lang;
    }
    for locale in ctx.locales {
        let primary = locale.split(['-', '_']).next().unwrap_or(locale);
        if let Some(lang) = Language::parse(primary) {
            return lang;
        }
    }
    Language::default()
}

/// Rewrite `query` so that it carries `lang`, preserving every other
/// parameter. This is how an explicit language choice survives a reload:
/// through the URL, never through hidden storage.
pub fn with_lang_param(query: &str, lang: Language) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut replaced = false;
    let mut pairs = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            if pair == "lang" || pair.starts_with("lang=") {
                replaced = true;
                format!("lang={}", lang.as_str())
            } else {
                pair.to_string()
            }
        })
        .collect::<Vec<_>>();
    if !replaced {
        pairs.push(format!("lang={}", lang.as_str()));
    }
    pairs.join("&")
}

/// Look up `key` for `lang`. A missing key is a content bug, not a runtime
/// fault: the key itself is returned and rendering carries on.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    lang.table().get(key).copied().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(query: &'a str, locales: &'a [String]) -> NavigationContext<'a> {
        NavigationContext::new(query, locales)
    }

    fn locales(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn explicit_query_param_wins() {
        let locs = locales(&["en-US"]);
        assert_eq!(resolve(&ctx("lang=pl", &locs)), Language::Pl);
        assert_eq!(resolve(&ctx("?lang=en", &locs)), Language::En);
        assert_eq!(resolve(&ctx("utm_source=x&lang=pl", &locs)), Language::Pl);
    }

    #[test]
    fn unsupported_query_value_falls_through() {
        let locs = locales(&["pl-PL"]);
        assert_eq!(resolve(&ctx("lang=fr", &locs)), Language::Pl);
        let locs = locales(&["de-DE"]);
        assert_eq!(resolve(&ctx("lang=fr", &locs)), Language::En);
    }

    #[test]
    fn locale_prefix_decides_without_explicit_signal() {
        assert_eq!(resolve(&ctx("", &locales(&["pl"]))), Language::Pl);
        assert_eq!(resolve(&ctx("", &locales(&["PL-pl"]))), Language::Pl);
        assert_eq!(resolve(&ctx("", &locales(&["en-US"]))), Language::En);
        assert_eq!(
            resolve(&ctx("", &locales(&["de-DE", "pl-PL"]))),
            Language::Pl
        );
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(resolve(&ctx("", &[])), Language::En);
        assert_eq!(resolve(&ctx("", &locales(&["fr-FR"]))), Language::En);
        assert_eq!(resolve(&ctx("not=a&lang", &[])), Language::En);
    }

    #[test]
    fn resolve_is_idempotent() {
        let locs = locales(&["pl-PL"]);
        let c = ctx("page=2", &locs);
        assert_eq!(resolve(&c), resolve(&c));
    }

    #[test]
    fn lang_param_survives_reload() {
        // setLanguage durability: rewrite the query, then resolve it again as
        // if the page reloaded with an English browser locale.
        let locs = locales(&["en-US"]);
        let query = with_lang_param("", Language::Pl);
        assert_eq!(resolve(&ctx(&query, &locs)), Language::Pl);
        let query = with_lang_param(&query, Language::En);
        assert_eq!(resolve(&ctx(&query, &locs)), Language::En);
    }

    #[test]
    fn with_lang_param_preserves_other_params() {
        assert_eq!(
            with_lang_param("utm_source=x&lang=en&page=2", Language::Pl),
            "utm_source=x&lang=pl&page=2"
        );
        assert_eq!(with_lang_param("?a=b", Language::Pl), "a=b&lang=pl");
        assert_eq!(with_lang_param("", Language::En), "lang=en");
    }

    #[test]
    fn translate_looks_up_active_table() {
        assert_eq!(translate(Language::En, "nav.about"), "About");
        assert_eq!(translate(Language::Pl, "nav.about"), "O mnie");
        assert_eq!(translate(Language::En, "skills.title"), "Technical Arsenal");
        assert_eq!(translate(Language::Pl, "skills.title"), "Technologie");
    }

    #[test]
    fn translate_echoes_unknown_keys() {
        assert_eq!(translate(Language::En, "no.such.key"), "no.such.key");
        assert_eq!(translate(Language::Pl, "no.such.key"), "no.such.key");
    }

    #[test]
    fn tables_have_identical_key_sets() {
        let mut en_keys = EN_TABLE.iter().map(|(k, _)| *k).collect::<Vec<_>>();
        let mut pl_keys = PL_TABLE.iter().map(|(k, _)| *k).collect::<Vec<_>>();
        en_keys.sort_unstable();
        pl_keys.sort_unstable();
        assert_eq!(en_keys, pl_keys);
    }

    #[test]
    fn tables_have_no_duplicate_keys() {
        for table in [EN_TABLE, PL_TABLE] {
            let mut keys = table.iter().map(|(k, _)| *k).collect::<Vec<_>>();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), table.len());
        }
    }
}
