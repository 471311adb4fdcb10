//! Process-wide, read-only profile registry.

use std::collections::HashMap;

use numwords_core::{Lang, NumWordsError, NumWordsResult};
use once_cell::sync::Lazy;
use tracing::{debug, error};

use crate::langs::PROFILES;
use crate::profile::GrammarProfile;

static REGISTRY: Lazy<HashMap<Lang, &'static GrammarProfile>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(PROFILES.len());
    for profile in PROFILES {
        if let Err(e) = profile.validate() {
            error!(lang = %profile.lang, "skipping invalid profile: {e}");
            continue;
        }
        map.insert(profile.lang, *profile);
    }
    debug!(profiles = map.len(), "profile registry loaded");
    map
});

/// Profile for a language.
pub fn profile(lang: Lang) -> NumWordsResult<&'static GrammarProfile> {
    REGISTRY
        .get(&lang)
        .copied()
        .ok_or_else(|| NumWordsError::UnknownLanguage(lang.to_string()))
}

/// Registered languages in a stable order.
pub fn languages() -> Vec<Lang> {
    Lang::ALL
        .into_iter()
        .filter(|lang| REGISTRY.contains_key(lang))
        .collect()
}
