//! Built-in grammar profiles.

mod de;
mod en;
mod es;
mod ko;
mod ru;
mod zu;

use crate::profile::GrammarProfile;

/// Every built-in profile, one per [`numwords_core::Lang`].
pub static PROFILES: &[&GrammarProfile] = &[
    &en::EN,
    &en::EN_GB,
    &ru::RU,
    &es::ES,
    &de::DE,
    &ko::KO,
    &zu::ZU,
];
