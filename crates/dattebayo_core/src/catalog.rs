//! crates/dattebayo_core/src/catalog.rs
//!
//! The fixed catalog of collections the API serves, and the rules for turning
//! a collection identifier into the tag it is documented under.

use crate::domain::TagInfo;
use std::borrow::Cow;

/// Every collection identifier the API exposes, in documentation order.
pub const COLLECTION_NAMES: &[&str] = &[
    "characters",
    "akatsuki",
    "clans",
    "kara",
    "kekkei-genkai",
    "tailed-beasts",
    "teams",
    "villages",
];

/// Explicit display names. Identifiers missing here fall back to
/// [`capitalize_first`].
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("characters", "Characters"),
    ("akatsuki", "Akatsuki"),
    ("clans", "Clans"),
    ("kara", "Kara"),
    ("kekkei-genkai", "Kekkei Genkai"),
    ("tailed-beasts", "Tailed Beasts"),
    ("teams", "Teams"),
    ("villages", "Villages"),
];

/// The top-level tag list, in the order it is shown.
pub const TAGS: [TagInfo; 8] = [
    TagInfo {
        name: "Characters",
        description: "Naruto characters endpoints",
    },
    TagInfo {
        name: "Akatsuki",
        description: "Akatsuki organization members",
    },
    TagInfo {
        name: "Clans",
        description: "Ninja clans information",
    },
    TagInfo {
        name: "Kara",
        description: "Kara organization members",
    },
    TagInfo {
        name: "Kekkei Genkai",
        description: "Kekkei Genkai abilities",
    },
    TagInfo {
        name: "Tailed Beasts",
        description: "Tailed Beasts information",
    },
    TagInfo {
        name: "Teams",
        description: "Ninja teams information",
    },
    TagInfo {
        name: "Villages",
        description: "Hidden villages information",
    },
];

/// Resolves the tag a collection is documented under.
///
/// Mapped identifiers return their fixed display name; anything else is
/// capitalized with [`capitalize_first`].
pub fn display_name(collection: &str) -> Cow<'static, str> {
    DISPLAY_NAMES
        .iter()
        .find(|(id, _)| *id == collection)
        .map(|(_, name)| Cow::Borrowed(*name))
        .unwrap_or_else(|| Cow::Owned(capitalize_first(collection)))
}

/// Uppercases the first character (ASCII only) and keeps the rest as-is.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
