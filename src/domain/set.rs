use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Codes of cross-franchise products, which always sort into
/// [`SetCategory::UniversesBeyond`] whatever their set type says.
pub static UNIVERSES_BEYOND_CODES: &[&str] = &[
    "40k", "bot", "ltr", "ltc", "who", "rex", "clu", "pip", "acr", "fin", "fca", "fic", "spm",
];

const SECRET_LAIR_CODES: &[&str] = &["sld", "slx"];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SetCategory {
    Core,
    Expansion,
    Masters,
    Commander,
    SecretLair,
    Masterpiece,
    UniversesBeyond,
    Other,
}

impl SetCategory {
    /// Every category in display order.
    pub const ALL: [SetCategory; 8] = [
        SetCategory::Core,
        SetCategory::Expansion,
        SetCategory::Masters,
        SetCategory::Commander,
        SetCategory::SecretLair,
        SetCategory::Masterpiece,
        SetCategory::UniversesBeyond,
        SetCategory::Other,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SetCategory::Core => "core",
            SetCategory::Expansion => "expansion",
            SetCategory::Masters => "masters",
            SetCategory::Commander => "commander",
            SetCategory::SecretLair => "secret_lair",
            SetCategory::Masterpiece => "masterpiece",
            SetCategory::UniversesBeyond => "universes_beyond",
            SetCategory::Other => "other",
        }
    }

    /// Filter label: capitalised id with the underscore turned into a space.
    #[must_use]
    pub fn label(self) -> String {
        let id = self.id().replacen('_', " ", 1);
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for SetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown set category '{0}'")]
pub struct ParseSetCategoryError(String);

impl FromStr for SetCategory {
    type Err = ParseSetCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        SetCategory::ALL
            .into_iter()
            .find(|category| category.id() == id)
            .ok_or_else(|| ParseSetCategoryError(s.to_string()))
    }
}

fn is_universes_beyond(code: &str) -> bool {
    UNIVERSES_BEYOND_CODES.contains(&code)
}

/// First match wins: allow-listed codes, then substrings of the set type.
#[must_use]
pub fn categorize(set_type: &str, set_code: Option<&str>) -> SetCategory {
    let set_type = set_type.to_lowercase();
    let code = set_code.map(str::to_lowercase).unwrap_or_default();

    if is_universes_beyond(&code) {
        SetCategory::UniversesBeyond
    } else if set_type.contains("core") {
        SetCategory::Core
    } else if set_type.contains("expansion")
        || set_type.contains("draft_innovation")
        || set_type.contains("draft innovation")
    {
        SetCategory::Expansion
    } else if set_type.contains("masters") {
        SetCategory::Masters
    } else if set_type.contains("commander") {
        SetCategory::Commander
    } else if set_type.contains("box") {
        SetCategory::SecretLair
    } else if set_type.contains("masterpiece") {
        SetCategory::Masterpiece
    } else {
        SetCategory::Other
    }
}

/// Categorises from the code alone, for when no set type is known.
#[must_use]
pub fn categorize_code(set_code: &str) -> SetCategory {
    let code = set_code.to_lowercase();
    if SECRET_LAIR_CODES.contains(&code.as_str()) {
        SetCategory::SecretLair
    } else if is_universes_beyond(&code) {
        SetCategory::UniversesBeyond
    } else {
        SetCategory::Other
    }
}

/// One row of the upstream set table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SetInfo {
    pub code: String,
    pub name: String,
    pub set_type: String,
    #[serde(default)]
    pub released_at: Option<String>,
}

impl SetInfo {
    #[must_use]
    pub fn new(code: &str, name: &str, set_type: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            set_type: set_type.to_string(),
            released_at: None,
        }
    }

    #[must_use]
    pub fn category(&self) -> SetCategory {
        categorize(&self.set_type, Some(&self.code))
    }
}

/// The distinct categories a set table covers, in display order.
#[must_use]
pub fn available_categories(sets: &[SetInfo]) -> Vec<SetCategory> {
    sets.iter()
        .map(SetInfo::category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_core() {
        assert_eq!(categorize("core", Some("m21")), SetCategory::Core);
    }

    #[test]
    fn test_categorize_expansion_and_draft_innovation() {
        assert_eq!(categorize("expansion", Some("dmu")), SetCategory::Expansion);
        assert_eq!(
            categorize("draft_innovation", Some("mh3")),
            SetCategory::Expansion
        );
        assert_eq!(
            categorize("Draft Innovation", None),
            SetCategory::Expansion
        );
    }

    #[test]
    fn test_categorize_masters_commander_box_masterpiece() {
        assert_eq!(categorize("masters", Some("2xm")), SetCategory::Masters);
        assert_eq!(categorize("commander", Some("c21")), SetCategory::Commander);
        assert_eq!(categorize("box", Some("sld")), SetCategory::SecretLair);
        assert_eq!(categorize("masterpiece", Some("mps")), SetCategory::Masterpiece);
    }

    #[test]
    fn test_categorize_other() {
        assert_eq!(categorize("funny", Some("unf")), SetCategory::Other);
        assert_eq!(categorize("", None), SetCategory::Other);
    }

    #[test]
    fn test_categorize_code_overrides_type() {
        assert_eq!(categorize("expansion", Some("fin")), SetCategory::UniversesBeyond);
        assert_eq!(categorize("commander", Some("PIP")), SetCategory::UniversesBeyond);
    }

    #[test]
    fn test_categorize_type_is_case_insensitive() {
        assert_eq!(categorize("CORE", None), SetCategory::Core);
    }

    #[test]
    fn test_categorize_every_universes_beyond_code() {
        for code in UNIVERSES_BEYOND_CODES {
            assert_eq!(categorize("token", Some(*code)), SetCategory::UniversesBeyond);
        }
    }

    #[test]
    fn test_categorize_code() {
        assert_eq!(categorize_code("SLD"), SetCategory::SecretLair);
        assert_eq!(categorize_code("slx"), SetCategory::SecretLair);
        assert_eq!(categorize_code("ltr"), SetCategory::UniversesBeyond);
        assert_eq!(categorize_code("dmu"), SetCategory::Other);
    }

    #[test]
    fn test_category_order_matches_all() {
        let mut sorted = SetCategory::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, SetCategory::ALL.to_vec());
    }

    #[test]
    fn test_category_label() {
        assert_eq!(SetCategory::Core.label(), "Core");
        assert_eq!(SetCategory::SecretLair.label(), "Secret lair");
        assert_eq!(SetCategory::UniversesBeyond.label(), "Universes beyond");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("secret_lair".parse(), Ok(SetCategory::SecretLair));
        assert_eq!(" Masters ".parse(), Ok(SetCategory::Masters));
        assert!("promo".parse::<SetCategory>().is_err());
    }

    #[test]
    fn test_available_categories_ordered_and_distinct() {
        let sets = vec![
            SetInfo::new("c21", "Commander 2021", "commander"),
            SetInfo::new("m21", "Core Set 2021", "core"),
            SetInfo::new("ltr", "The Lord of the Rings", "expansion"),
            SetInfo::new("m20", "Core Set 2020", "core"),
        ];

        assert_eq!(
            available_categories(&sets),
            vec![
                SetCategory::Core,
                SetCategory::Commander,
                SetCategory::UniversesBeyond
            ]
        );
    }

    #[test]
    fn test_available_categories_empty() {
        assert!(available_categories(&[]).is_empty());
    }
}
