use crate::domain::printing::Printing;
use crate::domain::set::SetCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "oldest")]
    Oldest,
    #[serde(rename = "alpha")]
    Alpha,
}

impl SortKey {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Alpha => "alpha",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort option '{0}'")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "alpha" => Ok(SortKey::Alpha),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoilRequirement {
    /// A positive foil or etched price.
    FoilOnly,
    /// A positive non-foil price.
    NonfoilOnly,
}

impl FoilRequirement {
    #[must_use]
    pub fn matches(self, printing: &Printing) -> bool {
        match self {
            FoilRequirement::FoilOnly => printing.has_foil(),
            FoilRequirement::NonfoilOnly => printing.has_nonfoil(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown foil option '{0}'")]
pub struct ParseFoilRequirementError(String);

impl FromStr for FoilRequirement {
    type Err = ParseFoilRequirementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "foil" => Ok(FoilRequirement::FoilOnly),
            "nonfoil" => Ok(FoilRequirement::NonfoilOnly),
            other => Err(ParseFoilRequirementError(other.to_string())),
        }
    }
}

/// Per-category switches. A category with no entry is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryToggles(BTreeMap<SetCategory, bool>);

impl CategoryToggles {
    /// Enables exactly the given categories.
    #[must_use]
    pub fn only<I: IntoIterator<Item = SetCategory>>(enabled: I) -> Self {
        let mut toggles = Self(
            SetCategory::ALL
                .into_iter()
                .map(|category| (category, false))
                .collect(),
        );
        for category in enabled {
            toggles.enable(category);
        }
        toggles
    }

    pub fn enable(&mut self, category: SetCategory) {
        self.0.insert(category, true);
    }

    pub fn disable(&mut self, category: SetCategory) {
        self.0.insert(category, false);
    }

    pub fn set_all(&mut self, enabled: bool) {
        for category in SetCategory::ALL {
            self.0.insert(category, enabled);
        }
    }

    #[must_use]
    pub fn is_enabled(&self, category: SetCategory) -> bool {
        self.0.get(&category).copied().unwrap_or(true)
    }

    #[must_use]
    pub fn enabled(&self) -> Vec<SetCategory> {
        SetCategory::ALL
            .into_iter()
            .filter(|category| self.is_enabled(*category))
            .collect()
    }
}

/// Printing filters. Every unset field lets everything through; set fields
/// must all hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub categories: CategoryToggles,
    pub frame: Option<String>,
    pub border_color: Option<String>,
    pub foil: Option<FoilRequirement>,
    /// Bulk mode: only this card name is shown.
    pub selected_name: Option<String>,
}

impl FilterConfig {
    #[must_use]
    pub fn accepts(&self, printing: &Printing) -> bool {
        self.categories.is_enabled(printing.category())
            && self
                .frame
                .as_deref()
                .map_or(true, |frame| printing.matches_frame(frame))
            && self
                .border_color
                .as_deref()
                .map_or(true, |border| printing.matches_border(border))
            && self.foil.map_or(true, |foil| foil.matches(printing))
    }

    #[must_use]
    pub fn accepts_name(&self, name: &str) -> bool {
        self.selected_name
            .as_deref()
            .map_or(true, |selected| selected == name)
    }

    #[must_use]
    pub fn with_frame(mut self, frame: &str) -> Self {
        self.frame = Some(frame.to_string());
        self
    }

    #[must_use]
    pub fn with_border(mut self, border: &str) -> Self {
        self.border_color = Some(border.to_string());
        self
    }

    #[must_use]
    pub fn with_foil(mut self, foil: FoilRequirement) -> Self {
        self.foil = Some(foil);
        self
    }

    #[must_use]
    pub fn with_selected(mut self, name: &str) -> Self {
        self.selected_name = Some(name.to_string());
        self
    }
}

/// Card names from a pasted list, one per line.
#[must_use]
pub fn parse_bulk_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_printing() -> Printing {
        Printing::from_test("Counterspell", "mh2", "draft_innovation")
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("price-asc".parse(), Ok(SortKey::PriceAsc));
        assert_eq!("price-desc".parse(), Ok(SortKey::PriceDesc));
        assert_eq!(" newest ".parse(), Ok(SortKey::Newest));
        assert_eq!("oldest".parse(), Ok(SortKey::Oldest));
        assert_eq!("alpha".parse(), Ok(SortKey::Alpha));
        assert!("cheapest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_default_and_display() {
        assert_eq!(SortKey::default(), SortKey::PriceAsc);
        assert_eq!(SortKey::PriceDesc.to_string(), "price-desc");
    }

    #[test]
    fn test_foil_from_str() {
        assert_eq!("foil".parse(), Ok(FoilRequirement::FoilOnly));
        assert_eq!("nonfoil".parse(), Ok(FoilRequirement::NonfoilOnly));
        assert!("etched".parse::<FoilRequirement>().is_err());
    }

    #[test]
    fn test_foil_matches() {
        let mut printing = create_test_printing();
        printing.prices.usd_foil = Some("9.99".to_string());
        assert!(FoilRequirement::FoilOnly.matches(&printing));
        assert!(!FoilRequirement::NonfoilOnly.matches(&printing));

        printing.prices.usd_foil = Some("0".to_string());
        assert!(!FoilRequirement::FoilOnly.matches(&printing));
    }

    #[test]
    fn test_category_toggles_default_enabled() {
        let toggles = CategoryToggles::default();
        assert!(SetCategory::ALL.iter().all(|c| toggles.is_enabled(*c)));
    }

    #[test]
    fn test_category_toggles_only() {
        let toggles = CategoryToggles::only([SetCategory::Masters, SetCategory::Core]);
        assert_eq!(toggles.enabled(), vec![SetCategory::Core, SetCategory::Masters]);
    }

    #[test]
    fn test_category_toggles_disable_and_set_all() {
        let mut toggles = CategoryToggles::default();
        toggles.disable(SetCategory::Other);
        assert!(!toggles.is_enabled(SetCategory::Other));
        assert_eq!(toggles.enabled().len(), 7);

        toggles.set_all(false);
        assert!(toggles.enabled().is_empty());
        toggles.set_all(true);
        assert_eq!(toggles.enabled().len(), 8);
    }

    #[test]
    fn test_empty_config_accepts_everything() {
        let config = FilterConfig::default();
        assert!(config.accepts(&create_test_printing()));
        assert!(config.accepts_name("Anything"));
    }

    #[test]
    fn test_config_category() {
        let mut config = FilterConfig::default();
        config.categories.disable(SetCategory::Expansion);
        assert!(!config.accepts(&create_test_printing()));
    }

    #[test]
    fn test_config_is_conjunctive() {
        let mut printing = create_test_printing();
        printing.frame = Some("2015".to_string());
        printing.border_color = Some("black".to_string());
        printing.prices.usd = Some("1.00".to_string());

        let config = FilterConfig::default()
            .with_frame("2015")
            .with_border("black")
            .with_foil(FoilRequirement::NonfoilOnly);
        assert!(config.accepts(&printing));

        assert!(!config.clone().with_frame("1997").accepts(&printing));
        assert!(!config.clone().with_border("white").accepts(&printing));
        assert!(!config.with_foil(FoilRequirement::FoilOnly).accepts(&printing));
    }

    #[test]
    fn test_config_borderless_accepts_full_art() {
        let mut printing = create_test_printing();
        printing.border_color = Some("black".to_string());
        printing.full_art = Some(true);

        assert!(FilterConfig::default()
            .with_border("borderless")
            .accepts(&printing));
    }

    #[test]
    fn test_config_selected_name() {
        let config = FilterConfig::default().with_selected("Counterspell");
        assert!(config.accepts_name("Counterspell"));
        assert!(!config.accepts_name("counterspell"));
    }

    #[test]
    fn test_parse_bulk_list() {
        let text = "Lightning Bolt\n\n   Counterspell  \r\n\t\nSol Ring";
        assert_eq!(
            parse_bulk_list(text),
            vec!["Lightning Bolt", "Counterspell", "Sol Ring"]
        );
    }

    #[test]
    fn test_parse_bulk_list_empty() {
        assert!(parse_bulk_list("").is_empty());
        assert!(parse_bulk_list("\n \n").is_empty());
    }
}
