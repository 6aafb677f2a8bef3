use crate::domain::set::{categorize, SetCategory};
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::Date;
use uuid::Uuid;

const BORDERLESS: &str = "borderless";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Prices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub usd_etched: Option<String>,
}

/// One side of a multi-faced card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Face {
    pub name: String,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub loyalty: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
}

/// One printed version of a card, as delivered by the card-data service.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Printing {
    pub id: Option<Uuid>,
    pub name: String,
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: String,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    #[serde(default)]
    pub rarity: String,
    #[serde(rename = "set", default)]
    pub set_code: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub set_type: String,
    #[serde(default)]
    pub collector_number: String,
    pub released_at: Option<String>,
    pub frame: Option<String>,
    pub border_color: Option<String>,
    pub full_art: Option<bool>,
    #[serde(default)]
    pub prices: Prices,
    #[serde(rename = "tcgplayer_id")]
    pub purchase_id: Option<u64>,
    #[serde(rename = "card_faces", default)]
    pub faces: Vec<Face>,
}

/// A positive decimal, or nothing. Garbage and zero both count as absent.
#[must_use]
pub fn parse_price(raw: Option<&str>) -> Option<f64> {
    let price = raw?.trim().parse::<f64>().ok()?;
    (price.is_finite() && price > 0.0).then_some(price)
}

#[must_use]
pub fn parse_release_date(raw: &str) -> Option<Date> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw.trim(), &format).ok()
}

impl Printing {
    #[must_use]
    pub fn usd(&self) -> Option<f64> {
        parse_price(self.prices.usd.as_deref())
    }

    #[must_use]
    pub fn usd_foil(&self) -> Option<f64> {
        parse_price(self.prices.usd_foil.as_deref())
    }

    #[must_use]
    pub fn usd_etched(&self) -> Option<f64> {
        parse_price(self.prices.usd_etched.as_deref())
    }

    /// Lowest positive price over the non-foil, foil and etched finishes.
    #[must_use]
    pub fn min_price(&self) -> Option<f64> {
        [self.usd(), self.usd_foil(), self.usd_etched()]
            .into_iter()
            .flatten()
            .reduce(f64::min)
    }

    /// [`Printing::min_price`] with unpriced printings at infinity.
    #[must_use]
    pub fn price_key(&self) -> f64 {
        self.min_price().unwrap_or(f64::INFINITY)
    }

    /// The price string to show: non-foil, then etched, then foil.
    #[must_use]
    pub fn display_price(&self) -> Option<&str> {
        [
            self.prices.usd.as_deref(),
            self.prices.usd_etched.as_deref(),
            self.prices.usd_foil.as_deref(),
        ]
        .into_iter()
        .find(|raw| parse_price(*raw).is_some())
        .flatten()
    }

    #[must_use]
    pub fn has_foil(&self) -> bool {
        self.usd_foil().is_some() || self.usd_etched().is_some()
    }

    #[must_use]
    pub fn has_nonfoil(&self) -> bool {
        self.usd().is_some()
    }

    #[must_use]
    pub fn release_date(&self) -> Option<Date> {
        self.released_at.as_deref().and_then(parse_release_date)
    }

    #[must_use]
    pub fn category(&self) -> SetCategory {
        categorize(&self.set_type, Some(&self.set_code))
    }

    #[must_use]
    pub fn matches_frame(&self, frame: &str) -> bool {
        self.frame.as_deref() == Some(frame)
    }

    /// Full-art printings count as borderless.
    #[must_use]
    pub fn matches_border(&self, border: &str) -> bool {
        let exact = self.border_color.as_deref() == Some(border);
        if border == BORDERLESS {
            exact || self.full_art == Some(true)
        } else {
            exact
        }
    }

    #[must_use]
    pub fn is_multi_faced(&self) -> bool {
        self.faces.len() > 1
    }

    #[cfg(test)]
    pub fn from_test(name: &str, set_code: &str, set_type: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            mana_cost: None,
            type_line: String::from("Instant"),
            oracle_text: None,
            power: None,
            toughness: None,
            loyalty: None,
            rarity: String::from("common"),
            set_code: set_code.to_string(),
            set_name: set_code.to_uppercase(),
            set_type: set_type.to_string(),
            collector_number: String::from("1"),
            released_at: None,
            frame: None,
            border_color: None,
            full_art: None,
            prices: Prices::default(),
            purchase_id: None,
            faces: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn priced(mut self, usd: &str) -> Self {
        self.prices.usd = Some(usd.to_string());
        self
    }

    #[cfg(test)]
    pub fn released(mut self, date: &str) -> Self {
        self.released_at = Some(date.to_string());
        self
    }
}
