use crate::domain::symbols::{annotate, Segment, SizeHint};
use crate::domain::utils::{contains_ignore_case, REGEX_COLLECTION};
use serde::{Deserialize, Serialize};

const SAGA_GATE: &str = "saga";
const PLANESWALKER_GATE: &str = "planeswalker";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityKind {
    Plain,
    Saga,
    Loyalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltySign {
    Plus,
    Minus,
    Zero,
}

impl LoyaltySign {
    fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "+" => LoyaltySign::Plus,
            "−" => LoyaltySign::Minus,
            _ => LoyaltySign::Zero,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            LoyaltySign::Plus => "loyalty-up",
            LoyaltySign::Minus => "loyalty-down",
            LoyaltySign::Zero => "loyalty-zero",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Header {
    Saga { chapters: Vec<u8> },
    Loyalty { sign: LoyaltySign, magnitude: u32 },
}

impl Header {
    /// Glyph ids for the header, e.g. `saga-2`, or `loyalty-up` + `loyalty-3`.
    #[must_use]
    pub fn glyphs(&self) -> Vec<String> {
        match self {
            Header::Saga { chapters } => chapters
                .iter()
                .map(|chapter| format!("saga-{chapter}"))
                .collect(),
            Header::Loyalty { sign, magnitude } => {
                vec![sign.glyph().to_string(), format!("loyalty-{magnitude}")]
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AbilityLine {
    pub header: Option<Header>,
    pub body: Vec<Segment>,
}

impl AbilityLine {
    fn plain(line: &str) -> Self {
        Self {
            header: None,
            body: annotate(line, SizeHint::Inline),
        }
    }

    #[must_use]
    pub fn kind(&self) -> AbilityKind {
        match self.header {
            None => AbilityKind::Plain,
            Some(Header::Saga { .. }) => AbilityKind::Saga,
            Some(Header::Loyalty { .. }) => AbilityKind::Loyalty,
        }
    }

    #[must_use]
    pub fn chapters(&self) -> Option<&[u8]> {
        match &self.header {
            Some(Header::Saga { chapters }) => Some(chapters),
            _ => None,
        }
    }

    #[must_use]
    pub fn loyalty_cost(&self) -> Option<(LoyaltySign, u32)> {
        match self.header {
            Some(Header::Loyalty { sign, magnitude }) => Some((sign, magnitude)),
            _ => None,
        }
    }
}

/// Which header shape a type line allows. Checked in declaration order, so a
/// type line naming both a saga and a planeswalker is read as a saga.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderGate {
    Saga,
    Loyalty,
    None,
}

impl HeaderGate {
    #[must_use]
    pub fn for_type_line(type_line: &str) -> Self {
        if contains_ignore_case(type_line, SAGA_GATE) {
            HeaderGate::Saga
        } else if contains_ignore_case(type_line, PLANESWALKER_GATE) {
            HeaderGate::Loyalty
        } else {
            HeaderGate::None
        }
    }

    /// Strips a leading header the gate allows, returning it with the rest of
    /// the line.
    #[must_use]
    pub fn match_header<'a>(self, line: &'a str) -> Option<(Header, &'a str)> {
        match self {
            HeaderGate::Saga => match_saga(line),
            HeaderGate::Loyalty => match_loyalty(line),
            HeaderGate::None => None,
        }
    }
}

// Anything outside I..VI, including well formed larger numerals, reads as
// chapter 1.
fn chapter_number(numeral: &str) -> u8 {
    match numeral {
        "I" => 1,
        "II" => 2,
        "III" => 3,
        "IV" => 4,
        "V" => 5,
        "VI" => 6,
        _ => 1,
    }
}

fn match_saga(line: &str) -> Option<(Header, &str)> {
    let caps = REGEX_COLLECTION.saga_header.captures(line)?;
    let chapters = REGEX_COLLECTION
        .chapter_separator
        .split(caps.get(1)?.as_str())
        .map(chapter_number)
        .collect();
    Some((Header::Saga { chapters }, caps.get(2)?.as_str()))
}

fn match_loyalty(line: &str) -> Option<(Header, &str)> {
    let caps = REGEX_COLLECTION.loyalty_header.captures(line)?;
    let sign = LoyaltySign::from_prefix(caps.get(1)?.as_str());
    let magnitude = caps.get(2)?.as_str().parse::<u32>().ok()?;
    Some((Header::Loyalty { sign, magnitude }, caps.get(3)?.as_str()))
}

#[must_use]
pub fn classify_line(line: &str, gate: HeaderGate) -> AbilityLine {
    match gate.match_header(line) {
        Some((header, rest)) => AbilityLine {
            header: Some(header),
            body: annotate(rest, SizeHint::Inline),
        },
        None => AbilityLine::plain(line),
    }
}

/// Breaks rules text into trimmed, non-blank lines and classifies each one.
/// Header recognition depends on the type line, never on the text alone.
#[must_use]
pub fn classify(oracle_text: Option<&str>, type_line: &str) -> Vec<AbilityLine> {
    let Some(oracle_text) = oracle_text else {
        return Vec::new();
    };
    let gate = HeaderGate::for_type_line(type_line);

    oracle_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| classify_line(line, gate))
        .collect()
}
