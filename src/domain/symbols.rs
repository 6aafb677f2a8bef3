use crate::domain::utils::REGEX_COLLECTION;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeHint {
    /// Symbols flowing inside rules text.
    #[default]
    Inline,
    /// Mana cost shown beside a card name.
    Title,
    /// Chapter and loyalty glyphs leading an ability line.
    Header,
}

impl SizeHint {
    #[must_use]
    pub fn em(self) -> f32 {
        match self {
            SizeHint::Inline => 0.85,
            SizeHint::Title => 1.5,
            SizeHint::Header => 1.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    TextRun { text: String },
    SymbolToken { symbol: String, size: SizeHint },
}

impl Segment {
    #[must_use]
    pub fn text(text: &str) -> Self {
        Segment::TextRun {
            text: text.to_string(),
        }
    }

    #[must_use]
    pub fn symbol(code: &str, size: SizeHint) -> Self {
        Segment::SymbolToken {
            symbol: symbol_id(code),
            size,
        }
    }

    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Segment::SymbolToken { .. })
    }
}

/// Maps the inside of a `{...}` group to a glyph id.
#[must_use]
pub fn symbol_id(code: &str) -> String {
    let code = code.to_lowercase();
    let alias = match code.as_str() {
        "t" => "tap",
        "q" => "untap",
        "s" => "snow",
        "e" => "energy",
        "p" => "phyrexian",
        "c" => "colorless",
        _ => return code,
    };
    alias.to_string()
}

/// Splits `text` into plain runs and brace-delimited symbols, in input order.
/// A `{` with no matching `}` stays in the surrounding text run, and text
/// without symbols (the empty string included) is a single run.
#[must_use]
pub fn annotate(text: &str, size: SizeHint) -> Vec<Segment> {
    if text.is_empty() {
        return vec![Segment::text(text)];
    }


    let mut segments = Vec::new();
    let mut last = 0;

    for found in REGEX_COLLECTION.symbols.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::text(&text[last..found.start()]));
        }
        let inner = &found.as_str()[1..found.as_str().len() - 1];
        segments.push(Segment::symbol(inner, size));
        last = found.end();
    }

    if last < text.len() {
        segments.push(Segment::text(&text[last..]));
    }

    segments
}
