use crate::domain::ability::{classify, AbilityLine};
use crate::domain::printing::Printing;
use crate::domain::set::SetCategory;
use crate::domain::symbols::{annotate, Segment, SizeHint};
use crate::domain::utils::contains_ignore_case;
use serde::Serialize;
use std::cmp::Ordering;

const UNKNOWN_TYPE: &str = "Unknown Type";

/// Every printing of one card name. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardGroup {
    name: String,
    printings: Vec<Printing>,
    cheapest: usize,
    most_recent: usize,
}

// Strictly-less keeps the earliest printing on ties and when nothing is priced.
fn cheapest_index(printings: &[Printing]) -> usize {
    let mut best = 0;
    let mut lowest = f64::INFINITY;
    for (i, printing) in printings.iter().enumerate() {
        if let Some(price) = printing.min_price() {
            if price < lowest {
                lowest = price;
                best = i;
            }
        }
    }
    best
}

fn most_recent_index(printings: &[Printing]) -> usize {
    let mut best = 0;
    let mut latest = None;
    for (i, printing) in printings.iter().enumerate() {
        if let Some(date) = printing.release_date() {
            if latest.map_or(true, |latest| date > latest) {
                latest = Some(date);
                best = i;
            }
        }
    }
    best
}

impl CardGroup {
    /// `None` when there is nothing to group.
    #[must_use]
    pub fn new(name: String, printings: Vec<Printing>) -> Option<Self> {
        if printings.is_empty() {
            return None;
        }
        let cheapest = cheapest_index(&printings);
        let most_recent = most_recent_index(&printings);
        Some(Self {
            name,
            printings,
            cheapest,
            most_recent,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn printings(&self) -> &[Printing] {
        &self.printings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.printings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.printings.is_empty()
    }

    #[must_use]
    pub fn cheapest_printing(&self) -> &Printing {
        &self.printings[self.cheapest]
    }

    #[must_use]
    pub fn most_recent_printing(&self) -> &Printing {
        &self.printings[self.most_recent]
    }

    /// The printing shown for the card as a whole.
    #[must_use]
    pub fn representative(&self) -> &Printing {
        &self.printings[0]
    }

    #[must_use]
    pub fn contains_category(&self, category: SetCategory) -> bool {
        self.printings
            .iter()
            .any(|printing| printing.category() == category)
    }

    pub fn printings_in(&self, category: SetCategory) -> impl Iterator<Item = &Printing> {
        self.printings
            .iter()
            .filter(move |printing| printing.category() == category)
    }

    /// Keeps the matching printings and rebuilds the derived picks from them.
    #[must_use]
    pub fn retain<F>(self, mut keep: F) -> Option<Self>
    where
        F: FnMut(&Printing) -> bool,
    {
        let printings = self
            .printings
            .into_iter()
            .filter(|printing| keep(printing))
            .collect();
        Self::new(self.name, printings)
    }

    /// Stable reorder. Membership is unchanged, so the derived picks keep
    /// pointing at the same printings.
    pub fn sort_printings_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Printing, &Printing) -> Ordering,
    {
        let mut order: Vec<usize> = (0..self.printings.len()).collect();
        order.sort_by(|&a, &b| compare(&self.printings[a], &self.printings[b]));

        let position = |old: usize| order.iter().position(|&i| i == old).unwrap_or(0);
        let cheapest = position(self.cheapest);
        let most_recent = position(self.most_recent);

        let mut slots: Vec<Option<Printing>> =
            std::mem::take(&mut self.printings).into_iter().map(Some).collect();
        self.printings = order.iter().filter_map(|&i| slots[i].take()).collect();
        self.cheapest = cheapest;
        self.most_recent = most_recent;
    }
}

/// Rules text of one face, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceText {
    pub name: String,
    pub mana_cost: Vec<Segment>,
    pub type_line: String,
    pub abilities: Vec<AbilityLine>,
    pub starting_loyalty: Option<String>,
    pub stats: Option<String>,
}

impl FaceText {
    fn build(
        name: &str,
        mana_cost: Option<&str>,
        type_line: Option<&str>,
        oracle_text: Option<&str>,
        loyalty: Option<&str>,
        power: Option<&str>,
        toughness: Option<&str>,
    ) -> Self {
        let type_line = type_line
            .filter(|type_line| !type_line.is_empty())
            .unwrap_or(UNKNOWN_TYPE);
        let starting_loyalty = loyalty
            .filter(|_| contains_ignore_case(type_line, "planeswalker"))
            .map(str::to_string);
        let stats = (power.is_some() || toughness.is_some()).then(|| {
            format!(
                "{}/{}",
                power.unwrap_or_default(),
                toughness.unwrap_or_default()
            )
        });

        Self {
            name: name.to_string(),
            mana_cost: mana_cost
                .map(|cost| annotate(cost, SizeHint::Title))
                .unwrap_or_default(),
            type_line: type_line.to_string(),
            abilities: classify(oracle_text, type_line),
            starting_loyalty,
            stats,
        }
    }

    /// `loyalty-start` plus the value glyph, when the face starts with loyalty.
    #[must_use]
    pub fn starting_loyalty_glyphs(&self) -> Option<[String; 2]> {
        self.starting_loyalty
            .as_ref()
            .map(|loyalty| ["loyalty-start".to_string(), format!("loyalty-{loyalty}")])
    }
}

/// One [`FaceText`] per face for multi-faced printings, otherwise one for the
/// printing itself.
#[must_use]
pub fn card_text(printing: &Printing) -> Vec<FaceText> {
    if printing.is_multi_faced() {
        return printing
            .faces
            .iter()
            .map(|face| {
                FaceText::build(
                    &face.name,
                    face.mana_cost.as_deref(),
                    face.type_line.as_deref(),
                    face.oracle_text.as_deref(),
                    face.loyalty.as_deref(),
                    face.power.as_deref(),
                    face.toughness.as_deref(),
                )
            })
            .collect();
    }

    vec![FaceText::build(
        &printing.name,
        printing.mana_cost.as_deref(),
        Some(&printing.type_line),
        printing.oracle_text.as_deref(),
        printing.loyalty.as_deref(),
        printing.power.as_deref(),
        printing.toughness.as_deref(),
    )]
}
