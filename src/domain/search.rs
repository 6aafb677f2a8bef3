use crate::domain::card::CardGroup;
use crate::domain::printing::Printing;
use crate::domain::query::{FilterConfig, SortKey};
use crate::domain::set::SetCategory;
use crate::domain::utils::locale_cmp;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Instant;

pub const DEFAULT_BUCKET_LIMIT: usize = 10;

/// Partitions printings by exact name. Groups come out in the order their
/// first printing arrived, and each keeps its printings in arrival order.
#[must_use]
pub fn group_printings(printings: Vec<Printing>) -> Vec<CardGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<(String, Vec<Printing>)> = Vec::new();

    for printing in printings {
        if let Some(&i) = index.get(&printing.name) {
            buckets[i].1.push(printing);
            continue;
        }
        index.insert(printing.name.clone(), buckets.len());
        buckets.push((printing.name.clone(), vec![printing]));
    }

    buckets
        .into_iter()
        .filter_map(|(name, printings)| CardGroup::new(name, printings))
        .collect()
}

/// Drops filtered-out printings, then any group left with none.
#[must_use]
pub fn filter_groups(groups: Vec<CardGroup>, config: &FilterConfig) -> Vec<CardGroup> {
    groups
        .into_iter()
        .filter(|group| config.accepts_name(group.name()))
        .filter_map(|group| group.retain(|printing| config.accepts(printing)))
        .collect()
}

#[must_use]
pub fn compare_printings(sort: SortKey, a: &Printing, b: &Printing) -> Ordering {
    match sort {
        SortKey::PriceAsc => a.price_key().total_cmp(&b.price_key()),
        SortKey::PriceDesc => b.price_key().total_cmp(&a.price_key()),
        SortKey::Newest => b.release_date().cmp(&a.release_date()),
        SortKey::Oldest => a.release_date().cmp(&b.release_date()),
        SortKey::Alpha => locale_cmp(&a.set_name, &b.set_name),
    }
}

/// Groups rank by their cheapest printing, or by card name for `alpha`.
#[must_use]
pub fn compare_groups(sort: SortKey, a: &CardGroup, b: &CardGroup) -> Ordering {
    match sort {
        SortKey::Alpha => locale_cmp(a.name(), b.name()),
        _ => compare_printings(sort, a.cheapest_printing(), b.cheapest_printing()),
    }
}

pub fn sort_groups(groups: &mut [CardGroup], sort: SortKey) {
    for group in groups.iter_mut() {
        group.sort_printings_by(|a, b| compare_printings(sort, a, b));
    }
    groups.sort_by(|a, b| compare_groups(sort, a, b));
}

/// Group, filter, then sort. Pure: the same input always gives the same
/// output.
#[must_use]
pub fn aggregate(printings: Vec<Printing>, config: &FilterConfig, sort: SortKey) -> Vec<CardGroup> {
    let start = Instant::now();
    let received = printings.len();

    let groups = group_printings(printings);
    log::debug!("Grouped {received} printings into {} cards", groups.len());

    let mut groups = filter_groups(groups, config);
    log::debug!("{} cards left after filtering", groups.len());

    sort_groups(&mut groups, sort);

    log::info!(
        "Aggregated {received} printings sorted by {sort} in {} us",
        start.elapsed().as_micros()
    );
    groups
}

/// The cards shown under one category heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBucket<'a> {
    pub category: SetCategory,
    pub groups: Vec<&'a CardGroup>,
    /// Matching groups before truncation.
    pub total: usize,
    /// Best printing of this category across all matching groups.
    pub top_printing: &'a Printing,
}

/// Per-category views over already sorted groups, in display order.
/// Categories without any matching group are left out.
#[must_use]
pub fn bucket_by_category(
    groups: &[CardGroup],
    sort: SortKey,
    limit: usize,
) -> Vec<CategoryBucket<'_>> {
    SetCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let matching: Vec<&CardGroup> = groups
                .iter()
                .filter(|group| group.contains_category(category))
                .collect();

            let top_printing = matching
                .iter()
                .copied()
                .flat_map(|group| group.printings_in(category))
                .min_by(|a, b| compare_printings(sort, a, b))?;

            Some(CategoryBucket {
                category,
                total: matching.len(),
                groups: matching.into_iter().take(limit).collect(),
                top_printing,
            })
        })
        .collect()
}
