pub mod config;
pub mod domain;

pub use domain::ability::{classify, AbilityKind, AbilityLine, Header, LoyaltySign};
pub use domain::card::{card_text, CardGroup, FaceText};
pub use domain::printing::{Face, Prices, Printing};
pub use domain::query::{parse_bulk_list, CategoryToggles, FilterConfig, FoilRequirement, SortKey};
pub use domain::search::{aggregate, bucket_by_category, CategoryBucket};
pub use domain::set::{available_categories, categorize, SetCategory, SetInfo};
pub use domain::symbols::{annotate, Segment, SizeHint};
