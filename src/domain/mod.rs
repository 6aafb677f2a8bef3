pub mod ability;
pub mod card;
pub mod printing;
pub mod query;
pub mod search;
pub mod set;
pub mod symbols;
pub mod utils;
