//! Card data model
//!
//! Raw search payloads, the normalized card shape, and the pure functions
//! that turn one into the other.
//!
//! # Overview
//!
//! - [`SearchResponse`] is one page from the search endpoint
//! - [`CardRecord`] is a raw card; every field is optional and a mistyped
//!   field reads as `None`
//! - [`normalize`] flattens a record into a [`NormalizedCard`]
//! - [`RarityFilter`] keeps common, uncommon, rare and mythic cards

mod lenient;
mod normalize;
mod types;

pub use normalize::{
    filter_by_rarity, name_only, normalize, parse_collector_number, shape_record, RarityFilter,
};
pub use types::{
    CardFace, CardRecord, CollectedCard, ImageUris, NormalizedCard, SearchResponse,
};

#[cfg(test)]
mod tests;
