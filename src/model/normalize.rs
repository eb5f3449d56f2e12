//! Record normalization and the rarity filter
//!
//! All functions here are pure: same record in, same value out.

use super::types::{CardRecord, CollectedCard, NormalizedCard};
use crate::types::CardShape;
use regex::Regex;
use std::sync::LazyLock;

static RARITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // Unanchored: any rarity containing one of the four names matches
    Regex::new(r"(common|uncommon|rare|mythic)").unwrap()
});

/// Flatten a raw record into a [`NormalizedCard`]
pub fn normalize(record: &CardRecord) -> NormalizedCard {
    let images = record.images();

    NormalizedCard {
        name: record.name.clone(),
        colors: record.colors.clone().unwrap_or_default(),
        mana_cost: record.mana_cost.clone(),
        cmc: record.cmc,
        type_line: record.type_line.clone(),
        oracle_text: record.oracle_text.clone(),
        collector_number: record
            .collector_number
            .as_deref()
            .and_then(parse_collector_number),
        art_crop_uri: images.and_then(|i| i.art_crop.clone()),
        normal_uri: images.and_then(|i| i.normal.clone()),
        large_uri: images.and_then(|i| i.large.clone()),
        png_uri: images.and_then(|i| i.png.clone()),
    }
}

/// The record's name, or an empty string when the API left it out
pub fn name_only(record: &CardRecord) -> String {
    record.name.clone().unwrap_or_default()
}

/// Reshape a record according to `shape`
pub fn shape_record(record: &CardRecord, shape: CardShape) -> CollectedCard {
    match shape {
        CardShape::Names => CollectedCard::Name(name_only(record)),
        CardShape::Normalized => CollectedCard::Card(normalize(record)),
    }
}

/// Parse the leading digits of a collector number
///
/// `"123"` and `"123a"` both give `123`; a number with no leading digit
/// (such as `"★"`) gives `None`.
pub fn parse_collector_number(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Filter that keeps cards of the four regular rarities
#[derive(Debug, Clone, Copy, Default)]
pub struct RarityFilter;

impl RarityFilter {
    /// Create a new rarity filter
    pub fn new() -> Self {
        Self
    }

    /// Whether the record passes; records without a rarity never do
    pub fn accepts(&self, record: &CardRecord) -> bool {
        record
            .rarity
            .as_deref()
            .is_some_and(|rarity| RARITY_REGEX.is_match(rarity))
    }
}

/// Keep records whose rarity passes [`RarityFilter`], normalized
pub fn filter_by_rarity(records: &[CardRecord]) -> Vec<NormalizedCard> {
    let filter = RarityFilter::new();
    records
        .iter()
        .filter(|record| filter.accepts(record))
        .map(normalize)
        .collect()
}
