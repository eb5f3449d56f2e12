//! Card search payload types
//!
//! Raw shapes as the search endpoint returns them, plus the flattened
//! shapes the accumulator stores.

use super::lenient;
use serde::{Deserialize, Serialize};

/// One page of a card search
///
/// `data` and `has_more` are required; a body without them is rejected as
/// malformed before it reaches the accumulator. A bad record inside `data`
/// never rejects the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Cards on this page
    #[serde(deserialize_with = "lenient::records")]
    pub data: Vec<CardRecord>,
    /// Whether another page follows
    pub has_more: bool,
    /// URL of the next page, present when `has_more` is true
    #[serde(default)]
    pub next_page: Option<String>,
    /// Total matches across all pages
    #[serde(default)]
    pub total_cards: Option<u64>,
    /// Non-fatal query warnings from the API
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
}

impl SearchResponse {
    /// The continuation URL, if this page says more results exist
    pub fn continuation(&self) -> Option<&str> {
        if !self.has_more {
            return None;
        }
        self.next_page.as_deref().filter(|url| !url.is_empty())
    }
}

/// Image URIs at the resolutions the search endpoint offers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUris {
    /// 626x457 crop of the art only
    #[serde(deserialize_with = "lenient::or_none")]
    pub art_crop: Option<String>,
    /// 488x680 JPEG
    #[serde(deserialize_with = "lenient::or_none")]
    pub normal: Option<String>,
    /// 672x936 JPEG
    #[serde(deserialize_with = "lenient::or_none")]
    pub large: Option<String>,
    /// 745x1040 PNG
    #[serde(deserialize_with = "lenient::or_none")]
    pub png: Option<String>,
}

/// One face of a multi-faced card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardFace {
    #[serde(deserialize_with = "lenient::or_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub image_uris: Option<ImageUris>,
}

/// A card as returned by the search endpoint
///
/// Every field is optional. Anything the API leaves out, or sends with an
/// unexpected type, stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardRecord {
    #[serde(deserialize_with = "lenient::or_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub colors: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub mana_cost: Option<String>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub cmc: Option<f64>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub type_line: Option<String>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub oracle_text: Option<String>,
    /// Collector number as sent on the wire (e.g. `"123"`, `"123a"`, `"★"`),
    /// with a bare integer kept as its decimal string
    #[serde(deserialize_with = "lenient::number_or_string")]
    pub collector_number: Option<String>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub rarity: Option<String>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub set: Option<String>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub image_uris: Option<ImageUris>,
    #[serde(deserialize_with = "lenient::or_none")]
    pub card_faces: Option<Vec<CardFace>>,
}

impl CardRecord {
    /// Image URIs for this card, falling back to the first face's
    pub fn images(&self) -> Option<&ImageUris> {
        self.image_uris.as_ref().or_else(|| {
            self.card_faces
                .as_ref()
                .and_then(|faces| faces.first())
                .and_then(|face| face.image_uris.as_ref())
        })
    }
}

/// Flattened card with image URIs promoted to the top level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCard {
    pub name: Option<String>,
    pub colors: Vec<String>,
    pub mana_cost: Option<String>,
    pub cmc: Option<f64>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub collector_number: Option<u32>,
    pub art_crop_uri: Option<String>,
    pub normal_uri: Option<String>,
    pub large_uri: Option<String>,
    pub png_uri: Option<String>,
}

/// An entry in the accumulated card list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollectedCard {
    /// Name only
    Name(String),
    /// Full normalized record
    Card(NormalizedCard),
}

impl CollectedCard {
    /// Card name, whichever shape this entry has
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Card(card) => card.name.as_deref(),
        }
    }
}
