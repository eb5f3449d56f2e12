//! Card accumulator
//!
//! Append-only list of collected cards, grown once per page. Cards are never
//! deduplicated or reordered.

use crate::model::{shape_record, CardRecord, CollectedCard, RarityFilter};
use crate::types::CardShape;

/// Growing list of every card collected during a run
#[derive(Debug, Clone, Default)]
pub struct CardAccumulator {
    shape: CardShape,
    rarity_filter: Option<RarityFilter>,
    cards: Vec<CollectedCard>,
}

impl CardAccumulator {
    /// Create an accumulator storing cards in `shape`
    pub fn new(shape: CardShape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Only keep cards that pass the rarity filter
    #[must_use]
    pub fn with_rarity_filter(mut self, enabled: bool) -> Self {
        self.rarity_filter = enabled.then(RarityFilter::new);
        self
    }

    /// Merge one page of records, returning how many were appended
    pub fn append_page(&mut self, records: &[CardRecord]) -> usize {
        let before = self.cards.len();
        let shape = self.shape;
        let filter = self.rarity_filter;

        self.cards.extend(
            records
                .iter()
                .filter(|record| filter.map_or(true, |f| f.accepts(record)))
                .map(|record| shape_record(record, shape)),
        );

        self.cards.len() - before
    }

    /// Collected cards in arrival order
    pub fn cards(&self) -> &[CollectedCard] {
        &self.cards
    }

    /// Consume the accumulator, returning the collected cards
    pub fn into_cards(self) -> Vec<CollectedCard> {
        self.cards
    }

    /// Number of collected cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shape cards are stored in
    pub fn shape(&self) -> CardShape {
        self.shape
    }
}
