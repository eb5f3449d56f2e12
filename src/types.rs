//! Common types used throughout scry-pager
//!
//! Shared enums used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Backoff Type
// ============================================================================

/// Backoff strategy for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Card Shape
// ============================================================================

/// How the accumulator stores each fetched record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardShape {
    /// Only the card name
    Names,
    /// Flattened [`crate::model::NormalizedCard`]
    #[default]
    Normalized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_type_serde() {
        let parsed: BackoffType = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(parsed, BackoffType::Linear);
        assert_eq!(BackoffType::default(), BackoffType::Exponential);
    }

    #[test]
    fn test_card_shape_serde() {
        let parsed: CardShape = serde_json::from_str("\"names\"").unwrap();
        assert_eq!(parsed, CardShape::Names);
        assert_eq!(
            serde_json::to_string(&CardShape::Normalized).unwrap(),
            "\"normalized\""
        );
    }
}
