//! Tests for the card data model

use super::*;
use crate::types::CardShape;
use serde_json::json;
use test_case::test_case;

fn sample_record() -> CardRecord {
    serde_json::from_value(json!({
        "object": "card",
        "name": "Ledger Shredder",
        "colors": ["U"],
        "mana_cost": "{1}{U}",
        "cmc": 2.0,
        "type_line": "Creature — Bird Advisor",
        "oracle_text": "Flying\nWhenever a player casts their second spell each turn, Ledger Shredder connives.",
        "collector_number": "46",
        "rarity": "rare",
        "set": "snc",
        "image_uris": {
            "small": "https://cards.scryfall.io/small/front/a.jpg",
            "normal": "https://cards.scryfall.io/normal/front/a.jpg",
            "large": "https://cards.scryfall.io/large/front/a.jpg",
            "png": "https://cards.scryfall.io/png/front/a.png",
            "art_crop": "https://cards.scryfall.io/art_crop/front/a.jpg"
        }
    }))
    .unwrap()
}

fn with_rarity(rarity: Option<&str>) -> CardRecord {
    CardRecord {
        name: Some(format!("{rarity:?} card")),
        rarity: rarity.map(str::to_string),
        ..CardRecord::default()
    }
}

// ============================================================================
// SearchResponse Tests
// ============================================================================

#[test]
fn test_search_response_parses_page() {
    let page: SearchResponse = serde_json::from_value(json!({
        "object": "list",
        "total_cards": 281,
        "has_more": true,
        "next_page": "https://api.scryfall.com/cards/search?page=2&q=set%3Asnc",
        "data": [{"name": "A"}, {"name": "B"}]
    }))
    .unwrap();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.total_cards, Some(281));
    assert_eq!(
        page.continuation(),
        Some("https://api.scryfall.com/cards/search?page=2&q=set%3Asnc")
    );
}

#[test]
fn test_search_response_requires_data_and_has_more() {
    let missing_data = serde_json::from_value::<SearchResponse>(json!({"has_more": false}));
    assert!(missing_data.is_err());

    let missing_has_more = serde_json::from_value::<SearchResponse>(json!({"data": []}));
    assert!(missing_has_more.is_err());
}

#[test]
fn test_mixed_page_keeps_every_record() {
    let page: SearchResponse = serde_json::from_value(json!({
        "has_more": false,
        "data": [
            {"name": "Ok", "collector_number": "1"},
            {"name": "Numeric", "collector_number": 123},
            {"name": "Odd types", "cmc": "two", "colors": "U", "rarity": 4},
            {"name": 7, "image_uris": "none", "card_faces": {"name": "x"}},
            42
        ]
    }))
    .unwrap();

    assert_eq!(page.data.len(), 5);
    assert_eq!(page.data[0].collector_number.as_deref(), Some("1"));
    assert_eq!(page.data[1].collector_number.as_deref(), Some("123"));

    let odd = &page.data[2];
    assert_eq!(odd.name.as_deref(), Some("Odd types"));
    assert_eq!(odd.cmc, None);
    assert_eq!(odd.colors, None);
    assert_eq!(odd.rarity, None);

    assert_eq!(page.data[3], CardRecord::default());
    assert_eq!(page.data[4], CardRecord::default());
}

#[test]
fn test_numeric_collector_number_normalizes() {
    let record: CardRecord =
        serde_json::from_value(json!({"name": "Numeric", "collector_number": 123})).unwrap();
    assert_eq!(normalize(&record).collector_number, Some(123));
}

#[test]
fn test_mistyped_image_uri_keeps_the_others() {
    let record: CardRecord = serde_json::from_value(json!({
        "image_uris": {"normal": "n.jpg", "png": false}
    }))
    .unwrap();

    let card = normalize(&record);
    assert_eq!(card.normal_uri.as_deref(), Some("n.jpg"));
    assert_eq!(card.png_uri, None);
}

#[test]
fn test_continuation_requires_has_more_and_url() {
    let mut page = SearchResponse {
        data: vec![],
        has_more: false,
        next_page: Some("https://example.com/2".to_string()),
        total_cards: None,
        warnings: None,
    };
    assert_eq!(page.continuation(), None);

    page.has_more = true;
    page.next_page = None;
    assert_eq!(page.continuation(), None);

    page.next_page = Some(String::new());
    assert_eq!(page.continuation(), None);
}

// ============================================================================
// Normalization Tests
// ============================================================================

#[test]
fn test_normalize_flattens_record() {
    let card = normalize(&sample_record());

    assert_eq!(card.name.as_deref(), Some("Ledger Shredder"));
    assert_eq!(card.colors, vec!["U".to_string()]);
    assert_eq!(card.mana_cost.as_deref(), Some("{1}{U}"));
    assert_eq!(card.cmc, Some(2.0));
    assert_eq!(card.collector_number, Some(46));
    assert_eq!(
        card.art_crop_uri.as_deref(),
        Some("https://cards.scryfall.io/art_crop/front/a.jpg")
    );
    assert_eq!(
        card.png_uri.as_deref(),
        Some("https://cards.scryfall.io/png/front/a.png")
    );
}

#[test]
fn test_normalize_collector_number_string_to_integer() {
    let record = CardRecord {
        collector_number: Some("123".to_string()),
        ..CardRecord::default()
    };
    assert_eq!(normalize(&record).collector_number, Some(123));
}

#[test_case("123", Some(123) ; "plain")]
#[test_case("007", Some(7) ; "leading zeros")]
#[test_case("123a", Some(123) ; "variant suffix")]
#[test_case("★", None ; "star only")]
#[test_case("", None ; "empty")]
fn test_parse_collector_number(raw: &str, expected: Option<u32>) {
    assert_eq!(parse_collector_number(raw), expected);
}

#[test]
fn test_normalize_is_pure() {
    let record = sample_record();
    assert_eq!(normalize(&record), normalize(&record));
}

#[test]
fn test_normalize_tolerates_missing_fields() {
    let card = normalize(&CardRecord::default());
    assert_eq!(card, NormalizedCard::default());
}

#[test]
fn test_normalize_uses_first_face_images() {
    let record: CardRecord = serde_json::from_value(json!({
        "name": "Esika, God of the Tree // The Prismatic Bridge",
        "collector_number": "168",
        "card_faces": [
            {"name": "Esika, God of the Tree", "image_uris": {"normal": "front.jpg"}},
            {"name": "The Prismatic Bridge", "image_uris": {"normal": "back.jpg"}}
        ]
    }))
    .unwrap();

    let card = normalize(&record);
    assert_eq!(card.normal_uri.as_deref(), Some("front.jpg"));
    assert_eq!(card.large_uri, None);
}

#[test]
fn test_shape_record() {
    let record = sample_record();

    assert_eq!(
        shape_record(&record, CardShape::Names),
        CollectedCard::Name("Ledger Shredder".to_string())
    );

    let shaped = shape_record(&record, CardShape::Normalized);
    assert!(matches!(shaped, CollectedCard::Card(_)));
    assert_eq!(shaped.name(), Some("Ledger Shredder"));
}

#[test]
fn test_name_only_missing_name_is_empty() {
    assert_eq!(name_only(&CardRecord::default()), "");
}

#[test]
fn test_collected_card_serializes_untagged() {
    let name = serde_json::to_value(CollectedCard::Name("Island".to_string())).unwrap();
    assert_eq!(name, json!("Island"));
}

// ============================================================================
// Rarity Filter Tests
// ============================================================================

#[test_case(Some("common"), true)]
#[test_case(Some("uncommon"), true)]
#[test_case(Some("rare"), true)]
#[test_case(Some("mythic"), true)]
#[test_case(Some("special"), false)]
#[test_case(Some("bonus"), false)]
#[test_case(None, false)]
fn test_rarity_filter_accepts(rarity: Option<&str>, expected: bool) {
    assert_eq!(RarityFilter::new().accepts(&with_rarity(rarity)), expected);
}

#[test]
fn test_filter_by_rarity_excludes_only_special() {
    let records: Vec<CardRecord> = ["common", "uncommon", "rare", "mythic", "special"]
        .into_iter()
        .map(|r| with_rarity(Some(r)))
        .collect();

    let kept = filter_by_rarity(&records);

    assert_eq!(kept.len(), 4);
    assert!(kept
        .iter()
        .all(|card| card.name.as_deref() != Some("Some(\"special\") card")));
}
