#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::unwrap_used, reason = "integration test, panics are the assertion mechanism")]

use accordion_types::{Card, CardConfig, CardDeck, Indicator, OpenState};

#[test]
fn test_details_card_toggle_scenario() {
    let mut card = Card::new(CardConfig::from_json(r#"{"title": "Details"}"#).unwrap());

    let view = card.render();
    assert_eq!(view.title.as_str(), "Details");
    assert!(!view.content_visible);
    assert_eq!(view.indicator, Indicator::Down);

    card.on_header_activate();
    let view = card.render();
    assert!(view.content_visible);
    assert_eq!(view.indicator, Indicator::Up);

    card.on_header_activate();
    let view = card.render();
    assert!(!view.content_visible);
    assert_eq!(view.indicator, Indicator::Down);
}

#[test]
fn test_visibility_parity_matches_activation_count() {
    for default_open in [false, true] {
        let mut card = Card::new(CardConfig::default().with_default_open(default_open));
        for activations in 1..=6 {
            card.on_header_activate();
            let expected = default_open ^ (activations % 2 == 1);
            assert_eq!(card.render().content_visible, expected);
            assert_eq!(card.state(), OpenState::from(expected));
        }
    }
}

#[test]
fn test_cards_in_a_deck_toggle_independently() {
    let deck = CardDeck::from_json(r#"[{"title": "A"}, {"title": "B", "defaultOpen": true}]"#)
        .unwrap();
    let mut cards: Vec<Card> =
        deck.into_entries().into_iter().map(|entry| Card::new(entry.card)).collect();

    cards[0].on_header_activate();

    assert_eq!(cards[0].state(), OpenState::Expanded);
    assert_eq!(cards[1].state(), OpenState::Expanded);

    cards[1].on_header_activate();
    assert_eq!(cards[0].state(), OpenState::Expanded);
    assert_eq!(cards[1].state(), OpenState::Collapsed);
}

#[test]
fn test_view_serializes_for_snapshots() {
    let view = Card::default().render();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["title"], "Summary");
    assert_eq!(json["state"], "collapsed");
    assert_eq!(json["indicator"], "down");
    assert_eq!(json["contentVisible"], false);
}
