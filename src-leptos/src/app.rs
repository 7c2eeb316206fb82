//! Demo App component: a deck of accordion cards loaded from JSON

use crate::components::AccordionCard;
use accordion_types::{CardDeck, CardDeckEntry};
use leptos::prelude::*;

/// Deck rendered by the demo, embedded at build time.
const DEMO_DECK: &str = include_str!("../cards.json");

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    let deck = match CardDeck::from_json(DEMO_DECK) {
        Ok(deck) => deck,
        Err(err) => {
            log::error!("Failed to load card deck: {err}");
            return view! {
                <main class="app-container">
                    <div class="alert alert--error">
                        <span>{format!("Could not load cards: {err}")}</span>
                    </div>
                </main>
            }
            .into_any();
        }
    };

    log::info!("Loaded {} cards", deck.len());

    view! {
        <main class="app-container">
            <div class="accordion-deck">
                {deck.into_entries().into_iter().map(deck_card).collect_view()}
                // A card with no content at all still toggles an empty region.
                <AccordionCard title="Notes" class="mt-3" />
            </div>
        </main>
    }
    .into_any()
}

fn deck_card(entry: CardDeckEntry) -> impl IntoView {
    let CardDeckEntry { card, body } = entry;

    view! {
        <AccordionCard
            title=card.title.into_inner()
            default_open=card.default_open
            class=card.class.unwrap_or_default()
        >
            <p>{body}</p>
        </AccordionCard>
    }
}
