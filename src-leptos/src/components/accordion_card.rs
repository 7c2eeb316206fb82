//! Accordion card: a clickable header over a collapsible content region.
//!
//! State and layout come from [`accordion_types::Card`]; this component only projects its
//! `CardView` into DOM and forwards header activations to it.

use accordion_types::{Card, CardConfig, CardTitle};
use leptos::prelude::*;

const COLLAPSE_OPEN_STYLE: &str = "display: grid; grid-template-rows: 1fr; \
     transition: grid-template-rows 200ms ease, visibility 200ms; visibility: visible;";
const COLLAPSE_CLOSED_STYLE: &str = "display: grid; grid-template-rows: 0fr; \
     transition: grid-template-rows 200ms ease, visibility 200ms; visibility: hidden;";
const HEADER_STYLE: &str =
    "align-items: center; cursor: pointer; display: flex; justify-content: space-between;";

#[component]
pub fn AccordionCard(
    /// Header text, "Summary" when omitted
    #[prop(optional, into)]
    title: Option<String>,
    /// Start expanded
    #[prop(optional)]
    default_open: bool,
    /// Additional CSS class for the container
    #[prop(optional, into)]
    class: Option<String>,
    /// Content of the collapsible region
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let config = CardConfig { title: CardTitle::from_option(title), default_open, class };
    let card = RwSignal::new(Card::new(config));
    let card_view = Memo::new(move |_| card.with(Card::render));

    let activate = move || {
        card.update(|card| {
            let state = card.on_header_activate();
            log::debug!("Accordion card '{}' {}", card.title(), state);
        });
    };

    let visible = move || card_view.with(|view| view.content_visible);

    view! {
        <div class=move || card_view.with(|view| view.container_class.clone())>
            <div
                class="accordion-card__header d-flex flex-row justify-content-between font-weight-medium"
                style=HEADER_STYLE
                role="button"
                tabindex="0"
                aria-expanded=move || aria_bool(visible())
                on:click=move |_| activate()
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if is_activation_key(&ev.key()) {
                        // Space would otherwise scroll the page
                        ev.prevent_default();
                        activate();
                    }
                }
            >
                {move || card_view.with(|view| view.title.to_string())}
                // Not focusable: the header owns keyboard activation and the click bubbles up.
                <button type="button" class="accordion-card__toggle btn btn-sm" tabindex="-1">
                    <span
                        class="accordion-card__icon fs-small me-2 text-muted"
                        data-icon=move || card_view.with(|view| view.indicator.icon_name())
                        data-indicator=move || card_view.with(|view| view.indicator.as_str())
                    >
                        {move || card_view.with(|view| view.indicator.glyph())}
                    </span>
                </button>
            </div>
            <div
                class="accordion-card__collapse"
                style=move || collapse_style(visible())
                aria-hidden=move || aria_bool(!visible())
            >
                <div style="overflow: hidden;">
                    <div class="accordion-card__content mt-2 mb-2">
                        {children.map(|children| children())}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Inline style for the collapse wrapper. Grid rows animate between zero and content height.
fn collapse_style(visible: bool) -> &'static str {
    if visible {
        COLLAPSE_OPEN_STYLE
    } else {
        COLLAPSE_CLOSED_STYLE
    }
}

/// Keys that activate a focused header, matching native button behaviour.
fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

fn aria_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_style_hides_when_closed() {
        assert!(collapse_style(false).contains("grid-template-rows: 0fr"));
        assert!(collapse_style(false).contains("visibility: hidden"));
        assert!(collapse_style(true).contains("grid-template-rows: 1fr"));
        assert!(collapse_style(true).contains("visibility: visible"));
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("ArrowDown"));
    }

    #[test]
    fn test_aria_bool() {
        assert_eq!(aria_bool(true), "true");
        assert_eq!(aria_bool(false), "false");
    }
}
