//! Reusable UI components

mod accordion_card;

pub use accordion_card::AccordionCard;
