//! Accordion Card - Leptos Frontend Library

pub mod app;
pub mod components;
