//! Accordion Card - Leptos Frontend
//!
//! Client-side demo that mounts a deck of accordion cards.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use accordion_types as _;
use web_sys as _;

use accordion_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Accordion Card (Leptos) starting...");

    mount_to_body(App);
}
