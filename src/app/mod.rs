//! Dioxus application: components, pages and the client-side root.
//!
//! The server renders pages through `dioxus::ssr`; the `web` build launches
//! [`App`] in the browser so the controls become interactive.

use dioxus::prelude::*;

pub mod components;
pub mod model;
pub mod pages;

use components::layout::CUSTOM_STYLES;
use components::NavigationBar;
use pages::{preview_spots, SpotsPage};

/// Root component for the client-side build.
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "Spots - Parking" }
        document::Style { {CUSTOM_STYLES} }
        main {
            SpotsPage { spots: preview_spots() }
        }
        NavigationBar {}
    }
}
