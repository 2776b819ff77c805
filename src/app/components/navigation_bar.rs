//! Bottom navigation bar.

use dioxus::prelude::*;

use crate::app::model::{default_destinations, Destination};

/// Horizontal bar with one icon-over-label entry per destination.
///
/// Renders the five default destinations unless the composing view injects
/// its own list. Entries are keyed by label.
#[component]
pub fn NavigationBar(
    /// Destinations in display order
    #[props(default = default_destinations())]
    destinations: Vec<Destination>,
) -> Element {
    rsx! {
        nav { class: "navigation-bar", "aria-label": "Main",
            for destination in destinations {
                div { key: "{destination.label}", class: "navigation-bar__item",
                    span { class: "navigation-bar__icon", "aria-hidden": "true", "{destination.icon}" }
                    span { class: "navigation-bar__label", "{destination.label}" }
                }
            }
        }
    }
}
