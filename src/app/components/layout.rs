//! Page shell: document head, main content and the bottom navigation bar.

use dioxus::prelude::*;

use super::navigation_bar::NavigationBar;
use crate::app::model::Destination;

/// Class hooks consumed by the components. Visual design lives elsewhere;
/// this only lays the hooks out.
pub(crate) const CUSTOM_STYLES: &str = r#"
body { margin: 0; padding-bottom: 4.5rem; font-family: system-ui, sans-serif; }
.navigation-bar { position: fixed; bottom: 0; left: 0; right: 0; display: flex; justify-content: space-around; padding: 0.5rem 0; border-top: 1px solid #ddd; background: #fff; }
.navigation-bar__item { display: flex; flex-direction: column; align-items: center; font-size: 0.75rem; }
.navigation-bar__icon { font-size: 1.25rem; }
.spot-list { list-style: none; margin: 0; padding: 1rem; display: grid; gap: 1rem; }
.spot-card { border: 1px solid #ddd; border-radius: 0.5rem; padding: 0.75rem; }
.spot-card__image { height: 8rem; border-radius: 0.25rem; background: #eee; overflow: hidden; }
.spot-card__image img { width: 100%; height: 100%; object-fit: cover; }
.spot-card__price { font-weight: 600; }
.spot-card__actions { display: flex; gap: 0.5rem; margin-top: 0.5rem; }
.spot-card__select--selected { background: #1a7f37; color: #fff; }
.spots-page__notice { margin: 1rem; padding: 0.5rem 0.75rem; border-radius: 0.25rem; background: #eef6ff; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Destinations for the bottom bar
    pub destinations: Vec<Destination>,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - Parking" }
            style { {CUSTOM_STYLES} }
        }
        body {
            main { {props.children} }
            NavigationBar { destinations: props.destinations.clone() }
        }
    }
}
