//! Web UI handlers - server-rendered pages of the parking front end
//!
//! Pages are rendered with Dioxus SSR from the components in `crate::app`.

use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::app::components::Layout;
use crate::app::pages::SpotsPage;

/// Wrap rendered body markup in a full HTML document.
fn html_document(body: &str) -> String {
    format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", body)
}

/// GET / - Spot listing with the bottom navigation bar
pub async fn spots_page(State(state): State<AppState>) -> impl IntoResponse {
    let destinations = state.config.navigation.clone();
    let spots = state.config.preview_spots.clone();
    tracing::debug!(spots = spots.len(), "rendering spots page");

    let html = dioxus::ssr::render_element(rsx! {
        Layout { title: "Spots".to_string(), destinations,
            SpotsPage { spots }
        }
    });
    Html(html_document(&html))
}
