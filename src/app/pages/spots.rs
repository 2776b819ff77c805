//! Spots page: the parent view that owns selection and reservation intent.

use dioxus::prelude::*;

use crate::app::components::SpotList;
use crate::app::model::{next_selection, ParkingSpot, SpotId};

/// Spots shown by the preview host when no others are configured.
pub fn preview_spots() -> Vec<ParkingSpot> {
    vec![
        ParkingSpot {
            id: SpotId::new("downtown-a1"),
            image: None,
            address: "123 Main St".to_string(),
            lot_name: "Downtown Lot".to_string(),
            price: 5.0,
        },
        ParkingSpot {
            id: SpotId::new("riverside-12"),
            image: None,
            address: "48 River Rd".to_string(),
            lot_name: "Riverside Garage".to_string(),
            price: 3.5,
        },
        ParkingSpot {
            id: SpotId::new("station-p3"),
            image: None,
            address: "2 Station Sq".to_string(),
            lot_name: "Central Station P3".to_string(),
            price: 8.0,
        },
    ]
}

/// Spot listing with selection and reservation handling.
///
/// Selection toggles per spot. Reserving only records the request and shows a
/// notice; placing the reservation is somebody else's job.
#[component]
pub fn SpotsPage(spots: Vec<ParkingSpot>) -> Element {
    let mut selected = use_signal(|| None::<SpotId>);
    let mut reserved = use_signal(|| None::<SpotId>);

    let notice = reserved()
        .and_then(|id| spots.iter().find(|spot| spot.id == id))
        .map(|spot| format!("Reservation requested for {}", spot.address));

    let on_select = move |id: SpotId| {
        let next = next_selection(selected().as_ref(), &id);
        tracing::debug!(spot = %id, selected = next.is_some(), "spot selection changed");
        selected.set(next);
    };

    let on_reserve = move |id: SpotId| {
        tracing::info!(spot = %id, "reservation requested");
        reserved.set(Some(id));
    };

    rsx! {
        h1 { class: "spots-page__title", "Spots" }
        if let Some(text) = notice {
            p { class: "spots-page__notice", role: "status", "{text}" }
        }
        SpotList {
            spots,
            selected: selected(),
            on_select,
            on_reserve,
        }
    }
}
