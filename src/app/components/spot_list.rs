//! Keyed list of spot cards.

use dioxus::prelude::*;

use super::spot_card::SpotCard;
use crate::app::model::{ParkingSpot, SpotId};

/// Renders one card per spot, keyed by the caller-supplied [`SpotId`].
///
/// Card callbacks are mapped to the id of the card that fired them.
#[component]
pub fn SpotList(
    spots: Vec<ParkingSpot>,
    /// Spot currently chosen by the parent, if any
    selected: Option<SpotId>,
    on_select: EventHandler<SpotId>,
    on_reserve: EventHandler<SpotId>,
) -> Element {
    if spots.is_empty() {
        return rsx! {
            p { class: "spot-list__empty", "No spots available." }
        };
    }

    rsx! {
        ul { class: "spot-list",
            {spots.into_iter().map(|spot| {
                let is_selected = selected.as_ref() == Some(&spot.id);
                let select_id = spot.id.clone();
                let reserve_id = spot.id.clone();
                rsx! {
                    li { key: "{spot.id}", class: "spot-list__item",
                        SpotCard {
                            image: spot.image,
                            address: spot.address,
                            lot_name: spot.lot_name,
                            price: spot.price,
                            selected: is_selected,
                            on_select: move |_| on_select.call(select_id.clone()),
                            on_reserve: move |_| on_reserve.call(reserve_id.clone()),
                        }
                    }
                }
            })}
        }
    }
}
