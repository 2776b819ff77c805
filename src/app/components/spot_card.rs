//! Parking spot card with select and reserve controls.

use dioxus::prelude::*;

/// The two user-facing controls of a spot card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotControl {
    Select,
    Reserve,
}

impl SpotControl {
    /// Accessible name announced for the control.
    pub fn aria_label(self) -> &'static str {
        match self {
            SpotControl::Select => "Select spot",
            SpotControl::Reserve => "Reserve",
        }
    }

    /// Class list for the control. Only the select control reacts to `selected`.
    pub fn class(self, selected: bool) -> &'static str {
        match (self, selected) {
            (SpotControl::Select, true) => "spot-card__select spot-card__select--selected",
            (SpotControl::Select, false) => "spot-card__select",
            (SpotControl::Reserve, _) => "spot-card__reserve",
        }
    }

    /// Run the callback that belongs to this control, and only that one.
    pub fn activate(self, on_select: impl FnOnce(), on_reserve: impl FnOnce()) {
        tracing::trace!(control = ?self, "spot card control activated");
        match self {
            SpotControl::Select => on_select(),
            SpotControl::Reserve => on_reserve(),
        }
    }
}

/// Price label: currency symbol followed by the number as given.
pub fn price_label(price: f64) -> String {
    format!("${price}")
}

/// Summary card for one parking spot.
///
/// Stateless: the select styling follows `selected` and both controls only
/// forward intent to the caller.
#[component]
pub fn SpotCard(
    /// Picture of the spot; the image region stays empty without one
    image: Option<String>,
    address: String,
    lot_name: String,
    price: f64,
    /// Whether the caller considers this spot selected
    selected: bool,
    on_select: EventHandler<()>,
    on_reserve: EventHandler<()>,
) -> Element {
    let price = price_label(price);
    let pressed = if selected { "true" } else { "false" };

    rsx! {
        article { class: "spot-card",
            div { class: "spot-card__image",
                if let Some(src) = image.as_deref() {
                    img { src: "{src}", alt: "{address}" }
                }
            }
            p { class: "spot-card__address", "{address}" }
            p { class: "spot-card__lot", "{lot_name}" }
            span { class: "spot-card__price", "{price}" }
            div { class: "spot-card__actions",
                button {
                    r#type: "button",
                    class: SpotControl::Select.class(selected),
                    "aria-label": SpotControl::Select.aria_label(),
                    "aria-pressed": pressed,
                    onclick: move |_| {
                        SpotControl::Select.activate(|| on_select.call(()), || on_reserve.call(()))
                    },
                    span { "aria-hidden": "true", "✓" }
                }
                button {
                    r#type: "button",
                    class: SpotControl::Reserve.class(selected),
                    "aria-label": SpotControl::Reserve.aria_label(),
                    onclick: move |_| {
                        SpotControl::Reserve.activate(|| on_select.call(()), || on_reserve.call(()))
                    },
                    "Reserve"
                }
            }
        }
    }
}
