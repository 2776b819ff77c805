#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg(feature = "server")]
//! Click handling through the real component wiring.
//!
//! Each test mounts components in a `VirtualDom`, collects the ids of the
//! elements carrying `click` listeners from the initial mutations, fires
//! `click` events at them through the runtime and checks what the callbacks
//! saw and what the page re-renders to.
//!
//! Listener order follows document order: for every card the select button
//! comes first, then the reserve button.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use dioxus::prelude::*;
use dioxus_core::{ElementId, Event, Mutation};
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use parkspot_ui::app::components::{SpotCard, SpotList};
use parkspot_ui::app::model::{ParkingSpot, SpotId};
use parkspot_ui::app::pages::{preview_spots, SpotsPage};

/// Callback invocations recorded by the test harnesses.
#[derive(Clone, Default)]
struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    fn record(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

fn install_event_converter() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter)));
}

/// Build the dom, run the first render and return the click targets in
/// document order.
fn mount(dom: &mut VirtualDom) -> Vec<ElementId> {
    install_event_converter();
    dom.rebuild_to_vec()
        .edits
        .into_iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == "click" => Some(id),
            _ => None,
        })
        .collect()
}

fn click(dom: &mut VirtualDom, target: ElementId) {
    let event = Event::new(
        Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
        true,
    );
    dom.runtime().handle_event("click", event, target);
    dom.render_immediate_to_vec();
}

/// Indexes of the list items whose select control carries the selected modifier.
fn selected_items(html: &str) -> Vec<usize> {
    html.split("class=\"spot-list__item\"")
        .skip(1)
        .enumerate()
        .filter(|(_, item)| item.contains("spot-card__select--selected"))
        .map(|(index, _)| index)
        .collect()
}

#[component]
fn CardHarness() -> Element {
    let log = use_context::<CallLog>();
    let reserve_log = log.clone();

    rsx! {
        SpotCard {
            address: "123 Main St".to_string(),
            lot_name: "Downtown Lot".to_string(),
            price: 5.0,
            selected: false,
            on_select: move |_| log.record("select"),
            on_reserve: move |_| reserve_log.record("reserve"),
        }
    }
}

fn twin_spots() -> Vec<ParkingSpot> {
    ["a1", "b2"]
        .into_iter()
        .map(|id| ParkingSpot {
            id: SpotId::new(id),
            image: None,
            address: "123 Main St".to_string(),
            lot_name: "Downtown Lot".to_string(),
            price: 5.0,
        })
        .collect()
}

#[component]
fn ListHarness() -> Element {
    let log = use_context::<CallLog>();
    let reserve_log = log.clone();

    rsx! {
        SpotList {
            spots: twin_spots(),
            on_select: move |id: SpotId| log.record(format!("select {id}")),
            on_reserve: move |id: SpotId| reserve_log.record(format!("reserve {id}")),
        }
    }
}

#[component]
fn PageHarness() -> Element {
    rsx! {
        SpotsPage { spots: preview_spots() }
    }
}

/// Scenario C: clicking the select control calls `on_select` once and never
/// `on_reserve`.
#[test]
fn scenario_c_select_click_calls_on_select_once() {
    let log = CallLog::default();
    let mut dom = VirtualDom::new(CardHarness).with_root_context(log.clone());
    let targets = mount(&mut dom);
    assert_eq!(targets.len(), 2, "select and reserve controls listen for clicks");

    click(&mut dom, targets[0]);

    assert_eq!(log.entries(), ["select"]);
}

#[test]
fn reserve_click_calls_on_reserve_once_per_click() {
    let log = CallLog::default();
    let mut dom = VirtualDom::new(CardHarness).with_root_context(log.clone());
    let targets = mount(&mut dom);

    click(&mut dom, targets[1]);
    assert_eq!(log.entries(), ["reserve"]);

    click(&mut dom, targets[1]);
    click(&mut dom, targets[0]);
    assert_eq!(log.entries(), ["reserve", "reserve", "select"]);
}

#[test]
fn list_clicks_report_the_id_of_the_clicked_card() {
    let log = CallLog::default();
    let mut dom = VirtualDom::new(ListHarness).with_root_context(log.clone());
    let targets = mount(&mut dom);
    assert_eq!(targets.len(), 4);

    click(&mut dom, targets[2]);
    click(&mut dom, targets[1]);

    assert_eq!(log.entries(), ["select b2", "reserve a1"]);
}

#[test]
fn page_select_click_toggles_the_selected_card() {
    let mut dom = VirtualDom::new(PageHarness);
    let targets = mount(&mut dom);
    assert_eq!(targets.len(), 6);
    assert!(selected_items(&dioxus::ssr::render(&dom)).is_empty());

    click(&mut dom, targets[0]);
    let html = dioxus::ssr::render(&dom);
    assert_eq!(selected_items(&html), [0]);
    assert!(html.contains("aria-pressed=\"true\""));

    click(&mut dom, targets[0]);
    assert!(selected_items(&dioxus::ssr::render(&dom)).is_empty());
}

#[test]
fn page_selecting_another_card_moves_the_selection() {
    let mut dom = VirtualDom::new(PageHarness);
    let targets = mount(&mut dom);

    click(&mut dom, targets[0]);
    click(&mut dom, targets[2]);

    assert_eq!(selected_items(&dioxus::ssr::render(&dom)), [1]);
}

#[test]
fn page_reserve_click_shows_notice_without_selecting() {
    let mut dom = VirtualDom::new(PageHarness);
    let targets = mount(&mut dom);
    assert!(!dioxus::ssr::render(&dom).contains("spots-page__notice"));

    click(&mut dom, targets[5]);

    let html = dioxus::ssr::render(&dom);
    assert!(html.contains("spots-page__notice"));
    assert!(html.contains("Reservation requested for 2 Station Sq"));
    assert!(selected_items(&html).is_empty());
}
