//! View-side data shapes shared by the components and the preview host.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Display label, also the list key (must be unique within a bar)
    pub label: String,
    /// Emoji or glyph shown above the label
    pub icon: String,
}

impl Destination {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// The five destinations of the parking front end, in display order.
pub fn default_destinations() -> Vec<Destination> {
    vec![
        Destination::new("Spots", "🅿️"),
        Destination::new("Lots", "🏢"),
        Destination::new("Reservations", "📅"),
        Destination::new("Payments", "💳"),
        Destination::new("Reviews", "⭐"),
    ]
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("navigation destination #{index} has an empty label")]
    EmptyLabel { index: usize },
    #[error("navigation label {label:?} is used more than once")]
    DuplicateLabel { label: String },
}

/// Labels are the list keys of the bar, so they must be present and unique.
pub fn validate_destinations(destinations: &[Destination]) -> Result<(), NavigationError> {
    let mut seen = HashSet::new();
    for (index, destination) in destinations.iter().enumerate() {
        if destination.label.trim().is_empty() {
            return Err(NavigationError::EmptyLabel { index });
        }
        if !seen.insert(destination.label.as_str()) {
            return Err(NavigationError::DuplicateLabel {
                label: destination.label.clone(),
            });
        }
    }
    Ok(())
}

/// Caller-supplied identity of a spot. Only ever used as a list key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(String);

impl SpotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parking spot as handed to the spot list by its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkingSpot {
    pub id: SpotId,
    #[serde(default)]
    pub image: Option<String>,
    pub address: String,
    pub lot_name: String,
    pub price: f64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpotError {
    #[error("spot #{index} has an empty id")]
    EmptyId { index: usize },
    #[error("spot id {id:?} is used more than once")]
    DuplicateId { id: String },
}

/// Spot ids key the cards of a list and decide which card is selected, so
/// they must be present and unique.
pub fn validate_spots(spots: &[ParkingSpot]) -> Result<(), SpotError> {
    let mut seen = HashSet::new();
    for (index, spot) in spots.iter().enumerate() {
        if spot.id.as_str().trim().is_empty() {
            return Err(SpotError::EmptyId { index });
        }
        if !seen.insert(&spot.id) {
            return Err(SpotError::DuplicateId {
                id: spot.id.to_string(),
            });
        }
    }
    Ok(())
}

/// Selection after the select control of `activated` fires.
///
/// Activating the already selected spot clears the selection.
pub fn next_selection(current: Option<&SpotId>, activated: &SpotId) -> Option<SpotId> {
    match current {
        Some(id) if id == activated => None,
        _ => Some(activated.clone()),
    }
}
