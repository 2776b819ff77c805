//! Page components. Pages own state and compose the presentational components.

mod spots;

pub use spots::{preview_spots, SpotsPage};
