//! Presentational components of the parking front end.
//!
//! Everything in here renders from props alone; state belongs to pages.

pub mod layout;
pub mod navigation_bar;
pub mod spot_card;
pub mod spot_list;

pub use layout::Layout;
pub use navigation_bar::NavigationBar;
pub use spot_card::{SpotCard, SpotControl};
pub use spot_list::SpotList;
