//! Parking front end components
//!
//! This library provides:
//! - `NavigationBar`: bottom bar of navigation destinations
//! - `SpotCard`: parking spot summary with select and reserve controls
//! - `SpotList` / `SpotsPage`: the parent view that owns selection state
//! - A server-rendered preview host (feature `server`)

pub mod app;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;
