//! `ue-catalog` — the hand-authored tables that seed all procedural data.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`model`]   | `Prefecture`, `City`, `District`, landmark / venue / rail types |
//! | [`data`]    | Static tables for 広島県, 東京都, 大阪府, 福岡県, 山口県     |
//! | [`index`]   | `TouristIndex` — R-tree over tourist landmark coordinates   |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                          |
//!
//! The static tables are built once on first access and shared for the life
//! of the process; generators only ever borrow them.

pub mod data;
pub mod error;
pub mod index;
pub mod model;

#[cfg(test)]
mod tests;

pub use data::{all, by_name};
pub use error::{CatalogError, CatalogResult};
pub use index::TouristIndex;
pub use model::{
    City, CommercialArea, District, LandmarkSite, Prefecture, RailLine, Station, Venue,
};
