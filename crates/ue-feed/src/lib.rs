//! `ue-feed` — optional backend data with local generation as the floor.
//!
//! The backend is never required.  Each layer is fetched once, raced
//! against a timeout; a network error, non-2xx status, malformed body,
//! timeout or a payload that validates down to nothing all end the same
//! way: the local generator runs and the caller is told which path was
//! taken through [`DataOrigin`].
//!
//! ```text
//!  Endpoint ──► DataSource::fetch ──► tokio::time::timeout ──► to_valid_geojson
//!                    │  error / timeout / empty                      │
//!                    └──────────────► fallback() ◄───────────────────┘ (empty)
//! ```
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`endpoint`] | `Endpoint` — the backend paths and their record shapes    |
//! | [`source`]   | `DataSource` trait, `HttpSource`, `MemorySource`, `PendingSource` |
//! | [`fetch`]    | `fetch_with_timeout`, `load_layer`, `load_all`            |
//! | [`error`]    | `FeedError`                                               |

pub mod endpoint;
pub mod error;
pub mod fetch;
pub mod source;


pub use endpoint::Endpoint;
pub use error::{FeedError, FeedResult};
pub use fetch::{fetch_json, fetch_with_timeout, load_all, load_layer, DataOrigin, LayerLoad, LayerRequest};
pub use source::{DataSource, HttpSource, MemorySource, PendingSource};
