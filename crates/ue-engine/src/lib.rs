//! `ue-engine` — the dashboard's application controller.
//!
//! ```text
//!  select(name) ──► PrefectureCache ──miss──► generate_prefecture ──► PrefectureView
//!                        │                         + backend overlay (ue-feed)
//!                        └──hit──────────────────────────────────────────┘
//!
//!  PrefectureView + LayerToggles ──► desired_state ──► Reconciler ──► MapHandle
//!  PrefectureView ──► animator() ──► FlowLoop (ue-flow)
//!  PrefectureView ──► DashboardSummary
//! ```
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`engine`]  | `Engine`, `MapStatus`                                         |
//! | [`view`]    | `LayerId`, `PrefectureView`                                   |
//! | [`cache`]   | `PrefectureCache` — single-entry memo with `invalidate`       |
//! | [`toggles`] | `LayerToggles`, `desired_state`, layer styles                 |
//! | [`summary`] | `DashboardSummary`                                            |
//! | [`error`]   | `EngineError`                                                 |

pub mod cache;
pub mod engine;
pub mod error;
pub mod summary;
pub mod toggles;
pub mod view;


pub use cache::PrefectureCache;
pub use engine::{Engine, MapStatus, RELOAD_HINT};
pub use error::{EngineError, EngineResult};
pub use summary::DashboardSummary;
pub use toggles::{desired_state, source_id, LayerToggles};
pub use view::{LayerId, PrefectureView};
